use criterion::{black_box, criterion_group, criterion_main, Criterion};
use field_core::TerritoryGraph;
use field_influence::{InfluenceMap, InfluenceMapSetup};

fn grid_graph(width: u32, height: u32) -> TerritoryGraph<u32> {
    let mut graph = TerritoryGraph::new();
    for y in 0..height {
        for x in 0..width {
            let id = y * width + x;
            if x + 1 < width {
                graph.link(id, id + 1);
            }
            if y + 1 < height {
                graph.link(id, id + width);
            }
        }
    }
    graph
}

fn bench_diffusion(c: &mut Criterion) {
    let graph = grid_graph(64, 64);
    let center = 32 * 64 + 32;
    let corners = [0u32, 63, 63 * 64, 64 * 64 - 1];

    let mut group = c.benchmark_group("field-influence/diffusion");

    group.bench_function("single_seed_64x64", |b| {
        let setup = InfluenceMapSetup::new("bench", 0.5).seed(center, 1_000_000);
        b.iter(|| {
            let map = InfluenceMap::build(&setup, &graph).expect("build");
            black_box(map.len());
        })
    });

    group.bench_function("four_corner_seeds_64x64", |b| {
        let setup = InfluenceMapSetup::new("bench", 0.5)
            .seeds(corners.iter().map(|&c| (c, 1_000_000)));
        b.iter(|| {
            let map = InfluenceMap::build(&setup, &graph).expect("build");
            black_box(map.len());
        })
    });

    group.bench_function("flood_rate_one_64x64", |b| {
        let setup = InfluenceMapSetup::new("bench", 1.0).seed(center, 100);
        b.iter(|| {
            let map = InfluenceMap::build(&setup, &graph).expect("build");
            black_box(map.len());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_diffusion);
criterion_main!(benches);
