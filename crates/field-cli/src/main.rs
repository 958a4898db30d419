//! Field CLI - build and inspect territory influence maps.
//!
//! - `field diffuse` - build the influence fields of a map file and print values
//! - `field heatmap` - shade territories between two colors by relative value
//! - `field check`   - map-file hygiene (asymmetric edges, bad seeds, dead zones)

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use field_influence::{build_all, InfluenceMap, InfluenceMapSetup};
use field_tools::{map_range, shade, Rgb};

mod mapfile;

use mapfile::MapFile;

const COLD: Rgb = Rgb::new(0, 0, 255);
const HOT: Rgb = Rgb::new(255, 0, 0);

#[derive(Parser)]
#[command(name = "field")]
#[command(about = "Territory influence map toolkit", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build influence fields and print territory values
    Diffuse {
        /// Map definition file (YAML or JSON)
        #[arg(short, long)]
        map: PathBuf,

        /// Only build the named field
        #[arg(long)]
        field: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Shade territories between two colors by relative influence
    Heatmap {
        /// Map definition file (YAML or JSON)
        #[arg(short, long)]
        map: PathBuf,

        /// Field name (defaults to the first field in the file)
        #[arg(long)]
        field: Option<String>,
    },

    /// Validate a map file without printing field values
    Check {
        /// Map definition file (YAML or JSON)
        #[arg(short, long)]
        map: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Diffuse { map, field, json } => diffuse(&map, field.as_deref(), json),
        Commands::Heatmap { map, field } => heatmap(&map, field.as_deref()),
        Commands::Check { map } => check(&map),
    }
}

fn select_setups(
    file: &MapFile,
    field: Option<&str>,
) -> Result<Vec<InfluenceMapSetup<String>>> {
    let mut setups = file.setups();
    if let Some(name) = field {
        setups.retain(|setup| setup.name() == name);
        if setups.is_empty() {
            bail!("no field named {name:?} in the map file");
        }
    }
    Ok(setups)
}

fn diffuse(path: &PathBuf, field: Option<&str>, json: bool) -> Result<()> {
    let file = MapFile::load(path)?;
    let graph = file.graph();
    let setups = select_setups(&file, field)?;

    tracing::info!(fields = setups.len(), territories = graph.len(), "diffusing");
    let maps = build_all(&setups, &graph).context("building influence maps")?;

    if json {
        let out: Vec<_> = maps.iter().map(map_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for map in &maps {
        println!("field {} (rate {})", map.name(), map.diffuse_rate());
        println!("  {:<24} {:>10} {:>9} {:>6}", "territory", "value", "distance", "links");
        for record in map.territories() {
            let distance = record
                .distance()
                .map_or_else(|| "-".to_owned(), |d| d.to_string());
            println!(
                "  {:<24} {:>10} {:>9} {:>6}",
                record.territory(),
                record.value(),
                distance,
                record.link_count()
            );
        }
        println!();
    }
    Ok(())
}

fn map_to_json(map: &InfluenceMap<String>) -> serde_json::Value {
    let territories: serde_json::Map<String, serde_json::Value> = map
        .territories()
        .map(|record| {
            (
                record.territory().clone(),
                serde_json::json!({
                    "value": record.value(),
                    "distance": record.distance(),
                }),
            )
        })
        .collect();
    serde_json::json!({
        "name": map.name(),
        "diffuse_rate": map.diffuse_rate(),
        "territories": territories,
    })
}

fn heatmap(path: &PathBuf, field: Option<&str>) -> Result<()> {
    let file = MapFile::load(path)?;
    let graph = file.graph();
    let setups = select_setups(&file, field)?;
    let setup = &setups[0];

    let map = InfluenceMap::build(setup, &graph).context("building influence map")?;
    let Some(range) = map_range(&map) else {
        bail!("field {:?} discovered no territories", setup.name());
    };

    println!(
        "field {} (values {}..{})",
        map.name(),
        range.min(),
        range.max()
    );
    for record in map.territories() {
        let color = shade(range, record.value(), COLD, HOT);
        println!(
            "  {:<24} {:>10} {}",
            record.territory(),
            record.value(),
            color.hex()
        );
    }
    Ok(())
}

fn check(path: &PathBuf) -> Result<()> {
    let file = MapFile::load(path)?;
    let graph = file.graph();
    let mut problems = Vec::new();

    for (from, to) in graph.asymmetric_edges() {
        let declared = file
            .one_way
            .iter()
            .any(|(a, b)| *a == from && *b == to);
        if !declared {
            problems.push(format!("edge {from} -> {to} has no reverse edge"));
        }
    }

    let mut maps = Vec::new();
    for setup in file.setups() {
        for seed in setup.seed_values().keys() {
            if !graph.contains(seed) {
                problems.push(format!(
                    "field {:?} seeds unknown territory {seed:?}",
                    setup.name()
                ));
            }
        }
        match InfluenceMap::build(&setup, &graph) {
            Ok(map) => maps.push(map),
            Err(err) => problems.push(format!("field {:?}: {err}", setup.name())),
        }
    }

    for territory in graph.territories() {
        if !maps.iter().any(|map| map.contains(territory)) {
            problems.push(format!("territory {territory:?} is reached by no field"));
        }
    }

    if problems.is_empty() {
        println!(
            "ok: {} territories, {} fields",
            graph.len(),
            file.fields.len()
        );
        return Ok(());
    }
    for problem in &problems {
        println!("problem: {problem}");
    }
    bail!("{} problems found", problems.len())
}
