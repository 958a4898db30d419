use field_core::{Adjacency, AdjacencyError, FnAdjacency, TerritoryGraph};

#[test]
fn symmetric_links_are_visible_from_both_sides() {
    let mut graph = TerritoryGraph::new();
    graph.link("alsace", "burgundy");
    graph.link("burgundy", "picardy");

    assert_eq!(graph.neighbors(&"alsace").unwrap(), vec!["burgundy"]);
    assert_eq!(
        graph.neighbors(&"burgundy").unwrap(),
        vec!["alsace", "picardy"]
    );
}

#[test]
fn neighbor_order_is_sorted_not_insertion_order() {
    let mut graph = TerritoryGraph::new();
    graph.link("hub", "zulu");
    graph.link("hub", "alpha");
    graph.link("hub", "mike");

    assert_eq!(
        graph.neighbors(&"hub").unwrap(),
        vec!["alpha", "mike", "zulu"]
    );
}

#[test]
fn permissive_graph_treats_unknowns_as_isolated() {
    let graph: TerritoryGraph<&str> = TerritoryGraph::new();
    assert_eq!(graph.neighbors(&"atlantis").unwrap(), Vec::<&str>::new());
}

#[test]
fn strict_graph_rejects_unknowns() {
    let graph = TerritoryGraph::with_territories(["karelia"]).strict();

    assert_eq!(graph.neighbors(&"karelia").unwrap(), Vec::<&str>::new());
    assert!(matches!(
        graph.neighbors(&"atlantis"),
        Err(AdjacencyError::UnknownTerritory { .. })
    ));
}

#[test]
fn self_edges_are_ignored() {
    let mut graph = TerritoryGraph::new();
    graph.link("ouroboros", "ouroboros");
    graph.link_directed("ouroboros", "ouroboros");

    assert_eq!(
        graph.neighbors(&"ouroboros").unwrap(),
        Vec::<&str>::new()
    );
}

#[test]
fn asymmetric_edges_are_reported() {
    let mut graph = TerritoryGraph::new();
    graph.link("a", "b");
    graph.link_directed("b", "c");

    assert_eq!(graph.asymmetric_edges(), vec![("b", "c")]);
}

#[test]
fn fn_adjacency_delegates_to_the_closure() {
    let ring = FnAdjacency::new(|&t: &u32| vec![(t + 1) % 6, (t + 5) % 6]);
    assert_eq!(ring.neighbors(&0).unwrap(), vec![1, 5]);
    assert_eq!(ring.neighbors(&5).unwrap(), vec![0, 4]);
}
