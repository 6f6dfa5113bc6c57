use spantree::{Graph, MstError};

fn ring_with_chord() -> Graph {
    // 4-cycle plus one chord; unique MST is the three cheapest edges.
    let mut g = Graph::new();
    for i in 0..4 {
        g.add_node(i as f32 * 10.0, 0.0);
    }
    g.connect(0, 1, 1.0).unwrap();
    g.connect(1, 2, 2.0).unwrap();
    g.connect(2, 3, 3.0).unwrap();
    g.connect(3, 0, 4.0).unwrap();
    g.connect(0, 2, 5.0).unwrap();
    g
}

#[test]
fn kruskal_picks_the_cheapest_spanning_edges() {
    let g = ring_with_chord();
    let mst = g.compute_mst().unwrap();
    assert_eq!(mst.edges, vec![0, 1, 2]);
    assert_eq!(mst.total_weight, 6.0);
    assert_eq!(
        mst.edges
            .iter()
            .map(|&e| g.edge_endpoints(e).unwrap())
            .collect::<Vec<_>>(),
        vec![(0, 1), (1, 2), (2, 3)]
    );
}

#[test]
fn empty_graph_has_no_tree() {
    let g = Graph::new();
    assert_eq!(g.compute_mst(), Err(MstError::EmptyGraph));
    assert!(!g.is_connected());
}

#[test]
fn single_node_has_no_tree() {
    let mut g = Graph::new();
    g.add_node(0.0, 0.0);
    assert_eq!(g.compute_mst(), Err(MstError::SingleNode));
    // One node is trivially connected; the tree precondition is separate.
    assert!(g.is_connected());
}

#[test]
fn disjoint_triangles_are_rejected() {
    let mut g = Graph::new();
    for i in 0..6 {
        g.add_node(i as f32 * 10.0, 0.0);
    }
    g.connect(0, 1, 1.0).unwrap();
    g.connect(1, 2, 1.0).unwrap();
    g.connect(2, 0, 1.0).unwrap();
    g.connect(3, 4, 1.0).unwrap();
    g.connect(4, 5, 1.0).unwrap();
    g.connect(5, 3, 1.0).unwrap();
    assert!(!g.is_connected());
    assert_eq!(g.compute_mst(), Err(MstError::Disconnected));
}

#[test]
fn equal_weights_resolve_by_insertion_order() {
    let mut g = Graph::new();
    for i in 0..3 {
        g.add_node(i as f32 * 10.0, 0.0);
    }
    g.connect(0, 1, 1.0).unwrap();
    g.connect(1, 2, 1.0).unwrap();
    g.connect(0, 2, 1.0).unwrap();
    let mst = g.compute_mst().unwrap();
    // All three tie; the stable sort keeps the first two inserted.
    assert_eq!(mst.edges, vec![0, 1]);
    assert_eq!(mst.total_weight, 2.0);
}

#[test]
fn repeated_runs_are_identical_and_mutate_nothing() {
    let g = ring_with_chord();
    let ver = g.version();
    let first = g.compute_mst().unwrap();
    let second = g.compute_mst().unwrap();
    assert_eq!(first, second);
    assert_eq!(g.version(), ver);
    assert!(g.is_connected());
    assert_eq!(g.version(), ver);
}

#[test]
fn edge_count_is_nodes_minus_one() {
    let mut g = Graph::new();
    for i in 0..7 {
        g.add_node(i as f32, i as f32);
    }
    for i in 0..6 {
        g.connect(i, i + 1, (i + 1) as f32).unwrap();
    }
    g.connect(0, 6, 0.5).unwrap();
    g.connect(2, 5, 0.25).unwrap();
    let mst = g.compute_mst().unwrap();
    assert_eq!(mst.edges.len(), 6);
}

#[test]
fn result_records_the_graph_version_it_was_built_against() {
    let mut g = ring_with_chord();
    let mst = g.compute_mst().unwrap();
    assert_eq!(mst.built_ver, g.version());

    // Raising a tree edge's weight reroutes the next computation.
    g.set_weight(1, 10.0).unwrap();
    assert_ne!(mst.built_ver, g.version());
    let rebuilt = g.compute_mst().unwrap();
    assert_eq!(rebuilt.edges, vec![0, 2, 3]);
    assert_eq!(rebuilt.total_weight, 8.0);
}

#[test]
fn connectivity_on_paths_and_stars() {
    let mut g = Graph::new();
    for i in 0..5 {
        g.add_node(i as f32, 0.0);
    }
    assert!(!g.is_connected());
    for i in 1..5 {
        g.connect(0, i, 1.0).unwrap();
    }
    assert!(g.is_connected());
}
