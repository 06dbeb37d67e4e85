use finback_graph::{GraphError, MultiGraph};

fn square() -> MultiGraph {
    // 1 - 2
    // |   |
    // 4 - 3
    let mut g = MultiGraph::new();
    g.add_edge(1, 2).add_edge(2, 3).add_edge(3, 4).add_edge(4, 1);
    g
}

#[test]
fn parse_counts_each_edge_once() {
    let g = MultiGraph::parse("1 2 4\n2 1 3\n3 2 4\n4 1 3\n").unwrap();
    assert_eq!(g.num_vertices(), 4);
    assert_eq!(g.num_edges(), 4);
    let mut n1 = g.neighbors(1).to_vec();
    n1.sort_unstable();
    assert_eq!(n1, vec![2, 4]);
}

#[test]
fn parse_discards_self_entries() {
    let g = MultiGraph::parse("1 1 2\n2 1\n").unwrap();
    assert_eq!(g.neighbors(1), &[2]);
    assert_eq!(g.num_edges(), 1);
}

#[test]
fn parse_rejects_garbage() {
    let err = MultiGraph::parse("1 2\n2 one\n").unwrap_err();
    assert!(matches!(err, GraphError::Parse { line: 2, .. }));
}

#[test]
fn parse_keeps_parallel_edges() {
    let g = MultiGraph::parse("1 2 2\n2 1 1\n").unwrap();
    assert_eq!(g.neighbors(1), &[2, 2]);
    assert_eq!(g.num_edges(), 2);
}

#[test]
fn contract_edge_updates_counts() {
    let mut g = square();
    g.contract_edge(1, 2).unwrap();
    assert_eq!(g.num_vertices(), 3);
    assert_eq!(g.num_edges(), 3);
    assert!(!g.has_vertex(2));
    // 2's edge to 3 now hangs off 1.
    let mut n1 = g.neighbors(1).to_vec();
    n1.sort_unstable();
    assert_eq!(n1, vec![3, 4]);
    assert!(g.neighbors(3).contains(&1));
}

#[test]
fn contract_edge_removes_all_parallel_copies() {
    let mut g = MultiGraph::new();
    g.add_edge(1, 2).add_edge(1, 2).add_edge(2, 3).add_edge(1, 3);
    g.contract_edge(1, 2).unwrap();
    assert_eq!(g.num_vertices(), 2);
    // Both parallel 1-2 edges vanish; the two edges into 3 survive.
    assert_eq!(g.num_edges(), 2);
    assert_eq!(g.neighbors(1), &[3, 3]);
    assert_eq!(g.neighbors(3), &[1, 1]);
}

#[test]
fn contract_edge_leaves_no_dangling_references() {
    let mut g = square();
    g.contract_edge(3, 4).unwrap();
    for (_, neighbors) in g.adjacency() {
        assert!(!neighbors.contains(&4));
    }
}

#[test]
fn contract_missing_vertex_fails_fast() {
    let mut g = square();
    let err = g.contract_edge(1, 9).unwrap_err();
    assert!(matches!(err, GraphError::MissingVertex(9)));
    let err = g.contract_edge(9, 1).unwrap_err();
    assert!(matches!(err, GraphError::MissingVertex(9)));
}

#[test]
fn clone_is_an_independent_deep_copy() {
    let g = square();
    let mut copy = g.clone();
    copy.contract_edge(1, 2).unwrap();
    assert_eq!(g.num_vertices(), 4);
    assert_eq!(g.num_edges(), 4);
}
