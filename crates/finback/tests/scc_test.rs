use finback::scc;
use finback_graph::DiGraph;
use rustc_hash::{FxHashMap, FxHashSet};

/// 1 -> 2 -> 3 -> 1 feeds 4 -> 5 -> 6 -> 4 which feeds the sink 7.
fn three_scc_graph() -> DiGraph {
    DiGraph::parse("1 2\n2 3\n3 1 4\n4 5\n5 6\n6 4 7\n").unwrap()
}

fn normalize(sccs: Vec<FxHashSet<u32>>) -> Vec<Vec<u32>> {
    let mut out: Vec<Vec<u32>> = sccs
        .into_iter()
        .map(|s| {
            let mut v: Vec<u32> = s.into_iter().collect();
            v.sort_unstable();
            v
        })
        .collect();
    out.sort();
    out
}

#[test]
fn kosaraju_and_both_tarjans_agree() {
    let mut g = three_scc_graph();
    let expected = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]];
    assert_eq!(normalize(scc::kosaraju_sccs(&mut g)), expected);
    assert_eq!(normalize(scc::tarjan_sccs_recursive(&g)), expected);
    assert_eq!(normalize(scc::tarjan_sccs_iterative(&g)), expected);
}

#[test]
fn kosaraju_orders_the_condensation_topologically() {
    let mut g = three_scc_graph();
    let sccs = scc::kosaraju_sccs(&mut g);
    let mut component_of: FxHashMap<u32, usize> = FxHashMap::default();
    for (i, s) in sccs.iter().enumerate() {
        for &v in s {
            component_of.insert(v, i);
        }
    }
    for v in g.vertices() {
        for &w in g.out_neighbors(v) {
            assert!(component_of[&v] <= component_of[&w]);
        }
    }
}

#[test]
fn kosaraju_restores_orientation() {
    let mut g = three_scc_graph();
    let before: Vec<(u32, Vec<u32>)> = {
        let mut s: Vec<_> = g
            .vertices()
            .map(|v| (v, g.out_neighbors(v).to_vec()))
            .collect();
        s.sort();
        s
    };
    let _ = scc::kosaraju_sccs(&mut g);
    let after: Vec<(u32, Vec<u32>)> = {
        let mut s: Vec<_> = g
            .vertices()
            .map(|v| (v, g.out_neighbors(v).to_vec()))
            .collect();
        s.sort();
        s
    };
    assert_eq!(before, after);
}

#[test]
fn iterative_dfs_matches_recursive_visitation_order() {
    let g = DiGraph::parse("1 2 5\n2 3 4\n3\n4\n5 6\n6\n").unwrap();

    let mut rec_pre = Vec::new();
    let mut rec_post = Vec::new();
    let mut done = FxHashSet::default();
    scc::dfs_recursive(
        &g,
        Some(1),
        &mut |v| rec_pre.push(v),
        &mut |v| rec_post.push(v),
        &mut done,
    );

    let mut it_pre = Vec::new();
    let mut it_post = Vec::new();
    let mut done = FxHashSet::default();
    scc::dfs_iterative(
        &g,
        Some(1),
        &mut |v| it_pre.push(v),
        &mut |v| it_post.push(v),
        &mut done,
    );

    assert_eq!(rec_pre, it_pre);
    assert_eq!(rec_post, it_post);
    assert_eq!(rec_pre, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(rec_post, vec![3, 4, 2, 6, 5, 1]);
}

#[test]
fn full_sweep_dfs_forms_match_on_cyclic_graphs() {
    let g = three_scc_graph();

    let mut rec_pre = Vec::new();
    let mut rec_post = Vec::new();
    let mut done = FxHashSet::default();
    scc::dfs_recursive(
        &g,
        None,
        &mut |v| rec_pre.push(v),
        &mut |v| rec_post.push(v),
        &mut done,
    );

    let mut it_pre = Vec::new();
    let mut it_post = Vec::new();
    let mut done = FxHashSet::default();
    scc::dfs_iterative(
        &g,
        None,
        &mut |v| it_pre.push(v),
        &mut |v| it_post.push(v),
        &mut done,
    );

    assert_eq!(rec_pre, it_pre);
    assert_eq!(rec_post, it_post);
}

#[test]
fn shared_done_set_skips_visited_vertices() {
    let g = DiGraph::parse("1 2\n2 3\n").unwrap();
    let mut done = FxHashSet::default();
    let first = scc::dfs_iterative(&g, Some(1), &mut |_| {}, &mut |_| {}, &mut done);
    assert_eq!(first.len(), 3);
    let second = scc::dfs_iterative(&g, Some(2), &mut |_| {}, &mut |_| {}, &mut done);
    assert!(second.is_empty());
}

#[test]
fn topological_order_respects_every_edge() {
    let g = DiGraph::parse("1 2 3\n2 4\n3 4\n4\n").unwrap();
    let order = scc::topological_order(&g);
    assert_eq!(order.len(), 4);
    let pos: FxHashMap<u32, usize> = order.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    for v in g.vertices() {
        for &w in g.out_neighbors(v) {
            assert!(pos[&v] < pos[&w], "edge {v} -> {w} violates the order");
        }
    }
}

#[test]
fn edgeless_graph_yields_singleton_sccs() {
    let mut g = DiGraph::new();
    g.add_arcs(1, &[]).add_arcs(2, &[]).add_arcs(3, &[]);
    let expected = vec![vec![1], vec![2], vec![3]];
    assert_eq!(normalize(scc::kosaraju_sccs(&mut g)), expected);
    assert_eq!(normalize(scc::tarjan_sccs_recursive(&g)), expected);
    assert_eq!(normalize(scc::tarjan_sccs_iterative(&g)), expected);
}

#[test]
fn deep_path_is_stack_safe_iteratively() {
    // A 50k-vertex path would overflow the call stack recursively.
    let mut g = DiGraph::new();
    for v in 0..50_000u32 {
        g.add_arcs(v, &[v + 1]);
    }
    let sccs = scc::tarjan_sccs_iterative(&g);
    assert_eq!(sccs.len(), 50_001);
    let mut done = FxHashSet::default();
    let visited = scc::dfs_iterative(&g, Some(0), &mut |_| {}, &mut |_| {}, &mut done);
    assert_eq!(visited.len(), 50_001);
}
