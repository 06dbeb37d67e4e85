//! Depth-first traversal and strongly connected components.
//!
//! Both DFS and Tarjan come in recursive and iterative forms. The recursive
//! forms recurse as deep as the graph, so the iterative ones simulate the
//! call stack explicitly with sentinel post-markers and are the safe choice
//! on deep or skewed graphs. The iterative DFS reproduces the recursive
//! form's exact pre-order and post-order sequences.
//!
//! There are no error paths here: a disconnected or edgeless graph simply
//! yields one singleton SCC per vertex.

use finback_graph::DiGraph;
use rustc_hash::{FxHashMap, FxHashSet};

/// Recursive depth-first search.
///
/// Starts from `source`, or sweeps every vertex when `source` is `None`.
/// `pre` and `post` are invoked on each vertex in visitation and completion
/// order; pass `&mut |_| {}` when unused. Vertices already in the shared
/// `done` set are skipped, so repeated calls can cover a graph one component
/// at a time. Returns the set of vertices visited by this call.
pub fn dfs_recursive<Pre, Post>(
    g: &DiGraph,
    source: Option<u32>,
    pre: &mut Pre,
    post: &mut Post,
    done: &mut FxHashSet<u32>,
) -> FxHashSet<u32>
where
    Pre: FnMut(u32),
    Post: FnMut(u32),
{
    let mut visited = FxHashSet::default();
    let roots: Vec<u32> = match source {
        Some(s) => vec![s],
        None => g.vertices().collect(),
    };
    for v in roots {
        if !done.contains(&v) {
            dfs_inner(g, v, pre, post, done, &mut visited);
        }
    }
    visited
}

fn dfs_inner<Pre, Post>(
    g: &DiGraph,
    v: u32,
    pre: &mut Pre,
    post: &mut Post,
    done: &mut FxHashSet<u32>,
    visited: &mut FxHashSet<u32>,
) where
    Pre: FnMut(u32),
    Post: FnMut(u32),
{
    pre(v);
    done.insert(v);
    visited.insert(v);
    for &w in g.out_neighbors(v) {
        if !done.contains(&w) {
            dfs_inner(g, w, pre, post, done, visited);
        }
    }
    post(v);
}

/// Iterative depth-first search; parameters and result match
/// [`dfs_recursive`], including the exact pre/post visitation order.
pub fn dfs_iterative<Pre, Post>(
    g: &DiGraph,
    source: Option<u32>,
    pre: &mut Pre,
    post: &mut Post,
    done: &mut FxHashSet<u32>,
) -> FxHashSet<u32>
where
    Pre: FnMut(u32),
    Post: FnMut(u32),
{
    let mut visited = FxHashSet::default();
    let roots: Vec<u32> = match source {
        Some(s) => vec![s],
        None => g.vertices().collect(),
    };
    // `None` marks "all children of the frame below are finished".
    let mut stack: Vec<Option<u32>> = Vec::new();
    for src in roots {
        if done.contains(&src) {
            continue;
        }
        pre(src);
        done.insert(src);
        visited.insert(src);
        stack.clear();
        stack.push(Some(src));
        stack.push(None);
        push_children(g, src, &mut stack);
        while let Some(entry) = stack.pop() {
            let Some(v) = entry else {
                // Post marker: the vertex below it is complete.
                let Some(Some(v)) = stack.pop() else {
                    debug_assert!(false, "dfs post marker without owner");
                    continue;
                };
                post(v);
                continue;
            };
            if done.contains(&v) {
                continue;
            }
            pre(v);
            done.insert(v);
            visited.insert(v);
            stack.push(Some(v));
            stack.push(None);
            push_children(g, v, &mut stack);
        }
    }
    visited
}

fn push_children(g: &DiGraph, v: u32, stack: &mut Vec<Option<u32>>) {
    // Reversed so pop order matches the recursive visitation order.
    for &w in g.out_neighbors(v).iter().rev() {
        stack.push(Some(w));
    }
}

/// Vertices in reverse order of DFS completion.
///
/// A true topological order only on a DAG; on a general digraph it is the
/// reverse-post-order Kosaraju's first pass needs.
pub fn topological_order(g: &DiGraph) -> Vec<u32> {
    let mut order = Vec::with_capacity(g.num_vertices());
    let mut done = FxHashSet::default();
    dfs_iterative(g, None, &mut |_| {}, &mut |v| order.push(v), &mut done);
    order.reverse();
    order
}

/// Kosaraju's two-pass SCC algorithm.
///
/// Computes reverse-post-order, flips the graph, and sweeps DFS in that
/// order; each sweep's visited set is one SCC. The orientation is restored
/// before returning, and the SCC list comes out in topological order of the
/// condensation.
pub fn kosaraju_sccs(g: &mut DiGraph) -> Vec<FxHashSet<u32>> {
    let order = topological_order(g);
    let mut done = FxHashSet::default();
    let mut sccs = Vec::new();
    g.reverse();
    for v in order {
        if done.contains(&v) {
            continue;
        }
        let scc = dfs_iterative(g, Some(v), &mut |_| {}, &mut |_| {}, &mut done);
        sccs.push(scc);
    }
    g.reverse();
    sccs
}

#[derive(Debug, Clone, Copy)]
struct DfsInfo {
    on_stack: bool,
    index: usize,
    low_link: usize,
}

/// Tarjan's single-pass SCC algorithm, recursive form.
pub fn tarjan_sccs_recursive(g: &DiGraph) -> Vec<FxHashSet<u32>> {
    let mut sccs = Vec::new();
    let mut scc_stack: Vec<u32> = Vec::new();
    let mut info: FxHashMap<u32, DfsInfo> = FxHashMap::default();
    for v in g.vertices() {
        if !info.contains_key(&v) {
            strongconnect(g, v, &mut info, &mut scc_stack, &mut sccs);
        }
    }
    sccs
}

fn strongconnect(
    g: &DiGraph,
    v: u32,
    info: &mut FxHashMap<u32, DfsInfo>,
    scc_stack: &mut Vec<u32>,
    sccs: &mut Vec<FxHashSet<u32>>,
) {
    let index = info.len();
    info.insert(
        v,
        DfsInfo {
            on_stack: true,
            index,
            low_link: index,
        },
    );
    scc_stack.push(v);

    for &w in g.out_neighbors(v) {
        match info.get(&w).copied() {
            None => {
                strongconnect(g, w, info, scc_stack, sccs);
                let w_low = info[&w].low_link;
                let v_info = info.get_mut(&v).expect("tarjan info missing for visited vertex");
                v_info.low_link = v_info.low_link.min(w_low);
            }
            // v -> w is a back-edge into the current SCC stack.
            Some(w_info) if w_info.on_stack => {
                let v_info = info.get_mut(&v).expect("tarjan info missing for visited vertex");
                v_info.low_link = v_info.low_link.min(w_info.index);
            }
            Some(_) => {}
        }
    }

    let v_info = info[&v];
    if v_info.low_link == v_info.index {
        sccs.push(extract_scc(v, scc_stack, info));
    }
}

/// Tarjan's single-pass SCC algorithm, iterative form.
///
/// Simulates the recursion with an explicit work stack and sentinel post
/// markers; when a child's frame finishes, its low-link is propagated back to
/// the parent frame exactly as the recursive form does on return.
pub fn tarjan_sccs_iterative(g: &DiGraph) -> Vec<FxHashSet<u32>> {
    let mut sccs = Vec::new();
    let mut scc_stack: Vec<u32> = Vec::new();
    let mut info: FxHashMap<u32, DfsInfo> = FxHashMap::default();
    // Frames are `(parent, vertex)`; `None` marks "the frame below is done".
    let mut dfs_stack: Vec<Option<(Option<u32>, u32)>> = Vec::new();

    for root in g.vertices() {
        if info.contains_key(&root) {
            continue;
        }
        dfs_stack.clear();
        dfs_stack.push(Some((None, root)));
        while let Some(entry) = dfs_stack.pop() {
            let Some((parent, v)) = entry else {
                let Some(Some((parent, v))) = dfs_stack.pop() else {
                    debug_assert!(false, "tarjan post marker without frame");
                    continue;
                };
                let v_info = info[&v];
                if v_info.low_link == v_info.index {
                    sccs.push(extract_scc(v, &mut scc_stack, &mut info));
                }
                if let Some(p) = parent {
                    let p_info = info.get_mut(&p).expect("tarjan info missing for parent");
                    p_info.low_link = p_info.low_link.min(v_info.low_link);
                }
                continue;
            };
            if let Some(v_info) = info.get(&v).copied() {
                // Already visited; parent -> v is a back-edge only while v is
                // still on the SCC stack.
                if v_info.on_stack {
                    if let Some(p) = parent {
                        let p_info = info.get_mut(&p).expect("tarjan info missing for parent");
                        p_info.low_link = p_info.low_link.min(v_info.index);
                    }
                }
                continue;
            }
            let index = info.len();
            info.insert(
                v,
                DfsInfo {
                    on_stack: true,
                    index,
                    low_link: index,
                },
            );
            scc_stack.push(v);
            dfs_stack.push(Some((parent, v)));
            dfs_stack.push(None);
            for &w in g.out_neighbors(v).iter().rev() {
                dfs_stack.push(Some((Some(v), w)));
            }
        }
    }
    sccs
}

/// Pops vertices off the SCC stack down to and including `root`.
fn extract_scc(
    root: u32,
    scc_stack: &mut Vec<u32>,
    info: &mut FxHashMap<u32, DfsInfo>,
) -> FxHashSet<u32> {
    let mut scc = FxHashSet::default();
    while let Some(s) = scc_stack.pop() {
        if let Some(i) = info.get_mut(&s) {
            i.on_stack = false;
        }
        scc.insert(s);
        if s == root {
            break;
        }
    }
    scc
}
