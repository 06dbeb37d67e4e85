//! Single-source and all-pairs shortest paths over weighted digraphs.
//!
//! Distances are `Option<Cost>` slots indexed by vertex label (slot 0 is
//! unused for 1-labeled graphs); `None` means unreached. Bellman-Ford,
//! Floyd-Warshall, and transitively Johnson report negative-cost cycles as
//! [`Error::NegativeCycle`] rather than returning distances that would be
//! unbounded below.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use finback_graph::{Cost, GraphError, WeightedDiGraph};
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};

pub type Distances = Vec<Option<Cost>>;

/// Dijkstra's algorithm from `src`.
///
/// The frontier is a min-heap of `(distance, vertex)` entries; stale entries
/// for already-settled vertices are discarded lazily on pop rather than
/// removed eagerly. Once settled, a vertex's distance is final.
///
/// Edge costs must be non-negative; this is checked up front and violations
/// return [`Error::NegativeEdge`].
pub fn dijkstra(g: &WeightedDiGraph, src: usize) -> Result<Distances> {
    if !g.contains_vertex(src) {
        return Err(Error::Graph(GraphError::MissingVertex(src)));
    }
    if let Some(e) = g.edges().iter().find(|e| e.cost < 0) {
        return Err(Error::NegativeEdge {
            src: e.src,
            dest: e.dest,
            cost: e.cost,
        });
    }

    let mut distances: Distances = vec![None; g.vertex_bound()];
    let mut explored: FxHashSet<usize> = FxHashSet::default();
    let mut frontier: BinaryHeap<Reverse<(Cost, usize)>> = BinaryHeap::new();
    frontier.push(Reverse((0, src)));
    while let Some(Reverse((dist, v))) = frontier.pop() {
        if !explored.insert(v) {
            continue;
        }
        distances[v] = Some(dist);
        for n in g.out_neighbors(v) {
            if !explored.contains(&n.vertex) {
                frontier.push(Reverse((dist + n.cost, n.vertex)));
            }
        }
    }
    Ok(distances)
}

/// Bellman-Ford from `src`, handling negative edge costs.
///
/// Relaxes every edge up to `num_vertices - 1` times, stopping early once a
/// full pass changes nothing. One extra verification pass follows: any
/// remaining slack means a negative-cost cycle is reachable from `src`.
pub fn bellman_ford(g: &WeightedDiGraph, src: usize) -> Result<Distances> {
    if !g.contains_vertex(src) {
        return Err(Error::Graph(GraphError::MissingVertex(src)));
    }
    let mut distances: Distances = vec![None; g.vertex_bound()];
    distances[src] = Some(0);

    for _pass in 1..g.num_vertices() {
        let mut reached_fixed_point = true;
        for e in g.edges() {
            let Some(du) = distances[e.src] else {
                continue;
            };
            let candidate = du + e.cost;
            if distances[e.dest].is_none_or(|dv| candidate < dv) {
                distances[e.dest] = Some(candidate);
                reached_fixed_point = false;
            }
        }
        if reached_fixed_point {
            break;
        }
    }

    for e in g.edges() {
        let Some(du) = distances[e.src] else {
            continue;
        };
        if distances[e.dest].is_none_or(|dv| du + e.cost < dv) {
            return Err(Error::NegativeCycle {
                detail: format!("involving vertices {} and {}", e.src, e.dest),
            });
        }
    }
    Ok(distances)
}

/// Floyd-Warshall all-pairs shortest distances.
///
/// Returns a `(num_vertices + 1) x (num_vertices + 1)` table indexed by
/// vertex label (row and column 0 unused). Requires contiguous `1..=N`
/// labels since the table is label-indexed. A negative self-distance after
/// the DP signals a negative-cost cycle through that vertex.
pub fn floyd_warshall(g: &WeightedDiGraph) -> Result<Vec<Distances>> {
    g.validate_contiguous()?;
    let n = g.num_vertices();
    let mut d: Vec<Distances> = vec![vec![None; n + 1]; n + 1];
    for e in g.edges() {
        d[e.src][e.dest] = Some(e.cost);
    }
    for v in 1..=n {
        d[v][v] = Some(0);
    }

    for k in 1..=n {
        for src in 1..=n {
            for dest in 1..=n {
                let (Some(a), Some(b)) = (d[src][k], d[k][dest]) else {
                    continue;
                };
                let candidate = a + b;
                if d[src][dest].is_none_or(|cur| candidate < cur) {
                    d[src][dest] = Some(candidate);
                }
            }
        }
    }

    for v in 1..=n {
        if d[v][v].is_some_and(|c| c < 0) {
            return Err(Error::NegativeCycle {
                detail: format!("involving vertex {v}"),
            });
        }
    }
    Ok(d)
}

/// Johnson's all-pairs shortest distances: one Bellman-Ford run plus one
/// Dijkstra run per vertex, handling negative edge costs on sparse graphs.
///
/// Requires vertices labeled contiguously `1..=N` (hard precondition). The
/// input graph is never mutated: the temporary source and the re-weighted
/// edges live on clones. A negative cycle anywhere in the graph surfaces
/// through the Bellman-Ford stage.
pub fn johnson(g: &WeightedDiGraph) -> Result<Vec<Distances>> {
    g.validate_contiguous()?;
    let n = g.num_vertices();

    // Temporary source wired to every vertex at zero cost; its Bellman-Ford
    // distances are the vertex potentials.
    let temp = n + 1;
    let mut augmented = g.clone();
    for v in 1..=n {
        augmented.add_edge(temp, v, 0);
    }
    let raw = bellman_ford(&augmented, temp)?;
    // The temporary source reaches every vertex, so every potential is set.
    let h: Vec<Cost> = raw.into_iter().map(|d| d.unwrap_or(0)).collect();
    tracing::debug!(vertices = n, "johnson potentials computed");

    // Re-weight each edge by `cost + h[src] - h[dest]`, which the potential
    // property keeps non-negative, on a fresh copy.
    let mut reweighted = WeightedDiGraph::new();
    for v in 1..=n {
        reweighted.ensure_vertex(v);
    }
    for e in g.edges() {
        reweighted.add_edge(e.src, e.dest, e.cost + h[e.src] - h[e.dest]);
    }

    let mut all: Vec<Distances> = Vec::with_capacity(n + 1);
    all.push(vec![None; n + 1]);
    for src in 1..=n {
        let mut dist = dijkstra(&reweighted, src)?;
        for dest in 1..=n {
            if let Some(dd) = dist[dest] {
                dist[dest] = Some(dd + h[dest] - h[src]);
            }
        }
        all.push(dist);
    }
    Ok(all)
}
