//! Randomized minimum cut via edge contraction (Karger and Karger-Stein).
//!
//! Every solve entry point works on deep copies; the caller's graph is never
//! mutated and sibling recursive branches never observe each other's
//! contractions. The one destructive function is [`karger_stein`], the single
//! recursive trial, which consumes its receiver.
//!
//! Randomness comes from a caller-supplied [`Rng`] so runs are reproducible
//! under a seeded generator.

use std::time::Instant;

use finback_graph::MultiGraph;
use rand::Rng;

use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct MinCutOptions {
    /// Number of independent trials. Defaults to the bound that keeps the
    /// probability of missing the true min-cut at or below `1/N`:
    /// `ceil(ln N * N(N-1)/2)` for plain Karger, `ceil(log2 N * ln N)` for
    /// Karger-Stein.
    pub trials: Option<usize>,
    /// Stop starting new trials once this instant has passed and report the
    /// best cut observed so far.
    pub deadline: Option<Instant>,
}

/// Picks an edge uniformly at random from the edge distribution.
///
/// Draws an index in `[0, 2 * num_edges)` and walks the adjacency lists,
/// consuming one slot per entry, so that edges rather than vertices are
/// uniform. Returns `None` on an edgeless graph.
pub fn pick_random_edge(g: &MultiGraph, rng: &mut impl Rng) -> Option<(u32, u32)> {
    if g.num_edges() == 0 {
        return None;
    }
    let mut n = rng.random_range(0..2 * g.num_edges());
    for (v, neighbors) in g.adjacency() {
        if n < neighbors.len() {
            return Some((v, neighbors[n]));
        }
        n -= neighbors.len();
    }
    None
}

/// Contracts random edges until exactly `target` vertices remain.
///
/// A no-op when `target >= num_vertices`; stops early if the graph runs out
/// of edges.
pub fn contract_random_edges(
    g: &mut MultiGraph,
    target: usize,
    rng: &mut impl Rng,
) -> Result<()> {
    while g.num_vertices() > target {
        let Some((u, v)) = pick_random_edge(g, rng) else {
            break;
        };
        g.contract_edge(u, v)?;
    }
    Ok(())
}

/// Karger's randomized contraction algorithm with the default trial count.
pub fn karger_min_cut(g: &MultiGraph, rng: &mut impl Rng) -> Result<usize> {
    karger_min_cut_with(g, MinCutOptions::default(), rng)
}

/// Runs independent contraction-to-2 trials on deep copies and reports the
/// smallest observed cut.
pub fn karger_min_cut_with(
    g: &MultiGraph,
    opts: MinCutOptions,
    rng: &mut impl Rng,
) -> Result<usize> {
    let trials = opts
        .trials
        .unwrap_or_else(|| default_karger_trials(g.num_vertices()));
    // Every cut is at most all edges, so this bound always loses.
    let mut best = g.num_edges() + 1;
    for trial in 0..trials {
        if deadline_passed(opts.deadline) {
            tracing::warn!(trial, trials, best, "deadline reached, stopping contraction trials");
            break;
        }
        let mut working = g.clone();
        contract_random_edges(&mut working, 2, rng)?;
        let cut = super_vertex_degree(&working);
        tracing::trace!(trial, cut, "contraction trial finished");
        if cut < best {
            best = cut;
        }
    }
    Ok(best)
}

/// A single recursive Karger-Stein trial. Destroys the receiver.
///
/// Base case `N <= 6` falls back to one plain-Karger solve; otherwise the
/// graph is contracted to `ceil(N / sqrt 2)` vertices and the trial recurses
/// twice on independent copies of the reduced graph, keeping the smaller
/// result.
pub fn karger_stein(g: &mut MultiGraph, rng: &mut impl Rng) -> Result<usize> {
    let n = g.num_vertices();
    if n <= 6 {
        return karger_min_cut(g, rng);
    }
    let target = (n as f64 / std::f64::consts::SQRT_2).ceil() as usize;
    contract_random_edges(g, target, rng)?;
    let mut sibling = g.clone();
    let a = karger_stein(g, rng)?;
    let b = karger_stein(&mut sibling, rng)?;
    Ok(a.min(b))
}

/// Karger-Stein with the default trial count.
pub fn karger_stein_min_cut(g: &MultiGraph, rng: &mut impl Rng) -> Result<usize> {
    karger_stein_min_cut_with(g, MinCutOptions::default(), rng)
}

/// Repeats the recursive Karger-Stein trial on deep copies and reports the
/// smallest observed cut.
pub fn karger_stein_min_cut_with(
    g: &MultiGraph,
    opts: MinCutOptions,
    rng: &mut impl Rng,
) -> Result<usize> {
    let trials = opts
        .trials
        .unwrap_or_else(|| default_karger_stein_trials(g.num_vertices()));
    let mut best = g.num_edges() + 1;
    for trial in 0..trials {
        if deadline_passed(opts.deadline) {
            tracing::warn!(trial, trials, best, "deadline reached, stopping Karger-Stein trials");
            break;
        }
        let mut working = g.clone();
        let cut = karger_stein(&mut working, rng)?;
        tracing::trace!(trial, cut, "Karger-Stein trial finished");
        if cut < best {
            best = cut;
        }
    }
    Ok(best)
}

fn default_karger_trials(n: usize) -> usize {
    let n = n as f64;
    (n.ln() * n * (n - 1.0) / 2.0).ceil() as usize
}

fn default_karger_stein_trials(n: usize) -> usize {
    let n = n as f64;
    (n.log2() * n.ln()).ceil() as usize
}

fn super_vertex_degree(g: &MultiGraph) -> usize {
    // After contracting to two vertices, either survivor's degree is the
    // crossing-edge count.
    g.adjacency().next().map(|(_, ns)| ns.len()).unwrap_or(0)
}

fn deadline_passed(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}
