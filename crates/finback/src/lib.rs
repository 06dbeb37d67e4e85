//! Graph and combinatorial-optimization algorithms over the
//! [`finback-graph`](finback_graph) containers: randomized minimum cut
//! (Karger / Karger-Stein), strongly connected components (Kosaraju, Tarjan),
//! and single-source / all-pairs shortest paths (Dijkstra, Bellman-Ford,
//! Floyd-Warshall, Johnson).
//!
//! Every solve entry point treats the caller's graph as a snapshot: the
//! randomized engines contract deep copies, and Johnson re-weights clones.
//! All computation is single-threaded and synchronous.

mod error;
pub mod mincut;
pub mod scc;
pub mod shortest_paths;

pub use error::{Error, Result};
pub use finback_graph as graph;
