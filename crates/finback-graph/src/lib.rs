//! Graph containers used by `finback`.
//!
//! Three adjacency-list variants share the same counting invariants: an
//! undirected multigraph for randomized contraction, a directed graph with an
//! in-place reversal toggle for SCC computation, and a weighted directed graph
//! for shortest paths. `num_edges` always counts logical edges (unordered
//! pairs for the undirected variant), never individual adjacency entries.
//!
//! Each container ships the reader for its whitespace-delimited text format;
//! malformed input fails fast with [`GraphError`], no partial graph escapes.

mod digraph;
mod error;
mod multigraph;
mod weighted;

pub use digraph::DiGraph;
pub use error::{GraphError, Result};
pub use multigraph::MultiGraph;
pub use weighted::{Cost, Edge, Neighbor, WeightedDiGraph};

pub(crate) fn parse_token<T>(token: &str, lineno: usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    token.parse().map_err(|e: T::Err| GraphError::Parse {
        line: lineno + 1,
        message: format!("invalid number `{token}`: {e}"),
    })
}
