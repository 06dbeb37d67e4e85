use finback_graph::Cost;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] finback_graph::GraphError),

    /// Shortest distances are undefined: some cycle's total cost is negative.
    #[error("Graph has a negative-cost cycle {detail}")]
    NegativeCycle { detail: String },

    #[error("Negative cost {cost} on edge {src} -> {dest}; Dijkstra requires non-negative costs")]
    NegativeEdge { src: usize, dest: usize, cost: Cost },
}
