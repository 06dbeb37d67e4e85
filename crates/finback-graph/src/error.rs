use std::io;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Malformed graph data at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(
        "Header mismatch: expected {expected_vertices} vertices and {expected_edges} edges, parsed {vertices} and {edges}"
    )]
    HeaderMismatch {
        expected_vertices: usize,
        expected_edges: usize,
        vertices: usize,
        edges: usize,
    },

    #[error("Vertex {0} is not in the graph")]
    MissingVertex(usize),

    #[error("Vertices are not labeled contiguously 1..={num_vertices}")]
    NonContiguousVertices { num_vertices: usize },
}
