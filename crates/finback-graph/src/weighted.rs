//! Weighted directed graph used by the shortest-path engine.
//!
//! Stores the edge list alongside an adjacency projection so edge-relaxing
//! algorithms (Bellman-Ford, Floyd-Warshall) and frontier-expanding ones
//! (Dijkstra) both get their natural view. Vertices are integer labels;
//! the all-pairs algorithms additionally require the labels to be contiguous
//! `1..=num_vertices`, checked by [`WeightedDiGraph::validate_contiguous`].

use std::io::BufRead;

use rustc_hash::FxBuildHasher;

use crate::error::{GraphError, Result};
use crate::parse_token;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

pub type Cost = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub src: usize,
    pub dest: usize,
    pub cost: Cost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub vertex: usize,
    pub cost: Cost,
}

#[derive(Debug, Clone, Default)]
pub struct WeightedDiGraph {
    edges: Vec<Edge>,
    // Indexed by source vertex; slot 0 is unused for 1-labeled graphs.
    out_neighbors: Vec<Vec<Neighbor>>,
    vertices: HashSet<usize>,
}

impl WeightedDiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the edge-list format: a `<num_vertices> <num_edges>` header,
    /// then one `<src> <dest> <cost>` line per edge. Header counts are
    /// validated exactly against the parsed content.
    pub fn from_edge_list_reader(mut reader: impl BufRead) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse_edge_list(&input)
    }

    pub fn parse_edge_list(input: &str) -> Result<Self> {
        let mut lines = input.lines().enumerate();
        let Some((lineno, header)) = lines.next() else {
            return Err(GraphError::Parse {
                line: 1,
                message: "missing `<num_vertices> <num_edges>` header".into(),
            });
        };
        let mut tokens = header.split_whitespace();
        let (Some(nv), Some(ne)) = (tokens.next(), tokens.next()) else {
            return Err(GraphError::Parse {
                line: lineno + 1,
                message: "missing `<num_vertices> <num_edges>` header".into(),
            });
        };
        let expected_vertices: usize = parse_token(nv, lineno)?;
        let expected_edges: usize = parse_token(ne, lineno)?;

        let mut g = Self::new();
        for (lineno, line) in lines {
            let mut tokens = line.split_whitespace();
            let Some(first) = tokens.next() else {
                continue;
            };
            let (Some(dest), Some(cost), None) = (tokens.next(), tokens.next(), tokens.next())
            else {
                return Err(GraphError::Parse {
                    line: lineno + 1,
                    message: "expected `<src> <dest> <cost>`".into(),
                });
            };
            let src: usize = parse_token(first, lineno)?;
            let dest: usize = parse_token(dest, lineno)?;
            let cost: Cost = parse_token(cost, lineno)?;
            g.add_edge(src, dest, cost);
        }

        if g.num_vertices() != expected_vertices || g.num_edges() != expected_edges {
            return Err(GraphError::HeaderMismatch {
                expected_vertices,
                expected_edges,
                vertices: g.num_vertices(),
                edges: g.num_edges(),
            });
        }
        Ok(g)
    }

    /// Reads the adjacency format: each line lists a vertex followed by its
    /// out-edges as comma-joined `<dest>,<weight>` pairs.
    pub fn from_adjacency_reader(mut reader: impl BufRead) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse_adjacency(&input)
    }

    pub fn parse_adjacency(input: &str) -> Result<Self> {
        let mut g = Self::new();
        for (lineno, line) in input.lines().enumerate() {
            let mut tokens = line.split_whitespace();
            let Some(first) = tokens.next() else {
                continue;
            };
            let src: usize = parse_token(first, lineno)?;
            for pair in tokens {
                let Some((dest, weight)) = pair.split_once(',') else {
                    return Err(GraphError::Parse {
                        line: lineno + 1,
                        message: format!("expected `<dest>,<weight>`, got `{pair}`"),
                    });
                };
                let dest: usize = parse_token(dest, lineno)?;
                let cost: Cost = parse_token(weight, lineno)?;
                g.add_edge(src, dest, cost);
            }
        }
        Ok(g)
    }

    pub fn add_edge(&mut self, src: usize, dest: usize, cost: Cost) -> &mut Self {
        self.edges.push(Edge { src, dest, cost });
        self.vertices.insert(src);
        self.vertices.insert(dest);
        let needed = src.max(dest) + 1;
        if self.out_neighbors.len() < needed {
            self.out_neighbors.resize_with(needed, Vec::new);
        }
        self.out_neighbors[src].push(Neighbor { vertex: dest, cost });
        self
    }

    pub fn ensure_vertex(&mut self, v: usize) -> &mut Self {
        self.vertices.insert(v);
        if self.out_neighbors.len() < v + 1 {
            self.out_neighbors.resize_with(v + 1, Vec::new);
        }
        self
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    pub fn vertices(&self) -> impl Iterator<Item = usize> {
        self.vertices.iter().copied()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn out_neighbors(&self, v: usize) -> &[Neighbor] {
        self.out_neighbors.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// One past the largest vertex label seen; the natural length for
    /// label-indexed distance tables.
    pub fn vertex_bound(&self) -> usize {
        self.out_neighbors.len()
    }

    /// Checks that vertices are labeled exactly `1..=num_vertices`.
    ///
    /// Johnson's algorithm (and the label-indexed Floyd-Warshall table)
    /// requires this; violation is a hard precondition failure.
    pub fn validate_contiguous(&self) -> Result<()> {
        let n = self.num_vertices();
        if (1..=n).all(|v| self.vertices.contains(&v)) {
            Ok(())
        } else {
            Err(GraphError::NonContiguousVertices { num_vertices: n })
        }
    }
}
