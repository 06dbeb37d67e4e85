//! Directed graph used by the SCC engine.
//!
//! Vertices with no out-edges are still registered as members, so sinks and
//! sources survive a round-trip through the text format. The reverse
//! adjacency is built lazily on the first `reverse()` call and toggled in
//! place afterwards; two consecutive calls restore the original orientation
//! exactly.

use std::io::BufRead;

use rustc_hash::FxBuildHasher;

use crate::error::Result;
use crate::parse_token;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    out_edges: HashMap<u32, Vec<u32>>,
    // Two-state toggle: while `reversed` is set, `out_edges` holds the
    // reverse mapping and `reverse_cache` holds the forward one.
    reverse_cache: Option<HashMap<u32, Vec<u32>>>,
    reversed: bool,
    vertices: HashSet<u32>,
    num_edges: usize,
}

impl DiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the whitespace-delimited format: each line lists a vertex
    /// followed by its out-neighbors. Vertices that only ever appear as
    /// destinations are registered as sinks.
    pub fn from_reader(mut reader: impl BufRead) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input)
    }

    pub fn parse(input: &str) -> Result<Self> {
        let mut g = Self::new();
        for (lineno, line) in input.lines().enumerate() {
            let mut tokens = line.split_whitespace();
            let Some(first) = tokens.next() else {
                continue;
            };
            let vertex: u32 = parse_token(first, lineno)?;
            let outs = tokens
                .map(|t| parse_token(t, lineno))
                .collect::<Result<Vec<u32>>>()?;
            g.add_arcs(vertex, &outs);
        }
        Ok(g)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn has_vertex(&self, v: u32) -> bool {
        self.vertices.contains(&v)
    }

    /// Iterates all vertices, including sinks, in a fixed but arbitrary
    /// order.
    pub fn vertices(&self) -> impl Iterator<Item = u32> {
        self.vertices.iter().copied()
    }

    pub fn out_neighbors(&self, v: u32) -> &[u32] {
        self.out_edges.get(&v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends out-neighbors for `vertex`, registering every endpoint.
    pub fn add_arcs(&mut self, vertex: u32, out_neighbors: &[u32]) -> &mut Self {
        // Mutation invalidates the cached reversal.
        if self.reversed {
            self.reverse();
        }
        self.reverse_cache = None;

        self.vertices.insert(vertex);
        self.out_edges
            .entry(vertex)
            .or_default()
            .extend_from_slice(out_neighbors);
        self.num_edges += out_neighbors.len();
        for &w in out_neighbors {
            self.vertices.insert(w);
            self.out_edges.entry(w).or_default();
        }
        self
    }

    /// Reverses the direction of every edge.
    ///
    /// The first call builds the reverse mapping by visiting each edge once;
    /// subsequent calls swap the two mappings in place.
    pub fn reverse(&mut self) {
        if self.reverse_cache.is_none() {
            let mut rev: HashMap<u32, Vec<u32>> = self
                .vertices
                .iter()
                .map(|&v| (v, Vec::new()))
                .collect();
            for (&v, outs) in &self.out_edges {
                for &w in outs {
                    let Some(ins) = rev.get_mut(&w) else {
                        debug_assert!(false, "unregistered vertex {w}");
                        continue;
                    };
                    ins.push(v);
                }
            }
            self.reverse_cache = Some(rev);
        }
        if let Some(rev) = self.reverse_cache.as_mut() {
            std::mem::swap(&mut self.out_edges, rev);
        }
        self.reversed = !self.reversed;
    }
}
