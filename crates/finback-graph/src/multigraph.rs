//! Undirected multigraph used by the randomized contraction engine.
//!
//! Parallel edges are represented as repeated neighbor entries. Self-loops
//! never persist: self-referential entries are discarded at load, and
//! contraction removes every edge that would fold onto itself.

use std::io::BufRead;

use rustc_hash::FxBuildHasher;

use crate::error::{GraphError, Result};
use crate::parse_token;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct MultiGraph {
    adj: HashMap<u32, Vec<u32>>,
    num_edges: usize,
}

impl MultiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the whitespace-delimited adjacency format: each line lists a
    /// vertex followed by its neighbors, with every undirected edge appearing
    /// from both endpoints. Self-referential entries on a line are discarded.
    pub fn from_reader(mut reader: impl BufRead) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input)
    }

    pub fn parse(input: &str) -> Result<Self> {
        let mut adj: HashMap<u32, Vec<u32>> = HashMap::default();
        let mut entries = 0usize;
        for (lineno, line) in input.lines().enumerate() {
            let mut tokens = line.split_whitespace();
            let Some(first) = tokens.next() else {
                continue;
            };
            let vertex: u32 = parse_token(first, lineno)?;
            let neighbors = tokens
                .map(|t| parse_token(t, lineno))
                .collect::<Result<Vec<u32>>>()?;
            let list = adj.entry(vertex).or_default();
            for n in neighbors {
                if n != vertex {
                    list.push(n);
                    entries += 1;
                }
            }
        }
        // Each undirected edge appears once per endpoint.
        Ok(Self {
            adj,
            num_edges: entries / 2,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn has_vertex(&self, v: u32) -> bool {
        self.adj.contains_key(&v)
    }

    pub fn ensure_vertex(&mut self, v: u32) -> &mut Self {
        self.adj.entry(v).or_default();
        self
    }

    /// Adds an undirected edge. Repeated calls add parallel edges; self-loops
    /// are ignored.
    pub fn add_edge(&mut self, u: u32, v: u32) -> &mut Self {
        if u == v {
            return self;
        }
        self.adj.entry(u).or_default().push(v);
        self.adj.entry(v).or_default().push(u);
        self.num_edges += 1;
        self
    }

    pub fn neighbors(&self, v: u32) -> &[u32] {
        self.adj.get(&v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates `(vertex, neighbor list)` pairs in a fixed but arbitrary
    /// order. Edge-uniform sampling walks this, consuming one slot per entry.
    pub fn adjacency(&self) -> impl Iterator<Item = (u32, &[u32])> {
        self.adj.iter().map(|(&v, ns)| (v, ns.as_slice()))
    }

    pub fn vertices(&self) -> impl Iterator<Item = u32> {
        self.adj.keys().copied()
    }

    /// Contracts the edge(s) between `u` and `v`, merging `v` into `u`.
    ///
    /// Every parallel u-v edge disappears (it would become a self-loop); each
    /// remaining edge incident on `v` is re-pointed at `u` with one adjacency
    /// rewrite per incident edge. `num_vertices` drops by one and `num_edges`
    /// by the u-v multiplicity.
    pub fn contract_edge(&mut self, u: u32, v: u32) -> Result<()> {
        debug_assert_ne!(u, v, "contracting a self-loop");
        if u == v {
            return Ok(());
        }
        if !self.adj.contains_key(&u) {
            return Err(GraphError::MissingVertex(u as usize));
        }
        let Some(v_edges) = self.adj.remove(&v) else {
            return Err(GraphError::MissingVertex(v as usize));
        };

        // Re-point each edge incident on v. Each parallel edge contributes one
        // entry in v's list, so one rewrite per entry keeps multiplicity.
        for &w in &v_edges {
            if w == u {
                continue;
            }
            let Some(w_edges) = self.adj.get_mut(&w) else {
                debug_assert!(false, "asymmetric adjacency for vertex {w}");
                continue;
            };
            if let Some(slot) = w_edges.iter_mut().find(|e| **e == v) {
                *slot = u;
            }
        }

        // Fold v's surviving neighbors into u, dropping the contracted
        // multi-edge from u's side.
        let mut delta: isize = -(v_edges.len() as isize);
        let Some(u_edges) = self.adj.get_mut(&u) else {
            debug_assert!(false, "vertex {u} vanished during contraction");
            return Ok(());
        };
        let old_len = u_edges.len() as isize;
        u_edges.retain(|&e| e != v);
        u_edges.extend(v_edges.iter().copied().filter(|&e| e != u));
        delta += u_edges.len() as isize - old_len;

        // The delta double-counts every removed edge (once per endpoint).
        self.num_edges = (self.num_edges as isize + delta / 2) as usize;
        Ok(())
    }
}
