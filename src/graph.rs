//! Graph Store
//!
//! Adjacency representation of directed weighted edges between currencies,
//! with O(1) locate-or-insert for a given `(source, destination)` ordered
//! pair. Mirrors the teacher's `ArbitrageGraph` (edge weight = -log(price))
//! but swaps petgraph's `DiGraph` for a hand-rolled dense adjacency vector
//! plus a packed-key index map, since the spec requires an explicit O(1)
//! edge locator rather than petgraph's per-node edge scan.

use std::collections::HashMap;

use crate::registry::VertexId;

/// A single outgoing edge: destination vertex and its weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub destination: VertexId,
    pub weight: f64,
}

/// Packs an ordered `(source, destination)` pair into one 64-bit key.
/// Safe as long as both ids fit in 32 bits, which holds here since the
/// vertex universe is bounded by the symbol universe.
fn edge_key(source: VertexId, destination: VertexId) -> u64 {
    ((source as u64) << 32) | destination as u64
}

/// Directed weighted adjacency over a fixed vertex universe.
pub struct GraphStore {
    adjacency: Vec<Vec<Edge>>,
    index: HashMap<u64, usize>,
}

impl GraphStore {
    /// Create an empty store over `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            index: HashMap::new(),
        }
    }

    /// Number of vertices in the store.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Insert or overwrite the weight of edge `u -> v`.
    ///
    /// Existing edges are never reordered within `adjacency[u]`, so cached
    /// indices stay valid for the lifetime of the store.
    pub fn upsert_edge(&mut self, u: VertexId, v: VertexId, weight: f64) {
        let key = edge_key(u, v);
        if let Some(&position) = self.index.get(&key) {
            self.adjacency[u as usize][position].weight = weight;
        } else {
            let position = self.adjacency[u as usize].len();
            self.adjacency[u as usize].push(Edge {
                destination: v,
                weight,
            });
            self.index.insert(key, position);
        }
    }

    /// Outgoing edges of `u`, in insertion order.
    pub fn neighbors(&self, u: VertexId) -> &[Edge] {
        &self.adjacency[u as usize]
    }

    /// Current weight of edge `u -> v`, if it exists.
    pub fn edge_weight(&self, u: VertexId, v: VertexId) -> Option<f64> {
        let position = *self.index.get(&edge_key(u, v))?;
        self.adjacency[u as usize].get(position).map(|e| e.weight)
    }
}
