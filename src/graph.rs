//! Edge-list graph representation.
//!
//! Vertices are bare indices `0..vertex_count`; an edge is a directed
//! `(from, to, weight)` triple with a signed weight. Edge order is
//! irrelevant to the solver's fixed point but is kept stable because the
//! relaxation passes iterate it in sequence.

use serde::{Deserialize, Serialize};

/// Directed weighted edge. Weights may be negative.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: i64) -> Self {
        Self { from, to, weight }
    }
}

/// Directed graph over vertices `0..vertex_count` as an ordered edge list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    pub fn from_triples(vertex_count: usize, triples: &[(usize, usize, i64)]) -> Self {
        let edges = triples
            .iter()
            .map(|&(from, to, weight)| Edge::new(from, to, weight))
            .collect();
        Self::new(vertex_count, edges)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
