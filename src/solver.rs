//! Bellman-Ford single-source shortest paths.
//!
//! dist[v] = shortest known distance from source to v, `None` = no path
//! discovered yet. Initialise dist[source] = 0, relax every edge for up to
//! V-1 sequential passes (each relaxation is visible to later edges in the
//! same pass), then run one extra pass: any edge that still relaxes proves
//! a negative-weight cycle reachable from the source. O(V * E).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::InvalidInput;
use crate::graph::Graph;

/// Solver output: one entry per vertex (`None` = unreachable) plus the
/// negative-cycle flag. When the flag is set, distances for vertices
/// reachable from the cycle carry no shortest-path guarantee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub distances: Vec<Option<i64>>,
    pub negative_cycle: bool,
}

fn validate(graph: &Graph, source: usize) -> Result<(), InvalidInput> {
    let n = graph.vertex_count;
    if n == 0 {
        return Err(InvalidInput::new("vertex count must be positive"));
    }
    if source >= n {
        return Err(InvalidInput::new(format!(
            "source vertex {source} out of range for {n} vertices"
        )));
    }
    for (i, e) in graph.edges.iter().enumerate() {
        if e.from >= n || e.to >= n {
            return Err(InvalidInput::new(format!(
                "edge {i} ({} -> {}) out of range for {n} vertices",
                e.from, e.to
            )));
        }
    }
    Ok(())
}

/// Computes shortest-path distances from `source` to every vertex.
///
/// Distances are exact when `negative_cycle` is false; unreachable
/// vertices stay `None`. Rejects out-of-range indices and an empty vertex
/// set with [`InvalidInput`] before any relaxation runs.
pub fn solve(graph: &Graph, source: usize) -> Result<Solution, InvalidInput> {
    validate(graph, source)?;

    let n = graph.vertex_count;
    let mut dist: Vec<Option<i64>> = vec![None; n];
    dist[source] = Some(0);

    // Fixed-point passes. A pass with no relaxation means the remaining
    // passes cannot change anything either.
    for pass in 1..n {
        let mut relaxed = 0u64;
        for e in &graph.edges {
            if let Some(du) = dist[e.from] {
                let candidate = du + e.weight;
                if dist[e.to].map_or(true, |dv| candidate < dv) {
                    dist[e.to] = Some(candidate);
                    relaxed += 1;
                }
            }
        }
        debug!(pass, relaxed, "relaxation pass");
        if relaxed == 0 {
            break;
        }
    }

    // V-th pass: the first edge that still relaxes proves a reachable
    // negative cycle; its identity is not needed.
    let mut negative_cycle = false;
    for e in &graph.edges {
        if let Some(du) = dist[e.from] {
            let candidate = du + e.weight;
            if dist[e.to].map_or(true, |dv| candidate < dv) {
                warn!(from = e.from, to = e.to, weight = e.weight, "negative cycle detected");
                negative_cycle = true;
                break;
            }
        }
    }

    Ok(Solution {
        distances: dist,
        negative_cycle,
    })
}
