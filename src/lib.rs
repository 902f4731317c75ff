//! Single-source shortest paths over directed graphs with signed edge
//! weights, using Bellman-Ford relaxation, plus detection of negative
//! cycles reachable from the source.
//!
//! ```rust
//! use bellman_core::{solve, Graph};
//!
//! let g = Graph::from_triples(3, &[(0, 1, 4), (1, 2, -6), (0, 2, 1)]);
//! let s = solve(&g, 0).unwrap();
//! assert_eq!(s.distances, vec![Some(0), Some(4), Some(-2)]);
//! assert!(!s.negative_cycle);
//! ```

pub mod error;
pub mod graph;
pub mod report;
pub mod solver;

pub use error::InvalidInput;
pub use graph::{Edge, Graph};
pub use solver::{solve, Solution};
