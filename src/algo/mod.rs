//! # Eulerian Cycle Decision
//!
//! A directed graph has an Eulerian cycle exactly when
//!
//! 1. every vertex has equal in-degree and out-degree ([`balance`]), and
//! 2. all vertices that carry edges lie in one strongly connected component
//!    ([`connectivity`]).
//!
//! [`eulerian`] composes the two, running the cheap degree check first.
//! Connectivity is decided with two depth-first searches ([`reachability`])
//! from the same root, one over the graph and one over its transpose.
//!
//! ## Example
//!
//! ```
//! use eulerian_check::algo::eulerian::{EulerianVerdict, analyze, has_eulerian_cycle};
//! use eulerian_check::graph::DirectedGraph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let triangle = DirectedGraph::from_pairs(3, &[(0, 1), (1, 2), (2, 0)])?;
//! assert!(has_eulerian_cycle(&triangle));
//!
//! let halves = DirectedGraph::from_pairs(4, &[(0, 1), (1, 0), (2, 3), (3, 2)])?;
//! assert!(matches!(
//!     analyze(&halves),
//!     EulerianVerdict::Disconnected { .. }
//! ));
//! # Ok(())
//! # }
//! ```

pub mod balance;
pub mod connectivity;
pub mod eulerian;
pub mod reachability;

pub use balance::{DegreeImbalance, is_balanced, unbalanced_vertices};
pub use connectivity::{
    Connectivity, SearchPass, check_connectivity, is_strongly_connected_over_nonzero_degree,
};
pub use eulerian::{EulerianVerdict, analyze, has_eulerian_cycle};
pub use reachability::{VisitedSet, reachable_from};
