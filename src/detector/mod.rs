//! # Eulerian Detection Module
//!
//! Runs the Eulerian decision over a batch of graphs and keeps one
//! [`GraphAnalysis`] per graph for the report generators.
//!
//! ## Example
//!
//! ```
//! use eulerian_check::detector::EulerianDetector;
//! use eulerian_check::graph::DirectedGraph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut detector = EulerianDetector::new();
//!
//! let square = DirectedGraph::from_pairs(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;
//! let split = DirectedGraph::from_pairs(4, &[(0, 1), (1, 0), (2, 3), (3, 2)])?;
//!
//! detector.analyze_graph("square", &square);
//! detector.analyze_graph("split", &split);
//!
//! assert_eq!(detector.eulerian_count(), 1);
//! assert!(detector.has_failures());
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
