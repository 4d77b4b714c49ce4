//! # Graph Storage and Rendering Module
//!
//! ## Components
//!
//! - **DirectedGraph**: adjacency lists plus in-degree counters over a fixed
//!   vertex set `0..n`, with transpose construction
//! - **Edge**: an ordered `(src, dest)` pair
//! - **GraphRenderer**: draws a graph as ASCII, Mermaid or DOT, optionally
//!   highlighting the vertices that break the Eulerian condition
//!
//! Conversions to and from `petgraph::graph::DiGraph` are provided for
//! interop.
//!
//! ## Example
//!
//! ```
//! use eulerian_check::graph::{DirectedGraph, Edge};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = DirectedGraph::from_edges(3, [Edge::new(0, 1), Edge::new(1, 2)])?;
//! graph.add_edge(2, 0)?;
//!
//! assert_eq!(graph.edge_count(), 3);
//! assert_eq!(graph.in_degree(0), 1);
//!
//! let transposed = graph.transpose();
//! assert_eq!(transposed.neighbors(0), &[2]);
//! # Ok(())
//! # }
//! ```

mod interop;
mod renderer;
mod store;
mod types;

pub use renderer::GraphRenderer;
pub use store::DirectedGraph;
pub use types::Edge;
