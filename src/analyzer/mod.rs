//! # Graph Loading Module
//!
//! Turns the paths given on the command line into validated
//! [`DirectedGraph`](crate::graph::DirectedGraph)s. Discovery expands
//! directories and globs, then every file is parsed in parallel. Files that
//! fail to parse or reference vertices outside the declared range are
//! reported on stderr and skipped; the rest of the batch still loads.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use eulerian_check::analyzer::GraphAnalyzer;
//!
//! # fn main() -> miette::Result<()> {
//! let mut analyzer = GraphAnalyzer::new();
//! analyzer.discover_graphs(&[PathBuf::from("graphs/")], None)?;
//!
//! for loaded in analyzer.graphs() {
//!     println!("{}: {} edges", loaded.name(), loaded.graph().edge_count());
//! }
//! # Ok(())
//! # }
//! ```

mod analyzer_impl;

pub use analyzer_impl::*;
