//! # Eulerian Check - Decide Whether Directed Graphs Have an Eulerian Cycle
//!
//! A directed graph has an Eulerian cycle, a closed walk using every edge
//! exactly once, exactly when every vertex has equal in-degree and
//! out-degree and all vertices that carry edges lie in one strongly
//! connected component. This crate decides that condition and explains the
//! answer.
//!
//! ## Main Components
//!
//! - **Graph**: adjacency-list store, transpose, petgraph interop, renderers
//! - **Algo**: iterative reachability, degree balance, two-pass strong
//!   connectivity and the Eulerian decision
//! - **Analyzer**: discovers and loads TOML/JSON graph files in parallel
//! - **Detector**: collects one verdict per graph
//! - **Reports**: human, JSON, JUnit and GitHub Actions output
//!
//! ## Usage
//!
//! ### Deciding a graph in code
//!
//! ```
//! use eulerian_check::algo::{EulerianVerdict, analyze, has_eulerian_cycle};
//! use eulerian_check::graph::DirectedGraph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let square = DirectedGraph::from_pairs(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;
//! assert!(has_eulerian_cycle(&square));
//!
//! let path = DirectedGraph::from_pairs(3, &[(0, 1), (1, 2)])?;
//! match analyze(&path) {
//!     EulerianVerdict::Unbalanced { imbalances } => {
//!         assert_eq!(imbalances.len(), 2);
//!     }
//!     other => panic!("unexpected verdict {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Checking a directory of graph files
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use eulerian_check::analyzer::GraphAnalyzer;
//! use eulerian_check::detector::EulerianDetector;
//! use eulerian_check::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let mut analyzer = GraphAnalyzer::new();
//! analyzer.discover_graphs(&[PathBuf::from("graphs")], None)?;
//!
//! let mut detector = EulerianDetector::new();
//! for loaded in analyzer.graphs() {
//!     detector.analyze_graph(loaded.name(), loaded.graph());
//! }
//!
//! let report = HumanReportGenerator::new(Some(10)).generate_report(&detector)?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod discovery;
mod progress;
mod utils;

// Public modules
pub mod algo;
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod input;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
