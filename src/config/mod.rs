//! # Configuration Module
//!
//! Configuration structures for the eulerian-check commands. Each command has
//! its own config module with a builder; missing required fields surface as
//! [`EulerError::ConfigurationError`](crate::error::EulerError).
//!
//! ## Command Configurations
//!
//! - **CheckConfig**: the `check` command over many graph files
//! - **RenderOptions**: the `render` command for one graph
//! - **DegreesConfig**: the `degrees` command for one graph
//!
//! ## Example
//!
//! ```
//! use eulerian_check::cli::{GraphFormat, OutputFormat};
//! use eulerian_check::common::ConfigBuilder;
//! use eulerian_check::config::{CheckConfig, RenderOptions};
//!
//! let check = CheckConfig::builder()
//!     .with_paths(vec!["graphs".into()])
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_failure(true)
//!     .build()
//!     .unwrap();
//! assert!(check.error_on_failure);
//!
//! let render = RenderOptions::builder()
//!     .with_file("graphs/square.toml".into())
//!     .with_format(GraphFormat::Dot)
//!     .build()
//!     .unwrap();
//! assert!(render.highlight);
//! ```

pub mod check;
pub mod degrees;
pub mod render;

pub use check::CheckConfig;
pub use degrees::DegreesConfig;
pub use render::RenderOptions;
