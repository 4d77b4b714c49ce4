use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(eulerian_check::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

/// Which end of an edge referenced a vertex outside the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Destination => write!(f, "destination"),
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum EulerError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(eulerian_check::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("Invalid JSON in '{path}' at line {line}, column {column}")]
    #[diagnostic(
        code(eulerian_check::json_parse_error),
        help("Graph files need a `vertices` count and an `edges` array")
    )]
    JsonParseError {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported graph file '{path}'")]
    #[diagnostic(
        code(eulerian_check::unsupported_format),
        help("Graph files must end in .toml or .json")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("Edge #{edge_index} has {endpoint} vertex {vertex}, but the graph has {vertex_count} vertices")]
    #[diagnostic(
        code(eulerian_check::vertex_out_of_range),
        help("Vertex identifiers must lie in 0..vertices")
    )]
    VertexOutOfRange {
        edge_index: usize,
        endpoint: Endpoint,
        vertex: usize,
        vertex_count: usize,
    },

    #[error("Graph declares {vertex_count} vertices, more than the limit of {max}")]
    #[diagnostic(
        code(eulerian_check::too_many_vertices),
        help("Vertex identifiers should be dense; renumber them from 0")
    )]
    TooManyVertices { vertex_count: usize, max: usize },

    #[error("Cannot allocate a graph with {vertex_count} vertices")]
    #[diagnostic(
        code(eulerian_check::graph_too_large),
        help("The vertex count exceeds available memory")
    )]
    GraphTooLarge { vertex_count: usize },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(eulerian_check::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(eulerian_check::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(eulerian_check::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(eulerian_check::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
