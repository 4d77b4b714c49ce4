use std::path::Path;

use miette::{NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::constants::input::MAX_VERTICES;
use crate::error::EulerError;
use crate::graph::{DirectedGraph, Edge};

/// On-disk description of a graph
///
/// ```toml
/// name = "triangle"
/// vertices = 3
/// edges = [[0, 1], [1, 2], { src = 2, dest = 0 }]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    pub name: Option<String>,
    pub vertices: usize,
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum EdgeEntry {
    Pair([usize; 2]),
    Detailed { src: usize, dest: usize },
}

impl From<EdgeEntry> for Edge {
    fn from(entry: EdgeEntry) -> Self {
        match entry {
            EdgeEntry::Pair([src, dest]) => Edge::new(src, dest),
            EdgeEntry::Detailed { src, dest } => Edge::new(src, dest),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFileFormat {
    Toml,
    Json,
}

impl GraphFileFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(Self::Json),
            _ => None,
        }
    }
}

impl GraphFile {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let format = GraphFileFormat::from_path(path)
            .ok_or_else(|| EulerError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        let content = std::fs::read_to_string(path)
            .map_err(|e| EulerError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self::parse_str(path, &content, format)?)
    }

    pub fn parse_str(
        path: &Path,
        content: &str,
        format: GraphFileFormat,
    ) -> Result<Self, EulerError> {
        match format {
            GraphFileFormat::Toml => toml::from_str(content).map_err(|e| {
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

                EulerError::TomlParseError(Box::new(crate::error::TomlParseError {
                    file: path.display().to_string(),
                    source_code: NamedSource::new(path.display().to_string(), content.to_string()),
                    span,
                    source: e,
                }))
            }),
            GraphFileFormat::Json => {
                serde_json::from_str(content).map_err(|e| EulerError::JsonParseError {
                    path: path.to_path_buf(),
                    line: e.line(),
                    column: e.column(),
                    source: e,
                })
            }
        }
    }

    /// Declared name, falling back to the file stem
    pub fn display_name(&self, path: &Path) -> String {
        self.name.clone().unwrap_or_else(|| {
            path.file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string()
        })
    }

    /// Build the declared graph
    ///
    /// Counts above [`MAX_VERTICES`] are rejected before any allocation.
    pub fn to_graph(&self) -> Result<DirectedGraph, EulerError> {
        if self.vertices > MAX_VERTICES {
            return Err(EulerError::TooManyVertices {
                vertex_count: self.vertices,
                max: MAX_VERTICES,
            });
        }
        DirectedGraph::from_edges(self.vertices, self.edges.iter().copied().map(Edge::from))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::Builder;

    use super::*;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_toml_with_mixed_edge_forms() {
        let file = write_temp(
            ".toml",
            r#"
name = "triangle"
vertices = 3
edges = [[0, 1], [1, 2], { src = 2, dest = 0 }]
"#,
        );

        let parsed = GraphFile::parse_file(file.path()).unwrap();
        assert_eq!(parsed.display_name(file.path()), "triangle");

        let graph = parsed.to_graph().unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(2), &[0]);
    }

    #[test]
    fn test_parse_json_defaults_edges_and_name() {
        let file = write_temp(".json", r#"{ "vertices": 2 }"#);

        let parsed = GraphFile::parse_file(file.path()).unwrap();
        let stem = file
            .path()
            .file_stem()
            .unwrap()
            .to_string_lossy()
            .to_string();
        assert_eq!(parsed.display_name(file.path()), stem);
        assert!(parsed.edges.is_empty());
        assert_eq!(parsed.to_graph().unwrap().vertex_count(), 2);
    }

    #[test]
    fn test_toml_syntax_error_carries_span() {
        let err = GraphFile::parse_str(
            &PathBuf::from("broken.toml"),
            "vertices = \nedges = []",
            GraphFileFormat::Toml,
        )
        .unwrap_err();

        match err {
            EulerError::TomlParseError(inner) => {
                assert_eq!(inner.file, "broken.toml");
                assert!(inner.span.is_some());
            }
            other => panic!("Expected TomlParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_vertex_count_is_rejected() {
        let err = GraphFile::parse_str(
            &PathBuf::from("negative.json"),
            r#"{ "vertices": -1, "edges": [] }"#,
            GraphFileFormat::Json,
        )
        .unwrap_err();

        assert!(matches!(err, EulerError::JsonParseError { line: 1, .. }));
    }

    #[test]
    fn test_out_of_range_edge_fails_on_conversion() {
        let parsed = GraphFile::parse_str(
            &PathBuf::from("range.toml"),
            "vertices = 2\nedges = [[0, 1], [1, 2]]",
            GraphFileFormat::Toml,
        )
        .unwrap();

        assert!(matches!(
            parsed.to_graph(),
            Err(EulerError::VertexOutOfRange { edge_index: 1, .. })
        ));
    }

    #[test]
    fn test_oversized_vertex_count_fails_before_allocating() {
        let parsed = GraphFile::parse_str(
            &PathBuf::from("huge.json"),
            r#"{"vertices": 4611686018427387904, "edges": []}"#,
            GraphFileFormat::Json,
        )
        .unwrap();

        assert!(matches!(
            parsed.to_graph(),
            Err(EulerError::TooManyVertices {
                vertex_count: 4_611_686_018_427_387_904,
                max: MAX_VERTICES,
            })
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        assert_eq!(GraphFileFormat::from_path(Path::new("g.yaml")), None);
        assert_eq!(
            GraphFileFormat::from_path(Path::new("g.JSON")),
            Some(GraphFileFormat::Json)
        );

        let err = GraphFile::parse_file(Path::new("graph.yaml")).unwrap_err();
        assert!(err.to_string().contains("Unsupported graph file"));
    }
}
