use std::path::{Path, PathBuf};

use console::style;
use miette::{Result, WrapErr};
use rayon::prelude::*;

use crate::discovery::GraphDiscovery;
use crate::graph::DirectedGraph;
use crate::input::GraphFile;
use crate::progress::ProgressReporter;
use crate::utils::string::pluralize;

/// A graph file that parsed and validated successfully
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    name: String,
    path: PathBuf,
    graph: DirectedGraph,
}

impl LoadedGraph {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, graph: DirectedGraph) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            graph,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }
}

/// Discovers graph files and loads them in parallel
#[derive(Debug, Default)]
pub struct GraphAnalyzer {
    graphs: Vec<LoadedGraph>,
    failures: Vec<(PathBuf, String)>,
}

impl GraphAnalyzer {
    pub fn new() -> Self {
        Self {
            graphs: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn graphs(&self) -> &[LoadedGraph] {
        &self.graphs
    }

    /// Files that could not be loaded, with the rendered error
    pub fn failures(&self) -> &[(PathBuf, String)] {
        &self.failures
    }

    pub fn discover_graphs(
        &mut self,
        paths: &[PathBuf],
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<()> {
        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }

        let files = self.discover_graph_files(paths, progress.as_deref())?;

        let (loaded, errors) = Self::load_parallel(files);
        self.report_load_errors(&errors);

        self.graphs.extend(loaded);
        self.failures.extend(
            errors
                .into_iter()
                .map(|(path, error)| (path, format!("{error:?}"))),
        );

        if let Some(p) = progress.as_mut() {
            p.finish_discovery(self.graphs.len());
        }

        self.report_discovery_stats();

        Ok(())
    }

    fn discover_graph_files(
        &self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<PathBuf>> {
        let mut discovery = GraphDiscovery::new();
        let files = discovery
            .discover_all(paths, progress)
            .wrap_err("Failed to discover graph files")?;

        for warning in discovery.warnings() {
            eprintln!("{} {}", style("⚠").yellow(), warning);
        }

        Ok(files)
    }

    fn load_parallel(files: Vec<PathBuf>) -> (Vec<LoadedGraph>, Vec<(PathBuf, miette::Error)>) {
        files
            .into_par_iter()
            .map(|path| Self::load_graph(&path).map_err(|e| (path, e)))
            .partition_map(|result| match result {
                Ok(v) => rayon::iter::Either::Left(v),
                Err(e) => rayon::iter::Either::Right(e),
            })
    }

    /// Parse one graph file and build its adjacency lists
    pub fn load_graph(path: &Path) -> Result<LoadedGraph> {
        let file = GraphFile::parse_file(path)?;
        let graph = file
            .to_graph()
            .wrap_err_with(|| format!("Invalid edge list in '{}'", path.display()))?;

        Ok(LoadedGraph {
            name: file.display_name(path),
            path: path.to_path_buf(),
            graph,
        })
    }

    fn report_load_errors(&self, errors: &[(PathBuf, miette::Error)]) {
        for (path, error) in errors {
            eprintln!(
                "{} Failed to load graph '{}': {:?}",
                style("⚠").yellow(),
                path.display(),
                error
            );
        }
    }

    fn report_discovery_stats(&self) {
        if self.graphs.is_empty() {
            eprintln!(
                "{} No graph files found in the specified paths",
                style("⚠").yellow()
            );
        } else {
            let count = self.graphs.len();
            eprintln!(
                "{} Loaded {} {}",
                style("✓").green(),
                style(count).bold(),
                pluralize("graph", count)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_loads_valid_and_reports_invalid_files() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("cycle.toml"),
            "vertices = 2\nedges = [[0, 1], [1, 0]]\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("bad.json"),
            r#"{ "vertices": 1, "edges": [[0, 3]] }"#,
        )
        .unwrap();

        let mut analyzer = GraphAnalyzer::new();
        analyzer
            .discover_graphs(&[temp.path().to_path_buf()], None)
            .unwrap();

        assert_eq!(analyzer.graphs().len(), 1);
        assert_eq!(analyzer.graphs()[0].name(), "cycle");
        assert_eq!(analyzer.graphs()[0].graph().edge_count(), 2);

        assert_eq!(analyzer.failures().len(), 1);
        assert!(analyzer.failures()[0].0.ends_with("bad.json"));
    }

    #[test]
    fn test_oversized_vertex_count_does_not_abort_the_batch() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("ok.toml"),
            "vertices = 2\nedges = [[0, 1], [1, 0]]\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("huge.json"),
            r#"{"vertices": 4611686018427387904, "edges": []}"#,
        )
        .unwrap();

        let mut analyzer = GraphAnalyzer::new();
        analyzer
            .discover_graphs(&[temp.path().to_path_buf()], None)
            .unwrap();

        assert_eq!(analyzer.graphs().len(), 1);
        assert_eq!(analyzer.graphs()[0].name(), "ok");

        assert_eq!(analyzer.failures().len(), 1);
        assert!(analyzer.failures()[0].0.ends_with("huge.json"));
    }

    #[test]
    fn test_load_graph_uses_declared_name() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("g.json");
        fs::write(&path, r#"{ "name": "loop", "vertices": 1, "edges": [[0, 0]] }"#).unwrap();

        let loaded = GraphAnalyzer::load_graph(&path).unwrap();
        assert_eq!(loaded.name(), "loop");
        assert_eq!(loaded.path(), path.as_path());
    }

    #[test]
    fn test_empty_directory_loads_nothing() {
        let temp = TempDir::new().unwrap();

        let mut analyzer = GraphAnalyzer::new();
        analyzer
            .discover_graphs(&[temp.path().to_path_buf()], None)
            .unwrap();

        assert!(analyzer.graphs().is_empty());
        assert!(analyzer.failures().is_empty());
    }
}
