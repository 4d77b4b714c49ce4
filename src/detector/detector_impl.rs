use std::path::{Path, PathBuf};

use crate::algo::{EulerianVerdict, analyze};
use crate::graph::DirectedGraph;

/// Verdict for one named graph
#[derive(Debug, Clone)]
pub struct GraphAnalysis {
    name: String,
    path: Option<PathBuf>,
    vertex_count: usize,
    edge_count: usize,
    verdict: EulerianVerdict,
}

impl GraphAnalysis {
    pub fn builder<'a>() -> GraphAnalysisBuilder<'a> {
        GraphAnalysisBuilder::new()
    }

    fn from_graph(name: String, path: Option<PathBuf>, graph: &DirectedGraph) -> Self {
        Self {
            name,
            path,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            verdict: analyze(graph),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn verdict(&self) -> &EulerianVerdict {
        &self.verdict
    }

    pub fn is_eulerian(&self) -> bool {
        self.verdict.is_eulerian()
    }
}

/// Builds a [`GraphAnalysis`] from a borrowed graph
pub struct GraphAnalysisBuilder<'a> {
    name: Option<String>,
    path: Option<PathBuf>,
    graph: Option<&'a DirectedGraph>,
}

impl Default for GraphAnalysisBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GraphAnalysisBuilder<'a> {
    pub fn new() -> Self {
        Self {
            name: None,
            path: None,
            graph: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_path(mut self, path: Option<PathBuf>) -> Self {
        self.path = path;
        self
    }

    pub fn with_graph(mut self, graph: &'a DirectedGraph) -> Self {
        self.graph = Some(graph);
        self
    }
}

impl crate::common::ConfigBuilder for GraphAnalysisBuilder<'_> {
    type Config = GraphAnalysis;

    fn build(self) -> Result<Self::Config, crate::error::EulerError> {
        let name = self
            .name
            .ok_or_else(|| crate::error::EulerError::ConfigurationError {
                message: "Missing required field: name".to_string(),
            })?;
        let graph = self
            .graph
            .ok_or_else(|| crate::error::EulerError::ConfigurationError {
                message: "Missing required field: graph".to_string(),
            })?;

        Ok(GraphAnalysis::from_graph(name, self.path, graph))
    }
}

/// Collects Eulerian verdicts for a batch of graphs
#[derive(Debug, Clone, Default)]
pub struct EulerianDetector {
    analyses: Vec<GraphAnalysis>,
}

impl EulerianDetector {
    pub fn new() -> Self {
        Self {
            analyses: Vec::new(),
        }
    }

    /// Analyse `graph` and record the verdict under `name`
    pub fn analyze_graph(&mut self, name: &str, graph: &DirectedGraph) -> &GraphAnalysis {
        self.add_analysis(GraphAnalysis::from_graph(name.to_string(), None, graph));
        &self.analyses[self.analyses.len() - 1]
    }

    pub fn add_analysis(&mut self, analysis: GraphAnalysis) {
        self.analyses.push(analysis);
    }

    /// Recorded analyses, in insertion order until [`Self::sort`] is called
    pub fn analyses(&self) -> &[GraphAnalysis] {
        &self.analyses
    }

    pub fn sort(&mut self) {
        self.analyses
            .sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
    }

    pub fn graph_count(&self) -> usize {
        self.analyses.len()
    }

    pub fn eulerian_count(&self) -> usize {
        self.analyses.iter().filter(|a| a.is_eulerian()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.graph_count() - self.eulerian_count()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &GraphAnalysis> {
        self.analyses.iter().filter(|a| !a.is_eulerian())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_detector_counts() {
        let mut detector = EulerianDetector::new();
        let triangle = DirectedGraph::from_pairs(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let path = DirectedGraph::from_pairs(3, &[(0, 1), (1, 2)]).unwrap();

        assert!(detector.analyze_graph("triangle", &triangle).is_eulerian());
        assert!(!detector.analyze_graph("path", &path).is_eulerian());

        assert_eq!(detector.graph_count(), 2);
        assert_eq!(detector.eulerian_count(), 1);
        assert_eq!(detector.failure_count(), 1);
        assert!(detector.has_failures());
        assert_eq!(
            detector.failures().map(|a| a.name()).collect::<Vec<_>>(),
            vec!["path"]
        );
    }

    #[test]
    fn test_sort_orders_by_name() {
        let mut detector = EulerianDetector::new();
        detector.analyze_graph("zeta", &DirectedGraph::new(1));
        detector.analyze_graph("alpha", &DirectedGraph::new(1));
        detector.sort();

        let names: Vec<_> = detector.analyses().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_builder_requires_graph() {
        let result = GraphAnalysis::builder().with_name("orphan").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_records_sizes() {
        let graph = DirectedGraph::from_pairs(4, &[(0, 0)]).unwrap();
        let analysis = GraphAnalysis::builder()
            .with_name("loop")
            .with_path(Some(PathBuf::from("graphs/loop.toml")))
            .with_graph(&graph)
            .build()
            .unwrap();

        assert_eq!(analysis.vertex_count(), graph.vertex_count());
        assert_eq!(analysis.edge_count(), 1);
        assert_eq!(analysis.path(), Some(Path::new("graphs/loop.toml")));
        assert!(analysis.is_eulerian());
    }
}
