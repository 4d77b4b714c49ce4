use crate::algo::balance::{DegreeImbalance, is_balanced, unbalanced_vertices};
use crate::algo::connectivity::{Connectivity, SearchPass, check_connectivity};
use crate::graph::DirectedGraph;

/// Why a graph does or does not have an Eulerian cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EulerianVerdict {
    /// Balanced and strongly connected over its degree-bearing vertices.
    /// `root` is `None` when the graph has no edges.
    Eulerian { root: Option<usize> },
    /// At least one vertex has in-degree != out-degree
    Unbalanced { imbalances: Vec<DegreeImbalance> },
    /// Balanced, but the edges span more than one strongly connected
    /// component
    Disconnected {
        root: usize,
        pass: SearchPass,
        unreached: Vec<usize>,
    },
}

impl EulerianVerdict {
    pub fn is_eulerian(&self) -> bool {
        matches!(self, EulerianVerdict::Eulerian { .. })
    }

    /// Short machine-friendly label for the verdict
    pub fn kind(&self) -> &'static str {
        match self {
            EulerianVerdict::Eulerian { .. } => "eulerian",
            EulerianVerdict::Unbalanced { .. } => "unbalanced",
            EulerianVerdict::Disconnected { .. } => "disconnected",
        }
    }
}

/// Returns true if the graph has a closed walk using every edge exactly once.
///
/// The degree check runs first; the connectivity test (and its transpose) is
/// skipped when it fails.
pub fn has_eulerian_cycle(graph: &DirectedGraph) -> bool {
    is_balanced(graph) && check_connectivity(graph).is_strong()
}

/// Same decision as [`has_eulerian_cycle`], keeping the evidence.
pub fn analyze(graph: &DirectedGraph) -> EulerianVerdict {
    let imbalances = unbalanced_vertices(graph);
    if !imbalances.is_empty() {
        return EulerianVerdict::Unbalanced { imbalances };
    }

    match check_connectivity(graph) {
        Connectivity::NoEdges => EulerianVerdict::Eulerian { root: None },
        Connectivity::Strong { root } => EulerianVerdict::Eulerian { root: Some(root) },
        Connectivity::Broken {
            root,
            pass,
            unreached,
        } => EulerianVerdict::Disconnected {
            root,
            pass,
            unreached,
        },
    }
}
