//! Strong connectivity over the vertices that carry edges
//!
//! Kosaraju-style two-pass test: pick a root, search forward from it in the
//! graph, then search from it again in the transpose. Every degree-bearing
//! vertex is in the root's strongly connected component exactly when both
//! passes mark it. Isolated vertices are ignored.

use serde::Serialize;

use crate::algo::reachability::reachable_from;
use crate::graph::DirectedGraph;

/// Which of the two searches left a vertex unmarked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPass {
    /// Search over the original graph: vertex is not reachable from the root
    Forward,
    /// Search over the transpose: vertex cannot reach the root
    Reverse,
}

impl std::fmt::Display for SearchPass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchPass::Forward => write!(f, "forward"),
            SearchPass::Reverse => write!(f, "reverse"),
        }
    }
}

/// Outcome of the connectivity test
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connectivity {
    /// The graph has no edges, so the condition holds vacuously
    NoEdges,
    /// All degree-bearing vertices share one strongly connected component
    Strong { root: usize },
    /// Some degree-bearing vertices were missed by `pass`
    Broken {
        root: usize,
        pass: SearchPass,
        unreached: Vec<usize>,
    },
}

impl Connectivity {
    pub fn is_strong(&self) -> bool {
        matches!(self, Connectivity::NoEdges | Connectivity::Strong { .. })
    }
}

/// First vertex, by ascending index, with an outgoing edge
pub fn search_root(graph: &DirectedGraph) -> Option<usize> {
    graph.vertices().find(|&v| graph.out_degree(v) > 0)
}

/// Run the two-pass test and report where it failed, if anywhere.
///
/// The transpose is only built when the forward pass succeeds.
pub fn check_connectivity(graph: &DirectedGraph) -> Connectivity {
    let Some(root) = search_root(graph) else {
        return Connectivity::NoEdges;
    };

    let forward = reachable_from(graph, root);
    let unreached = forward.unmarked_with_degree(graph);
    if !unreached.is_empty() {
        return Connectivity::Broken {
            root,
            pass: SearchPass::Forward,
            unreached,
        };
    }

    let transposed = graph.transpose();
    let reverse = reachable_from(&transposed, root);
    let unreached = reverse.unmarked_with_degree(&transposed);
    if !unreached.is_empty() {
        return Connectivity::Broken {
            root,
            pass: SearchPass::Reverse,
            unreached,
        };
    }

    Connectivity::Strong { root }
}

/// Returns true if all vertices with non-zero degree are mutually reachable.
///
/// A graph without edges passes trivially.
pub fn is_strongly_connected_over_nonzero_degree(graph: &DirectedGraph) -> bool {
    check_connectivity(graph).is_strong()
}
