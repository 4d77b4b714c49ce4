use serde::Serialize;

use crate::graph::DirectedGraph;

/// A vertex whose in-degree and out-degree differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DegreeImbalance {
    pub vertex: usize,
    pub in_degree: usize,
    pub out_degree: usize,
}

impl DegreeImbalance {
    /// `out_degree - in_degree`; positive means more edges leave than enter
    pub fn difference(&self) -> isize {
        self.out_degree as isize - self.in_degree as isize
    }
}

/// Returns true if every vertex has equal in-degree and out-degree.
pub fn is_balanced(graph: &DirectedGraph) -> bool {
    graph
        .vertices()
        .all(|v| graph.in_degree(v) == graph.out_degree(v))
}

/// Every vertex with in-degree != out-degree, in ascending vertex order.
pub fn unbalanced_vertices(graph: &DirectedGraph) -> Vec<DegreeImbalance> {
    graph
        .vertices()
        .filter(|&v| graph.in_degree(v) != graph.out_degree(v))
        .map(|vertex| DegreeImbalance {
            vertex,
            in_degree: graph.in_degree(vertex),
            out_degree: graph.out_degree(vertex),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_edgeless_graph_is_balanced() {
        assert!(is_balanced(&DirectedGraph::new(2)));
        assert!(is_balanced(&DirectedGraph::new(0)));
    }

    #[test]
    fn test_self_loop_is_balanced() {
        let graph = DirectedGraph::from_pairs(1, &[(0, 0)]).unwrap();
        assert!(is_balanced(&graph));
    }

    #[test]
    fn test_path_is_unbalanced_at_both_ends() {
        let graph = DirectedGraph::from_pairs(3, &[(0, 1), (1, 2)]).unwrap();

        assert!(!is_balanced(&graph));
        let imbalances = unbalanced_vertices(&graph);
        assert_eq!(
            imbalances,
            vec![
                DegreeImbalance {
                    vertex: 0,
                    in_degree: 0,
                    out_degree: 1,
                },
                DegreeImbalance {
                    vertex: 2,
                    in_degree: 1,
                    out_degree: 0,
                },
            ]
        );
        assert_eq!(imbalances[0].difference(), 1);
        assert_eq!(imbalances[1].difference(), -1);
    }

    #[test]
    fn test_disconnected_cycles_are_balanced() {
        let graph = DirectedGraph::from_pairs(4, &[(0, 1), (1, 0), (2, 3), (3, 2)]).unwrap();

        assert!(is_balanced(&graph));
        assert!(unbalanced_vertices(&graph).is_empty());
    }
}
