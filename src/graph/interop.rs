//! Conversions between [`DirectedGraph`] and petgraph graphs

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::graph::DirectedGraph;

impl<N, E> From<&DiGraph<N, E>> for DirectedGraph {
    /// Node index `i` becomes vertex `i`; weights are dropped and every edge,
    /// parallel or self-loop, is kept.
    fn from(graph: &DiGraph<N, E>) -> Self {
        let mut converted = DirectedGraph::new(graph.node_count());
        // Node indices of a `DiGraph` are dense, so endpoints are in range.
        for edge in graph.edge_references() {
            converted.push_edge(edge.source().index(), edge.target().index());
        }
        converted
    }
}

impl DirectedGraph {
    /// Build a petgraph view of this graph with vertex ids as node weights
    pub fn to_petgraph(&self) -> DiGraph<usize, ()> {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count());
        for vertex in self.vertices() {
            graph.add_node(vertex);
        }
        for edge in self.edges() {
            graph.add_edge(NodeIndex::new(edge.src), NodeIndex::new(edge.dest), ());
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_petgraph_keeps_parallel_edges() {
        let mut graph: DiGraph<&str, ()> = DiGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        graph.add_edge(a, b, ());
        graph.add_edge(a, b, ());
        graph.add_edge(b, b, ());

        let converted = DirectedGraph::from(&graph);

        assert_eq!(converted.vertex_count(), 2);
        assert_eq!(converted.edge_multiplicity(0, 1), 2);
        assert_eq!(converted.edge_multiplicity(1, 1), 1);
        assert_eq!(converted.in_degree(1), 3);
    }

    #[test]
    fn test_to_petgraph_round_trip() {
        let graph = DirectedGraph::from_pairs(3, &[(0, 1), (1, 2), (2, 0), (2, 0)]).unwrap();
        let pg = graph.to_petgraph();

        assert_eq!(pg.node_count(), 3);
        assert_eq!(pg.edge_count(), 4);
        assert_eq!(pg[NodeIndex::new(2)], 2);

        let back = DirectedGraph::from(&pg);
        assert_eq!(back, graph);
    }
}
