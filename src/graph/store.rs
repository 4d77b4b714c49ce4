use crate::error::{Endpoint, EulerError};
use crate::graph::Edge;

/// Adjacency-list storage for a directed graph over a fixed vertex set
///
/// Out-degrees are the lengths of the adjacency lists and in-degrees are
/// counted as edges are added, so both are always in sync with the edge set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph {
    adjacency: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    edge_count: usize,
}

impl DirectedGraph {
    /// Create a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            in_degree: vec![0; vertex_count],
            edge_count: 0,
        }
    }

    /// Like [`Self::new`], but reports a vertex count that cannot be
    /// allocated instead of aborting
    pub fn try_new(vertex_count: usize) -> Result<Self, EulerError> {
        let too_large = |_| EulerError::GraphTooLarge { vertex_count };

        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count).map_err(too_large)?;
        adjacency.resize_with(vertex_count, Vec::new);

        let mut in_degree = Vec::new();
        in_degree.try_reserve_exact(vertex_count).map_err(too_large)?;
        in_degree.resize(vertex_count, 0);

        Ok(Self {
            adjacency,
            in_degree,
            edge_count: 0,
        })
    }

    /// Build a graph from an edge list, adding edges in list order
    ///
    /// Fails when the vertex set cannot be allocated, or on the first edge
    /// with an endpoint outside `0..vertex_count`.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, EulerError>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::try_new(vertex_count)?;
        for (edge_index, edge) in edges.into_iter().enumerate() {
            graph.check_endpoint(edge_index, Endpoint::Source, edge.src)?;
            graph.check_endpoint(edge_index, Endpoint::Destination, edge.dest)?;
            graph.push_edge(edge.src, edge.dest);
        }
        Ok(graph)
    }

    /// Build a graph from `(src, dest)` pairs
    pub fn from_pairs(vertex_count: usize, pairs: &[(usize, usize)]) -> Result<Self, EulerError> {
        Self::from_edges(vertex_count, pairs.iter().copied().map(Edge::from))
    }

    /// Append `dest` to the adjacency list of `src` and bump the in-degree of
    /// `dest`
    pub fn add_edge(&mut self, src: usize, dest: usize) -> Result<(), EulerError> {
        let edge_index = self.edge_count;
        self.check_endpoint(edge_index, Endpoint::Source, src)?;
        self.check_endpoint(edge_index, Endpoint::Destination, dest)?;
        self.push_edge(src, dest);
        Ok(())
    }

    fn check_endpoint(
        &self,
        edge_index: usize,
        endpoint: Endpoint,
        vertex: usize,
    ) -> Result<(), EulerError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(EulerError::VertexOutOfRange {
                edge_index,
                endpoint,
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    // Callers have validated both endpoints.
    pub(crate) fn push_edge(&mut self, src: usize, dest: usize) {
        self.adjacency[src].push(dest);
        self.in_degree[dest] += 1;
        self.edge_count += 1;
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Destinations of the outgoing edges of `vertex`, in insertion order
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not below [`vertex_count`](Self::vertex_count).
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    pub fn out_degree(&self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }

    pub fn in_degree(&self, vertex: usize) -> usize {
        self.in_degree[vertex]
    }

    pub fn total_degree(&self, vertex: usize) -> usize {
        self.out_degree(vertex) + self.in_degree(vertex)
    }

    /// Iterate over all vertex identifiers
    pub fn vertices(&self) -> std::ops::Range<usize> {
        0..self.vertex_count()
    }

    /// Iterate over every edge, grouped by source vertex in ascending order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(src, dests)| dests.iter().map(move |&dest| Edge::new(src, dest)))
    }

    /// Build a new graph with every edge reversed
    ///
    /// Parallel edges stay parallel and self-loops stay in place. The input
    /// graph is left untouched.
    pub fn transpose(&self) -> DirectedGraph {
        let mut transposed = DirectedGraph::new(self.vertex_count());
        for edge in self.edges().map(|edge| edge.reversed()) {
            transposed.push_edge(edge.src, edge.dest);
        }
        transposed
    }

    /// Number of edges `src -> dest`
    pub fn edge_multiplicity(&self, src: usize, dest: usize) -> usize {
        self.adjacency[src].iter().filter(|&&v| v == dest).count()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_graph_has_no_edges() {
        let graph = DirectedGraph::new(4);

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
        for v in graph.vertices() {
            assert_eq!(graph.out_degree(v), 0);
            assert_eq!(graph.in_degree(v), 0);
        }
    }

    #[test]
    fn test_degrees_track_edges() {
        let graph = DirectedGraph::from_pairs(3, &[(0, 1), (0, 2), (2, 1), (1, 1)]).unwrap();

        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors(0), &[1, 2]);
        assert_eq!(graph.out_degree(0), 2);
        assert_eq!(graph.in_degree(0), 0);
        // Self-loop counts on both sides.
        assert_eq!(graph.out_degree(1), 1);
        assert_eq!(graph.in_degree(1), 3);
        assert_eq!(graph.total_degree(2), 2);
    }

    #[test]
    fn test_parallel_edges_count_separately() {
        let graph = DirectedGraph::from_pairs(2, &[(0, 1), (0, 1), (1, 0)]).unwrap();

        assert_eq!(graph.edge_multiplicity(0, 1), 2);
        assert_eq!(graph.in_degree(1), 2);
        assert_eq!(graph.out_degree(0), 2);
    }

    #[test]
    fn test_add_edge_rejects_out_of_range() {
        let mut graph = DirectedGraph::new(2);
        graph.add_edge(0, 1).unwrap();

        let err = graph.add_edge(1, 2).unwrap_err();
        match err {
            EulerError::VertexOutOfRange {
                edge_index,
                endpoint,
                vertex,
                vertex_count,
            } => {
                assert_eq!(edge_index, 1);
                assert_eq!(endpoint, Endpoint::Destination);
                assert_eq!(vertex, 2);
                assert_eq!(vertex_count, 2);
            }
            other => panic!("Expected VertexOutOfRange, got {other:?}"),
        }
        // The rejected edge left no trace.
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.in_degree(1), 1);
    }

    #[test]
    fn test_from_edges_reports_source_endpoint() {
        let err = DirectedGraph::from_pairs(3, &[(0, 1), (5, 0)]).unwrap_err();
        assert!(matches!(
            err,
            EulerError::VertexOutOfRange {
                edge_index: 1,
                endpoint: Endpoint::Source,
                vertex: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_unallocatable_vertex_count_is_an_error() {
        let err = DirectedGraph::from_pairs(usize::MAX / 2, &[]).unwrap_err();
        assert!(matches!(
            err,
            EulerError::GraphTooLarge {
                vertex_count
            } if vertex_count == usize::MAX / 2
        ));
    }

    #[test]
    fn test_try_new_matches_new() {
        assert_eq!(DirectedGraph::try_new(3).unwrap(), DirectedGraph::new(3));
    }

    #[test]
    fn test_edges_preserve_insertion_order_per_source() {
        let graph = DirectedGraph::from_pairs(3, &[(2, 0), (0, 2), (0, 1)]).unwrap();
        let edges: Vec<Edge> = graph.edges().collect();

        assert_eq!(
            edges,
            vec![Edge::new(0, 2), Edge::new(0, 1), Edge::new(2, 0)]
        );
    }

    #[test]
    fn test_transpose_reverses_every_edge() {
        let graph = DirectedGraph::from_pairs(3, &[(0, 1), (0, 1), (1, 2), (2, 2)]).unwrap();
        let transposed = graph.transpose();

        assert_eq!(transposed.vertex_count(), 3);
        assert_eq!(transposed.edge_count(), 4);
        assert_eq!(transposed.edge_multiplicity(1, 0), 2);
        assert_eq!(transposed.edge_multiplicity(2, 1), 1);
        assert_eq!(transposed.edge_multiplicity(2, 2), 1);
        assert_eq!(transposed.edge_multiplicity(0, 1), 0);
        for v in graph.vertices() {
            assert_eq!(transposed.in_degree(v), graph.out_degree(v));
            assert_eq!(transposed.out_degree(v), graph.in_degree(v));
        }
        // Source graph unchanged.
        assert_eq!(graph.neighbors(0), &[1, 1]);
    }

    #[test]
    fn test_double_transpose_restores_multiplicities() {
        let graph =
            DirectedGraph::from_pairs(4, &[(0, 1), (1, 2), (2, 0), (0, 1), (3, 3), (2, 3)]).unwrap();
        let twice = graph.transpose().transpose();

        for u in graph.vertices() {
            for v in graph.vertices() {
                assert_eq!(twice.edge_multiplicity(u, v), graph.edge_multiplicity(u, v));
            }
        }
    }

    #[test]
    fn test_zero_vertex_graph() {
        let graph = DirectedGraph::from_edges(0, Vec::<Edge>::new()).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edges().count(), 0);
        assert_eq!(graph.transpose(), graph);
    }
}
