//! Depth-first reachability search

use crate::graph::DirectedGraph;

/// Vertices marked by one reachability search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    marked: Vec<bool>,
}

impl VisitedSet {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            marked: vec![false; vertex_count],
        }
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.marked.get(vertex).copied().unwrap_or(false)
    }

    /// Mark `vertex`, returning `false` if it was already marked
    fn insert(&mut self, vertex: usize) -> bool {
        !std::mem::replace(&mut self.marked[vertex], true)
    }

    /// Number of marked vertices
    pub fn len(&self) -> usize {
        self.marked.iter().filter(|&&m| m).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.marked.iter().any(|&m| m)
    }

    /// Marked vertices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(vertex, &m)| m.then_some(vertex))
    }

    /// Vertices with at least one incident edge that this search did not mark
    pub fn unmarked_with_degree(&self, graph: &DirectedGraph) -> Vec<usize> {
        graph
            .vertices()
            .filter(|&v| graph.total_degree(v) > 0 && !self.contains(v))
            .collect()
    }
}

/// Mark every vertex reachable from `start` along directed edges, `start`
/// included
///
/// The traversal is depth-first with an explicit stack of
/// `(vertex, next neighbor index)` frames, so deep graphs cannot overflow the
/// call stack. Each vertex is marked before its neighbors are explored.
///
/// # Panics
///
/// Panics if `start` is not a vertex of `graph`.
pub fn reachable_from(graph: &DirectedGraph, start: usize) -> VisitedSet {
    let mut visited = VisitedSet::new(graph.vertex_count());
    visited.insert(start);

    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    while let Some(frame) = stack.last_mut() {
        let (vertex, next) = *frame;
        let neighbors = graph.neighbors(vertex);

        if next < neighbors.len() {
            frame.1 += 1;
            let neighbor = neighbors[next];
            if visited.insert(neighbor) {
                stack.push((neighbor, 0));
            }
        } else {
            stack.pop();
        }
    }

    visited
}
