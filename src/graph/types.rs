//! Core graph types
//!
//! Vertices have no object of their own: a vertex is its position in
//! `0..vertex_count`.

use serde::Serialize;

/// A directed edge `src -> dest`
///
/// Parallel edges and self-loops are allowed; each occurrence counts
/// separately towards the degrees of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    pub src: usize,
    pub dest: usize,
}

impl Edge {
    pub fn new(src: usize, dest: usize) -> Self {
        Self { src, dest }
    }

    pub fn reversed(&self) -> Self {
        Self {
            src: self.dest,
            dest: self.src,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.src == self.dest
    }
}

impl From<(usize, usize)> for Edge {
    fn from((src, dest): (usize, usize)) -> Self {
        Self { src, dest }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.src, self.dest)
    }
}
