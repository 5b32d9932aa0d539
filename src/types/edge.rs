//! The stored edge record.

use serde::Serialize;

use super::{Vertex, Weight};

/// An edge `(source, target, weight)`.
///
/// Whether it is directed is a property of the owning graph, not of the
/// edge: an undirected graph stores each edge once and iterates it from both
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge<W> {
    /// Tail vertex (origin for directed graphs).
    pub source: Vertex,
    /// Head vertex.
    pub target: Vertex,
    /// Edge weight; may be negative.
    pub weight: W,
}

impl<W: Weight> Edge<W> {
    /// Create a new edge.
    pub fn new(source: Vertex, target: Vertex, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// True when both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// The endpoint opposite `v`, if `v` is an endpoint at all.
    pub fn other(&self, v: Vertex) -> Option<Vertex> {
        if v == self.source {
            Some(self.target)
        } else if v == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}

impl<W: Weight> From<(Vertex, Vertex, W)> for Edge<W> {
    fn from((source, target, weight): (Vertex, Vertex, W)) -> Self {
        Self::new(source, target, weight)
    }
}
