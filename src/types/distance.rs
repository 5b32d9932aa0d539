//! Shortest-path result structures.

use serde::Serialize;

use super::{Vertex, Weight};

/// Per-vertex `(distance, predecessor)` table from a single source.
///
/// Distance is `W::INFINITY` for unreached vertices. The predecessor is
/// `None` for the source and for unreached vertices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceTable<W> {
    source: Vertex,
    distances: Vec<W>,
    predecessors: Vec<Option<Vertex>>,
}

impl<W: Weight> DistanceTable<W> {
    /// A table with every vertex unreached except `source` at distance zero.
    pub(crate) fn new(source: Vertex, vertex_count: usize) -> Self {
        let mut distances = vec![W::INFINITY; vertex_count];
        distances[source] = W::ZERO;
        Self {
            source,
            distances,
            predecessors: vec![None; vertex_count],
        }
    }

    pub(crate) fn from_parts(
        source: Vertex,
        distances: Vec<W>,
        predecessors: Vec<Option<Vertex>>,
    ) -> Self {
        Self {
            source,
            distances,
            predecessors,
        }
    }

    pub(crate) fn set(&mut self, v: Vertex, distance: W, predecessor: Option<Vertex>) {
        self.distances[v] = distance;
        self.predecessors[v] = predecessor;
    }

    /// The vertex all distances are measured from.
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Number of vertices covered by the table.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// True for a table over an empty graph.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance to `v`, or `W::INFINITY` when unreached.
    ///
    /// # Panics
    /// Panics if `v >= self.len()`.
    pub fn distance(&self, v: Vertex) -> W {
        self.distances[v]
    }

    /// Predecessor of `v` on the recorded shortest path.
    ///
    /// # Panics
    /// Panics if `v >= self.len()`.
    pub fn predecessor(&self, v: Vertex) -> Option<Vertex> {
        self.predecessors[v]
    }

    /// Whether `v` was reached from the source. Out-of-range ids are unreached.
    pub fn is_reachable(&self, v: Vertex) -> bool {
        self.distances.get(v).is_some_and(|d| !d.is_infinite())
    }

    /// All distances, indexed by vertex.
    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    /// Iterate `(vertex, distance, predecessor)` in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, W, Option<Vertex>)> + '_ {
        self.distances
            .iter()
            .zip(&self.predecessors)
            .enumerate()
            .map(|(v, (&d, &p))| (v, d, p))
    }

    /// Reconstruct the path `source -> .. -> v` by walking predecessors.
    pub fn path_to(&self, v: Vertex) -> Option<Vec<Vertex>> {
        if !self.is_reachable(v) {
            return None;
        }
        let mut path = vec![v];
        let mut current = v;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
            if path.len() > self.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// A concrete source-to-target path and its total cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<W> {
    /// Sum of edge weights along `vertices`.
    pub cost: W,
    /// Vertices from source to target inclusive.
    pub vertices: Vec<Vertex>,
}

/// Outcome of a single-target search. An unreachable target is a normal
/// result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SearchOutcome<W> {
    /// A path was found.
    Found(Path<W>),
    /// The target is not reachable from the source.
    NoPathFound,
}

impl<W: Weight> SearchOutcome<W> {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path<W>> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPathFound => None,
        }
    }

    /// The path cost, or `W::INFINITY` when no path exists.
    pub fn cost(&self) -> W {
        self.path().map_or(W::INFINITY, |p| p.cost)
    }

    /// True when a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// All-pairs distances with a next-hop matrix for path reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllPairs<W> {
    vertex_count: usize,
    /// Row-major `V x V` distances.
    distances: Vec<W>,
    /// Row-major `V x V` next hop on the shortest `i -> j` path.
    next_hop: Vec<Option<Vertex>>,
}

impl<W: Weight> AllPairs<W> {
    pub(crate) fn from_parts(
        vertex_count: usize,
        distances: Vec<W>,
        next_hop: Vec<Option<Vertex>>,
    ) -> Self {
        Self {
            vertex_count,
            distances,
            next_hop,
        }
    }

    /// Number of vertices (the matrix is `vertex_count x vertex_count`).
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Shortest distance `i -> j`, or `W::INFINITY`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn distance(&self, i: Vertex, j: Vertex) -> W {
        assert!(j < self.vertex_count, "vertex {j} out of range");
        self.distances[i * self.vertex_count + j]
    }

    /// First vertex after `i` on the shortest `i -> j` path.
    pub fn next_hop(&self, i: Vertex, j: Vertex) -> Option<Vertex> {
        if i >= self.vertex_count || j >= self.vertex_count {
            return None;
        }
        self.next_hop[i * self.vertex_count + j]
    }

    /// Reconstruct the shortest path `i -> j` from the next-hop matrix.
    pub fn path(&self, i: Vertex, j: Vertex) -> Option<Vec<Vertex>> {
        if i >= self.vertex_count || j >= self.vertex_count {
            return None;
        }
        if i == j {
            return Some(vec![i]);
        }
        let mut path = vec![i];
        let mut current = i;
        while current != j {
            current = self.next_hop(current, j)?;
            path.push(current);
            if path.len() > self.vertex_count {
                return None;
            }
        }
        Some(path)
    }

    /// Row `i` as a single-source distance table.
    pub fn row(&self, i: Vertex) -> DistanceTable<W> {
        let n = self.vertex_count;
        let distances = self.distances[i * n..(i + 1) * n].to_vec();
        let predecessors = (0..n)
            .map(|j| {
                if j == i {
                    return None;
                }
                self.path(i, j)
                    .and_then(|p| p.len().checked_sub(2).map(|k| p[k]))
            })
            .collect();
        DistanceTable::from_parts(i, distances, predecessors)
    }
}
