//! Core graph structure — fixed vertex set, edge arena, offset indexes.

use crate::types::{Edge, GraphError, GraphResult, Vertex, Weight};

/// An immutable graph over vertices `0..n`.
///
/// Edges live once in an arena sorted by source; `out_offsets` slices that
/// arena per vertex and `in_edges`/`in_offsets` index the same edges by
/// target. Undirected graphs iterate both indexes, so every edge is visible
/// from either endpoint without being stored twice.
#[derive(Debug, Clone)]
pub struct Graph<W = f64> {
    vertex_count: usize,
    directed: bool,
    /// All edges, sorted by (source, target), input order kept for duplicates.
    edges: Vec<Edge<W>>,
    /// `edges[out_offsets[u]..out_offsets[u + 1]]` leave `u`.
    out_offsets: Vec<usize>,
    /// Indices into `edges`, grouped by target.
    in_edges: Vec<usize>,
    /// `in_edges[in_offsets[v]..in_offsets[v + 1]]` enter `v`.
    in_offsets: Vec<usize>,
}

impl<W: Weight> Graph<W> {
    /// Build a graph from an edge list.
    ///
    /// Fails with `InvalidEdge` if an endpoint is outside `[0, vertex_count)`
    /// and with `InvalidWeight` on a NaN or infinite weight.
    pub fn build(
        vertex_count: usize,
        edges: &[(Vertex, Vertex, W)],
        directed: bool,
    ) -> GraphResult<Self> {
        Self::from_edges(
            vertex_count,
            edges.iter().copied().map(Edge::from).collect(),
            directed,
        )
    }

    /// Build from already-constructed edge records.
    pub fn from_edges(
        vertex_count: usize,
        mut edges: Vec<Edge<W>>,
        directed: bool,
    ) -> GraphResult<Self> {
        for edge in &edges {
            if edge.source >= vertex_count || edge.target >= vertex_count {
                return Err(GraphError::InvalidEdge {
                    from: edge.source,
                    to: edge.target,
                    vertex_count,
                });
            }
            if !edge.weight.is_valid() {
                return Err(GraphError::InvalidWeight {
                    from: edge.source,
                    to: edge.target,
                });
            }
        }

        // Stable: parallel edges keep their input order.
        edges.sort_by_key(|e| (e.source, e.target));

        let mut out_offsets = vec![0usize; vertex_count + 1];
        let mut in_offsets = vec![0usize; vertex_count + 1];
        for edge in &edges {
            out_offsets[edge.source + 1] += 1;
            in_offsets[edge.target + 1] += 1;
        }
        for i in 0..vertex_count {
            out_offsets[i + 1] += out_offsets[i];
            in_offsets[i + 1] += in_offsets[i];
        }

        let mut cursor = in_offsets.clone();
        let mut in_edges = vec![0usize; edges.len()];
        for (idx, edge) in edges.iter().enumerate() {
            in_edges[cursor[edge.target]] = idx;
            cursor[edge.target] += 1;
        }

        log::debug!(
            "Built {} graph: {} vertices, {} edges",
            if directed { "directed" } else { "undirected" },
            vertex_count,
            edges.len()
        );

        Ok(Self {
            vertex_count,
            directed,
            edges,
            out_offsets,
            in_edges,
            in_offsets,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of stored edges (an undirected edge counts once).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph is directed. Fixed for the graph's lifetime.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// All stored edges, sorted by (source, target).
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Whether `v` is a vertex of this graph.
    pub fn contains(&self, v: Vertex) -> bool {
        v < self.vertex_count
    }

    /// `Ok(())` if `v` is a vertex, `OutOfRange` otherwise.
    pub fn check_vertex(&self, v: Vertex) -> GraphResult<()> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex: v,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Adjacency of `u` as `(neighbor, weight)` pairs.
    ///
    /// Directed graphs yield outgoing edges; undirected graphs yield every
    /// incident edge (a self-loop once).
    pub fn neighbors(&self, u: Vertex) -> GraphResult<Neighbors<'_, W>> {
        self.check_vertex(u)?;
        Ok(self.neighbors_of(u))
    }

    /// Every edge touching `u`, regardless of direction.
    pub fn incident(&self, u: Vertex) -> GraphResult<Neighbors<'_, W>> {
        self.check_vertex(u)?;
        Ok(self.adjacency(u, true))
    }

    /// Number of neighbors `neighbors(u)` yields.
    pub fn out_degree(&self, u: Vertex) -> GraphResult<usize> {
        Ok(self.neighbors(u)?.count())
    }

    /// Number of edges entering `u` (equal to `out_degree` when undirected).
    pub fn in_degree(&self, u: Vertex) -> GraphResult<usize> {
        self.check_vertex(u)?;
        if self.directed {
            Ok(self.in_offsets[u + 1] - self.in_offsets[u])
        } else {
            Ok(self.neighbors_of(u).count())
        }
    }

    /// First edge with a negative weight, in stored order.
    pub fn first_negative_edge(&self) -> Option<&Edge<W>> {
        self.edges.iter().find(|e| e.weight.is_negative())
    }

    /// Whether any edge weight is negative.
    pub fn has_negative_weight(&self) -> bool {
        self.first_negative_edge().is_some()
    }

    /// Unchecked adjacency; callers have already validated `u`.
    pub(crate) fn neighbors_of(&self, u: Vertex) -> Neighbors<'_, W> {
        self.adjacency(u, !self.directed)
    }

    fn adjacency(&self, u: Vertex, with_incoming: bool) -> Neighbors<'_, W> {
        let outgoing = &self.edges[self.out_offsets[u]..self.out_offsets[u + 1]];
        let incoming: &[usize] = if with_incoming {
            &self.in_edges[self.in_offsets[u]..self.in_offsets[u + 1]]
        } else {
            &[]
        };
        Neighbors {
            vertex: u,
            edges: &self.edges,
            outgoing: outgoing.iter(),
            incoming: incoming.iter(),
        }
    }
}

/// Iterator over `(neighbor, weight)` pairs of a vertex.
#[derive(Debug, Clone)]
pub struct Neighbors<'a, W> {
    vertex: Vertex,
    edges: &'a [Edge<W>],
    outgoing: std::slice::Iter<'a, Edge<W>>,
    incoming: std::slice::Iter<'a, usize>,
}

impl<W: Weight> Iterator for Neighbors<'_, W> {
    type Item = (Vertex, W);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(edge) = self.outgoing.next() {
            return Some((edge.target, edge.weight));
        }
        for &idx in self.incoming.by_ref() {
            let edge = &self.edges[idx];
            // Self-loops were already yielded from the outgoing side.
            if edge.source == self.vertex {
                continue;
            }
            return Some((edge.source, edge.weight));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let out = self.outgoing.len();
        (out, Some(out + self.incoming.len()))
    }
}
