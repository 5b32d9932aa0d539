//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphResult, Vertex, Weight};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Endpoints and weights are validated once, in [`GraphBuilder::build`].
pub struct GraphBuilder<W = f64> {
    vertex_count: usize,
    directed: bool,
    edges: Vec<Edge<W>>,
}

impl<W: Weight> GraphBuilder<W> {
    /// A directed builder with `vertex_count` vertices and no edges.
    pub fn directed(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            directed: true,
            edges: Vec::new(),
        }
    }

    /// An undirected builder with `vertex_count` vertices and no edges.
    pub fn undirected(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            directed: false,
            edges: Vec::new(),
        }
    }

    /// Append a fresh vertex, returning its id.
    pub fn add_vertex(&mut self) -> Vertex {
        let id = self.vertex_count;
        self.vertex_count += 1;
        id
    }

    /// Add a weighted edge.
    pub fn edge(&mut self, source: Vertex, target: Vertex, weight: W) -> &mut Self {
        self.edges.push(Edge::new(source, target, weight));
        self
    }

    /// Add an edge of weight `W::ONE`.
    pub fn unweighted_edge(&mut self, source: Vertex, target: Vertex) -> &mut Self {
        self.edge(source, target, W::ONE)
    }

    /// Add a chain `path[0] -> path[1] -> ..`, each edge weighing `weight`.
    pub fn path(&mut self, path: &[Vertex], weight: W) -> &mut Self {
        for pair in path.windows(2) {
            self.edge(pair[0], pair[1], weight);
        }
        self
    }

    /// Number of vertices declared so far.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<W>> {
        Graph::from_edges(self.vertex_count, self.edges, self.directed)
    }
}
