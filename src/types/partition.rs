//! Vertex partitions and orderings: components, colorings, topological
//! orders, spanning forests.

use serde::Serialize;

use super::{Edge, Vertex, Weight};

/// Mapping vertex -> component id (0-based, dense).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentMap {
    ids: Vec<usize>,
    count: usize,
}

impl ComponentMap {
    pub(crate) fn from_ids(ids: Vec<usize>, count: usize) -> Self {
        Self { ids, count }
    }

    /// Component id of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    pub fn component_of(&self, v: Vertex) -> usize {
        self.ids[v]
    }

    /// Number of distinct components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of vertices mapped.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `a` and `b` share a component. Out-of-range ids never do.
    pub fn same_component(&self, a: Vertex, b: Vertex) -> bool {
        match (self.ids.get(a), self.ids.get(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Component ids indexed by vertex.
    pub fn as_slice(&self) -> &[usize] {
        &self.ids
    }

    /// Members of each component, indexed by component id, vertices ascending.
    pub fn components(&self) -> Vec<Vec<Vertex>> {
        let mut groups = vec![Vec::new(); self.count];
        for (v, &c) in self.ids.iter().enumerate() {
            groups[c].push(v);
        }
        groups
    }
}

/// A proper 2-coloring: color 0 or 1 per vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coloring {
    colors: Vec<u8>,
}

impl Coloring {
    pub(crate) fn from_colors(colors: Vec<u8>) -> Self {
        Self { colors }
    }

    /// Color (0 or 1) of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    pub fn color(&self, v: Vertex) -> u8 {
        self.colors[v]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.colors
    }

    /// Split vertices into the color-0 and color-1 sides.
    pub fn partition(&self) -> (Vec<Vertex>, Vec<Vertex>) {
        (0..self.colors.len()).partition(|&v| self.colors[v] == 0)
    }
}

/// A complete topological order of every vertex.
///
/// Only ever constructed for acyclic graphs; a cyclic graph yields
/// `GraphError::CycleDetected` instead of a partial order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopoOrder {
    order: Vec<Vertex>,
}

impl TopoOrder {
    pub(crate) fn new(order: Vec<Vertex>) -> Self {
        Self { order }
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.order
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Index of `v` within the order.
    pub fn position(&self, v: Vertex) -> Option<usize> {
        self.order.iter().position(|&u| u == v)
    }

    pub fn into_vec(self) -> Vec<Vertex> {
        self.order
    }
}

impl<'a> IntoIterator for &'a TopoOrder {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// A minimum spanning forest (one tree per connected component).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningForest<W> {
    /// Chosen edges in the order they were accepted.
    pub edges: Vec<Edge<W>>,
    /// Sum of the chosen edge weights.
    pub total_weight: W,
    /// Number of trees in the forest.
    pub tree_count: usize,
}

impl<W: Weight> SpanningForest<W> {
    /// True when the forest is a single spanning tree.
    pub fn is_spanning_tree(&self) -> bool {
        self.tree_count <= 1
    }
}
