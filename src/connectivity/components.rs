//! Weakly connected components and minimum spanning forests, both driven by
//! the disjoint-set forest.

use crate::graph::Graph;
use crate::types::{ComponentMap, Edge, SpanningForest, Weight};

use super::union_find::DisjointSetForest;

/// Connected components, ignoring edge direction.
///
/// Component ids ascend with each component's smallest vertex.
pub fn connected_components<W: Weight>(graph: &Graph<W>) -> ComponentMap {
    let n = graph.vertex_count();
    let mut forest = DisjointSetForest::new(n);
    for edge in graph.edges() {
        forest.union_roots(edge.source, edge.target);
    }

    let mut id_of_root = vec![usize::MAX; n];
    let mut ids = Vec::with_capacity(n);
    let mut count = 0;
    for v in 0..n {
        let root = forest.find_root(v);
        if id_of_root[root] == usize::MAX {
            id_of_root[root] = count;
            count += 1;
        }
        ids.push(id_of_root[root]);
    }
    ComponentMap::from_ids(ids, count)
}

/// Kruskal's minimum spanning forest, ignoring edge direction.
///
/// Edges are considered in ascending weight (ties in stored order); an edge
/// is kept when it joins two different trees. Self-loops are never kept.
pub fn kruskal_mst<W: Weight>(graph: &Graph<W>) -> SpanningForest<W> {
    let mut candidates: Vec<&Edge<W>> = graph.edges().iter().collect();
    candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut forest = DisjointSetForest::new(graph.vertex_count());
    let mut edges = Vec::new();
    let mut total_weight = W::ZERO;
    for edge in candidates {
        if forest.union_roots(edge.source, edge.target) {
            total_weight = total_weight.saturating_add(edge.weight);
            edges.push(*edge);
        }
    }

    log::debug!(
        "kruskal_mst: kept {} of {} edges, {} trees",
        edges.len(),
        graph.edge_count(),
        forest.set_count()
    );
    SpanningForest {
        edges,
        total_weight,
        tree_count: forest.set_count(),
    }
}
