//! Kahn's topological sort.

use std::collections::VecDeque;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, TopoOrder, Weight};

/// Topological order of every vertex.
///
/// Zero in-degree vertices are emitted FIFO, seeded in ascending vertex
/// order, so the output is deterministic. If fewer than `V` vertices can be
/// emitted the graph has a cycle and the result is `CycleDetected`, never a
/// shortened order. In an undirected graph any edge is a cycle.
pub fn topo_sort<W: Weight>(graph: &Graph<W>) -> GraphResult<TopoOrder> {
    let n = graph.vertex_count();
    let mut in_degree = vec![0usize; n];
    for u in 0..n {
        for (v, _) in graph.neighbors_of(u) {
            in_degree[v] += 1;
        }
    }

    let mut queue: VecDeque<_> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut order = Vec::with_capacity(n);
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for (v, _) in graph.neighbors_of(u) {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    if order.len() < n {
        let unresolved = n - order.len();
        log::debug!("topo_sort: cycle detected, {} vertices unresolved", unresolved);
        return Err(GraphError::CycleDetected { unresolved });
    }
    Ok(TopoOrder::new(order))
}
