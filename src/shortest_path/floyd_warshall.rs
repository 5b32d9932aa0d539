//! Floyd-Warshall all-pairs shortest paths.

use crate::graph::Graph;
use crate::types::{AllPairs, GraphError, GraphResult, Weight};

use super::improves;

/// All-pairs shortest paths in O(V³) time and O(V²) space.
///
/// Returns the `V x V` distance matrix with a next-hop matrix for path
/// reconstruction. If any `dist[i][i]` ends below zero the whole computation
/// reports `NegativeCycleDetected`.
pub fn floyd_warshall<W: Weight>(graph: &Graph<W>) -> GraphResult<AllPairs<W>> {
    let n = graph.vertex_count();
    log::debug!("floyd_warshall: vertices={} edges={}", n, graph.edge_count());

    let mut dist = vec![W::INFINITY; n * n];
    let mut next = vec![None; n * n];
    for i in 0..n {
        dist[i * n + i] = W::ZERO;
    }
    for u in 0..n {
        for (v, weight) in graph.neighbors_of(u) {
            if improves(weight, dist[u * n + v]) {
                dist[u * n + v] = weight;
                next[u * n + v] = Some(v);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let d_ik = dist[i * n + k];
            if d_ik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let d_kj = dist[k * n + j];
                if d_kj.is_infinite() {
                    continue;
                }
                let candidate = d_ik.saturating_add(d_kj);
                if improves(candidate, dist[i * n + j]) {
                    dist[i * n + j] = candidate;
                    next[i * n + j] = next[i * n + k];
                }
            }
        }
    }

    if (0..n).any(|i| dist[i * n + i].is_negative()) {
        log::debug!("floyd_warshall: negative cycle detected");
        return Err(GraphError::NegativeCycleDetected);
    }

    Ok(AllPairs::from_parts(n, dist, next))
}
