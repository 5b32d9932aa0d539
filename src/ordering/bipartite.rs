//! Bipartiteness by BFS 2-coloring.

use std::collections::VecDeque;

use crate::graph::Graph;
use crate::types::{Coloring, GraphError, GraphResult, Weight};

const UNCOLORED: u8 = u8::MAX;

/// 2-color the graph, or report the edge that closes an odd cycle.
///
/// Edge direction is ignored: bipartiteness is a property of the underlying
/// undirected graph. Every uncolored vertex, in ascending order, seeds a BFS
/// with color 0. A self-loop is an odd cycle.
pub fn is_bipartite<W: Weight>(graph: &Graph<W>) -> GraphResult<Coloring> {
    let n = graph.vertex_count();
    let mut colors = vec![UNCOLORED; n];
    let mut queue = VecDeque::new();

    for start in 0..n {
        if colors[start] != UNCOLORED {
            continue;
        }
        colors[start] = 0;
        queue.push_back(start);

        while let Some(u) = queue.pop_front() {
            for (v, _) in graph.incident(u)? {
                if colors[v] == UNCOLORED {
                    colors[v] = 1 - colors[u];
                    queue.push_back(v);
                } else if colors[v] == colors[u] {
                    log::debug!("is_bipartite: edge ({}, {}) closes an odd cycle", u, v);
                    return Err(GraphError::NotBipartite { from: u, to: v });
                }
            }
        }
    }

    Ok(Coloring::from_colors(colors))
}
