//! A* search guided by a caller-supplied heuristic.

use crate::graph::Graph;
use crate::types::{GraphResult, Path, SearchOutcome, Vertex, Weight};

use super::{improves, reject_negative_weights, MinQueue};

/// Shortest path from `source` to `target` using `heuristic` as the estimate
/// of remaining cost.
///
/// Admissibility is the caller's responsibility: an overestimating heuristic
/// still returns a path, just not necessarily the cheapest one. Negative
/// weights are rejected with `NegativeWeight`, exactly as in Dijkstra.
/// An unreachable target is `SearchOutcome::NoPathFound`.
pub fn a_star<W, H>(
    graph: &Graph<W>,
    source: Vertex,
    target: Vertex,
    heuristic: H,
) -> GraphResult<SearchOutcome<W>>
where
    W: Weight,
    H: Fn(Vertex) -> W,
{
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;
    reject_negative_weights(graph)?;
    log::debug!("a_star: source={} target={}", source, target);

    let n = graph.vertex_count();
    let mut g_score = vec![W::INFINITY; n];
    let mut came_from: Vec<Option<Vertex>> = vec![None; n];
    let mut queue = MinQueue::new();

    g_score[source] = W::ZERO;
    queue.push(source, heuristic(source));

    while let Some((u, f)) = queue.pop() {
        // Stale entry: u was re-queued with a better score since.
        if improves(g_score[u].saturating_add(heuristic(u)), f) {
            continue;
        }
        if u == target {
            return Ok(SearchOutcome::Found(Path {
                cost: g_score[u],
                vertices: reconstruct(&came_from, source, target),
            }));
        }

        for (v, weight) in graph.neighbors_of(u) {
            let tentative = g_score[u].saturating_add(weight);
            if improves(tentative, g_score[v]) {
                g_score[v] = tentative;
                came_from[v] = Some(u);
                queue.push(v, tentative.saturating_add(heuristic(v)));
            }
        }
    }

    Ok(SearchOutcome::NoPathFound)
}

fn reconstruct(came_from: &[Option<Vertex>], source: Vertex, target: Vertex) -> Vec<Vertex> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match came_from[current] {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
