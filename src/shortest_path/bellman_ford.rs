//! Bellman-Ford single-source shortest paths, negative weights allowed.

use crate::graph::Graph;
use crate::types::{DistanceTable, GraphError, GraphResult, Vertex, Weight};

use super::improves;

/// Single-source shortest paths tolerating negative weights.
///
/// Runs up to `V - 1` relaxation rounds (stopping early once a round changes
/// nothing), then one verification round. If that round can still relax an
/// edge, a negative cycle is reachable from `source` and the result is
/// `NegativeCycleDetected` rather than a partial table. An undirected
/// negative edge is itself a negative cycle.
///
/// A relaxation whose sum falls below the weight type's range fails with
/// `DistanceUnderflow` instead of clamping.
pub fn bellman_ford<W: Weight>(
    graph: &Graph<W>,
    source: Vertex,
) -> GraphResult<DistanceTable<W>> {
    graph.check_vertex(source)?;
    let n = graph.vertex_count();
    log::debug!("bellman_ford: source={} vertices={} edges={}", source, n, graph.edge_count());

    let mut table = DistanceTable::new(source, n);
    for round in 1..n {
        let relaxed = relax_round(graph, &mut table)?;
        log::trace!("bellman_ford: round {} relaxed {} edges", round, relaxed);
        if relaxed == 0 {
            break;
        }
    }

    if relax_round(graph, &mut table)? > 0 {
        log::debug!("bellman_ford: negative cycle reachable from {}", source);
        return Err(GraphError::NegativeCycleDetected);
    }

    Ok(table)
}

/// Relax every edge once; returns how many distances improved.
fn relax_round<W: Weight>(graph: &Graph<W>, table: &mut DistanceTable<W>) -> GraphResult<usize> {
    let mut relaxed = 0;
    for u in 0..graph.vertex_count() {
        let dist_u = table.distance(u);
        if dist_u.is_infinite() {
            continue;
        }
        for (v, weight) in graph.neighbors_of(u) {
            let candidate = match dist_u.checked_add(weight) {
                Some(sum) => sum,
                None if weight.is_negative() => {
                    log::debug!("bellman_ford: distance underflow on edge ({}, {})", u, v);
                    return Err(GraphError::DistanceUnderflow { from: u, to: v });
                }
                None => W::MAX_FINITE,
            };
            if improves(candidate, table.distance(v)) {
                table.set(v, candidate, Some(u));
                relaxed += 1;
            }
        }
    }
    Ok(relaxed)
}
