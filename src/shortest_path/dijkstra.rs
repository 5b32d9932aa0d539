//! Dijkstra's algorithm for non-negative weights.

use crate::graph::Graph;
use crate::types::{DistanceTable, GraphResult, Path, SearchOutcome, Vertex, Weight};

use super::{improves, reject_negative_weights, MinQueue};

/// Single-source shortest paths.
///
/// Fails with `NegativeWeight` before doing any work if an edge weight is
/// negative. Each vertex is finalized at most once; equal-distance vertices
/// are finalized in the order they were queued.
pub fn dijkstra<W: Weight>(graph: &Graph<W>, source: Vertex) -> GraphResult<DistanceTable<W>> {
    graph.check_vertex(source)?;
    reject_negative_weights(graph)?;
    log::debug!(
        "dijkstra: source={} vertices={} edges={}",
        source,
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut table = DistanceTable::new(source, graph.vertex_count());
    settle(graph, &mut table, None);
    Ok(table)
}

/// Shortest path from `source` to `target`, stopping as soon as the target
/// is finalized. An unreachable target yields `SearchOutcome::NoPathFound`.
pub fn dijkstra_to<W: Weight>(
    graph: &Graph<W>,
    source: Vertex,
    target: Vertex,
) -> GraphResult<SearchOutcome<W>> {
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;
    reject_negative_weights(graph)?;

    let mut table = DistanceTable::new(source, graph.vertex_count());
    settle(graph, &mut table, Some(target));
    Ok(match table.path_to(target) {
        Some(vertices) => SearchOutcome::Found(Path {
            cost: table.distance(target),
            vertices,
        }),
        None => SearchOutcome::NoPathFound,
    })
}

/// Run the main loop over a freshly initialized table. Callers have already
/// validated the source and rejected negative weights.
pub(crate) fn settle<W: Weight>(
    graph: &Graph<W>,
    table: &mut DistanceTable<W>,
    target: Option<Vertex>,
) {
    let mut settled = vec![false; graph.vertex_count()];
    let mut queue = MinQueue::new();
    queue.push(table.source(), W::ZERO);

    while let Some((u, dist_u)) = queue.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;
        if target == Some(u) {
            break;
        }

        for (v, weight) in graph.neighbors_of(u) {
            if settled[v] {
                continue;
            }
            let candidate = dist_u.saturating_add(weight);
            if improves(candidate, table.distance(v)) {
                table.set(v, candidate, Some(u));
                queue.push(v, candidate);
            }
        }
    }
}
