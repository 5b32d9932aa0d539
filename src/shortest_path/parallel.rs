//! All-pairs shortest paths by fanning Dijkstra out across worker threads.

use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::graph::Graph;
use crate::types::{DistanceTable, GraphResult, Weight};

use super::dijkstra::settle;
use super::reject_negative_weights;

/// One Dijkstra table per source vertex, computed in parallel.
///
/// The graph is shared read-only; every worker owns the table it fills.
/// `config.worker_threads` sizes the pool (0 = one thread per core).
pub fn all_pairs_dijkstra<W: Weight>(
    graph: &Graph<W>,
    config: &EngineConfig,
) -> GraphResult<Vec<DistanceTable<W>>> {
    reject_negative_weights(graph)?;
    let pool = config.thread_pool()?;
    let n = graph.vertex_count();
    log::debug!(
        "all_pairs_dijkstra: {} sources on {} threads",
        n,
        pool.current_num_threads()
    );

    Ok(pool.install(|| {
        (0..n)
            .into_par_iter()
            .map(|source| {
                let mut table = DistanceTable::new(source, n);
                settle(graph, &mut table, None);
                table
            })
            .collect()
    }))
}
