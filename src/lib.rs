//! graph-engine — generic in-memory graph algorithms.
//!
//! Build an immutable [`Graph`] once, then run any number of read-only
//! queries over it: traversal, shortest paths, connectivity and ordering.
//! Every query returns an owned result; nothing is cached between calls, so
//! a graph can be shared across threads without locking.

pub mod cli;
pub mod config;
pub mod connectivity;
pub mod graph;
pub mod ordering;
pub mod shortest_path;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::EngineConfig;
pub use connectivity::{
    connected_components, kruskal_mst, tarjan_scc, union_find, DisjointSetForest,
};
pub use graph::{bfs, dfs, dfs_tree, dfs_visit, Dfs, Graph, GraphBuilder, Neighbors};
pub use ordering::{is_bipartite, topo_sort};
pub use shortest_path::{
    a_star, all_pairs_dijkstra, bellman_ford, dijkstra, dijkstra_to, floyd_warshall,
};
pub use types::{
    AllPairs, Coloring, ComponentMap, DistanceTable, Edge, GraphError, GraphResult, Path,
    SearchOutcome, SpanningForest, TopoOrder, Vertex, Weight,
};
