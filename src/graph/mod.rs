//! In-memory graph store and traversal — the core data structure.

pub mod builder;
pub mod store;
pub mod traversal;

pub use builder::GraphBuilder;
pub use store::{Graph, Neighbors};
pub use traversal::{bfs, dfs, dfs_tree, dfs_visit, Dfs};
