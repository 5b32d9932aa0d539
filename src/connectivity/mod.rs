//! Connectivity: disjoint-set forest, Tarjan SCC, components, spanning forests.

pub mod components;
pub mod tarjan;
pub mod union_find;

pub use components::{connected_components, kruskal_mst};
pub use tarjan::tarjan_scc;
pub use union_find::DisjointSetForest;
