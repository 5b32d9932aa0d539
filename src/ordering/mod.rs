//! Orderings and colorings: Kahn topological sort, bipartite 2-coloring.

pub mod bipartite;
pub mod topo;

pub use bipartite::is_bipartite;
pub use topo::topo_sort;
