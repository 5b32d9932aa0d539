//! All data types for the graph engine.

pub mod distance;
pub mod edge;
pub mod error;
pub mod partition;
pub mod weight;

pub use distance::{AllPairs, DistanceTable, Path, SearchOutcome};
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use partition::{Coloring, ComponentMap, SpanningForest, TopoOrder};
pub use weight::Weight;

/// Opaque vertex identifier in `0..n`, assigned at graph-build time.
pub type Vertex = usize;
