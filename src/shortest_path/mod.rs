//! Shortest-path family: Dijkstra, Bellman-Ford, Floyd-Warshall, A*.
//!
//! Every algorithm reads the graph without mutating it and returns an owned
//! result. Distances use the `Weight` saturating-infinity arithmetic: an
//! unreached `INFINITY` absorbs any addition, and finite sums clamp below it.

pub mod a_star;
pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod parallel;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, Vertex, Weight};

pub use a_star::a_star;
pub use bellman_ford::bellman_ford;
pub use dijkstra::{dijkstra, dijkstra_to};
pub use floyd_warshall::floyd_warshall;
pub use parallel::all_pairs_dijkstra;

/// Fail with `NegativeWeight` naming the first negative edge, if any.
pub(crate) fn reject_negative_weights<W: Weight>(graph: &Graph<W>) -> GraphResult<()> {
    match graph.first_negative_edge() {
        Some(edge) => Err(GraphError::NegativeWeight {
            from: edge.source,
            to: edge.target,
        }),
        None => Ok(()),
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest priority first,
/// and among equal priorities the earliest inserted.
struct QueueEntry<W> {
    priority: W,
    seq: u64,
    vertex: Vertex,
}

impl<W: Weight> Ord for QueueEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<W: Weight> PartialOrd for QueueEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> PartialEq for QueueEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for QueueEntry<W> {}

/// Min-priority queue with deterministic insertion-order tie breaking.
pub(crate) struct MinQueue<W> {
    heap: BinaryHeap<QueueEntry<W>>,
    next_seq: u64,
}

impl<W: Weight> MinQueue<W> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, vertex: Vertex, priority: W) {
        self.heap.push(QueueEntry {
            priority,
            seq: self.next_seq,
            vertex,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<(Vertex, W)> {
        self.heap.pop().map(|e| (e.vertex, e.priority))
    }
}

/// True when `candidate` strictly improves on `current`.
pub(crate) fn improves<W: Weight>(candidate: W, current: W) -> bool {
    candidate.total_cmp(&current) == Ordering::Less
}
