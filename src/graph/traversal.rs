//! Graph traversal algorithms (BFS, iterative DFS).

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::types::{DistanceTable, GraphResult, Vertex, Weight};

use super::{Graph, Neighbors};

/// Breadth-first search from `source`; distance is the hop count and the
/// predecessor is the BFS-tree parent.
pub fn bfs<W: Weight>(graph: &Graph<W>, source: Vertex) -> GraphResult<DistanceTable<usize>> {
    graph.check_vertex(source)?;

    let mut table = DistanceTable::new(source, graph.vertex_count());
    let mut queue: VecDeque<Vertex> = VecDeque::new();
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let depth = table.distance(current);
        for (neighbor, _) in graph.neighbors_of(current) {
            if table.is_reachable(neighbor) {
                continue;
            }
            table.set(neighbor, depth + 1, Some(current));
            queue.push_back(neighbor);
        }
    }

    Ok(table)
}

/// Lazy pre-order depth-first traversal from `source`.
///
/// The iterator is finite and cannot be restarted: once exhausted it keeps
/// returning `None`.
pub fn dfs<W: Weight>(graph: &Graph<W>, source: Vertex) -> GraphResult<Dfs<'_, W>> {
    graph.check_vertex(source)?;
    Ok(Dfs {
        graph,
        source,
        started: false,
        visited: vec![false; graph.vertex_count()],
        stack: Vec::new(),
    })
}

/// Run a DFS from `source`, calling `visit` on each vertex in discovery order.
pub fn dfs_visit<W, F>(graph: &Graph<W>, source: Vertex, mut visit: F) -> GraphResult<()>
where
    W: Weight,
    F: FnMut(Vertex),
{
    for v in dfs(graph, source)? {
        visit(v);
    }
    Ok(())
}

/// DFS tree from `source`: distance is the depth in the DFS tree and the
/// predecessor is the DFS parent.
pub fn dfs_tree<W: Weight>(graph: &Graph<W>, source: Vertex) -> GraphResult<DistanceTable<usize>> {
    let mut walk = dfs(graph, source)?;
    let mut table = DistanceTable::new(source, graph.vertex_count());
    while let Some((v, parent)) = walk.advance() {
        if let Some(p) = parent {
            let depth = table.distance(p) + 1;
            table.set(v, depth, Some(p));
        }
    }
    Ok(table)
}

/// One activation record of the explicit DFS stack.
struct Frame<'a, W> {
    vertex: Vertex,
    neighbors: Neighbors<'a, W>,
}

/// Pre-order DFS iterator backed by an explicit stack of frames.
pub struct Dfs<'a, W> {
    graph: &'a Graph<W>,
    source: Vertex,
    started: bool,
    visited: Vec<bool>,
    stack: Vec<Frame<'a, W>>,
}

impl<'a, W: Weight> Dfs<'a, W> {
    /// Current DFS depth: number of open frames minus one.
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    fn enter(&mut self, v: Vertex) {
        self.visited[v] = true;
        self.stack.push(Frame {
            vertex: v,
            neighbors: self.graph.neighbors_of(v),
        });
    }

    /// Next discovered vertex together with its DFS parent.
    fn advance(&mut self) -> Option<(Vertex, Option<Vertex>)> {
        if !self.started {
            self.started = true;
            self.enter(self.source);
            return Some((self.source, None));
        }
        while let Some(frame) = self.stack.last_mut() {
            let parent = frame.vertex;
            match frame.neighbors.find(|&(w, _)| !self.visited[w]) {
                Some((w, _)) => {
                    self.enter(w);
                    return Some((w, Some(parent)));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl<W: Weight> Iterator for Dfs<'_, W> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        self.advance().map(|(v, _)| v)
    }
}

impl<W: Weight> FusedIterator for Dfs<'_, W> {}
