//! Tarjan's strongly connected components, iterative.

use crate::graph::{Graph, Neighbors};
use crate::types::{ComponentMap, GraphResult, Vertex, Weight};

const UNVISITED: usize = usize::MAX;

/// Explicit call-stack frame: the vertex and its remaining neighbors.
struct Frame<'a, W> {
    vertex: Vertex,
    neighbors: Neighbors<'a, W>,
}

/// Strongly connected components in a single DFS pass.
///
/// Two vertices share a component id iff each reaches the other. Ids are
/// numbered in the order each component's root was discovered. Undirected
/// graphs yield their connected components.
pub fn tarjan_scc<W: Weight>(graph: &Graph<W>) -> GraphResult<ComponentMap> {
    let n = graph.vertex_count();
    log::debug!("tarjan_scc: vertices={} edges={}", n, graph.edge_count());

    let mut index = vec![UNVISITED; n];
    let mut lowlink = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut scc_stack: Vec<Vertex> = Vec::new();
    let mut next_index = 0usize;

    // Component per vertex in completion order, and each component's root index.
    let mut completed = vec![0usize; n];
    let mut root_index: Vec<usize> = Vec::new();

    for start in 0..n {
        if index[start] != UNVISITED {
            continue;
        }

        index[start] = next_index;
        lowlink[start] = next_index;
        next_index += 1;
        scc_stack.push(start);
        on_stack[start] = true;
        let mut call_stack = vec![Frame {
            vertex: start,
            neighbors: graph.neighbors_of(start),
        }];

        while let Some(frame) = call_stack.last_mut() {
            let v = frame.vertex;
            if let Some((w, _)) = frame.neighbors.next() {
                if index[w] == UNVISITED {
                    index[w] = next_index;
                    lowlink[w] = next_index;
                    next_index += 1;
                    scc_stack.push(w);
                    on_stack[w] = true;
                    call_stack.push(Frame {
                        vertex: w,
                        neighbors: graph.neighbors_of(w),
                    });
                } else if on_stack[w] {
                    lowlink[v] = lowlink[v].min(index[w]);
                }
                continue;
            }

            if lowlink[v] == index[v] {
                let component = root_index.len();
                root_index.push(index[v]);
                while let Some(w) = scc_stack.pop() {
                    on_stack[w] = false;
                    completed[w] = component;
                    if w == v {
                        break;
                    }
                }
            }

            call_stack.pop();
            if let Some(parent) = call_stack.last() {
                let p = parent.vertex;
                lowlink[p] = lowlink[p].min(lowlink[v]);
            }
        }
    }

    // Renumber from completion order to root discovery order.
    let mut by_discovery: Vec<usize> = (0..root_index.len()).collect();
    by_discovery.sort_by_key(|&c| root_index[c]);
    let mut remap = vec![0usize; root_index.len()];
    for (new_id, &old_id) in by_discovery.iter().enumerate() {
        remap[old_id] = new_id;
    }
    let ids = completed.into_iter().map(|c| remap[c]).collect();

    log::debug!("tarjan_scc: {} components", root_index.len());
    Ok(ComponentMap::from_ids(ids, root_index.len()))
}
