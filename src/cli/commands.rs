//! CLI command implementations for the `gx` driver.
//!
//! Each command loads a JSON graph document, runs one algorithm and writes
//! text or JSON to `out`. The library core never touches files; this module
//! is the only place that does.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::connectivity::{connected_components, kruskal_mst, tarjan_scc};
use crate::graph::{bfs, dfs, Graph};
use crate::ordering::{is_bipartite, topo_sort};
use crate::shortest_path::{
    a_star, all_pairs_dijkstra, bellman_ford, dijkstra, dijkstra_to, floyd_warshall,
};
use crate::types::{ComponentMap, DistanceTable, GraphResult, SearchOutcome, Vertex, Weight};

/// On-disk graph description: `{"vertices": n, "directed": bool, "edges": [[u, v, w], ..]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Vertex count; ids are `0..vertices`.
    pub vertices: usize,
    /// Directed unless stated otherwise.
    #[serde(default = "default_directed")]
    pub directed: bool,
    /// `[source, target, weight]` triples.
    #[serde(default)]
    pub edges: Vec<(Vertex, Vertex, f64)>,
}

fn default_directed() -> bool {
    true
}

impl GraphDocument {
    /// Validate and build the graph.
    pub fn into_graph(self) -> GraphResult<Graph<f64>> {
        Graph::build(self.vertices, &self.edges, self.directed)
    }
}

/// Read a graph document from `path`.
pub fn load_graph(path: &Path) -> GraphResult<Graph<f64>> {
    let raw = std::fs::read_to_string(path)?;
    let doc: GraphDocument = serde_json::from_str(&raw)?;
    log::debug!("Loaded {} ({} edges)", path.display(), doc.edges.len());
    doc.into_graph()
}

/// Display basic information about a graph document.
pub fn cmd_info(path: &Path, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let negative = graph.has_negative_weight();
    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "directed": graph.is_directed(),
            "negative_weights": negative,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "File: {}", path.display())?;
        writeln!(out, "Vertices: {}", graph.vertex_count())?;
        writeln!(out, "Edges: {}", graph.edge_count())?;
        writeln!(out, "Directed: {}", graph.is_directed())?;
        writeln!(out, "Negative weights: {}", negative)?;
    }
    Ok(())
}

/// Hop distances from `source`.
pub fn cmd_bfs(path: &Path, source: Vertex, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    write_table(&bfs(&graph, source)?, json, out)
}

/// Pre-order DFS from `source`.
pub fn cmd_dfs(path: &Path, source: Vertex, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let order: Vec<Vertex> = dfs(&graph, source)?.collect();
    if json {
        writeln!(out, "{}", serde_json::json!({ "order": order }))?;
    } else {
        writeln!(out, "{}", join(&order))?;
    }
    Ok(())
}

/// Dijkstra from `source`, or to a single `target`.
pub fn cmd_dijkstra(
    path: &Path,
    source: Vertex,
    target: Option<Vertex>,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    match target {
        Some(target) => write_outcome(&dijkstra_to(&graph, source, target)?, json, out),
        None => write_table(&dijkstra(&graph, source)?, json, out),
    }
}

/// Bellman-Ford from `source`.
pub fn cmd_bellman_ford(
    path: &Path,
    source: Vertex,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    write_table(&bellman_ford(&graph, source)?, json, out)
}

/// Floyd-Warshall distance matrix.
pub fn cmd_floyd_warshall(path: &Path, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let all = floyd_warshall(&graph)?;
    let n = all.vertex_count();
    if json {
        let rows: Vec<Vec<Option<f64>>> = (0..n)
            .map(|i| (0..n).map(|j| finite(all.distance(i, j))).collect())
            .collect();
        writeln!(out, "{}", serde_json::json!({ "distances": rows }))?;
    } else {
        for i in 0..n {
            let row: Vec<String> = (0..n).map(|j| fmt_distance(all.distance(i, j))).collect();
            writeln!(out, "{}", row.join("\t"))?;
        }
    }
    Ok(())
}

/// Dijkstra from every source on a worker pool.
pub fn cmd_all_pairs(
    path: &Path,
    config: &EngineConfig,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let tables = all_pairs_dijkstra(&graph, config)?;
    if json {
        let rows: Vec<Vec<Option<f64>>> = tables
            .iter()
            .map(|t| t.distances().iter().map(|&d| finite(d)).collect())
            .collect();
        writeln!(out, "{}", serde_json::json!({ "distances": rows }))?;
    } else {
        for table in &tables {
            let row: Vec<String> = table.distances().iter().map(|&d| fmt_distance(d)).collect();
            writeln!(out, "{}", row.join("\t"))?;
        }
    }
    Ok(())
}

/// A* with the zero heuristic (equivalent to Dijkstra to a target).
pub fn cmd_astar(
    path: &Path,
    source: Vertex,
    target: Vertex,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    write_outcome(&a_star(&graph, source, target, |_| 0.0)?, json, out)
}

/// Strongly connected components.
pub fn cmd_scc(path: &Path, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    write_components(&tarjan_scc(&graph)?, json, out)
}

/// Weakly connected components.
pub fn cmd_components(path: &Path, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    write_components(&connected_components(&graph), json, out)
}

/// Minimum spanning forest.
pub fn cmd_mst(path: &Path, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let forest = kruskal_mst(&graph);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&forest)?)?;
    } else {
        for edge in &forest.edges {
            writeln!(out, "{} - {} ({})", edge.source, edge.target, edge.weight)?;
        }
        writeln!(out, "Total weight: {}", forest.total_weight)?;
        writeln!(out, "Trees: {}", forest.tree_count)?;
    }
    Ok(())
}

/// Topological order.
pub fn cmd_topo(path: &Path, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let order = topo_sort(&graph)?;
    if json {
        writeln!(out, "{}", serde_json::json!({ "order": order.as_slice() }))?;
    } else {
        writeln!(out, "{}", join(order.as_slice()))?;
    }
    Ok(())
}

/// Bipartite 2-coloring.
pub fn cmd_bipartite(path: &Path, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let coloring = is_bipartite(&graph)?;
    let (left, right) = coloring.partition();
    if json {
        writeln!(out, "{}", serde_json::json!({ "left": left, "right": right }))?;
    } else {
        writeln!(out, "Left: {}", join(&left))?;
        writeln!(out, "Right: {}", join(&right))?;
    }
    Ok(())
}

fn write_table<W: Weight + std::fmt::Display + Serialize>(
    table: &DistanceTable<W>,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    if json {
        let distances: Vec<Option<W>> = table
            .iter()
            .map(|(_, d, _)| (!d.is_infinite()).then_some(d))
            .collect();
        let predecessors: Vec<Option<Vertex>> = table.iter().map(|(_, _, p)| p).collect();
        let doc = serde_json::json!({
            "source": table.source(),
            "distances": distances,
            "predecessors": predecessors,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        return Ok(());
    }
    writeln!(out, "vertex\tdistance\tpredecessor")?;
    for (v, distance, predecessor) in table.iter() {
        let pred = predecessor.map_or_else(|| "-".to_string(), |p| p.to_string());
        writeln!(out, "{}\t{}\t{}", v, fmt_distance(distance), pred)?;
    }
    Ok(())
}

fn write_outcome(outcome: &SearchOutcome<f64>, json: bool, out: &mut impl Write) -> GraphResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(outcome)?)?;
        return Ok(());
    }
    match outcome {
        SearchOutcome::Found(path) => {
            writeln!(out, "Cost: {}", path.cost)?;
            writeln!(out, "Path: {}", join_with(&path.vertices, " -> "))?;
        }
        SearchOutcome::NoPathFound => writeln!(out, "No path found")?,
    }
    Ok(())
}

fn write_components(map: &ComponentMap, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let groups = map.components();
    if json {
        writeln!(out, "{}", serde_json::json!({ "count": map.count(), "components": groups }))?;
    } else {
        writeln!(out, "Components: {}", map.count())?;
        for (id, members) in groups.iter().enumerate() {
            writeln!(out, "  {}: {}", id, join(members))?;
        }
    }
    Ok(())
}

fn fmt_distance<W: Weight + std::fmt::Display>(d: W) -> String {
    if d.is_infinite() {
        "inf".to_string()
    } else {
        d.to_string()
    }
}

fn finite(d: f64) -> Option<f64> {
    (!d.is_infinite()).then_some(d)
}

fn join(vertices: &[Vertex]) -> String {
    join_with(vertices, " ")
}

fn join_with(vertices: &[Vertex], sep: &str) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}
