//! Phase 4 tests: cross-algorithm properties on random graphs, concurrent
//! queries, and the `gx` command layer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

use graph_engine::cli::commands;
use graph_engine::connectivity::{connected_components, tarjan_scc, union_find};
use graph_engine::graph::Graph;
use graph_engine::ordering::{is_bipartite, topo_sort};
use graph_engine::shortest_path::{a_star, bellman_ford, dijkstra, floyd_warshall};
use graph_engine::types::GraphError;

// ==================== Helper ====================

fn random_graph(
    rng: &mut StdRng,
    n: usize,
    edge_count: usize,
    weights: std::ops::Range<i64>,
    directed: bool,
) -> Graph<i64> {
    let edges: Vec<_> = (0..edge_count)
        .map(|_| {
            (
                rng.gen_range(0..n),
                rng.gen_range(0..n),
                rng.gen_range(weights.clone()),
            )
        })
        .collect();
    Graph::build(n, &edges, directed).unwrap()
}

/// Random DAG: edges only go from lower to higher rank under a shuffled ranking.
fn random_dag(rng: &mut StdRng, n: usize, edge_count: usize) -> Graph<i64> {
    let mut rank: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        rank.swap(i, rng.gen_range(0..=i));
    }
    let mut edges = Vec::new();
    while edges.len() < edge_count {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a == b {
            continue;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        edges.push((rank[lo], rank[hi], rng.gen_range(-5..10)));
    }
    Graph::build(n, &edges, true).unwrap()
}

/// Transitive closure by repeated squaring over a boolean matrix.
fn reachability(graph: &Graph<i64>) -> Vec<Vec<bool>> {
    let n = graph.vertex_count();
    let mut reach = vec![vec![false; n]; n];
    for (u, row) in reach.iter_mut().enumerate() {
        row[u] = true;
        for (v, _) in graph.neighbors(u).unwrap() {
            row[v] = true;
        }
    }
    for k in 0..n {
        for i in 0..n {
            if reach[i][k] {
                for j in 0..n {
                    if reach[k][j] {
                        reach[i][j] = true;
                    }
                }
            }
        }
    }
    reach
}

/// Whether any proper 2-coloring exists, by exhaustive search.
fn brute_force_bipartite(graph: &Graph<i64>) -> bool {
    let n = graph.vertex_count();
    (0u32..1 << n).any(|mask| {
        graph
            .edges()
            .iter()
            .all(|e| (mask >> e.source) & 1 != (mask >> e.target) & 1)
    })
}

fn write_doc(json: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), json).unwrap();
    file
}

// ==================== Property Tests ====================

#[test]
fn test_dijkstra_agrees_with_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..40 {
        let directed = round % 2 == 0;
        let g = random_graph(&mut rng, 12, 30, 0..20, directed);
        let s = rng.gen_range(0..12);
        let d = dijkstra(&g, s).unwrap();
        let b = bellman_ford(&g, s).unwrap();
        for v in 0..12 {
            assert_eq!(d.distance(v), b.distance(v), "round {round} vertex {v}");
        }
    }
}

#[test]
fn test_floyd_warshall_agrees_with_dijkstra() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let g = random_graph(&mut rng, 10, 25, 0..15, true);
        let all = floyd_warshall(&g).unwrap();
        for s in 0..10 {
            let d = dijkstra(&g, s).unwrap();
            for v in 0..10 {
                assert_eq!(all.distance(s, v), d.distance(v));
            }
        }
    }
}

#[test]
fn test_floyd_warshall_agrees_with_bellman_ford_on_negative_dags() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..20 {
        let g = random_dag(&mut rng, 10, 20);
        let all = floyd_warshall(&g).unwrap();
        for s in 0..10 {
            let b = bellman_ford(&g, s).unwrap();
            for v in 0..10 {
                assert_eq!(all.distance(s, v), b.distance(v));
            }
        }
    }
}

#[test]
fn test_paths_reproduce_distances() {
    let mut rng = StdRng::seed_from_u64(17);
    let g = random_graph(&mut rng, 15, 45, 1..9, true);
    let table = dijkstra(&g, 0).unwrap();
    for v in 0..15 {
        let Some(path) = table.path_to(v) else {
            assert!(!table.is_reachable(v));
            continue;
        };
        let cost: i64 = path
            .windows(2)
            .map(|w| {
                g.neighbors(w[0])
                    .unwrap()
                    .filter(|&(t, _)| t == w[1])
                    .map(|(_, c)| c)
                    .min()
                    .unwrap()
            })
            .sum();
        assert_eq!(cost, table.distance(v));
    }
}

#[test]
fn test_a_star_zero_heuristic_is_dijkstra() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..20 {
        let g = random_graph(&mut rng, 10, 20, 0..10, false);
        let (s, t) = (rng.gen_range(0..10), rng.gen_range(0..10));
        let outcome = a_star(&g, s, t, |_| 0).unwrap();
        assert_eq!(outcome.cost(), dijkstra(&g, s).unwrap().distance(t));
    }
}

#[test]
fn test_topo_sort_respects_every_edge() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..30 {
        let g = random_dag(&mut rng, 15, 30);
        let order = topo_sort(&g).unwrap();
        assert_eq!(order.len(), 15);
        let mut position = vec![0; 15];
        for (i, &v) in order.iter().enumerate() {
            position[v] = i;
        }
        for e in g.edges() {
            assert!(position[e.source] < position[e.target]);
        }
    }
}

#[test]
fn test_topo_sort_never_returns_short_order_on_cycle() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..30 {
        let dag = random_dag(&mut rng, 12, 20);
        let mut edges: Vec<_> = dag
            .edges()
            .iter()
            .map(|e| (e.source, e.target, e.weight))
            .collect();
        // Close a cycle by reversing one existing edge.
        let (a, b, w) = edges[rng.gen_range(0..edges.len())];
        edges.push((b, a, w));
        let g = Graph::build(12, &edges, true).unwrap();
        assert!(matches!(topo_sort(&g), Err(GraphError::CycleDetected { .. })));
    }
}

#[test]
fn test_tarjan_matches_mutual_reachability() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..40 {
        let g = random_graph(&mut rng, 10, 14, 1..2, true);
        let reach = reachability(&g);
        let map = tarjan_scc(&g).unwrap();
        for u in 0..10 {
            for v in 0..10 {
                let mutual = reach[u][v] && reach[v][u];
                assert_eq!(map.same_component(u, v), mutual, "u={u} v={v}");
            }
        }
    }
}

#[test]
fn test_bipartite_iff_no_odd_cycle() {
    let mut rng = StdRng::seed_from_u64(37);
    for _ in 0..60 {
        let g = random_graph(&mut rng, 8, 8, 1..2, false);
        let expected = brute_force_bipartite(&g);
        match is_bipartite(&g) {
            Ok(coloring) => {
                assert!(expected);
                for e in g.edges() {
                    assert_ne!(coloring.color(e.source), coloring.color(e.target));
                }
            }
            Err(GraphError::NotBipartite { .. }) => assert!(!expected),
            Err(other) => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn test_union_find_matches_components() {
    let mut rng = StdRng::seed_from_u64(41);
    let g = random_graph(&mut rng, 30, 20, 1..2, false);
    let mut uf = union_find::new(30);
    for e in g.edges() {
        uf.union(e.source, e.target).unwrap();
    }
    let map = connected_components(&g);
    assert_eq!(map.count(), uf.set_count());
    for x in 0..30 {
        for y in 0..30 {
            let joined = uf.find(x).unwrap() == uf.find(y).unwrap();
            assert_eq!(joined, map.same_component(x, y));
        }
    }
}

// ==================== Concurrency Tests ====================

#[test]
fn test_shared_graph_concurrent_queries() {
    let mut rng = StdRng::seed_from_u64(43);
    let g = random_graph(&mut rng, 50, 200, 0..30, true);
    let expected: Vec<_> = (0..8).map(|s| dijkstra(&g, s).unwrap()).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|s| {
                let graph = &g;
                scope.spawn(move || dijkstra(graph, s).unwrap())
            })
            .collect();
        for (s, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), expected[s]);
        }
    });
}

// ==================== CLI Command Tests ====================

const DIAMOND: &str = r#"{"vertices": 4, "directed": true,
    "edges": [[0, 1, 1.0], [1, 2, 1.0], [2, 3, 1.0], [0, 3, 10.0]]}"#;

#[test]
fn test_cmd_dijkstra_to_target() {
    let file = write_doc(DIAMOND);
    let mut out = Vec::new();
    commands::cmd_dijkstra(file.path(), 0, Some(3), false, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Cost: 3"));
    assert!(text.contains("Path: 0 -> 1 -> 2 -> 3"));
}

#[test]
fn test_cmd_dijkstra_table_json() {
    let file = write_doc(DIAMOND);
    let mut out = Vec::new();
    commands::cmd_dijkstra(file.path(), 3, None, true, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["source"], 3);
    // Unreached distances serialize as null.
    assert!(value["distances"][0].is_null());
    assert_eq!(value["distances"][3], 0.0);
}

#[test]
fn test_cmd_bfs_json_unreached_is_null() {
    let file = write_doc(DIAMOND);
    let mut out = Vec::new();
    commands::cmd_bfs(file.path(), 2, true, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["source"], 2);
    assert!(value["distances"][0].is_null());
    assert!(value["distances"][1].is_null());
    assert_eq!(value["distances"][3], 1);
    assert!(value["predecessors"][0].is_null());
    assert_eq!(value["predecessors"][3], 2);
}

#[test]
fn test_cmd_topo_and_info() {
    let file = write_doc(DIAMOND);
    let mut out = Vec::new();
    commands::cmd_topo(file.path(), false, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap().trim(), "0 1 2 3");

    let mut out = Vec::new();
    commands::cmd_info(file.path(), true, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["vertices"], 4);
    assert_eq!(value["edges"], 4);
    assert_eq!(value["directed"], true);
}

#[test]
fn test_cmd_bipartite_failure_propagates() {
    let file = write_doc(r#"{"vertices": 3, "directed": false, "edges": [[0,1,1],[1,2,1],[2,0,1]]}"#);
    let mut out = Vec::new();
    let err = commands::cmd_bipartite(file.path(), false, &mut out).unwrap_err();
    assert!(matches!(err, GraphError::NotBipartite { .. }));
}

#[test]
fn test_cmd_rejects_bad_documents() {
    let file = write_doc(r#"{"vertices": 2, "edges": [[0, 5, 1.0]]}"#);
    let mut out = Vec::new();
    assert!(matches!(
        commands::cmd_scc(file.path(), false, &mut out),
        Err(GraphError::InvalidEdge { .. })
    ));

    let file = write_doc("not json");
    assert!(matches!(
        commands::cmd_scc(file.path(), false, &mut out),
        Err(GraphError::Json(_))
    ));

    let missing = std::path::Path::new("/nonexistent/graph.json");
    assert!(matches!(
        commands::cmd_info(missing, false, &mut out),
        Err(GraphError::Io(_))
    ));
}

#[test]
fn test_cmd_all_pairs_and_mst() {
    let file = write_doc(r#"{"vertices": 3, "directed": false, "edges": [[0,1,2],[1,2,3],[0,2,9]]}"#);
    let mut out = Vec::new();
    let config = graph_engine::EngineConfig::default().with_worker_threads(2);
    commands::cmd_all_pairs(file.path(), &config, true, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["distances"][0][2], 5.0);

    let mut out = Vec::new();
    commands::cmd_mst(file.path(), false, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("Total weight: 5"));
}
