//! Phase 3 tests: union-find, Tarjan SCC, components, spanning forests,
//! topological sort, bipartite check.

use graph_engine::connectivity::{connected_components, kruskal_mst, tarjan_scc, union_find};
use graph_engine::graph::Graph;
use graph_engine::ordering::{is_bipartite, topo_sort};
use graph_engine::types::GraphError;

// ==================== Union-Find Tests ====================

#[test]
fn test_union_find_scenario() {
    let mut uf = union_find::new(5);
    uf.union(0, 1).unwrap();
    uf.union(1, 2).unwrap();
    assert_eq!(uf.find(0).unwrap(), uf.find(2).unwrap());
    assert_ne!(uf.find(3).unwrap(), uf.find(0).unwrap());
    assert_eq!(uf.set_count(), 3);
}

#[test]
fn test_union_find_idempotent_find() {
    let mut uf = union_find::new(6);
    uf.union(4, 5).unwrap();
    uf.union(3, 5).unwrap();
    let root = uf.find(3).unwrap();
    assert_eq!(uf.find(3).unwrap(), root);
    assert_eq!(uf.find(root).unwrap(), root);
}

#[test]
fn test_union_find_repeat_union_is_noop() {
    let mut uf = union_find::new(3);
    assert!(uf.union(0, 2).unwrap());
    assert!(!uf.union(2, 0).unwrap());
    assert!(!uf.union(1, 1).unwrap());
    assert_eq!(uf.set_count(), 2);
    assert!(uf.connected(0, 2).unwrap());
    assert!(!uf.connected(0, 1).unwrap());
}

#[test]
fn test_union_find_out_of_range() {
    let mut uf = union_find::new(3);
    assert!(matches!(
        uf.find(3),
        Err(GraphError::OutOfRange { vertex: 3, vertex_count: 3 })
    ));
    assert!(uf.union(0, 8).is_err());
    // A failed union leaves the forest untouched.
    assert_eq!(uf.set_count(), 3);
}

#[test]
fn test_union_find_make_set() {
    let mut uf = union_find::new(0);
    assert!(uf.is_empty());
    let a = uf.make_set();
    let b = uf.make_set();
    assert_eq!((a, b), (0, 1));
    uf.union(a, b).unwrap();
    assert_eq!(uf.set_count(), 1);
}

#[test]
fn test_union_find_long_chain() {
    let n = 100_000;
    let mut uf = union_find::new(n);
    for i in 1..n {
        uf.union(i - 1, i).unwrap();
    }
    let root = uf.find(0).unwrap();
    assert!((0..n).all(|i| uf.find(i).unwrap() == root));
    assert_eq!(uf.set_count(), 1);
}

// ==================== Tarjan SCC Tests ====================

#[test]
fn test_tarjan_two_cycles_and_a_bridge() {
    // {0,1,2} cycle -> {3,4} cycle -> 5
    let g = Graph::build(
        6,
        &[
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 0, 1.0),
            (2, 3, 1.0),
            (3, 4, 1.0),
            (4, 3, 1.0),
            (4, 5, 1.0),
        ],
        true,
    )
    .unwrap();
    let map = tarjan_scc(&g).unwrap();
    assert_eq!(map.count(), 3);
    assert!(map.same_component(0, 2));
    assert!(map.same_component(3, 4));
    assert!(!map.same_component(2, 3));
    assert!(!map.same_component(4, 5));
    // Ids follow root discovery order.
    assert_eq!(map.component_of(0), 0);
    assert_eq!(map.component_of(3), 1);
    assert_eq!(map.component_of(5), 2);
    assert_eq!(map.components(), vec![vec![0, 1, 2], vec![3, 4], vec![5]]);
}

#[test]
fn test_tarjan_dag_is_all_singletons() {
    let g = Graph::build(4, &[(0, 1, 1), (1, 2, 1), (0, 3, 1)], true).unwrap();
    let map = tarjan_scc(&g).unwrap();
    assert_eq!(map.count(), 4);
    assert_eq!(map.as_slice(), &[0, 1, 2, 3]);
}

#[test]
fn test_tarjan_undirected_gives_connected_components() {
    let g = Graph::build(5, &[(0, 1, 1.0), (3, 4, 1.0)], false).unwrap();
    let map = tarjan_scc(&g).unwrap();
    assert_eq!(map.count(), 3);
    assert!(map.same_component(0, 1));
    assert!(map.same_component(3, 4));
    assert!(!map.same_component(1, 2));
}

#[test]
fn test_tarjan_long_cycle_no_stack_overflow() {
    let n = 200_000;
    let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n, 1u32)).collect();
    let g = Graph::build(n, &edges, true).unwrap();
    let map = tarjan_scc(&g).unwrap();
    assert_eq!(map.count(), 1);
}

#[test]
fn test_tarjan_empty_graph() {
    let g: Graph<f64> = Graph::build(0, &[], true).unwrap();
    let map = tarjan_scc(&g).unwrap();
    assert_eq!(map.count(), 0);
    assert!(map.is_empty());
}

// ==================== Components / MST Tests ====================

#[test]
fn test_connected_components_ignore_direction() {
    let g = Graph::build(6, &[(1, 0, 1.0), (2, 1, 1.0), (5, 4, 1.0)], true).unwrap();
    let map = connected_components(&g);
    assert_eq!(map.count(), 3);
    assert_eq!(map.as_slice(), &[0, 0, 0, 1, 2, 2]);
}

#[test]
fn test_kruskal_minimum_spanning_tree() {
    let g = Graph::build(
        4,
        &[
            (0, 1, 1i64),
            (1, 2, 2),
            (0, 2, 3),
            (2, 3, 4),
            (1, 3, 5),
            (3, 3, 0),
        ],
        false,
    )
    .unwrap();
    let forest = kruskal_mst(&g);
    assert_eq!(forest.total_weight, 7);
    assert_eq!(forest.edges.len(), 3);
    assert!(forest.is_spanning_tree());
    assert!(forest.edges.iter().all(|e| !e.is_self_loop()));
}

#[test]
fn test_kruskal_forest_on_disconnected_graph() {
    let g = Graph::build(5, &[(0, 1, 2.5), (3, 4, 1.0)], false).unwrap();
    let forest = kruskal_mst(&g);
    assert_eq!(forest.tree_count, 3);
    assert_eq!(forest.total_weight, 3.5);
    assert!(!forest.is_spanning_tree());
}

// ==================== Topological Sort Tests ====================

#[test]
fn test_topo_sort_dag() {
    let g = Graph::build(
        6,
        &[(5, 2, 1), (5, 0, 1), (4, 0, 1), (4, 1, 1), (2, 3, 1), (3, 1, 1)],
        true,
    )
    .unwrap();
    let order = topo_sort(&g).unwrap();
    assert_eq!(order.len(), 6);
    for edge in g.edges() {
        assert!(order.position(edge.source) < order.position(edge.target));
    }
    // FIFO seeded in ascending order.
    assert_eq!(order.as_slice(), &[4, 5, 0, 2, 3, 1]);
}

#[test]
fn test_topo_sort_cycle_detected() {
    let g = Graph::build(4, &[(0, 1, 1), (1, 2, 1), (2, 1, 1), (2, 3, 1)], true).unwrap();
    match topo_sort(&g) {
        Err(GraphError::CycleDetected { unresolved }) => assert_eq!(unresolved, 3),
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn test_topo_sort_self_loop_is_cycle() {
    let g = Graph::build(2, &[(0, 1, 1), (1, 1, 1)], true).unwrap();
    assert!(matches!(topo_sort(&g), Err(GraphError::CycleDetected { .. })));
}

#[test]
fn test_topo_sort_undirected_edge_is_cycle() {
    let g = Graph::build(3, &[(0, 1, 1.0)], false).unwrap();
    assert!(matches!(
        topo_sort(&g),
        Err(GraphError::CycleDetected { unresolved: 2 })
    ));
    // Isolated vertices alone are trivially ordered.
    let g = Graph::build(3, &[], false).unwrap();
    assert_eq!(topo_sort::<f64>(&g).unwrap().into_vec(), vec![0, 1, 2]);
}

// ==================== Bipartite Tests ====================

#[test]
fn test_bipartite_triangle_is_not() {
    let g = Graph::build(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)], false).unwrap();
    assert!(matches!(
        is_bipartite(&g),
        Err(GraphError::NotBipartite { .. })
    ));
}

#[test]
fn test_bipartite_reports_offending_edge() {
    let g = Graph::build(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)], false).unwrap();
    match is_bipartite(&g) {
        Err(GraphError::NotBipartite { from, to }) => {
            let mut pair = [from, to];
            pair.sort_unstable();
            assert_eq!(pair, [1, 2]);
        }
        other => panic!("expected NotBipartite, got {other:?}"),
    }
}

#[test]
fn test_bipartite_even_cycle_coloring() {
    let g = Graph::build(
        5,
        &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)],
        false,
    )
    .unwrap();
    let coloring = is_bipartite(&g).unwrap();
    assert_eq!(coloring.as_slice(), &[0, 1, 0, 1, 0]);
    let (left, right) = coloring.partition();
    assert_eq!(left, vec![0, 2, 4]);
    assert_eq!(right, vec![1, 3]);
}

#[test]
fn test_bipartite_ignores_direction() {
    // Directed triangle has no directed cycle but is still an odd cycle.
    let g = Graph::build(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)], true).unwrap();
    assert!(is_bipartite(&g).is_err());
    let g = Graph::build(3, &[(0, 1, 1.0), (2, 1, 1.0)], true).unwrap();
    assert_eq!(is_bipartite(&g).unwrap().as_slice(), &[0, 1, 0]);
}

#[test]
fn test_bipartite_self_loop() {
    let g = Graph::build(1, &[(0, 0, 1.0)], false).unwrap();
    assert!(matches!(
        is_bipartite(&g),
        Err(GraphError::NotBipartite { from: 0, to: 0 })
    ));
}
