//! Property-based tests for graph traversals over random undirected graphs.

mod common;

use std::collections::{HashSet, VecDeque};

use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Strategy},
    proptest,
    test_runner::{Config as ProptestConfig, FileFailurePersistence},
};
use sortgraph::Graph;

const TRAVERSAL_PROP_CASES: u32 = 256;
const LABELS: [&str; 12] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L",
];

fn traversal_proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: TRAVERSAL_PROP_CASES,
        failure_persistence: Some(Box::new(FileFailurePersistence::WithSource(
            "traversal-property-regressions",
        ))),
        ..ProptestConfig::default()
    }
}

/// Random edge lists over a fixed label set; self-loops and duplicates allowed.
fn edges() -> impl Strategy<Value = Vec<(usize, usize)>> {
    vec((0..LABELS.len(), 0..LABELS.len()), 1..40)
}

fn build(edges: &[(usize, usize)]) -> Graph {
    edges.iter().map(|&(a, b)| (LABELS[a], LABELS[b])).collect()
}

/// Reachable set computed without any ordering guarantees.
fn reachable(graph: &Graph, start: &str) -> HashSet<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut pending: VecDeque<String> = VecDeque::new();
    if graph.contains_vertex(start) {
        seen.insert(start.to_string());
        pending.push_back(start.to_string());
    }
    while let Some(vertex) = pending.pop_front() {
        for neighbor in graph.neighbors(&vertex).unwrap_or_default() {
            if seen.insert(neighbor.clone()) {
                pending.push_back(neighbor.clone());
            }
        }
    }
    seen
}

proptest! {
    #![proptest_config(traversal_proptest_config())]

    #[test]
    fn test_traversals_visit_reachable_set_once(edges in edges(), start in 0..LABELS.len()) {
        let graph = build(&edges);
        let start = LABELS[start];
        let expected = reachable(&graph, start);

        for order in [graph.bfs(start), graph.dfs_recursive(start), graph.dfs_iterative(start)] {
            let unique: HashSet<String> = order.iter().cloned().collect();
            prop_assert_eq!(unique.len(), order.len());
            prop_assert_eq!(&unique, &expected);
            if let Some(first) = order.first() {
                prop_assert_eq!(first.as_str(), start);
            }
        }
    }

    #[test]
    fn test_recursive_and_iterative_dfs_agree(edges in edges(), start in 0..LABELS.len()) {
        let graph = build(&edges);
        let start = LABELS[start];
        prop_assert_eq!(graph.dfs_recursive(start), graph.dfs_iterative(start));
    }

    #[test]
    fn test_order_ignores_edge_insertion_order(edges in edges(), start in 0..LABELS.len()) {
        let forward = build(&edges);
        let mut reversed_edges: Vec<(usize, usize)> =
            edges.iter().rev().map(|&(a, b)| (b, a)).collect();
        reversed_edges.rotate_left(edges.len() / 2);
        let backward = build(&reversed_edges);
        let start = LABELS[start];

        prop_assert_eq!(forward.bfs(start), backward.bfs(start));
        prop_assert_eq!(forward.dfs_recursive(start), backward.dfs_recursive(start));
        prop_assert_eq!(forward.dfs_iterative(start), backward.dfs_iterative(start));
    }

    #[test]
    fn test_bfs_visits_by_nondecreasing_distance(edges in edges(), start in 0..LABELS.len()) {
        let graph = build(&edges);
        let start = LABELS[start];
        let order = graph.bfs(start);

        let mut distance = std::collections::HashMap::new();
        if let Some(first) = order.first() {
            distance.insert(first.clone(), 0_usize);
        }
        // 每个节点的距离等于其最早被访问邻居的距离 + 1
        for (i, vertex) in order.iter().enumerate().skip(1) {
            let parent = order[..i]
                .iter()
                .find(|earlier| graph.sorted_neighbors(earlier).contains(&vertex.as_str()));
            prop_assert!(parent.is_some(), "{} has no visited neighbor", vertex);
            let d = parent.and_then(|p| distance.get(p)).copied().unwrap_or_default() + 1;
            distance.insert(vertex.clone(), d);
        }
        let distances: Vec<usize> = order.iter().filter_map(|v| distance.get(v).copied()).collect();
        prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }
}
