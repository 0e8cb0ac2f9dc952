//! End-to-end properties of the parallel BFS engine.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use wavefront::search::{
    worker_pool, BfsConfig, InlineExecutor, ParallelBfs, SearchNode, TaskExecutor,
};

fn pool(threads: usize) -> Arc<dyn TaskExecutor> {
    Arc::new(worker_pool(threads).unwrap())
}

/// A -> B, C; B -> D (accepting); C -> E. D is reachable at distance 2.
fn family_children(node: &SearchNode<&'static str, &'static str>) -> Vec<(&'static str, &'static str)> {
    match *node.value() {
        "A" => vec![("ab", "B"), ("ac", "C")],
        "B" => vec![("bd", "D")],
        "C" => vec![("ce", "E")],
        _ => vec![],
    }
}

#[test]
fn shortest_path_chain_length_equals_distance() {
    for executor in [Arc::new(InlineExecutor) as Arc<dyn TaskExecutor>, pool(4)] {
        let engine = ParallelBfs::new(
            |value: &&str| *value == "D",
            family_children,
            BfsConfig::default().with_capacity(64),
            executor,
        );
        let outcome = engine.apply("A").unwrap();
        let solution = outcome.solution.expect("D is reachable");
        assert_eq!(*solution.value(), "D");
        assert_eq!(solution.depth(), 2);

        let values: Vec<_> = solution.path().iter().map(|n| *n.value()).collect();
        assert_eq!(values, vec!["A", "B", "D"]);
        assert_eq!(solution.path_labels(), vec!["ab", "bd"]);
    }
}

#[test]
fn every_value_is_expanded_exactly_once() {
    // Heap-shaped tree with overlapping discovery: n is reachable both as a
    // child of its parent and through a duplicate self-edge pair below.
    let expansions: Arc<Mutex<HashMap<u64, u32>>> = Arc::new(Mutex::new(HashMap::new()));
    let counter = Arc::clone(&expansions);

    let engine = ParallelBfs::new(
        |_: &u64| false,
        move |node: &SearchNode<u64, u8>| {
            let n = *node.value();
            *counter.lock().unwrap().entry(n).or_insert(0) += 1;
            if n < 63 {
                // Two distinct edges to the same left child race on the
                // visited set.
                vec![(0u8, 2 * n + 1), (1u8, 2 * n + 1), (2u8, 2 * n + 2)]
            } else {
                vec![]
            }
        },
        BfsConfig::default().with_capacity(1024),
        pool(8),
    );

    let outcome = engine.apply(0).unwrap();
    assert!(!outcome.is_found());

    let counts = expansions.lock().unwrap();
    assert_eq!(counts.len(), 127, "values 0..=126 each discovered once");
    assert!(counts.values().all(|&n| n == 1), "no value expanded twice");
    assert_eq!(outcome.statistics.nodes_discovered, 127);
}

#[test]
fn exhaustion_terminates_with_no_solution() {
    let engine = ParallelBfs::new(
        |_: &u32| false,
        |node: &SearchNode<u32, ()>| {
            let n = *node.value();
            if n < 50 {
                vec![((), n + 1), ((), n + 2)]
            } else {
                vec![]
            }
        },
        BfsConfig::default().with_capacity(256),
        pool(4),
    );
    let outcome = engine.apply(0).unwrap();
    assert!(!outcome.is_found());
    assert_eq!(outcome.statistics.nodes_discovered, 52);
}

#[test]
fn backpressure_changes_throughput_not_outcome() {
    // Full binary tree, levels 0..=8, accepting the deepest-right leaf.
    fn tree(node: &SearchNode<u64, u8>) -> Vec<(u8, u64)> {
        let n = *node.value();
        if n < 255 {
            vec![(0, 2 * n + 1), (1, 2 * n + 2)]
        } else {
            vec![]
        }
    }
    let accept = |value: &u64| *value == 510;

    // Capacity below the combined footprint of two adjacent levels, but
    // above one full wavefront plus its marker (the deadlock threshold).
    let throttled = ParallelBfs::new(
        accept,
        tree,
        BfsConfig::default().with_capacity(300),
        pool(4),
    );
    let roomy = ParallelBfs::new(
        accept,
        tree,
        BfsConfig::default().with_capacity(1 << 14),
        pool(4),
    );

    let throttled = throttled.apply(0).unwrap();
    let roomy = roomy.apply(0).unwrap();

    assert_eq!(throttled.solution_depth(), Some(8));
    assert_eq!(roomy.solution_depth(), Some(8));
    assert_eq!(
        throttled.solution.unwrap().path_labels(),
        roomy.solution.unwrap().path_labels(),
    );
}

#[test]
fn racing_discoveries_record_exactly_one_parent() {
    // X is reachable through two distinct edges at the same depth.
    for _ in 0..50 {
        let engine = ParallelBfs::new(
            |value: &&str| *value == "X",
            |node: &SearchNode<&'static str, &'static str>| match *node.value() {
                "A" => vec![("ab", "B"), ("ac", "C")],
                "B" => vec![("bx", "X")],
                "C" => vec![("cx", "X")],
                _ => vec![],
            },
            BfsConfig::default().with_capacity(64),
            pool(4),
        );
        let outcome = engine.apply("A").unwrap();
        let solution = outcome.solution.expect("X is reachable");

        let link = solution.parent().expect("X is not the root");
        assert!(
            link.label == "bx" || link.label == "cx",
            "parent must be one of the competing edges"
        );
        // One parent, never two: depth is well defined.
        assert_eq!(solution.depth(), 2);
    }
}

#[test]
fn wavefronts_count_levels() {
    let engine = ParallelBfs::new(
        |value: &u32| *value == 6,
        |node: &SearchNode<u32, ()>| {
            let n = *node.value();
            if n < 10 {
                vec![((), n + 1)]
            } else {
                vec![]
            }
        },
        BfsConfig::default().with_capacity(64),
        pool(2),
    );
    let outcome = engine.apply(0).unwrap();
    // Levels 0..=5 completed before 6 was dequeued.
    assert_eq!(outcome.statistics.wavefronts, 6);
    assert_eq!(outcome.statistics.nodes_expanded, 6);
}
