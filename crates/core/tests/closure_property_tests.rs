use allpaths_core::{ClosedGraph, ClosureSolver, FloydWarshall, GraphModel};
use common::types::{Distance, Edge, Path};
use proptest::prelude::*;
use proptest::strategy::Strategy;

const NUM_NODES_STRATEGY: std::ops::Range<usize> = 1usize..7;

/// Random graphs without self-loops, weights drawn from `weights`.
fn graph_strategy(
    weights: std::ops::Range<i64>,
) -> impl Strategy<Value = (usize, Vec<Edge>)> {
    NUM_NODES_STRATEGY.prop_flat_map(move |num_nodes| {
        let edge_generator = (0usize..num_nodes, 0usize..num_nodes, weights.clone())
            .prop_filter("no self-loops", |(u, v, _)| u != v);
        let edges_generator = prop::collection::vec(edge_generator, 0..20);

        (proptest::strategy::Just(num_nodes), edges_generator)
    })
}

fn close(num_nodes: usize, edges: &[Edge]) -> ClosedGraph {
    let model = GraphModel::from_edges(num_nodes, edges).expect("edges are in range");
    FloydWarshall.close(model)
}

fn path_cost(graph: &ClosedGraph, path: &[usize]) -> Distance {
    path.windows(2).fold(Distance::Finite(0), |acc, step| {
        acc.saturating_add(graph.initial_weight(step[0], step[1]))
    })
}

/// Every simple path from `start` to `end` over the input adjacency, by DFS.
fn simple_paths(graph: &ClosedGraph, start: usize, end: usize) -> Vec<Path> {
    fn walk(graph: &ClosedGraph, path: &mut Path, end: usize, out: &mut Vec<Path>) {
        let Some(&last) = path.last() else { return };
        if last == end {
            out.push(path.clone());
            return;
        }
        for next in 0..graph.num_vertices() {
            if path.contains(&next) || !graph.initial_weight(last, next).is_finite() {
                continue;
            }
            path.push(next);
            walk(graph, path, end, out);
            path.pop();
        }
    }

    let mut out = Vec::new();
    walk(graph, &mut vec![start], end, &mut out);
    out
}

proptest! {
    /// Property: after closure, L[i][j] <= L[i][k] + L[k][j] whenever both terms are finite.
    #[test]
    fn triangle_inequality_fixed_point((num_nodes, edges) in graph_strategy(0..10)) {
        let graph = close(num_nodes, &edges);
        for i in 0..num_nodes {
            for j in 0..num_nodes {
                for k in 0..num_nodes {
                    let via = graph.distance(i, k).saturating_add(graph.distance(k, j));
                    prop_assert!(graph.distance(i, j) <= via);
                }
            }
        }
    }

    /// Property: re-applying the closure to a closed model changes nothing.
    #[test]
    fn closure_is_idempotent((num_nodes, edges) in graph_strategy(1..10)) {
        let once = close(num_nodes, &edges);
        let twice = FloydWarshall.close(once.clone().into_model());
        prop_assert_eq!(once, twice);
    }

    /// Property: no distance ever increases between outer iterations, negative weights included.
    #[test]
    fn distances_never_increase((num_nodes, edges) in graph_strategy(-5..10)) {
        let model = GraphModel::from_edges(num_nodes, &edges).unwrap();
        let mut previous = model.distance_matrix().clone();
        let mut violations = 0usize;

        FloydWarshall.close_with_observer(model, &mut |_, snapshot| {
            for i in 0..num_nodes {
                for j in 0..num_nodes {
                    if snapshot.distance(i, j) > previous[(i, j)] {
                        violations += 1;
                    }
                }
            }
            previous = snapshot.distance_matrix().clone();
        });

        prop_assert_eq!(violations, 0);
    }

    /// Property: for i != j, P[i][j] is non-empty iff L[i][j] is finite, and every
    /// recorded predecessor is itself reachable from i.
    #[test]
    fn predecessor_sets_match_reachability((num_nodes, edges) in graph_strategy(0..10)) {
        let graph = close(num_nodes, &edges);
        for i in 0..num_nodes {
            for j in 0..num_nodes {
                let preds = graph.predecessors(i, j);
                if i != j {
                    prop_assert_eq!(preds.is_empty(), !graph.distance(i, j).is_finite());
                }
                for p in preds.iter() {
                    prop_assert!(graph.distance(i, p).is_finite());
                }
            }
        }
    }

    /// Property: every enumerated path is a real route whose cost equals L[start][end].
    #[test]
    fn enumerated_paths_cost_exactly_the_distance((num_nodes, edges) in graph_strategy(0..10)) {
        let graph = close(num_nodes, &edges);
        for start in 0..num_nodes {
            for end in 0..num_nodes {
                let paths = graph.all_shortest_paths(start, end).unwrap();
                if start == end {
                    prop_assert_eq!(paths, vec![vec![start]]);
                    continue;
                }
                prop_assert_eq!(paths.is_empty(), !graph.distance(start, end).is_finite());
                for path in &paths {
                    prop_assert_eq!(path.first(), Some(&start));
                    prop_assert_eq!(path.last(), Some(&end));
                    prop_assert_eq!(path_cost(&graph, path), graph.distance(start, end));
                }
            }
        }
    }

    /// Property: with positive weights the enumerator returns exactly the set of
    /// minimum-cost simple paths found by brute force, without duplicates.
    #[test]
    fn enumeration_matches_brute_force((num_nodes, edges) in graph_strategy(1..6)) {
        let graph = close(num_nodes, &edges);
        for start in 0..num_nodes {
            for end in (0..num_nodes).filter(|&e| e != start) {
                let candidates = simple_paths(&graph, start, end);
                let best = candidates.iter().map(|p| path_cost(&graph, p)).min();

                let mut expected: Vec<Path> = candidates
                    .into_iter()
                    .filter(|p| Some(path_cost(&graph, p)) == best)
                    .collect();
                let mut actual = graph.all_shortest_paths(start, end).unwrap();

                let before_dedup = actual.len();
                actual.sort();
                actual.dedup();
                prop_assert_eq!(actual.len(), before_dedup);

                expected.sort();
                prop_assert_eq!(actual, expected);
            }
        }
    }

    /// Property: a negative cycle is reported iff some self-distance is negative,
    /// and a rebuilt witness is a closed walk.
    #[test]
    fn negative_cycle_detection_matches_diagonal((num_nodes, edges) in graph_strategy(-4..6)) {
        let graph = close(num_nodes, &edges);
        let diagonal_negative = (0..num_nodes).any(|i| graph.distance(i, i).is_negative());
        prop_assert_eq!(graph.has_negative_cycle(), diagonal_negative);

        let witness = graph.negative_cycle_witness();
        if !graph.has_negative_cycle() {
            prop_assert!(witness.is_empty());
        } else if !witness.is_empty() {
            prop_assert_eq!(witness.first(), witness.last());
        }
    }
}
