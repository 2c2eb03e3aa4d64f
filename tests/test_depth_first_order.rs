use dsi_progress_logger::prelude::*;
use percolation_algo::algo::depth_first_order;
use webgraph::prelude::VecGraph;
use webgraph::traits::{RandomAccessGraph, SequentialLabeling};

/// Recursive reference implementation.
fn recursive_order(graph: &VecGraph) -> (Vec<usize>, Vec<usize>) {
    fn dfs(
        graph: &VecGraph,
        node: usize,
        known: &mut [bool],
        pre: &mut Vec<usize>,
        post: &mut Vec<usize>,
    ) {
        known[node] = true;
        pre.push(node);
        for succ in graph.successors(node) {
            if !known[succ] {
                dfs(graph, succ, known, pre, post);
            }
        }
        post.push(node);
    }

    let mut known = vec![false; graph.num_nodes()];
    let (mut pre, mut post) = (vec![], vec![]);
    for node in 0..graph.num_nodes() {
        if !known[node] {
            dfs(graph, node, &mut known, &mut pre, &mut post);
        }
    }
    (pre, post)
}

#[test]
fn test_top_sort() {
    let graph = VecGraph::from_arcs([(1, 2), (0, 1)]);
    let order = depth_first_order(&graph, no_logging![]);
    assert_eq!(order.reverse_postorder().collect::<Vec<_>>(), vec![0, 1, 2]);

    let graph = VecGraph::from_arcs([(0, 1), (0, 2), (2, 3), (1, 3)]);
    let order = depth_first_order(&graph, no_logging![]);
    assert_eq!(order.preorder(), &[0, 1, 3, 2]);
    assert_eq!(order.postorder(), &[3, 1, 2, 0]);
    assert_eq!(
        order.reverse_postorder().collect::<Vec<_>>(),
        vec![0, 2, 1, 3]
    );
}

#[test]
fn test_cycle() {
    let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0)]);
    let order = depth_first_order(&graph, no_logging![]);
    assert_eq!(order.preorder(), &[0, 1, 2]);
    assert_eq!(order.postorder(), &[2, 1, 0]);
}

#[test]
fn test_forest() {
    // 3 is not reachable from 0, 2 has only a loop
    let graph = VecGraph::from_arcs([(0, 1), (3, 1), (3, 4), (2, 2)]);
    let order = depth_first_order(&graph, no_logging![]);
    assert_eq!(order.preorder(), &[0, 1, 2, 3, 4]);
    assert_eq!(order.postorder(), &[1, 0, 2, 4, 3]);
}

#[test]
fn test_against_recursive() {
    let graph = VecGraph::from_arcs([
        (0, 5),
        (0, 2),
        (1, 0),
        (2, 7),
        (3, 1),
        (3, 6),
        (5, 4),
        (6, 0),
        (6, 4),
        (7, 5),
        (4, 7),
        (8, 3),
        (8, 9),
    ]);
    let (pre, post) = recursive_order(&graph);
    let order = depth_first_order(&graph, no_logging![]);
    assert_eq!(order.preorder(), pre.as_slice());
    assert_eq!(order.postorder(), post.as_slice());
}

#[test]
fn test_deep_path() {
    // Would overflow the default test thread stack with a recursive visit
    let n = 200_000;
    let graph = VecGraph::from_arcs((0..n - 1).map(|i| (i, i + 1)));
    let order = depth_first_order(&graph, no_logging![]);
    assert_eq!(order.preorder().len(), n);
    assert!(order.reverse_postorder().eq(0..n));
}
