use dsi_progress_logger::ProgressLog;
use sux::bits::BitVec;
use webgraph::traits::RandomAccessGraph;

/// The orders in which a depth-first visit of a whole graph discovers and
/// completes nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstOrder {
    pre: Box<[usize]>,
    post: Box<[usize]>,
}

impl DepthFirstOrder {
    /// Returns the nodes in order of discovery.
    pub fn preorder(&self) -> &[usize] {
        &self.pre
    }

    /// Returns the nodes in order of completion.
    pub fn postorder(&self) -> &[usize] {
        &self.post
    }

    /// Returns the nodes in reverse order of completion.
    ///
    /// If the graph is acyclic, this is a topological sort.
    pub fn reverse_postorder(&self) -> impl Iterator<Item = usize> + '_ {
        self.post.iter().rev().copied()
    }
}

/// Computes the [`DepthFirstOrder`] of a graph.
///
/// Roots are tried in increasing order, and successors are enumerated in the
/// order the graph returns them.
///
/// This is an iterative implementation that does not need a large stack
/// size: the visit path is kept on an explicit stack of successor
/// iterators, and known nodes are marked using one bit per node.
///
/// The progress logger is [updated](ProgressLog::light_update) after each
/// node is completed.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use percolation_algo::algo::depth_first_order;
/// use webgraph::graphs::vec_graph::VecGraph;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (0, 2)]);
/// let order = depth_first_order(&graph, no_logging![]);
/// assert_eq!(order.reverse_postorder().collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
pub fn depth_first_order<G: RandomAccessGraph>(
    graph: &G,
    pl: &mut impl ProgressLog,
) -> DepthFirstOrder {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing depth-first order...");

    let mut known = BitVec::new(num_nodes);
    let mut pre = Vec::with_capacity(num_nodes);
    let mut post = Vec::with_capacity(num_nodes);
    // Each entry holds a node and the iterator on its remaining successors
    let mut stack = Vec::with_capacity(16);

    for root in 0..num_nodes {
        if known.get(root) {
            continue;
        }
        known.set(root, true);
        pre.push(root);
        stack.push((root, graph.successors(root).into_iter()));

        'recurse: loop {
            let Some((curr, iter)) = stack.last_mut() else {
                break;
            };
            let curr = *curr;

            for succ in iter {
                if !known.get(succ) {
                    known.set(succ, true);
                    pre.push(succ);
                    stack.push((succ, graph.successors(succ).into_iter()));
                    continue 'recurse;
                }
            }

            post.push(curr);
            pl.light_update();
            stack.pop();
        }
    }

    pl.done();
    DepthFirstOrder {
        pre: pre.into_boxed_slice(),
        post: post.into_boxed_slice(),
    }
}
