//! Decision-tree statistics
//!
//! Read-only report over a loaded tree: how big it is, how much of it the
//! root can reach, and how deep a walk can go.

use crate::tree::{DecisionTree, NodeId, ROOT};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Shape summary of a decision tree
pub struct TreeReport {
    pub root_guess: String,
    pub nodes: usize,
    pub edges: usize,
    pub reachable: usize,
    /// Longest root-to-leaf path, counted in guesses
    pub max_depth: usize,
}

/// Measure a tree by breadth-first walk from the root
#[must_use]
pub fn tree_report(tree: &DecisionTree) -> TreeReport {
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();
    let mut max_depth = 0;

    visited.insert(ROOT);
    queue.push_back((ROOT, 1));

    while let Some((node, depth)) = queue.pop_front() {
        max_depth = max_depth.max(depth);

        for (_, next) in tree.edges(node) {
            // Guard against cycles in malformed data
            if visited.insert(next) {
                queue.push_back((next, depth + 1));
            }
        }
    }

    TreeReport {
        root_guess: tree
            .guess(ROOT)
            .map_or_else(String::new, |w| w.text().to_string()),
        nodes: tree.node_count(),
        edges: tree.edge_count(),
        reachable: visited.len(),
        max_depth,
    }
}
