//! Precomputed decision tree
//!
//! The agent's entire strategy is baked into a tree computed offline: every
//! node carries one canonical guess word, and its outgoing edges are keyed
//! by the feedback pattern that guess can receive. The tree is built once
//! from already-parsed data and shared read-only; nothing here mutates it.

pub mod loader;

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Node identifier within a decision tree
pub type NodeId = u32;

/// Every walk starts at node 0
pub const ROOT: NodeId = 0;

/// Error type for tree construction
#[derive(Debug)]
pub enum TreeError {
    /// The root node has no guess word; no walk could ever start
    MissingRootGuess,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRootGuess => {
                write!(f, "Decision tree has no guess word for root node {ROOT}")
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// An immutable decision tree: node → guess word, node → (pattern → node)
#[derive(Debug)]
pub struct DecisionTree {
    guesses: FxHashMap<NodeId, Word>,
    successors: FxHashMap<NodeId, FxHashMap<Pattern, NodeId>>,
}

impl DecisionTree {
    /// Assemble a tree from its two mappings
    ///
    /// # Errors
    /// Returns `TreeError::MissingRootGuess` if node 0 has no guess word.
    pub fn new(
        guesses: FxHashMap<NodeId, Word>,
        successors: FxHashMap<NodeId, FxHashMap<Pattern, NodeId>>,
    ) -> Result<Self, TreeError> {
        if !guesses.contains_key(&ROOT) {
            return Err(TreeError::MissingRootGuess);
        }

        Ok(Self {
            guesses,
            successors,
        })
    }

    /// The guess word associated with a node
    #[must_use]
    pub fn guess(&self, node: NodeId) -> Option<&Word> {
        self.guesses.get(&node)
    }

    /// The node reached by following `pattern` out of `node`
    #[must_use]
    pub fn successor(&self, node: NodeId, pattern: &Pattern) -> Option<NodeId> {
        self.successors.get(&node).and_then(|edges| edges.get(pattern)).copied()
    }

    /// Number of nodes carrying a guess word
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.guesses.len()
    }

    /// Total number of pattern edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.successors.values().map(FxHashMap::len).sum()
    }

    /// Iterate over a node's outgoing edges, in no particular order
    pub fn edges(&self, node: NodeId) -> impl Iterator<Item = (&Pattern, NodeId)> {
        self.successors
            .get(&node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(p, &next)| (p, next)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn pattern(s: &str) -> Pattern {
        Pattern::parse(s).unwrap()
    }

    fn two_node_tree() -> DecisionTree {
        let mut guesses = FxHashMap::default();
        guesses.insert(0, word("grape"));
        guesses.insert(1, word("apple"));

        let mut edges = FxHashMap::default();
        edges.insert(pattern("..YYG"), 1);
        let mut successors = FxHashMap::default();
        successors.insert(0, edges);

        DecisionTree::new(guesses, successors).unwrap()
    }

    #[test]
    fn missing_root_guess_is_rejected() {
        let mut guesses = FxHashMap::default();
        guesses.insert(3, word("grape"));

        let result = DecisionTree::new(guesses, FxHashMap::default());
        assert!(matches!(result, Err(TreeError::MissingRootGuess)));
    }

    #[test]
    fn guess_lookup() {
        let tree = two_node_tree();
        assert_eq!(tree.guess(ROOT), Some(&word("grape")));
        assert_eq!(tree.guess(1), Some(&word("apple")));
        assert_eq!(tree.guess(99), None);
    }

    #[test]
    fn successor_lookup() {
        let tree = two_node_tree();
        assert_eq!(tree.successor(ROOT, &pattern("..YYG")), Some(1));
        assert_eq!(tree.successor(ROOT, &pattern("YYYYY")), None);
        assert_eq!(tree.successor(1, &pattern("..YYG")), None);
    }

    #[test]
    fn counts() {
        let tree = two_node_tree();
        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.edge_count(), 1);
    }

    #[test]
    fn edges_iteration() {
        let tree = two_node_tree();
        let edges: Vec<_> = tree.edges(ROOT).collect();
        assert_eq!(edges, vec![(&pattern("..YYG"), 1)]);
        assert_eq!(tree.edges(1).count(), 0);
    }
}
