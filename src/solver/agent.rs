//! Deterministic decision-tree walk

use crate::core::{FeedbackCache, FeedbackError, Pattern, Word};
use crate::tree::{DecisionTree, NodeId, ROOT};
use std::fmt;

/// Error type for a failed solve
#[derive(Debug)]
pub enum SolveError {
    /// Guess/target scoring failed (length mismatch)
    Feedback(FeedbackError),
    /// A reached node has no guess word; the tree data is malformed
    MissingGuess(NodeId),
    /// No successor edge for the observed feedback. Either the tree is
    /// malformed or the target lies outside the word domain the tree was
    /// built over.
    Exhausted { node: NodeId, pattern: Pattern },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feedback(e) => write!(f, "{e}"),
            Self::MissingGuess(node) => {
                write!(f, "Decision tree has no guess word for node {node}")
            }
            Self::Exhausted { node, pattern } => {
                write!(
                    f,
                    "Decision tree exhausted: node {node} has no successor for feedback {pattern}"
                )
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Feedback(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FeedbackError> for SolveError {
    fn from(e: FeedbackError) -> Self {
        Self::Feedback(e)
    }
}

/// Agent that solves targets by walking a shared decision tree
///
/// Holds the feedback cache for its solves; the tree itself is immutable
/// and can back any number of agents concurrently.
pub struct Agent<'a> {
    tree: &'a DecisionTree,
    cache: FeedbackCache,
}

impl<'a> Agent<'a> {
    /// Create an agent over a tree, with an empty feedback cache
    #[must_use]
    pub fn new(tree: &'a DecisionTree) -> Self {
        Self {
            tree,
            cache: FeedbackCache::new(),
        }
    }

    /// Produce the agent's guess sequence for `target`
    ///
    /// Walks from the root: append the current node's guess, score it
    /// against the target, stop on all-green feedback, otherwise follow the
    /// edge keyed by that feedback. The returned sequence is non-empty, ends
    /// with the target itself, and contains no earlier winning guess.
    ///
    /// # Errors
    /// - `SolveError::Exhausted` when a non-winning feedback has no
    ///   successor edge (malformed tree, or target outside the tree's word
    ///   domain).
    /// - `SolveError::MissingGuess` when a reached node has no guess word.
    /// - `SolveError::Feedback` when the target's length does not match a
    ///   tree word.
    pub fn solve(&mut self, target: &Word) -> Result<Vec<Word>, SolveError> {
        let mut node = ROOT;
        let mut guesses = Vec::new();

        loop {
            let guess = self.tree.guess(node).ok_or(SolveError::MissingGuess(node))?;
            let pattern = self.cache.score(guess, target)?;
            guesses.push(guess.clone());

            if pattern.is_all_green() {
                return Ok(guesses);
            }

            node = self
                .tree
                .successor(node, &pattern)
                .ok_or(SolveError::Exhausted { node, pattern })?;
        }
    }

    /// Number of (guess, target) pairs scored so far
    #[must_use]
    pub fn cached_scores(&self) -> usize {
        self.cache.len()
    }
}

/// Solve a single target with a throwaway agent
///
/// # Errors
/// Same as [`Agent::solve`].
pub fn solve(tree: &DecisionTree, target: &Word) -> Result<Vec<Word>, SolveError> {
    Agent::new(tree).solve(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn pattern(s: &str) -> Pattern {
        Pattern::parse(s).unwrap()
    }

    /// Tree over {APPLE, GRAPE, LEMON, MANGO, PEACH}: GRAPE at the root,
    /// each feedback leading straight to the only word that fits it.
    fn fruit_tree() -> DecisionTree {
        let mut guesses = FxHashMap::default();
        guesses.insert(0, word("grape"));
        guesses.insert(1, word("apple"));
        guesses.insert(2, word("lemon"));
        guesses.insert(3, word("mango"));
        guesses.insert(4, word("peach"));

        let mut edges = FxHashMap::default();
        edges.insert(pattern("..YYG"), 1);
        edges.insert(pattern("....Y"), 2);
        edges.insert(pattern("Y.Y.."), 3);
        edges.insert(pattern("..GYY"), 4);

        let mut successors = FxHashMap::default();
        successors.insert(0, edges);

        DecisionTree::new(guesses, successors).unwrap()
    }

    #[test]
    fn solves_every_word_in_the_domain() {
        let tree = fruit_tree();
        let mut agent = Agent::new(&tree);

        for target in ["APPLE", "LEMON", "MANGO", "PEACH"] {
            let target = word(target);
            let guesses = agent.solve(&target).unwrap();

            assert_eq!(guesses.len(), 2, "{target} should take two guesses");
            assert_eq!(guesses[0], word("grape"));
            assert_eq!(*guesses.last().unwrap(), target);
        }
    }

    #[test]
    fn root_target_is_solved_in_one_guess() {
        let tree = fruit_tree();
        let guesses = solve(&tree, &word("grape")).unwrap();
        assert_eq!(guesses, vec![word("grape")]);
    }

    #[test]
    fn no_winning_guess_before_the_last() {
        let tree = fruit_tree();
        let mut agent = Agent::new(&tree);

        for target in ["APPLE", "LEMON", "MANGO", "PEACH", "GRAPE"] {
            let target = word(target);
            let guesses = agent.solve(&target).unwrap();

            for guess in &guesses[..guesses.len() - 1] {
                let pattern = crate::core::score(guess, &target).unwrap();
                assert!(!pattern.is_all_green(), "redundant guess after a win");
            }
        }
    }

    #[test]
    fn solve_is_deterministic() {
        let tree = fruit_tree();
        let target = word("peach");

        let first = solve(&tree, &target).unwrap();
        let second = solve(&tree, &target).unwrap();
        assert_eq!(first, second);

        let mut agent = Agent::new(&tree);
        assert_eq!(agent.solve(&target).unwrap(), first);
        assert_eq!(agent.solve(&target).unwrap(), first);
    }

    #[test]
    fn out_of_domain_target_exhausts_the_tree() {
        let tree = fruit_tree();
        let result = solve(&tree, &word("ocean"));

        match result {
            Err(SolveError::Exhausted { node, pattern }) => {
                assert_eq!(node, ROOT);
                // GRAPE vs OCEAN: A and E land as yellows
                assert_eq!(pattern.to_string(), "..Y.Y");
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
    }

    #[test]
    fn dangling_successor_reports_missing_guess() {
        let mut guesses = FxHashMap::default();
        guesses.insert(0, word("grape"));

        let mut edges = FxHashMap::default();
        // Edge points at a node that has no guess word
        edges.insert(pattern("..YYG"), 7);
        let mut successors = FxHashMap::default();
        successors.insert(0, edges);

        let tree = DecisionTree::new(guesses, successors).unwrap();
        let result = solve(&tree, &word("apple"));

        assert!(matches!(result, Err(SolveError::MissingGuess(7))));
    }

    #[test]
    fn mismatched_target_length_is_a_feedback_error() {
        let tree = fruit_tree();
        let result = solve(&tree, &word("plum"));
        assert!(matches!(result, Err(SolveError::Feedback(_))));
    }

    #[test]
    fn agent_reuses_its_cache_across_solves() {
        let tree = fruit_tree();
        let mut agent = Agent::new(&tree);

        agent.solve(&word("apple")).unwrap();
        let after_first = agent.cached_scores();

        agent.solve(&word("apple")).unwrap();
        assert_eq!(agent.cached_scores(), after_first);
    }
}
