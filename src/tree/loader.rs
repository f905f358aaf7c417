//! Decision-tree data loading
//!
//! The tree ships as two integer-keyed JSON mappings: one from node id to
//! guess word, one from node id to a table of feedback-string → successor
//! node. Feedback strings use `G`/`Y`/`.` per position. Both documents are
//! parsed into one immutable [`DecisionTree`].

use super::{DecisionTree, NodeId, TreeError};
use crate::core::{Pattern, Word, WordError};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for tree data parsing and loading
#[derive(Debug)]
pub enum TreeDataError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidNodeId(String),
    InvalidWord { node: NodeId, source: WordError },
    InvalidPattern { node: NodeId, key: String },
    Tree(TreeError),
}

impl fmt::Display for TreeDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read tree data: {e}"),
            Self::Json(e) => write!(f, "Malformed tree JSON: {e}"),
            Self::InvalidNodeId(key) => write!(f, "Node key {key:?} is not an integer id"),
            Self::InvalidWord { node, source } => {
                write!(f, "Node {node} has an invalid guess word: {source}")
            }
            Self::InvalidPattern { node, key } => {
                write!(f, "Node {node} has an invalid feedback key {key:?}")
            }
            Self::Tree(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TreeDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::InvalidWord { source, .. } => Some(source),
            Self::Tree(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TreeDataError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TreeDataError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<TreeError> for TreeDataError {
    fn from(e: TreeError) -> Self {
        Self::Tree(e)
    }
}

/// Parse a tree from the two JSON documents
///
/// # Errors
/// Returns `TreeDataError` for malformed JSON, non-integer node keys,
/// invalid guess words or feedback strings, or a tree without a root guess.
pub fn from_json(guesses_json: &str, successors_json: &str) -> Result<DecisionTree, TreeDataError> {
    let raw_guesses: HashMap<String, String> = serde_json::from_str(guesses_json)?;
    let raw_successors: HashMap<String, HashMap<String, NodeId>> =
        serde_json::from_str(successors_json)?;

    let mut guesses = FxHashMap::default();
    for (key, text) in raw_guesses {
        let node = parse_node_id(&key)?;
        let word =
            Word::new(&text).map_err(|source| TreeDataError::InvalidWord { node, source })?;
        guesses.insert(node, word);
    }

    let mut successors = FxHashMap::default();
    for (key, table) in raw_successors {
        let node = parse_node_id(&key)?;
        let mut edges = FxHashMap::default();
        for (feedback, next) in table {
            let pattern = Pattern::parse(&feedback).ok_or_else(|| TreeDataError::InvalidPattern {
                node,
                key: feedback.clone(),
            })?;
            edges.insert(pattern, next);
        }
        successors.insert(node, edges);
    }

    Ok(DecisionTree::new(guesses, successors)?)
}

/// Load a tree from its two JSON files
///
/// # Errors
/// Returns `TreeDataError::Io` when either file cannot be read, otherwise
/// the same errors as [`from_json`].
pub fn load_from_files<P: AsRef<Path>, Q: AsRef<Path>>(
    guess_path: P,
    successor_path: Q,
) -> Result<DecisionTree, TreeDataError> {
    let guesses_json = fs::read_to_string(guess_path)?;
    let successors_json = fs::read_to_string(successor_path)?;
    from_json(&guesses_json, &successors_json)
}

fn parse_node_id(key: &str) -> Result<NodeId, TreeDataError> {
    key.parse::<NodeId>()
        .map_err(|_| TreeDataError::InvalidNodeId(key.to_string()))
}
