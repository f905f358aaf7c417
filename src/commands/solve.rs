//! Solve one target word
//!
//! Runs the agent against a chosen (or random) target and returns the guess
//! sequence with per-step feedback for display.

use crate::core::{Pattern, Word, score};
use crate::solver;
use crate::tree::DecisionTree;
use crate::wordlists::WordList;

/// The agent's full run against one target
#[derive(Debug)]
pub struct SolveReport {
    pub target: String,
    pub steps: Vec<SolveStep>,
}

/// A single guess in the solution
#[derive(Debug)]
pub struct SolveStep {
    pub word: String,
    pub pattern: Pattern,
}

/// Solve `target` (or a random list word when `None`) with the tree agent
///
/// # Errors
///
/// Returns an error if the target text is not a valid word, or if the walk
/// fails (tree exhausted, malformed tree, or unscorable target length).
pub fn solve_target(
    tree: &DecisionTree,
    words: &WordList,
    target: Option<&str>,
) -> Result<SolveReport, String> {
    let target = match target {
        Some(text) => Word::new(text).map_err(|e| format!("Invalid target word: {e}"))?,
        None => words.choose().clone(),
    };

    let guesses = solver::solve(tree, &target).map_err(|e| e.to_string())?;

    let mut steps = Vec::with_capacity(guesses.len());
    for guess in guesses {
        let pattern = score(&guess, &target).map_err(|e| e.to_string())?;
        steps.push(SolveStep {
            word: guess.text().to_string(),
            pattern,
        });
    }

    Ok(SolveReport {
        target: target.text().to_string(),
        steps,
    })
}
