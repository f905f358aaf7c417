//! Whole-list tree check
//!
//! Runs the agent over every word in the list to confirm the tree solves
//! its entire domain, collecting the guess-count distribution and any
//! failures. Solves are independent, so they fan out across a rayon pool
//! with one agent (and thus one feedback cache) per worker.

use crate::solver::Agent;
use crate::tree::DecisionTree;
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of checking the tree against the word list
pub struct CheckOutcome {
    pub total: usize,
    pub solved: usize,
    pub failures: Vec<(String, String)>,
    pub distribution: HashMap<usize, usize>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Solve every list word (or the first `limit`) and aggregate the results
#[must_use]
pub fn run_check(tree: &DecisionTree, words: &WordList, limit: Option<usize>) -> CheckOutcome {
    let targets = &words.words()[..limit.unwrap_or(words.len()).min(words.len())];

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let results: Vec<(String, Result<usize, String>)> = targets
        .par_iter()
        .map_init(
            || Agent::new(tree),
            |agent, target| {
                let outcome = agent
                    .solve(target)
                    .map(|guesses| guesses.len())
                    .map_err(|e| e.to_string());
                pb.inc(1);
                (target.text().to_string(), outcome)
            },
        )
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();

    let mut solved = 0;
    let mut failures = Vec::new();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for (word, outcome) in results {
        match outcome {
            Ok(guesses) => {
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Err(reason) => failures.push((word, reason)),
        }
    }

    if solved == 0 {
        min_guesses = 0;
    }

    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    CheckOutcome {
        total: targets.len(),
        solved,
        failures,
        distribution,
        average_guesses,
        min_guesses,
        max_guesses,
        duration,
        words_per_second: targets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
