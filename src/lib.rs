//! Wordle Agent
//!
//! A playable Wordle game paired with an agent that solves any target by
//! walking a precomputed decision tree.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_agent::core::{Word, score};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! let pattern = score(&guess, &target).unwrap();
//! println!("Feedback: {pattern}");
//! ```

// Core domain types: words, feedback patterns, the feedback cache
pub mod core;

// Precomputed decision tree and its data loader
pub mod tree;

// The tree-walking agent
pub mod solver;

// Game session state (board rows, keyboard, win/lose)
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI game
pub mod interactive;
