//! Core domain types for Wordle
//!
//! Words, feedback patterns, the feedback scoring function and its
//! memoization cache. Everything here is pure and I/O free.

mod cache;
mod feedback;
mod word;

pub use cache::FeedbackCache;
pub use feedback::{FeedbackError, Mark, Pattern, score};
pub use word::{Word, WordError};
