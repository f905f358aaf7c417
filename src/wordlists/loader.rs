//! Word list loading utilities
//!
//! One word per line; blank and invalid lines are skipped.

use super::{WordList, WordListError};
use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for loading a word list from disk
#[derive(Debug)]
pub enum WordListLoadError {
    Io(io::Error),
    List(WordListError),
}

impl fmt::Display for WordListLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::List(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for WordListLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::List(e) => Some(e),
        }
    }
}

impl From<io::Error> for WordListLoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<WordListError> for WordListLoadError {
    fn from(e: WordListError) -> Self {
        Self::List(e)
    }
}

/// Load a word list from a file
///
/// # Errors
/// Returns an error when the file cannot be read, or when the surviving
/// words do not form a valid list (empty, or mixed lengths).
///
/// # Examples
/// ```no_run
/// use wordle_agent::wordlists::loader::load_from_file;
///
/// let list = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", list.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListLoadError> {
    let content = fs::read_to_string(path)?;
    Ok(WordList::from_words(parse_lines(&content))?)
}

/// Convert a slice of strings to words, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}
