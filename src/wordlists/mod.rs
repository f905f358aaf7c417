//! Word lists
//!
//! The word domain for a game: sorted unique uppercase words of one common
//! length. Guess validation and random target choice both go through here.

pub mod loader;

use crate::core::Word;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for word list construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty,
    MixedLengths { expected: usize, word: Word },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list is empty"),
            Self::MixedLengths { expected, word } => {
                write!(
                    f,
                    "Word {word} has {} letters, expected {expected}",
                    word.len()
                )
            }
        }
    }
}

impl std::error::Error for WordListError {}

/// A validated word domain
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
    word_length: usize,
}

impl WordList {
    /// Build a list from words, sorting and de-duplicating
    ///
    /// # Errors
    /// Returns `WordListError::Empty` for an empty input and
    /// `WordListError::MixedLengths` when the words disagree on length.
    pub fn from_words(mut words: Vec<Word>) -> Result<Self, WordListError> {
        let Some(first) = words.first() else {
            return Err(WordListError::Empty);
        };

        let word_length = first.len();
        if let Some(odd) = words.iter().find(|w| w.len() != word_length) {
            return Err(WordListError::MixedLengths {
                expected: word_length,
                word: odd.clone(),
            });
        }

        words.sort();
        words.dedup();

        let index = words.iter().cloned().collect();

        Ok(Self {
            words,
            index,
            word_length,
        })
    }

    /// True when the word belongs to the domain
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true; construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Common length of every word in the list
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// The words, sorted
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a uniformly random word, e.g. as a game target
    #[must_use]
    pub fn choose(&self) -> &Word {
        self.words
            .choose(&mut rand::rng())
            .expect("list is non-empty by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn list_is_sorted_and_deduplicated() {
        let list = WordList::from_words(words(&["grape", "apple", "grape", "lemon"])).unwrap();

        let texts: Vec<&str> = list.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["APPLE", "GRAPE", "LEMON"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.word_length(), 5);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            WordList::from_words(Vec::new()),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn mixed_lengths_are_rejected() {
        let result = WordList::from_words(words(&["grape", "fig"]));
        assert!(matches!(
            result,
            Err(WordListError::MixedLengths { expected: 5, .. })
        ));
    }

    #[test]
    fn membership() {
        let list = WordList::from_words(words(&["apple", "grape"])).unwrap();

        assert!(list.contains(&Word::new("APPLE").unwrap()));
        assert!(list.contains(&Word::new("apple").unwrap()));
        assert!(!list.contains(&Word::new("lemon").unwrap()));
    }

    #[test]
    fn choose_returns_a_member() {
        let list = WordList::from_words(words(&["apple", "grape", "lemon"])).unwrap();

        for _ in 0..20 {
            assert!(list.contains(list.choose()));
        }
    }
}
