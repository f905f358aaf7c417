//! Feedback memoization
//!
//! A solve asks for the same (guess, target) feedback repeatedly, and whole-
//! list checks ask for the same root-guess feedback thousands of times. The
//! cache is an explicit object so its lifetime and sharing are the caller's
//! decision: the agent owns one per solve sequence, the checker keeps one
//! per worker thread. Scoring is pure, so recomputing a key is always
//! harmless.

use super::feedback::{self, FeedbackError, Pattern};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Cache of feedback patterns keyed by (guess, target)
#[derive(Debug, Default)]
pub struct FeedbackCache {
    by_guess: FxHashMap<Word, FxHashMap<Word, Pattern>>,
}

impl FeedbackCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `guess` against `target`, reusing a cached pattern if present
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` for words of unequal length.
    /// Errors are not cached; only valid patterns are stored.
    pub fn score(&mut self, guess: &Word, target: &Word) -> Result<Pattern, FeedbackError> {
        if let Some(hit) = self.by_guess.get(guess).and_then(|m| m.get(target)) {
            return Ok(hit.clone());
        }

        let pattern = feedback::score(guess, target)?;
        self.by_guess
            .entry(guess.clone())
            .or_default()
            .insert(target.clone(), pattern.clone());
        Ok(pattern)
    }

    /// Number of cached (guess, target) pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_guess.values().map(FxHashMap::len).sum()
    }

    /// True when nothing has been cached yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_guess.is_empty()
    }

    /// Drop all cached entries
    pub fn clear(&mut self) {
        self.by_guess.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feedback::score;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn cached_result_matches_direct_scoring() {
        let mut cache = FeedbackCache::new();
        let guess = word("speed");
        let target = word("erase");

        let cached = cache.score(&guess, &target).unwrap();
        let direct = score(&guess, &target).unwrap();
        assert_eq!(cached, direct);
    }

    #[test]
    fn repeat_lookups_do_not_grow_the_cache() {
        let mut cache = FeedbackCache::new();
        let guess = word("crane");
        let target = word("slate");

        assert!(cache.is_empty());
        let first = cache.score(&guess, &target).unwrap();
        assert_eq!(cache.len(), 1);

        let second = cache.score(&guess, &target).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_pairs_are_cached_separately() {
        let mut cache = FeedbackCache::new();
        let guess = word("crane");

        cache.score(&guess, &word("slate")).unwrap();
        cache.score(&guess, &word("irate")).unwrap();
        cache.score(&word("slate"), &word("irate")).unwrap();

        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn errors_are_returned_and_not_cached() {
        let mut cache = FeedbackCache::new();
        let result = cache.score(&word("abcde"), &word("abcd"));

        assert!(matches!(
            result,
            Err(FeedbackError::LengthMismatch {
                guess: 5,
                target: 4
            })
        ));
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_empties_the_cache() {
        let mut cache = FeedbackCache::new();
        cache.score(&word("crane"), &word("slate")).unwrap();
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }
}
