//! Wordle feedback calculation and representation
//!
//! A pattern records, per board position, whether the guessed letter was in
//! the right place (Green), elsewhere in the target (Yellow), or absent
//! (Miss). Duplicate letters follow Wordle's exact rules: greens consume
//! target letters first, then yellows are awarded left to right while
//! unconsumed copies of the letter remain.
//!
//! The canonical text form matches the decision-tree data files: `G` for
//! green, `Y` for yellow, `.` for miss.

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Per-position feedback mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Miss,
    Yellow,
    Green,
}

/// Feedback pattern for a guess, one mark per board position
///
/// Value equality and hashing are what make patterns usable as decision-tree
/// edge keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    marks: Box<[Mark]>,
}

/// Error type for feedback scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Guess and target have different lengths; no meaningful pattern exists
    LengthMismatch { guess: usize, target: usize },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, target } => {
                write!(
                    f,
                    "Guess length {guess} does not match target length {target}"
                )
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Pattern {
    /// Build a pattern from explicit marks
    #[must_use]
    pub fn from_marks(marks: Vec<Mark>) -> Self {
        Self {
            marks: marks.into_boxed_slice(),
        }
    }

    /// An all-green pattern of the given length
    #[must_use]
    pub fn all_green(len: usize) -> Self {
        Self {
            marks: vec![Mark::Green; len].into_boxed_slice(),
        }
    }

    /// The marks, in board position order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of board positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True for the empty pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// True when every position is green (the winning feedback)
    #[inline]
    #[must_use]
    pub fn is_all_green(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == Mark::Green)
    }

    /// Count the green marks
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Green).count()
    }

    /// Count the yellow marks
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Yellow).count()
    }

    /// Parse a pattern from a string like `"G.YY."` or `"🟩🟨⬜🟩🟨"`
    ///
    /// Accepts:
    /// - `G`/`g`/🟩 for green
    /// - `Y`/`y`/🟨 for yellow
    /// - `.`/`-`/`_`/⬜ for miss
    ///
    /// # Examples
    /// ```
    /// use wordle_agent::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY.GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }

        let marks = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Some(Mark::Green),
                'Y' | 'y' | '🟨' => Some(Mark::Yellow),
                '.' | '-' | '_' | '⬜' => Some(Mark::Miss),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self::from_marks(marks))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &mark in &self.marks {
            let ch = match mark {
                Mark::Green => 'G',
                Mark::Yellow => 'Y',
                Mark::Miss => '.',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

/// Calculate the feedback Wordle would show for `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark greens at exact position matches; every non-green
///    target letter goes into a remaining-count multiset.
/// 2. Second pass, left to right: a still-unmarked position turns yellow if
///    its letter has a remaining count, consuming one copy.
///
/// The left-to-right consumption is Wordle's tie-break for repeated letters:
/// `SPEED` against `ERASE` scores `Y.YY.` because the first E takes the
/// first remaining E and the second E takes the last one, leaving the D and
/// P as misses.
///
/// # Errors
/// Returns `FeedbackError::LengthMismatch` when the words differ in length;
/// a pattern computed over unequal lengths would be meaningless.
pub fn score(guess: &Word, target: &Word) -> Result<Pattern, FeedbackError> {
    if guess.len() != target.len() {
        return Err(FeedbackError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let g = guess.bytes();
    let t = target.bytes();
    let mut marks = vec![Mark::Miss; g.len()];

    // First pass: greens, plus counts of every unconsumed target letter
    let mut remaining: FxHashMap<u8, u8> = FxHashMap::default();
    for i in 0..g.len() {
        if g[i] == t[i] {
            marks[i] = Mark::Green;
        } else {
            *remaining.entry(t[i]).or_insert(0) += 1;
        }
    }

    // Second pass: yellows, consuming counts left to right
    for i in 0..g.len() {
        if marks[i] == Mark::Green {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g[i])
            && *count > 0
        {
            *count -= 1;
            marks[i] = Mark::Yellow;
        }
    }

    Ok(Pattern::from_marks(marks))
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

    #[test]
    fn score_word_against_itself_is_all_green() {
        for w in ["crane", "speed", "aaaaa", "llama"] {
            let w = word(w);
            let result = score(&w, &w).unwrap();
            assert!(result.is_all_green(), "{w} vs itself must be all green");
            assert_eq!(result, Pattern::all_green(5));
        }
    }

    #[test]
    fn score_disjoint_words_is_all_miss() {
        let result = score(&word("abcde"), &word("fghij")).unwrap();
        assert_eq!(result, pattern("....."));
        assert_eq!(result.count_greens(), 0);
        assert_eq!(result.count_yellows(), 0);
    }

    #[test]
    fn score_speed_vs_erase() {
        // S yellow, P miss, both Es yellow (ERASE has two Es), D miss
        let result = score(&word("speed"), &word("erase")).unwrap();
        assert_eq!(result, pattern("Y.YY."));
    }

    #[test]
    fn score_alloy_vs_llama() {
        // A yellow, first L green, second L yellow, O and Y miss
        let result = score(&word("alloy"), &word("llama")).unwrap();
        assert_eq!(result, pattern("YGY.."));
    }

    #[test]
    fn score_robot_vs_booze() {
        // First O green in place, B and second O yellow, R and T miss
        let result = score(&word("robot"), &word("booze")).unwrap();
        assert_eq!(result, pattern(".GYY."));
    }

    #[test]
    fn score_robot_vs_floor() {
        // The positional O match takes priority over the earlier O
        let result = score(&word("robot"), &word("floor")).unwrap();
        assert_eq!(result, pattern("YY.G."));
    }

    #[test]
    fn score_yellow_exhausts_with_target_count() {
        // Target has one E; only the first unmatched E in the guess goes yellow
        let result = score(&word("eerie"), &word("model")).unwrap();
        assert_eq!(result, pattern("Y...."));
    }

    #[test]
    fn score_no_false_greens() {
        let guess = word("crane");
        let target = word("slate");
        let result = score(&guess, &target).unwrap();

        for (i, &mark) in result.marks().iter().enumerate() {
            if guess.bytes()[i] != target.bytes()[i] {
                assert_ne!(mark, Mark::Green, "false green at position {i}");
            }
        }
        assert_eq!(result, pattern("..G.G"));
    }

    #[test]
    fn score_conserves_target_letter_counts() {
        // Yellow+green marks for a letter never exceed its count in the target
        let cases = [("geese", "elate"), ("sassy", "asses"), ("mamma", "llama")];

        for (g, t) in cases {
            let guess = word(g);
            let target = word(t);
            let result = score(&guess, &target).unwrap();

            for letter in b'A'..=b'Z' {
                let marked = result
                    .marks()
                    .iter()
                    .zip(guess.bytes())
                    .filter(|&(&m, &b)| b == letter && m != Mark::Miss)
                    .count();
                let in_target = target.bytes().iter().filter(|&&b| b == letter).count();
                assert!(
                    marked <= in_target,
                    "{g} vs {t}: letter {} marked {marked} times but target has {in_target}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn score_length_mismatch_is_an_error() {
        let result = score(&word("abcde"), &word("abcd"));
        assert_eq!(
            result,
            Err(FeedbackError::LengthMismatch {
                guess: 5,
                target: 4
            })
        );
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = pattern("GY.__");
        let p2 = pattern("🟩🟨⬜⬜⬜");
        let p3 = pattern("gy-..");

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.count_greens(), 1);
        assert_eq!(p1.count_yellows(), 1);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert!(Pattern::parse("GXGGY").is_none());
        assert!(Pattern::parse("").is_none());
        assert!(Pattern::parse("12345").is_none());
    }

    #[test]
    fn pattern_display_is_canonical() {
        assert_eq!(pattern("GY.Y.").to_string(), "GY.Y.");
        assert_eq!(pattern("🟩🟨⬜🟩🟨").to_string(), "GY.GY");
    }

    #[test]
    fn pattern_display_round_trips() {
        let original = pattern("G.YYG");
        let reparsed = Pattern::parse(&original.to_string()).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn all_green_matches_scored_win() {
        let w = word("grape");
        assert_eq!(score(&w, &w).unwrap(), Pattern::all_green(5));
        assert!(!Pattern::all_green(0).is_all_green());
    }
}
