//! A single game: target, guess rows, win/lose status

use super::keyboard::Keyboard;
use crate::core::{self, FeedbackError, Pattern, Word, WordError};
use crate::wordlists::WordList;
use std::fmt;

/// Standard Wordle board height
pub const DEFAULT_MAX_ROWS: usize = 6;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One submitted guess and its feedback
#[derive(Debug, Clone)]
pub struct GuessRow {
    pub word: Word,
    pub pattern: Pattern,
}

/// Error type for guess submission
#[derive(Debug)]
pub enum GameError {
    /// The game is already won or lost
    Finished,
    /// The entered text is not a word at all
    Word(WordError),
    /// The word is not in the word list
    UnknownWord(Word),
    /// Scoring failed (wrong length for this board)
    Feedback(FeedbackError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "The game is over; start a new one"),
            Self::Word(e) => write!(f, "{e}"),
            Self::UnknownWord(word) => write!(f, "{word} is not in the word list"),
            Self::Feedback(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            Self::Feedback(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<FeedbackError> for GameError {
    fn from(e: FeedbackError) -> Self {
        Self::Feedback(e)
    }
}

/// A single Wordle game against one target word
#[derive(Debug)]
pub struct Game<'a> {
    words: &'a WordList,
    target: Word,
    rows: Vec<GuessRow>,
    keyboard: Keyboard,
    max_rows: usize,
    status: GameStatus,
}

impl<'a> Game<'a> {
    /// Start a game against a chosen target
    #[must_use]
    pub fn new(words: &'a WordList, target: Word) -> Self {
        Self {
            words,
            target,
            rows: Vec::new(),
            keyboard: Keyboard::new(),
            max_rows: DEFAULT_MAX_ROWS,
            status: GameStatus::InProgress,
        }
    }

    /// Start a game against a random target from the list
    #[must_use]
    pub fn random(words: &'a WordList) -> Self {
        let target = words.choose().clone();
        Self::new(words, target)
    }

    /// Submit a guess
    ///
    /// Validates the text as a word and against the word list, scores it,
    /// updates the keyboard, and settles the game when the guess wins or
    /// uses the last row.
    ///
    /// # Errors
    /// Returns `GameError` for a finished game, malformed text, a word
    /// outside the list, or a length that cannot be scored.
    pub fn enter_guess(&mut self, text: &str) -> Result<&GuessRow, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::Finished);
        }

        let word = Word::new(text)?;
        if !self.words.contains(&word) {
            return Err(GameError::UnknownWord(word));
        }

        let pattern = core::score(&word, &self.target)?;
        self.keyboard.record(&word, &pattern);

        let won = pattern.is_all_green();
        self.rows.push(GuessRow { word, pattern });

        if won {
            self.status = GameStatus::Won;
        } else if self.rows.len() >= self.max_rows {
            self.status = GameStatus::Lost;
        }

        Ok(self.rows.last().expect("row just pushed"))
    }

    /// The secret target word
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// Submitted rows, oldest first
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Accumulated keyboard coloring
    #[must_use]
    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Current status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Board height
    #[must_use]
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Rows still available
    #[must_use]
    pub fn rows_left(&self) -> usize {
        self.max_rows - self.rows.len()
    }

    /// The word list this game validates guesses against
    #[must_use]
    pub fn words(&self) -> &'a WordList {
        self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::KeyStatus;

    fn fruit_list() -> WordList {
        let words = ["apple", "grape", "lemon", "mango", "peach"]
            .iter()
            .map(|t| Word::new(t).unwrap())
            .collect();
        WordList::from_words(words).unwrap()
    }

    #[test]
    fn winning_guess_ends_the_game() {
        let list = fruit_list();
        let mut game = Game::new(&list, Word::new("apple").unwrap());

        let row = game.enter_guess("apple").unwrap();
        assert!(row.pattern.is_all_green());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.rows().len(), 1);
    }

    #[test]
    fn wrong_guesses_until_loss() {
        let list = fruit_list();
        let mut game = Game::new(&list, Word::new("apple").unwrap());

        for _ in 0..DEFAULT_MAX_ROWS {
            assert_eq!(game.status(), GameStatus::InProgress);
            game.enter_guess("grape").unwrap();
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.rows_left(), 0);
    }

    #[test]
    fn finished_game_rejects_guesses() {
        let list = fruit_list();
        let mut game = Game::new(&list, Word::new("apple").unwrap());
        game.enter_guess("apple").unwrap();

        assert!(matches!(
            game.enter_guess("grape"),
            Err(GameError::Finished)
        ));
    }

    #[test]
    fn unknown_word_is_rejected_without_using_a_row() {
        let list = fruit_list();
        let mut game = Game::new(&list, Word::new("apple").unwrap());

        assert!(matches!(
            game.enter_guess("zzzzz"),
            Err(GameError::UnknownWord(_))
        ));
        assert!(matches!(game.enter_guess("app!e"), Err(GameError::Word(_))));
        assert_eq!(game.rows().len(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn keyboard_tracks_feedback() {
        let list = fruit_list();
        let mut game = Game::new(&list, Word::new("apple").unwrap());

        // GRAPE vs APPLE: A and P yellow, E green
        game.enter_guess("grape").unwrap();

        assert_eq!(game.keyboard().status('G'), KeyStatus::Absent);
        assert_eq!(game.keyboard().status('A'), KeyStatus::Present);
        assert_eq!(game.keyboard().status('P'), KeyStatus::Present);
        assert_eq!(game.keyboard().status('E'), KeyStatus::Correct);
    }

    #[test]
    fn random_game_targets_a_list_word() {
        let list = fruit_list();
        let game = Game::random(&list);
        assert!(list.contains(game.target()));
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let list = fruit_list();
        let mut game = Game::new(&list, Word::new("apple").unwrap());

        let row = game.enter_guess("ApPlE").unwrap();
        assert!(row.pattern.is_all_green());
    }
}
