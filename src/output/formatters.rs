//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern};
use crate::game::{KeyStatus, Keyboard};
use colored::Colorize;

/// Format a pattern as emoji squares
#[must_use]
pub fn pattern_to_squares(pattern: &Pattern) -> String {
    pattern
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Green => '🟩',
            Mark::Yellow => '🟨',
            Mark::Miss => '⬜',
        })
        .collect()
}

/// Format a guessed word with each letter colored by its feedback
#[must_use]
pub fn colored_guess(word: &str, pattern: &Pattern) -> String {
    word.chars()
        .zip(pattern.marks())
        .map(|(letter, mark)| {
            let cell = format!(" {letter} ");
            match mark {
                Mark::Green => cell.black().on_green().to_string(),
                Mark::Yellow => cell.black().on_yellow().to_string(),
                Mark::Miss => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Format the keyboard as one A–Z line colored by key status
#[must_use]
pub fn keyboard_line(keyboard: &Keyboard) -> String {
    ('A'..='Z')
        .map(|letter| {
            let key = letter.to_string();
            let colored = match keyboard.status(letter) {
                KeyStatus::Correct => key.black().on_green().to_string(),
                KeyStatus::Present => key.black().on_yellow().to_string(),
                KeyStatus::Absent => key.bright_black().to_string(),
                KeyStatus::Unused => key.normal().to_string(),
            };
            format!("{colored} ")
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
