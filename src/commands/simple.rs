//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: type guesses, read colored feedback,
//! and see the agent's line when the game ends.

use crate::game::{Game, GameStatus};
use crate::output::formatters::{colored_guess, keyboard_line, pattern_to_squares};
use crate::solver::Agent;
use crate::tree::DecisionTree;
use crate::wordlists::WordList;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive game
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple(words: &WordList, tree: &DecisionTree) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle - Simple Mode                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} tries.",
        words.word_length(),
        crate::game::DEFAULT_MAX_ROWS
    );
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut agent = Agent::new(tree);
    let mut game = Game::random(words);

    loop {
        let prompt = format!("Guess {}/{}", game.rows().len() + 1, game.max_rows());
        let input = get_user_input(&prompt)?;

        match input.as_str() {
            "quit" => return Ok(()),
            "new" => {
                game = Game::random(words);
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        match game.enter_guess(&input) {
            Ok(row) => {
                println!(
                    "  {}  {}",
                    colored_guess(row.word.text(), &row.pattern),
                    pattern_to_squares(&row.pattern)
                );
                println!("  {}\n", keyboard_line(game.keyboard()));
            }
            Err(e) => {
                println!("  ✗ {e}\n");
                continue;
            }
        }

        match game.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                println!(
                    "{}",
                    format!("🎉 You win! Solved in {} guesses.", game.rows().len())
                        .green()
                        .bold()
                );
                println!("   {}\n", agent_line(&mut agent, &game));
                match next_game_or_quit(words)? {
                    Some(next) => game = next,
                    None => return Ok(()),
                }
            }
            GameStatus::Lost => {
                println!(
                    "{}",
                    format!("❌ Out of guesses! The word was {}.", game.target())
                        .red()
                        .bold()
                );
                println!("   {}\n", agent_line(&mut agent, &game));
                match next_game_or_quit(words)? {
                    Some(next) => game = next,
                    None => return Ok(()),
                }
            }
        }
    }
}

/// The "what the agent would have done" line shown after a game
fn agent_line(agent: &mut Agent, game: &Game) -> String {
    match agent.solve(game.target()) {
        Ok(guesses) => {
            let sequence: Vec<&str> = guesses.iter().map(crate::core::Word::text).collect();
            format!(
                "Agent would have guessed: {} ({} guesses)",
                sequence.join(", "),
                guesses.len()
            )
        }
        Err(e) => format!("Agent could not determine a solution ({e})"),
    }
}

fn next_game_or_quit(words: &WordList) -> Result<Option<Game<'_>>, String> {
    loop {
        let input = get_user_input("Play again? (new/quit)")?;
        match input.as_str() {
            "new" | "y" | "yes" => {
                println!("\n🔄 New game started!\n");
                return Ok(Some(Game::random(words)));
            }
            "quit" | "n" | "no" => return Ok(None),
            _ => println!("  Type 'new' or 'quit'"),
        }
    }
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input.trim().to_lowercase())
}
