//! Wordle Agent - CLI
//!
//! Playable Wordle with an agent that solves any target by walking a
//! precomputed decision tree. The word list and tree data are plain files:
//! one word per line, plus the tree's two integer-keyed JSON mappings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_agent::{
    commands::{run_check, run_simple, solve_target, tree_report},
    output::{print_check_outcome, print_solve_report, print_tree_report},
    tree::{DecisionTree, loader::load_from_files},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_agent",
    about = "Wordle game with a precomputed decision-tree playing agent",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "data/words.txt")]
    words: PathBuf,

    /// Tree guess file: JSON mapping node id to guess word
    #[arg(short = 'g', long, global = true, default_value = "data/guess.json")]
    guesses: PathBuf,

    /// Tree successor file: JSON mapping node id to {feedback: node id}
    #[arg(short = 's', long, global = true, default_value = "data/successor.json")]
    successors: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game (no TUI)
    Simple,

    /// Show the agent's guess sequence for a target word
    Solve {
        /// Target word (random list word when omitted)
        word: Option<String>,
    },

    /// Run the agent over every word in the list
    Check {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show decision-tree statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_from_file(&cli.words)
        .with_context(|| format!("Loading word list from {}", cli.words.display()))?;
    let tree = load_from_files(&cli.guesses, &cli.successors).with_context(|| {
        format!(
            "Loading decision tree from {} and {}",
            cli.guesses.display(),
            cli.successors.display()
        )
    })?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&words, &tree),
        Commands::Simple => run_simple(&words, &tree).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word } => {
            let report =
                solve_target(&tree, &words, word.as_deref()).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_report(&report);
            Ok(())
        }
        Commands::Check { limit } => {
            println!(
                "🎯 Checking the tree against {} words...",
                limit.unwrap_or(words.len()).min(words.len())
            );
            let outcome = run_check(&tree, &words, limit);
            print_check_outcome(&outcome);
            Ok(())
        }
        Commands::Stats => {
            print_tree_report(&tree_report(&tree));
            Ok(())
        }
    }
}

fn run_play_command(words: &WordList, tree: &DecisionTree) -> Result<()> {
    use wordle_agent::interactive::{App, run_tui};

    let app = App::new(words, tree);
    run_tui(app)
}
