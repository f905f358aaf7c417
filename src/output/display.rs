//! Display functions for command results

use super::formatters::pattern_to_squares;
use crate::commands::{CheckOutcome, SolveReport, TreeReport};
use colored::Colorize;

/// Print the agent's run against one target
pub fn print_solve_report(report: &SolveReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Target: {}", report.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word,
            pattern_to_squares(&step.pattern)
        );
    }

    println!();
    println!(
        "{}",
        format!("✅ Agent solved it in {} guesses", report.steps.len())
            .green()
            .bold()
    );
}

/// Print the whole-list check results
pub fn print_check_outcome(outcome: &CheckOutcome) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TREE CHECK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Words tested:     {}", outcome.total);
    println!(
        "   Solved:           {} {}",
        outcome.solved,
        format!(
            "({:.1}%)",
            outcome.solved as f64 / outcome.total.max(1) as f64 * 100.0
        )
        .green()
    );
    if !outcome.failures.is_empty() {
        println!(
            "   Failed:           {}",
            outcome.failures.len().to_string().red().bold()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", outcome.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", outcome.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", outcome.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", outcome.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", outcome.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = outcome.distribution.values().copied().max().unwrap_or(1);
    let deepest = outcome.distribution.keys().copied().max().unwrap_or(0);
    for guess_count in 1..=deepest {
        let count = outcome.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = count as f64 / outcome.solved.max(1) as f64 * 100.0;
        let bar_len = if max_count > 0 {
            (count * 40 / max_count).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("   {guess_count}: {bar} {count:5} ({pct:5.1}%)");
    }

    if !outcome.failures.is_empty() {
        println!("\n❌ {}", "Failures:".red().bold());
        for (word, reason) in outcome.failures.iter().take(10) {
            println!("   {}: {reason}", word.red());
        }
        if outcome.failures.len() > 10 {
            println!("   … and {} more", outcome.failures.len() - 10);
        }
    }
}

/// Print the tree shape summary
pub fn print_tree_report(report: &TreeReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DECISION TREE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Root guess:       {}",
        report.root_guess.bright_yellow().bold()
    );
    println!("   Nodes:            {}", report.nodes);
    println!("   Edges:            {}", report.edges);
    println!(
        "   Reachable nodes:  {}{}",
        report.reachable,
        if report.reachable < report.nodes {
            format!("  ({} orphaned)", report.nodes - report.reachable)
                .yellow()
                .to_string()
        } else {
            String::new()
        }
    );
    println!("   Max depth:        {} guesses", report.max_depth);
}
