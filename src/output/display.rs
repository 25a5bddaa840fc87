//! Display functions for game state and command results

use super::formatters::{create_progress_bar, format_path, mark_matches};
use crate::commands::{BenchmarkResult, SolveReport};
use crate::core::MoveError;
use crate::game::{GameState, Hint, PuzzleSession};
use crate::search::{Algorithm, SearchResult};
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the current puzzle
pub fn print_game_state(session: &PuzzleSession<'_>) {
    let (Some(current), Some(target)) = (session.current_word(), session.target_word()) else {
        println!("{}", "No puzzle in progress. Type 'random' or 'new <start> <target>'.".yellow());
        return;
    };

    let profile = session.profile();
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}   {} {}   {} {}",
        "Difficulty:".bright_black(),
        profile.difficulty.name().bright_cyan(),
        "Algorithm:".bright_black(),
        session.algorithm().name().bright_cyan(),
        "Optimal:".bright_black(),
        session.minimum_moves()
    );
    println!("{}", "─".repeat(60).cyan());
    println!(
        "  Current: {}   Target: {}",
        mark_matches(current, target).bright_white().bold(),
        target.to_uppercase().bright_yellow().bold()
    );
    println!("  Ladder:  {}", format_path(session.moves()));
    println!(
        "  Moves:   [{}] {}/{} ({} left)",
        create_progress_bar(session.current_move_count(), profile.move_limit, 20).green(),
        session.current_move_count(),
        profile.move_limit,
        session.remaining_moves()
    );

    if !profile.banned_words.is_empty() {
        let banned: Vec<&str> = profile.banned_words.iter().map(String::as_str).collect();
        println!("  Banned:  {}", banned.join(", ").red());
    }
    if !profile.restricted_letters.is_empty() {
        let letters: String = profile.restricted_letters.iter().collect();
        println!("  No letters: {}", letters.red());
    }
}

/// Print a hint
pub fn print_hint(hint: &Hint) {
    match hint {
        Hint::Next(step) => {
            println!(
                "💡 Try {} ({}, {})",
                step.word.to_uppercase().bright_green().bold(),
                step.algorithm,
                step.costs
            );
            println!("   Then: {}", format_path(&step.remaining_path).bright_black());
        }
        Hint::AtTarget => println!("{}", "You are already at the target.".green()),
        Hint::NoSolution => println!("{}", "No solution is known for this puzzle.".yellow()),
        Hint::NoPathFromCurrent => {
            println!("{}", "No path leads to the target from here.".red());
        }
    }
}

/// Print why a move was rejected
pub fn print_move_error(error: &MoveError) {
    println!("❌ {}", error.to_string().red());
}

/// Print every algorithm's path side by side
pub fn print_comparison(comparison: &BTreeMap<Algorithm, SearchResult>) {
    if comparison.is_empty() {
        println!("{}", "No algorithm found a path.".yellow());
        return;
    }

    println!("\n📊 {}", "Algorithm comparison:".bright_cyan().bold());
    for result in comparison.values() {
        println!(
            "   {:<4} {:>2} moves  {:>5} expanded  {}",
            result.algorithm.name().bright_cyan(),
            result.moves(),
            result.expanded,
            format_path(&result.path)
        );
    }
}

/// Print the best known ladder for the puzzle
pub fn print_solution(best: Option<&SearchResult>) {
    match best {
        Some(result) => println!(
            "🧭 {} ({} moves, {})",
            format_path(&result.path).bright_white(),
            result.moves(),
            result.algorithm
        ),
        None => println!("{}", "No solution is known for this puzzle.".yellow()),
    }
}

/// Print the end-of-game banner once a game is solved or out of moves
pub fn print_outcome(session: &PuzzleSession<'_>) {
    match session.state() {
        GameState::Solved => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!("{}", "    🎉  L A D D E R   C O M P L E T E  🎉".bright_green().bold());
            println!("{}", "═".repeat(60).bright_cyan());
            println!(
                "  Solved in {} moves (optimal {})",
                session.current_move_count().to_string().bright_cyan().bold(),
                session.minimum_moves()
            );
            println!(
                "  Score: {}",
                session.score().to_string().bright_yellow().bold()
            );
            println!("  Ladder: {}", format_path(session.moves()));
        }
        GameState::Exhausted => {
            println!("\n{}", "Out of moves!".red().bold());
            print_solution(session.best_path());
        }
        GameState::Idle | GameState::Active => {}
    }
}

/// Print the result of solving a pair
pub fn print_solve_report(report: &SolveReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} → {}",
        report.start.to_uppercase().bright_white().bold(),
        report.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (algorithm, step) in &report.steps {
        println!("\n{} ({})", algorithm.name().bright_cyan().bold(), algorithm.description());
        match &step.result {
            Some(result) => {
                println!("  Path:     {}", format_path(&result.path));
                println!("  Moves:    {}", result.moves());
                println!("  Costs:    {}", result.costs);
                println!("  Expanded: {}", result.expanded);
            }
            None => println!("  {}", "No path found".red()),
        }
        println!("  Time:     {:.3}ms", step.duration.as_secs_f64() * 1000.0);
    }

    println!();
    if !report.solved() {
        println!("{}", "❌ The words are not connected".red().bold());
    } else if report.lengths_agree() {
        println!("{}", "✅ All algorithms found optimal ladders".green().bold());
    } else {
        println!("{}", "⚠ Algorithms disagree on ladder length".yellow().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.pairs);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!(
        "   Length agreement: {}/{}",
        result.agreements.to_string().green(),
        result.pairs
    );
    println!(
        "   A* ≤ BFS expanded: {}/{}",
        result.astar_at_most_bfs.to_string().green(),
        result.pairs
    );

    println!("\n📈 {}", "Per algorithm:".bright_cyan().bold());
    for (algorithm, stats) in &result.per_algorithm {
        println!(
            "   {:<4} solved {:>4}  avg moves {}  avg expanded {:>8.1}  total {:.3}s",
            algorithm.name().bright_cyan(),
            stats.solved,
            format!("{:.2}", stats.average_moves()).bright_yellow(),
            stats.average_expanded(),
            stats.total_time.as_secs_f64()
        );
    }
}
