//! Interactive text game
//!
//! Reads one command per line and drives a [`PuzzleSession`].

use crate::game::{Difficulty, PuzzleSession};
use crate::output::{
    print_comparison, print_game_state, print_hint, print_move_error, print_outcome,
    print_solution,
};
use crate::search::Algorithm;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Move(String),
    Hint,
    SetAlgorithm(Algorithm),
    Compare,
    Solution,
    SetDifficulty(Difficulty),
    New { start: String, target: String },
    Random,
    Help,
    Quit,
}

impl PlayCommand {
    /// Parse one line of input
    ///
    /// A single bare word is a move.
    ///
    /// # Errors
    ///
    /// Returns a message for empty input, unknown names and missing arguments.
    pub fn parse(input: &str) -> Result<Self, String> {
        let mut parts = input.split_whitespace();
        let Some(head) = parts.next() else {
            return Err("Enter a word or a command (type 'help')".to_string());
        };
        let args: Vec<&str> = parts.collect();

        let command = match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("hint" | "h", []) => Self::Hint,
            ("compare" | "c", []) => Self::Compare,
            ("solution" | "solve", []) => Self::Solution,
            ("random" | "r", []) => Self::Random,
            ("help" | "?", []) => Self::Help,
            ("quit" | "q" | "exit", []) => Self::Quit,
            ("algo" | "algorithm", [name]) => {
                Self::SetAlgorithm(name.parse().map_err(|e| format!("{e}"))?)
            }
            ("mode" | "difficulty", [level]) => {
                Self::SetDifficulty(level.parse().map_err(|e| format!("{e}"))?)
            }
            ("new", [start, target]) => Self::New {
                start: (*start).to_string(),
                target: (*target).to_string(),
            },
            ("algo" | "algorithm" | "mode" | "difficulty" | "new", _) => {
                return Err(format!("Wrong arguments for '{head}' (type 'help')"));
            }
            (_, []) => Self::Move(head.to_string()),
            _ => return Err(format!("Unknown command '{head}' (type 'help')")),
        };
        Ok(command)
    }
}

/// Whether the loop keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one command to the session and print the outcome
pub fn apply(session: &mut PuzzleSession<'_>, command: PlayCommand) -> Flow {
    match command {
        PlayCommand::Move(word) => match session.validate_move(&word) {
            Ok(()) => {
                session.make_move(&word);
                print_outcome(session);
            }
            Err(reason) => print_move_error(&reason),
        },
        PlayCommand::Hint => print_hint(&session.hint()),
        PlayCommand::SetAlgorithm(algorithm) => {
            session.set_algorithm(algorithm);
            println!(
                "Hints now use {} ({})",
                algorithm.name().bright_cyan(),
                algorithm.description()
            );
        }
        PlayCommand::Compare => print_comparison(&session.compare_algorithms()),
        PlayCommand::Solution => print_solution(session.best_path()),
        PlayCommand::SetDifficulty(difficulty) => {
            session.set_difficulty(difficulty);
            println!(
                "Difficulty set to {} ({})",
                difficulty.name().bright_cyan(),
                difficulty.description()
            );
            start_random(session);
        }
        PlayCommand::New { start, target } => {
            if !session.start_new_game(&start, &target) {
                println!(
                    "{}",
                    format!("Cannot start {start} → {target} at this difficulty").red()
                );
            }
        }
        PlayCommand::Random => start_random(session),
        PlayCommand::Help => print_help(),
        PlayCommand::Quit => return Flow::Quit,
    }
    Flow::Continue
}

fn start_random(session: &mut PuzzleSession<'_>) {
    if let Err(err) = session.start_new_game_for_difficulty() {
        println!("{}", err.to_string().red());
    }
}

fn help_lines() -> Vec<String> {
    let mut lines: Vec<String> = [
        "Commands:",
        "  <word>                 play a word one letter away from the current word",
        "  hint                   suggest the next word",
        "  algo <bfs|ucs|astar>   choose the hint algorithm",
        "  compare                show every algorithm's ladder from here",
        "  solution               show the best known ladder",
        "  mode <level>           switch level and start a new puzzle",
        "  new <start> <target>   play a specific pair",
        "  random                 new random puzzle",
        "  quit                   leave the game",
        "Levels:",
    ]
    .map(str::to_string)
    .to_vec();
    lines.extend(
        Difficulty::ALL
            .iter()
            .map(|level| format!("  {:<22} {}", level.name(), level.description())),
    );
    lines
}

fn print_help() {
    for line in help_lines() {
        println!("{line}");
    }
}

/// Run the interactive loop until `quit` or end of input
///
/// # Errors
///
/// Returns an error on I/O failure reading input or flushing the prompt.
pub fn run_play<R: BufRead>(session: &mut PuzzleSession<'_>, input: R) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Word Ladder - Interactive                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Change one letter at a time to turn the start word into the target.");
    println!("Type 'help' for commands.");

    if session.target_word().is_none() {
        start_random(session);
    }

    let mut lines = input.lines();
    loop {
        print_game_state(session);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match PlayCommand::parse(&line) {
            Ok(command) => {
                if apply(session, command) == Flow::Quit {
                    break;
                }
            }
            Err(message) => println!("{}", message.yellow()),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}
