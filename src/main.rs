//! Word Ladder - CLI
//!
//! Play word ladders in the terminal, solve a pair with every algorithm, or benchmark the
//! algorithms against each other.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use word_ladder::{
    commands::{random_connected_pairs, run_benchmark, run_play, solve_pair},
    game::{Difficulty, PuzzleSession},
    graph::WordGraph,
    logging::init_logger,
    output::{print_benchmark_result, print_solve_report},
    search::Algorithm,
    wordlists::{WORDS, WORDS_COUNT},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder game and solver using BFS, uniform-cost and A* search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: built-in list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Difficulty: beginner (default), advanced, challenge
    #[arg(long, global = true, default_value = "beginner")]
    difficulty: Difficulty,

    /// Hint algorithm: astar (default), bfs, ucs
    #[arg(short, long, global = true, default_value = "astar")]
    algorithm: Algorithm,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Start word (random puzzle if omitted)
        #[arg(requires = "target")]
        start: Option<String>,

        /// Target word
        target: Option<String>,

        /// Seed for random puzzles
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Find a ladder with every algorithm
    Solve {
        start: String,
        target: String,
    },

    /// Compare the algorithms on random connected pairs
    Benchmark {
        /// Number of pairs to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for pair selection
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

/// Build the graph from the -d flag or the embedded list
fn load_graph(dictionary: Option<&PathBuf>) -> Result<WordGraph> {
    let graph = match dictionary {
        Some(path) => WordGraph::from_file(path)?,
        None => {
            log::debug!("using built-in dictionary ({WORDS_COUNT} words)");
            WordGraph::from_words(WORDS)
        }
    };
    Ok(graph)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let graph = load_graph(cli.dictionary.as_ref())?;

    let command = cli.command.unwrap_or(Commands::Play {
        start: None,
        target: None,
        seed: None,
    });

    match command {
        Commands::Play {
            start,
            target,
            seed,
        } => run_play_command(
            &graph,
            cli.difficulty,
            cli.algorithm,
            start.zip(target),
            seed,
        ),
        Commands::Solve { start, target } => {
            let report = solve_pair(&graph, &start, &target).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_report(&report);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&graph, count, seed);
            Ok(())
        }
    }
}

fn run_play_command(
    graph: &WordGraph,
    difficulty: Difficulty,
    algorithm: Algorithm,
    pair: Option<(String, String)>,
    seed: Option<u64>,
) -> Result<()> {
    let mut session = match seed {
        Some(seed) => PuzzleSession::with_seed(graph, seed),
        None => PuzzleSession::new(graph),
    };
    session.set_difficulty(difficulty);
    session.set_algorithm(algorithm);

    match pair {
        Some((start, target)) => {
            if !session.start_new_game(&start, &target) {
                bail!("cannot start {start} -> {target} at {difficulty} difficulty");
            }
        }
        None => session.start_new_game_for_difficulty()?,
    }

    run_play(&mut session, io::stdin().lock())?;
    Ok(())
}

fn run_benchmark_command(graph: &WordGraph, count: usize, seed: u64) {
    let pairs = random_connected_pairs(graph, count, seed);
    if pairs.len() < count {
        log::warn!("only {} of {count} connected pairs found", pairs.len());
    }
    println!("Running benchmark on {} random pairs...", pairs.len());

    let result = run_benchmark(graph, &pairs, false);
    print_benchmark_result(&result);
}
