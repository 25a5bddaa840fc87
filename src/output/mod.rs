//! Terminal output formatting
//!
//! Display utilities for game state, hints and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_comparison, print_game_state, print_hint, print_move_error,
    print_outcome, print_solution, print_solve_report,
};
