//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{AlgorithmStats, BenchmarkResult, random_connected_pairs, run_benchmark};
pub use play::{PlayCommand, run_play};
pub use solve::{SolveReport, SolveStep, solve_pair};
