//! Word ladder game state
//!
//! A [`PuzzleSession`] borrows a built [`WordGraph`](crate::graph::WordGraph) and runs one
//! game at a time: validating moves against the active [`DifficultyProfile`], producing
//! hints from the search engine and scoring the finished ladder.

mod difficulty;
mod generator;
mod hint;
mod score;
mod session;

pub use difficulty::{
    BANNED_WORD_COUNT, CHALLENGE_RESTRICTED_LETTERS, Difficulty, DifficultyProfile,
};
pub use generator::{MAX_RANDOM_ATTEMPTS, RELIABLE_PAIRS};
pub use hint::{Hint, HintStep};
pub use score::{MAX_BASE_SCORE, SPARE_MOVE_BONUS, compute_score};
pub use session::{GameState, PuzzleSession};
