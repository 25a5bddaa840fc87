//! Core domain types for word ladders
//!
//! Word helpers, the path cost model and the crate's error types. Nothing here
//! depends on the graph or on game state.

mod cost;
mod error;
mod word;

pub use cost::PathCosts;
pub use error::{MoveError, PuzzleError};
pub use word::{ALPHABET, hamming_distance, is_one_letter_apart, normalize};
