//! Hint results

use crate::core::PathCosts;
use crate::search::Algorithm;

/// Suggested next step along the best path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintStep {
    pub word: String,
    /// Algorithm that produced the path being followed
    pub algorithm: Algorithm,
    /// Costs at the suggested word along the best path
    pub costs: PathCosts,
    /// Rest of the path, starting with the suggested word and ending at the target
    pub remaining_path: Vec<String>,
}

/// Outcome of asking for a hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    Next(HintStep),
    /// The current word already is the target
    AtTarget,
    /// No path was found when the game started (or no game is running)
    NoSolution,
    /// The player left the best path and no path leads on from the current word
    NoPathFromCurrent,
}

impl Hint {
    /// The suggested word, if any
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::Next(step) => Some(&step.word),
            _ => None,
        }
    }
}
