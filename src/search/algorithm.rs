//! Search algorithm selection

use crate::core::PuzzleError;
use std::fmt;
use std::str::FromStr;

/// The closed set of path-search algorithms
///
/// Parsed once from user input; everything downstream dispatches on the variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// Uninformed FIFO expansion
    BreadthFirst,
    /// Priority queue on accumulated path cost
    UniformCost,
    /// Priority queue on path cost plus Hamming distance to the target
    #[default]
    AStar,
}

impl Algorithm {
    /// Every algorithm, in comparison display order
    pub const ALL: [Self; 3] = [Self::BreadthFirst, Self::UniformCost, Self::AStar];

    /// Short display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::UniformCost => "UCS",
            Self::AStar => "A*",
        }
    }

    /// One-line description for menus
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth-First Search",
            Self::UniformCost => "Uniform Cost Search",
            Self::AStar => "A* Search (letter-difference heuristic)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PuzzleError;

    /// Accepts `bfs`, `breadth-first`, `ucs`, `uniform-cost`, `astar`, `a*` and
    /// `heuristic`, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth_first" => Ok(Self::BreadthFirst),
            "ucs" | "uniform-cost" | "uniform_cost" => Ok(Self::UniformCost),
            "astar" | "a*" | "a-star" | "heuristic" => Ok(Self::AStar),
            _ => Err(PuzzleError::UnknownAlgorithm(s.to_string())),
        }
    }
}
