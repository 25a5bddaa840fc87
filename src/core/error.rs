//! Error types for dictionary setup and name parsing

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while setting up the engine or parsing user-facing names
///
/// Invalid moves and missing paths are not errors; they are reported through
/// `bool`, `Option` and [`MoveError`] values instead.
#[derive(Debug)]
pub enum PuzzleError {
    /// The dictionary file could not be read
    DictionaryUnreadable { path: PathBuf, source: io::Error },
    /// The dictionary loaded but contained no words
    EmptyDictionary { path: Option<PathBuf> },
    /// Algorithm name not recognised
    UnknownAlgorithm(String),
    /// Difficulty name not recognised
    UnknownDifficulty(String),
    /// Random generation and every fallback pair failed for this difficulty
    PuzzleUnavailable { difficulty: String },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DictionaryUnreadable { path, source } => {
                write!(f, "Could not read dictionary {}: {source}", path.display())
            }
            Self::EmptyDictionary { path: Some(path) } => {
                write!(f, "Dictionary {} contains no words", path.display())
            }
            Self::EmptyDictionary { path: None } => write!(f, "Dictionary contains no words"),
            Self::UnknownAlgorithm(name) => {
                write!(f, "Unknown algorithm '{name}' (expected bfs, ucs or astar)")
            }
            Self::UnknownDifficulty(name) => write!(
                f,
                "Unknown difficulty '{name}' (expected beginner, advanced or challenge)"
            ),
            Self::PuzzleUnavailable { difficulty } => {
                write!(f, "Cannot construct a {difficulty} puzzle from this dictionary")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DictionaryUnreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Reason a proposed move was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No puzzle is in progress (idle, solved or out of moves)
    NoActiveGame,
    NotInDictionary(String),
    Banned(String),
    /// Word length outside the active difficulty's band
    LengthOutOfRange { word: String, min: usize, max: usize },
    RestrictedLetter { word: String, letter: char },
    MoveLimitReached(usize),
    /// Word is valid but not one letter away from the current word
    NotAdjacent { from: String, to: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveGame => write!(f, "No puzzle in progress"),
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the dictionary"),
            Self::Banned(word) => write!(f, "'{word}' is banned at this difficulty"),
            Self::LengthOutOfRange { word, min, max } => write!(
                f,
                "'{word}' has {} letters; words must have {min} to {max}",
                word.len()
            ),
            Self::RestrictedLetter { word, letter } => {
                write!(f, "'{word}' uses the restricted letter '{letter}'")
            }
            Self::MoveLimitReached(limit) => write!(f, "Move limit of {limit} reached"),
            Self::NotAdjacent { from, to } => {
                write!(f, "'{to}' is not exactly one letter away from '{from}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}
