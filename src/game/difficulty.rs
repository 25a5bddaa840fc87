//! Difficulty levels and the constraints they impose

use crate::core::{MoveError, PuzzleError};
use crate::graph::WordGraph;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// How many dictionary words the challenge level bans
pub const BANNED_WORD_COUNT: usize = 5;

/// Letters no playable word may contain at the challenge level
pub const CHALLENGE_RESTRICTED_LETTERS: [char; 4] = ['j', 'q', 'x', 'z'];

/// Difficulty level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    #[default]
    Beginner,
    Advanced,
    Challenge,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Advanced, Self::Challenge];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Advanced => "advanced",
            Self::Challenge => "challenge",
        }
    }

    /// One-line description for menus
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Beginner => "Short words, generous move limit",
            Self::Advanced => "Longer words and longer ladders",
            Self::Challenge => "Banned words and restricted letters",
        }
    }

    /// Factor applied to the final score
    #[must_use]
    pub const fn score_multiplier(self) -> f64 {
        match self {
            Self::Beginner => 1.0,
            Self::Advanced => 1.5,
            Self::Challenge => 2.0,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" | "easy" | "1" => Ok(Self::Beginner),
            "advanced" | "medium" | "2" => Ok(Self::Advanced),
            "challenge" | "hard" | "3" => Ok(Self::Challenge),
            _ => Err(PuzzleError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Constraints active for a game
///
/// A profile is built in one go by [`DifficultyProfile::for_difficulty`] and replaced
/// wholesale when the difficulty changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyProfile {
    pub difficulty: Difficulty,
    /// Moves allowed before the game is over
    pub move_limit: usize,
    /// Playable word lengths
    pub word_length: RangeInclusive<usize>,
    /// Optimal ladder lengths accepted when generating a random puzzle
    pub path_moves: RangeInclusive<usize>,
    pub banned_words: BTreeSet<String>,
    pub restricted_letters: BTreeSet<char>,
}

impl DifficultyProfile {
    /// Build the profile for a level
    ///
    /// Challenge bans the first [`BANNED_WORD_COUNT`] dictionary words (in sorted order)
    /// whose length falls in its band, so the banned set is the same on every run.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty, graph: &WordGraph) -> Self {
        match difficulty {
            Difficulty::Beginner => Self {
                difficulty,
                move_limit: 10,
                word_length: 3..=4,
                path_moves: 2..=4,
                banned_words: BTreeSet::new(),
                restricted_letters: BTreeSet::new(),
            },
            Difficulty::Advanced => Self {
                difficulty,
                move_limit: 15,
                word_length: 4..=5,
                path_moves: 3..=6,
                banned_words: BTreeSet::new(),
                restricted_letters: BTreeSet::new(),
            },
            Difficulty::Challenge => {
                let word_length = 4..=6;
                let banned_words = graph
                    .sorted_words()
                    .into_iter()
                    .filter(|word| word_length.contains(&word.len()))
                    .take(BANNED_WORD_COUNT)
                    .map(str::to_string)
                    .collect();
                Self {
                    difficulty,
                    move_limit: 12,
                    word_length,
                    path_moves: 4..=8,
                    banned_words,
                    restricted_letters: CHALLENGE_RESTRICTED_LETTERS.into_iter().collect(),
                }
            }
        }
    }

    /// Check a normalized word against the profile's bans and bands
    ///
    /// Dictionary membership is not checked here.
    ///
    /// # Errors
    ///
    /// Returns the first rule the word breaks.
    pub fn check(&self, word: &str) -> Result<(), MoveError> {
        if self.banned_words.contains(word) {
            return Err(MoveError::Banned(word.to_string()));
        }
        if !self.word_length.contains(&word.len()) {
            return Err(MoveError::LengthOutOfRange {
                word: word.to_string(),
                min: *self.word_length.start(),
                max: *self.word_length.end(),
            });
        }
        if let Some(letter) = word.chars().find(|c| self.restricted_letters.contains(c)) {
            return Err(MoveError::RestrictedLetter {
                word: word.to_string(),
                letter,
            });
        }
        Ok(())
    }

    /// Whether a normalized word passes [`check`](Self::check)
    #[must_use]
    pub fn permits(&self, word: &str) -> bool {
        self.check(word).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    #[test]
    fn parses_names_and_menu_numbers() {
        assert_eq!("Beginner".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert_eq!("2".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Challenge);
        assert!(matches!(
            "expert".parse::<Difficulty>(),
            Err(PuzzleError::UnknownDifficulty(_))
        ));
    }

    #[test]
    fn multipliers() {
        assert!((Difficulty::Beginner.score_multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((Difficulty::Advanced.score_multiplier() - 1.5).abs() < f64::EPSILON);
        assert!((Difficulty::Challenge.score_multiplier() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn beginner_and_advanced_have_no_bans() {
        let graph = WordGraph::from_words(WORDS);
        for difficulty in [Difficulty::Beginner, Difficulty::Advanced] {
            let profile = DifficultyProfile::for_difficulty(difficulty, &graph);
            assert!(profile.banned_words.is_empty());
            assert!(profile.restricted_letters.is_empty());
        }
    }

    #[test]
    fn challenge_bans_are_deterministic() {
        let graph = WordGraph::from_words(WORDS);
        let first = DifficultyProfile::for_difficulty(Difficulty::Challenge, &graph);
        let second = DifficultyProfile::for_difficulty(Difficulty::Challenge, &graph);
        assert_eq!(first, second);

        let banned: Vec<&str> = first.banned_words.iter().map(String::as_str).collect();
        assert_eq!(banned, vec!["able", "about", "above", "ache", "acid"]);
    }

    #[test]
    fn challenge_bans_come_from_the_length_band() {
        let graph = WordGraph::from_words(["ab", "abc", "cold", "cord", "warm"]);
        let profile = DifficultyProfile::for_difficulty(Difficulty::Challenge, &graph);
        let banned: Vec<&str> = profile.banned_words.iter().map(String::as_str).collect();
        assert_eq!(banned, vec!["cold", "cord", "warm"]);
    }

    #[test]
    fn check_reports_each_rule() {
        let graph = WordGraph::from_words(WORDS);
        let profile = DifficultyProfile::for_difficulty(Difficulty::Challenge, &graph);

        assert_eq!(profile.check("able"), Err(MoveError::Banned("able".to_string())));
        assert!(matches!(
            profile.check("cat"),
            Err(MoveError::LengthOutOfRange { min: 4, max: 6, .. })
        ));
        assert!(matches!(
            profile.check("zone"),
            Err(MoveError::RestrictedLetter { letter: 'z', .. })
        ));
        assert!(profile.permits("cold"));
    }

    #[test]
    fn beginner_length_band() {
        let profile = DifficultyProfile::for_difficulty(Difficulty::Beginner, &WordGraph::new());
        assert!(profile.permits("cat"));
        assert!(profile.permits("cold"));
        assert!(!profile.permits("about"));
        assert!(profile.permits("zoo"));
    }
}
