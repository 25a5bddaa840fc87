//! Puzzle session state machine
//!
//! One session is one player's game: the current and target word, the moves made so
//! far, the difficulty profile in force and the best path used for hints and scoring.

use super::difficulty::{Difficulty, DifficultyProfile};
use super::generator::{RELIABLE_PAIRS, random_pair};
use super::hint::{Hint, HintStep};
use super::score::compute_score;
use crate::core::{MoveError, PathCosts, PuzzleError, normalize};
use crate::graph::WordGraph;
use crate::search::astar::heuristic;
use crate::search::{Algorithm, SearchEngine, SearchResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No puzzle started
    Idle,
    /// Moves in progress
    Active,
    /// Current word equals the target
    Solved,
    /// Move limit reached without solving
    Exhausted,
}

/// A single word ladder game
///
/// Borrows a built [`WordGraph`]; all per-game state, including banned words and
/// restricted letters, lives in the session so sessions sharing a graph never interfere.
pub struct PuzzleSession<'a> {
    graph: &'a WordGraph,
    profile: DifficultyProfile,
    algorithm: Algorithm,
    target: Option<String>,
    moves: Vec<String>,
    best_path: Option<SearchResult>,
    comparison: BTreeMap<Algorithm, SearchResult>,
    optimal_moves: Option<usize>,
    score: Option<u32>,
    rng: StdRng,
}

impl<'a> PuzzleSession<'a> {
    /// Create an idle session at beginner difficulty using A*
    #[must_use]
    pub fn new(graph: &'a WordGraph) -> Self {
        Self::with_rng(graph, StdRng::from_os_rng())
    }

    /// Create a session whose random puzzles are reproducible
    #[must_use]
    pub fn with_seed(graph: &'a WordGraph, seed: u64) -> Self {
        Self::with_rng(graph, StdRng::seed_from_u64(seed))
    }

    fn with_rng(graph: &'a WordGraph, rng: StdRng) -> Self {
        Self {
            graph,
            profile: DifficultyProfile::for_difficulty(Difficulty::default(), graph),
            algorithm: Algorithm::default(),
            target: None,
            moves: Vec::new(),
            best_path: None,
            comparison: BTreeMap::new(),
            optimal_moves: None,
            score: None,
            rng,
        }
    }

    /// Replace the difficulty profile
    ///
    /// Does not pick new words; see
    /// [`start_new_game_for_difficulty`](Self::start_new_game_for_difficulty). When a game
    /// is running the best path is recomputed from the current word under the new rules.
    /// The score still measures against the ladder captured at the start.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.profile = DifficultyProfile::for_difficulty(difficulty, self.graph);
        log::info!(
            "difficulty set to {difficulty}: {} moves, lengths {:?}, {} banned words",
            self.profile.move_limit,
            self.profile.word_length,
            self.profile.banned_words.len()
        );
        if self.target.is_some() {
            self.recompute_best_path();
        }
    }

    /// Choose the algorithm used for hints
    ///
    /// Recomputes the best path immediately when a game is running.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        if self.target.is_some() {
            self.recompute_best_path();
        }
    }

    /// Check a word against the dictionary and the active profile
    ///
    /// # Errors
    ///
    /// Returns the first rule the word breaks.
    pub fn check_word(&self, word: &str) -> Result<(), MoveError> {
        let word = normalize(word).unwrap_or_default();
        if !self.graph.word_exists(&word) {
            return Err(MoveError::NotInDictionary(word));
        }
        self.profile.check(&word)
    }

    /// Whether a word may appear in a game at the current difficulty
    #[must_use]
    pub fn is_word_valid(&self, word: &str) -> bool {
        self.check_word(word).is_ok()
    }

    /// Check a proposed move
    ///
    /// # Errors
    ///
    /// Returns why the move is rejected: no running game, an invalid word, the move limit,
    /// or a word that is not one letter away from the current word.
    pub fn validate_move(&self, word: &str) -> Result<(), MoveError> {
        let word = normalize(word).unwrap_or_default();
        let Some(current) = self.current_word() else {
            return Err(MoveError::NoActiveGame);
        };
        if self.state() == GameState::Solved {
            return Err(MoveError::NoActiveGame);
        }

        self.check_word(&word)?;

        if self.current_move_count() >= self.profile.move_limit {
            return Err(MoveError::MoveLimitReached(self.profile.move_limit));
        }
        if !self.graph.are_neighbors(current, &word) {
            return Err(MoveError::NotAdjacent {
                from: current.to_string(),
                to: word,
            });
        }
        Ok(())
    }

    /// Whether a word is a legal next move
    #[must_use]
    pub fn is_valid_move(&self, word: &str) -> bool {
        self.validate_move(word).is_ok()
    }

    /// Start a game between two words
    ///
    /// Both words must be valid at the current difficulty and connected through valid
    /// words. Any game in progress is discarded. Returns `false` and leaves the session
    /// untouched otherwise.
    pub fn start_new_game(&mut self, start: &str, target: &str) -> bool {
        let (Some(start), Some(target)) = (normalize(start), normalize(target)) else {
            return false;
        };
        if !(self.is_word_valid(&start) && self.is_word_valid(&target)) {
            log::debug!("rejected game {start} -> {target}: invalid word");
            return false;
        }
        if self
            .with_engine(|engine| engine.heuristic(&start, &target))
            .is_none()
        {
            log::debug!("rejected game {start} -> {target}: not connected");
            return false;
        }

        log::info!("new {} game: {start} -> {target}", self.profile.difficulty);
        self.moves = vec![start];
        self.target = Some(target);
        self.score = None;
        self.recompute_best_path();
        self.optimal_moves = self.best_path.as_ref().map(SearchResult::moves);
        self.settle_if_solved();
        true
    }

    /// Start a random game suited to the current difficulty
    ///
    /// Tries random connected pairs whose optimal ladder fits the profile's band, then
    /// each of the [`RELIABLE_PAIRS`] in order.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleUnavailable` if no candidate produces a valid game; the session is
    /// left as it was.
    pub fn start_new_game_for_difficulty(&mut self) -> Result<(), PuzzleError> {
        let profile = &self.profile;
        let admit = |word: &str| profile.permits(word);
        let engine = SearchEngine::new(self.graph).restricted_to(&admit);

        if let Some((start, target)) = random_pair(&engine, profile, &mut self.rng)
            && self.start_new_game(&start, &target)
        {
            return Ok(());
        }

        for (start, target) in RELIABLE_PAIRS {
            if self.start_new_game(start, target) {
                log::debug!("using fallback puzzle {start} -> {target}");
                return Ok(());
            }
        }

        log::warn!("no {} puzzle available", self.profile.difficulty);
        Err(PuzzleError::PuzzleUnavailable {
            difficulty: self.profile.difficulty.to_string(),
        })
    }

    /// Rerun every algorithm from the current word and pick the best path
    ///
    /// Prefers the selected algorithm's path, then the shortest path any algorithm found.
    pub fn recompute_best_path(&mut self) {
        let (Some(current), Some(target)) = (self.current_word(), self.target_word()) else {
            self.best_path = None;
            self.comparison.clear();
            return;
        };

        let comparison = self.with_engine(|engine| engine.compare(current, target));
        let best = comparison.get(&self.algorithm).cloned().or_else(|| {
            comparison
                .values()
                .min_by_key(|result| result.path.len())
                .cloned()
        });

        log::debug!(
            "best path from {current}: {:?}",
            best.as_ref().map(|result| &result.path)
        );
        self.comparison = comparison;
        self.best_path = best;
    }

    /// Suggest the next word
    ///
    /// If the player has left the best path, the selected algorithm is rerun from the
    /// current word and its result becomes the new best path.
    pub fn hint(&mut self) -> Hint {
        let (Some(current), Some(target)) = (
            self.current_word().map(str::to_string),
            self.target_word().map(str::to_string),
        ) else {
            return Hint::NoSolution;
        };
        let Some(position) = self.best_path.as_ref().map(|best| best.position(&current)) else {
            return Hint::NoSolution;
        };
        if current == target {
            return Hint::AtTarget;
        }

        let index = match position {
            Some(index) => index,
            None => {
                let algorithm = self.algorithm;
                let Some(fresh) =
                    self.with_engine(|engine| engine.run(algorithm, &current, &target))
                else {
                    return Hint::NoPathFromCurrent;
                };
                log::debug!("player left the best path at {current}; rerouted");
                self.best_path = Some(fresh);
                0
            }
        };

        let Some(best) = &self.best_path else {
            return Hint::NoSolution;
        };
        let Some(word) = best.path.get(index + 1) else {
            return Hint::AtTarget;
        };

        Hint::Next(HintStep {
            word: word.clone(),
            algorithm: best.algorithm,
            costs: PathCosts::new(index + 1, heuristic(word, &target)),
            remaining_path: best.path[index + 1..].to_vec(),
        })
    }

    /// Play a word
    ///
    /// Returns `false` if the move is not valid; see [`validate_move`](Self::validate_move).
    pub fn make_move(&mut self, word: &str) -> bool {
        let Some(word) = normalize(word) else {
            return false;
        };
        if let Err(reason) = self.validate_move(&word) {
            log::debug!("rejected move {word}: {reason}");
            return false;
        }

        self.moves.push(word);
        self.settle_if_solved();
        true
    }

    /// Whether the current word is the target
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(
            (self.current_word(), self.target_word()),
            (Some(current), Some(target)) if current == target
        )
    }

    /// Lifecycle state
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.target.is_none() {
            GameState::Idle
        } else if self.is_solved() {
            GameState::Solved
        } else if self.current_move_count() >= self.profile.move_limit {
            GameState::Exhausted
        } else {
            GameState::Active
        }
    }

    /// Score for the moves made so far
    #[must_use]
    pub fn compute_score(&self) -> u32 {
        compute_score(
            self.optimal_moves.unwrap_or(0),
            self.current_move_count(),
            self.profile.move_limit,
            self.profile.difficulty.score_multiplier(),
        )
    }

    /// Score recorded when the puzzle was solved, 0 before that
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    fn settle_if_solved(&mut self) {
        if self.score.is_none() && self.is_solved() {
            let score = self.compute_score();
            log::info!(
                "solved in {} moves (optimal {}), score {score}",
                self.current_move_count(),
                self.minimum_moves()
            );
            self.score = Some(score);
        }
    }

    /// Moves made since the start word
    #[must_use]
    pub fn current_move_count(&self) -> usize {
        self.moves.len().saturating_sub(1)
    }

    /// Moves left before the limit
    #[must_use]
    pub fn remaining_moves(&self) -> usize {
        self.profile
            .move_limit
            .saturating_sub(self.current_move_count())
    }

    /// Optimal number of moves for the current puzzle, 0 if unknown
    #[must_use]
    pub fn minimum_moves(&self) -> usize {
        self.optimal_moves.unwrap_or(0)
    }

    #[must_use]
    pub fn current_word(&self) -> Option<&str> {
        self.target.as_ref()?;
        self.moves.last().map(String::as_str)
    }

    #[must_use]
    pub fn target_word(&self) -> Option<&str> {
        self.target.as_deref()
    }

    #[must_use]
    pub fn start_word(&self) -> Option<&str> {
        self.target.as_ref()?;
        self.moves.first().map(String::as_str)
    }

    /// Words played so far, starting with the start word
    #[must_use]
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    #[must_use]
    pub fn best_path(&self) -> Option<&SearchResult> {
        self.best_path.as_ref()
    }

    /// Each algorithm's path from the last recomputation
    ///
    /// Recorded when the game starts or the rules change; moves do not refresh it. Use
    /// [`compare_algorithms`](Self::compare_algorithms) for ladders from the current word.
    #[must_use]
    pub fn algorithm_comparison(&self) -> &BTreeMap<Algorithm, SearchResult> {
        &self.comparison
    }

    /// Run every algorithm from the current word to the target
    ///
    /// Empty when no game is running or the target cannot be reached.
    #[must_use]
    pub fn compare_algorithms(&self) -> BTreeMap<Algorithm, SearchResult> {
        match (self.current_word(), self.target_word()) {
            (Some(current), Some(target)) => {
                self.with_engine(|engine| engine.compare(current, target))
            }
            _ => BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.profile.difficulty
    }

    #[must_use]
    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    #[must_use]
    pub fn graph(&self) -> &'a WordGraph {
        self.graph
    }

    /// Run a search restricted to words valid under the current profile
    fn with_engine<R>(&self, search: impl FnOnce(&SearchEngine<'_>) -> R) -> R {
        let admit = |word: &str| self.profile.permits(word);
        let engine = SearchEngine::new(self.graph).restricted_to(&admit);
        search(&engine)
    }
}
