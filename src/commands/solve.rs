//! Solve command
//!
//! Runs every algorithm on one start/target pair and collects the results.

use crate::core::normalize;
use crate::graph::WordGraph;
use crate::search::{Algorithm, SearchEngine, SearchResult};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// One algorithm's outcome for the pair
#[derive(Debug)]
pub struct SolveStep {
    pub result: Option<SearchResult>,
    pub duration: Duration,
}

/// Result of solving a pair with every algorithm
#[derive(Debug)]
pub struct SolveReport {
    pub start: String,
    pub target: String,
    pub steps: BTreeMap<Algorithm, SolveStep>,
}

impl SolveReport {
    /// Whether any algorithm found a path
    #[must_use]
    pub fn solved(&self) -> bool {
        self.steps.values().any(|step| step.result.is_some())
    }

    /// Whether every algorithm that found a path found one of the same length
    #[must_use]
    pub fn lengths_agree(&self) -> bool {
        let mut lengths = self
            .steps
            .values()
            .filter_map(|step| step.result.as_ref().map(SearchResult::moves));
        lengths
            .next()
            .is_none_or(|first| lengths.all(|moves| moves == first))
    }
}

/// Solve a pair with every algorithm
///
/// # Errors
///
/// Returns an error if either word is not in the dictionary or the words differ in length.
pub fn solve_pair(graph: &WordGraph, start: &str, target: &str) -> Result<SolveReport, String> {
    let start = normalize(start).unwrap_or_default();
    let target = normalize(target).unwrap_or_default();

    for word in [&start, &target] {
        if !graph.word_exists(word) {
            return Err(format!("'{word}' is not in the dictionary"));
        }
    }
    if start.len() != target.len() {
        return Err(format!(
            "'{start}' and '{target}' have different lengths; ladders keep word length fixed"
        ));
    }

    let engine = SearchEngine::new(graph);
    let steps = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let timer = Instant::now();
            let result = engine.run(algorithm, &start, &target);
            let step = SolveStep {
                result,
                duration: timer.elapsed(),
            };
            (algorithm, step)
        })
        .collect();

    Ok(SolveReport {
        start,
        target,
        steps,
    })
}
