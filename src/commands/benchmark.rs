//! Benchmark command
//!
//! Runs all three algorithms over many random connected pairs in parallel.

use crate::graph::WordGraph;
use crate::search::{Algorithm, SearchEngine};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Pair draws allowed per requested pair before giving up
const DRAWS_PER_PAIR: usize = 50;

/// Per-algorithm totals
#[derive(Debug, Clone, Default)]
pub struct AlgorithmStats {
    pub solved: usize,
    pub total_moves: usize,
    pub total_expanded: usize,
    pub total_time: Duration,
}

impl AlgorithmStats {
    #[must_use]
    pub fn average_moves(&self) -> f64 {
        ratio(self.total_moves, self.solved)
    }

    #[must_use]
    pub fn average_expanded(&self) -> f64 {
        ratio(self.total_expanded, self.solved)
    }
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub pairs: usize,
    pub per_algorithm: BTreeMap<Algorithm, AlgorithmStats>,
    /// Pairs on which every algorithm found a path of the same length
    pub agreements: usize,
    /// Pairs on which A* expanded no more nodes than BFS
    pub astar_at_most_bfs: usize,
    pub duration: Duration,
}

struct PairOutcome {
    per_algorithm: BTreeMap<Algorithm, (usize, usize, Duration)>,
}

fn ratio(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Draw up to `count` distinct-word pairs that a path connects
///
/// Words with no neighbors are never drawn. Fewer pairs are returned when the
/// dictionary cannot supply enough.
#[must_use]
pub fn random_connected_pairs(
    graph: &WordGraph,
    count: usize,
    seed: u64,
) -> Vec<(String, String)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let words: Vec<&str> = graph
        .sorted_words()
        .into_iter()
        .filter(|word| !graph.neighbors(word).is_empty())
        .collect();

    let engine = SearchEngine::new(graph);
    let mut pairs = Vec::with_capacity(count);
    for _ in 0..count.saturating_mul(DRAWS_PER_PAIR) {
        if pairs.len() == count {
            break;
        }
        let (Some(&start), Some(&target)) = (words.choose(&mut rng), words.choose(&mut rng))
        else {
            break;
        };
        if start != target
            && start.len() == target.len()
            && engine.breadth_first(start, target).is_some()
        {
            pairs.push((start.to_string(), target.to_string()));
        }
    }
    pairs
}

/// Run every algorithm on each pair
///
/// Pairs are searched in parallel over the shared graph; a progress bar is drawn unless
/// `quiet` is set.
#[must_use]
pub fn run_benchmark(
    graph: &WordGraph,
    pairs: &[(String, String)],
    quiet: bool,
) -> BenchmarkResult {
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(pairs.len() as u64)
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        progress.set_style(style.progress_chars("█▓▒░"));
    }

    let timer = Instant::now();

    let outcomes: Vec<PairOutcome> = pairs
        .par_iter()
        .map(|(start, target)| {
            let engine = SearchEngine::new(graph);
            let per_algorithm = Algorithm::ALL
                .into_iter()
                .filter_map(|algorithm| {
                    let search_timer = Instant::now();
                    let result = engine.run(algorithm, start, target)?;
                    Some((
                        algorithm,
                        (result.moves(), result.expanded, search_timer.elapsed()),
                    ))
                })
                .collect();
            progress.inc(1);
            PairOutcome { per_algorithm }
        })
        .collect();

    progress.finish_and_clear();
    let duration = timer.elapsed();

    let mut per_algorithm: BTreeMap<Algorithm, AlgorithmStats> = Algorithm::ALL
        .into_iter()
        .map(|algorithm| (algorithm, AlgorithmStats::default()))
        .collect();
    let mut agreements = 0;
    let mut astar_at_most_bfs = 0;

    for outcome in &outcomes {
        for (algorithm, &(moves, expanded, elapsed)) in &outcome.per_algorithm {
            let stats = per_algorithm.entry(*algorithm).or_default();
            stats.solved += 1;
            stats.total_moves += moves;
            stats.total_expanded += expanded;
            stats.total_time += elapsed;
        }

        let mut lengths = outcome.per_algorithm.values().map(|&(moves, ..)| moves);
        if outcome.per_algorithm.len() == Algorithm::ALL.len()
            && lengths.next().is_some_and(|first| lengths.all(|moves| moves == first))
        {
            agreements += 1;
        }

        if let (Some(astar), Some(bfs)) = (
            outcome.per_algorithm.get(&Algorithm::AStar),
            outcome.per_algorithm.get(&Algorithm::BreadthFirst),
        ) && astar.1 <= bfs.1
        {
            astar_at_most_bfs += 1;
        }
    }

    log::debug!(
        "benchmark: {} pairs in {:.2}s",
        pairs.len(),
        duration.as_secs_f64()
    );

    BenchmarkResult {
        pairs: pairs.len(),
        per_algorithm,
        agreements,
        astar_at_most_bfs,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    #[test]
    fn pairs_are_connected_and_reproducible() {
        let graph = WordGraph::from_words(WORDS);
        let first = random_connected_pairs(&graph, 10, 11);
        let second = random_connected_pairs(&graph, 10, 11);

        assert_eq!(first.len(), 10);
        assert_eq!(first, second);

        let engine = SearchEngine::new(&graph);
        for (start, target) in &first {
            assert_ne!(start, target);
            assert!(engine.breadth_first(start, target).is_some());
        }
    }

    #[test]
    fn pairs_from_tiny_dictionary_run_out() {
        let graph = WordGraph::from_words(["cat", "dog"]);
        assert!(random_connected_pairs(&graph, 5, 1).is_empty());
    }

    #[test]
    fn all_algorithms_agree_on_lengths() {
        let graph = WordGraph::from_words(WORDS);
        let pairs = random_connected_pairs(&graph, 12, 5);
        let result = run_benchmark(&graph, &pairs, true);

        assert_eq!(result.pairs, pairs.len());
        assert_eq!(result.agreements, pairs.len());
        for stats in result.per_algorithm.values() {
            assert_eq!(stats.solved, pairs.len());
        }

        let bfs = &result.per_algorithm[&Algorithm::BreadthFirst];
        let astar = &result.per_algorithm[&Algorithm::AStar];
        assert!((bfs.average_moves() - astar.average_moves()).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_benchmark() {
        let graph = WordGraph::from_words(["cat", "cot"]);
        let result = run_benchmark(&graph, &[], true);
        assert_eq!(result.pairs, 0);
        assert_eq!(result.agreements, 0);
        assert!(result.per_algorithm.values().all(|stats| stats.solved == 0));
        assert!(result.per_algorithm[&Algorithm::AStar].average_moves().abs() < f64::EPSILON);
    }
}
