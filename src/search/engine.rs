//! Path search over a word graph

use super::{Algorithm, astar, breadth_first, uniform_cost};
use crate::core::{PathCosts, normalize};
use crate::graph::WordGraph;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// A path found by one of the algorithms
///
/// Consecutive words are graph neighbors; the first word is the start and the last is
/// the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub path: Vec<String>,
    pub costs: PathCosts,
    /// Nodes taken off the frontier before the target was reached
    pub expanded: usize,
}

impl SearchResult {
    /// Number of moves (edges) along the path
    #[must_use]
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Index of a word in the path
    #[must_use]
    pub fn position(&self, word: &str) -> Option<usize> {
        self.path.iter().position(|w| w == word)
    }
}

/// What an algorithm reports back to the engine
pub(super) struct Exploration<'a> {
    pub path: Option<Vec<&'a str>>,
    pub expanded: usize,
}

impl<'a> Exploration<'a> {
    pub(super) const fn found(path: Vec<&'a str>, expanded: usize) -> Self {
        Self {
            path: Some(path),
            expanded,
        }
    }

    pub(super) const fn exhausted(expanded: usize) -> Self {
        Self {
            path: None,
            expanded,
        }
    }
}

/// Runs the search algorithms against a borrowed graph
///
/// Searching never mutates the graph, so one graph can back any number of engines,
/// including engines on other threads.
///
/// An engine can be restricted to a subset of words; non-admitted words are skipped both
/// as endpoints and as intermediate steps.
#[derive(Clone, Copy)]
pub struct SearchEngine<'a> {
    graph: &'a WordGraph,
    admit: Option<&'a dyn Fn(&str) -> bool>,
}

impl<'a> SearchEngine<'a> {
    /// Create an engine over the whole graph
    #[must_use]
    pub const fn new(graph: &'a WordGraph) -> Self {
        Self { graph, admit: None }
    }

    /// Only allow paths through words accepted by `admit`
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::WordGraph;
    /// use word_ladder::search::SearchEngine;
    ///
    /// let graph = WordGraph::from_words(["cat", "cot", "dot", "dog"]);
    /// let no_cot = |word: &str| word != "cot";
    /// let engine = SearchEngine::new(&graph).restricted_to(&no_cot);
    /// assert!(engine.breadth_first("cat", "dog").is_none());
    /// ```
    #[must_use]
    pub fn restricted_to(mut self, admit: &'a dyn Fn(&str) -> bool) -> Self {
        self.admit = Some(admit);
        self
    }

    /// The graph being searched
    #[must_use]
    pub const fn graph(&self) -> &'a WordGraph {
        self.graph
    }

    /// Shortest path by FIFO expansion
    #[must_use]
    pub fn breadth_first(&self, start: &str, target: &str) -> Option<SearchResult> {
        self.run(Algorithm::BreadthFirst, start, target)
    }

    /// Shortest path by accumulated cost
    #[must_use]
    pub fn uniform_cost(&self, start: &str, target: &str) -> Option<SearchResult> {
        self.run(Algorithm::UniformCost, start, target)
    }

    /// Shortest path guided by the Hamming distance to the target
    #[must_use]
    pub fn heuristic(&self, start: &str, target: &str) -> Option<SearchResult> {
        self.run(Algorithm::AStar, start, target)
    }

    /// Run one algorithm between two words
    ///
    /// Returns `None` when either word is missing or not admitted, when the words have
    /// different lengths, or when no path connects them. A word is always reachable from
    /// itself with a one-word path.
    #[must_use]
    pub fn run(&self, algorithm: Algorithm, start: &str, target: &str) -> Option<SearchResult> {
        let start = self.resolve(start)?;
        let target = self.resolve(target)?;

        let exploration = if start == target {
            Exploration::found(vec![start], 0)
        } else if start.len() != target.len() {
            Exploration::exhausted(0)
        } else {
            match algorithm {
                Algorithm::BreadthFirst => breadth_first::search(self, start, target),
                Algorithm::UniformCost => uniform_cost::search(self, start, target),
                Algorithm::AStar => astar::search(self, start, target),
            }
        };

        log::trace!(
            "{algorithm} {start} -> {target}: expanded {}, found {}",
            exploration.expanded,
            exploration.path.is_some()
        );

        let path: Vec<String> = exploration
            .path?
            .into_iter()
            .map(str::to_string)
            .collect();
        let costs = PathCosts::evaluate(&path, target)?;

        Some(SearchResult {
            algorithm,
            path,
            costs,
            expanded: exploration.expanded,
        })
    }

    /// Run every algorithm and keep the ones that found a path
    #[must_use]
    pub fn compare(&self, start: &str, target: &str) -> BTreeMap<Algorithm, SearchResult> {
        Algorithm::ALL
            .into_iter()
            .filter_map(|algorithm| {
                self.run(algorithm, start, target)
                    .map(|result| (algorithm, result))
            })
            .collect()
    }

    /// Map user input onto the dictionary's own copy of an admitted word
    fn resolve(&self, word: &str) -> Option<&'a str> {
        let word = normalize(word)?;
        let canonical = self.graph.canonical(&word)?;
        self.admits(canonical).then_some(canonical)
    }

    fn admits(&self, word: &str) -> bool {
        self.admit.is_none_or(|accept| accept(word))
    }

    /// Admitted neighbors of a word, in sorted order
    pub(super) fn successors(&self, word: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let admit = self.admit;
        self.graph
            .neighbors(word)
            .iter()
            .map(String::as_str)
            .filter(move |&next| admit.is_none_or(|accept| accept(next)))
    }
}

/// Walk parent links back from the target
pub(super) fn reconstruct<'a>(
    parents: &FxHashMap<&'a str, &'a str>,
    target: &'a str,
) -> Vec<&'a str> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(&parent) = parents.get(current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
