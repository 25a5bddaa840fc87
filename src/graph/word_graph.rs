//! Word adjacency graph
//!
//! Owns the dictionary and the symmetric "differs by one letter" relation over it.

use crate::core::{ALPHABET, PuzzleError, normalize};
use crate::wordlists::loader::load_from_file;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;
use std::path::Path;

static NO_NEIGHBORS: BTreeSet<String> = BTreeSet::new();

/// Dictionary plus its adjacency relation
///
/// An edge `(u, v)` exists iff both words are in the dictionary, have equal length and
/// differ at exactly one position. Edges are always stored in both directions.
///
/// Neighbor sets are ordered, so every traversal over the graph is reproducible.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    words: FxHashSet<String>,
    adjacency: FxHashMap<String, BTreeSet<String>>,
}

impl WordGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and build a graph from in-memory words
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::WordGraph;
    ///
    /// let graph = WordGraph::from_words(["cat", "cot", "dot", "dog"]);
    /// assert!(graph.neighbors("cot").contains("dot"));
    /// assert!(graph.neighbors("dot").contains("cot"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        graph.replace_words(words);
        graph.build();
        graph
    }

    /// Load and build a graph from a dictionary file
    ///
    /// # Errors
    ///
    /// Returns `DictionaryUnreadable` if the file cannot be read and `EmptyDictionary`
    /// if it holds no words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PuzzleError> {
        let path = path.as_ref();
        let words = load_from_file(path).map_err(|source| PuzzleError::DictionaryUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let graph = Self::from_words(words);
        if graph.is_empty() {
            return Err(PuzzleError::EmptyDictionary {
                path: Some(path.to_path_buf()),
            });
        }
        Ok(graph)
    }

    /// Replace the dictionary with the contents of a file
    ///
    /// Fails softly: an unreadable file leaves the dictionary empty and logs a warning.
    /// Callers must check [`is_empty`](Self::is_empty) before starting a game. The
    /// adjacency relation is cleared; call [`build`](Self::build) afterwards.
    ///
    /// Returns the number of words loaded.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> usize {
        let path = path.as_ref();
        match load_from_file(path) {
            Ok(words) => self.replace_words(words),
            Err(err) => {
                log::warn!("could not read dictionary {}: {err}", path.display());
                self.replace_words(std::iter::empty::<&str>())
            }
        }
    }

    /// Replace the dictionary with the given words
    ///
    /// Words are trimmed, lowercased and de-duplicated; blank entries are dropped.
    /// The adjacency relation is cleared; call [`build`](Self::build) afterwards.
    ///
    /// Returns the number of distinct words now in the dictionary.
    pub fn replace_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words = words
            .into_iter()
            .filter_map(|word| normalize(word.as_ref()))
            .collect();
        self.adjacency.clear();
        log::debug!("dictionary loaded with {} words", self.words.len());
        self.words.len()
    }

    /// Recompute the adjacency relation from the current dictionary
    ///
    /// For each word, every position is replaced by every other letter; each candidate
    /// found in the dictionary is linked in both directions. Calling this twice with the
    /// same dictionary yields the same graph.
    pub fn build(&mut self) {
        let mut adjacency: FxHashMap<String, BTreeSet<String>> = FxHashMap::default();
        adjacency.reserve(self.words.len());

        for word in &self.words {
            adjacency.entry(word.clone()).or_default();

            let mut candidate = word.clone().into_bytes();
            for i in 0..candidate.len() {
                let original = candidate[i];
                for &letter in ALPHABET {
                    if letter == original {
                        continue;
                    }
                    candidate[i] = letter;
                    // Non-ASCII words never match: the substituted bytes are not valid UTF-8
                    if let Ok(neighbor) = std::str::from_utf8(&candidate)
                        && self.words.contains(neighbor)
                    {
                        adjacency
                            .entry(word.clone())
                            .or_default()
                            .insert(neighbor.to_string());
                        adjacency
                            .entry(neighbor.to_string())
                            .or_default()
                            .insert(word.clone());
                    }
                }
                candidate[i] = original;
            }
        }

        self.adjacency = adjacency;
        log::debug!(
            "graph built: {} words, {} edges",
            self.word_count(),
            self.edge_count()
        );
    }

    /// Check whether a word is in the dictionary (case-insensitive)
    #[must_use]
    pub fn word_exists(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        normalize(word).is_some_and(|normalized| self.words.contains(&normalized))
    }

    /// The dictionary's own copy of a word, if present
    ///
    /// Expects normalized input; lookups are exact.
    #[must_use]
    pub fn canonical(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Neighbors of a word, in sorted order
    ///
    /// Returns an empty set for words not in the dictionary.
    #[must_use]
    pub fn neighbors(&self, word: &str) -> &BTreeSet<String> {
        self.adjacency.get(word).unwrap_or(&NO_NEIGHBORS)
    }

    /// Check whether two words are joined by an edge
    #[must_use]
    pub fn are_neighbors(&self, a: &str, b: &str) -> bool {
        self.neighbors(a).contains(b)
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Check whether the dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the dictionary in unspecified order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// All dictionary words, sorted
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words().collect();
        words.sort_unstable();
        words
    }

    /// Dictionary words of a given length, sorted
    #[must_use]
    pub fn words_of_length(&self, len: usize) -> Vec<&str> {
        let mut words: Vec<&str> = self.words().filter(|w| w.len() == len).collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_one_letter_apart;

    fn sample() -> WordGraph {
        WordGraph::from_words(["cat", "cot", "cog", "dog", "dot"])
    }

    #[test]
    fn builds_expected_edges() {
        let graph = sample();
        let cot: Vec<&str> = graph.neighbors("cot").iter().map(String::as_str).collect();
        assert_eq!(cot, vec!["cat", "cog", "dot"]);

        let dog: Vec<&str> = graph.neighbors("dog").iter().map(String::as_str).collect();
        assert_eq!(dog, vec!["cog", "dot"]);

        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let graph = sample();
        for word in graph.words() {
            for neighbor in graph.neighbors(word) {
                assert!(
                    graph.neighbors(neighbor).contains(word),
                    "{neighbor} missing back-edge to {word}"
                );
            }
        }
    }

    #[test]
    fn edges_differ_by_exactly_one_letter() {
        let graph = WordGraph::from_words(["cold", "cord", "card", "ward", "warm", "cat"]);
        for word in graph.words() {
            for neighbor in graph.neighbors(word) {
                assert!(is_one_letter_apart(word, neighbor));
            }
        }
        assert!(graph.neighbors("cat").is_empty());
    }

    #[test]
    fn later_discoverers_still_link() {
        // "cot" is reachable from both "cat" and "dot"; neither edge may be dropped
        let graph = sample();
        assert!(graph.are_neighbors("cat", "cot"));
        assert!(graph.are_neighbors("dot", "cot"));
        assert!(graph.are_neighbors("cot", "cat"));
        assert!(graph.are_neighbors("cot", "dot"));
    }

    #[test]
    fn different_lengths_never_link() {
        let graph = WordGraph::from_words(["cat", "cats", "at"]);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn build_is_idempotent() {
        let mut graph = sample();
        let before: Vec<(String, Vec<String>)> = graph
            .sorted_words()
            .into_iter()
            .map(|w| (w.to_string(), graph.neighbors(w).iter().cloned().collect()))
            .collect();

        graph.build();
        let after: Vec<(String, Vec<String>)> = graph
            .sorted_words()
            .into_iter()
            .map(|w| (w.to_string(), graph.neighbors(w).iter().cloned().collect()))
            .collect();

        assert_eq!(before, after);
    }

    #[test]
    fn replace_words_deduplicates_and_normalizes() {
        let mut graph = WordGraph::new();
        let count = graph.replace_words(["Cat", "cat ", "", "  ", "COT"]);
        assert_eq!(count, 2);
        assert!(graph.word_exists("cat"));
        assert!(graph.word_exists("cot"));
    }

    #[test]
    fn replace_words_clears_old_edges() {
        let mut graph = sample();
        graph.replace_words(["lead", "load"]);
        assert!(graph.neighbors("cat").is_empty());
        graph.build();
        assert!(graph.are_neighbors("lead", "load"));
        assert!(!graph.word_exists("cat"));
    }

    #[test]
    fn word_exists_is_case_insensitive() {
        let graph = sample();
        assert!(graph.word_exists("CAT"));
        assert!(graph.word_exists(" Dog "));
        assert!(!graph.word_exists("cow"));
    }

    #[test]
    fn unknown_word_has_no_neighbors() {
        let graph = sample();
        assert!(graph.neighbors("zzz").is_empty());
    }

    #[test]
    fn words_of_length_is_sorted() {
        let graph = WordGraph::from_words(["dog", "cold", "cat", "cot"]);
        assert_eq!(graph.words_of_length(3), vec!["cat", "cot", "dog"]);
        assert_eq!(graph.words_of_length(4), vec!["cold"]);
        assert!(graph.words_of_length(5).is_empty());
    }

    #[test]
    fn load_missing_file_leaves_empty_dictionary() {
        let mut graph = sample();
        let count = graph.load("/definitely/not/here/words.txt");
        assert_eq!(count, 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn from_file_reports_errors() {
        let err = WordGraph::from_file("/definitely/not/here/words.txt").unwrap_err();
        assert!(matches!(err, PuzzleError::DictionaryUnreadable { .. }));

        let path =
            std::env::temp_dir().join(format!("word_ladder_empty_{}.txt", std::process::id()));
        std::fs::write(&path, "\n   \n").unwrap();
        let err = WordGraph::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, PuzzleError::EmptyDictionary { .. }));
    }

    #[test]
    fn from_file_builds_graph() {
        let path =
            std::env::temp_dir().join(format!("word_ladder_graph_{}.txt", std::process::id()));
        std::fs::write(&path, "LEAD\nload\ngoad\ngold\n").unwrap();
        let graph = WordGraph::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(graph.word_count(), 4);
        assert_eq!(graph.edge_count(), 3);
    }
}
