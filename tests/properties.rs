use proptest::prelude::*;
use std::sync::LazyLock;
use word_ladder::core::{hamming_distance, is_one_letter_apart};
use word_ladder::game::compute_score;
use word_ladder::graph::WordGraph;
use word_ladder::search::{Algorithm, SearchEngine};
use word_ladder::wordlists::WORDS;

static GRAPH: LazyLock<WordGraph> = LazyLock::new(|| WordGraph::from_words(WORDS));

static FOUR_LETTER: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| GRAPH.words_of_length(4));

/// Small alphabet so random word sets are densely connected
fn word_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{3}", 0..40)
}

proptest! {
    #[test]
    fn adjacency_is_symmetric(words in word_set()) {
        let graph = WordGraph::from_words(&words);
        for word in graph.words() {
            for neighbor in graph.neighbors(word) {
                prop_assert!(graph.neighbors(neighbor).contains(word));
                prop_assert!(is_one_letter_apart(word, neighbor));
            }
        }
    }

    #[test]
    fn every_one_letter_pair_is_linked(words in word_set()) {
        let graph = WordGraph::from_words(&words);
        let sorted = graph.sorted_words();
        for a in &sorted {
            for b in &sorted {
                prop_assert_eq!(graph.are_neighbors(a, b), is_one_letter_apart(a, b));
            }
        }
    }

    #[test]
    fn algorithms_agree_on_small_graphs(
        words in word_set(),
        i in any::<prop::sample::Index>(),
        j in any::<prop::sample::Index>(),
    ) {
        let graph = WordGraph::from_words(&words);
        let sorted = graph.sorted_words();
        prop_assume!(!sorted.is_empty());
        let start = sorted[i.index(sorted.len())];
        let target = sorted[j.index(sorted.len())];

        let results = SearchEngine::new(&graph).compare(start, target);
        prop_assert!(results.is_empty() || results.len() == Algorithm::ALL.len());

        let lengths: Vec<usize> = results.values().map(|result| result.moves()).collect();
        prop_assert!(lengths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn astar_matches_bfs_on_embedded_dictionary(
        i in any::<prop::sample::Index>(),
        j in any::<prop::sample::Index>(),
    ) {
        let start = FOUR_LETTER[i.index(FOUR_LETTER.len())];
        let target = FOUR_LETTER[j.index(FOUR_LETTER.len())];
        let engine = SearchEngine::new(&GRAPH);

        let bfs = engine.breadth_first(start, target);
        let astar = engine.heuristic(start, target);
        prop_assert_eq!(bfs.is_some(), astar.is_some());

        if let (Some(bfs), Some(astar)) = (bfs, astar) {
            prop_assert_eq!(bfs.moves(), astar.moves());
            // Never shorter than the letters that must change
            prop_assert!(astar.moves() >= hamming_distance(start, target).unwrap_or(0));
            for pair in astar.path.windows(2) {
                prop_assert!(GRAPH.are_neighbors(&pair[0], &pair[1]));
            }
        }
    }

    #[test]
    fn score_never_rises_with_more_moves(
        optimal in 1usize..10,
        actual in 1usize..20,
        limit in 1usize..20,
    ) {
        for multiplier in [1.0, 1.5, 2.0] {
            let score = compute_score(optimal, actual, limit, multiplier);
            let worse = compute_score(optimal, actual + 1, limit, multiplier);
            prop_assert!(worse <= score);
        }
    }
}
