use std::sync::LazyLock;
use word_ladder::core::is_one_letter_apart;
use word_ladder::game::{Difficulty, GameState, Hint, PuzzleSession, RELIABLE_PAIRS};
use word_ladder::graph::WordGraph;
use word_ladder::search::{Algorithm, SearchEngine};
use word_ladder::wordlists::WORDS;

static GRAPH: LazyLock<WordGraph> = LazyLock::new(|| WordGraph::from_words(WORDS));

fn shortest(start: &str, target: &str) -> Option<usize> {
    SearchEngine::new(&GRAPH)
        .breadth_first(start, target)
        .map(|result| result.moves())
}

#[test]
fn embedded_dictionary_builds() {
    assert_eq!(GRAPH.word_count(), WORDS.len());
    assert!(GRAPH.edge_count() > 0);
    assert!(GRAPH.word_exists("cold"));
    assert!(GRAPH.are_neighbors("cold", "cord"));
}

#[test]
fn known_ladder_lengths() {
    assert_eq!(shortest("cat", "dog"), Some(3));
    assert_eq!(shortest("lead", "gold"), Some(3));
    assert_eq!(shortest("cold", "warm"), Some(4));
    assert_eq!(shortest("head", "tail"), Some(5));
    assert_eq!(shortest("wolf", "lamb"), Some(8));
}

#[test]
fn every_algorithm_finds_optimal_valid_ladders() {
    let engine = SearchEngine::new(&GRAPH);
    for (start, target) in RELIABLE_PAIRS {
        let comparison = engine.compare(start, target);
        assert_eq!(comparison.len(), 3, "{start} -> {target}");

        let bfs = &comparison[&Algorithm::BreadthFirst];
        for result in comparison.values() {
            assert_eq!(result.moves(), bfs.moves(), "{} on {start} -> {target}", result.algorithm);
            assert_eq!(result.costs.g_cost, result.moves());
            assert_eq!(result.costs.h_cost, 0);
            for pair in result.path.windows(2) {
                assert!(is_one_letter_apart(&pair[0], &pair[1]));
                assert!(GRAPH.word_exists(&pair[1]));
            }
        }
    }
}

#[test]
fn astar_expands_no_more_than_bfs_on_reliable_pairs() {
    let engine = SearchEngine::new(&GRAPH);
    for (start, target) in RELIABLE_PAIRS {
        let bfs = engine.breadth_first(start, target).unwrap();
        let astar = engine.heuristic(start, target).unwrap();
        assert!(
            astar.expanded <= bfs.expanded,
            "{start} -> {target}: A* {} vs BFS {}",
            astar.expanded,
            bfs.expanded
        );
    }
}

/// Play a whole game by always taking the hint
fn play_by_hints(session: &mut PuzzleSession<'_>) -> usize {
    let mut moves = 0;
    while session.state() == GameState::Active {
        let Hint::Next(step) = session.hint() else {
            panic!("expected a hint at {:?}", session.current_word());
        };
        assert!(session.make_move(&step.word), "hint {} rejected", step.word);
        moves += 1;
    }
    moves
}

#[test]
fn following_hints_scores_the_maximum() {
    let expected = [
        (Difficulty::Beginner, 1600),
        (Difficulty::Advanced, 3150),
        (Difficulty::Challenge, 3600),
    ];

    for (difficulty, score) in expected {
        let mut session = PuzzleSession::with_seed(&GRAPH, 1);
        session.set_difficulty(difficulty);
        assert!(session.start_new_game("cold", "warm"), "{difficulty}");
        assert_eq!(session.minimum_moves(), 4);

        assert_eq!(play_by_hints(&mut session), 4);
        assert_eq!(session.state(), GameState::Solved);
        assert_eq!(session.score(), score, "{difficulty}");
        assert_eq!(session.hint(), Hint::AtTarget);
    }
}

#[test]
fn every_algorithm_gives_playable_hints() {
    for algorithm in Algorithm::ALL {
        let mut session = PuzzleSession::with_seed(&GRAPH, 1);
        session.set_algorithm(algorithm);
        assert!(session.start_new_game("lead", "gold"));
        assert_eq!(play_by_hints(&mut session), 3, "{algorithm}");
    }
}

#[test]
fn challenge_rules_on_embedded_dictionary() {
    let mut session = PuzzleSession::with_seed(&GRAPH, 1);
    session.set_difficulty(Difficulty::Challenge);

    for banned in ["able", "about", "above", "ache", "acid"] {
        assert!(!session.is_word_valid(banned), "{banned}");
    }
    assert!(!session.is_word_valid("cat"));
    assert!(!session.start_new_game("cat", "dog"));
    assert!(session.start_new_game("lead", "gold"));

    let best = session.best_path().unwrap();
    let profile = session.profile();
    for word in &best.path {
        assert!(profile.permits(word), "{word} on best path");
    }
}

#[test]
fn random_games_at_every_difficulty() {
    for seed in 0..5 {
        for difficulty in Difficulty::ALL {
            let mut session = PuzzleSession::with_seed(&GRAPH, seed);
            session.set_difficulty(difficulty);
            session.start_new_game_for_difficulty().unwrap();

            let moves = play_by_hints(&mut session);
            assert_eq!(moves, session.minimum_moves());
            assert!(session.is_solved());
            assert!(session.score() > 0);
        }
    }
}

#[test]
fn sessions_sharing_a_graph_are_independent() {
    let mut beginner = PuzzleSession::with_seed(&GRAPH, 1);
    let mut challenge = PuzzleSession::with_seed(&GRAPH, 1);
    challenge.set_difficulty(Difficulty::Challenge);

    assert!(beginner.start_new_game("cat", "dog"));
    assert!(!challenge.start_new_game("cat", "dog"));
    assert!(beginner.is_word_valid("able"));
    assert!(!challenge.is_word_valid("able"));
}
