//! Random puzzle generation

use super::difficulty::DifficultyProfile;
use crate::search::SearchEngine;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;

/// Random start/target pairs tried before falling back to [`RELIABLE_PAIRS`]
pub const MAX_RANDOM_ATTEMPTS: usize = 200;

/// Well-known ladders tried in order when random generation gives up
pub const RELIABLE_PAIRS: &[(&str, &str)] = &[
    ("cat", "dog"),
    ("cold", "warm"),
    ("lead", "gold"),
    ("love", "hate"),
    ("east", "west"),
    ("more", "less"),
    ("sick", "well"),
    ("head", "tail"),
    ("word", "game"),
    ("fish", "bird"),
    ("wolf", "lamb"),
    ("pig", "sty"),
    ("ape", "man"),
    ("dust", "mist"),
];

/// Pick a random connected pair whose optimal ladder fits the profile's band
///
/// Both words are admitted by `engine` and have at least one admitted neighbor. Gives up
/// after [`MAX_RANDOM_ATTEMPTS`] tries.
pub(super) fn random_pair<R: Rng + ?Sized>(
    engine: &SearchEngine<'_>,
    profile: &DifficultyProfile,
    rng: &mut R,
) -> Option<(String, String)> {
    let graph = engine.graph();

    let mut by_length: FxHashMap<usize, Vec<&str>> = FxHashMap::default();
    for word in graph.sorted_words() {
        if profile.permits(word) && graph.neighbors(word).iter().any(|n| profile.permits(n)) {
            by_length.entry(word.len()).or_default().push(word);
        }
    }
    let mut lengths: Vec<usize> = by_length.keys().copied().collect();
    lengths.sort_unstable();
    let starts: Vec<&str> = lengths
        .iter()
        .flat_map(|len| by_length[len].iter().copied())
        .collect();

    for attempt in 1..=MAX_RANDOM_ATTEMPTS {
        let &start = starts.choose(rng)?;
        let Some(&target) = by_length.get(&start.len()).and_then(|same| same.choose(rng)) else {
            continue;
        };
        if start == target {
            continue;
        }

        let Some(result) = engine.heuristic(start, target) else {
            continue;
        };
        if profile.path_moves.contains(&result.moves()) {
            log::debug!(
                "random puzzle {start} -> {target} ({} moves) after {attempt} attempts",
                result.moves()
            );
            return Some((start.to_string(), target.to_string()));
        }
    }

    log::debug!("no random puzzle in {MAX_RANDOM_ATTEMPTS} attempts");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Difficulty;
    use crate::graph::WordGraph;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_pair_respects_band() {
        let graph = WordGraph::from_words(["cat", "cot", "cog", "dog", "dot", "cow"]);
        let profile = DifficultyProfile::for_difficulty(Difficulty::Beginner, &graph);
        let engine = SearchEngine::new(&graph);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let (start, target) = random_pair(&engine, &profile, &mut rng).unwrap();
            let moves = engine.heuristic(&start, &target).unwrap().moves();
            assert!(profile.path_moves.contains(&moves), "{start} -> {target}");
        }
    }

    #[test]
    fn random_pair_gives_up_when_band_is_unreachable() {
        // Longest ladder is one move, beginner wants at least two
        let graph = WordGraph::from_words(["cat", "cot", "dig", "dug"]);
        let profile = DifficultyProfile::for_difficulty(Difficulty::Beginner, &graph);
        let engine = SearchEngine::new(&graph);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_pair(&engine, &profile, &mut rng).is_none());
    }

    #[test]
    fn random_pair_on_empty_dictionary() {
        let graph = WordGraph::new();
        let profile = DifficultyProfile::for_difficulty(Difficulty::Advanced, &graph);
        let engine = SearchEngine::new(&graph);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_pair(&engine, &profile, &mut rng).is_none());
    }

    #[test]
    fn reliable_pairs_share_lengths() {
        for (start, target) in RELIABLE_PAIRS {
            assert_eq!(start.len(), target.len(), "{start} -> {target}");
        }
    }
}
