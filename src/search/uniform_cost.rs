//! Uniform-cost search
//!
//! Dijkstra-style expansion keyed on accumulated path cost. Every edge currently costs
//! [`STEP_COST`], so results match breadth-first search in length.

use super::engine::{Exploration, SearchEngine, reconstruct};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Cost of changing one letter
pub const STEP_COST: usize = 1;

pub(super) fn search<'a>(
    engine: &SearchEngine<'a>,
    start: &'a str,
    target: &'a str,
) -> Exploration<'a> {
    // (cost, insertion sequence, word); the sequence number breaks cost ties FIFO
    let mut frontier: BinaryHeap<Reverse<(usize, u64, &str)>> = BinaryHeap::new();
    let mut best_cost: FxHashMap<&str, usize> = FxHashMap::default();
    let mut parents: FxHashMap<&str, &str> = FxHashMap::default();
    let mut sequence = 0_u64;
    let mut expanded = 0;

    best_cost.insert(start, 0);
    frontier.push(Reverse((0, sequence, start)));

    while let Some(Reverse((cost, _, current))) = frontier.pop() {
        // Stale entry: a cheaper route to this word was queued later
        if best_cost.get(current).is_some_and(|&known| cost > known) {
            continue;
        }

        expanded += 1;
        if current == target {
            return Exploration::found(reconstruct(&parents, target), expanded);
        }

        for next in engine.successors(current) {
            let next_cost = cost + STEP_COST;
            if best_cost.get(next).is_none_or(|&known| next_cost < known) {
                best_cost.insert(next, next_cost);
                parents.insert(next, current);
                sequence += 1;
                frontier.push(Reverse((next_cost, sequence, next)));
            }
        }
    }

    Exploration::exhausted(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WordGraph;

    #[test]
    fn matches_breadth_first_length() {
        let graph = WordGraph::from_words([
            "cold", "cord", "card", "ward", "warm", "word", "worm", "wore", "core",
        ]);
        let engine = SearchEngine::new(&graph);

        let ucs = search(&engine, "cold", "warm").path.unwrap();
        let bfs = engine.breadth_first("cold", "warm").unwrap();
        assert_eq!(ucs.len(), bfs.path.len());
        assert_eq!(ucs.len() - 1, 4);
    }

    #[test]
    fn equal_cost_ties_resolve_in_insertion_order() {
        let graph = WordGraph::from_words(["cat", "cot", "cog", "dog", "dot"]);
        let engine = SearchEngine::new(&graph);

        // "cog" is queued before "dot", so it is expanded first and reaches "dog" first
        let path = search(&engine, "cat", "dog").path.unwrap();
        assert_eq!(path, vec!["cat", "cot", "cog", "dog"]);
    }

    #[test]
    fn unreachable_target() {
        let graph = WordGraph::from_words(["cat", "cot", "dig"]);
        let engine = SearchEngine::new(&graph);
        assert!(search(&engine, "cat", "dig").path.is_none());
    }
}
