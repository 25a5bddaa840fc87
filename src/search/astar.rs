//! A* search
//!
//! Frontier ordered by `f = g + h`, where `h` is the number of letters still differing
//! from the target. Each edge changes exactly one letter, so `h` never overestimates and
//! never drops by more than one per step. With a consistent heuristic a word's cost is
//! final once it is expanded, and the first time the target is popped its path is
//! optimal.

use super::engine::{Exploration, SearchEngine, reconstruct};
use super::uniform_cost::STEP_COST;
use crate::core::hamming_distance;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Remaining-moves estimate: letters that still differ from the target
#[inline]
#[must_use]
pub fn heuristic(word: &str, target: &str) -> usize {
    // Only equal-length words are ever compared during a search
    hamming_distance(word, target).unwrap_or(0)
}

pub(super) fn search<'a>(
    engine: &SearchEngine<'a>,
    start: &'a str,
    target: &'a str,
) -> Exploration<'a> {
    // (f, insertion sequence, g, word); equal f-costs pop in insertion order
    let mut frontier: BinaryHeap<Reverse<(usize, u64, usize, &str)>> = BinaryHeap::new();
    let mut best_cost: FxHashMap<&str, usize> = FxHashMap::default();
    let mut parents: FxHashMap<&str, &str> = FxHashMap::default();
    let mut closed: FxHashSet<&str> = FxHashSet::default();
    let mut sequence = 0_u64;
    let mut expanded = 0;

    best_cost.insert(start, 0);
    frontier.push(Reverse((heuristic(start, target), sequence, 0, start)));

    while let Some(Reverse((_, _, cost, current))) = frontier.pop() {
        if !closed.insert(current) {
            continue;
        }

        expanded += 1;
        if current == target {
            return Exploration::found(reconstruct(&parents, target), expanded);
        }

        for next in engine.successors(current) {
            if closed.contains(next) {
                continue;
            }
            let next_cost = cost + STEP_COST;
            if best_cost.get(next).is_none_or(|&known| next_cost < known) {
                best_cost.insert(next, next_cost);
                parents.insert(next, current);
                sequence += 1;
                frontier.push(Reverse((
                    next_cost + heuristic(next, target),
                    sequence,
                    next_cost,
                    next,
                )));
            }
        }
    }

    Exploration::exhausted(expanded)
}
