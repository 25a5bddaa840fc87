//! Breadth-first search
//!
//! Level-order expansion over unit-weight edges, so the first path to reach the target
//! is shortest in edge count.

use super::engine::{Exploration, SearchEngine, reconstruct};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

pub(super) fn search<'a>(
    engine: &SearchEngine<'a>,
    start: &'a str,
    target: &'a str,
) -> Exploration<'a> {
    let mut queue = VecDeque::from([start]);
    let mut visited: FxHashSet<&str> = FxHashSet::default();
    let mut parents: FxHashMap<&str, &str> = FxHashMap::default();
    let mut expanded = 0;

    visited.insert(start);

    while let Some(current) = queue.pop_front() {
        expanded += 1;
        if current == target {
            return Exploration::found(reconstruct(&parents, target), expanded);
        }

        for next in engine.successors(current) {
            if visited.insert(next) {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    Exploration::exhausted(expanded)
}
