//! Path cost model
//!
//! Shared by all search algorithms and by hints:
//! - g-cost: edges traversed so far (`path.len() - 1`)
//! - h-cost: Hamming distance from the last word to the target
//! - f-cost: g + h

use super::word::hamming_distance;
use std::fmt;

/// Cost metrics for a path ending at some word with a fixed target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PathCosts {
    /// Edges traversed from the start of the path
    pub g_cost: usize,
    /// Letters still differing from the target
    pub h_cost: usize,
    /// `g_cost + h_cost`
    pub f_cost: usize,
}

impl PathCosts {
    /// Build costs from explicit g and h values
    #[must_use]
    pub const fn new(g_cost: usize, h_cost: usize) -> Self {
        Self {
            g_cost,
            h_cost,
            f_cost: g_cost + h_cost,
        }
    }

    /// Evaluate a path against a target
    ///
    /// Returns `None` for an empty path, or when the last word and the target have
    /// different lengths (the heuristic is undefined there).
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::PathCosts;
    ///
    /// let path = ["cat", "cot", "dot"];
    /// let costs = PathCosts::evaluate(&path, "dog").unwrap();
    /// assert_eq!((costs.g_cost, costs.h_cost, costs.f_cost), (2, 1, 3));
    /// ```
    #[must_use]
    pub fn evaluate<S: AsRef<str>>(path: &[S], target: &str) -> Option<Self> {
        let last = path.last()?;
        let h_cost = hamming_distance(last.as_ref(), target)?;
        Some(Self::new(path.len() - 1, h_cost))
    }
}

impl fmt::Display for PathCosts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "g(n)={} h(n)={} f(n)={}",
            self.g_cost, self.h_cost, self.f_cost
        )
    }
}
