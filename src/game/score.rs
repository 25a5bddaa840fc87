//! Scoring
//!
//! `base = min(1000 * optimal / actual, 1000)`, plus 100 per unused move, times the
//! difficulty multiplier, floored.

/// Base score for matching the optimal ladder
pub const MAX_BASE_SCORE: f64 = 1000.0;

/// Bonus for each move left under the limit
pub const SPARE_MOVE_BONUS: f64 = 100.0;

/// Score a finished game
///
/// Returns 0 when no moves were made.
///
/// # Examples
/// ```
/// use word_ladder::game::compute_score;
///
/// // Optimal 3-move ladder solved in 3 moves with a limit of 10
/// assert_eq!(compute_score(3, 3, 10, 1.0), 1700);
/// ```
#[must_use]
pub fn compute_score(
    optimal_moves: usize,
    actual_moves: usize,
    move_limit: usize,
    multiplier: f64,
) -> u32 {
    if actual_moves == 0 {
        return 0;
    }

    let base = (MAX_BASE_SCORE * optimal_moves as f64 / actual_moves as f64).min(MAX_BASE_SCORE);
    let bonus = (move_limit as f64 - actual_moves as f64) * SPARE_MOVE_BONUS;

    ((base + bonus) * multiplier).floor().max(0.0) as u32
}
