//! Word helpers
//!
//! Words are plain lowercase `String`s. These helpers normalize raw input and measure
//! how far apart two words are, which is all the graph and the A* heuristic need.

/// Letters tried at each position when generating neighbor candidates
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Normalize raw input into a dictionary key
///
/// Trims surrounding whitespace and lowercases. Returns `None` for blank input.
///
/// # Examples
/// ```
/// use word_ladder::core::normalize;
///
/// assert_eq!(normalize("  Cold \n").as_deref(), Some("cold"));
/// assert_eq!(normalize("   "), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Number of positions at which two words differ
///
/// Only meaningful for words of equal length. Returns `None` when the lengths differ,
/// since no sequence of single-letter substitutions can connect them.
///
/// # Examples
/// ```
/// use word_ladder::core::hamming_distance;
///
/// assert_eq!(hamming_distance("cat", "dog"), Some(3));
/// assert_eq!(hamming_distance("cold", "cord"), Some(1));
/// assert_eq!(hamming_distance("cat", "cats"), None);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    if a.len() != b.len() {
        return None;
    }
    Some(
        a.bytes()
            .zip(b.bytes())
            .filter(|(left, right)| left != right)
            .count(),
    )
}

/// Check whether two words are one letter substitution apart
#[inline]
#[must_use]
pub fn is_one_letter_apart(a: &str, b: &str) -> bool {
    hamming_distance(a, b) == Some(1)
}
