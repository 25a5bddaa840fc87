//! Formatting utilities for terminal output

/// Join a ladder with arrows
#[must_use]
pub fn format_path<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(|word| word.as_ref().to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Show each letter of `word`, marking the ones already matching `target`
///
/// Matching letters are uppercased, the rest left lowercase.
#[must_use]
pub fn mark_matches(word: &str, target: &str) -> String {
    word.chars()
        .zip(target.chars())
        .map(|(w, t)| if w == t { w.to_ascii_uppercase() } else { w })
        .collect()
}
