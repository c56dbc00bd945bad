//! Shared utility functions.

/// Truncate a string to at most `max_chars` characters.
///
/// A hard cutoff: no attempt is made to end on a word or sentence. Counting
/// characters rather than bytes keeps the cut on a UTF-8 boundary.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Truncate a string for log output, appending `...` when shortened.
pub fn preview(s: &str, max_chars: usize) -> String {
    let cut = truncate_chars(s, max_chars);
    if cut.len() < s.len() {
        format!("{}...", cut)
    } else {
        cut.to_string()
    }
}
