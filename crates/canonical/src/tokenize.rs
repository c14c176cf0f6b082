//! Tokenizers over normalized text.
//!
//! All functions here are pure and assume their input already went through
//! normalization (lowercased, whitespace collapsed). They still behave
//! sensibly on arbitrary strings, but the counting contracts of the
//! statistics stage only hold for normalized input.

use crate::normalize::collapse_whitespace;

/// The characters that terminate a sentence in normalized text.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

fn is_terminator(ch: char) -> bool {
    SENTENCE_TERMINATORS.contains(&ch)
}

/// Splits text into sentences on runs of `.` `!` `?`.
///
/// Fragments are trimmed and empty ones dropped, so consecutive
/// terminators ("wait...") do not produce phantom sentences. Source order
/// is preserved.
pub fn sentences(text: &str) -> Vec<String> {
    text.split(is_terminator)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits text into words: sentence terminators are removed first, then the
/// remainder is split on whitespace with empties dropped.
pub fn words(text: &str) -> Vec<String> {
    let without_terminators: String = text.chars().filter(|ch| !is_terminator(*ch)).collect();
    without_terminators
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Splits text into characters.
///
/// With `include_space`, whitespace runs are collapsed to single spaces
/// first and those spaces appear in the output; without it, whitespace is
/// excluded entirely.
pub fn chars(text: &str, include_space: bool) -> Vec<char> {
    if include_space {
        collapse_whitespace(text).chars().collect()
    } else {
        text.chars().filter(|ch| !ch.is_whitespace()).collect()
    }
}

/// Word count of each sentence, in order.
pub fn sentence_lengths(sentences: &[String]) -> Vec<usize> {
    sentences.iter().map(|sentence| words(sentence).len()).collect()
}
