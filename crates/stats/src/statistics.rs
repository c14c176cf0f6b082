use canonical::{chars, normalize_or_fallback, sentences, words, NormalizeConfig};
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How many entries the frequency ranking keeps.
pub const MOST_COMMON_LIMIT: usize = 10;

/// Descriptive statistics for one document.
///
/// Counts are non-negative by construction; the averages are defined as
/// exactly `0.0` when their denominator is zero, never `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Characters in the normalized text, single collapsed spaces included.
    pub total_characters: usize,
    /// Word tokens in the normalized text.
    pub total_words: usize,
    /// Sentences detected via `.` `!` `?` runs.
    pub total_sentences: usize,
    /// Mean character length of words; `0.0` with no words.
    pub avg_word_length: f64,
    /// Words per sentence; `0.0` with no sentences.
    pub avg_sentence_length: f64,
    /// Up to [`MOST_COMMON_LIMIT`] `(word, count)` pairs, highest count
    /// first, ties broken by first appearance in the text.
    pub most_common_words: Vec<(String, u64)>,
}

/// Computes statistics for arbitrary input text.
///
/// Sentence boundaries are always preserved internally regardless of the
/// caller's policy, and normalization goes through the safe-fallback
/// contract, so this function is total: any `&str` in, a well-defined
/// record out.
pub fn compute_statistics(text: &str, cfg: &NormalizeConfig) -> TextStatistics {
    let normalized = normalize_or_fallback(text, &cfg.with_sentence_boundaries());

    let sentence_list = sentences(&normalized);
    let word_list = words(&normalized);
    let char_list = chars(&normalized, true);

    let total_words = word_list.len();
    let total_sentences = sentence_list.len();

    let avg_word_length = if total_words == 0 {
        0.0
    } else {
        let char_sum: usize = word_list.iter().map(|word| word.chars().count()).sum();
        char_sum as f64 / total_words as f64
    };
    let avg_sentence_length = if total_sentences == 0 {
        0.0
    } else {
        total_words as f64 / total_sentences as f64
    };

    debug!(
        total_characters = char_list.len(),
        total_words,
        total_sentences,
        "statistics_computed"
    );

    TextStatistics {
        total_characters: char_list.len(),
        total_words,
        total_sentences,
        avg_word_length,
        avg_sentence_length,
        most_common_words: most_common(&word_list, MOST_COMMON_LIMIT),
    }
}

/// Stable frequency ranking: highest count first, ties resolved by the
/// position of the word's first occurrence.
fn most_common(word_list: &[String], limit: usize) -> Vec<(String, u64)> {
    let mut counts: FxHashMap<&str, (u64, usize)> = FxHashMap::default();
    for (position, word) in word_list.iter().enumerate() {
        counts.entry(word.as_str()).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, u64, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(word, count, _)| (word.to_string(), count))
        .collect()
}
