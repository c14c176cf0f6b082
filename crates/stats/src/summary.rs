use canonical::{normalize_or_fallback, sentences, NormalizeConfig};
use tracing::debug;

/// Sentence count used when the caller asks for zero sentences.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Extractive summary: the first `sentence_count` sentences of the
/// normalized text, re-punctuated.
///
/// A `sentence_count` of zero is clamped to
/// [`DEFAULT_SUMMARY_SENTENCES`]. Normalization goes through the
/// safe-fallback contract, so this function is total; text with no
/// sentences at all summarizes to the empty string rather than an error.
pub fn summarize(text: &str, sentence_count: usize, cfg: &NormalizeConfig) -> String {
    let requested = if sentence_count == 0 {
        DEFAULT_SUMMARY_SENTENCES
    } else {
        sentence_count
    };

    let normalized = normalize_or_fallback(text, &cfg.with_sentence_boundaries());
    let sentence_list = sentences(&normalized);
    if sentence_list.is_empty() {
        return String::new();
    }

    let take = requested.min(sentence_list.len());
    let mut summary = sentence_list[..take].join(". ");
    if !summary.ends_with(['.', '!', '?']) {
        summary.push('.');
    }

    debug!(
        requested,
        selected = take,
        available = sentence_list.len(),
        "summary_produced"
    );
    summary
}
