//! Textmill statistics layer.
//!
//! Aggregates tokenizer output into descriptive statistics and produces
//! leading-sentence summaries. Both entry points are total functions: they
//! normalize through the safe-fallback contract of the canonical crate and
//! define every numeric edge case (empty input, no sentences, no words)
//! instead of failing on it.

mod statistics;
mod summary;

pub use crate::statistics::{compute_statistics, TextStatistics, MOST_COMMON_LIMIT};
pub use crate::summary::{summarize, DEFAULT_SUMMARY_SENTENCES};

#[cfg(test)]
mod tests {
    use canonical::NormalizeConfig;

    use super::*;

    #[test]
    fn empty_input_yields_the_zero_record() {
        let stats = compute_statistics("", &NormalizeConfig::default());
        assert_eq!(stats, TextStatistics {
            total_characters: 0,
            total_words: 0,
            total_sentences: 0,
            avg_word_length: 0.0,
            avg_sentence_length: 0.0,
            most_common_words: vec![],
        });
    }

    #[test]
    fn statistics_and_summary_survive_a_broken_primary_normalizer() {
        let cfg = NormalizeConfig {
            extra_strip_classes: vec!["[broken".into()],
            ..Default::default()
        };
        let text = "One sentence here. Two sentences here!";
        let stats = compute_statistics(text, &cfg);
        assert_eq!(stats.total_sentences, 2);
        assert_eq!(stats.total_words, 6);
        assert_eq!(summarize(text, 1, &cfg), "one sentence here.");
    }
}
