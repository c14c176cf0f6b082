//! Workspace umbrella crate for textmill.
//!
//! Stitches the stage crates together so callers can go from a URL or a
//! raw string to statistics and a summary with a single API entry point:
//!
//! - [`Pipeline::process_from_url`]: fetch, strip boilerplate, then
//!   statistics + summary over the cleaned text
//! - [`Pipeline::analyze_text`]: normalize then statistics for
//!   caller-supplied text
//!
//! The [`Pipeline`] holds only configuration: no per-call mutable state,
//! so one value can be shared freely across threads by whatever transport
//! layer sits above. Normalization failures never surface here (the
//! canonical crate's fallback contract absorbs them below this level), so
//! the only error categories a caller sees are invalid input and fetch
//! failure.

pub use canonical::{
    chars, collapse_whitespace, normalize, normalize_or_fallback, normalize_safe,
    sentence_lengths, sentences, words, NormalizeConfig, NormalizeError,
};
pub use ingest::{
    fetch, strip_boilerplate, DocumentOrigin, FetchConfig, IngestError, RawDocument,
};
pub use ngram::{
    deserialize_table, load_table, ngram_counts, probabilities, save_table, serialize_table,
    Ngram, NgramError, NgramTable, DELIMITER,
};
pub use stats::{
    compute_statistics, summarize, TextStatistics, DEFAULT_SUMMARY_SENTENCES, MOST_COMMON_LIMIT,
};

mod config;

pub use crate::config::{ConfigError, PipelineConfig};

use std::time::Instant;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn, Level};

/// Errors surfaced to callers of the pipeline.
///
/// Exactly two categories cross this boundary: bad input (bad URL shape,
/// wrong content type, empty text) and fetch failure (transport, status,
/// timeout). Internal normalization failures are absorbed by the fallback
/// contract and never appear here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PipelineError {
    /// The caller's input was malformed; the message says how.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The document could not be retrieved; the underlying cause is
    /// summarized in the message.
    #[error("fetch failed: {0}")]
    Fetch(String),
}

impl From<IngestError> for PipelineError {
    fn from(err: IngestError) -> Self {
        if err.is_invalid_input() {
            PipelineError::InvalidInput(err.to_string())
        } else {
            PipelineError::Fetch(err.to_string())
        }
    }
}

/// Result of processing a document fetched from a URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedDocument {
    /// The document as fetched, with provenance.
    pub document: RawDocument,
    /// Text with archive boilerplate removed.
    pub cleaned_text: String,
    /// Statistics over the cleaned text.
    pub statistics: TextStatistics,
    /// Leading-sentence summary of the cleaned text.
    pub summary: String,
}

/// Result of analyzing caller-supplied text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextReport {
    /// Statistics over the normalized text.
    pub statistics: TextStatistics,
}

/// The stateless pipeline service.
///
/// Construct once with [`Pipeline::new`] (which validates the config) and
/// share by reference; every method is a pure function of its arguments
/// and the held configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Builds a pipeline after validating the configuration.
    pub fn new(config: PipelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Fetches a document, strips boilerplate, and derives statistics and
    /// a summary from the cleaned text.
    pub fn process_from_url(&self, url: &str) -> Result<ProcessedDocument, PipelineError> {
        let start = Instant::now();
        let span = tracing::span!(Level::INFO, "pipeline.process_from_url", url);
        let _guard = span.enter();

        let document = match ingest::fetch(url, &self.config.fetch) {
            Ok(document) => document,
            Err(err) => {
                warn!(error = %err, "process_failure");
                return Err(err.into());
            }
        };

        let cleaned_text = ingest::strip_boilerplate(&document.text);
        let statistics = stats::compute_statistics(&cleaned_text, &self.config.normalize);
        let summary = stats::summarize(
            &cleaned_text,
            self.config.summary_sentences,
            &self.config.normalize,
        );

        let elapsed_micros = start.elapsed().as_micros();
        info!(
            doc_id = %document.doc_id,
            cleaned_bytes = cleaned_text.len(),
            total_words = statistics.total_words,
            total_sentences = statistics.total_sentences,
            elapsed_micros,
            "process_success"
        );

        Ok(ProcessedDocument {
            document,
            cleaned_text,
            statistics,
            summary,
        })
    }

    /// Computes statistics for caller-supplied text.
    ///
    /// Rejects empty or whitespace-only input at the boundary; everything
    /// past that point is total.
    pub fn analyze_text(&self, text: &str) -> Result<TextReport, PipelineError> {
        if text.trim().is_empty() {
            return Err(PipelineError::InvalidInput(
                "text must be a non-empty string".into(),
            ));
        }

        let start = Instant::now();
        let normalized = canonical::normalize_or_fallback(
            text,
            &self.config.normalize.with_sentence_boundaries(),
        );
        let statistics = stats::compute_statistics(&normalized, &self.config.normalize);

        let elapsed_micros = start.elapsed().as_micros();
        info!(
            total_words = statistics.total_words,
            total_sentences = statistics.total_sentences,
            elapsed_micros,
            "analyze_success"
        );
        Ok(TextReport { statistics })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pipeline>();
    }

    #[test]
    fn analyze_rejects_blank_text() {
        let pipeline = Pipeline::default();
        for blank in ["", "   ", "\n\t"] {
            assert!(matches!(
                pipeline.analyze_text(blank),
                Err(PipelineError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn analyze_counts_a_short_text() {
        let pipeline = Pipeline::default();
        let report = pipeline
            .analyze_text("This is a test. This is only a test!")
            .expect("non-empty input");
        assert_eq!(report.statistics.total_sentences, 2);
        assert_eq!(report.statistics.total_words, 9);
    }

    #[test]
    fn invalid_url_maps_to_invalid_input() {
        let pipeline = Pipeline::default();
        assert!(matches!(
            pipeline.process_from_url("not a url"),
            Err(PipelineError::InvalidInput(_))
        ));
    }

    #[test]
    fn ingest_error_categories_map_to_the_taxonomy() {
        let invalid: PipelineError = IngestError::InvalidUrl("x".into()).into();
        assert!(matches!(invalid, PipelineError::InvalidInput(_)));

        let fetch: PipelineError = IngestError::HttpStatus {
            status: 500,
            url: "http://example.org/a.txt".into(),
        }
        .into();
        assert!(matches!(fetch, PipelineError::Fetch(_)));
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = PipelineConfig {
            fetch: FetchConfig {
                timeout_secs: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(Pipeline::new(config).is_err());
    }
}
