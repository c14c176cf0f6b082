//! Combined configuration for the pipeline stages.

use canonical::NormalizeConfig;
use ingest::FetchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the whole pipeline, one section per stage.
///
/// Serializable so deployments can load it from JSON or TOML; every field
/// defaults sensibly, so `PipelineConfig::default()` is a working setup.
///
/// Note that [`NormalizeConfig::extra_strip_classes`] is deliberately not
/// validated here: a malformed fragment is exactly the failure the
/// normalizer's fallback contract exists to absorb at call time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Fetch boundary settings (timeout, user agent, size cap).
    pub fetch: FetchConfig,
    /// Normalization policy shared by statistics and summaries.
    pub normalize: NormalizeConfig,
    /// Sentence count for summaries produced by
    /// [`process_from_url`](crate::Pipeline::process_from_url). Zero is
    /// clamped to the summarizer's default of 3.
    pub summary_sentences: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            normalize: NormalizeConfig::default(),
            summary_sentences: stats::DEFAULT_SUMMARY_SENTENCES,
        }
    }
}

impl PipelineConfig {
    /// Validates the stage configurations. Inexpensive; run at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fetch.validate()?;
        Ok(())
    }
}

/// Configuration-time errors for the combined pipeline config.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The fetch section is inconsistent.
    #[error("fetch configuration invalid: {0}")]
    Fetch(#[from] ingest::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn fetch_errors_propagate() {
        let config = PipelineConfig {
            fetch: FetchConfig {
                user_agent: "".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Fetch(_))));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = PipelineConfig {
            summary_sentences: 5,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let back: PipelineConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
