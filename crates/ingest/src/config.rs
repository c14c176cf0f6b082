//! Configuration for the fetch boundary.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Runtime configuration for document fetching.
///
/// Cheap to clone and serializable for configuration management. Validate
/// at startup with [`FetchConfig::validate`]; a zero timeout or empty user
/// agent is a deployment mistake, not something to discover per request.
///
/// # Examples
///
/// ```rust
/// use ingest::FetchConfig;
///
/// let cfg = FetchConfig::default();
/// assert_eq!(cfg.timeout_secs, 15);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FetchConfig {
    /// Hard bound on the whole request, in seconds. On expiry the fetch
    /// fails observably instead of hanging.
    ///
    /// Default: `15`.
    pub timeout_secs: u64,

    /// `User-Agent` header sent with the request, identifying this client
    /// to the archive being fetched from.
    ///
    /// Default: `"textmill/0.1"`.
    pub user_agent: String,

    /// Optional cap on the decoded response body, in bytes. Bodies over
    /// the limit are rejected with
    /// [`IngestError::BodyTooLarge`](crate::IngestError::BodyTooLarge).
    ///
    /// Default: `None` (unlimited).
    pub max_body_bytes: Option<usize>,

    /// Namespace for deriving deterministic document ids:
    /// `UUIDv5(namespace, url)`. Re-fetching the same source always yields
    /// the same id.
    ///
    /// Default: [`Uuid::NAMESPACE_URL`].
    pub doc_id_namespace: Uuid,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            user_agent: "textmill/0.1".into(),
            max_body_bytes: None,
            doc_id_namespace: Uuid::NAMESPACE_URL,
        }
    }
}

impl FetchConfig {
    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates internal consistency. Inexpensive; call at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        Ok(())
    }
}

/// Configuration-time errors, surfaced at service startup rather than per
/// request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The fetch timeout was zero, which would disable the bound entirely.
    #[error("fetch timeout must be greater than zero")]
    ZeroTimeout,

    /// The user agent was empty; archives expect an identifying client.
    #[error("user agent must not be empty")]
    EmptyUserAgent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(FetchConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let cfg = FetchConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn blank_user_agent_rejected() {
        let cfg = FetchConfig {
            user_agent: "   ".into(),
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyUserAgent));
    }
}
