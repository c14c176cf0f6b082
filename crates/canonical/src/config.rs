//! Configuration for the normalization pipeline.
//!
//! [`NormalizeConfig`] selects between the two mutually exclusive
//! punctuation-retention policies and carries the operator-supplied pattern
//! fragments that make the primary normalizer fallible in the first place.

use serde::{Deserialize, Serialize};

/// Configuration for text normalization.
///
/// Cheap to clone, serializable, and stable: the same config and input text
/// produce the same output on every machine.
///
/// # Examples
///
/// ```rust
/// use canonical::NormalizeConfig;
///
/// let cfg = NormalizeConfig::default();
/// assert!(cfg.preserve_sentence_boundaries);
/// assert!(cfg.normalize_unicode);
/// assert!(cfg.extra_strip_classes.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Keep `.` `!` `?` in the output so sentence detection stays possible.
    ///
    /// When `true`, every character outside word characters, whitespace,
    /// `.` `!` `?`, apostrophe, and hyphen is replaced with a space. When
    /// `false`, sentence terminators and hyphens are stripped too, and an
    /// apostrophe survives only between two word characters (contractions
    /// like `don't`).
    ///
    /// Statistics and summaries always force this on internally; the flag
    /// exists for callers that want bag-of-words text with no sentence
    /// structure at all.
    pub preserve_sentence_boundaries: bool,

    /// Apply Unicode NFKC normalization before any other transform.
    ///
    /// Merges composed/decomposed forms and compatibility characters so that
    /// visually identical inputs normalize identically. NFKC is idempotent,
    /// which keeps the whole normalizer idempotent.
    ///
    /// Default: `true`.
    pub normalize_unicode: bool,

    /// Extra character-class fragments spliced into the primary strip
    /// pattern, e.g. `"«»"` to also strip guillemets.
    ///
    /// These come straight from deployment configuration and are NOT
    /// validated ahead of time; a malformed fragment (say, an unclosed
    /// bracket expression) makes the primary normalizer fail at call time
    /// with [`NormalizeError::Pattern`](crate::NormalizeError::Pattern).
    /// The safe fallback ignores this field entirely.
    ///
    /// Default: empty.
    pub extra_strip_classes: Vec<String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            preserve_sentence_boundaries: true,
            normalize_unicode: true,
            extra_strip_classes: Vec::new(),
        }
    }
}

impl NormalizeConfig {
    /// Returns a copy of this config with sentence boundaries forced on.
    ///
    /// The statistics and summary stages depend on sentence structure, so
    /// they normalize through this view regardless of the caller's policy.
    ///
    /// ```rust
    /// use canonical::NormalizeConfig;
    ///
    /// let cfg = NormalizeConfig {
    ///     preserve_sentence_boundaries: false,
    ///     ..Default::default()
    /// };
    /// assert!(cfg.with_sentence_boundaries().preserve_sentence_boundaries);
    /// ```
    pub fn with_sentence_boundaries(&self) -> Self {
        Self {
            preserve_sentence_boundaries: true,
            ..self.clone()
        }
    }
}
