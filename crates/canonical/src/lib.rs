//! Textmill canonical text layer.
//!
//! This crate turns raw document text into a normalized form that the
//! statistics and summary stages can rely on, and provides the tokenizers
//! that operate over that form.
//!
//! ## What we do
//!
//! - Case folding and typographic cleanup (curly quotes, em/en dashes)
//! - Punctuation handling under a configurable retention policy
//! - Whitespace normalization (collapsed to single spaces, trimmed)
//! - Sentence / word / character tokenization of normalized text
//!
//! ## Two-tier normalization
//!
//! The primary normalizer assembles its strip pattern at call time from the
//! configuration, which may carry operator-supplied character-class
//! fragments. A malformed fragment makes the pattern fail to compile; that
//! failure is typed ([`NormalizeError::Pattern`]) and is meant to be
//! absorbed by [`normalize_or_fallback`], which substitutes
//! [`normalize_safe`], a strictly literal, pattern-free normalizer that
//! cannot fail. Aggregate callers (statistics, summaries) must go through
//! [`normalize_or_fallback`] so that a broken pattern never takes the whole
//! pipeline down.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same text and config, same
//! result on any machine. Normalization is idempotent: feeding its output
//! back through with the same config returns the identical string.

mod config;
mod error;
mod normalize;
mod tokenize;

pub use crate::config::NormalizeConfig;
pub use crate::error::NormalizeError;
pub use crate::normalize::{collapse_whitespace, normalize, normalize_or_fallback, normalize_safe};
pub use crate::tokenize::{chars, sentence_lengths, sentences, words, SENTENCE_TERMINATORS};
