use thiserror::Error;

/// Errors produced by the primary normalization path.
///
/// These never escape the pipeline: aggregate callers route through
/// [`normalize_or_fallback`](crate::normalize_or_fallback), which degrades
/// to the pattern-free safe normalizer instead of surfacing the failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NormalizeError {
    /// The strip pattern assembled from the configuration failed to compile.
    ///
    /// The offending pattern text is carried alongside the compiler message
    /// so operators can locate the bad `extra_strip_classes` fragment.
    #[error("malformed strip pattern `{pattern}`: {message}")]
    Pattern {
        /// The full character class that was handed to the regex compiler.
        pattern: String,
        /// The regex compiler's diagnostic, stringified.
        message: String,
    },
}
