use thiserror::Error;

/// Errors produced by n-gram counting, probability derivation, and
/// persistence.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NgramError {
    /// The requested n-gram order was zero.
    #[error("n-gram order must be at least 1")]
    InvalidOrder,

    /// The smoothing constant was negative or not finite.
    #[error("smoothing must be a non-negative finite number, got {0}")]
    InvalidSmoothing(f64),

    /// Probabilities were requested for an empty table without smoothing,
    /// which would divide by zero.
    #[error("cannot derive probabilities from an empty table without smoothing")]
    EmptyTable,

    /// A token contains the reserved `"||"` join delimiter and cannot be
    /// serialized reversibly.
    #[error("token `{0}` contains the reserved delimiter `||`")]
    ReservedDelimiter(String),

    /// The persisted file could not be read or written.
    #[error("frequency file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted file is not a flat string-to-count JSON map.
    #[error("malformed frequency file: {0}")]
    Format(String),
}
