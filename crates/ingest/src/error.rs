use thiserror::Error;

/// Errors that can occur while validating and fetching a document.
///
/// All variants are cloneable and comparable; transport errors are carried
/// as summarized strings rather than the underlying error values so the
/// enum stays `Clone + PartialEq` and easy to assert on in tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IngestError {
    /// The URL failed shape validation before any network call: empty,
    /// unparsable, wrong scheme, missing host, or a path that does not end
    /// in `.txt` / `.txt.utf-8`.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The response declared a content type other than `text/plain` for a
    /// path that does not end in `.txt`.
    #[error("expected a plain-text document: {0}")]
    UnsupportedContentType(String),

    /// The request could not be completed: connection failure, timeout, or
    /// a body that could not be decoded.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected status {status} fetching {url}")]
    HttpStatus {
        /// The HTTP status code received.
        status: u16,
        /// The URL that was fetched.
        url: String,
    },

    /// The response body exceeds the configured size limit.
    #[error("response body too large: {0}")]
    BodyTooLarge(String),
}

impl IngestError {
    /// True when the failure is the caller's input rather than the
    /// network's behavior. The pipeline maps these to its invalid-input
    /// category; everything else is a fetch failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            IngestError::InvalidUrl(_)
                | IngestError::UnsupportedContentType(_)
                | IngestError::BodyTooLarge(_)
        )
    }
}
