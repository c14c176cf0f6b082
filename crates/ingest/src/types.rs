//! Data model for documents entering the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a document's text came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentOrigin {
    /// Retrieved over HTTP by [`fetch`](crate::fetch).
    Fetched {
        /// The URL the document was retrieved from.
        url: String,
        /// The content type the server declared, if any.
        content_type: Option<String>,
        /// When the fetch completed.
        fetched_at: DateTime<Utc>,
    },
    /// Handed to the pipeline directly by the caller.
    Supplied,
}

/// An immutable document as it entered the pipeline.
///
/// Constructed fresh per request and discarded once the response is
/// produced; nothing here is shared across calls. The `doc_id` is a
/// deterministic UUIDv5 so the same source always traces under the same
/// identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawDocument {
    /// Deterministic identifier for tracing and log correlation.
    pub doc_id: String,
    /// The raw text, decoded but otherwise untouched.
    pub text: String,
    /// Provenance of the text.
    pub origin: DocumentOrigin,
}

impl RawDocument {
    /// Wraps caller-supplied text. The id is derived from the text bytes,
    /// so identical inputs share an id.
    pub fn supplied(text: impl Into<String>) -> Self {
        let text = text.into();
        let doc_id = Uuid::new_v5(&Uuid::NAMESPACE_OID, text.as_bytes()).to_string();
        Self {
            doc_id,
            text,
            origin: DocumentOrigin::Supplied,
        }
    }

    /// True when the document was retrieved over HTTP.
    pub fn is_fetched(&self) -> bool {
        matches!(self.origin, DocumentOrigin::Fetched { .. })
    }

    /// The source URL for fetched documents, `None` for supplied ones.
    pub fn source_url(&self) -> Option<&str> {
        match &self.origin {
            DocumentOrigin::Fetched { url, .. } => Some(url),
            DocumentOrigin::Supplied => None,
        }
    }
}
