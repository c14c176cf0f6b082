use std::time::Instant;

use chrono::Utc;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{info, warn};
use url::Url;
use uuid::Uuid;

use crate::config::FetchConfig;
use crate::error::IngestError;
use crate::types::{DocumentOrigin, RawDocument};

/// Fetches a plain-text document from a URL.
///
/// Validates the URL shape before any network call, performs exactly one
/// GET bounded by the configured timeout, verifies the response looks like
/// plain text, and decodes the body using the server-declared charset
/// (UTF-8 when undeclared). No retries here; that is the caller's call.
pub fn fetch(url: &str, cfg: &FetchConfig) -> Result<RawDocument, IngestError> {
    let start = Instant::now();
    match fetch_inner(url, cfg) {
        Ok(document) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                doc_id = %document.doc_id,
                bytes = document.text.len(),
                elapsed_micros,
                "fetch_success"
            );
            Ok(document)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(url, error = %err, elapsed_micros, "fetch_failure");
            Err(err)
        }
    }
}

fn fetch_inner(raw_url: &str, cfg: &FetchConfig) -> Result<RawDocument, IngestError> {
    let url = validate_url(raw_url)?;

    // One client per call: the fetcher is a stateless boundary adapter.
    let client = Client::builder()
        .timeout(cfg.timeout())
        .user_agent(cfg.user_agent.clone())
        .build()
        .map_err(|err| IngestError::Request(err.to_string()))?;

    let response = client
        .get(url.as_str())
        .send()
        .map_err(|err| IngestError::Request(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    // A `.txt` path is trusted as-is; anything else (i.e. `.txt.utf-8`)
    // must declare text/plain.
    let path = url.path().to_ascii_lowercase();
    if !path.ends_with(".txt") {
        let declared = content_type.as_deref().unwrap_or("");
        if !declared.contains("text/plain") {
            return Err(IngestError::UnsupportedContentType(format!(
                "got content type `{declared}` for {url}"
            )));
        }
    }

    if let (Some(limit), Some(length)) = (cfg.max_body_bytes, response.content_length()) {
        if length as usize > limit {
            return Err(IngestError::BodyTooLarge(format!(
                "declared length {length} exceeds limit of {limit}"
            )));
        }
    }

    let text = response
        .text()
        .map_err(|err| IngestError::Request(err.to_string()))?;
    if let Some(limit) = cfg.max_body_bytes {
        if text.len() > limit {
            return Err(IngestError::BodyTooLarge(format!(
                "decoded body of {} bytes exceeds limit of {limit}",
                text.len()
            )));
        }
    }

    let doc_id = Uuid::new_v5(&cfg.doc_id_namespace, url.as_str().as_bytes()).to_string();
    Ok(RawDocument {
        doc_id,
        text,
        origin: DocumentOrigin::Fetched {
            url: url.to_string(),
            content_type,
            fetched_at: Utc::now(),
        },
    })
}

/// URL shape validation, performed before any network traffic.
fn validate_url(raw: &str) -> Result<Url, IngestError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IngestError::InvalidUrl("url must be a non-empty string".into()));
    }

    let url = Url::parse(trimmed).map_err(|err| IngestError::InvalidUrl(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(IngestError::InvalidUrl(format!(
            "unsupported scheme `{}`; expected http or https",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(IngestError::InvalidUrl("url must include a host".into()));
    }

    let path = url.path().to_ascii_lowercase();
    if !(path.ends_with(".txt") || path.ends_with(".txt.utf-8")) {
        return Err(IngestError::InvalidUrl(
            "url must point to a .txt file".into(),
        ));
    }
    Ok(url)
}
