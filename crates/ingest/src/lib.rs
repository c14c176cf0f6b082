//! Textmill ingest layer.
//!
//! This is where documents enter the pipeline. We validate a URL, perform
//! one bounded GET, and hand back a [`RawDocument`] with provenance that
//! downstream stages can trust; already-fetched text comes in through
//! [`RawDocument::supplied`]. The other job here is peeling Project
//! Gutenberg boilerplate off raw archive text before any analysis runs.
//!
//! ## What we do here
//!
//! - **Validate URLs before touching the network** - scheme, host, and a
//!   `.txt` / `.txt.utf-8` path are all checked up front
//! - **Fetch with bounds** - one attempt, a hard timeout, an identifying
//!   `User-Agent`, and an optional body-size cap; retries belong to the
//!   caller
//! - **Check what came back** - non-2xx statuses and non-plain-text
//!   content types are typed errors, not surprises downstream
//! - **Derive ids** - every document gets a deterministic UUIDv5, so the
//!   same source always logs under the same id
//! - **Strip boilerplate** - Gutenberg START/END markers bound the
//!   retained region; unmarked text passes through untouched
//! - **Log everything** - structured `fetch_success` / `fetch_failure`
//!   events via tracing
//!
//! Errors are typed ([`IngestError`]) so callers can distinguish bad input
//! from transport failures.

mod boilerplate;
mod config;
mod error;
mod fetch;
mod types;

pub use crate::boilerplate::strip_boilerplate;
pub use crate::config::{ConfigError, FetchConfig};
pub use crate::error::IngestError;
pub use crate::fetch::fetch;
pub use crate::types::{DocumentOrigin, RawDocument};
