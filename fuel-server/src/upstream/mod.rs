//! Upstream station API client.
//!
//! A thin GET-only client bound to a base URL and a fixed timeout. It
//! returns raw JSON and leaves interpretation to [`crate::normalize`].
//! Failures are split into transport errors (no response) and status
//! errors (non-2xx, body retained for logs).

mod client;
mod error;
mod mock;

pub use client::{DEFAULT_TIMEOUT_SECS, HttpUpstream, QueryParams, Upstream, UpstreamConfig};
pub use error::UpstreamError;
pub use mock::{MockResponse, MockUpstream, RecordedCall};
