//! Upstream client error types.

/// Errors from a single round trip to the upstream station API.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UpstreamError {
    /// The request never produced an HTTP response (DNS, refused, timeout).
    #[error("transport error: {message}")]
    Transport { message: String },

    /// Upstream answered with a non-2xx status.
    ///
    /// `body` is kept for server-side diagnostics only.
    #[error("upstream status {status}")]
    Status { status: u16, body: String },

    /// Upstream answered 2xx but the body was not JSON.
    #[error("invalid JSON from upstream: {message}")]
    Decode { message: String },
}

impl UpstreamError {
    /// HTTP status carried by the failure, if upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Transport {
            message: err.to_string(),
        }
    }
}
