//! In-memory upstream for running the gateway without the real API.
//!
//! Responses are registered per path. Every request is recorded so callers
//! can assert how many round trips an operation made.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use super::client::{QueryParams, Upstream};
use super::error::UpstreamError;

/// Canned outcome for one upstream path.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// 2xx with this body.
    Json(Value),
    /// Non-2xx with this status and body.
    Status { status: u16, body: String },
    /// No response at all (e.g. a timeout).
    Transport(String),
}

/// A request the mock has served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub path: String,
    pub query: Vec<(String, String)>,
}

/// Upstream stand-in serving registered responses.
///
/// Paths without a registered response answer `404`.
#[derive(Debug, Default)]
pub struct MockUpstream {
    routes: HashMap<String, MockResponse>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockUpstream {
    /// Create a mock with no registered paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a successful JSON body for `path`.
    pub fn with_json(mut self, path: impl Into<String>, body: Value) -> Self {
        self.routes.insert(path.into(), MockResponse::Json(body));
        self
    }

    /// Register a non-2xx status for `path`.
    pub fn with_status(mut self, path: impl Into<String>, status: u16) -> Self {
        self.routes.insert(
            path.into(),
            MockResponse::Status {
                status,
                body: format!("mock status {status}"),
            },
        );
        self
    }

    /// Register a transport-level failure for `path`.
    pub fn with_transport_error(mut self, path: impl Into<String>, message: &str) -> Self {
        self.routes
            .insert(path.into(), MockResponse::Transport(message.to_string()));
        self
    }

    /// All requests served so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock_calls().clone()
    }

    /// Total number of requests served.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Number of requests served for one path.
    pub fn calls_to(&self, path: &str) -> usize {
        self.lock_calls().iter().filter(|c| c.path == path).count()
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<RecordedCall>> {
        // A poisoned log only means a test thread panicked mid-push.
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Upstream for MockUpstream {
    async fn get(&self, path: &str, query: &QueryParams) -> Result<Value, UpstreamError> {
        self.lock_calls().push(RecordedCall {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        });

        match self.routes.get(path) {
            Some(MockResponse::Json(body)) => Ok(body.clone()),
            Some(MockResponse::Status { status, body }) => Err(UpstreamError::Status {
                status: *status,
                body: body.clone(),
            }),
            Some(MockResponse::Transport(message)) => Err(UpstreamError::Transport {
                message: message.clone(),
            }),
            None => Err(UpstreamError::Status {
                status: 404,
                body: format!("no mock registered for {path}"),
            }),
        }
    }
}
