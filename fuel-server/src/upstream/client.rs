//! HTTP client for the upstream station API.
//!
//! Every call is a fresh round trip: no retries, no caching.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use super::error::UpstreamError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Query parameters for an upstream request. Absent optionals are left out
/// by the caller rather than sent empty.
pub type QueryParams = [(&'static str, String)];

/// A source of raw upstream JSON.
///
/// The gateway is generic over this so it can run against the real API or
/// an in-memory stand-in.
pub trait Upstream: Send + Sync {
    /// GET `path` (relative to the base URL) and return the parsed body.
    fn get(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> impl Future<Output = Result<Value, UpstreamError>> + Send;
}

/// Configuration for the HTTP upstream client.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the upstream API, without a trailing path.
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// Create a new config bound to the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// reqwest-backed upstream client.
///
/// Cloning is cheap: clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    http: reqwest::Client,
    base_url: String,
}

impl HttpUpstream {
    /// Create a new client with the given configuration.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Upstream for HttpUpstream {
    async fn get(&self, path: &str, query: &QueryParams) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "upstream request");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| UpstreamError::Decode {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};

    /// Serve `router` on an ephemeral local port and return its base URL.
    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn fake_upstream() -> Router {
        Router::new()
            .route(
                "/echo",
                get(|Query(q): Query<HashMap<String, String>>| async move { Json(q) }),
            )
            .route(
                "/missing",
                get(|| async { (StatusCode::NOT_FOUND, "no such station") }),
            )
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "stack trace here") }),
            )
            .route("/html", get(|| async { "<html>not json</html>" }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "[]"
                }),
            )
    }

    #[test]
    fn config_defaults() {
        let config = UpstreamConfig::new("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = HttpUpstream::new(UpstreamConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[tokio::test]
    async fn returns_parsed_body_and_sends_query() {
        let base = spawn(fake_upstream()).await;
        let client = HttpUpstream::new(UpstreamConfig::new(base)).unwrap();

        let body = client
            .get("/echo", &[("latitud", "40.41".to_string()), ("radio", "5".to_string())])
            .await
            .unwrap();

        assert_eq!(body["latitud"], "40.41");
        assert_eq!(body["radio"], "5");
    }

    #[tokio::test]
    async fn non_success_keeps_status_and_body() {
        let base = spawn(fake_upstream()).await;
        let client = HttpUpstream::new(UpstreamConfig::new(base)).unwrap();

        match client.get("/missing", &[]).await {
            Err(UpstreamError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "no such station");
            }
            other => panic!("expected status error, got {other:?}"),
        }

        let err = client.get("/broken", &[]).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn non_json_success_is_decode_error() {
        let base = spawn(fake_upstream()).await;
        let client = HttpUpstream::new(UpstreamConfig::new(base)).unwrap();

        let err = client.get("/html", &[]).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Decode { .. }));
    }

    #[tokio::test]
    async fn timeout_is_transport_error() {
        let base = spawn(fake_upstream()).await;
        let client = HttpUpstream::new(UpstreamConfig::new(base).with_timeout(1)).unwrap();

        let err = client.get("/slow", &[]).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Transport { .. }));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn refused_connection_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpUpstream::new(UpstreamConfig::new(format!("http://{addr}"))).unwrap();
        let err = client.get("/anything", &[]).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Transport { .. }));
    }
}
