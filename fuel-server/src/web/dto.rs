//! Data transfer objects for web requests and responses.
//!
//! Station payloads are served straight from [`crate::domain`]; only the
//! request parameters and the error envelope live here.

use serde::{Deserialize, Serialize};

/// Query parameters for `/estaciones/historico/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    /// Start of the range, passed to upstream as-is
    pub inicio: Option<String>,

    /// End of the range, passed to upstream as-is
    pub fin: Option<String>,
}

/// Error envelope returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// HTTP status code
    pub status_code: u16,

    /// Human-readable message; never contains upstream bodies
    pub message: String,

    /// Reason phrase for the status code
    pub error: String,
}
