//! Gateway error taxonomy and upstream failure classification.

use tracing::error;

use crate::normalize::NormalizeError;
use crate::upstream::UpstreamError;

/// Message for a detail lookup the upstream answered with 404.
pub const STATION_NOT_FOUND: &str = "Estación no encontrada";

/// Message for a history lookup the upstream answered with 404.
pub const HISTORY_NOT_FOUND: &str = "Histórico no encontrado";

/// Caller-facing message for every other upstream failure.
pub const UPSTREAM_UNAVAILABLE: &str = "Error en servicio externo";

/// Errors surfaced by gateway operations.
///
/// Upstream bodies and transport details are logged, never carried here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Caller parameters failed local validation; no upstream call was made.
    #[error("{0}")]
    BadRequest(String),

    /// Upstream reported the single requested resource as absent.
    #[error("{0}")]
    NotFound(String),

    /// Any other upstream failure.
    #[error("{}", UPSTREAM_UNAVAILABLE)]
    UpstreamUnavailable,
}

impl GatewayError {
    /// The HTTP status this error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::BadRequest(_) => 400,
            GatewayError::NotFound(_) => 404,
            GatewayError::UpstreamUnavailable => 500,
        }
    }
}

/// Map an upstream failure onto the gateway taxonomy.
///
/// A 404 becomes `NotFound` only when the operation supplies a
/// `not_found` message; list operations pass `None` so an upstream 404 on
/// them is just another unavailable upstream.
pub fn classify(err: UpstreamError, not_found: Option<&str>) -> GatewayError {
    match &err {
        UpstreamError::Status { status, body } => {
            error!(status, %body, "upstream returned an error status");
        }
        UpstreamError::Transport { message } => {
            error!(%message, "upstream unreachable");
        }
        UpstreamError::Decode { message } => {
            error!(%message, "upstream returned a non-JSON body");
        }
    }

    match (err.status(), not_found) {
        (Some(404), Some(message)) => GatewayError::NotFound(message.to_string()),
        _ => GatewayError::UpstreamUnavailable,
    }
}

/// Map a normalizer failure (wrong top-level shape) onto the taxonomy.
pub fn unexpected_shape(err: NormalizeError) -> GatewayError {
    error!(error = %err, "unexpected upstream payload shape");
    GatewayError::UpstreamUnavailable
}
