//! Station data gateway.
//!
//! Orchestrates upstream calls, normalization and error classification for
//! the four station queries, plus the radius-with-details fan-out.
//!
//! Failure taxonomy:
//! - `BadRequest`: local validation failed, upstream never called
//! - `NotFound`: upstream 404 on a single-resource lookup (details, history)
//! - `UpstreamUnavailable`: every other upstream or transport failure
//!
//! List operations never report `NotFound`, even when upstream answers 404.

mod error;
mod fanout;
mod query;
mod service;

pub use error::{
    GatewayError, HISTORY_NOT_FOUND, STATION_NOT_FOUND, UPSTREAM_UNAVAILABLE, classify,
    unexpected_shape,
};
pub use fanout::enrich;
pub use query::{RadiusQuery, RadiusSearch};
pub use service::StationGateway;
