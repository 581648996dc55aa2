//! Web layer for the fuel station API.
//!
//! Read-only JSON endpoints under `/estaciones`, each backed by one
//! gateway operation.

mod dto;
mod routes;
mod state;


pub use dto::*;
pub use routes::{AppError, CorsError, cors_layer, create_router};
pub use state::AppState;
