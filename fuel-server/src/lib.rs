//! Fuel station pricing server.
//!
//! A read-only JSON API over a third-party station pricing service: it
//! queries the upstream, normalizes its shifting schemas into stable types,
//! and enriches radius searches with per-station details.

pub mod config;
pub mod domain;
pub mod gateway;
pub mod normalize;
pub mod upstream;
pub mod web;
