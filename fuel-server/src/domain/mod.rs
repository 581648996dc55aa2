//! Normalized station data.
//!
//! These are the stable shapes handed back to callers, whatever version of
//! the upstream schema produced them. All of them are transient: built per
//! request and dropped once serialized.

mod history;
mod listing;
mod station;

pub use history::{HistoryPeriod, StationHistory, StationHistoryRecord};
pub use listing::{GeoPoint, StationRadiusHit, StationSummary};
pub use station::{FuelPrices, StationDetails};
