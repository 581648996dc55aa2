//! Schema normalizer.
//!
//! Pure functions from upstream JSON to the types in [`crate::domain`].
//! Upstream schema drift is isolated here: each resource has one raw shape
//! in which every version-specific field is optional, and one mapping
//! function that coerces field by field. Nothing in this module performs
//! I/O or logs.

mod coerce;
mod convert;
mod error;
mod raw;

pub use coerce::{coerce_f64, coerce_geo_point, coerce_id, coerce_price, coerce_text};
pub use convert::{map_details, map_history, map_municipality_list, map_radius_list};
pub use error::NormalizeError;
