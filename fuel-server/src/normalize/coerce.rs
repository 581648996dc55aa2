//! Per-field coercions from loosely typed upstream values.
//!
//! All of these are total: a value that cannot be read as the target type
//! becomes `None`, never an error.

use serde_json::Value;

use crate::domain::GeoPoint;

/// Read a finite number from a JSON number or a numeric string.
///
/// `null`, blank strings and anything that does not parse to a finite
/// `f64` are absent.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Read a price. Same as [`coerce_f64`] but negative values are absent.
pub fn coerce_price(value: &Value) -> Option<f64> {
    coerce_f64(value).filter(|n| *n >= 0.0)
}

/// Read a numeric id from either an integer or a string of digits.
pub fn coerce_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            // Some schema versions send ids as `100.0`.
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// Read free text. Numbers are rendered; other non-strings are absent.
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a GeoJSON point. `type` defaults to `Point` when missing; any
/// coordinate that is not a finite number makes the whole point absent.
pub fn coerce_geo_point(value: &Value) -> Option<GeoPoint> {
    let obj = value.as_object()?;
    let kind = obj
        .get("type")
        .and_then(coerce_text)
        .unwrap_or_else(|| "Point".to_string());
    let coordinates = obj
        .get("coordinates")?
        .as_array()?
        .iter()
        .map(coerce_f64)
        .collect::<Option<Vec<f64>>>()?;

    Some(GeoPoint { kind, coordinates })
}
