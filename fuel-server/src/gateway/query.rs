//! Radius search parameters and their local validation.

use serde::Deserialize;

use super::error::GatewayError;

const MISSING_REQUIRED: &str = "latitud, longitud y radio son obligatorios";
const NOT_NUMERIC: &str = "latitud, longitud y radio deben ser numéricos";

/// Radius search parameters as the caller sent them.
///
/// Deserializes straight from the query string of `/estaciones/radio`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RadiusQuery {
    #[serde(rename = "latitud")]
    pub latitude: Option<String>,
    #[serde(rename = "longitud")]
    pub longitude: Option<String>,
    #[serde(rename = "radio")]
    pub radius: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// A validated radius search.
///
/// Pagination hints are opaque to the gateway and forwarded as given.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusSearch {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl RadiusQuery {
    #[cfg(test)]
    pub fn new(latitude: f64, longitude: f64, radius_km: f64) -> Self {
        Self {
            latitude: Some(latitude.to_string()),
            longitude: Some(longitude.to_string()),
            radius: Some(radius_km.to_string()),
            page: None,
            limit: None,
        }
    }

    #[cfg(test)]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit.to_string());
        self
    }

    /// Check the required coordinates are present and numeric.
    ///
    /// Presence is checked for all three before any is parsed, so a
    /// request missing one parameter gets the "missing" message even if
    /// another is malformed.
    pub fn validate(&self) -> Result<RadiusSearch, GatewayError> {
        let (Some(lat), Some(lon), Some(radius)) = (&self.latitude, &self.longitude, &self.radius)
        else {
            return Err(GatewayError::BadRequest(MISSING_REQUIRED.to_string()));
        };

        let (Some(latitude), Some(longitude), Some(radius_km)) =
            (parse_number(lat), parse_number(lon), parse_number(radius))
        else {
            return Err(GatewayError::BadRequest(NOT_NUMERIC.to_string()));
        };

        Ok(RadiusSearch {
            latitude,
            longitude,
            radius_km,
            page: hint(self.page.as_deref()),
            limit: hint(self.limit.as_deref()),
        })
    }
}

impl RadiusSearch {
    /// Upstream query parameters. Absent hints are not sent.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("latitud", self.latitude.to_string()),
            ("longitud", self.longitude.to_string()),
            ("radio", self.radius_km.to_string()),
        ];
        if let Some(page) = &self.page {
            params.push(("page", page.clone()));
        }
        if let Some(limit) = &self.limit {
            params.push(("limit", limit.clone()));
        }
        params
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Blank counts as not given.
fn hint(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(lat: Option<&str>, lon: Option<&str>, radius: Option<&str>) -> RadiusQuery {
        RadiusQuery {
            latitude: lat.map(String::from),
            longitude: lon.map(String::from),
            radius: radius.map(String::from),
            page: None,
            limit: None,
        }
    }

    #[test]
    fn valid_query() {
        let search = RadiusQuery::new(40.41, -3.70, 5.0).validate().unwrap();
        assert_eq!(search.latitude, 40.41);
        assert_eq!(search.longitude, -3.70);
        assert_eq!(search.radius_km, 5.0);
        assert_eq!(search.page, None);
    }

    #[test]
    fn missing_required_parameter() {
        for q in [
            raw(None, Some("-3.7"), Some("5")),
            raw(Some("40.4"), None, Some("5")),
            raw(Some("40.4"), Some("-3.7"), None),
            raw(None, Some("abc"), None),
        ] {
            assert_eq!(
                q.validate(),
                Err(GatewayError::BadRequest(MISSING_REQUIRED.into()))
            );
        }
    }

    #[test]
    fn non_numeric_parameter() {
        for q in [
            raw(Some("norte"), Some("-3.7"), Some("5")),
            raw(Some("40.4"), Some(""), Some("5")),
            raw(Some("40.4"), Some("-3.7"), Some("NaN")),
            raw(Some("inf"), Some("-3.7"), Some("5")),
            raw(Some("40.4"), Some("-3.7"), Some("Infinity")),
            raw(Some("40.4"), Some("-Infinity"), Some("5")),
            RadiusQuery::new(f64::NAN, -3.7, 5.0),
        ] {
            assert_eq!(q.validate(), Err(GatewayError::BadRequest(NOT_NUMERIC.into())));
        }
    }

    #[test]
    fn pagination_hints() {
        let search = RadiusQuery::new(40.41, -3.70, 5.0)
            .with_page(2)
            .with_limit(20)
            .validate()
            .unwrap();
        assert_eq!(search.page.as_deref(), Some("2"));
        assert_eq!(search.limit.as_deref(), Some("20"));

        let mut q = RadiusQuery::new(40.41, -3.70, 5.0);
        q.page = Some(String::new());
        assert_eq!(q.validate().unwrap().page, None);
    }

    #[test]
    fn pagination_hints_are_not_interpreted() {
        for value in ["abc", "-1", "1.5", "diez"] {
            let mut q = RadiusQuery::new(40.41, -3.70, 5.0);
            q.page = Some(value.into());
            q.limit = Some(format!(" {value} "));

            let search = q.validate().unwrap();
            assert_eq!(search.page.as_deref(), Some(value));
            assert_eq!(search.limit.as_deref(), Some(value));
            assert_eq!(
                &search.query_params()[3..],
                &[("page", value.to_string()), ("limit", value.to_string())]
            );
        }
    }

    #[test]
    fn query_params_skip_absent_hints() {
        let search = RadiusQuery::new(40.41, -3.7, 5.0).validate().unwrap();
        assert_eq!(
            search.query_params(),
            vec![
                ("latitud", "40.41".to_string()),
                ("longitud", "-3.7".to_string()),
                ("radio", "5".to_string()),
            ]
        );

        let search = RadiusQuery::new(40.41, -3.7, 5.0)
            .with_limit(10)
            .validate()
            .unwrap();
        assert_eq!(search.query_params().last(), Some(&("limit", "10".to_string())));
    }
}
