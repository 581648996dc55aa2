//! Station detail types.

use serde::{Deserialize, Serialize};

/// Current and average price per litre for each fuel the upstream reports.
///
/// Every field is optional: a station that does not sell a fuel, or an
/// upstream version that does not publish its average, leaves it absent.
/// Present values are always finite and non-negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelPrices {
    #[serde(rename = "Gasoline95", skip_serializing_if = "Option::is_none")]
    pub gasoline_95: Option<f64>,
    #[serde(rename = "Gasoline95_avg", skip_serializing_if = "Option::is_none")]
    pub gasoline_95_avg: Option<f64>,
    #[serde(rename = "Gasoline98", skip_serializing_if = "Option::is_none")]
    pub gasoline_98: Option<f64>,
    #[serde(rename = "Gasoline98_avg", skip_serializing_if = "Option::is_none")]
    pub gasoline_98_avg: Option<f64>,
    #[serde(rename = "Diesel", skip_serializing_if = "Option::is_none")]
    pub diesel: Option<f64>,
    #[serde(rename = "Diesel_avg", skip_serializing_if = "Option::is_none")]
    pub diesel_avg: Option<f64>,
    #[serde(rename = "DieselPremium", skip_serializing_if = "Option::is_none")]
    pub diesel_premium: Option<f64>,
    #[serde(rename = "DieselPremium_avg", skip_serializing_if = "Option::is_none")]
    pub diesel_premium_avg: Option<f64>,
    #[serde(rename = "DieselB_avg", skip_serializing_if = "Option::is_none")]
    pub diesel_b_avg: Option<f64>,
    #[serde(rename = "LPG_avg", skip_serializing_if = "Option::is_none")]
    pub lpg_avg: Option<f64>,
}

impl FuelPrices {
    /// All ten slots paired with their serialized names.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 10] {
        [
            ("Gasoline95", self.gasoline_95),
            ("Gasoline95_avg", self.gasoline_95_avg),
            ("Gasoline98", self.gasoline_98),
            ("Gasoline98_avg", self.gasoline_98_avg),
            ("Diesel", self.diesel),
            ("Diesel_avg", self.diesel_avg),
            ("DieselPremium", self.diesel_premium),
            ("DieselPremium_avg", self.diesel_premium_avg),
            ("DieselB_avg", self.diesel_b_avg),
            ("LPG_avg", self.lpg_avg),
        ]
    }

    /// True when upstream reported no usable price at all.
    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, v)| v.is_none())
    }
}

/// One fuel station's current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDetails {
    pub station_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Side of the road (`margen`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    /// Public or restricted sale (`tipoVenta`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    /// Upstream timestamp of the last price refresh, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    #[serde(flatten)]
    pub prices: FuelPrices,
}

impl StationDetails {
    /// A record carrying only its id; every other field absent.
    #[cfg(test)]
    pub fn bare(station_id: u64) -> Self {
        Self {
            station_id,
            station_name: None,
            brand: None,
            latitude: None,
            longitude: None,
            side: None,
            address: None,
            postal_code: None,
            opening_hours: None,
            sale_type: None,
            municipality_id: None,
            municipality: None,
            province: None,
            province_district: None,
            locality: None,
            last_update: None,
            prices: FuelPrices::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_prices_flat_and_sparse() {
        let mut details = StationDetails::bare(7);
        details.station_name = Some("Repsol Norte".into());
        details.prices.gasoline_95 = Some(1.459);
        details.prices.lpg_avg = Some(0.99);

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(
            value,
            json!({
                "stationId": 7,
                "stationName": "Repsol Norte",
                "Gasoline95": 1.459,
                "LPG_avg": 0.99,
            })
        );
    }

    #[test]
    fn empty_prices() {
        let mut prices = FuelPrices::default();
        assert!(prices.is_empty());
        prices.diesel_b_avg = Some(1.2);
        assert!(!prices.is_empty());
        assert_eq!(prices.entries()[8], ("DieselB_avg", Some(1.2)));
    }
}
