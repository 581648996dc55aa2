//! Mapping from upstream shapes to normalized station data.
//!
//! One function per resource. Each renames fields and applies the
//! per-field coercions; none of them filter or reorder records.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{
    FuelPrices, HistoryPeriod, StationDetails, StationHistory, StationHistoryRecord,
    StationRadiusHit, StationSummary,
};

use super::coerce::{coerce_f64, coerce_geo_point, coerce_id, coerce_price, coerce_text};
use super::error::NormalizeError;
use super::raw::{
    RawHistoryRecord, RawMunicipalityStation, RawRadiusStation, RawStationDetails,
    RawStationHistory,
};

/// Decode an object whose fields are all defaulted. Only a non-object
/// top level can fail.
fn decode_object<T: DeserializeOwned + Default>(
    value: Value,
    resource: &'static str,
) -> Result<T, NormalizeError> {
    if !value.is_object() {
        return Err(NormalizeError::NotAnObject { resource });
    }
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decode each element of a top-level array. Elements that are not
/// objects still produce a record, with every field absent.
fn decode_array<T: DeserializeOwned + Default>(
    value: Value,
    resource: &'static str,
) -> Result<Vec<T>, NormalizeError> {
    let Value::Array(items) = value else {
        return Err(NormalizeError::NotAnArray { resource });
    };
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

/// Normalize a station detail payload.
///
/// `requested_id` stands in for `idEstacion` when upstream omits it.
pub fn map_details(value: Value, requested_id: u64) -> Result<StationDetails, NormalizeError> {
    let raw: RawStationDetails = decode_object(value, "station details")?;

    Ok(StationDetails {
        station_id: coerce_id(&raw.id_estacion).unwrap_or(requested_id),
        station_name: coerce_text(&raw.nombre_estacion),
        brand: coerce_text(&raw.marca),
        latitude: coerce_f64(&raw.latitud),
        longitude: coerce_f64(&raw.longitud),
        side: coerce_text(&raw.margen),
        address: coerce_text(&raw.direccion),
        postal_code: coerce_text(&raw.cod_postal),
        opening_hours: coerce_text(&raw.horario),
        sale_type: coerce_text(&raw.tipo_venta),
        municipality_id: coerce_id(&raw.id_municipio),
        municipality: coerce_text(&raw.municipio),
        province: coerce_text(&raw.provincia),
        province_district: coerce_text(&raw.provincia_distrito),
        locality: coerce_text(&raw.localidad),
        last_update: coerce_text(&raw.last_update),
        prices: map_prices(&raw),
    })
}

fn map_prices(raw: &RawStationDetails) -> FuelPrices {
    FuelPrices {
        gasoline_95: coerce_price(&raw.gasolina_95),
        gasoline_95_avg: coerce_price(&raw.gasolina_95_media),
        gasoline_98: coerce_price(&raw.gasolina_98),
        gasoline_98_avg: coerce_price(&raw.gasolina_98_media),
        diesel: coerce_price(&raw.diesel),
        diesel_avg: coerce_price(&raw.diesel_media),
        diesel_premium: coerce_price(&raw.diesel_premium),
        diesel_premium_avg: coerce_price(&raw.diesel_premium_media),
        diesel_b_avg: coerce_price(&raw.diesel_b_media),
        lpg_avg: coerce_price(&raw.glp_media),
    }
}

/// Normalize a price history payload.
///
/// Every upstream record yields one output record, in upstream order.
/// A missing `cantidadResultados` falls back to the number of records.
pub fn map_history(value: Value, requested_id: u64) -> Result<StationHistory, NormalizeError> {
    let raw: RawStationHistory = decode_object(value, "station history")?;

    let records: Vec<RawHistoryRecord> = match raw.data {
        Value::Null => Vec::new(),
        data => decode_array(data, "station history data")?,
    };

    let data: Vec<StationHistoryRecord> = records
        .into_iter()
        .map(|r| StationHistoryRecord {
            id: coerce_id(&r.id),
            station_id: coerce_id(&r.id_estacion),
            timestamp: coerce_text(&r.timestamp),
            price: coerce_price(&r.price),
        })
        .collect();

    let period = HistoryPeriod {
        start: raw.periodo.get("inicio").and_then(coerce_text),
        end: raw.periodo.get("fin").and_then(coerce_text),
    };

    Ok(StationHistory {
        title: coerce_text(&raw.title),
        station_id: coerce_id(&raw.estacion_id).unwrap_or(requested_id),
        period,
        result_count: coerce_id(&raw.cantidad_resultados).unwrap_or(data.len() as u64),
        data,
    })
}

/// Normalize a municipality listing. 1:1 with the upstream array.
pub fn map_municipality_list(value: Value) -> Result<Vec<StationSummary>, NormalizeError> {
    let raw: Vec<RawMunicipalityStation> = decode_array(value, "municipality listing")?;

    Ok(raw
        .into_iter()
        .map(|s| StationSummary {
            station_id: coerce_id(&s.id_estacion),
            name: coerce_text(&s.nombre),
            address: coerce_text(&s.direccion),
            municipality_id: coerce_id(&s.id_municipio),
            latitude: coerce_f64(&s.latitud),
            longitude: coerce_f64(&s.longitud),
        })
        .collect())
}

/// Normalize a radius search listing. 1:1 with the upstream array; the
/// numeric station id stays optional.
pub fn map_radius_list(value: Value) -> Result<Vec<StationRadiusHit>, NormalizeError> {
    let raw: Vec<RawRadiusStation> = decode_array(value, "radius search")?;

    Ok(raw
        .into_iter()
        .map(|s| StationRadiusHit {
            id: coerce_text(&s.id),
            station_id: coerce_id(&s.id_estacion),
            name: coerce_text(&s.nombre),
            coordinates: coerce_geo_point(&s.coordenadas),
            distance: coerce_f64(&s.distancia),
            province: coerce_text(&s.provincia),
            locality: coerce_text(&s.localidad),
        })
        .collect())
}
