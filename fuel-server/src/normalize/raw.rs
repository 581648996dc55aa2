//! Upstream response shapes.
//!
//! Field names are the upstream's. Every field is a bare [`Value`] with
//! `#[serde(default)]`, so an absent field decodes as `Null` instead of
//! failing the record; the per-field coercions in [`super::coerce`] decide
//! what each value means. Several schema versions are live at once: ids
//! arrive as numbers or strings, coordinates and prices as strings, and the
//! `_media` average fields come and go.

use serde::Deserialize;
use serde_json::Value;

/// `GET /estaciones/detalles/{id}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawStationDetails {
    #[serde(rename = "idEstacion")]
    pub id_estacion: Value,
    #[serde(rename = "nombreEstacion")]
    pub nombre_estacion: Value,
    pub marca: Value,

    pub latitud: Value,
    pub longitud: Value,
    pub provincia: Value,
    #[serde(rename = "provinciaDistrito")]
    pub provincia_distrito: Value,
    pub localidad: Value,
    pub municipio: Value,
    #[serde(rename = "idMunicipio")]
    pub id_municipio: Value,
    #[serde(rename = "codPostal")]
    pub cod_postal: Value,
    pub direccion: Value,
    pub margen: Value,

    #[serde(rename = "tipoVenta")]
    pub tipo_venta: Value,
    pub horario: Value,
    #[serde(rename = "lastUpdate")]
    pub last_update: Value,

    #[serde(rename = "Gasolina95")]
    pub gasolina_95: Value,
    #[serde(rename = "Gasolina95_media")]
    pub gasolina_95_media: Value,
    #[serde(rename = "Gasolina98")]
    pub gasolina_98: Value,
    #[serde(rename = "Gasolina98_media")]
    pub gasolina_98_media: Value,
    #[serde(rename = "Diesel")]
    pub diesel: Value,
    #[serde(rename = "Diesel_media")]
    pub diesel_media: Value,
    #[serde(rename = "DieselPremium")]
    pub diesel_premium: Value,
    #[serde(rename = "DieselPremium_media")]
    pub diesel_premium_media: Value,
    #[serde(rename = "DieselB_media")]
    pub diesel_b_media: Value,
    #[serde(rename = "GLP_media")]
    pub glp_media: Value,
}

/// `GET /estaciones/historico/{id}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawStationHistory {
    pub title: Value,
    #[serde(rename = "estacionId")]
    pub estacion_id: Value,
    pub periodo: Value,
    #[serde(rename = "cantidadResultados")]
    pub cantidad_resultados: Value,
    pub data: Value,
}

/// One element of `RawStationHistory::data`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawHistoryRecord {
    pub id: Value,
    #[serde(rename = "idEstacion")]
    pub id_estacion: Value,
    pub timestamp: Value,
    pub price: Value,
}

/// One element of `GET /estaciones/municipio/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawMunicipalityStation {
    #[serde(rename = "idEstacion")]
    pub id_estacion: Value,
    pub nombre: Value,
    pub direccion: Value,
    #[serde(rename = "idMunicipio")]
    pub id_municipio: Value,
    pub latitud: Value,
    pub longitud: Value,
}

/// One element of `GET /estaciones/radio`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawRadiusStation {
    #[serde(rename = "_id")]
    pub id: Value,
    #[serde(rename = "idEstacion")]
    pub id_estacion: Value,
    pub nombre: Value,
    pub coordenadas: Value,
    pub distancia: Value,
    pub provincia: Value,
    pub localidad: Value,
}
