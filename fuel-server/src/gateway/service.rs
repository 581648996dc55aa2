//! The station data gateway.

use tracing::{debug, info};

use crate::domain::{StationDetails, StationHistory, StationRadiusHit, StationSummary};
use crate::normalize::{map_details, map_history, map_municipality_list, map_radius_list};
use crate::upstream::Upstream;

use super::error::{
    GatewayError, HISTORY_NOT_FOUND, STATION_NOT_FOUND, classify, unexpected_shape,
};
use super::fanout::enrich;
use super::query::RadiusQuery;

/// Queries the upstream station API and returns normalized data.
///
/// Stateless apart from the upstream handle; concurrent calls share
/// nothing mutable.
#[derive(Debug, Clone)]
pub struct StationGateway<U> {
    upstream: U,
}

impl<U: Upstream> StationGateway<U> {
    /// Create a gateway over the given upstream.
    pub fn new(upstream: U) -> Self {
        Self { upstream }
    }

    /// Access the underlying upstream.
    pub fn upstream(&self) -> &U {
        &self.upstream
    }

    /// Current details and prices for one station.
    ///
    /// An upstream 404 is `NotFound`; anything else is `UpstreamUnavailable`.
    pub async fn get_details(&self, station_id: u64) -> Result<StationDetails, GatewayError> {
        info!(station_id, "fetching station details");

        let body = self
            .upstream
            .get(&format!("/estaciones/detalles/{station_id}"), &[])
            .await
            .map_err(|e| classify(e, Some(STATION_NOT_FOUND)))?;

        let details = map_details(body, station_id).map_err(unexpected_shape)?;
        if details.prices.is_empty() {
            debug!(station_id, "station reported no usable prices");
        }
        Ok(details)
    }

    /// Price history for one station.
    ///
    /// `start` and `end` go to upstream untouched; it owns the defaults and
    /// range semantics.
    pub async fn get_history(
        &self,
        station_id: u64,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<StationHistory, GatewayError> {
        info!(station_id, start, end, "fetching station history");

        let mut query = Vec::new();
        if let Some(start) = start {
            query.push(("inicio", start.to_string()));
        }
        if let Some(end) = end {
            query.push(("fin", end.to_string()));
        }

        let body = self
            .upstream
            .get(&format!("/estaciones/historico/{station_id}"), &query)
            .await
            .map_err(|e| classify(e, Some(HISTORY_NOT_FOUND)))?;

        map_history(body, station_id).map_err(unexpected_shape)
    }

    /// Stations in a municipality.
    ///
    /// An empty list is a valid answer, so an upstream 404 here is not
    /// `NotFound` but `UpstreamUnavailable`.
    pub async fn get_by_municipality(
        &self,
        municipality_id: u64,
    ) -> Result<Vec<StationSummary>, GatewayError> {
        info!(municipality_id, "listing stations by municipality");

        let body = self
            .upstream
            .get(&format!("/estaciones/municipio/{municipality_id}"), &[])
            .await
            .map_err(|e| classify(e, None))?;

        map_municipality_list(body).map_err(unexpected_shape)
    }

    /// Stations within a radius of a point.
    ///
    /// Parameters are validated before any upstream call.
    pub async fn get_by_radius(
        &self,
        query: &RadiusQuery,
    ) -> Result<Vec<StationRadiusHit>, GatewayError> {
        let search = query.validate()?;
        info!(
            latitude = search.latitude,
            longitude = search.longitude,
            radius_km = search.radius_km,
            page = search.page.as_deref(),
            limit = search.limit.as_deref(),
            "searching stations by radius"
        );

        let body = self
            .upstream
            .get("/estaciones/radio", &search.query_params())
            .await
            .map_err(|e| classify(e, None))?;

        map_radius_list(body).map_err(unexpected_shape)
    }

    /// Radius search followed by a concurrent detail lookup per station.
    ///
    /// Only a failure of the radius search itself is returned; stations
    /// whose lookup fails are logged and left out.
    pub async fn get_by_radius_with_details(
        &self,
        query: &RadiusQuery,
    ) -> Result<Vec<StationDetails>, GatewayError> {
        let hits = self.get_by_radius(query).await?;
        Ok(enrich(&hits, |station_id| self.get_details(station_id)).await)
    }
}
