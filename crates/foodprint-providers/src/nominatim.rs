// ABOUTME: Nominatim forward geocoder resolving a restaurant address to coordinates
// ABOUTME: First search hit wins; an empty result is a miss, not an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use crate::http_client::{join_url, shared_client, status_error, transport_error};
use async_trait::async_trait;
use foodprint_core::errors::{AppError, AppResult};
use foodprint_core::models::Coordinates;
use foodprint_intelligence::spi::Geocoder;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

const SERVICE: &str = "Nominatim";

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Geocoder backed by a Nominatim instance
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl NominatimGeocoder {
    /// Create a geocoder; Nominatim's usage policy requires an identifying user agent
    #[must_use]
    pub fn new(base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client: shared_client().clone(),
            base_url: base_url.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Coordinates of the first hit in a `/search?format=json` body
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON and `ExternalServiceError`
    /// for unparsable or out-of-range coordinates.
    pub fn parse_search_response(body: &str) -> AppResult<Option<Coordinates>> {
        let hits: Vec<SearchHit> = serde_json::from_str(body)?;
        let Some(hit) = hits.into_iter().next() else {
            return Ok(None);
        };
        let lat: f64 = hit.lat.trim().parse().map_err(|_| {
            AppError::external_service(SERVICE, format!("invalid latitude '{}'", hit.lat))
        })?;
        let lng: f64 = hit.lon.trim().parse().map_err(|_| {
            AppError::external_service(SERVICE, format!("invalid longitude '{}'", hit.lon))
        })?;
        debug!(display_name = ?hit.display_name, lat, lng, "Geocoded address");
        Coordinates::new(lat, lng)
            .map(Some)
            .map_err(|e| AppError::external_service(SERVICE, e.message))
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    #[instrument(skip(self), fields(service = SERVICE))]
    async fn geocode(&self, address: &str) -> AppResult<Option<Coordinates>> {
        let response = self
            .client
            .get(join_url(&self.base_url, "search"))
            .header(USER_AGENT, &self.user_agent)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;
        if !status.is_success() {
            return Err(status_error(SERVICE, status, &body));
        }
        Self::parse_search_response(&body)
    }
}
