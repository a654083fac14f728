// ABOUTME: OSRM route service client returning the route length in meters
// ABOUTME: Transport profile selects the OSRM profile segment of the request path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use crate::http_client::{join_url, shared_client, status_error, transport_error};
use async_trait::async_trait;
use foodprint_core::errors::{AppError, AppResult};
use foodprint_core::models::{Coordinates, RoutingProfile};
use foodprint_intelligence::spi::Router;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

const SERVICE: &str = "OSRM";

#[derive(Debug, Deserialize)]
struct RouteResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    distance: f64,
    #[serde(default)]
    duration: Option<f64>,
}

/// Router backed by an OSRM server
#[derive(Debug, Clone)]
pub struct OsrmRouter {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl OsrmRouter {
    /// Create a router for an OSRM base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client: shared_client().clone(),
            base_url: base_url.into(),
            user_agent: user_agent.into(),
        }
    }

    /// `route/v1/{profile}/{lng},{lat};{lng},{lat}`; OSRM expects longitude first
    #[must_use]
    pub fn route_path(from: Coordinates, to: Coordinates, profile: RoutingProfile) -> String {
        format!(
            "route/v1/{}/{:.6},{:.6};{:.6},{:.6}",
            profile.as_str(),
            from.lng,
            from.lat,
            to.lng,
            to.lat
        )
    }

    /// Distance of the first route in an OSRM response
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` when `code` is not `Ok` or no route is
    /// present, and `SerializationError` for malformed JSON.
    pub fn parse_route_response(body: &str) -> AppResult<f64> {
        let response: RouteResponse = serde_json::from_str(body)?;
        if response.code != "Ok" {
            return Err(AppError::external_service(
                SERVICE,
                format!(
                    "{}: {}",
                    response.code,
                    response.message.unwrap_or_default()
                ),
            ));
        }
        let route = response
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE, "response contained no routes"))?;
        debug!(meters = route.distance, seconds = ?route.duration, "Route received");
        Ok(route.distance)
    }
}

#[async_trait]
impl Router for OsrmRouter {
    #[instrument(skip(self), fields(service = SERVICE, profile = profile.as_str()))]
    async fn route(
        &self,
        from: Coordinates,
        to: Coordinates,
        profile: RoutingProfile,
    ) -> AppResult<f64> {
        let response = self
            .client
            .get(join_url(&self.base_url, &Self::route_path(from, to, profile)))
            .header(USER_AGENT, &self.user_agent)
            .query(&[("overview", "false")])
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;
        // OSRM reports NoRoute and friends with a 400 and a JSON body
        if !status.is_success() && serde_json::from_str::<RouteResponse>(&body).is_err() {
            return Err(status_error(SERVICE, status, &body));
        }
        Self::parse_route_response(&body)
    }
}
