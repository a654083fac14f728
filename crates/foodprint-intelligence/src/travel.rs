// ABOUTME: Travel distance resolution: geocode origin, route to destination, or fall back to 5 km
// ABOUTME: Every failure stage converges on the same fallback distance with the resolved mode factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

//! # Travel Distance Resolver
//!
//! Degrade chain, each stage entered only when the previous one failed:
//!
//! 1. origin address and destination present, geocoded, and routed
//! 2. missing input
//! 3. geocoding returned nothing, failed, or timed out
//! 4. routing failed or timed out
//!
//! Stages 2-4 all produce [`FALLBACK_DISTANCE_KM`].

use crate::constants::estimation::FALLBACK_DISTANCE_KM;
use crate::constants::units::METERS_PER_KM;
use crate::models::{Coordinates, TravelResolution, TravelSource};
use crate::spi::{Geocoder, Router};
use crate::tables::TravelProfileTable;
use crate::timeouts::{with_deadline, EngineTimeouts};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Resolves delivery distance and transport emission factor
#[derive(Clone)]
pub struct TravelDistanceResolver {
    profiles: Arc<TravelProfileTable>,
    geocoder: Arc<dyn Geocoder>,
    router: Arc<dyn Router>,
    timeouts: EngineTimeouts,
}

impl TravelDistanceResolver {
    /// Create a resolver
    #[must_use]
    pub fn new(
        profiles: Arc<TravelProfileTable>,
        geocoder: Arc<dyn Geocoder>,
        router: Arc<dyn Router>,
        timeouts: EngineTimeouts,
    ) -> Self {
        Self {
            profiles,
            geocoder,
            router,
            timeouts,
        }
    }

    /// Distance and factor for a delivery; never fails
    #[instrument(skip(self, destination), fields(transport = transport_type.unwrap_or("default")))]
    pub async fn resolve(
        &self,
        origin_address: Option<&str>,
        destination: Option<Coordinates>,
        transport_type: Option<&str>,
    ) -> TravelResolution {
        let (mode, profile) = self.profiles.resolve(transport_type);
        let resolution = |distance_km: f64, source: TravelSource| TravelResolution {
            distance_km,
            transport_type: mode.clone(),
            emission_factor: profile.factor,
            source,
        };

        let origin = origin_address.map(str::trim).filter(|a| !a.is_empty());
        let (Some(origin), Some(destination)) = (origin, destination) else {
            debug!("Origin or destination missing, using fallback distance");
            return resolution(FALLBACK_DISTANCE_KM, TravelSource::MissingInput);
        };

        let geocoded = with_deadline(
            "geocoder",
            self.timeouts.geocoding,
            self.geocoder.geocode(origin),
        )
        .await;
        let from = match geocoded {
            Ok(Some(coordinates)) => coordinates,
            Ok(None) => {
                warn!(origin, "Origin address not found, using fallback distance");
                return resolution(FALLBACK_DISTANCE_KM, TravelSource::GeocodeFailed);
            }
            Err(e) => {
                warn!(origin, error = %e, "Geocoding failed, using fallback distance");
                return resolution(FALLBACK_DISTANCE_KM, TravelSource::GeocodeFailed);
            }
        };

        let routed = with_deadline(
            "router",
            self.timeouts.routing,
            self.router.route(from, destination, profile.routing),
        )
        .await;
        match routed {
            Ok(meters) if meters.is_finite() && meters >= 0.0 => {
                let distance_km = meters / METERS_PER_KM;
                info!(distance_km, profile = profile.routing.as_str(), "Route resolved");
                resolution(distance_km, TravelSource::Routed)
            }
            Ok(meters) => {
                warn!(meters, "Router returned an invalid distance, using fallback");
                resolution(FALLBACK_DISTANCE_KM, TravelSource::RouteFailed)
            }
            Err(e) => {
                warn!(%from, %destination, error = %e, "Routing failed, using fallback distance");
                resolution(FALLBACK_DISTANCE_KM, TravelSource::RouteFailed)
            }
        }
    }

    /// Transport profile table in use
    #[must_use]
    pub fn profiles(&self) -> &TravelProfileTable {
        &self.profiles
    }
}
