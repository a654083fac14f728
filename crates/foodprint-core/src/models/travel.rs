// ABOUTME: Travel-related data model for delivery emission estimation
// ABOUTME: Coordinates, routing profiles, caller travel inputs, and resolved travel outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// WGS84 coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinates {
    /// Create validated coordinates
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if latitude is outside [-90, 90] or longitude
    /// outside [-180, 180], and `InvalidInput` for non-finite values.
    pub fn new(lat: f64, lng: f64) -> AppResult<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(AppError::invalid_input("Coordinates must be finite numbers"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::value_out_of_range(format!(
                "Latitude {lat} is outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::value_out_of_range(format!(
                "Longitude {lng} is outside [-180, 180]"
            )));
        }
        Ok(Self { lat, lng })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

/// Routing profile requested from the router collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingProfile {
    /// Road network for cars and motorbikes
    Driving,
    /// Cycle-friendly network
    Cycling,
    /// Pedestrian network
    Foot,
}

impl RoutingProfile {
    /// Profile name as used in router URLs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Cycling => "cycling",
            Self::Foot => "foot",
        }
    }
}

/// Structured travel input, as produced by travel resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredTravel {
    /// Delivery distance in km
    pub distance: f64,
    /// Transport mode name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_type: Option<String>,
    /// kg CO2e per km; when absent the transport mode's factor is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emission_factor: Option<f64>,
}

/// Travel input accepted by the aggregator.
///
/// Deserializes from either a bare number (km) or an object
/// `{distance, transportType?, emissionFactor?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TravelInput {
    /// Legacy path: bare distance in km, flat default per-km factor
    Distance(f64),
    /// Preferred path: distance with transport mode and/or explicit factor
    Structured(StructuredTravel),
}

impl TravelInput {
    /// Validate at the API boundary
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for negative or non-finite distances or
    /// emission factors.
    pub fn validate(&self) -> AppResult<()> {
        let (distance, factor) = match self {
            Self::Distance(d) => (*d, None),
            Self::Structured(s) => (s.distance, s.emission_factor),
        };
        if !distance.is_finite() || distance < 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "Travel distance must be a non-negative number, got {distance}"
            )));
        }
        if let Some(f) = factor {
            if !f.is_finite() || f < 0.0 {
                return Err(AppError::value_out_of_range(format!(
                    "Travel emission factor must be a non-negative number, got {f}"
                )));
            }
        }
        Ok(())
    }

    /// Distance in km, clamped to be non-negative
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        let raw = match self {
            Self::Distance(d) => *d,
            Self::Structured(s) => s.distance,
        };
        if raw.is_finite() && raw > 0.0 {
            raw
        } else {
            0.0
        }
    }
}

impl Default for TravelInput {
    fn default() -> Self {
        Self::Distance(0.0)
    }
}

impl From<TravelResolution> for TravelInput {
    fn from(resolution: TravelResolution) -> Self {
        Self::Structured(StructuredTravel {
            distance: resolution.distance_km,
            transport_type: Some(resolution.transport_type),
            emission_factor: Some(resolution.emission_factor),
        })
    }
}

/// How a travel distance was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelSource {
    /// Geocoded origin and routed to the destination
    Routed,
    /// Origin address or destination coordinates were absent
    MissingInput,
    /// Origin address could not be geocoded
    GeocodeFailed,
    /// Router failed to produce a route
    RouteFailed,
    /// Caller supplied the distance directly
    ExplicitDistance,
}

impl TravelSource {
    /// Whether this outcome used the fixed fallback distance
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(
            self,
            Self::MissingInput | Self::GeocodeFailed | Self::RouteFailed
        )
    }
}

/// Output of travel distance resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelResolution {
    /// Distance in km
    pub distance_km: f64,
    /// Transport mode the factor belongs to
    pub transport_type: String,
    /// kg CO2e per km
    pub emission_factor: f64,
    /// Which stage of the degrade chain produced this value
    pub source: TravelSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_input_from_number() {
        let input: TravelInput = serde_json::from_str("7.5").unwrap();
        assert_eq!(input, TravelInput::Distance(7.5));
    }

    #[test]
    fn test_travel_input_from_object() {
        let input: TravelInput =
            serde_json::from_str(r#"{"distance": 3.2, "transportType": "bicycle"}"#).unwrap();
        assert!(matches!(
            &input,
            TravelInput::Structured(s)
                if (s.distance - 3.2).abs() < f64::EPSILON
                    && s.transport_type.as_deref() == Some("bicycle")
                    && s.emission_factor.is_none()
        ));
    }

    #[test]
    fn test_travel_input_validation() {
        assert!(TravelInput::Distance(0.0).validate().is_ok());
        assert!(TravelInput::Distance(-1.0).validate().is_err());
        let bad_factor = TravelInput::Structured(StructuredTravel {
            distance: 2.0,
            transport_type: None,
            emission_factor: Some(-0.1),
        });
        assert!(bad_factor.validate().is_err());
    }

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(12.97, 77.59).is_ok());
        assert!(Coordinates::new(91.0, 0.0).is_err());
        assert!(Coordinates::new(0.0, -181.0).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_fallback_sources() {
        assert!(TravelSource::RouteFailed.is_fallback());
        assert!(!TravelSource::Routed.is_fallback());
        assert!(!TravelSource::ExplicitDistance.is_fallback());
    }
}
