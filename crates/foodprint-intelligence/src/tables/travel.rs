// ABOUTME: Transport mode emission profiles in kg CO2e per km with a designated default mode
// ABOUTME: Each mode also names the routing profile used when requesting a delivery route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use super::{checked_factor, table_key};
use crate::errors::{AppError, AppResult};
use crate::models::RoutingProfile;
use std::collections::HashMap;

/// Mode used when the requested transport type is absent or unknown
const BUILTIN_DEFAULT_MODE: &str = "motorbike";

/// Built-in modes as `(mode, kg CO2e per km, routing profile)`
const BUILTIN_MODES: &[(&str, f64, RoutingProfile)] = &[
    ("bicycle", 0.0, RoutingProfile::Cycling),
    ("walking", 0.0, RoutingProfile::Foot),
    ("e-bike", 0.006, RoutingProfile::Cycling),
    ("e-scooter", 0.022, RoutingProfile::Driving),
    ("scooter", 0.082, RoutingProfile::Driving),
    ("motorbike", 0.103, RoutingProfile::Driving),
    ("car", 0.171, RoutingProfile::Driving),
    ("electric car", 0.053, RoutingProfile::Driving),
];

/// Per-km factor and routing profile of one transport mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportProfile {
    /// kg CO2e per km
    pub factor: f64,
    /// Network the router should use
    pub routing: RoutingProfile,
}

/// Transport mode to profile, with a default mode that is always present
#[derive(Debug, Clone)]
pub struct TravelProfileTable {
    modes: HashMap<String, TransportProfile>,
    default_mode: String,
}

impl TravelProfileTable {
    /// Build a table from `(mode, profile)` entries
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a negative factor or when `default_mode`
    /// is not one of the entries.
    pub fn new<I, S>(entries: I, default_mode: &str) -> AppResult<Self>
    where
        I: IntoIterator<Item = (S, TransportProfile)>,
        S: AsRef<str>,
    {
        let mut modes = HashMap::new();
        for (mode, profile) in entries {
            let key = table_key(mode.as_ref());
            checked_factor("travel profile table", &key, profile.factor)?;
            modes.insert(key, profile);
        }
        let default_mode = table_key(default_mode);
        if !modes.contains_key(&default_mode) {
            return Err(AppError::config(format!(
                "travel profile table: default mode '{default_mode}' has no profile"
            )));
        }
        Ok(Self {
            modes,
            default_mode,
        })
    }

    /// The shipped modes, defaulting to motorbike
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            modes: BUILTIN_MODES
                .iter()
                .map(|(mode, factor, routing)| {
                    (
                        (*mode).to_owned(),
                        TransportProfile {
                            factor: *factor,
                            routing: *routing,
                        },
                    )
                })
                .collect(),
            default_mode: BUILTIN_DEFAULT_MODE.to_owned(),
        }
    }

    /// Same table with another default mode
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the mode is unknown.
    pub fn with_default_mode(mut self, mode: &str) -> AppResult<Self> {
        let key = table_key(mode);
        if !self.modes.contains_key(&key) {
            return Err(AppError::config(format!(
                "unknown transport mode '{mode}' cannot be the default"
            )));
        }
        self.default_mode = key;
        Ok(self)
    }

    /// Profile of a mode, if known
    #[must_use]
    pub fn get(&self, mode: &str) -> Option<TransportProfile> {
        self.modes.get(&table_key(mode)).copied()
    }

    /// Resolve a requested mode to `(mode, profile)`, substituting the default
    #[must_use]
    pub fn resolve(&self, requested: Option<&str>) -> (String, TransportProfile) {
        if let Some(mode) = requested.map(table_key) {
            if let Some(profile) = self.modes.get(&mode) {
                return (mode, *profile);
            }
        }
        (self.default_mode.clone(), self.default_profile())
    }

    /// Name of the default mode
    #[must_use]
    pub fn default_mode(&self) -> &str {
        &self.default_mode
    }

    /// Profile of the default mode
    #[must_use]
    pub fn default_profile(&self) -> TransportProfile {
        self.modes
            .get(&self.default_mode)
            .copied()
            .unwrap_or(TransportProfile {
                factor: 0.0,
                routing: RoutingProfile::Driving,
            })
    }

    /// Mode names, sorted
    #[must_use]
    pub fn modes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
