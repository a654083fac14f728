// ABOUTME: Environment configuration for collaborator endpoints, call deadlines, and defaults
// ABOUTME: Parses FOODPRINT_* variables and validates URLs and timeouts before the engine starts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

//! Environment-based configuration

use foodprint_core::errors::{AppError, AppResult, ErrorCode};
use foodprint_intelligence::EngineTimeouts;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::warn;
use url::Url;

const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_ROUTER_URL: &str = "https://router.project-osrm.org";
const DEFAULT_RECIPE_LLM_MODEL: &str = "gpt-4o-mini";

/// Identifying user agent, required by the public Nominatim usage policy
#[must_use]
pub fn default_user_agent() -> String {
    format!("foodprint/{}", env!("CARGO_PKG_VERSION"))
}

/// Collaborator endpoints and switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalServicesConfig {
    /// Nominatim base URL
    pub geocoder_url: String,
    /// OSRM base URL
    pub router_url: String,
    /// Geocode origin addresses
    pub geocoding_enabled: bool,
    /// Request routes between origin and destination
    pub routing_enabled: bool,
    /// OpenAI-compatible base URL for recipe lookup
    pub recipe_llm_base_url: Option<String>,
    /// Model used for recipe lookup
    pub recipe_llm_model: String,
    /// Bearer token for the recipe model
    #[serde(skip_serializing)]
    pub recipe_llm_api_key: Option<String>,
    /// Ask the recipe model for dishes missing from the static table
    pub recipe_lookup_enabled: bool,
    /// User agent sent to every collaborator
    pub user_agent: String,
}

impl Default for ExternalServicesConfig {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_owned(),
            router_url: DEFAULT_ROUTER_URL.to_owned(),
            geocoding_enabled: true,
            routing_enabled: true,
            recipe_llm_base_url: None,
            recipe_llm_model: DEFAULT_RECIPE_LLM_MODEL.to_owned(),
            recipe_llm_api_key: None,
            recipe_lookup_enabled: false,
            user_agent: default_user_agent(),
        }
    }
}

impl ExternalServicesConfig {
    /// Load from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let recipe_llm_base_url = env_var_opt("FOODPRINT_RECIPE_LLM_BASE_URL");
        Self {
            geocoder_url: env_var_or("FOODPRINT_GEOCODER_URL", DEFAULT_GEOCODER_URL),
            router_url: env_var_or("FOODPRINT_ROUTER_URL", DEFAULT_ROUTER_URL),
            geocoding_enabled: env_bool_or("FOODPRINT_GEOCODING_ENABLED", true),
            routing_enabled: env_bool_or("FOODPRINT_ROUTING_ENABLED", true),
            recipe_lookup_enabled: env_bool_or(
                "FOODPRINT_RECIPE_LOOKUP_ENABLED",
                recipe_llm_base_url.is_some(),
            ),
            recipe_llm_base_url,
            recipe_llm_model: env_var_or("FOODPRINT_RECIPE_LLM_MODEL", DEFAULT_RECIPE_LLM_MODEL),
            recipe_llm_api_key: env_var_opt("FOODPRINT_RECIPE_LLM_API_KEY"),
            user_agent: env_var_or("FOODPRINT_USER_AGENT", &default_user_agent()),
        }
    }
}

/// Deadlines for collaborator calls and the shared HTTP client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Recipe lookup deadline in seconds
    pub recipe_lookup_secs: u64,
    /// Geocoding deadline in seconds
    pub geocoding_secs: u64,
    /// Routing deadline in seconds
    pub routing_secs: u64,
    /// Shared HTTP client request timeout in seconds
    pub http_client_timeout_secs: u64,
    /// Shared HTTP client connect timeout in seconds
    pub http_client_connect_timeout_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            recipe_lookup_secs: 8,
            geocoding_secs: 5,
            routing_secs: 5,
            http_client_timeout_secs: 30,
            http_client_connect_timeout_secs: 10,
        }
    }
}

impl TimeoutConfig {
    /// Load from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            recipe_lookup_secs: env_parse_or(
                "FOODPRINT_RECIPE_LOOKUP_TIMEOUT_SECS",
                defaults.recipe_lookup_secs,
            ),
            geocoding_secs: env_parse_or("FOODPRINT_GEOCODING_TIMEOUT_SECS", defaults.geocoding_secs),
            routing_secs: env_parse_or("FOODPRINT_ROUTING_TIMEOUT_SECS", defaults.routing_secs),
            http_client_timeout_secs: env_parse_or(
                "HTTP_CLIENT_TIMEOUT_SECS",
                defaults.http_client_timeout_secs,
            ),
            http_client_connect_timeout_secs: env_parse_or(
                "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
                defaults.http_client_connect_timeout_secs,
            ),
        }
    }

    /// Per-call deadlines handed to the engine
    #[must_use]
    pub const fn engine_timeouts(&self) -> EngineTimeouts {
        EngineTimeouts {
            recipe_lookup: Duration::from_secs(self.recipe_lookup_secs),
            geocoding: Duration::from_secs(self.geocoding_secs),
            routing: Duration::from_secs(self.routing_secs),
        }
    }
}

/// Overrides for the tables' designated defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationPolicyConfig {
    /// Default transport mode
    pub default_transport: Option<String>,
    /// Default packaging type
    pub default_packaging: Option<String>,
}

impl EstimationPolicyConfig {
    /// Load from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            default_transport: env_var_opt("FOODPRINT_DEFAULT_TRANSPORT"),
            default_packaging: env_var_opt("FOODPRINT_DEFAULT_PACKAGING"),
        }
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodprintConfig {
    /// Collaborator endpoints
    pub external_services: ExternalServicesConfig,
    /// Call deadlines
    pub timeouts: TimeoutConfig,
    /// Default overrides
    pub policy: EstimationPolicyConfig,
}

impl FoodprintConfig {
    /// Load every section from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` or `ConfigMissing` when [`Self::validate`] fails.
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            external_services: ExternalServicesConfig::from_env(),
            timeouts: TimeoutConfig::from_env(),
            policy: EstimationPolicyConfig::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check URLs and deadlines
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for zero timeouts or non-http(s) URLs, and
    /// `ConfigMissing` when recipe lookup is enabled without a base URL.
    pub fn validate(&self) -> AppResult<()> {
        let timeouts = [
            ("FOODPRINT_RECIPE_LOOKUP_TIMEOUT_SECS", self.timeouts.recipe_lookup_secs),
            ("FOODPRINT_GEOCODING_TIMEOUT_SECS", self.timeouts.geocoding_secs),
            ("FOODPRINT_ROUTING_TIMEOUT_SECS", self.timeouts.routing_secs),
            ("HTTP_CLIENT_TIMEOUT_SECS", self.timeouts.http_client_timeout_secs),
            (
                "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
                self.timeouts.http_client_connect_timeout_secs,
            ),
        ];
        if let Some((name, _)) = timeouts.iter().find(|(_, secs)| *secs == 0) {
            return Err(AppError::config(format!("{name} must be greater than zero")));
        }

        let services = &self.external_services;
        validate_http_url("FOODPRINT_GEOCODER_URL", &services.geocoder_url)?;
        validate_http_url("FOODPRINT_ROUTER_URL", &services.router_url)?;
        match (&services.recipe_llm_base_url, services.recipe_lookup_enabled) {
            (Some(url), _) => validate_http_url("FOODPRINT_RECIPE_LLM_BASE_URL", url)?,
            (None, true) => {
                return Err(AppError::new(
                    ErrorCode::ConfigMissing,
                    "FOODPRINT_RECIPE_LOOKUP_ENABLED is set but FOODPRINT_RECIPE_LLM_BASE_URL is not",
                ))
            }
            (None, false) => {}
        }
        if services.recipe_lookup_enabled && services.recipe_llm_api_key.is_none() {
            warn!("Recipe lookup enabled without FOODPRINT_RECIPE_LLM_API_KEY");
        }
        Ok(())
    }
}

fn validate_http_url(name: &str, value: &str) -> AppResult<()> {
    let url = Url::parse(value)
        .map_err(|e| AppError::config(format!("{name} is not a valid URL: {e}")).with_source(e))?;
    if matches!(url.scheme(), "http" | "https") {
        Ok(())
    } else {
        Err(AppError::config(format!(
            "{name} must use http or https, got '{}'",
            url.scheme()
        )))
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_var_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn env_parse_or(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_bool_or(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |v| {
        matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(FoodprintConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = FoodprintConfig::default();
        config.timeouts.routing_secs = 0;
        let error = config.validate().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.message.contains("FOODPRINT_ROUTING_TIMEOUT_SECS"));
    }

    #[test]
    fn test_url_scheme_checked() {
        let mut config = FoodprintConfig::default();
        config.external_services.router_url = "ftp://router.example".to_owned();
        assert!(config.validate().is_err());
        config.external_services.router_url = "not a url".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_recipe_lookup_needs_base_url() {
        let mut config = FoodprintConfig::default();
        config.external_services.recipe_lookup_enabled = true;
        assert_eq!(
            config.validate().unwrap_err().code,
            ErrorCode::ConfigMissing
        );
    }

    #[test]
    fn test_engine_timeouts() {
        let timeouts = TimeoutConfig::default().engine_timeouts();
        assert_eq!(timeouts, EngineTimeouts::default());
    }
}
