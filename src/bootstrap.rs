// ABOUTME: Builds the emission engine from configuration, wiring HTTP providers or offline fakes
// ABOUTME: Applies default transport and packaging overrides to the built-in tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use crate::config::{EstimationPolicyConfig, ExternalServicesConfig, FoodprintConfig};
use foodprint_core::errors::AppResult;
use foodprint_intelligence::spi::{
    DisabledGeocoder, DisabledRecipeLookup, DisabledRouter, Geocoder, RecipeDataLookup, Router,
};
use foodprint_intelligence::{Collaborators, EmissionEngine, EmissionTables, EngineTimeouts};
use foodprint_providers::{
    initialize_shared_client, LlmRecipeConfig, LlmRecipeLookup, NominatimGeocoder, OsrmRouter,
};
use std::sync::Arc;
use tracing::info;

/// Built-in tables with the policy's default overrides applied
///
/// # Errors
///
/// Returns `ConfigInvalid` when an override names an unknown transport mode
/// or packaging type.
pub fn build_tables(policy: &EstimationPolicyConfig) -> AppResult<Arc<EmissionTables>> {
    if policy.default_transport.is_none() && policy.default_packaging.is_none() {
        return Ok(EmissionTables::shared());
    }

    let mut tables = EmissionTables::builtin();
    if let Some(mode) = &policy.default_transport {
        tables.travel = Arc::new((*tables.travel).clone().with_default_mode(mode)?);
    }
    if let Some(kind) = &policy.default_packaging {
        tables.packaging = Arc::new((*tables.packaging).clone().with_default_type(kind)?);
    }
    Ok(Arc::new(tables))
}

/// HTTP collaborators for every enabled service, disabled stand-ins otherwise
#[must_use]
pub fn build_collaborators(services: &ExternalServicesConfig) -> Collaborators {
    let recipe_lookup: Arc<dyn RecipeDataLookup> = match &services.recipe_llm_base_url {
        Some(base_url) if services.recipe_lookup_enabled => {
            Arc::new(LlmRecipeLookup::new(LlmRecipeConfig {
                base_url: base_url.clone(),
                model: services.recipe_llm_model.clone(),
                api_key: services.recipe_llm_api_key.clone(),
            }))
        }
        _ => Arc::new(DisabledRecipeLookup),
    };
    let geocoder: Arc<dyn Geocoder> = if services.geocoding_enabled {
        Arc::new(NominatimGeocoder::new(
            services.geocoder_url.clone(),
            services.user_agent.clone(),
        ))
    } else {
        Arc::new(DisabledGeocoder)
    };
    let router: Arc<dyn Router> = if services.routing_enabled {
        Arc::new(OsrmRouter::new(
            services.router_url.clone(),
            services.user_agent.clone(),
        ))
    } else {
        Arc::new(DisabledRouter)
    };

    info!(
        recipe_lookup = recipe_lookup.is_enabled(),
        geocoding = services.geocoding_enabled,
        routing = services.routing_enabled,
        "Collaborators configured"
    );
    Collaborators {
        recipe_lookup,
        geocoder,
        router,
    }
}

/// Engine wired to the configured HTTP providers
///
/// # Errors
///
/// Returns a configuration error from validation or table overrides.
pub fn build_engine(config: &FoodprintConfig) -> AppResult<EmissionEngine> {
    config.validate()?;
    initialize_shared_client(
        config.timeouts.http_client_timeout_secs,
        config.timeouts.http_client_connect_timeout_secs,
    );
    let tables = build_tables(&config.policy)?;
    Ok(EmissionEngine::new(
        tables,
        build_collaborators(&config.external_services),
        config.timeouts.engine_timeouts(),
    ))
}

/// Engine that never leaves the process
///
/// # Errors
///
/// Returns `ConfigInvalid` when a policy override is unknown.
pub fn build_offline_engine(policy: &EstimationPolicyConfig) -> AppResult<EmissionEngine> {
    Ok(EmissionEngine::new(
        build_tables(policy)?,
        Collaborators::disabled(),
        EngineTimeouts::default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_reuses_shared_tables() {
        let tables = build_tables(&EstimationPolicyConfig::default()).unwrap();
        assert!(Arc::ptr_eq(&tables, &EmissionTables::shared()));
    }

    #[test]
    fn test_overrides_apply() {
        let policy = EstimationPolicyConfig {
            default_transport: Some("bicycle".to_owned()),
            default_packaging: Some("paper".to_owned()),
        };
        let tables = build_tables(&policy).unwrap();
        assert_eq!(tables.travel.default_mode(), "bicycle");
        assert_eq!(tables.packaging.default_type(), "paper");
    }

    #[test]
    fn test_unknown_override_rejected() {
        let policy = EstimationPolicyConfig {
            default_transport: Some("rocket".to_owned()),
            default_packaging: None,
        };
        assert!(build_tables(&policy).is_err());
    }

    #[test]
    fn test_disabled_services_use_stand_ins() {
        let services = ExternalServicesConfig {
            geocoding_enabled: false,
            routing_enabled: false,
            ..ExternalServicesConfig::default()
        };
        let collaborators = build_collaborators(&services);
        assert!(!collaborators.recipe_lookup.is_enabled());
    }
}
