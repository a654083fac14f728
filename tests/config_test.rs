// ABOUTME: Integration tests for environment configuration and engine bootstrap
// ABOUTME: Variable parsing, validation failures, and default overrides flowing into estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use foodprint::bootstrap::{build_engine, build_offline_engine};
use foodprint::config::{EstimationPolicyConfig, FoodprintConfig};
use foodprint::errors::ErrorCode;
use foodprint::models::TravelInput;
use serial_test::serial;
use std::env;

const VARIABLES: &[&str] = &[
    "FOODPRINT_GEOCODER_URL",
    "FOODPRINT_ROUTER_URL",
    "FOODPRINT_GEOCODING_ENABLED",
    "FOODPRINT_ROUTING_ENABLED",
    "FOODPRINT_RECIPE_LLM_BASE_URL",
    "FOODPRINT_RECIPE_LLM_MODEL",
    "FOODPRINT_RECIPE_LLM_API_KEY",
    "FOODPRINT_RECIPE_LOOKUP_ENABLED",
    "FOODPRINT_RECIPE_LOOKUP_TIMEOUT_SECS",
    "FOODPRINT_GEOCODING_TIMEOUT_SECS",
    "FOODPRINT_ROUTING_TIMEOUT_SECS",
    "FOODPRINT_DEFAULT_TRANSPORT",
    "FOODPRINT_DEFAULT_PACKAGING",
];

fn clear_environment() {
    for variable in VARIABLES {
        env::remove_var(variable);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_environment();
    let config = FoodprintConfig::from_env().unwrap();
    assert_eq!(config, FoodprintConfig::default());
    assert!(!config.external_services.recipe_lookup_enabled);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_environment();
    env::set_var("FOODPRINT_ROUTER_URL", "http://localhost:5000");
    env::set_var("FOODPRINT_GEOCODING_ENABLED", "false");
    env::set_var("FOODPRINT_RECIPE_LLM_BASE_URL", "http://localhost:11434/v1");
    env::set_var("FOODPRINT_ROUTING_TIMEOUT_SECS", "2");
    env::set_var("FOODPRINT_DEFAULT_TRANSPORT", "e-bike");

    let config = FoodprintConfig::from_env().unwrap();

    assert_eq!(config.external_services.router_url, "http://localhost:5000");
    assert!(!config.external_services.geocoding_enabled);
    assert!(config.external_services.recipe_lookup_enabled);
    assert_eq!(config.timeouts.routing_secs, 2);
    assert_eq!(config.policy.default_transport.as_deref(), Some("e-bike"));

    clear_environment();
}

#[test]
#[serial]
fn test_zero_timeout_is_rejected() {
    clear_environment();
    env::set_var("FOODPRINT_GEOCODING_TIMEOUT_SECS", "0");

    let error = FoodprintConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("FOODPRINT_GEOCODING_TIMEOUT_SECS"));

    clear_environment();
}

#[test]
#[serial]
fn test_lookup_enabled_without_endpoint_is_rejected() {
    clear_environment();
    env::set_var("FOODPRINT_RECIPE_LOOKUP_ENABLED", "true");

    let error = FoodprintConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigMissing);

    clear_environment();
}

#[test]
fn test_invalid_url_fails_engine_build() {
    let mut config = FoodprintConfig::default();
    config.external_services.geocoder_url = "ftp://example.org".to_owned();
    assert!(build_engine(&config).is_err());
}

#[test]
fn test_unknown_default_transport_is_rejected() {
    let policy = EstimationPolicyConfig {
        default_transport: Some("hovercraft".to_owned()),
        default_packaging: None,
    };
    assert!(build_offline_engine(&policy).is_err());
}

#[tokio::test]
async fn test_default_overrides_reach_the_result() {
    let policy = EstimationPolicyConfig {
        default_transport: Some("car".to_owned()),
        default_packaging: Some("paper".to_owned()),
    };
    let engine = build_offline_engine(&policy).unwrap();

    let result = engine
        .compute("1 x samosa", &TravelInput::Distance(10.0), None)
        .await;

    assert_eq!(result.transport_type, "car");
    assert_eq!(result.travel, "1.71");
    assert_eq!(result.details.packaging_type, "paper");
}
