// ABOUTME: Configuration module for external services, timeouts, and estimation policy
// ABOUTME: All settings come from environment variables with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

/// Environment-driven configuration
pub mod environment;

pub use environment::{
    EstimationPolicyConfig, ExternalServicesConfig, FoodprintConfig, TimeoutConfig,
};
