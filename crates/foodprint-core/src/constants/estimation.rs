// ABOUTME: Estimation policy constants used when lookups fail or inputs are absent
// ABOUTME: Fallback distance, packaging size escalation threshold, and packaging overhead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

/// Distance reported whenever travel resolution cannot produce a routed distance
pub const FALLBACK_DISTANCE_KM: f64 = 5.0;

/// Orders with more dishes than this are packed in "large" containers
pub const LARGE_PACKAGING_DISH_THRESHOLD: u32 = 2;

/// Packaging size used up to and including the threshold
pub const STANDARD_PACKAGING_SIZE: &str = "medium";

/// Packaging size used above the threshold
pub const LARGE_PACKAGING_SIZE: &str = "large";

/// Fixed kg CO2e for bags, napkins and cutlery added to every order
pub const FIXED_PACKAGING_OVERHEAD_KG: f64 = 0.05;

/// Number of decimals used by the public result shape
pub const DISPLAY_DECIMALS: usize = 2;
