// ABOUTME: Unit conversion constants for mass and distance
// ABOUTME: Provides named constants to eliminate magic numbers in emission calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Grams per kilogram conversion factor
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Percentage scale
pub const PERCENT: f64 = 100.0;
