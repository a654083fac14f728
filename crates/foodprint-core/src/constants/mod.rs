// ABOUTME: Application constants organized by domain
// ABOUTME: Unit conversions and estimation policy thresholds shared across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

/// Unit conversion constants
pub mod units;

/// Estimation policy constants (fallback distances, packaging thresholds)
pub mod estimation;
