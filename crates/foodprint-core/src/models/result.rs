// ABOUTME: Emission result shape returned by the aggregator
// ABOUTME: Two-decimal display formatting for top-level totals and per-dish details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use super::order::{IngredientQuantityMap, RecipeSource};
use super::travel::TravelSource;
use crate::constants::estimation::DISPLAY_DECIMALS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Round a value to the two-decimal display precision.
///
/// Negative, NaN and infinite inputs collapse to `0.0`; every quantity in the
/// result shape is non-negative.
#[must_use]
pub fn round_display(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Format a value as a two-decimal string (`"12.34"`)
#[must_use]
pub fn format_display(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS, round_display(value))
}

/// Final breakdown of an order's footprint (kg CO2e)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionResult {
    /// Food emission
    pub food: String,
    /// Packaging emission
    pub packaging: String,
    /// Delivery travel emission
    pub travel: String,
    /// Delivery distance in km
    pub travel_distance: String,
    /// Transport mode used for the travel factor
    pub transport_type: String,
    /// Sum of food, packaging and travel
    pub total: String,
    /// Per-dish and per-ingredient attribution
    pub details: EmissionDetails,
}

/// Attribution details of an [`EmissionResult`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionDetails {
    /// One entry per parsed order line, in input order
    pub dishes: Vec<DishEmission>,
    /// Cumulative ingredients across all dishes
    pub ingredients: BTreeMap<String, IngredientEmission>,
    /// Total servings across order lines
    pub dish_count: u32,
    /// Packaging type actually applied after defaulting
    pub packaging_type: String,
    /// Packaging size actually applied after escalation
    pub packaging_size: String,
    /// How the travel distance was obtained; absent when the caller supplied
    /// the travel input directly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_source: Option<TravelSource>,
    /// Number of dish-string clauses dropped by the parser
    pub skipped_clauses: usize,
}

/// Emission of one order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishEmission {
    /// Dish name as parsed
    pub name: String,
    /// Servings ordered
    pub count: u32,
    /// Emission of a single serving
    pub emission: f64,
    /// `emission * count`
    pub total_emission: f64,
    /// Resolved grams per serving
    pub ingredients: IngredientQuantityMap,
    /// Recipe tier that produced `ingredients`
    pub source: RecipeSource,
}

/// Aggregate contribution of one ingredient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngredientEmission {
    /// Total grams across the order
    pub amount: f64,
    /// kg CO2e from this ingredient
    pub emission: f64,
    /// Share of the food emission (0-100)
    pub percentage: f64,
}

impl EmissionResult {
    /// Parse a two-decimal field back into a number (0.0 when malformed)
    #[must_use]
    pub fn parse_field(field: &str) -> f64 {
        field.parse().unwrap_or(0.0)
    }
}
