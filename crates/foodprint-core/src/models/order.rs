// ABOUTME: Order line and ingredient quantity map types
// ABOUTME: Produced by the dish parser and recipe resolver, consumed by aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical ingredient name to grams.
///
/// A `BTreeMap` keeps iteration order stable so floating-point sums over the
/// map are reproducible between runs.
pub type IngredientQuantityMap = BTreeMap<String, f64>;

/// One parsed clause of a dish string, e.g. `2 x butter chicken`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Number of servings ordered (always positive)
    pub count: u32,
    /// Lower-cased, whitespace-collapsed dish name
    pub dish_name: String,
}

impl OrderLine {
    /// Create an order line
    #[must_use]
    pub fn new(count: u32, dish_name: impl Into<String>) -> Self {
        Self {
            count,
            dish_name: dish_name.into(),
        }
    }
}

/// Which recipe resolution tier produced a dish's ingredients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSource {
    /// Exact match in the static recipe table
    StaticTable,
    /// External recipe-data lookup
    ExternalLookup,
    /// Keyword-based heuristic estimator
    Heuristic,
}

impl RecipeSource {
    /// Stable string form used in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StaticTable => "static_table",
            Self::ExternalLookup => "external_lookup",
            Self::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
