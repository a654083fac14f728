// ABOUTME: Immutable lookup tables for emission estimation, loaded once and shared by reference
// ABOUTME: Emission factors, categories, aliases, recipes, dish families, travel and packaging profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

//! # Emission Tables
//!
//! All tables are plain data injected into components at construction.
//! [`EmissionTables::shared`] hands out the built-in data set, built once per
//! process; tests build substitute tables through each table's `new`.

/// Ingredient categories and keyword classification rules
pub mod categories;
/// Dish family signals for heuristic recipe estimation
pub mod dish_families;
/// Exact ingredient emission factors
pub mod factors;
/// Ingredient alias table
pub mod normalization;
/// Packaging profiles by type and size
pub mod packaging;
/// Standard-serving recipe compositions
pub mod recipes;
/// Transport mode emission profiles
pub mod travel;

pub use categories::{CategoryFallbackTable, CategoryRule, IngredientCategory};
pub use dish_families::{DishFamily, DishFamilyTable};
pub use factors::EmissionFactorTable;
pub use normalization::NormalizationTable;
pub use packaging::PackagingProfileTable;
pub use recipes::RecipeTable;
pub use travel::{TransportProfile, TravelProfileTable};

use crate::errors::{AppError, AppResult};
use std::sync::{Arc, LazyLock};

/// Built-in tables, constructed on first use
static BUILTIN_TABLES: LazyLock<Arc<EmissionTables>> =
    LazyLock::new(|| Arc::new(EmissionTables::builtin()));

/// Every table the engine reads, each shareable across concurrent estimates
#[derive(Debug, Clone)]
pub struct EmissionTables {
    /// Ingredient name to kg CO2e per kg
    pub emission_factors: Arc<EmissionFactorTable>,
    /// Category factors and the ordered keyword classifier
    pub categories: Arc<CategoryFallbackTable>,
    /// Alias to canonical ingredient name
    pub normalization: Arc<NormalizationTable>,
    /// Dish name to grams per serving
    pub recipes: Arc<RecipeTable>,
    /// Ordered dish-family signals for the heuristic estimator
    pub dish_families: Arc<DishFamilyTable>,
    /// Transport mode to kg CO2e per km
    pub travel: Arc<TravelProfileTable>,
    /// Packaging type and size to kg CO2e per unit
    pub packaging: Arc<PackagingProfileTable>,
}

impl EmissionTables {
    /// Build the shipped data set
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            emission_factors: Arc::new(EmissionFactorTable::builtin()),
            categories: Arc::new(CategoryFallbackTable::builtin()),
            normalization: Arc::new(NormalizationTable::builtin()),
            recipes: Arc::new(RecipeTable::builtin()),
            dish_families: Arc::new(DishFamilyTable::builtin()),
            travel: Arc::new(TravelProfileTable::builtin()),
            packaging: Arc::new(PackagingProfileTable::builtin()),
        }
    }

    /// Process-wide built-in tables
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(&BUILTIN_TABLES)
    }
}

impl Default for EmissionTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Validate one factor entry of a substituted table
///
/// # Errors
///
/// Returns `ConfigInvalid` when the value is negative, NaN, or infinite.
pub fn checked_factor(table: &str, key: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AppError::config(format!(
            "{table}: factor for '{key}' must be a non-negative number, got {value}"
        )))
    }
}

/// Lower-case, trim, and collapse internal whitespace runs
#[must_use]
pub fn table_key(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_key() {
        assert_eq!(table_key("  Butter   Chicken "), "butter chicken");
        assert_eq!(table_key(""), "");
    }

    #[test]
    fn test_checked_factor() {
        assert!(checked_factor("t", "k", 0.0).is_ok());
        assert!(checked_factor("t", "k", -0.5).is_err());
        assert!(checked_factor("t", "k", f64::INFINITY).is_err());
    }

    #[test]
    fn test_shared_tables_are_reused() {
        let a = EmissionTables::shared();
        let b = EmissionTables::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_builtin_recipes_resolve_to_known_factors() {
        let tables = EmissionTables::builtin();
        for (dish, ingredients) in tables.recipes.iter() {
            for name in ingredients.keys() {
                assert!(
                    tables.emission_factors.get(name).is_some(),
                    "recipe '{dish}' uses '{name}' which has no exact factor"
                );
            }
        }
        for family in tables.dish_families.families() {
            for name in family.composition.keys() {
                assert!(tables.emission_factors.get(name).is_some(), "{name}");
            }
        }
    }

    #[test]
    fn test_builtin_aliases_target_known_factors() {
        let tables = EmissionTables::builtin();
        for (alias, canonical) in tables.normalization.iter() {
            assert!(
                tables.emission_factors.get(canonical).is_some(),
                "alias '{alias}' points at unknown ingredient '{canonical}'"
            );
        }
    }
}
