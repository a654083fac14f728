// ABOUTME: Resolves an ingredient name to kg CO2e per kg via exact table or category heuristics
// ABOUTME: Exact match runs on the normalized name; category keywords run on the raw name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use crate::normalizer::NameNormalizer;
use crate::tables::{CategoryFallbackTable, EmissionFactorTable, IngredientCategory};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Which stage produced a factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "category")]
pub enum FactorMatch {
    /// Exact table hit on the canonical name
    Exact,
    /// Keyword classifier selected a category
    Category(IngredientCategory),
    /// Nothing matched; vegetables factor used
    Default,
}

/// Factor plus how it was obtained
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorResolution {
    /// kg CO2e per kg, never negative
    pub factor: f64,
    /// Name after normalization
    pub canonical_name: String,
    /// Resolution stage
    pub matched: FactorMatch,
}

/// Ingredient emission factor lookup with a guaranteed terminal default
#[derive(Debug, Clone)]
pub struct EmissionFactorResolver {
    normalizer: NameNormalizer,
    factors: Arc<EmissionFactorTable>,
    categories: Arc<CategoryFallbackTable>,
}

impl EmissionFactorResolver {
    /// Create a resolver
    #[must_use]
    pub const fn new(
        normalizer: NameNormalizer,
        factors: Arc<EmissionFactorTable>,
        categories: Arc<CategoryFallbackTable>,
    ) -> Self {
        Self {
            normalizer,
            factors,
            categories,
        }
    }

    /// kg CO2e per kg for an ingredient
    #[must_use]
    pub fn resolve(&self, ingredient: &str) -> f64 {
        self.resolve_detailed(ingredient).factor
    }

    /// Factor with its provenance
    #[must_use]
    pub fn resolve_detailed(&self, ingredient: &str) -> FactorResolution {
        let canonical_name = self.normalizer.normalize(ingredient);
        if let Some(factor) = self.factors.get(&canonical_name) {
            return FactorResolution {
                factor,
                canonical_name,
                matched: FactorMatch::Exact,
            };
        }

        let (category, matched) = match self.categories.classify(ingredient) {
            Some(category) => (category, FactorMatch::Category(category)),
            None => (IngredientCategory::Vegetables, FactorMatch::Default),
        };
        let factor = self.categories.factor(category);
        debug!(
            ingredient,
            canonical = %canonical_name,
            category = %category,
            factor,
            "No exact emission factor, using category fallback"
        );
        FactorResolution {
            factor,
            canonical_name,
            matched,
        }
    }

    /// Normalizer shared with this resolver
    #[must_use]
    pub const fn normalizer(&self) -> &NameNormalizer {
        &self.normalizer
    }
}
