// ABOUTME: Three-tier recipe resolver: static table, bounded external lookup, heuristic estimate
// ABOUTME: External failures and timeouts are logged and fall through; no error reaches the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use super::heuristic::HeuristicEstimator;
use crate::models::{IngredientQuantityMap, RecipeSource};
use crate::normalizer::NameNormalizer;
use crate::spi::RecipeDataLookup;
use crate::tables::RecipeTable;
use crate::timeouts::with_deadline;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Ingredients of one dish and the tier that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRecipe {
    /// Canonical ingredient name to grams per serving, never empty
    pub ingredients: IngredientQuantityMap,
    /// Tier that answered
    pub source: RecipeSource,
    /// Dish family when the heuristic matched one
    pub family: Option<String>,
}

/// Dish name to ingredient quantities
#[derive(Clone)]
pub struct RecipeResolver {
    recipes: Arc<RecipeTable>,
    lookup: Arc<dyn RecipeDataLookup>,
    normalizer: NameNormalizer,
    heuristic: HeuristicEstimator,
    lookup_timeout: Duration,
}

impl RecipeResolver {
    /// Create a resolver
    #[must_use]
    pub fn new(
        recipes: Arc<RecipeTable>,
        lookup: Arc<dyn RecipeDataLookup>,
        normalizer: NameNormalizer,
        heuristic: HeuristicEstimator,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            recipes,
            lookup,
            normalizer,
            heuristic,
            lookup_timeout,
        }
    }

    /// Resolve a dish, trying each tier only if the previous had nothing
    #[instrument(skip(self), fields(tier = tracing::field::Empty))]
    pub async fn resolve(&self, dish_name: &str) -> ResolvedRecipe {
        if let Some(ingredients) = self.recipes.get(dish_name) {
            tracing::Span::current().record("tier", RecipeSource::StaticTable.as_str());
            debug!("Static recipe hit");
            return ResolvedRecipe {
                ingredients: ingredients.clone(),
                source: RecipeSource::StaticTable,
                family: None,
            };
        }

        if let Some(ingredients) = self.lookup_external(dish_name).await {
            tracing::Span::current().record("tier", RecipeSource::ExternalLookup.as_str());
            info!(ingredients = ingredients.len(), "Recipe from external lookup");
            return ResolvedRecipe {
                ingredients,
                source: RecipeSource::ExternalLookup,
                family: None,
            };
        }

        tracing::Span::current().record("tier", RecipeSource::Heuristic.as_str());
        let (ingredients, family) = self.heuristic.estimate(dish_name);
        info!(family = family.as_deref().unwrap_or("default"), "Recipe from heuristic estimate");
        ResolvedRecipe {
            ingredients,
            source: RecipeSource::Heuristic,
            family,
        }
    }

    /// Second tier; `None` on disabled, empty, failed, or timed-out lookups
    async fn lookup_external(&self, dish_name: &str) -> Option<IngredientQuantityMap> {
        if !self.lookup.is_enabled() {
            return None;
        }
        let outcome = with_deadline(
            "recipe lookup",
            self.lookup_timeout,
            self.lookup.lookup(dish_name),
        )
        .await;
        match outcome {
            Ok(Some(raw)) => {
                let normalized = self.normalize_quantities(raw);
                if normalized.is_empty() {
                    warn!(dish = dish_name, "External recipe had no usable ingredients");
                    None
                } else {
                    Some(normalized)
                }
            }
            Ok(None) => {
                debug!(dish = dish_name, "External recipe lookup had no data");
                None
            }
            Err(e) => {
                warn!(dish = dish_name, error = %e, "External recipe lookup failed, falling back");
                None
            }
        }
    }

    /// Canonicalise names, merging aliases that collapse onto one ingredient
    fn normalize_quantities(&self, raw: IngredientQuantityMap) -> IngredientQuantityMap {
        let mut normalized = IngredientQuantityMap::new();
        for (name, grams) in raw {
            if !grams.is_finite() || grams < 0.0 {
                warn!(ingredient = %name, grams, "Dropping invalid external quantity");
                continue;
            }
            let canonical = self.normalizer.normalize(&name);
            if canonical.is_empty() {
                continue;
            }
            *normalized.entry(canonical).or_insert(0.0) += grams;
        }
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, AppResult};
    use crate::spi::DisabledRecipeLookup;
    use crate::tables::{DishFamilyTable, NormalizationTable};
    use async_trait::async_trait;

    struct FixedLookup(IngredientQuantityMap);

    #[async_trait]
    impl RecipeDataLookup for FixedLookup {
        async fn lookup(&self, _dish_name: &str) -> AppResult<Option<IngredientQuantityMap>> {
            Ok(Some(self.0.clone()))
        }
    }

    struct FailingLookup;

    #[async_trait]
    impl RecipeDataLookup for FailingLookup {
        async fn lookup(&self, _dish_name: &str) -> AppResult<Option<IngredientQuantityMap>> {
            Err(AppError::external_service("recipes", "unavailable"))
        }
    }

    fn resolver(lookup: Arc<dyn RecipeDataLookup>) -> RecipeResolver {
        RecipeResolver::new(
            Arc::new(RecipeTable::builtin()),
            lookup,
            NameNormalizer::new(Arc::new(NormalizationTable::builtin())),
            HeuristicEstimator::new(Arc::new(DishFamilyTable::builtin())),
            Duration::from_secs(1),
        )
    }

    #[tokio::test]
    async fn test_external_names_are_normalized_and_merged() {
        let raw = IngredientQuantityMap::from([
            ("Curd".to_owned(), 50.0),
            ("dahi".to_owned(), 25.0),
            ("Shrimp".to_owned(), 100.0),
            ("water".to_owned(), -5.0),
        ]);
        let resolved = resolver(Arc::new(FixedLookup(raw)))
            .resolve("goan prawn balchao")
            .await;
        assert_eq!(resolved.source, RecipeSource::ExternalLookup);
        assert_eq!(resolved.ingredients.get("yogurt"), Some(&75.0));
        assert_eq!(resolved.ingredients.get("prawns"), Some(&100.0));
        assert!(!resolved.ingredients.contains_key("water"));
    }

    #[tokio::test]
    async fn test_empty_external_result_falls_through() {
        let resolved = resolver(Arc::new(FixedLookup(IngredientQuantityMap::new())))
            .resolve("mystery platter")
            .await;
        assert_eq!(resolved.source, RecipeSource::Heuristic);
        assert!(!resolved.ingredients.is_empty());
    }

    #[tokio::test]
    async fn test_failure_falls_through_to_heuristic() {
        let resolved = resolver(Arc::new(FailingLookup)).resolve("chicken 65").await;
        assert_eq!(resolved.source, RecipeSource::Heuristic);
        assert_eq!(resolved.family.as_deref(), Some("chicken"));
    }

    #[tokio::test]
    async fn test_disabled_lookup_skips_to_heuristic() {
        let resolved = resolver(Arc::new(DisabledRecipeLookup))
            .resolve("veg manchurian")
            .await;
        assert_eq!(resolved.source, RecipeSource::Heuristic);
    }
}
