// ABOUTME: Aggregates per-dish ingredient emissions, packaging, and travel into the emission result
// ABOUTME: Dishes resolve concurrently; merging into order totals happens afterwards on one task
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

//! # Aggregator
//!
//! Food emission is derived from the cumulative ingredient map, and every
//! ingredient factor is resolved once per call and reused for both the
//! per-dish and the cumulative math. Ingredient percentages therefore sum to
//! 100 at full precision before display rounding.
//!
//! `total` is the sum of the already-rounded components, so the displayed
//! total always equals the displayed parts.

use crate::constants::units::{GRAMS_PER_KG, PERCENT};
use crate::emission_factors::EmissionFactorResolver;
use crate::models::{
    format_display, round_display, DishEmission, EmissionDetails, EmissionResult,
    IngredientEmission, IngredientQuantityMap, OrderLine, TravelInput, TravelSource,
};
use crate::packaging::PackagingEmissionModel;
use crate::parser::DishStringParser;
use crate::recipes::{RecipeResolver, ResolvedRecipe};
use crate::tables::{table_key, TravelProfileTable};
use futures_util::future::join_all;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Food side of an order, before packaging and travel are applied
#[derive(Debug, Clone, PartialEq)]
pub struct FoodBreakdown {
    /// kg CO2e at full precision
    pub food_emission: f64,
    /// One entry per order line
    pub dishes: Vec<DishEmission>,
    /// Cumulative ingredients with their share of `food_emission`
    pub ingredients: BTreeMap<String, IngredientEmission>,
    /// Sum of order line counts
    pub dish_count: u32,
    /// Clauses the parser dropped
    pub skipped_clauses: usize,
}

/// Combines food, packaging, and travel into an [`EmissionResult`]
#[derive(Clone)]
pub struct Aggregator {
    parser: DishStringParser,
    recipes: RecipeResolver,
    factors: EmissionFactorResolver,
    packaging: PackagingEmissionModel,
    travel_profiles: Arc<TravelProfileTable>,
}

/// Factors resolved during one aggregation, keyed by ingredient name
struct FactorCache<'a> {
    resolver: &'a EmissionFactorResolver,
    factors: HashMap<String, f64>,
}

impl<'a> FactorCache<'a> {
    fn new(resolver: &'a EmissionFactorResolver) -> Self {
        Self {
            resolver,
            factors: HashMap::new(),
        }
    }

    fn factor(&mut self, ingredient: &str) -> f64 {
        if let Some(factor) = self.factors.get(ingredient) {
            return *factor;
        }
        let factor = self.resolver.resolve(ingredient);
        self.factors.insert(ingredient.to_owned(), factor);
        factor
    }
}

impl Aggregator {
    /// Create an aggregator from its components
    #[must_use]
    pub const fn new(
        parser: DishStringParser,
        recipes: RecipeResolver,
        factors: EmissionFactorResolver,
        packaging: PackagingEmissionModel,
        travel_profiles: Arc<TravelProfileTable>,
    ) -> Self {
        Self {
            parser,
            recipes,
            factors,
            packaging,
            travel_profiles,
        }
    }

    /// Full estimate for a dish string with caller-supplied travel
    pub async fn compute(
        &self,
        dish_string: &str,
        travel: &TravelInput,
        packaging_type: Option<&str>,
    ) -> EmissionResult {
        let food = self.aggregate_food(dish_string).await;
        self.assemble(food, travel, None, packaging_type)
    }

    /// Parse, resolve every dish concurrently, then merge
    #[instrument(skip(self))]
    pub async fn aggregate_food(&self, dish_string: &str) -> FoodBreakdown {
        let report = self.parser.parse_with_report(dish_string);
        let resolved: Vec<ResolvedRecipe> = join_all(
            report
                .lines
                .iter()
                .map(|line| self.recipes.resolve(&line.dish_name)),
        )
        .await;

        let breakdown = self.merge(&report.lines, resolved, report.skipped.len());
        info!(
            dishes = breakdown.dishes.len(),
            dish_count = breakdown.dish_count,
            food_emission = breakdown.food_emission,
            "Food emission aggregated"
        );
        breakdown
    }

    /// Add packaging and travel to a food breakdown and format the result
    #[must_use]
    pub fn assemble(
        &self,
        food: FoodBreakdown,
        travel: &TravelInput,
        travel_source: Option<TravelSource>,
        packaging_type: Option<&str>,
    ) -> EmissionResult {
        let packaging = self.packaging.compute(
            food.dish_count,
            packaging_type,
            Some(PackagingEmissionModel::size_for(food.dish_count)),
        );

        let distance_km = travel.distance_km();
        let (transport_type, per_km) = self.travel_terms(travel);
        let travel_emission = distance_km * per_km;

        let total = round_display(food.food_emission)
            + round_display(packaging.emission)
            + round_display(travel_emission);
        debug!(
            food = food.food_emission,
            packaging = packaging.emission,
            travel = travel_emission,
            total,
            "Emission result assembled"
        );

        EmissionResult {
            food: format_display(food.food_emission),
            packaging: format_display(packaging.emission),
            travel: format_display(travel_emission),
            travel_distance: format_display(distance_km),
            transport_type,
            total: format_display(total),
            details: EmissionDetails {
                dishes: food.dishes,
                ingredients: food.ingredients,
                dish_count: food.dish_count,
                packaging_type: packaging.packaging_type,
                packaging_size: packaging.packaging_size,
                travel_source,
                skipped_clauses: food.skipped_clauses,
            },
        }
    }

    fn merge(
        &self,
        lines: &[OrderLine],
        resolved: Vec<ResolvedRecipe>,
        skipped_clauses: usize,
    ) -> FoodBreakdown {
        let mut cache = FactorCache::new(&self.factors);
        let mut cumulative = IngredientQuantityMap::new();
        let mut dishes = Vec::with_capacity(lines.len());
        let mut dish_count: u32 = 0;

        for (line, recipe) in lines.iter().zip(resolved) {
            let count = f64::from(line.count);
            let per_serving: f64 = recipe
                .ingredients
                .iter()
                .map(|(name, grams)| grams / GRAMS_PER_KG * cache.factor(name))
                .sum();
            for (name, grams) in &recipe.ingredients {
                *cumulative.entry(name.clone()).or_insert(0.0) += grams * count;
            }
            dish_count = dish_count.saturating_add(line.count);
            dishes.push(DishEmission {
                name: line.dish_name.clone(),
                count: line.count,
                emission: round_display(per_serving),
                total_emission: round_display(per_serving * count),
                ingredients: recipe.ingredients,
                source: recipe.source,
            });
        }

        let emissions: Vec<(String, f64, f64)> = cumulative
            .into_iter()
            .map(|(name, grams)| {
                let emission = grams / GRAMS_PER_KG * cache.factor(&name);
                (name, grams, emission)
            })
            .collect();
        let food_emission: f64 = emissions.iter().map(|(_, _, e)| e).sum();

        let ingredients = emissions
            .into_iter()
            .map(|(name, grams, emission)| {
                let percentage = if food_emission > 0.0 {
                    emission / food_emission * PERCENT
                } else {
                    0.0
                };
                (
                    name,
                    IngredientEmission {
                        amount: round_display(grams),
                        emission: round_display(emission),
                        percentage: round_display(percentage),
                    },
                )
            })
            .collect();

        FoodBreakdown {
            food_emission,
            dishes,
            ingredients,
            dish_count,
            skipped_clauses,
        }
    }

    /// Factor resolver used for every ingredient
    #[must_use]
    pub const fn factors(&self) -> &EmissionFactorResolver {
        &self.factors
    }

    /// Transport label and per-km factor for a travel input.
    ///
    /// Both input shapes share the travel table's default mode as their
    /// fallback.
    fn travel_terms(&self, travel: &TravelInput) -> (String, f64) {
        let default_mode = self.travel_profiles.default_mode().to_owned();
        let default_factor = self.travel_profiles.default_profile().factor;
        match travel {
            TravelInput::Distance(_) => (default_mode, default_factor),
            TravelInput::Structured(structured) => {
                let requested = structured
                    .transport_type
                    .as_deref()
                    .map(table_key)
                    .filter(|mode| !mode.is_empty());
                let factor = structured
                    .emission_factor
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .or_else(|| {
                        requested
                            .as_deref()
                            .and_then(|mode| self.travel_profiles.get(mode))
                            .map(|profile| profile.factor)
                    })
                    .unwrap_or(default_factor);
                (requested.unwrap_or(default_mode), factor)
            }
        }
    }
}
