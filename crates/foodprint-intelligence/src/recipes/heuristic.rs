// ABOUTME: Heuristic recipe estimator matching dish names against dish-family signals
// ABOUTME: Total over all inputs: unmatched dishes get the generic vegetable curry composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use crate::models::IngredientQuantityMap;
use crate::tables::DishFamilyTable;
use std::sync::Arc;
use tracing::debug;

/// Final recipe tier
#[derive(Debug, Clone)]
pub struct HeuristicEstimator {
    families: Arc<DishFamilyTable>,
}

impl HeuristicEstimator {
    /// Create an estimator over a family table
    #[must_use]
    pub const fn new(families: Arc<DishFamilyTable>) -> Self {
        Self { families }
    }

    /// Representative composition and the matched family name, if any
    #[must_use]
    pub fn estimate(&self, dish_name: &str) -> (IngredientQuantityMap, Option<String>) {
        if let Some(family) = self.families.classify(dish_name) {
            debug!(dish = dish_name, family = %family.name, "Dish family matched");
            return (family.composition.clone(), Some(family.name.clone()));
        }
        debug!(dish = dish_name, "No dish family matched, using generic default");
        (self.families.default_composition().clone(), None)
    }
}
