// ABOUTME: Shared data model for order estimation
// ABOUTME: Order lines, ingredient maps, travel inputs, and the emission result shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

/// Order lines and ingredient quantity maps
pub mod order;
/// Emission result shape and display formatting
pub mod result;
/// Coordinates, travel inputs, and travel resolutions
pub mod travel;

pub use order::{IngredientQuantityMap, OrderLine, RecipeSource};
pub use result::{
    format_display, round_display, DishEmission, EmissionDetails, EmissionResult,
    IngredientEmission,
};
pub use travel::{
    Coordinates, RoutingProfile, StructuredTravel, TravelInput, TravelResolution, TravelSource,
};
