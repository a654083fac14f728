// ABOUTME: Collaborator interfaces the engine calls out to: recipe data, geocoding, routing
// ABOUTME: Disabled implementations back the offline engine and every fallback test
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

//! # Service Provider Interfaces
//!
//! The engine never talks to the network directly. HTTP-backed implementations
//! live in the providers crate; anything implementing these traits can be
//! injected through [`crate::engine::Collaborators`].

use crate::errors::{AppError, AppResult};
use crate::models::{Coordinates, IngredientQuantityMap, RoutingProfile};
use async_trait::async_trait;

/// External recipe data source (second recipe tier)
#[async_trait]
pub trait RecipeDataLookup: Send + Sync {
    /// Whether the lookup should be attempted at all
    fn is_enabled(&self) -> bool {
        true
    }

    /// Ingredient grams for one serving of `dish_name`.
    ///
    /// `Ok(None)` signals the source has nothing for this dish.
    ///
    /// # Errors
    ///
    /// Any transport or decoding failure; the resolver treats it like `Ok(None)`.
    async fn lookup(&self, dish_name: &str) -> AppResult<Option<IngredientQuantityMap>>;
}

/// Forward geocoder from free-text address to coordinates
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Coordinates of `address`, `Ok(None)` when nothing matched
    ///
    /// # Errors
    ///
    /// Transport or decoding failure.
    async fn geocode(&self, address: &str) -> AppResult<Option<Coordinates>>;
}

/// Road or path router
#[async_trait]
pub trait Router: Send + Sync {
    /// Route length in meters
    ///
    /// # Errors
    ///
    /// No route found, or transport/decoding failure.
    async fn route(
        &self,
        from: Coordinates,
        to: Coordinates,
        profile: RoutingProfile,
    ) -> AppResult<f64>;
}

/// Recipe lookup that never has data
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRecipeLookup;

#[async_trait]
impl RecipeDataLookup for DisabledRecipeLookup {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn lookup(&self, _dish_name: &str) -> AppResult<Option<IngredientQuantityMap>> {
        Ok(None)
    }
}

/// Geocoder that never finds an address
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGeocoder;

#[async_trait]
impl Geocoder for DisabledGeocoder {
    async fn geocode(&self, _address: &str) -> AppResult<Option<Coordinates>> {
        Ok(None)
    }
}

/// Router that always fails
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRouter;

#[async_trait]
impl Router for DisabledRouter {
    async fn route(
        &self,
        _from: Coordinates,
        _to: Coordinates,
        _profile: RoutingProfile,
    ) -> AppResult<f64> {
        Err(AppError::external_service("router", "routing is disabled"))
    }
}
