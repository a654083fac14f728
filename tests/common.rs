// ABOUTME: Shared collaborator fakes and engine builders for integration tests
// ABOUTME: Counting, failing, and slow recipe lookups, geocoders, and routers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `foodprint`

use async_trait::async_trait;
use foodprint::errors::{AppError, AppResult};
use foodprint::intelligence::spi::{Geocoder, RecipeDataLookup, Router};
use foodprint::intelligence::{Collaborators, EmissionEngine, EmissionTables, EngineTimeouts};
use foodprint::models::{Coordinates, IngredientQuantityMap, RoutingProfile};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recipe lookup returning a fixed answer and counting calls
pub struct CountingRecipeLookup {
    pub calls: AtomicUsize,
    pub answer: Option<IngredientQuantityMap>,
}

impl CountingRecipeLookup {
    pub fn answering(answer: Option<IngredientQuantityMap>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            answer,
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeDataLookup for CountingRecipeLookup {
    async fn lookup(&self, _dish_name: &str) -> AppResult<Option<IngredientQuantityMap>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }
}

/// Recipe lookup that always errors
pub struct FailingRecipeLookup;

#[async_trait]
impl RecipeDataLookup for FailingRecipeLookup {
    async fn lookup(&self, _dish_name: &str) -> AppResult<Option<IngredientQuantityMap>> {
        Err(AppError::external_service("recipes", "503 Service Unavailable"))
    }
}

/// Recipe lookup that never answers in time
pub struct SlowRecipeLookup;

#[async_trait]
impl RecipeDataLookup for SlowRecipeLookup {
    async fn lookup(&self, _dish_name: &str) -> AppResult<Option<IngredientQuantityMap>> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Some(IngredientQuantityMap::from([("beef".to_owned(), 500.0)])))
    }
}

/// Geocoder with a canned answer
pub struct StaticGeocoder(pub Option<Coordinates>);

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn geocode(&self, _address: &str) -> AppResult<Option<Coordinates>> {
        Ok(self.0)
    }
}

/// Geocoder that always errors
pub struct FailingGeocoder;

#[async_trait]
impl Geocoder for FailingGeocoder {
    async fn geocode(&self, _address: &str) -> AppResult<Option<Coordinates>> {
        Err(AppError::external_service("geocoder", "connection refused"))
    }
}

/// Geocoder that never answers in time
pub struct SlowGeocoder;

#[async_trait]
impl Geocoder for SlowGeocoder {
    async fn geocode(&self, _address: &str) -> AppResult<Option<Coordinates>> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Some(restaurant()))
    }
}

/// Router returning a fixed distance and recording requested profiles
#[derive(Default)]
pub struct FixedRouter {
    pub meters: f64,
    pub profiles: Mutex<Vec<RoutingProfile>>,
}

impl FixedRouter {
    pub fn meters(meters: f64) -> Arc<Self> {
        Arc::new(Self {
            meters,
            profiles: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Router for FixedRouter {
    async fn route(
        &self,
        _from: Coordinates,
        _to: Coordinates,
        profile: RoutingProfile,
    ) -> AppResult<f64> {
        self.profiles.lock().unwrap().push(profile);
        Ok(self.meters)
    }
}

/// Router that always errors
pub struct FailingRouter;

#[async_trait]
impl Router for FailingRouter {
    async fn route(
        &self,
        _from: Coordinates,
        _to: Coordinates,
        _profile: RoutingProfile,
    ) -> AppResult<f64> {
        Err(AppError::external_service("router", "NoRoute"))
    }
}

/// Router that never answers in time
pub struct SlowRouter;

#[async_trait]
impl Router for SlowRouter {
    async fn route(
        &self,
        _from: Coordinates,
        _to: Coordinates,
        _profile: RoutingProfile,
    ) -> AppResult<f64> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(1_000.0)
    }
}

/// Restaurant coordinates used by the geocoder fakes
pub fn restaurant() -> Coordinates {
    Coordinates::new(12.9716, 77.5946).unwrap()
}

/// Customer coordinates
pub fn customer() -> Coordinates {
    Coordinates::new(12.9352, 77.6245).unwrap()
}

/// Deadlines short enough for tests
pub fn short_timeouts() -> EngineTimeouts {
    EngineTimeouts {
        recipe_lookup: Duration::from_millis(50),
        geocoding: Duration::from_millis(50),
        routing: Duration::from_millis(50),
    }
}

/// Engine over the built-in tables with the given collaborators
pub fn engine_with(
    recipe_lookup: Arc<dyn RecipeDataLookup>,
    geocoder: Arc<dyn Geocoder>,
    router: Arc<dyn Router>,
) -> EmissionEngine {
    EmissionEngine::new(
        EmissionTables::shared(),
        Collaborators {
            recipe_lookup,
            geocoder,
            router,
        },
        short_timeouts(),
    )
}
