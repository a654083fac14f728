// ABOUTME: Engine facade wiring tables, collaborators, and timeouts into every component
// ABOUTME: Exposes compute for caller-supplied travel and estimate for address-based travel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use crate::aggregator::Aggregator;
use crate::emission_factors::EmissionFactorResolver;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Coordinates, EmissionResult, StructuredTravel, TravelInput, TravelResolution, TravelSource,
};
use crate::normalizer::NameNormalizer;
use crate::packaging::PackagingEmissionModel;
use crate::parser::DishStringParser;
use crate::recipes::{HeuristicEstimator, RecipeResolver};
use crate::spi::{
    DisabledGeocoder, DisabledRecipeLookup, DisabledRouter, Geocoder, RecipeDataLookup, Router,
};
use crate::tables::EmissionTables;
use crate::timeouts::EngineTimeouts;
use crate::travel::TravelDistanceResolver;
use futures_util::future::join;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

/// External collaborators injected into the engine
#[derive(Clone)]
pub struct Collaborators {
    /// Second recipe tier
    pub recipe_lookup: Arc<dyn RecipeDataLookup>,
    /// Origin address geocoder
    pub geocoder: Arc<dyn Geocoder>,
    /// Delivery router
    pub router: Arc<dyn Router>,
}

impl Collaborators {
    /// Collaborators that never reach the network
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            recipe_lookup: Arc::new(DisabledRecipeLookup),
            geocoder: Arc::new(DisabledGeocoder),
            router: Arc::new(DisabledRouter),
        }
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Address-based estimate request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEstimateRequest {
    /// Dish string, e.g. `2 x butter chicken, 1 x naan`
    pub dishes: String,
    /// Restaurant address to geocode
    #[serde(default)]
    pub origin_address: Option<String>,
    /// Delivery coordinates
    #[serde(default)]
    pub destination: Option<Coordinates>,
    /// Transport mode
    #[serde(default)]
    pub transport_type: Option<String>,
    /// Known distance in km; skips geocoding and routing when present
    #[serde(default)]
    pub distance_km: Option<f64>,
    /// Packaging type
    #[serde(default)]
    pub packaging_type: Option<String>,
}

impl OrderEstimateRequest {
    /// Boundary validation; the engine itself never rejects a request
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank dish string and
    /// `ValueOutOfRange` for a negative or non-finite distance.
    pub fn validate(&self) -> AppResult<()> {
        if self.dishes.trim().is_empty() {
            return Err(AppError::missing_field("dishes"));
        }
        if let Some(distance) = self.distance_km {
            TravelInput::Distance(distance).validate()?;
        }
        Ok(())
    }
}

/// Emission estimation engine
#[derive(Clone)]
pub struct EmissionEngine {
    tables: Arc<EmissionTables>,
    aggregator: Aggregator,
    travel: TravelDistanceResolver,
}

impl EmissionEngine {
    /// Wire every component from tables, collaborators, and timeouts
    #[must_use]
    pub fn new(
        tables: Arc<EmissionTables>,
        collaborators: Collaborators,
        timeouts: EngineTimeouts,
    ) -> Self {
        let normalizer = NameNormalizer::new(Arc::clone(&tables.normalization));
        let factors = EmissionFactorResolver::new(
            normalizer.clone(),
            Arc::clone(&tables.emission_factors),
            Arc::clone(&tables.categories),
        );
        let recipes = RecipeResolver::new(
            Arc::clone(&tables.recipes),
            collaborators.recipe_lookup,
            normalizer,
            HeuristicEstimator::new(Arc::clone(&tables.dish_families)),
            timeouts.recipe_lookup,
        );
        let aggregator = Aggregator::new(
            DishStringParser::new(),
            recipes,
            factors,
            PackagingEmissionModel::new(Arc::clone(&tables.packaging)),
            Arc::clone(&tables.travel),
        );
        let travel = TravelDistanceResolver::new(
            Arc::clone(&tables.travel),
            collaborators.geocoder,
            collaborators.router,
            timeouts,
        );
        Self {
            tables,
            aggregator,
            travel,
        }
    }

    /// Engine with every collaborator disabled
    #[must_use]
    pub fn offline(tables: Arc<EmissionTables>) -> Self {
        Self::new(tables, Collaborators::disabled(), EngineTimeouts::default())
    }

    /// Estimate with caller-supplied travel
    pub async fn compute(
        &self,
        dish_string: &str,
        travel: &TravelInput,
        packaging_type: Option<&str>,
    ) -> EmissionResult {
        self.aggregator
            .compute(dish_string, travel, packaging_type)
            .await
    }

    /// Resolve delivery distance from an origin address and destination
    pub async fn resolve_travel(
        &self,
        origin_address: Option<&str>,
        destination: Option<Coordinates>,
        transport_type: Option<&str>,
    ) -> TravelResolution {
        self.travel
            .resolve(origin_address, destination, transport_type)
            .await
    }

    /// Estimate an order, resolving travel unless a distance is given.
    ///
    /// Food aggregation and travel resolution run concurrently.
    #[instrument(skip(self, request), fields(dishes = %request.dishes))]
    pub async fn estimate(&self, request: &OrderEstimateRequest) -> EmissionResult {
        let packaging_type = request.packaging_type.as_deref();

        let result = if let Some(distance) = request.distance_km {
            let travel = TravelInput::Structured(StructuredTravel {
                distance,
                transport_type: request.transport_type.clone(),
                emission_factor: None,
            });
            let food = self.aggregator.aggregate_food(&request.dishes).await;
            self.aggregator.assemble(
                food,
                &travel,
                Some(TravelSource::ExplicitDistance),
                packaging_type,
            )
        } else {
            let (food, resolution) = join(
                self.aggregator.aggregate_food(&request.dishes),
                self.resolve_travel(
                    request.origin_address.as_deref(),
                    request.destination,
                    request.transport_type.as_deref(),
                ),
            )
            .await;
            let source = resolution.source;
            self.aggregator.assemble(
                food,
                &TravelInput::from(resolution),
                Some(source),
                packaging_type,
            )
        };

        info!(
            total = %result.total,
            food = %result.food,
            packaging = %result.packaging,
            travel = %result.travel,
            "Order estimate complete"
        );
        result
    }

    /// Tables this engine reads
    #[must_use]
    pub const fn tables(&self) -> &Arc<EmissionTables> {
        &self.tables
    }

    /// Aggregator component
    #[must_use]
    pub const fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }
}
