// ABOUTME: Emission estimation engine for food-delivery orders
// ABOUTME: Parses dish strings, resolves recipes and factors, and aggregates attributable totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

#![deny(unsafe_code)]

//! # Foodprint Intelligence
//!
//! The estimation engine. Every component receives its lookup tables and
//! external collaborators through its constructor, so tests can substitute
//! tables and fakes freely.
//!
//! Control flow for one order:
//!
//! ```text
//! dish string ─► DishStringParser ─► OrderLine*
//!                                      │ (concurrently per line)
//!                                      ▼
//!                              RecipeResolver ─► static table │ external lookup │ heuristic
//!                                      │
//!                                      ▼
//!                 NameNormalizer + EmissionFactorResolver ─► per-dish emission
//!                                      │ (collect, then merge)
//!                                      ▼
//!        PackagingEmissionModel ─► Aggregator ◄─ TravelDistanceResolver
//!                                      │
//!                                      ▼
//!                               EmissionResult
//! ```
//!
//! No public entry point returns an error: lookups degrade to deterministic
//! defaults and external calls are bounded by [`EngineTimeouts`].

// Re-export foundation modules so engine code can `use crate::errors::*`
pub use foodprint_core::constants;
pub use foodprint_core::errors;
pub use foodprint_core::models;

/// Order aggregation into the final emission breakdown
pub mod aggregator;
/// Ingredient emission factor resolution with category heuristics
pub mod emission_factors;
/// Engine facade wiring every component together
pub mod engine;
/// Ingredient name canonicalisation
pub mod normalizer;
/// Packaging emission model
pub mod packaging;
/// Dish string parsing
pub mod parser;
/// Recipe resolution (static table, external lookup, heuristic)
pub mod recipes;
/// Collaborator interfaces for recipe lookup, geocoding, and routing
pub mod spi;
/// Immutable lookup tables injected into the components
pub mod tables;
/// Deadline handling for external calls
pub mod timeouts;
/// Travel distance resolution with geocoding and routing fallback
pub mod travel;

pub use aggregator::{Aggregator, FoodBreakdown};
pub use emission_factors::{EmissionFactorResolver, FactorMatch, FactorResolution};
pub use engine::{Collaborators, EmissionEngine, OrderEstimateRequest};
pub use normalizer::NameNormalizer;
pub use packaging::{PackagingEmission, PackagingEmissionModel};
pub use parser::{DishStringParser, ParseReport};
pub use recipes::{HeuristicEstimator, RecipeResolver, ResolvedRecipe};
pub use spi::{
    DisabledGeocoder, DisabledRecipeLookup, DisabledRouter, Geocoder, RecipeDataLookup, Router,
};
pub use tables::EmissionTables;
pub use timeouts::{with_deadline, EngineTimeouts};
pub use travel::TravelDistanceResolver;
