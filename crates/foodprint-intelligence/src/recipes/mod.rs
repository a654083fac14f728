// ABOUTME: Recipe resolution module: static table, external lookup, and heuristic tiers
// ABOUTME: Resolution always terminates in a non-empty ingredient map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

/// Keyword dish-family estimator (final tier)
pub mod heuristic;
/// Tiered resolver
pub mod resolver;

pub use heuristic::HeuristicEstimator;
pub use resolver::{RecipeResolver, ResolvedRecipe};
