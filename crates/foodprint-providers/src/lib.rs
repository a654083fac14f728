// ABOUTME: HTTP implementations of the engine's collaborator traits
// ABOUTME: Nominatim forward geocoding, OSRM routing, and OpenAI-compatible recipe lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

#![deny(unsafe_code)]

//! # Foodprint Providers
//!
//! Every provider shares the pooled client from [`http_client::shared_client`]
//! and maps transport, status, and decoding failures to `AppError`s in the
//! 5000 range. The engine wraps each call in its own deadline and falls back
//! on any error, so providers never retry.

/// Shared pooled HTTP client and status mapping
pub mod http_client;
/// OpenAI-compatible LLM recipe lookup
pub mod llm_recipe;
/// Nominatim forward geocoder
pub mod nominatim;
/// OSRM router
pub mod osrm;

pub use http_client::{initialize_shared_client, shared_client};
pub use llm_recipe::{LlmRecipeConfig, LlmRecipeLookup};
pub use nominatim::NominatimGeocoder;
pub use osrm::OsrmRouter;
