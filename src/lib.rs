// ABOUTME: Foodprint library root: configuration, logging, and engine bootstrap
// ABOUTME: Re-exports the core, engine, and provider crates under one namespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

#![deny(unsafe_code)]

//! # Foodprint
//!
//! Greenhouse-gas footprint estimation for food-delivery orders.
//!
//! ```rust,no_run
//! use foodprint::intelligence::{EmissionEngine, EmissionTables};
//! use foodprint::models::TravelInput;
//!
//! # async fn example() {
//! let engine = EmissionEngine::offline(EmissionTables::shared());
//! let result = engine
//!     .compute("2 x butter chicken, 1 x naan", &TravelInput::Distance(4.0), None)
//!     .await;
//! println!("{} kg CO2e", result.total);
//! # }
//! ```

pub use foodprint_core::{constants, errors, models};
pub use foodprint_intelligence as intelligence;
pub use foodprint_providers as providers;

/// Engine construction from configuration
pub mod bootstrap;
/// Environment configuration
pub mod config;
/// Tracing subscriber setup
pub mod logging;
