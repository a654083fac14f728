// ABOUTME: Core types and constants for the Foodprint emission estimation platform
// ABOUTME: Foundation crate with error handling, the shared data model, and policy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

#![deny(unsafe_code)]

//! # Foodprint Core
//!
//! Foundation crate providing shared types and constants for the Foodprint
//! estimation engine. This crate performs no I/O and changes infrequently,
//! which keeps the engine and provider crates compiling incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Unit conversions and estimation policy constants
//! - **models**: Order lines, ingredient maps, travel inputs, and the emission result shape

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversions and estimation policy constants
pub mod constants;

/// Shared data model (orders, ingredients, travel, results)
pub mod models;
