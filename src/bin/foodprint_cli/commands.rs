// ABOUTME: Subcommand implementations for the Foodprint CLI
// ABOUTME: Argument validation happens here, before the engine sees the request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use crate::EstimateArgs;
use anyhow::Result;
use foodprint::bootstrap::{build_engine, build_offline_engine, build_tables};
use foodprint::config::FoodprintConfig;
use foodprint::errors::{AppError, AppResult};
use foodprint::intelligence::engine::OrderEstimateRequest;
use foodprint::models::Coordinates;
use serde::Serialize;
use serde_json::json;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Run `estimate`
pub async fn estimate(args: &EstimateArgs) -> Result<()> {
    let request = build_request(args)?;
    let config = FoodprintConfig::from_env()?;
    let engine = if args.offline {
        build_offline_engine(&config.policy)?
    } else {
        build_engine(&config)?
    };

    let request_id = Uuid::new_v4();
    let span = info_span!("estimate", %request_id, offline = args.offline);
    let result = engine.estimate(&request).instrument(span).await;
    info!(%request_id, total = %result.total, "Estimate finished");

    print_json(&result, args.pretty)
}

/// Run `tables`
pub fn tables(pretty: bool) -> Result<()> {
    let config = FoodprintConfig::from_env()?;
    let tables = build_tables(&config.policy)?;
    let listing = json!({
        "dishes": tables.recipes.dish_names(),
        "ingredients": tables.emission_factors.names(),
        "transportModes": tables.travel.modes(),
        "defaultTransport": tables.travel.default_mode(),
        "packagingTypes": tables.packaging.types(),
        "defaultPackaging": tables.packaging.default_type(),
    });
    print_json(&listing, pretty)
}

fn build_request(args: &EstimateArgs) -> AppResult<OrderEstimateRequest> {
    let destination = match (args.dest_lat, args.dest_lng) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)?),
        (None, None) => None,
        _ => {
            return Err(AppError::invalid_input(
                "--dest-lat and --dest-lng must be given together",
            ))
        }
    };
    let request = OrderEstimateRequest {
        dishes: args.dishes.clone(),
        origin_address: args.origin.clone(),
        destination,
        transport_type: args.transport.clone(),
        distance_km: args.distance,
        packaging_type: args.packaging.clone(),
    };
    request.validate()?;
    Ok(request)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
