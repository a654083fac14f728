// ABOUTME: End-to-end estimation tests over the built-in tables
// ABOUTME: Result shape, total and percentage invariants, travel input forms, and degenerate orders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{engine_with, CountingRecipeLookup, FailingGeocoder, FailingRouter};
use foodprint::intelligence::{EmissionEngine, EmissionTables};
use foodprint::models::{
    EmissionResult, IngredientQuantityMap, RecipeSource, StructuredTravel, TravelInput,
};
use std::sync::Arc;

fn offline() -> EmissionEngine {
    EmissionEngine::offline(EmissionTables::shared())
}

fn assert_total_is_sum_of_parts(result: &EmissionResult) {
    let parts = EmissionResult::parse_field(&result.food)
        + EmissionResult::parse_field(&result.packaging)
        + EmissionResult::parse_field(&result.travel);
    let total = EmissionResult::parse_field(&result.total);
    assert!(
        (total - parts).abs() <= 0.01,
        "total {total} differs from parts {parts}"
    );
}

#[tokio::test]
async fn test_typical_order() {
    let result = offline()
        .compute(
            "2 x butter chicken, 1 x naan",
            &TravelInput::Distance(4.0),
            None,
        )
        .await;

    assert_eq!(result.details.dishes.len(), 2);
    assert_eq!(result.details.dish_count, 3);
    assert_eq!(result.details.packaging_size, "large");
    assert_eq!(result.travel_distance, "4.00");
    assert_eq!(result.transport_type, "motorbike");
    assert!(EmissionResult::parse_field(&result.food) > 0.0);
    assert!(result
        .details
        .dishes
        .iter()
        .all(|dish| dish.source == RecipeSource::StaticTable));
    assert_total_is_sum_of_parts(&result);
}

#[tokio::test]
async fn test_percentages_sum_to_hundred() {
    let result = offline()
        .compute(
            "1 x chicken biryani, 2 x dal makhani, 3 x garlic naan, 1 x gulab jamun",
            &TravelInput::Distance(2.0),
            Some("aluminium"),
        )
        .await;

    let sum: f64 = result
        .details
        .ingredients
        .values()
        .map(|ingredient| ingredient.percentage)
        .sum();
    assert!((sum - 100.0).abs() <= 0.5, "percentages sum to {sum}");
    assert_total_is_sum_of_parts(&result);
}

#[tokio::test]
async fn test_ingredients_merge_across_dishes() {
    let result = offline()
        .compute("1 x naan, 1 x butter naan", &TravelInput::Distance(0.0), None)
        .await;

    let flour = &result.details.ingredients["wheat flour"];
    let per_dish: f64 = result
        .details
        .dishes
        .iter()
        .filter_map(|dish| dish.ingredients.get("wheat flour"))
        .sum();
    assert!((flour.amount - per_dish).abs() < 1e-9);
}

#[tokio::test]
async fn test_unparseable_order_yields_zero_food() {
    let result = offline()
        .compute("just some words", &TravelInput::Distance(3.0), None)
        .await;

    assert_eq!(result.food, "0.00");
    assert_eq!(result.details.dish_count, 0);
    assert_eq!(result.details.skipped_clauses, 1);
    assert!(result.details.ingredients.is_empty());
    assert_eq!(result.packaging, "0.05");
    assert_total_is_sum_of_parts(&result);
}

#[tokio::test]
async fn test_structured_travel_with_explicit_factor() {
    let travel = TravelInput::Structured(StructuredTravel {
        distance: 10.0,
        transport_type: Some("car".to_owned()),
        emission_factor: Some(0.2),
    });
    let result = offline().compute("1 x idli", &travel, None).await;

    assert_eq!(result.transport_type, "car");
    assert_eq!(result.travel, "2.00");
}

#[tokio::test]
async fn test_structured_travel_uses_mode_factor() {
    let travel: TravelInput =
        serde_json::from_str(r#"{"distance": 10, "transportType": "bicycle"}"#).unwrap();
    let result = offline().compute("1 x idli", &travel, None).await;

    assert_eq!(result.transport_type, "bicycle");
    assert_eq!(result.travel, "0.00");
}

#[tokio::test]
async fn test_result_serializes_display_strings() {
    let result = offline()
        .compute("1 x rajma", &TravelInput::Distance(1.5), None)
        .await;
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["total"].is_string());
    assert_eq!(json["travelDistance"], "1.50");
    assert!(json["details"]["dishes"].is_array());
    assert!(json["details"].get("travelSource").is_none());
}

#[tokio::test]
async fn test_external_recipe_feeds_aggregation() {
    let lookup = CountingRecipeLookup::answering(Some(IngredientQuantityMap::from([
        ("Goat Meat".to_owned(), 200.0),
        ("Onions".to_owned(), 50.0),
    ])));
    let engine = engine_with(lookup.clone(), Arc::new(FailingGeocoder), Arc::new(FailingRouter));

    let result = engine
        .compute(
            "1 x laal maas, 1 x naan",
            &TravelInput::Distance(1.0),
            None,
        )
        .await;

    assert_eq!(lookup.call_count(), 1);
    assert_eq!(result.details.dishes[0].source, RecipeSource::ExternalLookup);
    assert_eq!(result.details.dishes[1].source, RecipeSource::StaticTable);
    assert!(result.details.ingredients.contains_key("mutton"));
    assert!(result.details.ingredients.contains_key("onion"));
}

#[tokio::test]
async fn test_concurrent_estimates_share_tables() {
    let engine = offline();
    let orders = ["1 x kheer", "2 x samosa", "3 x chicken curry"];
    let results = futures_util::future::join_all(
        orders
            .iter()
            .map(|order| engine.compute(order, &TravelInput::Distance(1.0), None)),
    )
    .await;
    let counts: Vec<u32> = results.iter().map(|r| r.details.dish_count).collect();
    assert_eq!(counts, vec![1, 2, 3]);
}
