// ABOUTME: Integration tests for packaging emissions as part of a full estimate
// ABOUTME: Size thresholds, type fallback, and the fixed per-order overhead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use foodprint::intelligence::tables::PackagingProfileTable;
use foodprint::intelligence::{EmissionEngine, EmissionTables, PackagingEmissionModel};
use foodprint::models::TravelInput;
use std::sync::Arc;

#[tokio::test]
async fn test_three_dishes_use_large_packaging() {
    let engine = EmissionEngine::offline(EmissionTables::shared());
    let result = engine
        .compute(
            "1 x dal fry, 1 x naan, 1 x raita",
            &TravelInput::Distance(0.0),
            None,
        )
        .await;

    assert_eq!(result.details.dish_count, 3);
    assert_eq!(result.details.packaging_size, "large");
    assert_eq!(result.details.packaging_type, "plastic");
    // 0.18 * 3 + 0.05
    assert_eq!(result.packaging, "0.59");
}

#[tokio::test]
async fn test_two_dishes_stay_medium() {
    let engine = EmissionEngine::offline(EmissionTables::shared());
    let result = engine
        .compute("2 x naan", &TravelInput::Distance(0.0), Some("paper"))
        .await;

    assert_eq!(result.details.packaging_size, "medium");
    assert_eq!(result.details.packaging_type, "paper");
    // 0.08 * 2 + 0.05
    assert_eq!(result.packaging, "0.21");
}

#[tokio::test]
async fn test_unknown_packaging_type_uses_default() {
    let engine = EmissionEngine::offline(EmissionTables::shared());
    let result = engine
        .compute("1 x samosa", &TravelInput::Distance(0.0), Some("glass"))
        .await;
    assert_eq!(result.details.packaging_type, "plastic");
    assert_eq!(result.packaging, "0.17");
}

#[test]
fn test_empty_order_pays_only_overhead() {
    let model = PackagingEmissionModel::new(Arc::new(PackagingProfileTable::builtin()));
    let packaging = model.compute(0, None, None);
    assert!((packaging.emission - 0.05).abs() < 1e-9);
}
