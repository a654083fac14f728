// ABOUTME: Integration tests for tiered recipe resolution
// ABOUTME: Static table short-circuit, external lookup normalization, failure and timeout fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{CountingRecipeLookup, FailingRecipeLookup, SlowRecipeLookup};
use foodprint::intelligence::spi::RecipeDataLookup;
use foodprint::intelligence::tables::{DishFamilyTable, NormalizationTable, RecipeTable};
use foodprint::intelligence::{HeuristicEstimator, NameNormalizer, RecipeResolver};
use foodprint::models::{IngredientQuantityMap, RecipeSource};
use std::sync::Arc;
use std::time::Duration;

fn resolver(lookup: Arc<dyn RecipeDataLookup>) -> RecipeResolver {
    RecipeResolver::new(
        Arc::new(RecipeTable::builtin()),
        lookup,
        NameNormalizer::new(Arc::new(NormalizationTable::builtin())),
        HeuristicEstimator::new(Arc::new(DishFamilyTable::builtin())),
        Duration::from_millis(50),
    )
}

#[tokio::test]
async fn test_known_dish_skips_external_lookup() {
    let lookup = CountingRecipeLookup::answering(Some(IngredientQuantityMap::from([(
        "beef".to_owned(),
        999.0,
    )])));
    let resolved = resolver(lookup.clone()).resolve("Dal Fry").await;

    assert_eq!(resolved.source, RecipeSource::StaticTable);
    assert_eq!(&resolved.ingredients, RecipeTable::builtin().get("dal fry").unwrap());
    assert_eq!(lookup.call_count(), 0);
}

#[tokio::test]
async fn test_unknown_dish_uses_external_lookup() {
    let lookup = CountingRecipeLookup::answering(Some(IngredientQuantityMap::from([
        ("Cottage Cheese".to_owned(), 120.0),
        ("Capsicum".to_owned(), 60.0),
    ])));
    let resolved = resolver(lookup.clone()).resolve("paneer tikka").await;

    assert_eq!(resolved.source, RecipeSource::ExternalLookup);
    assert_eq!(resolved.ingredients.get("paneer"), Some(&120.0));
    assert_eq!(resolved.ingredients.get("capsicum"), Some(&60.0));
    assert_eq!(lookup.call_count(), 1);
}

#[tokio::test]
async fn test_failing_lookup_falls_through_to_heuristic() {
    let resolved = resolver(Arc::new(FailingRecipeLookup))
        .resolve("unicorn stew")
        .await;
    assert_eq!(resolved.source, RecipeSource::Heuristic);
    assert!(!resolved.ingredients.is_empty());
}

#[tokio::test]
async fn test_unavailable_lookup_falls_through_to_heuristic() {
    let lookup = CountingRecipeLookup::answering(None);
    let resolved = resolver(lookup.clone()).resolve("mutton keema pulao").await;
    assert_eq!(resolved.source, RecipeSource::Heuristic);
    assert_eq!(resolved.family.as_deref(), Some("meat rice"));
    assert_eq!(lookup.call_count(), 1);
}

#[tokio::test]
async fn test_timed_out_lookup_falls_through_to_heuristic() {
    let resolved = resolver(Arc::new(SlowRecipeLookup))
        .resolve("chicken chettinad")
        .await;
    assert_eq!(resolved.source, RecipeSource::Heuristic);
    assert!(!resolved.ingredients.contains_key("beef"));
    assert!(resolved.ingredients.contains_key("chicken"));
}

#[tokio::test]
async fn test_heuristic_keeps_protein_in_carb_dishes() {
    let lookup = CountingRecipeLookup::answering(None);
    let resolver = resolver(lookup);

    let biryani = resolver.resolve("prawn biryani").await;
    assert_eq!(biryani.family.as_deref(), Some("seafood rice"));
    assert!(biryani.ingredients.contains_key("fish"));
    assert!(biryani.ingredients.contains_key("rice"));

    let noodles = resolver.resolve("chicken hakka noodles").await;
    assert_eq!(noodles.family.as_deref(), Some("chicken noodles"));
    assert!(noodles.ingredients.contains_key("chicken"));
    assert!(noodles.ingredients.contains_key("noodles"));
}
