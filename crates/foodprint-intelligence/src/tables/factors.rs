// ABOUTME: Exact ingredient emission factors in kg CO2e per kg of ingredient
// ABOUTME: Keyed by canonical ingredient name; misses fall through to category heuristics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use super::{checked_factor, table_key};
use crate::errors::AppResult;
use std::collections::HashMap;

/// Built-in factors (kg CO2e per kg), advisory life-cycle averages
const BUILTIN_FACTORS: &[(&str, f64)] = &[
    // === Meat & Seafood ===
    ("beef", 60.0),
    ("mutton", 39.7),
    ("lamb", 39.7),
    ("pork", 7.2),
    ("chicken", 6.9),
    ("fish", 5.4),
    ("prawns", 26.9),
    ("egg", 4.7),
    // === Dairy ===
    ("paneer", 8.5),
    ("cheese", 21.2),
    ("butter", 11.5),
    ("ghee", 12.0),
    ("cream", 5.6),
    ("milk", 3.2),
    ("yogurt", 2.5),
    ("khoa", 8.0),
    // === Grains ===
    ("rice", 4.5),
    ("wheat flour", 1.4),
    ("bread", 1.6),
    ("semolina", 1.4),
    ("noodles", 1.7),
    ("pasta", 1.7),
    ("oats", 2.5),
    ("corn", 1.1),
    // === Legumes ===
    ("lentils", 0.9),
    ("chickpeas", 0.8),
    ("kidney beans", 0.8),
    ("peas", 1.0),
    ("tofu", 3.0),
    ("soy sauce", 1.2),
    // === Oils, Nuts ===
    ("vegetable oil", 3.3),
    ("olive oil", 5.4),
    ("mustard oil", 3.0),
    ("coconut", 1.5),
    ("cashews", 2.3),
    ("almonds", 2.3),
    ("peanuts", 3.2),
    // === Vegetables & Fruit ===
    ("potato", 0.5),
    ("onion", 0.5),
    ("tomato", 2.1),
    ("garlic", 0.6),
    ("ginger", 0.9),
    ("green chilli", 0.8),
    ("spinach", 0.6),
    ("cauliflower", 0.6),
    ("carrot", 0.4),
    ("cabbage", 0.4),
    ("capsicum", 0.9),
    ("mushroom", 1.2),
    ("eggplant", 0.9),
    ("okra", 0.7),
    ("cucumber", 0.5),
    ("coriander", 0.6),
    ("mixed vegetables", 0.7),
    ("lemon", 0.3),
    ("mango", 0.5),
    // === Seasoning & Sweeteners ===
    ("spices", 1.5),
    ("salt", 0.2),
    ("sugar", 3.2),
    ("jaggery", 2.0),
    ("tamarind", 0.8),
];

/// Canonical ingredient name to kg CO2e per kg
#[derive(Debug, Clone, Default)]
pub struct EmissionFactorTable {
    factors: HashMap<String, f64>,
}

impl EmissionFactorTable {
    /// Build a table from `(name, factor)` entries
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if any factor is negative or non-finite.
    pub fn new<I, S>(entries: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut factors = HashMap::new();
        for (name, value) in entries {
            let key = table_key(name.as_ref());
            let value = checked_factor("emission factor table", &key, value)?;
            factors.insert(key, value);
        }
        Ok(Self { factors })
    }

    /// The shipped factor set
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            factors: BUILTIN_FACTORS
                .iter()
                .map(|(name, value)| ((*name).to_owned(), *value))
                .collect(),
        }
    }

    /// Exact lookup by canonical name (already lower-cased)
    #[must_use]
    pub fn get(&self, canonical_name: &str) -> Option<f64> {
        self.factors.get(canonical_name).copied()
    }

    /// Ingredient names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Whether the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}
