// ABOUTME: Static recipe table of grams per standard serving for common delivery dishes
// ABOUTME: Authoritative first tier of recipe resolution, keyed by lower-cased dish name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use super::table_key;
use crate::errors::{AppError, AppResult};
use crate::models::IngredientQuantityMap;
use std::collections::HashMap;

type Composition = &'static [(&'static str, f64)];

/// Built-in dishes (grams per serving, canonical ingredient names)
const BUILTIN_RECIPES: &[(&str, Composition)] = &[
    // === Chicken ===
    (
        "butter chicken",
        &[
            ("chicken", 200.0),
            ("butter", 25.0),
            ("cream", 40.0),
            ("tomato", 100.0),
            ("onion", 50.0),
            ("spices", 8.0),
            ("ginger", 5.0),
            ("garlic", 5.0),
        ],
    ),
    (
        "chicken tikka masala",
        &[
            ("chicken", 200.0),
            ("yogurt", 40.0),
            ("cream", 30.0),
            ("tomato", 100.0),
            ("onion", 60.0),
            ("vegetable oil", 15.0),
            ("spices", 10.0),
        ],
    ),
    (
        "chicken curry",
        &[
            ("chicken", 200.0),
            ("onion", 80.0),
            ("tomato", 80.0),
            ("vegetable oil", 20.0),
            ("spices", 10.0),
            ("garlic", 5.0),
            ("ginger", 5.0),
        ],
    ),
    (
        "tandoori chicken",
        &[
            ("chicken", 250.0),
            ("yogurt", 50.0),
            ("spices", 10.0),
            ("lemon", 10.0),
        ],
    ),
    (
        "chicken biryani",
        &[
            ("rice", 150.0),
            ("chicken", 150.0),
            ("yogurt", 30.0),
            ("onion", 60.0),
            ("ghee", 15.0),
            ("spices", 8.0),
        ],
    ),
    (
        "chicken fried rice",
        &[
            ("rice", 150.0),
            ("chicken", 80.0),
            ("egg", 30.0),
            ("vegetable oil", 15.0),
            ("soy sauce", 10.0),
        ],
    ),
    // === Mutton & Seafood ===
    (
        "mutton biryani",
        &[
            ("rice", 150.0),
            ("mutton", 150.0),
            ("yogurt", 30.0),
            ("onion", 60.0),
            ("ghee", 15.0),
            ("spices", 8.0),
        ],
    ),
    (
        "mutton rogan josh",
        &[
            ("mutton", 200.0),
            ("yogurt", 50.0),
            ("onion", 60.0),
            ("vegetable oil", 20.0),
            ("spices", 12.0),
        ],
    ),
    (
        "fish curry",
        &[
            ("fish", 180.0),
            ("coconut", 50.0),
            ("onion", 60.0),
            ("tomato", 60.0),
            ("vegetable oil", 20.0),
            ("spices", 8.0),
        ],
    ),
    (
        "prawn masala",
        &[
            ("prawns", 150.0),
            ("onion", 60.0),
            ("tomato", 80.0),
            ("vegetable oil", 20.0),
            ("spices", 8.0),
        ],
    ),
    (
        "egg curry",
        &[
            ("egg", 120.0),
            ("onion", 80.0),
            ("tomato", 80.0),
            ("vegetable oil", 20.0),
            ("spices", 8.0),
        ],
    ),
    // === Paneer & Vegetables ===
    (
        "paneer butter masala",
        &[
            ("paneer", 150.0),
            ("butter", 20.0),
            ("cream", 40.0),
            ("tomato", 120.0),
            ("onion", 50.0),
            ("cashews", 15.0),
            ("spices", 8.0),
        ],
    ),
    (
        "palak paneer",
        &[
            ("paneer", 120.0),
            ("spinach", 200.0),
            ("cream", 20.0),
            ("onion", 40.0),
            ("vegetable oil", 15.0),
            ("spices", 6.0),
            ("garlic", 5.0),
        ],
    ),
    (
        "kadai paneer",
        &[
            ("paneer", 150.0),
            ("capsicum", 80.0),
            ("onion", 60.0),
            ("tomato", 80.0),
            ("vegetable oil", 20.0),
            ("spices", 8.0),
        ],
    ),
    (
        "aloo gobi",
        &[
            ("potato", 150.0),
            ("cauliflower", 150.0),
            ("onion", 40.0),
            ("tomato", 40.0),
            ("vegetable oil", 20.0),
            ("spices", 6.0),
        ],
    ),
    (
        "mixed veg curry",
        &[
            ("mixed vegetables", 200.0),
            ("onion", 40.0),
            ("tomato", 50.0),
            ("vegetable oil", 15.0),
            ("spices", 6.0),
        ],
    ),
    (
        "veg biryani",
        &[
            ("rice", 150.0),
            ("mixed vegetables", 120.0),
            ("yogurt", 30.0),
            ("onion", 50.0),
            ("ghee", 15.0),
            ("spices", 8.0),
        ],
    ),
    // === Dal & Legumes ===
    (
        "dal fry",
        &[
            ("lentils", 80.0),
            ("onion", 40.0),
            ("tomato", 50.0),
            ("ghee", 10.0),
            ("spices", 5.0),
            ("garlic", 5.0),
        ],
    ),
    (
        "dal tadka",
        &[
            ("lentils", 80.0),
            ("ghee", 15.0),
            ("onion", 30.0),
            ("tomato", 40.0),
            ("garlic", 5.0),
            ("spices", 5.0),
        ],
    ),
    (
        "dal makhani",
        &[
            ("lentils", 60.0),
            ("kidney beans", 20.0),
            ("butter", 20.0),
            ("cream", 30.0),
            ("tomato", 60.0),
            ("spices", 6.0),
        ],
    ),
    (
        "chana masala",
        &[
            ("chickpeas", 150.0),
            ("onion", 60.0),
            ("tomato", 80.0),
            ("vegetable oil", 15.0),
            ("spices", 8.0),
        ],
    ),
    (
        "rajma",
        &[
            ("kidney beans", 150.0),
            ("onion", 60.0),
            ("tomato", 80.0),
            ("vegetable oil", 15.0),
            ("spices", 8.0),
        ],
    ),
    // === Rice & Noodles ===
    ("jeera rice", &[("rice", 150.0), ("ghee", 10.0), ("spices", 3.0)]),
    ("steamed rice", &[("rice", 150.0)]),
    (
        "veg fried rice",
        &[
            ("rice", 150.0),
            ("mixed vegetables", 80.0),
            ("vegetable oil", 15.0),
            ("soy sauce", 10.0),
        ],
    ),
    (
        "hakka noodles",
        &[
            ("noodles", 150.0),
            ("mixed vegetables", 80.0),
            ("vegetable oil", 15.0),
            ("soy sauce", 10.0),
        ],
    ),
    // === Breads ===
    (
        "naan",
        &[("wheat flour", 90.0), ("yogurt", 15.0), ("vegetable oil", 5.0)],
    ),
    (
        "butter naan",
        &[("wheat flour", 90.0), ("yogurt", 15.0), ("butter", 10.0)],
    ),
    (
        "garlic naan",
        &[
            ("wheat flour", 90.0),
            ("yogurt", 15.0),
            ("butter", 10.0),
            ("garlic", 5.0),
        ],
    ),
    ("roti", &[("wheat flour", 50.0)]),
    ("tandoori roti", &[("wheat flour", 60.0)]),
    ("paratha", &[("wheat flour", 70.0), ("ghee", 10.0)]),
    (
        "aloo paratha",
        &[
            ("wheat flour", 80.0),
            ("potato", 60.0),
            ("ghee", 10.0),
            ("spices", 2.0),
        ],
    ),
    // === South Indian & Snacks ===
    (
        "masala dosa",
        &[
            ("rice", 80.0),
            ("lentils", 25.0),
            ("potato", 80.0),
            ("onion", 20.0),
            ("vegetable oil", 10.0),
            ("spices", 3.0),
        ],
    ),
    ("idli", &[("rice", 60.0), ("lentils", 20.0)]),
    (
        "samosa",
        &[
            ("wheat flour", 40.0),
            ("potato", 60.0),
            ("peas", 10.0),
            ("vegetable oil", 20.0),
            ("spices", 3.0),
        ],
    ),
    (
        "raita",
        &[("yogurt", 150.0), ("cucumber", 30.0), ("spices", 2.0)],
    ),
    // === Desserts ===
    (
        "gulab jamun",
        &[
            ("khoa", 40.0),
            ("sugar", 50.0),
            ("ghee", 15.0),
            ("wheat flour", 10.0),
        ],
    ),
    (
        "kheer",
        &[
            ("milk", 200.0),
            ("rice", 20.0),
            ("sugar", 25.0),
            ("almonds", 5.0),
        ],
    ),
];

/// Dish name to grams per standard serving
#[derive(Debug, Clone, Default)]
pub struct RecipeTable {
    recipes: HashMap<String, IngredientQuantityMap>,
}

impl RecipeTable {
    /// Build a table from `(dish, ingredients)` entries
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a dish has no ingredients or an ingredient
    /// has a negative or non-finite gram amount.
    pub fn new<I, S>(entries: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (S, IngredientQuantityMap)>,
        S: AsRef<str>,
    {
        let mut recipes = HashMap::new();
        for (dish, ingredients) in entries {
            let key = table_key(dish.as_ref());
            if ingredients.is_empty() {
                return Err(AppError::config(format!(
                    "recipe table: dish '{key}' has no ingredients"
                )));
            }
            if let Some((name, grams)) = ingredients
                .iter()
                .find(|(_, grams)| !grams.is_finite() || **grams < 0.0)
            {
                return Err(AppError::config(format!(
                    "recipe table: '{key}' lists {grams}g of '{name}'"
                )));
            }
            recipes.insert(key, ingredients);
        }
        Ok(Self { recipes })
    }

    /// The shipped recipe set
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            recipes: BUILTIN_RECIPES
                .iter()
                .map(|(dish, composition)| ((*dish).to_owned(), composition_map(composition)))
                .collect(),
        }
    }

    /// Case-insensitive exact lookup
    #[must_use]
    pub fn get(&self, dish_name: &str) -> Option<&IngredientQuantityMap> {
        self.recipes.get(&table_key(dish_name))
    }

    /// Iterate `(dish, ingredients)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IngredientQuantityMap)> {
        self.recipes.iter().map(|(dish, map)| (dish.as_str(), map))
    }

    /// Dish names, sorted
    #[must_use]
    pub fn dish_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.recipes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of dishes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the table has no dishes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Convert a static composition into an owned quantity map
pub(crate) fn composition_map(composition: &[(&str, f64)]) -> IngredientQuantityMap {
    composition
        .iter()
        .map(|(name, grams)| ((*name).to_owned(), *grams))
        .collect()
}
