// ABOUTME: Dish-family signals and representative compositions for heuristic recipe estimation
// ABOUTME: Ordered first-match-wins list with a generic vegetable curry as the terminal default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use super::recipes::composition_map;
use super::table_key;
use crate::errors::{AppError, AppResult};
use crate::models::IngredientQuantityMap;

type Composition = &'static [(&'static str, f64)];

const CHICKEN: &[&str] = &["chicken", "murgh"];
const RED_MEAT: &[&str] = &["mutton", "lamb", "goat", "gosht", "keema", "beef", "rogan"];
const SEAFOOD: &[&str] = &["fish", "prawn", "shrimp", "crab", "machli", "jhinga"];
const EGG: &[&str] = &["egg", "anda", "omelette", "omelet"];
const PANEER: &[&str] = &["paneer", "cottage cheese"];
const RICE: &[&str] = &["biryani", "pulao", "pilaf", "rice", "khichdi"];
const NOODLES: &[&str] = &["noodle", "chowmein", "chow mein", "pasta", "spaghetti", "ramen"];
const BREAD: &[&str] = &["naan", "roti", "paratha", "kulcha", "chapati", "bread", "puri", "bhatura"];

/// Built-in families as `(name, signal groups, composition)`, in evaluation order.
///
/// Protein-plus-carb families come before the carb-only ones so the protein
/// stays in the composition.
const BUILTIN_FAMILIES: &[(&str, &[&[&str]], Composition)] = &[
    (
        "chicken rice",
        &[CHICKEN, RICE],
        &[
            ("rice", 150.0),
            ("chicken", 150.0),
            ("onion", 50.0),
            ("yogurt", 20.0),
            ("vegetable oil", 15.0),
            ("spices", 8.0),
        ],
    ),
    (
        "meat rice",
        &[RED_MEAT, RICE],
        &[
            ("rice", 150.0),
            ("mutton", 150.0),
            ("onion", 50.0),
            ("yogurt", 20.0),
            ("ghee", 15.0),
            ("spices", 8.0),
        ],
    ),
    (
        "seafood rice",
        &[SEAFOOD, RICE],
        &[
            ("rice", 150.0),
            ("fish", 130.0),
            ("onion", 50.0),
            ("vegetable oil", 15.0),
            ("spices", 8.0),
        ],
    ),
    (
        "egg rice",
        &[EGG, RICE],
        &[
            ("rice", 170.0),
            ("egg", 60.0),
            ("mixed vegetables", 40.0),
            ("vegetable oil", 15.0),
            ("soy sauce", 5.0),
        ],
    ),
    (
        "chicken noodles",
        &[CHICKEN, NOODLES],
        &[
            ("noodles", 130.0),
            ("chicken", 100.0),
            ("mixed vegetables", 50.0),
            ("vegetable oil", 15.0),
            ("soy sauce", 10.0),
        ],
    ),
    (
        "meat noodles",
        &[RED_MEAT, NOODLES],
        &[
            ("noodles", 130.0),
            ("mutton", 100.0),
            ("mixed vegetables", 50.0),
            ("vegetable oil", 15.0),
            ("soy sauce", 10.0),
        ],
    ),
    (
        "seafood noodles",
        &[SEAFOOD, NOODLES],
        &[
            ("noodles", 130.0),
            ("prawns", 100.0),
            ("mixed vegetables", 50.0),
            ("vegetable oil", 15.0),
            ("soy sauce", 10.0),
        ],
    ),
    (
        "egg noodles",
        &[EGG, NOODLES],
        &[
            ("noodles", 150.0),
            ("egg", 60.0),
            ("mixed vegetables", 50.0),
            ("vegetable oil", 15.0),
            ("soy sauce", 10.0),
        ],
    ),
    (
        "chicken bread",
        &[CHICKEN, BREAD],
        &[
            ("wheat flour", 80.0),
            ("chicken", 80.0),
            ("onion", 20.0),
            ("vegetable oil", 10.0),
        ],
    ),
    (
        "meat bread",
        &[RED_MEAT, BREAD],
        &[
            ("wheat flour", 80.0),
            ("mutton", 80.0),
            ("onion", 20.0),
            ("vegetable oil", 10.0),
        ],
    ),
    (
        "egg bread",
        &[EGG, BREAD],
        &[
            ("wheat flour", 80.0),
            ("egg", 60.0),
            ("onion", 20.0),
            ("vegetable oil", 10.0),
        ],
    ),
    (
        "paneer bread",
        &[PANEER, BREAD],
        &[
            ("wheat flour", 80.0),
            ("paneer", 60.0),
            ("ghee", 10.0),
        ],
    ),
    (
        "rice dish",
        &[RICE],
        &[
            ("rice", 180.0),
            ("mixed vegetables", 80.0),
            ("vegetable oil", 15.0),
            ("spices", 5.0),
        ],
    ),
    (
        "noodles",
        &[NOODLES],
        &[
            ("noodles", 150.0),
            ("mixed vegetables", 80.0),
            ("vegetable oil", 15.0),
            ("soy sauce", 10.0),
        ],
    ),
    (
        "bread",
        &[BREAD],
        &[("wheat flour", 80.0), ("vegetable oil", 5.0)],
    ),
    (
        "chicken",
        &[CHICKEN],
        &[
            ("chicken", 200.0),
            ("onion", 60.0),
            ("tomato", 80.0),
            ("vegetable oil", 20.0),
            ("spices", 10.0),
        ],
    ),
    (
        "meat",
        &[RED_MEAT],
        &[
            ("mutton", 200.0),
            ("onion", 60.0),
            ("tomato", 60.0),
            ("vegetable oil", 20.0),
            ("spices", 10.0),
        ],
    ),
    (
        "seafood",
        &[SEAFOOD],
        &[
            ("fish", 180.0),
            ("onion", 60.0),
            ("tomato", 60.0),
            ("vegetable oil", 20.0),
            ("spices", 8.0),
        ],
    ),
    (
        "egg",
        &[EGG],
        &[
            ("egg", 120.0),
            ("onion", 60.0),
            ("tomato", 60.0),
            ("vegetable oil", 15.0),
            ("spices", 5.0),
        ],
    ),
    (
        "paneer",
        &[PANEER],
        &[
            ("paneer", 150.0),
            ("tomato", 100.0),
            ("onion", 50.0),
            ("cream", 20.0),
            ("vegetable oil", 15.0),
            ("spices", 8.0),
        ],
    ),
    (
        "lentil",
        &[&["dal", "daal", "lentil", "sambar", "chana", "chole", "rajma"]],
        &[
            ("lentils", 80.0),
            ("onion", 40.0),
            ("tomato", 50.0),
            ("vegetable oil", 10.0),
            ("spices", 5.0),
        ],
    ),
    (
        "dessert",
        &[&[
            "jamun", "kheer", "halwa", "ladoo", "laddu", "barfi", "rasgulla", "payasam",
            "dessert",
        ]],
        &[("milk", 150.0), ("sugar", 40.0), ("ghee", 10.0)],
    ),
];

/// Terminal default: a generic vegetable curry
const DEFAULT_COMPOSITION: Composition = &[
    ("mixed vegetables", 200.0),
    ("onion", 40.0),
    ("tomato", 50.0),
    ("vegetable oil", 15.0),
    ("spices", 5.0),
];

/// One family: matches when every signal group has a keyword in the dish name
#[derive(Debug, Clone, PartialEq)]
pub struct DishFamily {
    /// Family label, reported in logs
    pub name: String,
    /// All groups must match; any keyword within a group suffices
    pub signals: Vec<Vec<String>>,
    /// Representative grams per serving
    pub composition: IngredientQuantityMap,
}

impl DishFamily {
    /// Create a family from keyword groups
    #[must_use]
    pub fn new(name: &str, signals: &[&[&str]], composition: IngredientQuantityMap) -> Self {
        Self {
            name: name.to_owned(),
            signals: signals
                .iter()
                .map(|group| group.iter().map(|k| k.to_lowercase()).collect())
                .collect(),
            composition,
        }
    }

    /// Whether a lower-cased dish name carries every signal group
    #[must_use]
    pub fn matches(&self, lowered_dish: &str) -> bool {
        !self.signals.is_empty()
            && self
                .signals
                .iter()
                .all(|group| group.iter().any(|k| lowered_dish.contains(k.as_str())))
    }
}

/// Ordered dish families plus the generic default composition
#[derive(Debug, Clone)]
pub struct DishFamilyTable {
    families: Vec<DishFamily>,
    default: IngredientQuantityMap,
}

impl DishFamilyTable {
    /// Build a table; family order is evaluation order
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the default or any family composition is
    /// empty, since the heuristic tier must always produce ingredients.
    pub fn new(families: Vec<DishFamily>, default: IngredientQuantityMap) -> AppResult<Self> {
        if default.is_empty() {
            return Err(AppError::config(
                "dish family table: default composition must not be empty",
            ));
        }
        if let Some(empty) = families.iter().find(|f| f.composition.is_empty()) {
            return Err(AppError::config(format!(
                "dish family table: family '{}' has no ingredients",
                empty.name
            )));
        }
        Ok(Self { families, default })
    }

    /// The shipped families
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            families: BUILTIN_FAMILIES
                .iter()
                .map(|(name, signals, composition)| {
                    DishFamily::new(name, signals, composition_map(composition))
                })
                .collect(),
            default: composition_map(DEFAULT_COMPOSITION),
        }
    }

    /// First family whose signals all match the dish name
    #[must_use]
    pub fn classify(&self, dish_name: &str) -> Option<&DishFamily> {
        let lowered = table_key(dish_name);
        self.families.iter().find(|family| family.matches(&lowered))
    }

    /// Families in evaluation order
    #[must_use]
    pub fn families(&self) -> &[DishFamily] {
        &self.families
    }

    /// Composition used when no family matches
    #[must_use]
    pub const fn default_composition(&self) -> &IngredientQuantityMap {
        &self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_family_wins_over_single_signal() {
        let table = DishFamilyTable::builtin();
        let family = table.classify("Hyderabadi Chicken Dum Biryani").unwrap();
        assert_eq!(family.name, "chicken rice");
        assert_eq!(table.classify("chicken 65").unwrap().name, "chicken");
    }

    #[test]
    fn test_bread_and_dessert_signals() {
        let table = DishFamilyTable::builtin();
        assert_eq!(table.classify("cheese kulcha").unwrap().name, "bread");
        assert_eq!(table.classify("gajar halwa").unwrap().name, "dessert");
    }

    #[test]
    fn test_protein_survives_carb_signals() {
        let table = DishFamilyTable::builtin();
        let cases = [
            ("prawn biryani", "seafood rice", "fish"),
            ("egg fried rice", "egg rice", "egg"),
            ("fish fried rice", "seafood rice", "fish"),
            ("chicken hakka noodles", "chicken noodles", "chicken"),
            ("keema naan", "meat bread", "mutton"),
            ("paneer paratha", "paneer bread", "paneer"),
        ];
        for (dish, family, protein) in cases {
            let matched = table.classify(dish).unwrap();
            assert_eq!(matched.name, family, "{dish}");
            assert!(matched.composition.contains_key(protein), "{dish}");
        }
        assert_eq!(table.classify("veg hakka noodles").unwrap().name, "noodles");
        assert_eq!(table.classify("jeera rice").unwrap().name, "rice dish");
    }

    #[test]
    fn test_unknown_dish_has_no_family() {
        let table = DishFamilyTable::builtin();
        assert!(table.classify("mystery platter").is_none());
        assert!(!table.default_composition().is_empty());
    }

    #[test]
    fn test_new_rejects_empty_default() {
        assert!(DishFamilyTable::new(Vec::new(), IngredientQuantityMap::new()).is_err());
    }
}
