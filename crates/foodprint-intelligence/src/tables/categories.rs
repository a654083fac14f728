// ABOUTME: Coarse ingredient categories with fallback factors and an ordered keyword classifier
// ABOUTME: First matching rule wins; rule order is load-bearing because keywords overlap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use super::checked_factor;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Factor used for vegetables when a substituted table omits the category
const VEGETABLE_FALLBACK_FACTOR: f64 = 0.7;

/// Coarse ingredient classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    /// Red meat
    Meat,
    /// Chicken, duck, turkey
    Poultry,
    /// Fish and shellfish
    Seafood,
    /// Milk products, including ghee
    Dairy,
    /// Eggs
    Eggs,
    /// Cooking oils and fats
    Oils,
    /// Nuts and coconut
    Nuts,
    /// Pulses, beans, soy
    Legumes,
    /// Cereals, flours, breads
    Grains,
    /// Sugar, jaggery, honey
    Sweeteners,
    /// Spice blends and seasonings
    Spices,
    /// Fruit
    Fruits,
    /// Vegetables, and the terminal default
    Vegetables,
}

impl IngredientCategory {
    /// Category name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Meat => "meat",
            Self::Poultry => "poultry",
            Self::Seafood => "seafood",
            Self::Dairy => "dairy",
            Self::Eggs => "eggs",
            Self::Oils => "oils",
            Self::Nuts => "nuts",
            Self::Legumes => "legumes",
            Self::Grains => "grains",
            Self::Sweeteners => "sweeteners",
            Self::Spices => "spices",
            Self::Fruits => "fruits",
            Self::Vegetables => "vegetables",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(predicate, category)` pair of the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    /// Category selected when the predicate holds
    pub category: IngredientCategory,
    /// Predicate: the name contains any of these keywords
    pub keywords: Vec<String>,
}

impl CategoryRule {
    /// Create a rule from keywords
    #[must_use]
    pub fn new(category: IngredientCategory, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Whether a lower-cased name satisfies this rule
    #[must_use]
    pub fn matches(&self, lowered_name: &str) -> bool {
        self.keywords.iter().any(|k| lowered_name.contains(k.as_str()))
    }
}

/// Built-in category factors (kg CO2e per kg)
const BUILTIN_CATEGORY_FACTORS: &[(IngredientCategory, f64)] = &[
    (IngredientCategory::Meat, 35.0),
    (IngredientCategory::Poultry, 6.9),
    (IngredientCategory::Seafood, 12.0),
    (IngredientCategory::Dairy, 9.0),
    (IngredientCategory::Eggs, 4.7),
    (IngredientCategory::Oils, 3.5),
    (IngredientCategory::Nuts, 2.5),
    (IngredientCategory::Legumes, 0.9),
    (IngredientCategory::Grains, 2.0),
    (IngredientCategory::Sweeteners, 3.0),
    (IngredientCategory::Spices, 1.5),
    (IngredientCategory::Fruits, 0.7),
    (IngredientCategory::Vegetables, VEGETABLE_FALLBACK_FACTOR),
];

/// Built-in classifier rules, in evaluation order.
///
/// Compound names whose keywords would land in the wrong general rule come
/// first. Dairy precedes oils so "ghee" is dairy; nuts precede legumes so
/// "peanut" is not caught by "pea".
fn builtin_rules() -> Vec<CategoryRule> {
    use IngredientCategory as C;
    vec![
        CategoryRule::new(C::Spices, &["peppercorn", "nutmeg"]),
        CategoryRule::new(C::Vegetables, &["butternut", "squash", "eggplant"]),
        CategoryRule::new(
            C::Nuts,
            &[
                "nut butter", "peanut butter", "almond butter", "cashew butter", "almond milk",
                "cashew milk", "coconut milk", "coconut cream",
            ],
        ),
        CategoryRule::new(C::Legumes, &["soy milk", "soya milk"]),
        CategoryRule::new(C::Grains, &["oat milk", "rice milk", "egg noodle"]),
        CategoryRule::new(
            C::Meat,
            &[
                "beef", "lamb", "mutton", "goat", "pork", "bacon", "ham", "keema", "gosht",
                "veal", "sausage",
            ],
        ),
        CategoryRule::new(C::Poultry, &["chicken", "turkey", "duck", "murgh"]),
        CategoryRule::new(
            C::Seafood,
            &[
                "fish", "prawn", "shrimp", "crab", "lobster", "squid", "salmon", "tuna",
                "pomfret",
            ],
        ),
        CategoryRule::new(
            C::Dairy,
            &[
                "milk", "cream", "cheese", "butter", "ghee", "paneer", "yogurt", "yoghurt",
                "curd", "dahi", "khoa", "malai",
            ],
        ),
        CategoryRule::new(C::Eggs, &["egg"]),
        CategoryRule::new(C::Oils, &["oil", "fat", "lard", "margarine", "shortening"]),
        CategoryRule::new(
            C::Nuts,
            &[
                "cashew", "almond", "peanut", "walnut", "pistachio", "coconut", "nut",
            ],
        ),
        CategoryRule::new(
            C::Legumes,
            &[
                "dal", "daal", "lentil", "bean", "chickpea", "chana", "rajma", "pea", "soy",
                "tofu", "gram",
            ],
        ),
        CategoryRule::new(
            C::Grains,
            &[
                "rice", "flour", "wheat", "atta", "maida", "bread", "naan", "roti", "noodle",
                "pasta", "semolina", "rava", "oat", "corn", "barley", "millet",
            ],
        ),
        CategoryRule::new(C::Sweeteners, &["sugar", "jaggery", "honey", "syrup"]),
        CategoryRule::new(
            C::Spices,
            &[
                "masala", "spice", "powder", "seed", "cumin", "turmeric", "cardamom", "clove",
                "cinnamon", "peppercorn", "salt",
            ],
        ),
        CategoryRule::new(
            C::Fruits,
            &[
                "mango", "apple", "banana", "lemon", "lime", "orange", "fruit", "berry", "grape",
                "pineapple",
            ],
        ),
    ]
}

/// Category factors plus the ordered classifier that selects a category
#[derive(Debug, Clone)]
pub struct CategoryFallbackTable {
    factors: HashMap<IngredientCategory, f64>,
    rules: Vec<CategoryRule>,
}

impl CategoryFallbackTable {
    /// Build a table from category factors and ordered rules.
    ///
    /// A vegetables factor is always present afterwards, so the terminal
    /// default of [`Self::factor`] is defined.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if any factor is negative or non-finite.
    pub fn new<I>(factors: I, rules: Vec<CategoryRule>) -> AppResult<Self>
    where
        I: IntoIterator<Item = (IngredientCategory, f64)>,
    {
        let mut map = HashMap::new();
        for (category, value) in factors {
            let value = checked_factor("category fallback table", category.as_str(), value)?;
            map.insert(category, value);
        }
        map.entry(IngredientCategory::Vegetables)
            .or_insert(VEGETABLE_FALLBACK_FACTOR);
        Ok(Self {
            factors: map,
            rules,
        })
    }

    /// The shipped categories and rules
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            factors: BUILTIN_CATEGORY_FACTORS.iter().copied().collect(),
            rules: builtin_rules(),
        }
    }

    /// First category whose rule matches, if any
    #[must_use]
    pub fn classify(&self, name: &str) -> Option<IngredientCategory> {
        let lowered = name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.category)
    }

    /// Factor for a category, falling back to the vegetables factor
    #[must_use]
    pub fn factor(&self, category: IngredientCategory) -> f64 {
        self.factors
            .get(&category)
            .or_else(|| self.factors.get(&IngredientCategory::Vegetables))
            .copied()
            .unwrap_or(VEGETABLE_FALLBACK_FACTOR)
    }

    /// Classifier rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ghee_is_dairy_not_oil() {
        let table = CategoryFallbackTable::builtin();
        assert_eq!(table.classify("ghee"), Some(IngredientCategory::Dairy));
        assert_eq!(table.classify("Desi Ghee"), Some(IngredientCategory::Dairy));
    }

    #[test]
    fn test_peanut_is_nut_not_legume() {
        let table = CategoryFallbackTable::builtin();
        assert_eq!(table.classify("roasted peanuts"), Some(IngredientCategory::Nuts));
        assert_eq!(table.classify("split peas"), Some(IngredientCategory::Legumes));
    }

    #[test]
    fn test_compound_names_bypass_general_keywords() {
        let table = CategoryFallbackTable::builtin();
        let cases = [
            ("black peppercorns", IngredientCategory::Spices),
            ("nutmeg", IngredientCategory::Spices),
            ("butternut squash", IngredientCategory::Vegetables),
            ("eggplant", IngredientCategory::Vegetables),
            ("almond milk", IngredientCategory::Nuts),
            ("coconut cream", IngredientCategory::Nuts),
            ("peanut butter", IngredientCategory::Nuts),
            ("soy milk", IngredientCategory::Legumes),
            ("oat milk", IngredientCategory::Grains),
            ("egg noodles", IngredientCategory::Grains),
        ];
        for (name, expected) in cases {
            assert_eq!(table.classify(name), Some(expected), "{name}");
        }
        assert_eq!(table.classify("whole milk"), Some(IngredientCategory::Dairy));
        assert_eq!(table.classify("salted butter"), Some(IngredientCategory::Dairy));
    }

    #[test]
    fn test_unmatched_name() {
        let table = CategoryFallbackTable::builtin();
        assert_eq!(table.classify("kohlrabi"), None);
    }

    #[test]
    fn test_rule_order_is_respected() {
        let rules = vec![
            CategoryRule::new(IngredientCategory::Oils, &["ghee"]),
            CategoryRule::new(IngredientCategory::Dairy, &["ghee"]),
        ];
        let table = CategoryFallbackTable::new([(IngredientCategory::Oils, 3.0)], rules).unwrap();
        assert_eq!(table.classify("ghee"), Some(IngredientCategory::Oils));
    }

    #[test]
    fn test_missing_category_factor_uses_vegetables() {
        let table = CategoryFallbackTable::new([(IngredientCategory::Vegetables, 0.4)], vec![])
            .unwrap();
        assert!((table.factor(IngredientCategory::Meat) - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vegetables_factor_always_present() {
        let table = CategoryFallbackTable::new(std::iter::empty(), vec![]).unwrap();
        assert!(table.factor(IngredientCategory::Vegetables) > 0.0);
    }
}
