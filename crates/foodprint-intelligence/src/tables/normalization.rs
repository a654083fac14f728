// ABOUTME: Alias table mapping ingredient name variants to canonical ingredient names
// ABOUTME: Covers plurals, regional names, and cut/preparation variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use super::table_key;
use std::collections::HashMap;

/// Built-in aliases as `(canonical, &[aliases])`
const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    (
        "chicken",
        &[
            "chicken breast",
            "chicken thigh",
            "boneless chicken",
            "chicken pieces",
            "murgh",
        ],
    ),
    (
        "mutton",
        &["goat", "goat meat", "gosht", "keema", "minced mutton"],
    ),
    ("prawns", &["prawn", "shrimp", "shrimps", "jhinga"]),
    ("fish", &["fish fillet", "pomfret", "rohu", "basa", "machli"]),
    ("egg", &["eggs", "whole egg", "anda"]),
    ("paneer", &["cottage cheese", "paneer cubes"]),
    ("yogurt", &["curd", "dahi", "yoghurt", "plain yogurt", "hung curd"]),
    ("cream", &["heavy cream", "fresh cream", "malai", "cooking cream"]),
    ("milk", &["whole milk", "full cream milk", "doodh"]),
    ("butter", &["unsalted butter", "salted butter", "makhan"]),
    ("ghee", &["clarified butter", "desi ghee"]),
    (
        "rice",
        &["basmati rice", "white rice", "steamed rice", "cooked rice", "chawal"],
    ),
    (
        "wheat flour",
        &[
            "atta",
            "maida",
            "flour",
            "all purpose flour",
            "all-purpose flour",
            "whole wheat flour",
        ],
    ),
    ("semolina", &["rava", "sooji", "suji"]),
    ("noodles", &["hakka noodles", "egg noodles", "chowmein noodles"]),
    (
        "lentils",
        &[
            "dal",
            "daal",
            "toor dal",
            "moong dal",
            "masoor dal",
            "urad dal",
            "chana dal",
            "yellow lentils",
            "red lentils",
        ],
    ),
    (
        "chickpeas",
        &["chana", "kabuli chana", "chole", "garbanzo beans", "chickpea"],
    ),
    ("kidney beans", &["rajma", "red kidney beans"]),
    ("peas", &["green peas", "matar"]),
    (
        "vegetable oil",
        &["oil", "cooking oil", "sunflower oil", "refined oil", "canola oil"],
    ),
    ("potato", &["potatoes", "aloo"]),
    ("onion", &["onions", "pyaz", "red onion"]),
    ("tomato", &["tomatoes", "tamatar", "tomato puree"]),
    ("spinach", &["palak"]),
    ("cauliflower", &["gobi", "phool gobi"]),
    ("capsicum", &["bell pepper", "shimla mirch", "green capsicum"]),
    ("eggplant", &["brinjal", "baingan", "aubergine"]),
    ("okra", &["bhindi", "lady finger", "ladies finger"]),
    ("mushroom", &["mushrooms", "button mushroom"]),
    ("carrot", &["carrots", "gajar"]),
    ("green chilli", &["green chillies", "green chili", "hari mirch"]),
    ("coriander", &["dhania", "cilantro", "coriander leaves"]),
    (
        "spices",
        &[
            "garam masala",
            "chilli powder",
            "red chilli powder",
            "turmeric",
            "cumin",
            "spice mix",
        ],
    ),
    ("cashews", &["cashew", "cashew nuts", "kaju"]),
    ("almonds", &["almond", "badam"]),
    ("peanuts", &["peanut", "groundnuts"]),
    ("coconut", &["desiccated coconut", "coconut milk", "grated coconut"]),
    ("garlic", &["garlic cloves", "lehsun"]),
    ("ginger", &["adrak", "ginger paste"]),
    ("mixed vegetables", &["mixed veg", "vegetables", "veggies"]),
];

/// Alias to canonical ingredient name
#[derive(Debug, Clone, Default)]
pub struct NormalizationTable {
    aliases: HashMap<String, String>,
}

impl NormalizationTable {
    /// Build a table from `(alias, canonical)` pairs; both sides are lower-cased
    #[must_use]
    pub fn new<I, A, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        A: AsRef<str>,
        C: AsRef<str>,
    {
        Self {
            aliases: entries
                .into_iter()
                .map(|(alias, canonical)| (table_key(alias.as_ref()), table_key(canonical.as_ref())))
                .collect(),
        }
    }

    /// The shipped alias set
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_ALIASES.iter().flat_map(|(canonical, aliases)| {
            aliases.iter().map(move |alias| (*alias, *canonical))
        }))
    }

    /// Canonical name for a lower-cased alias
    #[must_use]
    pub fn canonical(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Iterate `(alias, canonical)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
    }

    /// Number of aliases
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether the table has no aliases
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
