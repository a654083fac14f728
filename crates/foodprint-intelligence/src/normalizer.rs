// ABOUTME: Ingredient name canonicalisation against the alias table
// ABOUTME: Pure, case-insensitive, and total: unknown names come back lower-cased
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use crate::tables::{table_key, NormalizationTable};
use std::sync::Arc;

/// Maps ingredient name variants to the canonical vocabulary
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    aliases: Arc<NormalizationTable>,
}

impl NameNormalizer {
    /// Create a normalizer over an alias table
    #[must_use]
    pub const fn new(aliases: Arc<NormalizationTable>) -> Self {
        Self { aliases }
    }

    /// Canonical name for `name`, or the lower-cased input if no alias exists
    #[must_use]
    pub fn normalize(&self, name: &str) -> String {
        let key = table_key(name);
        match self.aliases.canonical(&key) {
            Some(canonical) => canonical.to_owned(),
            None => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> NameNormalizer {
        NameNormalizer::new(Arc::new(NormalizationTable::builtin()))
    }

    #[test]
    fn test_alias_maps_to_canonical() {
        let n = normalizer();
        assert_eq!(n.normalize("Curd"), "yogurt");
        assert_eq!(n.normalize("  basmati   rice "), "rice");
        assert_eq!(n.normalize("Shrimp"), "prawns");
    }

    #[test]
    fn test_unknown_name_is_lowercased() {
        assert_eq!(normalizer().normalize("Dragon Fruit"), "dragon fruit");
    }

    #[test]
    fn test_substituted_table() {
        let n = NameNormalizer::new(Arc::new(NormalizationTable::new([("aubergine", "eggplant")])));
        assert_eq!(n.normalize("Aubergine"), "eggplant");
        assert_eq!(n.normalize("curd"), "curd");
    }
}
