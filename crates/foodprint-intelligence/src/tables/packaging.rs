// ABOUTME: Packaging profiles in kg CO2e per unit, nested by packaging type then size
// ABOUTME: Designated default type and size are guaranteed present so lookups always succeed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use super::{checked_factor, table_key};
use crate::constants::estimation::STANDARD_PACKAGING_SIZE;
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

const BUILTIN_DEFAULT_TYPE: &str = "plastic";

/// Built-in profiles as `(type, [(size, kg CO2e per unit)])`
const BUILTIN_PROFILES: &[(&str, &[(&str, f64)])] = &[
    ("plastic", &[("small", 0.08), ("medium", 0.12), ("large", 0.18)]),
    ("paper", &[("small", 0.05), ("medium", 0.08), ("large", 0.12)]),
    ("aluminium", &[("small", 0.15), ("medium", 0.22), ("large", 0.30)]),
    (
        "biodegradable",
        &[("small", 0.04), ("medium", 0.06), ("large", 0.09)],
    ),
    ("reusable", &[("small", 0.02), ("medium", 0.03), ("large", 0.04)]),
];

/// Packaging type to size to per-unit factor
#[derive(Debug, Clone)]
pub struct PackagingProfileTable {
    profiles: HashMap<String, HashMap<String, f64>>,
    default_type: String,
    default_size: String,
}

impl PackagingProfileTable {
    /// Build a table from nested entries
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for negative factors, or when the default type
    /// lacks the default size.
    pub fn new<I>(profiles: I, default_type: &str, default_size: &str) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, Vec<(String, f64)>)>,
    {
        let mut table = HashMap::new();
        for (kind, sizes) in profiles {
            let kind = table_key(&kind);
            let mut by_size = HashMap::new();
            for (size, factor) in sizes {
                let size = table_key(&size);
                let entry = format!("{kind}/{size}");
                let factor = checked_factor("packaging profile table", &entry, factor)?;
                by_size.insert(size, factor);
            }
            table.insert(kind, by_size);
        }
        let default_type = table_key(default_type);
        let default_size = table_key(default_size);
        let has_default = table
            .get(&default_type)
            .is_some_and(|sizes| sizes.contains_key(&default_size));
        if !has_default {
            return Err(AppError::config(format!(
                "packaging profile table: default '{default_type}/{default_size}' has no factor"
            )));
        }
        Ok(Self {
            profiles: table,
            default_type,
            default_size,
        })
    }

    /// The shipped profiles, defaulting to plastic/medium
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            profiles: BUILTIN_PROFILES
                .iter()
                .map(|(kind, sizes)| {
                    (
                        (*kind).to_owned(),
                        sizes
                            .iter()
                            .map(|(size, factor)| ((*size).to_owned(), *factor))
                            .collect(),
                    )
                })
                .collect(),
            default_type: BUILTIN_DEFAULT_TYPE.to_owned(),
            default_size: STANDARD_PACKAGING_SIZE.to_owned(),
        }
    }

    /// Same table with another default type
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the type is unknown or lacks the default size.
    pub fn with_default_type(mut self, kind: &str) -> AppResult<Self> {
        let key = table_key(kind);
        let usable = self
            .profiles
            .get(&key)
            .is_some_and(|sizes| sizes.contains_key(&self.default_size));
        if !usable {
            return Err(AppError::config(format!(
                "packaging type '{kind}' cannot be the default"
            )));
        }
        self.default_type = key;
        Ok(self)
    }

    /// Whether a packaging type is known
    #[must_use]
    pub fn has_type(&self, kind: &str) -> bool {
        self.profiles.contains_key(&table_key(kind))
    }

    /// Factor for an exact type and size
    #[must_use]
    pub fn get(&self, kind: &str, size: &str) -> Option<f64> {
        self.profiles
            .get(&table_key(kind))
            .and_then(|sizes| sizes.get(&table_key(size)))
            .copied()
    }

    /// Default packaging type
    #[must_use]
    pub fn default_type(&self) -> &str {
        &self.default_type
    }

    /// Default packaging size
    #[must_use]
    pub fn default_size(&self) -> &str {
        &self.default_size
    }

    /// Packaging types, sorted
    #[must_use]
    pub fn types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
