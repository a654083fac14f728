// ABOUTME: Packaging emission model: per-unit factor times dish count plus a fixed overhead
// ABOUTME: Unknown packaging types and sizes fall back to the table defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use crate::constants::estimation::{
    FIXED_PACKAGING_OVERHEAD_KG, LARGE_PACKAGING_DISH_THRESHOLD, LARGE_PACKAGING_SIZE,
    STANDARD_PACKAGING_SIZE,
};
use crate::tables::{table_key, PackagingProfileTable};
use std::sync::Arc;
use tracing::debug;

/// Packaging emission and the profile actually applied
#[derive(Debug, Clone, PartialEq)]
pub struct PackagingEmission {
    /// kg CO2e
    pub emission: f64,
    /// Type after defaulting
    pub packaging_type: String,
    /// Size after defaulting
    pub packaging_size: String,
    /// kg CO2e per unit of the applied profile
    pub unit_factor: f64,
}

/// Packaging emission calculator
#[derive(Debug, Clone)]
pub struct PackagingEmissionModel {
    profiles: Arc<PackagingProfileTable>,
    overhead_kg: f64,
}

impl PackagingEmissionModel {
    /// Create a model with the standard bag/napkin/cutlery overhead
    #[must_use]
    pub const fn new(profiles: Arc<PackagingProfileTable>) -> Self {
        Self {
            profiles,
            overhead_kg: FIXED_PACKAGING_OVERHEAD_KG,
        }
    }

    /// Size policy: "large" once the order exceeds the dish threshold
    #[must_use]
    pub const fn size_for(dish_count: u32) -> &'static str {
        if dish_count > LARGE_PACKAGING_DISH_THRESHOLD {
            LARGE_PACKAGING_SIZE
        } else {
            STANDARD_PACKAGING_SIZE
        }
    }

    /// `unit_factor * dish_count + overhead`, with type and size defaulted
    #[must_use]
    pub fn compute(
        &self,
        dish_count: u32,
        packaging_type: Option<&str>,
        packaging_size: Option<&str>,
    ) -> PackagingEmission {
        let packaging_type = packaging_type
            .map(table_key)
            .filter(|kind| self.profiles.has_type(kind))
            .unwrap_or_else(|| self.profiles.default_type().to_owned());

        let (packaging_size, unit_factor) = packaging_size
            .map(table_key)
            .and_then(|size| {
                self.profiles
                    .get(&packaging_type, &size)
                    .map(|factor| (size, factor))
            })
            .unwrap_or_else(|| {
                let size = self.profiles.default_size().to_owned();
                let factor = self.profiles.get(&packaging_type, &size).unwrap_or(0.0);
                (size, factor)
            });

        let emission = unit_factor.mul_add(f64::from(dish_count), self.overhead_kg);
        debug!(
            dish_count,
            packaging_type = %packaging_type,
            packaging_size = %packaging_size,
            emission,
            "Packaging emission computed"
        );
        PackagingEmission {
            emission,
            packaging_type,
            packaging_size,
            unit_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> PackagingEmissionModel {
        PackagingEmissionModel::new(Arc::new(PackagingProfileTable::builtin()))
    }

    #[test]
    fn test_size_policy() {
        assert_eq!(PackagingEmissionModel::size_for(2), "medium");
        assert_eq!(PackagingEmissionModel::size_for(3), "large");
    }

    #[test]
    fn test_large_order() {
        let result = model().compute(3, None, Some(PackagingEmissionModel::size_for(3)));
        assert_eq!(result.packaging_type, "plastic");
        assert_eq!(result.packaging_size, "large");
        assert!((result.emission - (0.18 * 3.0 + 0.05)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_type_and_size_default() {
        let result = model().compute(1, Some("glass"), Some("jumbo"));
        assert_eq!(result.packaging_type, "plastic");
        assert_eq!(result.packaging_size, "medium");
        assert!((result.emission - 0.17).abs() < 1e-9);
    }

    #[test]
    fn test_zero_dishes_still_has_overhead() {
        let result = model().compute(0, Some("paper"), None);
        assert!((result.emission - 0.05).abs() < 1e-9);
    }
}
