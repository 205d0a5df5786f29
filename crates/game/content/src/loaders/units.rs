//! Unit-type catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use unit_core::UnitType;

use crate::loaders::{LoadResult, parse_ron, read_file};

/// Unit catalog structure for RON files.
#[derive(Debug, Clone, Deserialize)]
struct UnitCatalogRon {
    units: Vec<UnitType>,
}

/// Loader for the unit-type catalog from RON files.
pub struct UnitCatalogLoader;

impl UnitCatalogLoader {
    /// Load the unit catalog from a RON file.
    ///
    /// Fails on duplicate type names and on types with no movement.
    pub fn load(path: &Path) -> LoadResult<Vec<UnitType>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<UnitType>> {
        let catalog: UnitCatalogRon = parse_ron(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for unit_type in &catalog.units {
            if !seen.insert(unit_type.name.as_str()) {
                anyhow::bail!("Duplicate unit type '{}'", unit_type.name);
            }
            if unit_type.movement == 0 {
                anyhow::bail!("Unit type '{}' has no movement", unit_type.name);
            }
        }

        Ok(catalog.units)
    }
}
