//! Content factory for loading all data files from one directory.

use std::path::{Path, PathBuf};

use unit_core::{TurnConfig, UnitType};

use crate::definitions::{MapLayout, ScenarioSpec};
use crate::loaders::{ConfigLoader, LoadResult, MapLoader, ScenarioLoader, UnitCatalogLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── units.ron
/// ├── maps/
/// │   └── river_valley.ron
/// └── scenarios/
///     └── skirmish.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load turn rules from `config.toml`.
    pub fn load_config(&self) -> LoadResult<TurnConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the unit-type catalog from `units.ron`.
    pub fn load_units(&self) -> LoadResult<Vec<UnitType>> {
        let path = self.data_dir.join("units.ron");
        UnitCatalogLoader::load(&path)
    }

    /// Load a map from `maps/{map_name}.ron`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<MapLayout> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Load a scenario from `scenarios/{scenario_name}.ron`.
    pub fn load_scenario(&self, scenario_name: &str) -> LoadResult<ScenarioSpec> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", scenario_name));
        ScenarioLoader::load(&path)
    }

    /// Load a scenario together with the map it names.
    pub fn load_scenario_with_map(
        &self,
        scenario_name: &str,
    ) -> LoadResult<(ScenarioSpec, MapLayout)> {
        let scenario = self.load_scenario(scenario_name)?;
        let map = self.load_map(&scenario.map)?;
        for placement in &scenario.units {
            if !map.contains(placement.position) {
                anyhow::bail!(
                    "Scenario '{}' places {} outside map '{}' at {}",
                    scenario_name,
                    placement.unit_type,
                    scenario.map,
                    placement.position
                );
            }
        }
        Ok((scenario, map))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
