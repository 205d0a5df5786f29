//! Map data loader.
//!
//! Loads terrain, features, roads and city territory from map RON files.
//! Units are placed separately via scenario files.

use std::path::Path;

use serde::Deserialize;
use unit_core::{PlayerId, Position, RoadStatus};

use crate::definitions::{MapLayout, TerrainKind};
use crate::loaders::{LoadResult, parse_ron, read_file};

/// Map data structure for RON files.
#[derive(Debug, Clone, Deserialize)]
struct MapDataRon {
    dimensions: (u32, u32),
    #[serde(default)]
    default_terrain: TerrainKind,
    #[serde(default)]
    tiles: Vec<TileRon>,
    #[serde(default)]
    cities: Vec<CityRon>,
}

/// Override for a single cell; omitted fields keep the default.
#[derive(Debug, Clone, Deserialize)]
struct TileRon {
    x: i32,
    y: i32,
    #[serde(default)]
    terrain: Option<TerrainKind>,
    #[serde(default)]
    feature: Option<String>,
    #[serde(default)]
    improvement: Option<String>,
    #[serde(default)]
    road: Option<RoadStatus>,
}

#[derive(Debug, Clone, Deserialize)]
struct CityRon {
    owner: u16,
    center: (i32, i32),
    #[serde(default = "CityRon::default_radius")]
    radius: u32,
}

impl CityRon {
    fn default_radius() -> u32 {
        1
    }
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load map data from a RON file.
    ///
    /// Every cell inside the dimensions is filled with the default terrain
    /// first, then explicit tile overrides and city territories are applied.
    pub fn load(path: &Path) -> LoadResult<MapLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MapLayout> {
        let data: MapDataRon = parse_ron(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let (width, height) = data.dimensions;
        if width == 0 || height == 0 {
            anyhow::bail!("Map dimensions must be non-zero, got {}x{}", width, height);
        }

        let mut map = MapLayout::filled(width, height, data.default_terrain);

        for tile in data.tiles {
            let position = Position::new(tile.x, tile.y);
            let Some(spec) = map.tile_mut(position) else {
                anyhow::bail!("Tile {} lies outside the {}x{} map", position, width, height);
            };
            if let Some(terrain) = tile.terrain {
                spec.terrain = terrain;
            }
            if tile.feature.is_some() {
                spec.feature = tile.feature;
            }
            if tile.improvement.is_some() {
                spec.improvement = tile.improvement;
            }
            if let Some(road) = tile.road {
                spec.road = road;
            }
        }

        for city in data.cities {
            let center = Position::new(city.center.0, city.center.1);
            if !map.contains(center) {
                anyhow::bail!("City center {} lies outside the map", center);
            }
            map.claim_territory(PlayerId(city.owner), center, city.radius);
        }

        Ok(map)
    }
}
