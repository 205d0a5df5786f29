use std::collections::BTreeMap;

use unit_core::{PlayerId, Position, RoadStatus};

use super::TerrainKind;

/// Static description of one map cell as authored in content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileSpec {
    pub terrain: TerrainKind,
    pub owner: Option<PlayerId>,
    pub city_center: bool,
    pub feature: Option<String>,
    pub improvement: Option<String>,
    pub road: RoadStatus,
}

impl TileSpec {
    pub fn new(terrain: TerrainKind) -> Self {
        Self {
            terrain,
            ..Self::default()
        }
    }
}

/// Rectangular map with every cell filled in.
///
/// Cells span `(0, 0) ..= (width - 1, height - 1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct MapLayout {
    pub width: u32,
    pub height: u32,
    pub tiles: BTreeMap<Position, TileSpec>,
}

impl MapLayout {
    /// A map of the given size filled with `terrain`.
    pub fn filled(width: u32, height: u32, terrain: TerrainKind) -> Self {
        let tiles = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Position::new(x, y)))
            .map(|position| (position, TileSpec::new(terrain)))
            .collect();
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub fn tile(&self, position: Position) -> Option<&TileSpec> {
        self.tiles.get(&position)
    }

    pub fn tile_mut(&mut self, position: Position) -> Option<&mut TileSpec> {
        self.tiles.get_mut(&position)
    }

    /// Founds a city for `owner` at `center`, claiming every cell within
    /// `radius` steps that no other city has claimed yet.
    pub fn claim_territory(&mut self, owner: PlayerId, center: Position, radius: u32) {
        for (&position, tile) in self.tiles.iter_mut() {
            if position.manhattan_distance(center) <= radius && tile.owner.is_none() {
                tile.owner = Some(owner);
            }
        }
        if let Some(tile) = self.tiles.get_mut(&center) {
            tile.owner = Some(owner);
            tile.city_center = true;
        }
    }
}
