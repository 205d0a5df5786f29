//! In-memory grid of tiles served to the turn engine as a [`TileProvider`].
use std::collections::BTreeMap;

use game_content::{MapLayout, TerrainKind};
use unit_core::{Construction, Occupant, PlayerId, Position, RoadStatus, TileProvider, UnitId};

/// Mutable state of one map cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileState {
    pub terrain: TerrainKind,
    pub owner: Option<PlayerId>,
    pub city_center: bool,
    pub feature: Option<String>,
    pub improvement: Option<String>,
    pub road: RoadStatus,
    pub construction: Option<Construction>,
    pub occupant: Option<Occupant>,
}

/// Rectangular tile map with at most one unit per tile.
#[derive(Clone, Debug, PartialEq)]
pub struct GridWorld {
    width: u32,
    height: u32,
    tiles: BTreeMap<Position, TileState>,
}

impl GridWorld {
    pub fn from_layout(layout: &MapLayout) -> Self {
        let tiles = layout
            .tiles
            .iter()
            .map(|(&position, spec)| {
                let tile = TileState {
                    terrain: spec.terrain,
                    owner: spec.owner,
                    city_center: spec.city_center,
                    feature: spec.feature.clone(),
                    improvement: spec.improvement.clone(),
                    road: spec.road,
                    construction: None,
                    occupant: None,
                };
                (position, tile)
            })
            .collect();

        Self {
            width: layout.width,
            height: layout.height,
            tiles,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tile(&self, position: Position) -> Option<&TileState> {
        self.tiles.get(&position)
    }

    pub fn tile_mut(&mut self, position: Position) -> Option<&mut TileState> {
        self.tiles.get_mut(&position)
    }

    /// Tile currently holding `unit`, if any.
    pub fn locate(&self, unit: UnitId) -> Option<Position> {
        self.tiles
            .iter()
            .find(|(_, tile)| tile.occupant.is_some_and(|occupant| occupant.unit == unit))
            .map(|(&position, _)| position)
    }

    /// All occupied tiles in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (Position, Occupant)> + '_ {
        self.tiles
            .iter()
            .filter_map(|(&position, tile)| tile.occupant.map(|occupant| (position, occupant)))
    }
}

impl TileProvider for GridWorld {
    fn contains(&self, position: Position) -> bool {
        self.tiles.contains_key(&position)
    }

    fn occupant(&self, position: Position) -> Option<Occupant> {
        self.tiles.get(&position).and_then(|tile| tile.occupant)
    }

    fn place_occupant(&mut self, position: Position, occupant: Occupant) -> bool {
        match self.tiles.get_mut(&position) {
            Some(tile) if tile.occupant.is_none() && tile.terrain.is_passable() => {
                tile.occupant = Some(occupant);
                true
            }
            _ => false,
        }
    }

    fn vacate(&mut self, position: Position) -> Option<Occupant> {
        self.tiles.get_mut(&position)?.occupant.take()
    }

    fn owner(&self, position: Position) -> Option<PlayerId> {
        self.tiles.get(&position).and_then(|tile| tile.owner)
    }

    fn is_city_center(&self, position: Position) -> bool {
        self.tiles.get(&position).is_some_and(|tile| tile.city_center)
    }

    fn construction(&self, position: Position) -> Option<&Construction> {
        self.tiles.get(&position)?.construction.as_ref()
    }

    fn set_construction(&mut self, position: Position, construction: Option<Construction>) {
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.construction = construction;
        }
    }

    fn terrain_feature(&self, position: Position) -> Option<&str> {
        self.tiles.get(&position)?.feature.as_deref()
    }

    fn clear_terrain_feature(&mut self, position: Position) {
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.feature = None;
        }
    }

    fn road_status(&self, position: Position) -> RoadStatus {
        self.tiles
            .get(&position)
            .map_or(RoadStatus::None, |tile| tile.road)
    }

    fn set_road_status(&mut self, position: Position, status: RoadStatus) {
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.road = status;
        }
    }

    fn improvement(&self, position: Position) -> Option<&str> {
        self.tiles.get(&position)?.improvement.as_deref()
    }

    fn set_improvement(&mut self, position: Position, improvement: String) {
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.improvement = Some(improvement);
        }
    }
}
