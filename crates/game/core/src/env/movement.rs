use std::collections::BTreeMap;

use super::TileProvider;
use crate::state::{Position, Unit};

/// Tiles reachable this turn mapped to the movement cost of reaching them.
pub type DistanceMap = BTreeMap<Position, f32>;

/// Movement cost oracle: reachability and route stepping.
///
/// The engine never caches results; every query sees the latest committed
/// position, budget and occupancy.
pub trait MovementOracle: Send + Sync {
    /// Tiles `unit` can reach from `origin` spending at most `budget`.
    ///
    /// Tiles holding other units may be reported (they are visible) even
    /// though they cannot be entered. Empty when `budget` is zero.
    fn distance_to_tiles(
        &self,
        tiles: &dyn TileProvider,
        unit: &Unit,
        origin: Position,
        budget: f32,
    ) -> DistanceMap;

    /// Farthest tile along the best route from `origin` toward `destination`
    /// that `unit` can enter this turn. Returns `origin` when no progress is
    /// possible.
    fn head_towards(
        &self,
        tiles: &dyn TileProvider,
        unit: &Unit,
        origin: Position,
        destination: Position,
        budget: f32,
    ) -> Position;
}
