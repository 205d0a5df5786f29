use crate::state::{Construction, Occupant, PlayerId, Position, RoadStatus};

/// Mutable tile data consumed by the turn engine.
///
/// Implementations own occupancy, ownership, and improvement state for every
/// map cell. The engine holds `&mut` access for the duration of one unit's
/// phase, so each call observes a consistent map.
pub trait TileProvider {
    fn contains(&self, position: Position) -> bool;

    fn occupant(&self, position: Position) -> Option<Occupant>;

    /// Puts `occupant` on an empty tile. Returns false if the tile is
    /// occupied or off the map.
    fn place_occupant(&mut self, position: Position, occupant: Occupant) -> bool;

    /// Removes and returns whoever stands on the tile.
    fn vacate(&mut self, position: Position) -> Option<Occupant>;

    /// Controller whose territory contains the tile, if any.
    fn owner(&self, position: Position) -> Option<PlayerId>;

    fn is_city_center(&self, position: Position) -> bool;

    fn construction(&self, position: Position) -> Option<&Construction>;

    fn set_construction(&mut self, position: Position, construction: Option<Construction>);

    fn terrain_feature(&self, position: Position) -> Option<&str>;

    fn clear_terrain_feature(&mut self, position: Position);

    fn road_status(&self, position: Position) -> RoadStatus;

    fn set_road_status(&mut self, position: Position, status: RoadStatus);

    fn improvement(&self, position: Position) -> Option<&str>;

    fn set_improvement(&mut self, position: Position, improvement: String);

    fn is_occupied(&self, position: Position) -> bool {
        self.occupant(position).is_some()
    }
}
