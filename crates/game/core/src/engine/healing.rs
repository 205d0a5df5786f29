use crate::config::TurnConfig;
use crate::env::TileProvider;
use crate::state::{PlayerId, Position};

/// Health a resting unit of `owner` regains on the tile at `position`.
///
/// First match wins: city centre, own territory, unowned, foreign territory.
pub fn heal_amount(
    tiles: &dyn TileProvider,
    position: Position,
    owner: PlayerId,
    config: &TurnConfig,
) -> u32 {
    if tiles.is_city_center(position) {
        return config.heal_city_center;
    }

    match tiles.owner(position) {
        Some(tile_owner) if tile_owner == owner => config.heal_home_territory,
        None => config.heal_neutral_territory,
        Some(_) => config.heal_foreign_territory,
    }
}
