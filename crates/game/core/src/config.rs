/// Turn-rule constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TurnConfig {
    /// Remaining budget below this value counts as exhausted.
    pub movement_epsilon: f32,
    /// Health regained on a city-centre tile.
    pub heal_city_center: u32,
    /// Health regained inside the unit owner's territory.
    pub heal_home_territory: u32,
    /// Health regained on unowned tiles.
    pub heal_neutral_territory: u32,
    /// Health regained inside anyone else's territory.
    pub heal_foreign_territory: u32,
}

impl TurnConfig {
    // ===== fixed rules =====
    pub const MAX_HEALTH: u32 = 100;
    /// Catalog unique that marks a unit type as able to work on tile improvements.
    pub const BUILD_IMPROVEMENTS_UNIQUE: &'static str = "Can build improvements";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MOVEMENT_EPSILON: f32 = 0.1;
    pub const DEFAULT_HEAL_CITY_CENTER: u32 = 20;
    pub const DEFAULT_HEAL_HOME_TERRITORY: u32 = 15;
    pub const DEFAULT_HEAL_NEUTRAL_TERRITORY: u32 = 10;
    pub const DEFAULT_HEAL_FOREIGN_TERRITORY: u32 = 5;

    pub const fn new() -> Self {
        Self {
            movement_epsilon: Self::DEFAULT_MOVEMENT_EPSILON,
            heal_city_center: Self::DEFAULT_HEAL_CITY_CENTER,
            heal_home_territory: Self::DEFAULT_HEAL_HOME_TERRITORY,
            heal_neutral_territory: Self::DEFAULT_HEAL_NEUTRAL_TERRITORY,
            heal_foreign_territory: Self::DEFAULT_HEAL_FOREIGN_TERRITORY,
        }
    }
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self::new()
    }
}
