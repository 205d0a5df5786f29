use std::fmt;

use super::{PlayerId, Position, QueuedAction, UnitId};
use crate::config::TurnConfig;
use crate::env::{OracleError, UnitCatalog, UnitType};

/// Transient per-turn state of a single map unit.
///
/// The unit owns its map coordinate; tiles only hold the matching
/// [`Occupant`](super::Occupant) record. Both are updated together by
/// [`UnitTurn::move_to_tile`](crate::engine::UnitTurn::move_to_tile).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    id: UnitId,
    owner: PlayerId,
    type_name: String,
    max_movement: u32,
    current_movement: f32,
    health: u32,
    position: Position,
    /// Standing order consulted by pre-turn processing.
    pub action: QueuedAction,
}

impl Unit {
    /// Creates a unit at full health with an exhausted budget; the first
    /// `start_turn` fills it.
    pub fn new(id: UnitId, owner: PlayerId, unit_type: &UnitType, position: Position) -> Self {
        Self {
            id,
            owner,
            type_name: unit_type.name.clone(),
            max_movement: unit_type.movement,
            current_movement: 0.0,
            health: TurnConfig::MAX_HEALTH,
            position,
            action: QueuedAction::Idle,
        }
    }

    /// Looks the type up in the catalog and creates the unit.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnknownUnitType` if the catalog has no such type.
    pub fn spawn(
        id: UnitId,
        owner: PlayerId,
        type_name: &str,
        position: Position,
        catalog: &dyn UnitCatalog,
    ) -> Result<Self, OracleError> {
        let unit_type = catalog.require(type_name)?;
        Ok(Self::new(id, owner, unit_type, position))
    }

    pub fn with_action(mut self, action: QueuedAction) -> Self {
        self.action = action;
        self
    }

    /// Sets health, clamped to [`TurnConfig::MAX_HEALTH`].
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.min(TurnConfig::MAX_HEALTH);
        self
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn max_movement(&self) -> u32 {
        self.max_movement
    }

    pub fn current_movement(&self) -> f32 {
        self.current_movement
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_movement == 0.0
    }

    /// True once any budget was spent since the last reset.
    pub fn has_moved_this_turn(&self) -> bool {
        self.current_movement != self.max_movement as f32
    }

    /// Refills the budget to the type's allowance.
    pub fn reset_movement(&mut self) {
        self.current_movement = self.max_movement as f32;
    }

    /// Spends the whole remaining budget (attacks, forced actions).
    pub fn exhaust_movement(&mut self) {
        self.current_movement = 0.0;
    }

    /// Deducts `cost`; a remainder below `epsilon` snaps to exactly zero.
    pub(crate) fn spend_movement(&mut self, cost: f32, epsilon: f32) {
        let remaining = self.current_movement - cost;
        self.current_movement = if remaining < epsilon { 0.0 } else { remaining };
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Adds `amount` health up to `max`; returns the health actually gained.
    pub fn heal_by(&mut self, amount: u32, max: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(max);
        self.health.saturating_sub(before)
    }

    /// Remaining over maximum budget, e.g. `"1.5/2"` or `"2/2"`.
    pub fn movement_string(&self) -> String {
        let tenths = (f64::from(self.current_movement) * 10.0).round() as i64;
        let (whole, fraction) = (tenths / 10, tenths % 10);
        if fraction == 0 {
            format!("{whole}/{}", self.max_movement)
        } else {
            format!("{whole}.{fraction}/{}", self.max_movement)
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.type_name, self.owner)
    }
}
