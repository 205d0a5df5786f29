//! Per-turn lifecycle of a single unit.
//!
//! [`UnitTurn`] borrows one unit and the tile provider for the duration of a
//! phase and drives:
//!
//! 1. `start_turn` → budget reset → `do_pre_turn_action` (resume a queued
//!    move or hand the unit to the automation policy, unless a hostile unit
//!    is within reach)
//! 2. any number of player-issued `move_to_tile` commitments
//! 3. `end_turn` → `do_post_turn_action` (construction) → heal if the unit
//!    did not move
//!
//! All occupancy changes go through `move_to_tile`, which vacates the source
//! and occupies the target as one step and leaves everything untouched on
//! failure.

mod construction;
mod errors;
mod healing;

pub use construction::ConstructionProgress;
pub use errors::{MoveError, TurnError};
pub use healing::heal_amount;

use crate::config::TurnConfig;
use crate::env::{DistanceMap, GameEnv, OracleError, TileProvider};
use crate::error::GameError;
use crate::state::{Occupant, Position, QueuedAction, Unit};

/// What pre-turn processing did with the unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreTurnOutcome {
    /// The budget was already spent when processing began.
    Exhausted,
    /// Hostile units are within reach; standing orders were not executed.
    Interrupted { threats: Vec<Position> },
    /// The queued move could not make progress this turn.
    Blocked { destination: Position },
    /// The queued move used up the budget short of its destination.
    Advanced { destination: Position },
    /// The unit reached its queued destination; the order was cleared.
    Arrived { destination: Position },
    /// The automation policy acted for the unit.
    Automated,
    /// No standing order to execute.
    Idle,
}

/// Passive effects applied by [`UnitTurn::end_turn`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EndTurnReport {
    pub construction: Option<ConstructionProgress>,
    pub healed: u32,
}

/// Turn driver for one unit.
pub struct UnitTurn<'a> {
    unit: &'a mut Unit,
    tiles: &'a mut dyn TileProvider,
    env: GameEnv<'a>,
}

impl<'a> UnitTurn<'a> {
    pub fn new(unit: &'a mut Unit, tiles: &'a mut dyn TileProvider, env: GameEnv<'a>) -> Self {
        Self { unit, tiles, env }
    }

    pub fn unit(&self) -> &Unit {
        &*self.unit
    }

    pub fn tiles(&self) -> &dyn TileProvider {
        &*self.tiles
    }

    /// Mutable tile access for policies that queue construction.
    ///
    /// Occupancy must only change through [`move_to_tile`](Self::move_to_tile).
    pub fn tiles_mut(&mut self) -> &mut dyn TileProvider {
        &mut *self.tiles
    }

    pub fn env(&self) -> GameEnv<'a> {
        self.env
    }

    fn config(&self) -> &TurnConfig {
        self.env.config()
    }

    /// Refills the budget and runs pre-turn processing.
    pub fn start_turn(&mut self) -> Result<PreTurnOutcome, TurnError> {
        self.unit.reset_movement();
        tracing::debug!(
            unit = %self.unit.id(),
            movement = %self.unit.movement_string(),
            "turn started"
        );
        self.do_pre_turn_action()
    }

    /// Executes the unit's standing order with whatever budget remains.
    ///
    /// Visible threats are re-checked before every step of a queued move. An
    /// interrupted or blocked move keeps its destination for later turns.
    pub fn do_pre_turn_action(&mut self) -> Result<PreTurnOutcome, TurnError> {
        if self.unit.is_exhausted() {
            return Ok(PreTurnOutcome::Exhausted);
        }

        loop {
            let threats = self.visible_threats()?;
            if !threats.is_empty() {
                tracing::warn!(
                    unit = %self.unit.id(),
                    position = %self.unit.position(),
                    threats = threats.len(),
                    "hostile units in reach, holding standing orders"
                );
                return Ok(PreTurnOutcome::Interrupted { threats });
            }

            match self.unit.action {
                QueuedAction::MoveTo(destination) => {
                    if let Some(outcome) = self.step_toward(destination)? {
                        return Ok(outcome);
                    }
                }
                QueuedAction::Automated => {
                    let policy = self.env.automation()?;
                    policy.automate(self)?;
                    return Ok(PreTurnOutcome::Automated);
                }
                QueuedAction::Idle | QueuedAction::Fortifying => {
                    return Ok(PreTurnOutcome::Idle);
                }
            }
        }
    }

    /// One step of a queued move. `None` means budget remains and the loop
    /// should re-check threats and continue.
    fn step_toward(&mut self, destination: Position) -> Result<Option<PreTurnOutcome>, TurnError> {
        let origin = self.unit.position();
        if origin == destination {
            self.unit.action = QueuedAction::Idle;
            return Ok(Some(PreTurnOutcome::Arrived { destination }));
        }

        let budget = self.unit.current_movement();
        let reached = self.env.movement()?.head_towards(
            &*self.tiles,
            &*self.unit,
            origin,
            destination,
            budget,
        );
        if reached == origin {
            tracing::debug!(unit = %self.unit.id(), %destination, "queued move blocked");
            return Ok(Some(PreTurnOutcome::Blocked { destination }));
        }

        match self.move_to_tile(reached) {
            Ok(()) => {}
            Err(err) if err.severity().is_recoverable() => {
                tracing::warn!(
                    unit = %self.unit.id(),
                    %destination,
                    error = %err,
                    "queued move step rejected"
                );
                return Ok(Some(PreTurnOutcome::Blocked { destination }));
            }
            Err(err) => return Err(err.into()),
        }

        if reached == destination {
            self.unit.action = QueuedAction::Idle;
            tracing::info!(unit = %self.unit.id(), %destination, "arrived at queued destination");
            return Ok(Some(PreTurnOutcome::Arrived { destination }));
        }

        // Continue only while the budget strictly decreases.
        if self.unit.is_exhausted() || self.unit.current_movement() >= budget {
            return Ok(Some(PreTurnOutcome::Advanced { destination }));
        }
        Ok(None)
    }

    /// Tiles within reach this turn that hold a hostile unit.
    pub fn visible_threats(&self) -> Result<Vec<Position>, OracleError> {
        let owner = self.unit.owner();
        let threats = self
            .distance_to_tiles()?
            .into_keys()
            .filter(|&position| {
                self.tiles
                    .occupant(position)
                    .is_some_and(|occupant| self.env.is_hostile(owner, occupant.owner))
            })
            .collect();
        Ok(threats)
    }

    /// Fresh reachable-tile map from the current position and budget.
    pub fn distance_to_tiles(&self) -> Result<DistanceMap, OracleError> {
        let movement = self.env.movement()?;
        Ok(movement.distance_to_tiles(
            &*self.tiles,
            &*self.unit,
            self.unit.position(),
            self.unit.current_movement(),
        ))
    }

    /// Whether the unit's type declares the capability tag.
    ///
    /// # Errors
    ///
    /// Fails if the catalog is missing or does not know the unit's type.
    pub fn has_unique(&self, unique: &str) -> Result<bool, OracleError> {
        let catalog = self.env.catalog()?;
        Ok(catalog.require(self.unit.type_name())?.has_unique(unique))
    }

    /// Commits a move to `target`, paying the reported cost.
    ///
    /// # Errors
    ///
    /// - `MoveError::Unreachable` if `target` is not in the reachable-tile map
    /// - `MoveError::Occupied` if another unit stands on `target`
    ///
    /// Neither budget nor occupancy changes when an error is returned.
    pub fn move_to_tile(&mut self, target: Position) -> Result<(), MoveError> {
        let unit = self.unit.id();
        let distances = self.distance_to_tiles()?;
        let cost = *distances.get(&target).ok_or(MoveError::Unreachable {
            unit,
            destination: target,
        })?;

        if let Some(occupant) = self.tiles.occupant(target) {
            return Err(MoveError::Occupied {
                unit,
                destination: target,
                occupant: occupant.unit,
            });
        }

        let origin = self.unit.position();
        self.relocate(origin, target)?;
        let epsilon = self.config().movement_epsilon;
        self.unit.spend_movement(cost, epsilon);
        self.unit.set_position(target);

        tracing::debug!(
            unit = %unit,
            from = %origin,
            to = %target,
            cost,
            movement = %self.unit.movement_string(),
            "unit moved"
        );
        Ok(())
    }

    /// Vacates `origin` and occupies `target`, rolling back on failure.
    fn relocate(&mut self, origin: Position, target: Position) -> Result<(), MoveError> {
        let unit = self.unit.id();
        let occupant = Occupant::new(unit, self.unit.owner());

        match self.tiles.vacate(origin) {
            Some(found) if found == occupant => {}
            found => {
                if let Some(other) = found {
                    self.tiles.place_occupant(origin, other);
                }
                return Err(MoveError::OccupancyDesync {
                    unit,
                    position: origin,
                });
            }
        }

        if !self.tiles.place_occupant(target, occupant) {
            self.tiles.place_occupant(origin, occupant);
            return Err(MoveError::OccupancyDesync {
                unit,
                position: target,
            });
        }
        Ok(())
    }

    /// Applies passive end-of-turn effects.
    pub fn end_turn(&mut self) -> Result<EndTurnReport, TurnError> {
        let construction = self.do_post_turn_action()?;
        let healed = if self.unit.has_moved_this_turn() {
            0
        } else {
            self.heal()
        };

        Ok(EndTurnReport {
            construction,
            healed,
        })
    }

    /// Works on the construction under an improvement-capable unit.
    pub fn do_post_turn_action(&mut self) -> Result<Option<ConstructionProgress>, TurnError> {
        let position = self.unit.position();
        if self.tiles.construction(position).is_none() {
            return Ok(None);
        }
        if !self.has_unique(TurnConfig::BUILD_IMPROVEMENTS_UNIQUE)? {
            return Ok(None);
        }

        let progress = construction::work_on_improvement(&mut *self.tiles, position);
        match &progress {
            Some(ConstructionProgress::Completed(work)) => {
                tracing::info!(unit = %self.unit.id(), %position, %work, "construction completed");
            }
            Some(ConstructionProgress::InProgress {
                work,
                turns_remaining,
            }) => {
                tracing::debug!(
                    unit = %self.unit.id(),
                    %position,
                    %work,
                    turns_remaining,
                    "construction advanced"
                );
            }
            None => {}
        }
        Ok(progress)
    }

    fn heal(&mut self) -> u32 {
        let config = *self.config();
        let amount = heal_amount(
            &*self.tiles,
            self.unit.position(),
            self.unit.owner(),
            &config,
        );
        let healed = self.unit.heal_by(amount, TurnConfig::MAX_HEALTH);
        if healed > 0 {
            tracing::debug!(unit = %self.unit.id(), healed, health = self.unit.health(), "unit healed");
        }
        healed
    }
}

#[cfg(test)]
mod tests;
