//! Scenario system for unit placement and game initialization.
//!
//! A scenario combines loaded content (map, unit catalog, turn rules and
//! placements) into a ready-to-run [`TurnRunner`]. Unit ids are allocated
//! here in placement order, starting at 1.

use std::sync::Arc;

use game_content::{MapLayout, ScenarioSpec};
use unit_core::{Occupant, TileProvider, TurnConfig, Unit, UnitId, UnitType};

use crate::automation::WorkerAutomation;
use crate::error::{Result, RuntimeError};
use crate::oracle::{CatalogOracleImpl, DiplomacyOracleImpl, GridMovement, OracleManager};
use crate::runner::TurnRunner;
use crate::world::GridWorld;

pub struct Scenario {
    spec: ScenarioSpec,
    map: MapLayout,
    unit_types: Vec<UnitType>,
    config: TurnConfig,
}

impl Scenario {
    pub fn new(
        spec: ScenarioSpec,
        map: MapLayout,
        unit_types: Vec<UnitType>,
        config: TurnConfig,
    ) -> Self {
        Self {
            spec,
            map,
            unit_types,
            config,
        }
    }

    pub fn spec(&self) -> &ScenarioSpec {
        &self.spec
    }

    /// Builds the oracles and the world, then places every unit.
    ///
    /// # Errors
    ///
    /// - `RuntimeError::Oracle` if a placement names an unknown unit type
    /// - `RuntimeError::Placement` if a unit cannot stand on its tile
    /// - `RuntimeError::InvalidScenario` for bad automation settings or
    ///   constructions off the map
    pub fn build(self) -> Result<TurnRunner> {
        let catalog = Arc::new(CatalogOracleImpl::new(self.unit_types));
        let movement = Arc::new(GridMovement::from_layout(&self.map));
        let diplomacy = Arc::new(DiplomacyOracleImpl::new(
            self.spec.alliances.iter().copied(),
        ));
        let automation = WorkerAutomation::from_spec(&self.spec.automation).map_err(|e| {
            RuntimeError::InvalidScenario(format!(
                "automation improvement '{}': {}",
                self.spec.automation.improvement, e
            ))
        })?;

        let mut world = GridWorld::from_layout(&self.map);
        for placement in &self.spec.constructions {
            if !world.contains(placement.position) {
                return Err(RuntimeError::InvalidScenario(format!(
                    "construction at {} lies outside the map",
                    placement.position
                )));
            }
            world.set_construction(placement.position, Some(placement.construction.clone()));
        }

        let mut units = Vec::with_capacity(self.spec.units.len());
        for (index, placement) in self.spec.units.iter().enumerate() {
            let id = UnitId(index as u32 + 1);
            let mut unit = Unit::spawn(
                id,
                placement.owner,
                &placement.unit_type,
                placement.position,
                catalog.as_ref(),
            )?
            .with_action(placement.action);
            if let Some(health) = placement.health {
                unit = unit.with_health(health);
            }

            if !world.place_occupant(placement.position, Occupant::new(id, placement.owner)) {
                return Err(RuntimeError::Placement {
                    unit: id,
                    position: placement.position,
                });
            }
            tracing::debug!(
                unit = %id,
                kind = %unit,
                position = %placement.position,
                action = %unit.action,
                "unit placed"
            );
            units.push(unit);
        }

        tracing::info!(
            map = %self.spec.map,
            players = self.spec.players.len(),
            units = units.len(),
            "scenario ready"
        );

        let oracles = OracleManager::new(
            catalog,
            movement,
            diplomacy,
            Arc::new(automation),
            self.config,
        );
        TurnRunner::new(world, units, self.spec.players, oracles)
    }
}
