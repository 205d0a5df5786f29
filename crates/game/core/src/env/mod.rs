//! Traits describing the collaborators a unit's turn depends on.
//!
//! Oracles expose the unit-type catalog, movement rules, diplomacy, and the
//! automation policy. Tile data is mutable and passed separately as a
//! [`TileProvider`]. The [`GameEnv`] aggregate bundles the read-only oracles
//! so the engine can reach everything it needs without hard coupling to
//! concrete implementations.
mod automation;
mod catalog;
mod diplomacy;
mod error;
mod map;
mod movement;

pub use automation::AutomationPolicy;
pub use catalog::{UnitCatalog, UnitType};
pub use diplomacy::DiplomacyOracle;
pub use error::OracleError;
pub use map::TileProvider;
pub use movement::{DistanceMap, MovementOracle};

use std::fmt;

use crate::config::TurnConfig;
use crate::state::PlayerId;

/// Aggregates the oracles required by the turn engine.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    catalog: Option<&'a dyn UnitCatalog>,
    movement: Option<&'a dyn MovementOracle>,
    diplomacy: Option<&'a dyn DiplomacyOracle>,
    automation: Option<&'a dyn AutomationPolicy>,
    config: TurnConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        catalog: Option<&'a dyn UnitCatalog>,
        movement: Option<&'a dyn MovementOracle>,
        diplomacy: Option<&'a dyn DiplomacyOracle>,
        automation: Option<&'a dyn AutomationPolicy>,
        config: TurnConfig,
    ) -> Self {
        Self {
            catalog,
            movement,
            diplomacy,
            automation,
            config,
        }
    }

    pub fn with_all(
        catalog: &'a dyn UnitCatalog,
        movement: &'a dyn MovementOracle,
        diplomacy: &'a dyn DiplomacyOracle,
        automation: &'a dyn AutomationPolicy,
        config: TurnConfig,
    ) -> Self {
        Self::new(
            Some(catalog),
            Some(movement),
            Some(diplomacy),
            Some(automation),
            config,
        )
    }

    pub fn empty() -> Self {
        Self::new(None, None, None, None, TurnConfig::default())
    }

    pub fn with_catalog(mut self, catalog: &'a dyn UnitCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_movement(mut self, movement: &'a dyn MovementOracle) -> Self {
        self.movement = Some(movement);
        self
    }

    pub fn with_diplomacy(mut self, diplomacy: &'a dyn DiplomacyOracle) -> Self {
        self.diplomacy = Some(diplomacy);
        self
    }

    pub fn with_automation(mut self, automation: &'a dyn AutomationPolicy) -> Self {
        self.automation = Some(automation);
        self
    }

    pub fn with_config(mut self, config: TurnConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the UnitCatalog, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CatalogNotAvailable` if no catalog was provided.
    pub fn catalog(&self) -> Result<&'a dyn UnitCatalog, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    /// Returns the MovementOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MovementNotAvailable` if no movement oracle was provided.
    pub fn movement(&self) -> Result<&'a dyn MovementOracle, OracleError> {
        self.movement.ok_or(OracleError::MovementNotAvailable)
    }

    /// Returns the AutomationPolicy, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::AutomationNotAvailable` if no policy was provided.
    pub fn automation(&self) -> Result<&'a dyn AutomationPolicy, OracleError> {
        self.automation.ok_or(OracleError::AutomationNotAvailable)
    }

    pub fn config(&self) -> &TurnConfig {
        &self.config
    }

    /// Whether units of `other` threaten units of `player`.
    ///
    /// Without a diplomacy oracle every other controller counts as hostile.
    pub fn is_hostile(&self, player: PlayerId, other: PlayerId) -> bool {
        if player == other {
            return false;
        }
        self.diplomacy
            .map_or(true, |diplomacy| diplomacy.is_hostile(player, other))
    }
}

impl fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEnv")
            .field("catalog", &self.catalog.is_some())
            .field("movement", &self.movement.is_some())
            .field("diplomacy", &self.diplomacy.is_some())
            .field("automation", &self.automation.is_some())
            .field("config", &self.config)
            .finish()
    }
}
