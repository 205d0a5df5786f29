//! Runtime implementations of the `unit-core` oracle traits.
//!
//! These implementations are bundled into an [`OracleManager`] so the runtime
//! can build [`unit_core::GameEnv`] views on demand. Catalog, terrain and
//! diplomacy data are immutable once a game starts; dynamic tile state lives in
//! [`crate::GridWorld`].
mod catalog;
mod diplomacy;
mod movement;

use std::sync::Arc;

use unit_core::{AutomationPolicy, GameEnv, TurnConfig};

pub use catalog::CatalogOracleImpl;
pub use diplomacy::DiplomacyOracleImpl;
pub use movement::GridMovement;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) catalog: Arc<CatalogOracleImpl>,
    pub(crate) movement: Arc<GridMovement>,
    pub(crate) diplomacy: Arc<DiplomacyOracleImpl>,
    pub(crate) automation: Arc<dyn AutomationPolicy>,
    pub(crate) config: TurnConfig,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        catalog: Arc<CatalogOracleImpl>,
        movement: Arc<GridMovement>,
        diplomacy: Arc<DiplomacyOracleImpl>,
        automation: Arc<dyn AutomationPolicy>,
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

    /// Converts oracle manager into GameEnv for unit-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        GameEnv::with_all(
            self.catalog.as_ref(),
            self.movement.as_ref(),
            self.diplomacy.as_ref(),
            self.automation.as_ref(),
            self.config,
        )
    }

    pub fn catalog(&self) -> &CatalogOracleImpl {
        &self.catalog
    }

    pub fn diplomacy(&self) -> &DiplomacyOracleImpl {
        &self.diplomacy
    }

    pub fn config(&self) -> &TurnConfig {
        &self.config
    }
}
