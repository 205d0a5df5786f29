//! Per-turn rules for map units, shared across runtimes and tools.
//!
//! `unit-core` owns a unit's transient turn state (movement budget, standing
//! order, health) and the turn engine that drives it. Everything the engine
//! needs from the wider game (unit-type catalog, tiles, movement costs,
//! diplomacy, automation) is consumed through the traits in [`env`]. All
//! per-unit mutation flows through [`engine::UnitTurn`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use config::TurnConfig;
pub use engine::{
    ConstructionProgress, EndTurnReport, MoveError, PreTurnOutcome, TurnError, UnitTurn,
    heal_amount,
};
pub use env::{
    AutomationPolicy, DiplomacyOracle, DistanceMap, GameEnv, MovementOracle, OracleError,
    TileProvider, UnitCatalog, UnitType,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Construction, ImprovementWork, Occupant, ParseActionError, ParseImprovementError, PlayerId,
    Position, QueuedAction, RoadStatus, Unit, UnitId,
};
