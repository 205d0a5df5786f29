//! Reference runtime for the unit turn engine.
//!
//! This crate supplies concrete implementations of every collaborator
//! `unit-core` consumes and drives turns over them. Consumers build a
//! [`TurnRunner`] from a [`Scenario`] and call [`TurnRunner::play_round`].
//!
//! Modules are organized by responsibility:
//! - [`world`] holds mutable tile state behind [`unit_core::TileProvider`]
//! - [`oracle`] provides the catalog, movement and diplomacy oracles
//! - [`automation`] is the worker policy for automated units
//! - [`runner`] sequences player turns over the roster
//! - [`scenario`] assembles all of the above from loaded content
pub mod automation;
pub mod error;
pub mod oracle;
pub mod runner;
pub mod scenario;
pub mod world;

pub use automation::WorkerAutomation;
pub use error::{Result, RuntimeError};
pub use oracle::{CatalogOracleImpl, DiplomacyOracleImpl, GridMovement, OracleManager};
pub use runner::{RoundReport, TurnRunner};
pub use scenario::Scenario;
pub use world::{GridWorld, TileState};
