//! Error types for the turn engine.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position, UnitId};

/// Rejections of a movement commitment.
///
/// A failed commitment never mutates the unit's budget or any tile.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("unit {unit} cannot reach {destination} this turn")]
    Unreachable { unit: UnitId, destination: Position },

    #[error("unit {unit} cannot enter {destination}: occupied by unit {occupant}")]
    Occupied {
        unit: UnitId,
        destination: Position,
        occupant: UnitId,
    },

    #[error("occupancy desync for unit {unit} at {position}")]
    OccupancyDesync { unit: UnitId, position: Position },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unreachable { .. } | Self::Occupied { .. } => ErrorSeverity::Recoverable,
            Self::OccupancyDesync { .. } => ErrorSeverity::Internal,
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unreachable { .. } => "MOVE_UNREACHABLE",
            Self::Occupied { .. } => "MOVE_OCCUPIED",
            Self::OccupancyDesync { .. } => "MOVE_OCCUPANCY_DESYNC",
            Self::Oracle(err) => err.error_code(),
        }
    }
}

/// Errors surfaced while running a unit's turn phases.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("move failed: {0}")]
    Move(#[from] MoveError),

    #[error("automation policy failed for unit {unit}: {reason}")]
    Automation { unit: UnitId, reason: String },
}

impl TurnError {
    pub fn automation(unit: UnitId, reason: impl Into<String>) -> Self {
        Self::Automation {
            unit,
            reason: reason.into(),
        }
    }
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::Move(err) => err.severity(),
            Self::Automation { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::Move(err) => err.error_code(),
            Self::Automation { .. } => "TURN_AUTOMATION_FAILED",
        }
    }
}
