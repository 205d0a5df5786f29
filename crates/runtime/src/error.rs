//! Errors surfaced by the reference runtime.
//!
//! Wraps core turn failures with the unit they happened to so callers can
//! report them with context.
use thiserror::Error;
use unit_core::{GameError, MoveError, OracleError, PlayerId, Position, TurnError, UnitId};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("unit {0} is not on the roster")]
    UnknownUnit(UnitId),

    #[error("player {0} is not part of this game")]
    UnknownPlayer(PlayerId),

    #[error("turn processing failed for unit {unit}")]
    Turn {
        unit: UnitId,
        #[source]
        source: TurnError,
    },

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("cannot place unit {unit} at {position}")]
    Placement { unit: UnitId, position: Position },

    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}

impl RuntimeError {
    pub(crate) fn turn(unit: UnitId, source: TurnError) -> Self {
        Self::Turn { unit, source }
    }

    /// True if the game can carry on after reporting this error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Move(err) => err.severity().is_recoverable(),
            Self::Turn { source, .. } => source.severity().is_recoverable(),
            Self::UnknownUnit(_) | Self::UnknownPlayer(_) => true,
            Self::Oracle(_) | Self::Placement { .. } | Self::InvalidScenario(_) => false,
        }
    }
}
