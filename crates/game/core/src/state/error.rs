//! Errors raised while accepting external text at the state boundary.
//!
//! Queued actions and improvement labels arrive as strings from saves and
//! player input. They are parsed exactly once into closed variants; these
//! errors report what could not be parsed.

use crate::error::{ErrorSeverity, GameError};

/// Failure to parse a legacy queued-action tag such as `"moveTo 3,4"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseActionError {
    /// The tag is not one of the known action kinds.
    #[error("unknown queued action '{0}'")]
    UnknownTag(String),

    /// A `moveTo` tag whose destination is not `x,y` integers.
    #[error("malformed moveTo destination '{0}'")]
    MalformedDestination(String),
}

impl GameError for ParseActionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTag(_) => "STATE_UNKNOWN_ACTION_TAG",
            Self::MalformedDestination(_) => "STATE_MALFORMED_DESTINATION",
        }
    }
}

/// Failure to resolve an improvement label into an [`ImprovementWork`](crate::state::ImprovementWork).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseImprovementError {
    #[error("improvement label is empty")]
    Empty,

    #[error("removal label names no terrain feature")]
    MissingFeature,
}

impl GameError for ParseImprovementError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "STATE_EMPTY_IMPROVEMENT_LABEL",
            Self::MissingFeature => "STATE_MISSING_REMOVED_FEATURE",
        }
    }
}
