//! Common error infrastructure for unit-core.
//!
//! Domain-specific errors (`MoveError`, `TurnError`, `OracleError`, parse
//! errors) live next to the code that raises them. This module provides the
//! classification shared by all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: each failure surface has its own error enum
//! - **Severity Classification**: callers pick a recovery strategy from
//!   [`ErrorSeverity`] instead of matching every variant
//! - **Stable Codes**: [`GameError::error_code`] gives log- and test-friendly ids

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry with different input (another tile, next turn)
/// - **Validation**: malformed input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency, indicates a bug
/// - **Fatal**: missing configuration or data; the turn cannot proceed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: destination occupied, destination out of reach this turn
    Recoverable,

    /// Examples: unparseable queued-action tag, empty improvement label
    Validation,

    /// Examples: occupancy map disagrees with the unit's position
    Internal,

    /// Examples: unit type missing from the catalog, movement oracle not wired
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or broken configuration.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all unit-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by recoverability, not impact
/// - Error codes are SCREAMING_SNAKE_CASE and prefixed by the error family
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
