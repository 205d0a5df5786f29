//! Oracle access errors.
//!
//! Errors related to oracle availability and catalog lookups.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
///
/// Every variant is fatal: the turn engine cannot proceed without the catalog
/// or movement rules, and a unit whose type is missing from the catalog
/// points at broken content rather than a bad player command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// UnitCatalog is not available in the environment.
    #[error("UnitCatalog not available")]
    CatalogNotAvailable,

    /// MovementOracle is not available in the environment.
    #[error("MovementOracle not available")]
    MovementNotAvailable,

    /// AutomationPolicy is not available in the environment.
    #[error("AutomationPolicy not available")]
    AutomationNotAvailable,

    /// Unit type was not found in the catalog.
    #[error("unit type '{0}' not found in catalog")]
    UnknownUnitType(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            CatalogNotAvailable => "ORACLE_CATALOG_NOT_AVAILABLE",
            MovementNotAvailable => "ORACLE_MOVEMENT_NOT_AVAILABLE",
            AutomationNotAvailable => "ORACLE_AUTOMATION_NOT_AVAILABLE",
            UnknownUnitType(_) => "ORACLE_UNKNOWN_UNIT_TYPE",
        }
    }
}
