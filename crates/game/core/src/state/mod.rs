//! Unit state and the typed vocabulary shared with tile providers.
//!
//! The turn engine mutates [`Unit`] values; tile data stays with the
//! provider and is only described here.
mod error;
pub mod types;

pub use error::{ParseActionError, ParseImprovementError};
pub use types::{
    Construction, ImprovementWork, Occupant, PlayerId, Position, QueuedAction, RoadStatus, Unit,
    UnitId,
};
