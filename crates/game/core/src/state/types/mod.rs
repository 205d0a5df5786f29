pub mod action;
pub mod common;
pub mod tile;
pub mod unit;

pub use action::QueuedAction;
pub use common::{PlayerId, Position, UnitId};
pub use tile::{Construction, ImprovementWork, Occupant, RoadStatus};
pub use unit::Unit;
