//! Static content definitions consumed by the runtime.
//!
//! Loaders produce these from RON files; tests and tools may also build them
//! directly.
mod map;
mod scenario;
mod terrain;

pub use map::{MapLayout, TileSpec};
pub use scenario::{AutomationSpec, ConstructionPlacement, ScenarioSpec, UnitPlacement};
pub use terrain::TerrainKind;
