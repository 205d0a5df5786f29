//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Turn rules (`config.toml`)
//! - Unit-type catalog (`units.ron`)
//! - Map layouts with terrain, features, roads and city territory
//! - Scenarios placing units, constructions and alliances on a map
//!
//! Content is consumed by runtime oracles and never appears in unit state.

pub mod definitions;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use definitions::{
    AutomationSpec, ConstructionPlacement, MapLayout, ScenarioSpec, TerrainKind, TileSpec,
    UnitPlacement,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, MapLoader, ScenarioLoader, UnitCatalogLoader,
};
