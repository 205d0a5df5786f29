//! Content loaders for reading game data from files.
//!
//! Each loader turns one RON/TOML file into core types or
//! [`crate::definitions`] values. File formats are private to the loader.

pub mod config;
pub mod factory;
pub mod map;
pub mod scenario;
pub mod units;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use map::MapLoader;
pub use scenario::ScenarioLoader;
pub use units::UnitCatalogLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Parses RON with `implicit_some`, so optional fields may be written bare
/// (`terrain: Water`) as well as `Some(Water)`.
pub(crate) fn parse_ron<T>(content: &str) -> Result<T, ron::error::SpannedError>
where
    T: serde::de::DeserializeOwned,
{
    ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str(content)
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
