//! Tile-side types shared between the turn engine and tile providers.
//!
//! The tile data model itself is owned by the [`TileProvider`](crate::env::TileProvider)
//! implementation; these types only give the interface a typed vocabulary.

use std::fmt;
use std::str::FromStr;

use super::{PlayerId, UnitId};
use crate::state::ParseImprovementError;

/// Unit currently standing on a tile, together with its controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupant {
    pub unit: UnitId,
    pub owner: PlayerId,
}

impl Occupant {
    pub const fn new(unit: UnitId, owner: PlayerId) -> Self {
        Self { unit, owner }
    }
}

/// Transport route present on a tile.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadStatus {
    #[default]
    None,
    Road,
    Railroad,
}

impl RoadStatus {
    pub fn has_route(self) -> bool {
        !matches!(self, RoadStatus::None)
    }
}

/// Outcome a construction produces once its counter runs out.
///
/// Resolved once from the player-facing label when the work is queued.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImprovementWork {
    /// Clear the named terrain feature (forest, jungle, marsh...).
    RemoveFeature(String),
    /// Lay a road or railroad.
    BuildRoute(RoadStatus),
    /// Finish the named tile improvement (farm, mine...).
    BuildImprovement(String),
}

impl ImprovementWork {
    const REMOVE_PREFIX: &'static str = "Remove";

    /// Label shown to the player; parses back into the same work.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ImprovementWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImprovementWork::RemoveFeature(feature) => {
                write!(f, "{} {}", Self::REMOVE_PREFIX, feature)
            }
            ImprovementWork::BuildRoute(status) => write!(f, "{status}"),
            ImprovementWork::BuildImprovement(name) => f.write_str(name),
        }
    }
}

impl FromStr for ImprovementWork {
    type Err = ParseImprovementError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ParseImprovementError::Empty);
        }

        if let Some(rest) = label.strip_prefix(Self::REMOVE_PREFIX) {
            let feature = rest.trim();
            if feature.is_empty() {
                return Err(ParseImprovementError::MissingFeature);
            }
            return Ok(ImprovementWork::RemoveFeature(feature.to_string()));
        }

        match label {
            "Road" => Ok(ImprovementWork::BuildRoute(RoadStatus::Road)),
            "Railroad" => Ok(ImprovementWork::BuildRoute(RoadStatus::Railroad)),
            other => Ok(ImprovementWork::BuildImprovement(other.to_string())),
        }
    }
}

/// Improvement under construction on a tile and the turns of work left.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Construction {
    pub work: ImprovementWork,
    pub turns_remaining: u32,
}

impl Construction {
    pub fn new(work: ImprovementWork, turns_remaining: u32) -> Self {
        Self {
            work,
            turns_remaining,
        }
    }

    /// Parses `label` and starts a construction with the given duration.
    pub fn from_label(label: &str, turns_remaining: u32) -> Result<Self, ParseImprovementError> {
        Ok(Self::new(label.parse()?, turns_remaining))
    }
}
