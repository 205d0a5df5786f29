//! Scenario loader.
//!
//! Scenarios pick a map and place units, in-progress constructions and
//! alliances on it. Standing orders use the legacy text tags
//! (`"moveTo x,y"`, `"automation"`, `"fortifying"`) and are parsed here,
//! once, into [`QueuedAction`].

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use unit_core::{Construction, PlayerId, Position, QueuedAction};

use crate::definitions::{AutomationSpec, ConstructionPlacement, ScenarioSpec, UnitPlacement};
use crate::loaders::{LoadResult, parse_ron, read_file};

#[derive(Debug, Clone, Deserialize)]
struct ScenarioRon {
    map: String,
    players: Vec<u16>,
    #[serde(default)]
    alliances: Vec<(u16, u16)>,
    #[serde(default)]
    units: Vec<UnitRon>,
    #[serde(default)]
    constructions: Vec<ConstructionRon>,
    #[serde(default)]
    automation: Option<AutomationRon>,
}

#[derive(Debug, Clone, Deserialize)]
struct UnitRon {
    unit_type: String,
    owner: u16,
    at: (i32, i32),
    #[serde(default)]
    action: String,
    #[serde(default)]
    health: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct ConstructionRon {
    at: (i32, i32),
    work: String,
    turns: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct AutomationRon {
    improvement: String,
    build_turns: u32,
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a scenario from RON text.
    ///
    /// Fails when a unit belongs to an undeclared player, two units share a
    /// tile, or a standing order or construction label cannot be parsed.
    pub fn parse(content: &str) -> LoadResult<ScenarioSpec> {
        let data: ScenarioRon = parse_ron(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        if data.players.is_empty() {
            anyhow::bail!("Scenario declares no players");
        }
        let players: Vec<PlayerId> = data.players.iter().copied().map(PlayerId).collect();
        let known = |id: u16| players.contains(&PlayerId(id));

        let mut alliances = Vec::with_capacity(data.alliances.len());
        for (a, b) in data.alliances {
            if !known(a) || !known(b) {
                anyhow::bail!("Alliance ({}, {}) names an undeclared player", a, b);
            }
            alliances.push((PlayerId(a), PlayerId(b)));
        }

        let mut occupied = BTreeSet::new();
        let mut units = Vec::with_capacity(data.units.len());
        for unit in data.units {
            let position = Position::new(unit.at.0, unit.at.1);
            if !known(unit.owner) {
                anyhow::bail!(
                    "{} at {} belongs to undeclared player {}",
                    unit.unit_type,
                    position,
                    unit.owner
                );
            }
            if !occupied.insert(position) {
                anyhow::bail!("More than one unit placed at {}", position);
            }
            let action: QueuedAction = unit.action.parse().map_err(|e| {
                anyhow::anyhow!("Invalid action for {} at {}: {}", unit.unit_type, position, e)
            })?;
            units.push(UnitPlacement {
                unit_type: unit.unit_type,
                owner: PlayerId(unit.owner),
                position,
                action,
                health: unit.health,
            });
        }

        let constructions = data
            .constructions
            .into_iter()
            .map(|entry| {
                let position = Position::new(entry.at.0, entry.at.1);
                let construction = Construction::from_label(&entry.work, entry.turns)
                    .map_err(|e| anyhow::anyhow!("Invalid construction at {}: {}", position, e))?;
                Ok(ConstructionPlacement {
                    position,
                    construction,
                })
            })
            .collect::<LoadResult<Vec<_>>>()?;

        let automation = data
            .automation
            .map(|spec| AutomationSpec {
                improvement: spec.improvement,
                build_turns: spec.build_turns,
            })
            .unwrap_or_default();

        Ok(ScenarioSpec {
            map: data.map,
            players,
            alliances,
            units,
            constructions,
            automation,
        })
    }
}
