use unit_core::{Construction, PlayerId, Position, QueuedAction};

/// A unit to place when the scenario starts.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitPlacement {
    pub unit_type: String,
    pub owner: PlayerId,
    pub position: Position,
    pub action: QueuedAction,
    pub health: Option<u32>,
}

/// Work already underway on a tile when the scenario starts.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstructionPlacement {
    pub position: Position,
    pub construction: Construction,
}

/// What automated workers queue on a qualifying tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutomationSpec {
    pub improvement: String,
    pub build_turns: u32,
}

impl Default for AutomationSpec {
    fn default() -> Self {
        Self {
            improvement: "Road".to_string(),
            build_turns: 3,
        }
    }
}

/// Entity placement and diplomacy on top of a map.
///
/// Players appear in turn order. Two players are hostile unless listed
/// together in `alliances`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioSpec {
    pub map: String,
    pub players: Vec<PlayerId>,
    pub alliances: Vec<(PlayerId, PlayerId)>,
    pub units: Vec<UnitPlacement>,
    pub constructions: Vec<ConstructionPlacement>,
    pub automation: AutomationSpec,
}

impl ScenarioSpec {
    pub fn is_allied(&self, player: PlayerId, other: PlayerId) -> bool {
        self.alliances
            .iter()
            .any(|&(a, b)| (a, b) == (player, other) || (b, a) == (player, other))
    }
}
