//! Multi-turn tile construction worked by improvement-capable units.

use crate::env::TileProvider;
use crate::state::{ImprovementWork, Position};

/// Result of one turn of work on a tile's construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstructionProgress {
    InProgress {
        work: ImprovementWork,
        turns_remaining: u32,
    },
    Completed(ImprovementWork),
}

impl ConstructionProgress {
    pub fn is_completed(&self) -> bool {
        matches!(self, ConstructionProgress::Completed(_))
    }
}

/// Advances the construction at `position` by one turn.
///
/// A counter already at zero counts as due and completes immediately.
/// Returns `None` when nothing is under construction.
pub(crate) fn work_on_improvement(
    tiles: &mut dyn TileProvider,
    position: Position,
) -> Option<ConstructionProgress> {
    let mut construction = tiles.construction(position)?.clone();
    construction.turns_remaining = construction.turns_remaining.saturating_sub(1);

    if construction.turns_remaining > 0 {
        let progress = ConstructionProgress::InProgress {
            work: construction.work.clone(),
            turns_remaining: construction.turns_remaining,
        };
        tiles.set_construction(position, Some(construction));
        return Some(progress);
    }

    match &construction.work {
        ImprovementWork::RemoveFeature(_) => tiles.clear_terrain_feature(position),
        ImprovementWork::BuildRoute(status) => tiles.set_road_status(position, *status),
        ImprovementWork::BuildImprovement(name) => tiles.set_improvement(position, name.clone()),
    }
    tiles.set_construction(position, None);

    Some(ConstructionProgress::Completed(construction.work))
}
