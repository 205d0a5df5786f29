//! Minimal worker policy implementing [`unit_core::AutomationPolicy`].
//!
//! An automated worker improves its owner's territory one tile at a time:
//! it queues the configured work where it stands if the tile qualifies,
//! otherwise walks to the cheapest reachable tile that does.

use game_content::AutomationSpec;
use unit_core::{
    AutomationPolicy, Construction, ImprovementWork, ParseImprovementError, PlayerId, Position,
    TileProvider, TurnError, UnitTurn,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkerAutomation {
    work: ImprovementWork,
    build_turns: u32,
}

impl WorkerAutomation {
    pub fn new(work: ImprovementWork, build_turns: u32) -> Self {
        Self { work, build_turns }
    }

    pub fn from_spec(spec: &AutomationSpec) -> Result<Self, ParseImprovementError> {
        Ok(Self::new(spec.improvement.parse()?, spec.build_turns))
    }

    pub fn work(&self) -> &ImprovementWork {
        &self.work
    }

    /// Whether the configured work is worth queuing on `position` for `owner`.
    pub fn qualifies(&self, tiles: &dyn TileProvider, position: Position, owner: PlayerId) -> bool {
        if tiles.owner(position) != Some(owner)
            || tiles.is_city_center(position)
            || tiles.construction(position).is_some()
        {
            return false;
        }

        match &self.work {
            ImprovementWork::RemoveFeature(feature) => {
                tiles.terrain_feature(position) == Some(feature.as_str())
            }
            ImprovementWork::BuildRoute(status) => tiles.road_status(position) != *status,
            ImprovementWork::BuildImprovement(_) => tiles.improvement(position).is_none(),
        }
    }

    fn queue_here(&self, turn: &mut UnitTurn<'_>) {
        let position = turn.unit().position();
        let construction = Construction::new(self.work.clone(), self.build_turns);
        turn.tiles_mut().set_construction(position, Some(construction));
        tracing::info!(
            unit = %turn.unit().id(),
            %position,
            work = %self.work,
            turns = self.build_turns,
            "worker queued construction"
        );
    }
}

impl AutomationPolicy for WorkerAutomation {
    fn automate(&self, turn: &mut UnitTurn<'_>) -> Result<(), TurnError> {
        let unit = turn.unit();
        let (id, owner, position) = (unit.id(), unit.owner(), unit.position());

        // Keep working whatever is already underway here.
        if turn.tiles().construction(position).is_some() {
            return Ok(());
        }
        if self.qualifies(turn.tiles(), position, owner) {
            self.queue_here(turn);
            return Ok(());
        }

        let distances = turn.distance_to_tiles()?;
        let target = distances
            .iter()
            .filter(|&(&tile, _)| !turn.tiles().is_occupied(tile))
            .filter(|&(&tile, _)| self.qualifies(turn.tiles(), tile, owner))
            .min_by(|a, b| a.1.total_cmp(b.1).then_with(|| a.0.cmp(b.0)))
            .map(|(&tile, _)| tile);

        let Some(target) = target else {
            tracing::debug!(unit = %id, %position, "worker found nothing to improve");
            return Ok(());
        };

        turn.move_to_tile(target)?;
        self.queue_here(turn);
        Ok(())
    }
}
