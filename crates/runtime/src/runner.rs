//! Sequential turn driver over a [`GridWorld`] and its unit roster.
//!
//! Units are processed one at a time in roster order. Each unit's phase
//! borrows the world mutably, so no two units ever observe a half-applied
//! move.
use unit_core::{
    EndTurnReport, GameError, PlayerId, Position, PreTurnOutcome, QueuedAction, TileProvider,
    TurnError, Unit, UnitId, UnitTurn,
};

use crate::error::{Result, RuntimeError};
use crate::oracle::OracleManager;
use crate::world::GridWorld;

/// What happened to every unit during one round.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundReport {
    pub turn: u32,
    pub pre_turn: Vec<(UnitId, PreTurnOutcome)>,
    pub end_turn: Vec<(UnitId, EndTurnReport)>,
}

impl RoundReport {
    pub fn outcome(&self, unit: UnitId) -> Option<&PreTurnOutcome> {
        self.pre_turn
            .iter()
            .find(|(id, _)| *id == unit)
            .map(|(_, outcome)| outcome)
    }

    pub fn end_report(&self, unit: UnitId) -> Option<&EndTurnReport> {
        self.end_turn
            .iter()
            .find(|(id, _)| *id == unit)
            .map(|(_, report)| report)
    }
}

pub struct TurnRunner {
    world: GridWorld,
    units: Vec<Unit>,
    players: Vec<PlayerId>,
    oracles: OracleManager,
    turn: u32,
}

impl TurnRunner {
    /// Creates a runner. Every unit must already stand on its tile in `world`.
    pub fn new(
        world: GridWorld,
        units: Vec<Unit>,
        players: Vec<PlayerId>,
        oracles: OracleManager,
    ) -> Result<Self> {
        for unit in &units {
            let standing = world.occupant(unit.position());
            if standing.is_none_or(|occupant| occupant.unit != unit.id()) {
                return Err(RuntimeError::Placement {
                    unit: unit.id(),
                    position: unit.position(),
                });
            }
        }

        Ok(Self {
            world,
            units,
            players,
            oracles,
            turn: 0,
        })
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Rounds completed so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn unit(&self, id: UnitId) -> Result<&Unit> {
        self.units
            .iter()
            .find(|unit| unit.id() == id)
            .ok_or(RuntimeError::UnknownUnit(id))
    }

    fn ensure_player(&self, player: PlayerId) -> Result<()> {
        if self.players.contains(&player) {
            Ok(())
        } else {
            Err(RuntimeError::UnknownPlayer(player))
        }
    }

    /// Runs `start_turn` for every unit of `player`.
    ///
    /// A unit whose turn fails with a recoverable error is logged and left out
    /// of the outcomes; the remaining units are still processed.
    pub fn start_player_turn(&mut self, player: PlayerId) -> Result<Vec<(UnitId, PreTurnOutcome)>> {
        self.ensure_player(player)?;
        let env = self.oracles.as_game_env();
        let mut outcomes = Vec::new();

        for unit in self.units.iter_mut().filter(|unit| unit.owner() == player) {
            let id = unit.id();
            let result = UnitTurn::new(unit, &mut self.world, env).start_turn();
            if let Some(outcome) = skip_recoverable(id, result)? {
                outcomes.push((id, outcome));
            }
        }

        tracing::debug!(%player, units = outcomes.len(), "player turn started");
        Ok(outcomes)
    }

    /// Runs `end_turn` for every unit of `player`, skipping recoverable
    /// failures like [`start_player_turn`](Self::start_player_turn).
    pub fn end_player_turn(&mut self, player: PlayerId) -> Result<Vec<(UnitId, EndTurnReport)>> {
        self.ensure_player(player)?;
        let env = self.oracles.as_game_env();
        let mut reports = Vec::new();

        for unit in self.units.iter_mut().filter(|unit| unit.owner() == player) {
            let id = unit.id();
            let result = UnitTurn::new(unit, &mut self.world, env).end_turn();
            if let Some(report) = skip_recoverable(id, result)? {
                reports.push((id, report));
            }
        }

        tracing::debug!(%player, units = reports.len(), "player turn ended");
        Ok(reports)
    }

    /// Player-issued move for one unit during its owner's turn.
    ///
    /// # Errors
    ///
    /// `RuntimeError::Move` for unreachable or occupied targets; state is left
    /// untouched in that case.
    pub fn move_unit(&mut self, id: UnitId, target: Position) -> Result<()> {
        let env = self.oracles.as_game_env();
        let unit = self
            .units
            .iter_mut()
            .find(|unit| unit.id() == id)
            .ok_or(RuntimeError::UnknownUnit(id))?;

        UnitTurn::new(unit, &mut self.world, env).move_to_tile(target)?;
        Ok(())
    }

    /// Replaces the standing order of a unit.
    pub fn set_action(&mut self, id: UnitId, action: QueuedAction) -> Result<()> {
        let unit = self
            .units
            .iter_mut()
            .find(|unit| unit.id() == id)
            .ok_or(RuntimeError::UnknownUnit(id))?;
        unit.action = action;
        Ok(())
    }

    /// Plays one full round: each player in order starts and ends its turn.
    pub fn play_round(&mut self) -> Result<RoundReport> {
        self.turn += 1;
        let mut report = RoundReport {
            turn: self.turn,
            ..RoundReport::default()
        };

        for player in self.players.clone() {
            report.pre_turn.extend(self.start_player_turn(player)?);
            report.end_turn.extend(self.end_player_turn(player)?);
        }

        tracing::info!(
            turn = self.turn,
            units = self.units.len(),
            "round complete"
        );
        Ok(report)
    }
}

/// Logs a recoverable per-unit failure and yields `None`; anything else is
/// returned as an error.
fn skip_recoverable<T>(
    unit: UnitId,
    result: std::result::Result<T, TurnError>,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.severity().is_recoverable() => {
            tracing::warn!(
                %unit,
                code = err.error_code(),
                error = %err,
                "unit turn rejected, continuing with the next unit"
            );
            Ok(None)
        }
        Err(err) => Err(RuntimeError::turn(unit, err)),
    }
}
