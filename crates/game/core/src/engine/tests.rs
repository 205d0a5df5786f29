use std::collections::BTreeMap;

use super::*;
use crate::env::{AutomationPolicy, DiplomacyOracle, MovementOracle, UnitCatalog, UnitType};
use crate::state::{Construction, ImprovementWork, PlayerId, RoadStatus, UnitId};

const HOME: PlayerId = PlayerId(1);
const RIVAL: PlayerId = PlayerId(2);

#[derive(Default)]
struct TestTile {
    cost: f32,
    owner: Option<PlayerId>,
    city_center: bool,
    feature: Option<String>,
    improvement: Option<String>,
    road: RoadStatus,
    construction: Option<Construction>,
    occupant: Option<Occupant>,
}

#[derive(Default)]
struct TestMap {
    tiles: BTreeMap<Position, TestTile>,
}

impl TestMap {
    /// A horizontal corridor `(0, 0) ..= (len - 1, 0)` with the given entry costs.
    fn corridor(costs: &[f32]) -> Self {
        let tiles = costs
            .iter()
            .enumerate()
            .map(|(x, &cost)| {
                let tile = TestTile {
                    cost,
                    ..TestTile::default()
                };
                (Position::new(x as i32, 0), tile)
            })
            .collect();
        Self { tiles }
    }

    fn tile_mut(&mut self, position: Position) -> &mut TestTile {
        self.tiles.get_mut(&position).expect("tile in test map")
    }

    fn occupied_by(&self, unit: UnitId) -> Vec<Position> {
        self.tiles
            .iter()
            .filter(|(_, tile)| tile.occupant.is_some_and(|o| o.unit == unit))
            .map(|(&position, _)| position)
            .collect()
    }
}

impl TileProvider for TestMap {
    fn contains(&self, position: Position) -> bool {
        self.tiles.contains_key(&position)
    }

    fn occupant(&self, position: Position) -> Option<Occupant> {
        self.tiles.get(&position).and_then(|tile| tile.occupant)
    }

    fn place_occupant(&mut self, position: Position, occupant: Occupant) -> bool {
        match self.tiles.get_mut(&position) {
            Some(tile) if tile.occupant.is_none() => {
                tile.occupant = Some(occupant);
                true
            }
            _ => false,
        }
    }

    fn vacate(&mut self, position: Position) -> Option<Occupant> {
        self.tiles.get_mut(&position)?.occupant.take()
    }

    fn owner(&self, position: Position) -> Option<PlayerId> {
        self.tiles.get(&position).and_then(|tile| tile.owner)
    }

    fn is_city_center(&self, position: Position) -> bool {
        self.tiles.get(&position).is_some_and(|tile| tile.city_center)
    }

    fn construction(&self, position: Position) -> Option<&Construction> {
        self.tiles.get(&position)?.construction.as_ref()
    }

    fn set_construction(&mut self, position: Position, construction: Option<Construction>) {
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.construction = construction;
        }
    }

    fn terrain_feature(&self, position: Position) -> Option<&str> {
        self.tiles.get(&position)?.feature.as_deref()
    }

    fn clear_terrain_feature(&mut self, position: Position) {
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.feature = None;
        }
    }

    fn road_status(&self, position: Position) -> RoadStatus {
        self.tiles
            .get(&position)
            .map_or(RoadStatus::None, |tile| tile.road)
    }

    fn set_road_status(&mut self, position: Position, status: RoadStatus) {
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.road = status;
        }
    }

    fn improvement(&self, position: Position) -> Option<&str> {
        self.tiles.get(&position)?.improvement.as_deref()
    }

    fn set_improvement(&mut self, position: Position, improvement: String) {
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.improvement = Some(improvement);
        }
    }
}

/// Label-correcting search over the test map; entry cost is the tile's
/// `cost`, capped at what is left of the budget.
struct TestMovement {
    costs: BTreeMap<Position, f32>,
}

impl TestMovement {
    fn for_map(map: &TestMap) -> Self {
        let costs = map
            .tiles
            .iter()
            .map(|(&position, tile)| (position, tile.cost))
            .collect();
        Self { costs }
    }

    fn neighbours(position: Position) -> [Position; 4] {
        let Position { x, y } = position;
        [
            Position::new(x + 1, y),
            Position::new(x - 1, y),
            Position::new(x, y + 1),
            Position::new(x, y - 1),
        ]
    }
}

impl MovementOracle for TestMovement {
    fn distance_to_tiles(
        &self,
        tiles: &dyn TileProvider,
        _unit: &Unit,
        origin: Position,
        budget: f32,
    ) -> DistanceMap {
        let mut best = DistanceMap::new();
        if budget <= 0.0 {
            return best;
        }
        best.insert(origin, 0.0);
        let mut frontier = vec![(origin, 0.0_f32)];

        while let Some((position, spent)) = frontier.pop() {
            if spent >= budget || (position != origin && tiles.is_occupied(position)) {
                continue;
            }
            for next in Self::neighbours(position) {
                let Some(&cost) = self.costs.get(&next) else {
                    continue;
                };
                let total = (spent + cost).min(budget);
                if best.get(&next).is_some_and(|&known| known <= total) {
                    continue;
                }
                best.insert(next, total);
                frontier.push((next, total));
            }
        }

        best.remove(&origin);
        best
    }

    /// Steps to the adjacent free tile closest to `destination`.
    fn head_towards(
        &self,
        tiles: &dyn TileProvider,
        unit: &Unit,
        origin: Position,
        destination: Position,
        budget: f32,
    ) -> Position {
        let reachable = self.distance_to_tiles(tiles, unit, origin, budget);
        Self::neighbours(origin)
            .into_iter()
            .filter(|next| reachable.contains_key(next) && !tiles.is_occupied(*next))
            .filter(|next| {
                next.manhattan_distance(destination) < origin.manhattan_distance(destination)
            })
            .min_by_key(|next| next.manhattan_distance(destination))
            .unwrap_or(origin)
    }
}

struct TestCatalog(Vec<UnitType>);

impl TestCatalog {
    fn standard() -> Self {
        Self(vec![
            UnitType::new("Warrior", 2),
            UnitType::new("Scout", 3),
            UnitType::new("Worker", 2).with_unique(TurnConfig::BUILD_IMPROVEMENTS_UNIQUE),
        ])
    }
}

impl UnitCatalog for TestCatalog {
    fn unit_type(&self, name: &str) -> Option<&UnitType> {
        self.0.iter().find(|unit_type| unit_type.name == name)
    }
}

struct Allied;

impl DiplomacyOracle for Allied {
    fn is_hostile(&self, _player: PlayerId, _other: PlayerId) -> bool {
        false
    }
}

/// Moves one tile east, or fails if that is impossible.
struct EastwardPolicy;

impl AutomationPolicy for EastwardPolicy {
    fn automate(&self, turn: &mut UnitTurn<'_>) -> Result<(), TurnError> {
        let Position { x, y } = turn.unit().position();
        turn.move_to_tile(Position::new(x + 1, y))?;
        Ok(())
    }
}

fn spawn(
    map: &mut TestMap,
    catalog: &TestCatalog,
    id: u32,
    owner: PlayerId,
    type_name: &str,
    position: Position,
) -> Unit {
    let unit = Unit::spawn(UnitId(id), owner, type_name, position, catalog).expect("known type");
    assert!(map.place_occupant(position, Occupant::new(unit.id(), owner)));
    unit
}

fn fresh(unit: &mut Unit) {
    unit.reset_movement();
}

#[test]
fn budget_is_non_increasing_and_never_negative() {
    let mut map = TestMap::corridor(&[1.0, 0.5, 0.5, 1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN);
    fresh(&mut unit);

    let mut turn = UnitTurn::new(&mut unit, &mut map, env);
    let mut previous = turn.unit().current_movement();
    for x in 1..=4 {
        if turn.move_to_tile(Position::new(x, 0)).is_err() {
            break;
        }
        let current = turn.unit().current_movement();
        assert!(current <= previous);
        assert!(current >= 0.0);
        previous = current;
    }
    assert_eq!(turn.unit().current_movement(), 0.0);
}

#[test]
fn remainder_below_epsilon_snaps_to_zero() {
    let mut map = TestMap::corridor(&[1.0, 1.95]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN);
    fresh(&mut unit);

    UnitTurn::new(&mut unit, &mut map, env)
        .move_to_tile(Position::new(1, 0))
        .expect("reachable");

    assert_eq!(unit.current_movement(), 0.0);
    assert!(unit.is_exhausted());
    assert_eq!(unit.movement_string(), "0/2");
}

#[test]
fn move_keeps_exactly_one_occupied_tile() {
    let mut map = TestMap::corridor(&[1.0, 1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let mut unit = spawn(&mut map, &catalog, 7, HOME, "Warrior", Position::ORIGIN);
    fresh(&mut unit);

    UnitTurn::new(&mut unit, &mut map, env)
        .move_to_tile(Position::new(2, 0))
        .expect("reachable");

    assert_eq!(unit.position(), Position::new(2, 0));
    assert_eq!(map.occupied_by(UnitId(7)), vec![Position::new(2, 0)]);
    assert!(!map.is_occupied(Position::ORIGIN));
}

#[test]
fn rejected_commitments_leave_state_untouched() {
    let mut map = TestMap::corridor(&[1.0, 1.0, 1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN);
    let _blocker = spawn(&mut map, &catalog, 2, HOME, "Warrior", Position::new(1, 0));
    fresh(&mut unit);

    let mut turn = UnitTurn::new(&mut unit, &mut map, env);
    let occupied = turn.move_to_tile(Position::new(1, 0));
    assert_eq!(
        occupied,
        Err(MoveError::Occupied {
            unit: UnitId(1),
            destination: Position::new(1, 0),
            occupant: UnitId(2),
        })
    );

    let unreachable = turn.move_to_tile(Position::new(3, 0));
    assert!(matches!(unreachable, Err(MoveError::Unreachable { .. })));

    assert_eq!(turn.unit().current_movement(), 2.0);
    assert_eq!(turn.unit().position(), Position::ORIGIN);
    assert_eq!(map.occupied_by(UnitId(1)), vec![Position::ORIGIN]);
    assert_eq!(map.occupied_by(UnitId(2)), vec![Position::new(1, 0)]);
}

#[test]
fn queued_move_walks_corridor_and_clears_on_arrival() {
    // A -> B -> C, each step costs 1, budget 2.
    let mut map = TestMap::corridor(&[1.0, 1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let destination = Position::new(2, 0);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN)
        .with_action(QueuedAction::MoveTo(destination));

    let outcome = UnitTurn::new(&mut unit, &mut map, env)
        .start_turn()
        .expect("turn runs");

    assert_eq!(outcome, PreTurnOutcome::Arrived { destination });
    assert_eq!(unit.position(), destination);
    assert_eq!(unit.current_movement(), 0.0);
    assert_eq!(unit.action, QueuedAction::Idle);
    assert_eq!(map.occupied_by(UnitId(1)), vec![destination]);
}

#[test]
fn queued_move_out_of_range_advances_and_keeps_destination() {
    let mut map = TestMap::corridor(&[1.0, 1.0, 1.0, 1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let destination = Position::new(4, 0);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN)
        .with_action(QueuedAction::MoveTo(destination));

    let first = UnitTurn::new(&mut unit, &mut map, env).start_turn().unwrap();
    assert_eq!(first, PreTurnOutcome::Advanced { destination });
    assert_eq!(unit.position(), Position::new(2, 0));
    assert_eq!(unit.action, QueuedAction::MoveTo(destination));

    let second = UnitTurn::new(&mut unit, &mut map, env).start_turn().unwrap();
    assert_eq!(second, PreTurnOutcome::Arrived { destination });
    assert_eq!(unit.position(), destination);
}

#[test]
fn visible_hostile_interrupts_queued_move() {
    let mut map = TestMap::corridor(&[1.0, 1.0, 1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let destination = Position::new(3, 0);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN)
        .with_action(QueuedAction::MoveTo(destination));
    let _enemy = spawn(&mut map, &catalog, 2, RIVAL, "Warrior", Position::new(2, 0));

    let outcome = UnitTurn::new(&mut unit, &mut map, env).start_turn().unwrap();

    assert_eq!(
        outcome,
        PreTurnOutcome::Interrupted {
            threats: vec![Position::new(2, 0)]
        }
    );
    assert_eq!(unit.action, QueuedAction::MoveTo(destination));
    assert_eq!(unit.current_movement(), 2.0);
    assert_eq!(unit.position(), Position::ORIGIN);
}

/// Reports `lookout` as reachable from every tile except `start`, so a
/// hostile standing there only comes into view after the first step.
struct RevealedAfterFirstStep {
    inner: TestMovement,
    start: Position,
    lookout: Position,
}

impl MovementOracle for RevealedAfterFirstStep {
    fn distance_to_tiles(
        &self,
        tiles: &dyn TileProvider,
        unit: &Unit,
        origin: Position,
        budget: f32,
    ) -> DistanceMap {
        let mut reachable = self.inner.distance_to_tiles(tiles, unit, origin, budget);
        if origin != self.start && budget > 0.0 {
            reachable.insert(self.lookout, budget);
        }
        reachable
    }

    fn head_towards(
        &self,
        tiles: &dyn TileProvider,
        unit: &Unit,
        origin: Position,
        destination: Position,
        budget: f32,
    ) -> Position {
        self.inner
            .head_towards(tiles, unit, origin, destination, budget)
    }
}

#[test]
fn threats_are_rechecked_after_every_queued_step() {
    let mut map = TestMap::corridor(&[1.0, 1.0, 1.0, 1.0]);
    let lookout = Position::new(9, 9);
    map.tiles.insert(lookout, TestTile::default());
    let catalog = TestCatalog::standard();
    let movement = RevealedAfterFirstStep {
        inner: TestMovement::for_map(&map),
        start: Position::ORIGIN,
        lookout,
    };
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let destination = Position::new(3, 0);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Scout", Position::ORIGIN)
        .with_action(QueuedAction::MoveTo(destination));
    let _enemy = spawn(&mut map, &catalog, 2, RIVAL, "Warrior", lookout);

    let outcome = UnitTurn::new(&mut unit, &mut map, env).start_turn().unwrap();

    assert_eq!(
        outcome,
        PreTurnOutcome::Interrupted {
            threats: vec![lookout]
        }
    );
    // One step was taken before the hostile came into view.
    assert_eq!(unit.position(), Position::new(1, 0));
    assert_eq!(unit.current_movement(), 2.0);
    assert_eq!(unit.action, QueuedAction::MoveTo(destination));
    assert_eq!(map.occupied_by(UnitId(1)), vec![Position::new(1, 0)]);
}

#[test]
fn interrupted_destination_resumes_once_threat_leaves() {
    let mut map = TestMap::corridor(&[1.0, 1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let destination = Position::new(1, 0);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN)
        .with_action(QueuedAction::MoveTo(destination));
    let _enemy = spawn(&mut map, &catalog, 2, RIVAL, "Warrior", Position::new(2, 0));

    let first = UnitTurn::new(&mut unit, &mut map, env).start_turn().unwrap();
    assert!(matches!(first, PreTurnOutcome::Interrupted { .. }));

    map.vacate(Position::new(2, 0));
    let second = UnitTurn::new(&mut unit, &mut map, env).start_turn().unwrap();
    assert_eq!(second, PreTurnOutcome::Arrived { destination });
    assert_eq!(unit.action, QueuedAction::Idle);
}

#[test]
fn allied_units_do_not_interrupt() {
    let mut map = TestMap::corridor(&[1.0, 1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement)
        .with_diplomacy(&Allied);
    let destination = Position::new(1, 0);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN)
        .with_action(QueuedAction::MoveTo(destination));
    let _friend = spawn(&mut map, &catalog, 2, RIVAL, "Warrior", Position::new(2, 0));

    let outcome = UnitTurn::new(&mut unit, &mut map, env).start_turn().unwrap();
    assert_eq!(outcome, PreTurnOutcome::Arrived { destination });
}

#[test]
fn blocked_queued_move_makes_no_progress() {
    // (1, 0) is missing from the map, so nothing lies toward the destination.
    let mut map = TestMap::corridor(&[1.0]);
    map.tiles.insert(Position::new(0, 1), TestTile {
        cost: 1.0,
        ..TestTile::default()
    });
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let destination = Position::new(5, 0);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN)
        .with_action(QueuedAction::MoveTo(destination));

    let outcome = UnitTurn::new(&mut unit, &mut map, env).start_turn().unwrap();

    assert_eq!(outcome, PreTurnOutcome::Blocked { destination });
    assert_eq!(unit.current_movement(), 2.0);
    assert_eq!(unit.action, QueuedAction::MoveTo(destination));
}

#[test]
fn queued_destination_equal_to_position_is_cleared() {
    let mut map = TestMap::corridor(&[1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN)
        .with_action(QueuedAction::MoveTo(Position::ORIGIN));

    let outcome = UnitTurn::new(&mut unit, &mut map, env).start_turn().unwrap();
    assert_eq!(
        outcome,
        PreTurnOutcome::Arrived {
            destination: Position::ORIGIN
        }
    );
    assert!(unit.action.is_idle());
    assert!(!unit.has_moved_this_turn());
}

#[test]
fn fortifying_and_idle_are_no_ops() {
    let mut map = TestMap::corridor(&[1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);

    for action in [QueuedAction::Idle, QueuedAction::Fortifying] {
        let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN)
            .with_action(action);
        let outcome = UnitTurn::new(&mut unit, &mut map, env).start_turn().unwrap();
        assert_eq!(outcome, PreTurnOutcome::Idle);
        assert_eq!(unit.action, action);
        assert_eq!(unit.current_movement(), 2.0);
        map.vacate(Position::ORIGIN);
    }
}

#[test]
fn exhausted_unit_skips_pre_turn() {
    let mut map = TestMap::corridor(&[1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let env = GameEnv::empty().with_catalog(&catalog);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN)
        .with_action(QueuedAction::MoveTo(Position::new(1, 0)));

    // No movement oracle: reaching it would be an error.
    let outcome = UnitTurn::new(&mut unit, &mut map, env)
        .do_pre_turn_action()
        .unwrap();
    assert_eq!(outcome, PreTurnOutcome::Exhausted);
}

#[test]
fn automated_unit_is_handed_to_policy() {
    let mut map = TestMap::corridor(&[1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement)
        .with_automation(&EastwardPolicy);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Worker", Position::ORIGIN)
        .with_action(QueuedAction::Automated);

    let outcome = UnitTurn::new(&mut unit, &mut map, env).start_turn().unwrap();

    assert_eq!(outcome, PreTurnOutcome::Automated);
    assert_eq!(unit.position(), Position::new(1, 0));
    assert_eq!(unit.current_movement(), 1.0);
    assert!(unit.action.is_automated());
}

#[test]
fn automated_unit_without_policy_is_fatal() {
    let mut map = TestMap::corridor(&[1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Worker", Position::ORIGIN)
        .with_action(QueuedAction::Automated);

    let err = UnitTurn::new(&mut unit, &mut map, env)
        .start_turn()
        .unwrap_err();
    assert_eq!(err, TurnError::Oracle(OracleError::AutomationNotAvailable));
    assert_eq!(err.severity(), crate::error::ErrorSeverity::Fatal);
}

#[test]
fn resting_unit_heals_by_tile_priority() {
    let cases = [
        ("city centre", Some(HOME), true, 20),
        ("home", Some(HOME), false, 15),
        ("neutral", None, false, 10),
        ("foreign", Some(RIVAL), false, 5),
        // city centre wins even inside foreign borders
        ("captured centre", Some(RIVAL), true, 20),
    ];

    for (label, owner, city_center, expected) in cases {
        let mut map = TestMap::corridor(&[1.0]);
        let tile = map.tile_mut(Position::ORIGIN);
        tile.owner = owner;
        tile.city_center = city_center;
        let catalog = TestCatalog::standard();
        let env = GameEnv::empty().with_catalog(&catalog);
        let mut unit =
            spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN).with_health(50);
        fresh(&mut unit);

        let report = UnitTurn::new(&mut unit, &mut map, env).end_turn().unwrap();
        assert_eq!(report.healed, expected, "{label}");
        assert_eq!(unit.health(), 50 + expected, "{label}");
    }
}

#[test]
fn healing_is_capped_at_max_health() {
    let mut map = TestMap::corridor(&[1.0]);
    map.tile_mut(Position::ORIGIN).city_center = true;
    let catalog = TestCatalog::standard();
    let env = GameEnv::empty().with_catalog(&catalog);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN).with_health(95);
    fresh(&mut unit);

    let report = UnitTurn::new(&mut unit, &mut map, env).end_turn().unwrap();
    assert_eq!(report.healed, 5);
    assert_eq!(unit.health(), TurnConfig::MAX_HEALTH);
}

#[test]
fn moving_forfeits_healing() {
    let mut map = TestMap::corridor(&[1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN).with_health(40);
    fresh(&mut unit);

    let mut turn = UnitTurn::new(&mut unit, &mut map, env);
    turn.move_to_tile(Position::new(1, 0)).unwrap();
    let report = turn.end_turn().unwrap();

    assert_eq!(report.healed, 0);
    assert_eq!(unit.health(), 40);
}

#[test]
fn road_construction_completes_on_last_turn() {
    let mut map = TestMap::corridor(&[1.0]);
    map.tile_mut(Position::ORIGIN).construction =
        Some(Construction::new(ImprovementWork::BuildRoute(RoadStatus::Road), 1));
    let catalog = TestCatalog::standard();
    let env = GameEnv::empty().with_catalog(&catalog);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Worker", Position::ORIGIN);
    fresh(&mut unit);

    let progress = UnitTurn::new(&mut unit, &mut map, env)
        .do_post_turn_action()
        .unwrap();

    assert_eq!(
        progress,
        Some(ConstructionProgress::Completed(ImprovementWork::BuildRoute(
            RoadStatus::Road
        )))
    );
    assert_eq!(map.road_status(Position::ORIGIN), RoadStatus::Road);
    assert!(map.construction(Position::ORIGIN).is_none());
}

#[test]
fn construction_outcomes_follow_work_kind() {
    let catalog = TestCatalog::standard();
    let env = GameEnv::empty().with_catalog(&catalog);

    let mut map = TestMap::corridor(&[1.0]);
    let tile = map.tile_mut(Position::ORIGIN);
    tile.feature = Some("Forest".into());
    tile.construction = Some(Construction::from_label("Remove Forest", 1).unwrap());
    let mut worker = spawn(&mut map, &catalog, 1, HOME, "Worker", Position::ORIGIN);
    UnitTurn::new(&mut worker, &mut map, env).end_turn().unwrap();
    assert_eq!(map.terrain_feature(Position::ORIGIN), None);

    let mut map = TestMap::corridor(&[1.0]);
    map.tile_mut(Position::ORIGIN).construction =
        Some(Construction::from_label("Farm", 2).unwrap());
    let mut worker = spawn(&mut map, &catalog, 1, HOME, "Worker", Position::ORIGIN);

    let first = UnitTurn::new(&mut worker, &mut map, env).end_turn().unwrap();
    assert_eq!(
        first.construction,
        Some(ConstructionProgress::InProgress {
            work: ImprovementWork::BuildImprovement("Farm".into()),
            turns_remaining: 1,
        })
    );
    assert_eq!(map.improvement(Position::ORIGIN), None);

    let second = UnitTurn::new(&mut worker, &mut map, env).end_turn().unwrap();
    assert!(second.construction.is_some_and(|p| p.is_completed()));
    assert_eq!(map.improvement(Position::ORIGIN), Some("Farm"));
}

#[test]
fn zero_counter_completes_immediately() {
    let mut map = TestMap::corridor(&[1.0]);
    map.tile_mut(Position::ORIGIN).construction =
        Some(Construction::new(ImprovementWork::BuildRoute(RoadStatus::Railroad), 0));
    let catalog = TestCatalog::standard();
    let env = GameEnv::empty().with_catalog(&catalog);
    let mut worker = spawn(&mut map, &catalog, 1, HOME, "Worker", Position::ORIGIN);

    let progress = UnitTurn::new(&mut worker, &mut map, env)
        .do_post_turn_action()
        .unwrap();
    assert!(progress.is_some_and(|p| p.is_completed()));
    assert_eq!(map.road_status(Position::ORIGIN), RoadStatus::Railroad);
}

#[test]
fn units_without_build_unique_leave_construction_alone() {
    let mut map = TestMap::corridor(&[1.0]);
    map.tile_mut(Position::ORIGIN).construction =
        Some(Construction::new(ImprovementWork::BuildRoute(RoadStatus::Road), 1));
    let catalog = TestCatalog::standard();
    let env = GameEnv::empty().with_catalog(&catalog);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN);

    let report = UnitTurn::new(&mut unit, &mut map, env).end_turn().unwrap();

    assert_eq!(report.construction, None);
    assert_eq!(map.road_status(Position::ORIGIN), RoadStatus::None);
    assert_eq!(
        map.construction(Position::ORIGIN).map(|c| c.turns_remaining),
        Some(1)
    );
}

#[test]
fn has_unique_consults_catalog() {
    let mut map = TestMap::corridor(&[1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let env = GameEnv::empty().with_catalog(&catalog);
    let mut worker = spawn(&mut map, &catalog, 1, HOME, "Worker", Position::ORIGIN);
    let mut warrior = spawn(&mut map, &catalog, 2, HOME, "Warrior", Position::new(1, 0));

    let turn = UnitTurn::new(&mut worker, &mut map, env);
    assert_eq!(
        turn.has_unique(TurnConfig::BUILD_IMPROVEMENTS_UNIQUE),
        Ok(true)
    );
    assert_eq!(turn.has_unique("Amphibious"), Ok(false));

    let turn = UnitTurn::new(&mut warrior, &mut map, env);
    assert_eq!(
        turn.has_unique(TurnConfig::BUILD_IMPROVEMENTS_UNIQUE),
        Ok(false)
    );

    let other_catalog = TestCatalog(vec![UnitType::new("Warrior", 2)]);
    let turn = UnitTurn::new(&mut worker, &mut map, env.with_catalog(&other_catalog));
    assert_eq!(
        turn.has_unique("Amphibious"),
        Err(OracleError::UnknownUnitType("Worker".into()))
    );
}

#[test]
fn distance_map_reflects_latest_position_and_budget() {
    let mut map = TestMap::corridor(&[1.0, 1.0, 1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Scout", Position::ORIGIN);
    fresh(&mut unit);

    let mut turn = UnitTurn::new(&mut unit, &mut map, env);
    let before = turn.distance_to_tiles().unwrap();
    assert_eq!(before.get(&Position::new(3, 0)), Some(&3.0));

    turn.move_to_tile(Position::new(1, 0)).unwrap();
    let after = turn.distance_to_tiles().unwrap();
    assert_eq!(after.get(&Position::new(3, 0)), Some(&2.0));
    assert_eq!(after.get(&Position::ORIGIN), Some(&1.0));
    assert!(!after.contains_key(&Position::new(1, 0)));
}

#[test]
fn zero_budget_reaches_nothing() {
    let mut map = TestMap::corridor(&[1.0, 1.0]);
    let catalog = TestCatalog::standard();
    let movement = TestMovement::for_map(&map);
    let env = GameEnv::empty()
        .with_catalog(&catalog)
        .with_movement(&movement);
    let mut unit = spawn(&mut map, &catalog, 1, HOME, "Warrior", Position::ORIGIN);

    let mut turn = UnitTurn::new(&mut unit, &mut map, env);
    assert!(turn.distance_to_tiles().unwrap().is_empty());
    assert!(matches!(
        turn.move_to_tile(Position::new(1, 0)),
        Err(MoveError::Unreachable { .. })
    ));
}
