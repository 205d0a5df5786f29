//! Grid movement rules implementing [`unit_core::MovementOracle`].
//!
//! Four-neighbour Dijkstra over static terrain costs, with roads read live
//! from the tile provider so finished road constructions take effect
//! immediately.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use game_content::{MapLayout, TerrainKind};
use unit_core::{DistanceMap, MovementOracle, Position, TileProvider, Unit};

/// Entry cost between two tiles that both carry a road or railroad.
const ROAD_COST: f32 = 1.0 / 3.0;

/// Frontier entry ordered so the cheapest pops first from a max-heap.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    cost: f32,
    position: Position,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.position.cmp(&self.position))
    }
}

/// Result of one search: best cost per tile and the predecessor it came from.
struct Search {
    costs: DistanceMap,
    previous: BTreeMap<Position, Position>,
}

/// Movement oracle over a static terrain layout.
#[derive(Clone, Debug, Default)]
pub struct GridMovement {
    terrain: BTreeMap<Position, TerrainKind>,
}

impl GridMovement {
    pub fn from_layout(layout: &MapLayout) -> Self {
        let terrain = layout
            .tiles
            .iter()
            .map(|(&position, tile)| (position, tile.terrain))
            .collect();
        Self { terrain }
    }

    fn neighbours(position: Position) -> [Position; 4] {
        let Position { x, y } = position;
        [
            Position::new(x, y - 1),
            Position::new(x + 1, y),
            Position::new(x, y + 1),
            Position::new(x - 1, y),
        ]
    }

    /// Cost of stepping from `from` onto the adjacent `to`, or `None` if `to`
    /// cannot be entered.
    fn step_cost(&self, tiles: &dyn TileProvider, from: Position, to: Position) -> Option<f32> {
        if !tiles.contains(to) {
            return None;
        }
        let base = self.terrain.get(&to).copied()?.entry_cost()?;
        if tiles.road_status(from).has_route() && tiles.road_status(to).has_route() {
            Some(ROAD_COST)
        } else {
            Some(base)
        }
    }

    /// Dijkstra from `origin`. Each step costs at most what is left of
    /// `budget`, so any enterable neighbour is reachable while budget
    /// remains. Occupied tiles are recorded but never expanded.
    fn search(&self, tiles: &dyn TileProvider, origin: Position, budget: f32) -> Search {
        let mut costs = DistanceMap::new();
        let mut previous = BTreeMap::new();
        let mut frontier = BinaryHeap::new();

        costs.insert(origin, 0.0);
        frontier.push(Frontier {
            cost: 0.0,
            position: origin,
        });

        while let Some(Frontier { cost, position }) = frontier.pop() {
            if costs.get(&position).is_some_and(|&best| cost > best) {
                continue;
            }
            if cost >= budget || (position != origin && tiles.is_occupied(position)) {
                continue;
            }

            for next in Self::neighbours(position) {
                let Some(step) = self.step_cost(tiles, position, next) else {
                    continue;
                };
                let total = (cost + step).min(budget);
                if costs.get(&next).is_some_and(|&best| best <= total) {
                    continue;
                }
                costs.insert(next, total);
                previous.insert(next, position);
                frontier.push(Frontier {
                    cost: total,
                    position: next,
                });
            }
        }

        Search { costs, previous }
    }

    /// Tiles from `origin` (exclusive) to `destination` (inclusive) along the
    /// cheapest route ignoring this turn's budget.
    fn route(
        &self,
        tiles: &dyn TileProvider,
        origin: Position,
        destination: Position,
    ) -> Option<Vec<Position>> {
        let search = self.search(tiles, origin, f32::INFINITY);
        if !search.costs.contains_key(&destination) {
            return None;
        }

        let mut path = vec![destination];
        let mut current = destination;
        while let Some(&step) = search.previous.get(&current) {
            if step == origin {
                path.reverse();
                return Some(path);
            }
            path.push(step);
            current = step;
        }
        None
    }
}

impl MovementOracle for GridMovement {
    fn distance_to_tiles(
        &self,
        tiles: &dyn TileProvider,
        _unit: &Unit,
        origin: Position,
        budget: f32,
    ) -> DistanceMap {
        if budget <= 0.0 {
            return DistanceMap::new();
        }
        let mut costs = self.search(tiles, origin, budget).costs;
        costs.remove(&origin);
        costs
    }

    fn head_towards(
        &self,
        tiles: &dyn TileProvider,
        unit: &Unit,
        origin: Position,
        destination: Position,
        budget: f32,
    ) -> Position {
        if origin == destination {
            return origin;
        }
        let Some(route) = self.route(tiles, origin, destination) else {
            return origin;
        };
        let reachable = self.distance_to_tiles(tiles, unit, origin, budget);

        route
            .into_iter()
            .take_while(|step| reachable.contains_key(step))
            .filter(|step| !tiles.is_occupied(*step))
            .last()
            .unwrap_or(origin)
    }
}
