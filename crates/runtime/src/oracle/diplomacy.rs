//! Alliance table implementing [`unit_core::DiplomacyOracle`].

use std::collections::BTreeSet;

use unit_core::{DiplomacyOracle, PlayerId};

/// Every pair of players is at war unless allied here.
#[derive(Clone, Debug, Default)]
pub struct DiplomacyOracleImpl {
    alliances: BTreeSet<(PlayerId, PlayerId)>,
}

impl DiplomacyOracleImpl {
    pub fn new(alliances: impl IntoIterator<Item = (PlayerId, PlayerId)>) -> Self {
        let mut oracle = Self::default();
        for (a, b) in alliances {
            oracle.ally(a, b);
        }
        oracle
    }

    pub fn ally(&mut self, a: PlayerId, b: PlayerId) {
        self.alliances.insert((a.min(b), a.max(b)));
    }

    pub fn are_allied(&self, a: PlayerId, b: PlayerId) -> bool {
        self.alliances.contains(&(a.min(b), a.max(b)))
    }
}

impl DiplomacyOracle for DiplomacyOracleImpl {
    fn is_hostile(&self, player: PlayerId, other: PlayerId) -> bool {
        player != other && !self.are_allied(player, other)
    }
}
