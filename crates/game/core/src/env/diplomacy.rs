use crate::state::PlayerId;

/// Diplomatic relations between controllers.
pub trait DiplomacyOracle: Send + Sync {
    /// True if units of `other` threaten units of `player`.
    fn is_hostile(&self, player: PlayerId, other: PlayerId) -> bool;
}
