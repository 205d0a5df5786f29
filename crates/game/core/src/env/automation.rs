use crate::engine::{TurnError, UnitTurn};

/// Decision policy for units in automated mode.
///
/// The policy receives the running turn and may move the unit through
/// [`UnitTurn::move_to_tile`], queue constructions on its tile, or change its
/// standing order. The engine does not interpret what the policy did.
pub trait AutomationPolicy: Send + Sync {
    fn automate(&self, turn: &mut UnitTurn<'_>) -> Result<(), TurnError>;
}
