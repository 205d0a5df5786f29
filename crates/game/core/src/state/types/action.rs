use std::fmt;
use std::str::FromStr;

use super::Position;
use crate::state::ParseActionError;

/// Standing instruction a unit carries across pre-turn processing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueuedAction {
    /// No standing order; the player decides each turn.
    #[default]
    Idle,
    /// Keep heading toward the destination until standing on it.
    MoveTo(Position),
    /// Hand the unit to the automation policy every turn.
    Automated,
    /// Dug in. Pre-turn processing leaves the unit alone.
    Fortifying,
}

impl QueuedAction {
    const MOVE_TO_TAG: &'static str = "moveTo";
    const AUTOMATED_TAG: &'static str = "automation";
    const FORTIFYING_TAG: &'static str = "fortifying";
    const IDLE_TAG: &'static str = "idle";

    /// Destination of a queued move, if any.
    pub fn destination(&self) -> Option<Position> {
        match self {
            QueuedAction::MoveTo(destination) => Some(*destination),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, QueuedAction::Idle)
    }

    pub fn is_automated(&self) -> bool {
        matches!(self, QueuedAction::Automated)
    }
}

impl fmt::Display for QueuedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueuedAction::Idle => f.write_str(Self::IDLE_TAG),
            QueuedAction::MoveTo(destination) => {
                write!(f, "{} {},{}", Self::MOVE_TO_TAG, destination.x, destination.y)
            }
            QueuedAction::Automated => f.write_str(Self::AUTOMATED_TAG),
            QueuedAction::Fortifying => f.write_str(Self::FORTIFYING_TAG),
        }
    }
}

/// Parses the legacy text tags (`"moveTo 3,4"`, `"automation"`, `"fortifying"`).
///
/// An empty tag means no standing order.
impl FromStr for QueuedAction {
    type Err = ParseActionError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim();
        if tag.is_empty() || tag == Self::IDLE_TAG {
            return Ok(QueuedAction::Idle);
        }
        if tag == Self::AUTOMATED_TAG {
            return Ok(QueuedAction::Automated);
        }
        if tag == Self::FORTIFYING_TAG {
            return Ok(QueuedAction::Fortifying);
        }

        let Some(rest) = tag.strip_prefix(Self::MOVE_TO_TAG) else {
            return Err(ParseActionError::UnknownTag(tag.to_string()));
        };

        let malformed = || ParseActionError::MalformedDestination(rest.trim().to_string());
        let mut coordinates = rest.trim().split(',').filter(|part| !part.is_empty());
        let x = coordinates
            .next()
            .and_then(|part| part.trim().parse::<i32>().ok())
            .ok_or_else(malformed)?;
        let y = coordinates
            .next()
            .and_then(|part| part.trim().parse::<i32>().ok())
            .ok_or_else(malformed)?;
        if coordinates.next().is_some() {
            return Err(malformed());
        }

        Ok(QueuedAction::MoveTo(Position::new(x, y)))
    }
}
