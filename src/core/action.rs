//! Move representation.
//!
//! Two verbs exist:
//! - "Attack" = one of my hands onto one of the opponent's hands
//! - "Split" = halve one of my hands to revive a dead one
//!
//! `Move` is the typed form the engine executes. `RawMove` is the
//! loosely-typed payload a presentation layer hands over (a free-form
//! `type` string). The rules layer converts it and rejects unknown kinds.

use serde::{Deserialize, Serialize};

use super::hand::HandSide;
use super::player::PlayerId;

/// A move submitted by the current player.
///
/// ## Example
///
/// ```
/// use chopsticks::core::{HandSide, Move};
///
/// let attack = Move::attack(HandSide::Left, HandSide::Right);
/// let split = Move::split(HandSide::Right);
///
/// assert_eq!(attack.source(), HandSide::Left);
/// assert!(split.is_split());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Move {
    /// Add `source` fingers onto the opponent's `target` hand.
    ///
    /// `target` is optional on the wire; a missing target is rejected
    /// at execution time.
    Attack {
        #[serde(rename = "sourceHand")]
        source: HandSide,
        #[serde(rename = "targetHand", default)]
        target: Option<HandSide>,
    },
    /// Halve `source` and revive one of the mover's dead hands with the half.
    Split {
        #[serde(rename = "sourceHand")]
        source: HandSide,
    },
}

impl Move {
    /// Attack the opponent's `target` hand with `source`.
    #[must_use]
    pub const fn attack(source: HandSide, target: HandSide) -> Self {
        Move::Attack {
            source,
            target: Some(target),
        }
    }

    /// Split the `source` hand.
    #[must_use]
    pub const fn split(source: HandSide) -> Self {
        Move::Split { source }
    }

    /// The mover's hand this move originates from.
    #[must_use]
    pub const fn source(&self) -> HandSide {
        match *self {
            Move::Attack { source, .. } | Move::Split { source } => source,
        }
    }

    #[must_use]
    pub const fn is_attack(&self) -> bool {
        matches!(self, Move::Attack { .. })
    }

    #[must_use]
    pub const fn is_split(&self) -> bool {
        matches!(self, Move::Split { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Attack {
                source,
                target: Some(target),
            } => write!(f, "attack {} -> {}", source, target),
            Move::Attack { source, target: None } => write!(f, "attack {} -> ?", source),
            Move::Split { source } => write!(f, "split {}", source),
        }
    }
}

/// Untyped move payload as produced by an input layer.
///
/// The `type` string is free-form; only `"attack"` and `"split"` convert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMove {
    #[serde(rename = "type")]
    pub kind: String,
    pub source_hand: HandSide,
    #[serde(default)]
    pub target_hand: Option<HandSide>,
}

impl RawMove {
    /// Create a payload.
    #[must_use]
    pub fn new(
        kind: impl Into<String>,
        source_hand: HandSide,
        target_hand: Option<HandSide>,
    ) -> Self {
        Self {
            kind: kind.into(),
            source_hand,
            target_hand,
        }
    }
}

impl From<Move> for RawMove {
    fn from(mv: Move) -> Self {
        match mv {
            Move::Attack { source, target } => RawMove::new("attack", source, target),
            Move::Split { source } => RawMove::new("split", source, None),
        }
    }
}

/// An accepted move with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub player: PlayerId,

    /// The move made.
    pub action: Move,

    /// Turn number when the move was made (starts at 1).
    pub turn: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub const fn new(player: PlayerId, action: Move, turn: u32) -> Self {
        Self { player, action, turn }
    }
}
