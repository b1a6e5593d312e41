//! Move results.
//!
//! Rule violations are ordinary values, never panics:
//! - `MoveError`: why a move was refused (state untouched)
//! - `MoveOutcome`: what an accepted move did
//! - `MoveResponse`: either of the above flattened to `{ success, message }`

use serde::{Deserialize, Serialize};

use super::engine::GameResult;
use crate::core::{HandSide, Move, PlayerId, RawMove};

/// Why a move was rejected.
///
/// A rejected move leaves the match exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The match is not in `Playing`.
    #[display("Game is not in playing phase")]
    WrongPhase,

    /// Attack submitted without a target hand.
    #[display("No target hand specified")]
    MissingTarget,

    /// Source hand unarmed or target hand dead.
    #[display("Invalid attack move")]
    InvalidAttack,

    /// Source hand dead, odd, empty, or no dead hand to revive.
    #[display("Cannot split this hand")]
    InvalidSplit,

    /// Split preconditions held but no dead hand resolved.
    #[display("No dead hand to reactivate")]
    NoSplitTarget,

    /// Payload `type` was neither `attack` nor `split`.
    #[display("Unknown move type: {_0}")]
    UnknownMoveType(String),
}

impl std::error::Error for MoveError {}

impl TryFrom<&RawMove> for Move {
    type Error = MoveError;

    fn try_from(raw: &RawMove) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            "attack" => Ok(Move::Attack {
                source: raw.source_hand,
                target: raw.target_hand,
            }),
            "split" => Ok(Move::split(raw.source_hand)),
            other => Err(MoveError::UnknownMoveType(other.to_string())),
        }
    }
}

/// Board change made by an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MoveEffect {
    /// The opponent's `target` hand now shows `fingers`.
    Attacked {
        target: HandSide,
        fingers: u8,
        killed: bool,
    },
    /// The mover's `revived` hand came back with `fingers`, as did the source.
    Split { revived: HandSide, fingers: u8 },
}

/// How the turn ended after an accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum TurnEnd {
    /// Play passed to this player.
    Passed(PlayerId),
    /// The opponent had no legal move, so the mover goes again.
    OpponentStuck,
    /// The match is over.
    GameOver(GameResult),
}

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Who made the move.
    pub mover: PlayerId,

    /// The move as executed.
    pub action: Move,

    pub effect: MoveEffect,

    pub turn_end: TurnEnd,
}

impl MoveOutcome {
    /// The move finished the match.
    #[must_use]
    pub fn ended_game(&self) -> bool {
        matches!(self.turn_end, TurnEnd::GameOver(_))
    }
}

/// `{ success, message }` view of a move result for presentation callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&Result<MoveOutcome, MoveError>> for MoveResponse {
    fn from(result: &Result<MoveOutcome, MoveError>) -> Self {
        match result {
            Ok(_) => Self {
                success: true,
                message: None,
            },
            Err(err) => Self {
                success: false,
                message: Some(err.to_string()),
            },
        }
    }
}

/// Why a snapshot could not be turned back into a match.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum SnapshotError {
    /// A hand holds `FINGER_MODULUS` or more fingers.
    #[display("{player} {side} hand has {fingers} fingers")]
    FingersOutOfRange {
        player: PlayerId,
        side: HandSide,
        fingers: u8,
    },

    /// A dead hand records a nonzero count.
    #[display("{player} {side} hand is dead but has {fingers} fingers")]
    DeadHandWithFingers {
        player: PlayerId,
        side: HandSide,
        fingers: u8,
    },

    /// A `Playing` snapshot where someone already has no alive hand.
    #[display("snapshot is playing but {_0} has no alive hand")]
    PlayingWithoutHands(PlayerId),

    /// A `GameOver` snapshot where both players still have an alive hand.
    #[display("snapshot is game over but both players have alive hands")]
    GameOverWithoutElimination,

    /// Turns are numbered from 1.
    #[display("snapshot turn number is 0")]
    TurnNumberZero,

    /// Bytes did not decode.
    #[display("snapshot decode failed: {_0}")]
    #[from]
    Decode(bincode::Error),
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(MoveError::WrongPhase.to_string(), "Game is not in playing phase");
        assert_eq!(MoveError::MissingTarget.to_string(), "No target hand specified");
        assert_eq!(MoveError::InvalidAttack.to_string(), "Invalid attack move");
        assert_eq!(MoveError::InvalidSplit.to_string(), "Cannot split this hand");
        assert_eq!(MoveError::NoSplitTarget.to_string(), "No dead hand to reactivate");
        assert_eq!(
            MoveError::UnknownMoveType("swap".into()).to_string(),
            "Unknown move type: swap"
        );
    }

    #[test]
    fn test_raw_conversion() {
        let raw = RawMove::new("attack", HandSide::Left, Some(HandSide::Left));
        assert_eq!(
            Move::try_from(&raw),
            Ok(Move::attack(HandSide::Left, HandSide::Left))
        );

        let raw = RawMove::new("split", HandSide::Right, Some(HandSide::Left));
        assert_eq!(Move::try_from(&raw), Ok(Move::split(HandSide::Right)));

        let raw = RawMove::new("attack", HandSide::Left, None);
        assert_eq!(
            Move::try_from(&raw),
            Ok(Move::Attack {
                source: HandSide::Left,
                target: None
            })
        );
    }

    #[test]
    fn test_raw_unknown_kind() {
        let raw = RawMove::new("swap", HandSide::Left, None);
        assert_eq!(
            Move::try_from(&raw),
            Err(MoveError::UnknownMoveType("swap".to_string()))
        );
    }

    #[test]
    fn test_response_from_error() {
        let result: Result<MoveOutcome, MoveError> = Err(MoveError::InvalidSplit);
        let response = MoveResponse::from(&result);

        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Cannot split this hand"));
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"success":false,"message":"Cannot split this hand"}"#
        );
    }

    #[test]
    fn test_response_from_outcome() {
        let result: Result<MoveOutcome, MoveError> = Ok(MoveOutcome {
            mover: PlayerId::One,
            action: Move::attack(HandSide::Left, HandSide::Left),
            effect: MoveEffect::Attacked {
                target: HandSide::Left,
                fingers: 2,
                killed: false,
            },
            turn_end: TurnEnd::Passed(PlayerId::Two),
        });
        let response = MoveResponse::from(&result);

        assert!(response.success);
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"success":true}"#);
    }

    #[test]
    fn test_snapshot_error_display() {
        let err = SnapshotError::FingersOutOfRange {
            player: PlayerId::Two,
            side: HandSide::Left,
            fingers: 7,
        };
        assert_eq!(err.to_string(), "Player 2 left hand has 7 fingers");
        assert!(std::error::Error::source(&err).is_none());

        assert_eq!(
            SnapshotError::GameOverWithoutElimination.to_string(),
            "snapshot is game over but both players have alive hands"
        );
        assert_eq!(SnapshotError::TurnNumberZero.to_string(), "snapshot turn number is 0");
    }
}
