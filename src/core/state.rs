//! Match phase and copy-safe state snapshots.
//!
//! ## Phase
//!
//! `Playing` until a player runs out of alive hands, then `GameOver`
//! for good.
//!
//! ## Snapshot
//!
//! Owned copy of the observable match state. Nothing in a snapshot
//! aliases engine storage, so it can be kept, displayed or sent while
//! the engine keeps moving.

use serde::{Deserialize, Serialize};

use super::hand::Hand;
use super::player::{Player, PlayerId};

/// Match phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    #[default]
    Playing,
    /// Terminal. No move is accepted once set.
    GameOver,
}

/// One player's hands as seen in a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    #[serde(rename = "leftHand")]
    pub left: Hand,
    #[serde(rename = "rightHand")]
    pub right: Hand,

    /// Whether this player is the one to move.
    pub is_current: bool,
}

impl PlayerView {
    /// Capture a player.
    #[must_use]
    pub const fn new(player: &Player, is_current: bool) -> Self {
        Self {
            left: player.left,
            right: player.right,
            is_current,
        }
    }

    /// The hands as a `Player`.
    #[must_use]
    pub const fn player(&self) -> Player {
        Player::new(self.left, self.right)
    }
}

/// Plain copy of the match: both players, who moves, and the phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub player1: PlayerView,
    pub player2: PlayerView,
    pub current_player: PlayerId,
    pub phase: Phase,

    /// Turn number (starts at 1).
    pub turn_number: u32,
}

impl Snapshot {
    /// Get a player's view by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerView {
        match id {
            PlayerId::One => &self.player1,
            PlayerId::Two => &self.player2,
        }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a bincode-encoded snapshot.
    ///
    /// Only the encoding is checked here; `GameState::restore` validates
    /// the hands.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot {
            player1: PlayerView::new(&Player::new(Hand::new(3, true), Hand::dead()), false),
            player2: PlayerView::new(&Player::default(), true),
            current_player: PlayerId::Two,
            phase: Phase::Playing,
            turn_number: 5,
        }
    }

    #[test]
    fn test_player_lookup() {
        let snapshot = sample();
        assert_eq!(snapshot.player(PlayerId::One).left.fingers, 3);
        assert!(snapshot.player(PlayerId::Two).is_current);
        assert_eq!(snapshot.player(PlayerId::Two).player(), Player::default());
    }

    #[test]
    fn test_bincode() {
        let snapshot = sample();
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(Snapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_bincode_truncated() {
        let bytes = sample().to_bytes().unwrap();
        assert!(Snapshot::from_bytes(&bytes[..bytes.len() / 2]).is_err());
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["currentPlayer"], 2);
        assert_eq!(value["phase"], "playing");
        assert_eq!(value["player1"]["leftHand"]["fingers"], 3);
        assert_eq!(value["player1"]["rightHand"]["isAlive"], false);
        assert_eq!(value["player2"]["isCurrent"], true);
    }
}
