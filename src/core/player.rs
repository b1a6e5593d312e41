//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Exactly two seats, numbered 1 and 2 on the wire.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! A player's `left` and `right` hands.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::hand::{Hand, HandSide};

/// Hand slots filtered from a player, always in `[left, right]` order.
pub type HandSides = SmallVec<[HandSide; 2]>;

/// Player seat.
///
/// Serialized as the seat number (`1` or `2`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerId {
    One,
    Two,
}

/// Seat number outside `1..=2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
#[display("no player seat numbered {_0}")]
pub struct InvalidPlayerId(pub u8);

impl std::error::Error for InvalidPlayerId {}

impl PlayerId {
    /// Both seats, player 1 first.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Seat number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Storage index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            other => Err(InvalidPlayerId(other)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.number()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use chopsticks::core::{PlayerId, PlayerPair};
///
/// let mut moves: PlayerPair<u32> = PlayerPair::with_value(0);
/// moves[PlayerId::Two] += 1;
///
/// assert_eq!(moves[PlayerId::One], 0);
/// assert_eq!(moves[PlayerId::Two], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::ALL.map(factory),
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs, player 1 first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerPair<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player's two hands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "leftHand")]
    pub left: Hand,
    #[serde(rename = "rightHand")]
    pub right: Hand,
}

impl Player {
    /// Create a player from explicit hands.
    #[must_use]
    pub const fn new(left: Hand, right: Hand) -> Self {
        Self { left, right }
    }

    /// Get the hand in a slot.
    #[must_use]
    pub fn hand(&self, side: HandSide) -> &Hand {
        match side {
            HandSide::Left => &self.left,
            HandSide::Right => &self.right,
        }
    }

    /// Get the hand in a slot mutably.
    pub fn hand_mut(&mut self, side: HandSide) -> &mut Hand {
        match side {
            HandSide::Left => &mut self.left,
            HandSide::Right => &mut self.right,
        }
    }

    /// Slots holding alive hands, `[left, right]` filtered.
    #[must_use]
    pub fn alive_hands(&self) -> HandSides {
        self.sides_where(|hand| hand.alive)
    }

    /// Slots holding dead hands, `[left, right]` filtered.
    #[must_use]
    pub fn dead_hands(&self) -> HandSides {
        self.sides_where(|hand| !hand.alive)
    }

    /// At least one hand is still alive.
    #[must_use]
    pub fn has_alive_hand(&self) -> bool {
        self.left.alive || self.right.alive
    }

    /// At least one hand is dead and can be revived by a split.
    #[must_use]
    pub fn has_dead_hand(&self) -> bool {
        !self.left.alive || !self.right.alive
    }

    fn sides_where(&self, pred: impl Fn(&Hand) -> bool) -> HandSides {
        HandSide::BOTH
            .into_iter()
            .filter(|&side| pred(self.hand(side)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::One.number(), 1);
        assert_eq!(PlayerId::Two.index(), 1);
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
        assert_eq!(format!("{}", PlayerId::Two), "Player 2");
    }

    #[test]
    fn test_player_id_try_from() {
        assert_eq!(PlayerId::try_from(1u8), Ok(PlayerId::One));
        assert_eq!(PlayerId::try_from(2u8), Ok(PlayerId::Two));
        assert_eq!(PlayerId::try_from(0u8), Err(InvalidPlayerId(0)));
        assert_eq!(
            InvalidPlayerId(3).to_string(),
            "no player seat numbered 3"
        );
    }

    #[test]
    fn test_player_id_serialization() {
        let json = serde_json::to_string(&PlayerId::Two).unwrap();
        assert_eq!(json, "2");

        let id: PlayerId = serde_json::from_str("1").unwrap();
        assert_eq!(id, PlayerId::One);

        assert!(serde_json::from_str::<PlayerId>("7").is_err());
    }

    #[test]
    fn test_player_pair_new() {
        let pair: PlayerPair<u8> = PlayerPair::new(|p| p.number() * 10);

        assert_eq!(pair[PlayerId::One], 10);
        assert_eq!(pair[PlayerId::Two], 20);

        let entries: Vec<_> = pair.iter().collect();
        assert_eq!(entries, vec![(PlayerId::One, &10), (PlayerId::Two, &20)]);
    }

    #[test]
    fn test_player_pair_mutation() {
        let mut pair: PlayerPair<i32> = PlayerPair::default();

        pair[PlayerId::One] = 3;
        *pair.get_mut(PlayerId::Two) = 4;

        assert_eq!(pair[PlayerId::One], 3);
        assert_eq!(pair[PlayerId::Two], 4);
    }

    #[test]
    fn test_hand_filters_keep_slot_order() {
        let player = Player::default();
        assert_eq!(player.alive_hands().as_slice(), &[HandSide::Left, HandSide::Right]);
        assert!(player.dead_hands().is_empty());

        let player = Player::new(Hand::dead(), Hand::new(3, true));
        assert_eq!(player.alive_hands().as_slice(), &[HandSide::Right]);
        assert_eq!(player.dead_hands().as_slice(), &[HandSide::Left]);
        assert!(player.has_alive_hand());
        assert!(player.has_dead_hand());

        let player = Player::new(Hand::dead(), Hand::dead());
        assert!(!player.has_alive_hand());
        assert_eq!(player.dead_hands().as_slice(), &[HandSide::Left, HandSide::Right]);
    }

    #[test]
    fn test_hand_access() {
        let mut player = Player::default();
        player.hand_mut(HandSide::Right).fingers = 4;

        assert_eq!(player.hand(HandSide::Right).fingers, 4);
        assert_eq!(player.hand(HandSide::Left).fingers, 1);
    }
}
