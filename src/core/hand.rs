//! Hands: the two finger counters every player owns.
//!
//! ## HandSide
//!
//! Fixed anatomical slot (`Left` / `Right`). Slots never swap, so a
//! `HandSide` names the same hand for the whole match.
//!
//! ## Hand
//!
//! Finger count plus alive flag. Death is governed only by `alive`:
//! a hand at 0 fingers is not necessarily dead.

use serde::{Deserialize, Serialize};

/// Finger totals are reduced modulo this value; hitting it exactly kills a hand.
pub const FINGER_MODULUS: u8 = 5;

/// Fingers on each hand at the start of a match.
pub const STARTING_FINGERS: u8 = 1;

/// One of a player's two hand slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandSide {
    Left,
    Right,
}

impl HandSide {
    /// Both slots in canonical `[left, right]` order.
    pub const BOTH: [HandSide; 2] = [HandSide::Left, HandSide::Right];

    /// The slot on the other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            HandSide::Left => HandSide::Right,
            HandSide::Right => HandSide::Left,
        }
    }

    /// Lowercase label, matching the wire format.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            HandSide::Left => "left",
            HandSide::Right => "right",
        }
    }
}

impl std::fmt::Display for HandSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    /// Fingers currently raised, in `0..FINGER_MODULUS`.
    pub fingers: u8,

    /// Cleared only when an attack brings the total to exactly `FINGER_MODULUS`.
    #[serde(rename = "isAlive")]
    pub alive: bool,
}

impl Hand {
    /// Create a hand with an explicit finger count and status.
    #[must_use]
    pub const fn new(fingers: u8, alive: bool) -> Self {
        Self { fingers, alive }
    }

    /// A dead hand. Dead hands always record 0 fingers.
    #[must_use]
    pub const fn dead() -> Self {
        Self::new(0, false)
    }

    /// Alive with fingers to spend.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.alive && self.fingers > 0
    }

    /// Alive with a nonzero even count, so it can be halved.
    #[must_use]
    pub const fn is_splittable(&self) -> bool {
        self.is_armed() && self.fingers % 2 == 0
    }

    /// Add `incoming` fingers to this hand.
    ///
    /// The count wraps modulo `FINGER_MODULUS`. A pre-wrap total of exactly
    /// `FINGER_MODULUS` kills the hand, leaving the wrapped value (0) recorded.
    ///
    /// Returns `true` if the hand died.
    pub fn receive(&mut self, incoming: u8) -> bool {
        let total = self.fingers + incoming;
        self.fingers = total % FINGER_MODULUS;

        if total == FINGER_MODULUS {
            self.alive = false;
            return true;
        }
        false
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new(STARTING_FINGERS, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_default() {
        let hand = Hand::default();
        assert_eq!(hand.fingers, 1);
        assert!(hand.alive);
        assert!(hand.is_armed());
        assert!(!hand.is_splittable());
    }

    #[test]
    fn test_side_other() {
        assert_eq!(HandSide::Left.other(), HandSide::Right);
        assert_eq!(HandSide::Right.other(), HandSide::Left);
        assert_eq!(HandSide::BOTH, [HandSide::Left, HandSide::Right]);
        assert_eq!(format!("{}", HandSide::Left), "left");
    }

    #[test]
    fn test_receive_wraps() {
        let mut hand = Hand::new(4, true);
        let died = hand.receive(3);

        assert!(!died);
        assert_eq!(hand.fingers, 2); // 7 mod 5
        assert!(hand.alive);
    }

    #[test]
    fn test_receive_exact_five_kills() {
        let mut hand = Hand::new(2, true);
        let died = hand.receive(3);

        assert!(died);
        assert!(!hand.alive);
        assert_eq!(hand.fingers, 0);
        assert_eq!(hand, Hand::dead());
    }

    #[test]
    fn test_zero_fingers_alive_is_not_armed() {
        let hand = Hand::new(0, true);
        assert!(hand.alive);
        assert!(!hand.is_armed());
        assert!(!hand.is_splittable());
    }

    #[test]
    fn test_splittable() {
        assert!(Hand::new(2, true).is_splittable());
        assert!(Hand::new(4, true).is_splittable());
        assert!(!Hand::new(3, true).is_splittable());
        assert!(!Hand::new(4, false).is_splittable());
    }

    #[test]
    fn test_side_serialization() {
        let json = serde_json::to_string(&HandSide::Right).unwrap();
        assert_eq!(json, "\"right\"");
        let side: HandSide = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(side, HandSide::Left);
    }
}
