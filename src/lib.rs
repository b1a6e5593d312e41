//! # chopsticks
//!
//! Rules engine for the two-player "chopsticks" hand game.
//!
//! ## The Game
//!
//! Each player holds up two hands, one finger each. On your turn you either:
//!
//! - **Attack**: add one of your hands' fingers onto an opponent's hand.
//!   Counts wrap modulo 5; a total of exactly 5 kills the hand.
//! - **Split**: halve an even hand to bring one of your dead hands back.
//!
//! A player with no alive hands loses.
//!
//! ## Architecture
//!
//! - **Single authority**: `GameState` owns the match and is the only
//!   mutator. Callers poll predicates, submit moves, and re-render from
//!   `snapshot()`.
//!
//! - **Values, not panics**: rule violations come back as `MoveError`
//!   and leave state untouched.
//!
//! - **Persistent history**: move records live in an `im::Vector`, so
//!   cloning a match for look-ahead is cheap.
//!
//! ## Modules
//!
//! - `core`: Hands, players, moves, configuration, snapshots
//! - `rules`: The `GameState` engine and its results

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Hand, HandSide, Move, MoveRecord, Phase, Player, PlayerId, PlayerPair, RawMove, RulesConfig,
    Snapshot,
};

pub use crate::rules::{
    GameResult, GameState, MoveEffect, MoveError, MoveOutcome, MoveResponse, SnapshotError, TurnEnd,
};
