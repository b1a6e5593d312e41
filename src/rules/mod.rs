//! The rules engine.
//!
//! `GameState` decides:
//! - Which moves are legal for the player to move
//! - How a move changes the hands
//! - When the turn passes and when the match ends
//!
//! Rejections come back as `MoveError` values and never touch state.

pub mod engine;
pub mod error;

pub use engine::{GameResult, GameState, MoveList};
pub use error::{MoveEffect, MoveError, MoveOutcome, MoveResponse, SnapshotError, TurnEnd};
