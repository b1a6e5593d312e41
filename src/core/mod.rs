//! Core data types: hands, players, moves, configuration, snapshots.
//!
//! Nothing here enforces turn order or legality; that lives in `rules`.

pub mod hand;
pub mod player;
pub mod config;
pub mod action;
pub mod state;

pub use hand::{Hand, HandSide, FINGER_MODULUS, STARTING_FINGERS};
pub use player::{HandSides, InvalidPlayerId, Player, PlayerId, PlayerPair};
pub use config::RulesConfig;
pub use action::{Move, MoveRecord, RawMove};
pub use state::{Phase, PlayerView, Snapshot};
