//! Rules configuration.
//!
//! The rules themselves are fixed. `RulesConfig` only covers engine
//! bookkeeping that callers may want to tune, such as switching off move
//! history for bulk simulations.

use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Keep a `MoveRecord` for every accepted move.
    pub record_history: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            record_history: true,
        }
    }
}

impl RulesConfig {
    /// Create a new config with history recording switched on or off.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }
}
