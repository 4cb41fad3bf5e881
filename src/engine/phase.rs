//! Player lifecycle phase.

use serde::{Deserialize, Serialize};

/// Where a player stands in the session lifecycle at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPhase {
    /// No active session and free to start one.
    NoSession,
    /// A session is accepting attempts.
    Active,
    /// Won recently; new sessions are blocked until the cooldown elapses.
    WonCooldown,
}

impl PlayerPhase {
    /// Whether `start_new_game` would succeed in this phase.
    #[must_use]
    pub fn can_start(self) -> bool {
        self == PlayerPhase::NoSession
    }
}
