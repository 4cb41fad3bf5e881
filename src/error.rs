//! Operation errors.
//!
//! Every variant is a rejected precondition. No state changes when an
//! operation fails, and the caller can retry once the condition clears.

use thiserror::Error;

/// Errors returned by [`GameEngine`](crate::GameEngine) operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The player already has an active session.
    #[error("Game in progress")]
    SessionInProgress,

    /// The player won too recently to start again.
    #[error("Wait 2 minutes after winning ({remaining_secs}s left)")]
    CooldownActive { remaining_secs: u64 },

    /// The player has no active session to attempt against.
    #[error("No active game")]
    NoActiveSession,

    /// The guess does not match the secret's length.
    #[error("Guess must have {expected} digits, got {actual}")]
    InvalidGuessLength { expected: usize, actual: usize },
}
