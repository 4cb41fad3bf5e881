//! Event payloads.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, SessionId};

/// A notification emitted by the engine.
///
/// Payload fields are part of the observable contract. `GameStarted`'s
/// `session` is an opaque token; observers should not depend on its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new session began.
    GameStarted { player: PlayerId, session: SessionId },

    /// A winning attempt was scored. Always followed by `GameWon`.
    AttemptMade { player: PlayerId, matches: u8 },

    /// A non-winning attempt was scored and the session continues.
    AttemptMissed { player: PlayerId, matches: u8 },

    /// The player guessed the full sequence.
    GameWon { player: PlayerId },

    /// The attempt cap was reached without a win.
    GameEnded { player: PlayerId },
}

impl GameEvent {
    /// The player this event concerns.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            GameEvent::GameStarted { player, .. }
            | GameEvent::AttemptMade { player, .. }
            | GameEvent::AttemptMissed { player, .. }
            | GameEvent::GameWon { player }
            | GameEvent::GameEnded { player } => player,
        }
    }

    /// Payload-free discriminant.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::GameStarted { .. } => EventKind::GameStarted,
            GameEvent::AttemptMade { .. } => EventKind::AttemptMade,
            GameEvent::AttemptMissed { .. } => EventKind::AttemptMissed,
            GameEvent::GameWon { .. } => EventKind::GameWon,
            GameEvent::GameEnded { .. } => EventKind::GameEnded,
        }
    }

    /// Match count carried by scoring events.
    #[must_use]
    pub fn matches(&self) -> Option<u8> {
        match *self {
            GameEvent::AttemptMade { matches, .. } | GameEvent::AttemptMissed { matches, .. } => {
                Some(matches)
            }
            _ => None,
        }
    }

    /// Whether this event closes a session.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameWon { .. } | GameEvent::GameEnded { .. })
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { player, session } => {
                write!(f, "GameStarted({}, {})", player, session)
            }
            GameEvent::AttemptMade { player, matches } => {
                write!(f, "AttemptMade({}, {})", player, matches)
            }
            GameEvent::AttemptMissed { player, matches } => {
                write!(f, "AttemptMissed({}, {})", player, matches)
            }
            GameEvent::GameWon { player } => write!(f, "GameWon({})", player),
            GameEvent::GameEnded { player } => write!(f, "GameEnded({})", player),
        }
    }
}

/// Event discriminant, for asserting on event identity without payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    GameStarted,
    AttemptMade,
    AttemptMissed,
    GameWon,
    GameEnded,
}
