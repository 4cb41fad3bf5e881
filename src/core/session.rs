//! Per-player session state.
//!
//! A `Session` is one player's current or most recently concluded game.
//! The engine owns every session; callers only ever see shared references.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::clock::Timestamp;

/// Ordered secret digits. Inline for lengths up to 8.
pub type Sequence = SmallVec<[u8; 8]>;

/// Opaque session identifier, unique within one engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// One player's game instance.
///
/// `sequence` is fixed at creation. [`has_won`](Self::has_won) reports how
/// this session ended.
/// `last_win` belongs to the player rather than the game: it is carried
/// into each new session and outlives `active`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Identifier returned by the start that created this session.
    pub id: SessionId,

    sequence: Sequence,

    /// Scored guesses so far. Rejected guesses are not counted.
    pub attempts_made: u32,

    /// True until the session is won or runs out of attempts.
    pub active: bool,

    won: bool,

    /// When the session was started.
    pub started_at: Timestamp,

    /// The player's most recent win, in this or any earlier session.
    pub last_win: Option<Timestamp>,
}

impl Session {
    pub(crate) fn new(
        id: SessionId,
        sequence: Sequence,
        started_at: Timestamp,
        last_win: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            sequence,
            attempts_made: 0,
            active: true,
            won: false,
            started_at,
            last_win,
        }
    }

    /// The secret sequence.
    #[must_use]
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Attempts left before the cap, given the engine's `max_attempts`.
    #[must_use]
    pub fn remaining_attempts(&self, max_attempts: u32) -> u32 {
        max_attempts.saturating_sub(self.attempts_made)
    }

    /// Conclude the session as a win at `at`.
    pub(crate) fn record_win(&mut self, at: Timestamp) {
        self.active = false;
        self.won = true;
        self.last_win = Some(at);
    }

    /// Whether this session ended in a win.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Seconds of cooldown left at `now`, if any.
    #[must_use]
    pub fn cooldown_remaining(&self, now: Timestamp, cooldown_secs: u64) -> Option<u64> {
        let won_at = self.last_win?;
        let elapsed = now.saturating_since(won_at);
        (elapsed < cooldown_secs).then(|| cooldown_secs - elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn session(last_win: Option<u64>) -> Session {
        Session::new(
            SessionId(1),
            smallvec![1, 2, 3, 4, 0],
            Timestamp::new(1_000),
            last_win.map(Timestamp::new),
        )
    }

    #[test]
    fn test_new_session() {
        let s = session(None);

        assert_eq!(s.sequence(), &[1, 2, 3, 4, 0]);
        assert_eq!(s.attempts_made, 0);
        assert!(s.active);
        assert!(!s.has_won());
        assert_eq!(s.remaining_attempts(5), 5);
        assert_eq!(format!("{}", s.id), "Session(1)");
    }

    #[test]
    fn test_remaining_attempts_saturates() {
        let mut s = session(None);
        s.attempts_made = 7;
        assert_eq!(s.remaining_attempts(5), 0);
    }

    #[test]
    fn test_carried_win_is_not_this_sessions_win() {
        let mut s = session(Some(500));
        s.active = false;
        assert!(!s.has_won());
    }

    #[test]
    fn test_record_win() {
        let mut s = session(Some(500));
        s.record_win(Timestamp::new(1_050));

        assert!(!s.active);
        assert!(s.has_won());
        assert_eq!(s.last_win, Some(Timestamp::new(1_050)));
        assert_eq!(s.cooldown_remaining(Timestamp::new(1_100), 120), Some(70));
    }

    #[test]
    fn test_cooldown_remaining() {
        let s = session(Some(1_000));

        assert_eq!(s.cooldown_remaining(Timestamp::new(1_000), 120), Some(120));
        assert_eq!(s.cooldown_remaining(Timestamp::new(1_119), 120), Some(1));
        assert_eq!(s.cooldown_remaining(Timestamp::new(1_120), 120), None);
        assert_eq!(session(None).cooldown_remaining(Timestamp::new(0), 120), None);
    }

    #[test]
    fn test_session_serialization() {
        let s = session(Some(900));
        let json = serde_json::to_string(&s).unwrap();
        let deserialized: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(s, deserialized);
    }
}
