//! Attempt scoring.
//!
//! A guess scores one match per position whose digit equals the secret's
//! digit at that position. A digit that appears elsewhere in the secret
//! earns nothing.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::PlayerId;
use crate::error::GameError;
use crate::events::GameEvent;

/// Count exact positional matches between `secret` and `guess`.
///
/// ```
/// use bottle_arrangement::rules::score;
///
/// assert_eq!(score(&[1, 2, 3, 4, 0], &[1, 0, 3, 0, 2]), Ok(2));
/// assert!(score(&[1, 2, 3], &[1, 2]).is_err());
/// ```
pub fn score(secret: &[u8], guess: &[u8]) -> Result<u8, GameError> {
    if secret.len() != guess.len() {
        return Err(GameError::InvalidGuessLength {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let matches = secret.iter().zip(guess).filter(|(s, g)| s == g).count();
    // Secret length is bounded well below u8::MAX by configuration.
    Ok(matches as u8)
}

/// How an attempt concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptOutcome {
    /// Full match. The session is over and the cooldown is armed.
    Won { matches: u8 },

    /// Not a full match, attempts remain.
    Missed { matches: u8, remaining: u32 },

    /// Not a full match and the attempt cap is reached.
    Ended { matches: u8 },
}

impl AttemptOutcome {
    /// Positional matches scored by the attempt.
    #[must_use]
    pub fn matches(&self) -> u8 {
        match *self {
            AttemptOutcome::Won { matches }
            | AttemptOutcome::Missed { matches, .. }
            | AttemptOutcome::Ended { matches } => matches,
        }
    }

    /// Whether the session closed with this attempt.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AttemptOutcome::Missed { .. })
    }

    /// Whether this attempt won the session.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, AttemptOutcome::Won { .. })
    }

    /// Events announcing this outcome for `player`, in emission order.
    ///
    /// The final failing attempt is announced by `GameEnded` alone; its
    /// match count stays on the outcome.
    #[must_use]
    pub fn events(&self, player: PlayerId) -> SmallVec<[GameEvent; 2]> {
        match *self {
            AttemptOutcome::Won { matches } => smallvec![
                GameEvent::AttemptMade { player, matches },
                GameEvent::GameWon { player },
            ],
            AttemptOutcome::Missed { matches, .. } => {
                smallvec![GameEvent::AttemptMissed { player, matches }]
            }
            AttemptOutcome::Ended { .. } => smallvec![GameEvent::GameEnded { player }],
        }
    }
}

/// Decide the outcome of a scored attempt.
///
/// `attempts_made` already counts this attempt. A full match wins even on
/// the last allowed attempt.
#[must_use]
pub fn resolve(matches: u8, length: usize, attempts_made: u32, max_attempts: u32) -> AttemptOutcome {
    if usize::from(matches) == length {
        AttemptOutcome::Won { matches }
    } else if attempts_made >= max_attempts {
        AttemptOutcome::Ended { matches }
    } else {
        AttemptOutcome::Missed {
            matches,
            remaining: max_attempts - attempts_made,
        }
    }
}
