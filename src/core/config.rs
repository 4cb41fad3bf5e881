//! Game configuration.
//!
//! `GameConfig` fixes the shape of every session an engine creates:
//! - Secret length and digit alphabet
//! - Attempt cap
//! - Post-win cooldown
//! - Event journal capacity
//!
//! All fields default to the standard rules, so a partial serialized
//! document (e.g. `{"cooldown_secs": 30}`) is a valid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default secret length.
pub const DEFAULT_SEQUENCE_LENGTH: usize = 5;
/// Default digit alphabet size: digits are drawn from `[0, 5)`.
pub const DEFAULT_DIGIT_RANGE: u8 = 5;
/// Default attempts per session.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
/// Default wait after a win before a new session may start.
pub const DEFAULT_COOLDOWN_SECS: u64 = 120;
/// Default number of events the engine journal retains.
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 1024;

/// Longest secret the engine accepts.
pub const MAX_SEQUENCE_LENGTH: usize = 32;

/// Configuration rejected by [`GameConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("sequence length must be between 1 and {max}, got {got}")]
    SequenceLength { got: usize, max: usize },

    #[error("digit range must be at least 2, got {0}")]
    DigitRange(u8),

    #[error("max attempts must be at least 1")]
    NoAttempts,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of digits in each secret (and each guess).
    pub sequence_length: usize,

    /// Digits are drawn independently from `[0, digit_range)`.
    pub digit_range: u8,

    /// Attempts allowed before the session ends without a win.
    pub max_attempts: u32,

    /// Seconds after a win during which no new session may start.
    pub cooldown_secs: u64,

    /// Most recent events kept in the engine journal. 0 disables journaling;
    /// per-call results are still returned to the caller.
    pub event_log_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            digit_range: DEFAULT_DIGIT_RANGE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            event_log_capacity: DEFAULT_EVENT_LOG_CAPACITY,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the secret length.
    #[must_use]
    pub fn with_sequence_length(mut self, len: usize) -> Self {
        self.sequence_length = len;
        self
    }

    /// Set the digit alphabet size.
    #[must_use]
    pub fn with_digit_range(mut self, range: u8) -> Self {
        self.digit_range = range;
        self
    }

    /// Set the attempt cap.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the post-win cooldown.
    #[must_use]
    pub fn with_cooldown_secs(mut self, secs: u64) -> Self {
        self.cooldown_secs = secs;
        self
    }

    /// Set how many events the engine journal retains.
    #[must_use]
    pub fn with_event_log_capacity(mut self, capacity: usize) -> Self {
        self.event_log_capacity = capacity;
        self
    }

    /// Check that the configuration can drive a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequence_length == 0 || self.sequence_length > MAX_SEQUENCE_LENGTH {
            return Err(ConfigError::SequenceLength {
                got: self.sequence_length,
                max: MAX_SEQUENCE_LENGTH,
            });
        }
        if self.digit_range < 2 {
            return Err(ConfigError::DigitRange(self.digit_range));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }
}
