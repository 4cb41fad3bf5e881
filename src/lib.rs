//! # bottle-arrangement
//!
//! A single-player sequence-guessing game engine.
//!
//! Each player asks for a new game, receives a hidden sequence of digits,
//! and has a fixed number of attempts to reproduce it exactly. Every
//! attempt is scored by counting digits in the right position. A full
//! match wins and arms a cooldown before that player may start again.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: All per-player state lives in one keyed store
//!    owned by [`GameEngine`]. No statics.
//!
//! 2. **Injectable Capabilities**: Time ([`core::Clock`]) and randomness
//!    ([`core::SequenceSource`]) are parameters, so tests are deterministic.
//!
//! 3. **Atomic Operations**: A rejected operation leaves state untouched.
//!
//! ## Modules
//!
//! - `core`: Player IDs, sessions, clocks, RNG, configuration
//! - `rules`: Positional scoring and outcome resolution
//! - `events`: Event payloads and the event journal
//! - `engine`: The session store and lifecycle operations
//!
//! ## Example
//!
//! ```
//! use bottle_arrangement::core::PlayerId;
//! use bottle_arrangement::{GameEngine, GameError};
//!
//! let mut engine: GameEngine = GameEngine::with_defaults();
//! let player = PlayerId::new(1);
//!
//! engine.start_new_game(player).unwrap();
//! assert_eq!(engine.start_new_game(player), Err(GameError::SessionInProgress));
//!
//! let outcome = engine.make_attempt(player, &[0, 0, 0, 0, 0]).unwrap();
//! assert!(outcome.matches() <= 5);
//! ```

pub mod core;
pub mod rules;
pub mod events;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    PlayerId,
    Clock, ManualClock, SystemClock, Timestamp,
    generate_sequence, FixedSource, GameRng, GameRngState, SequenceSource,
    ConfigError, GameConfig,
    Sequence, Session, SessionId,
};

pub use crate::rules::{resolve, score, AttemptOutcome};

pub use crate::events::{EventKind, EventLog, GameEvent};

pub use crate::engine::{GameEngine, PlayerPhase};

pub use crate::error::GameError;
