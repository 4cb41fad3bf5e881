//! Core engine types: players, sessions, clocks, RNG, configuration.
//!
//! Everything here is independent of the game rules. The engine combines
//! these with `rules` to drive sessions.

pub mod player;
pub mod clock;
pub mod rng;
pub mod config;
pub mod session;

pub use player::PlayerId;
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use rng::{generate_sequence, FixedSource, GameRng, GameRngState, SequenceSource};
pub use config::{ConfigError, GameConfig};
pub use session::{Sequence, Session, SessionId};
