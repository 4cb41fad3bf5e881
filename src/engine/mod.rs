//! The game engine: per-player session store and lifecycle operations.
//!
//! ## State Machine
//!
//! Each player is in one of three phases (see [`PlayerPhase`]):
//!
//! ```text
//!              start_new_game
//!   NoSession ────────────────► Active ◄─┐ make_attempt (miss)
//!       ▲                        │  │    │
//!       │  make_attempt (cap)    │  └────┘
//!       └────────────────────────┘
//!                                │ make_attempt (full match)
//!                                ▼
//!                           WonCooldown ── cooldown elapses ──► NoSession
//! ```
//!
//! `start_new_game` is rejected in `Active` (`SessionInProgress`) and in
//! `WonCooldown` (`CooldownActive`).

mod game;
mod phase;

pub use game::GameEngine;
pub use phase::PlayerPhase;
