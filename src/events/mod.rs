//! Game notifications.
//!
//! Every successful operation emits one or more [`GameEvent`]s. Events are
//! returned to the caller and appended to the engine's [`EventLog`], so
//! observers can either react per call or replay the journal later.
//!
//! ## Emission Order
//!
//! | Operation                     | Events                           |
//! |-------------------------------|----------------------------------|
//! | `start_new_game`              | `GameStarted`                    |
//! | `make_attempt` (full match)   | `AttemptMade`, then `GameWon`    |
//! | `make_attempt` (miss)         | `AttemptMissed`                  |
//! | `make_attempt` (last attempt) | `GameEnded`                      |

mod event;
mod log;

pub use event::{EventKind, GameEvent};
pub use log::EventLog;
