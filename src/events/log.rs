//! Bounded event journal.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::event::{EventKind, GameEvent};
use crate::core::PlayerId;

/// Ordered record of the most recent emitted events.
///
/// Backed by `im::Vector`, so cloning the log (or an engine holding it)
/// is O(1). A bounded log keeps at most `capacity` events and drops the
/// oldest first; a capacity of 0 records nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vector<GameEvent>,
    capacity: Option<usize>,
    dropped: u64,
}

impl EventLog {
    /// Create an empty, unbounded log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log holding at most `capacity` events.
    #[must_use]
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Maximum number of retained events, `None` if unbounded.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Events evicted to stay within capacity.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Append an event, evicting the oldest when full.
    pub fn record(&mut self, event: GameEvent) {
        if self.capacity == Some(0) {
            self.dropped += 1;
            return;
        }
        self.events.push_back(event);
        if let Some(cap) = self.capacity {
            while self.events.len() > cap {
                self.events.pop_front();
                self.dropped += 1;
            }
        }
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.back()
    }

    /// Iterate in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Events concerning one player, in emission order.
    pub fn for_player(&self, player: PlayerId) -> impl Iterator<Item = &GameEvent> {
        self.events.iter().filter(move |e| e.player() == player)
    }

    /// Count events of one kind.
    #[must_use]
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    /// Remove and return every retained event. Capacity is kept.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events).into_iter().collect()
    }
}

impl Extend<GameEvent> for EventLog {
    fn extend<I: IntoIterator<Item = GameEvent>>(&mut self, iter: I) {
        for event in iter {
            self.record(event);
        }
    }
}
