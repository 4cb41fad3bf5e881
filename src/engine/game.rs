//! Game engine implementation.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::phase::PlayerPhase;
use crate::core::{
    generate_sequence, Clock, ConfigError, GameConfig, GameRng, PlayerId, SequenceSource,
    Session, SessionId, SystemClock,
};
use crate::error::GameError;
use crate::events::{EventLog, GameEvent};
use crate::rules::{resolve, score, AttemptOutcome};

/// Owns one session per player and routes every mutation through
/// [`start_new_game`](Self::start_new_game) and
/// [`make_attempt`](Self::make_attempt).
///
/// Each operation checks all of its preconditions before touching state,
/// so a rejected call leaves the engine unchanged.
///
/// ## Example
///
/// ```
/// use bottle_arrangement::core::{FixedSource, GameConfig, ManualClock, PlayerId, Timestamp};
/// use bottle_arrangement::{AttemptOutcome, GameEngine};
///
/// let clock = ManualClock::new(Timestamp::new(0));
/// let source = FixedSource::new(vec![1, 2, 3, 4, 1]);
/// let mut engine = GameEngine::new(GameConfig::default(), clock, source).unwrap();
///
/// let alice = PlayerId::new(1);
/// engine.start_new_game(alice).unwrap();
///
/// let outcome = engine.make_attempt(alice, &[1, 2, 3, 4, 1]).unwrap();
/// assert_eq!(outcome, AttemptOutcome::Won { matches: 5 });
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<C = SystemClock, S = GameRng> {
    config: GameConfig,
    clock: C,
    source: S,
    sessions: FxHashMap<PlayerId, Session>,
    next_session: u64,
    events: EventLog,
}

impl GameEngine {
    /// Engine with standard rules, wall-clock time and an entropy-seeded RNG.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_parts(GameConfig::default(), SystemClock, GameRng::from_entropy())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<C: Clock, S: SequenceSource> GameEngine<C, S> {
    /// Create an engine, rejecting configurations that cannot drive a game.
    pub fn new(config: GameConfig, clock: C, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, clock, source))
    }

    fn from_parts(config: GameConfig, clock: C, source: S) -> Self {
        Self {
            clock,
            source,
            sessions: FxHashMap::default(),
            next_session: 0,
            events: EventLog::bounded(config.event_log_capacity),
            config,
        }
    }

    // === Operations ===

    /// Start a new session for `player` with a freshly generated secret.
    ///
    /// Fails with `SessionInProgress` while a session is active, and with
    /// `CooldownActive` within `cooldown_secs` of the player's last win.
    /// Emits `GameStarted`. The returned id is the event's session token,
    /// so callers need not read the journal.
    pub fn start_new_game(&mut self, player: PlayerId) -> Result<SessionId, GameError> {
        let now = self.clock.now();

        let last_win = match self.sessions.get(&player) {
            Some(session) if session.active => {
                debug!(player = %player, "start rejected: session in progress");
                return Err(GameError::SessionInProgress);
            }
            Some(session) => {
                if let Some(remaining_secs) =
                    session.cooldown_remaining(now, self.config.cooldown_secs)
                {
                    debug!(player = %player, remaining_secs, "start rejected: cooldown active");
                    return Err(GameError::CooldownActive { remaining_secs });
                }
                session.last_win
            }
            None => None,
        };

        let sequence = generate_sequence(
            &mut self.source,
            self.config.sequence_length,
            self.config.digit_range,
        );
        let id = SessionId(self.next_session);
        self.next_session += 1;

        self.sessions
            .insert(player, Session::new(id, sequence, now, last_win));
        self.events.record(GameEvent::GameStarted { player, session: id });

        info!(player = %player, session = %id, at = %now, "game started");
        Ok(id)
    }

    /// Score `guess` against the player's secret and advance the session.
    ///
    /// Fails with `NoActiveSession` if the player has no active session and
    /// with `InvalidGuessLength` if `guess` is not as long as the secret.
    /// Neither failure consumes an attempt. The events this call emitted are
    /// available from [`AttemptOutcome::events`].
    pub fn make_attempt(
        &mut self,
        player: PlayerId,
        guess: &[u8],
    ) -> Result<AttemptOutcome, GameError> {
        let now = self.clock.now();
        let max_attempts = self.config.max_attempts;

        let Some(session) = self.sessions.get_mut(&player).filter(|s| s.active) else {
            debug!(player = %player, "attempt rejected: no active session");
            return Err(GameError::NoActiveSession);
        };

        let matches = score(session.sequence(), guess)?;
        session.attempts_made += 1;

        let outcome = resolve(
            matches,
            session.sequence().len(),
            session.attempts_made,
            max_attempts,
        );

        match outcome {
            AttemptOutcome::Won { .. } => {
                session.record_win(now);
                info!(player = %player, attempts = session.attempts_made, "game won");
            }
            AttemptOutcome::Ended { .. } => {
                session.active = false;
                info!(player = %player, matches, "game ended: attempts exhausted");
            }
            AttemptOutcome::Missed { remaining, .. } => {
                debug!(player = %player, matches, remaining, "attempt missed");
            }
        }

        self.events.extend(outcome.events(player));
        Ok(outcome)
    }

    // === Queries ===

    /// The player's current or most recent session.
    #[must_use]
    pub fn get_session(&self, player: PlayerId) -> Option<&Session> {
        self.sessions.get(&player)
    }

    /// The player's lifecycle phase at the current instant.
    #[must_use]
    pub fn phase(&self, player: PlayerId) -> PlayerPhase {
        match self.sessions.get(&player) {
            Some(session) if session.active => PlayerPhase::Active,
            Some(_) if self.cooldown_remaining(player).is_some() => PlayerPhase::WonCooldown,
            _ => PlayerPhase::NoSession,
        }
    }

    /// Seconds until the player may start again after a win, if blocked.
    #[must_use]
    pub fn cooldown_remaining(&self, player: PlayerId) -> Option<u64> {
        self.sessions
            .get(&player)?
            .cooldown_remaining(self.clock.now(), self.config.cooldown_secs)
    }

    /// Attempts left in the player's active session.
    #[must_use]
    pub fn remaining_attempts(&self, player: PlayerId) -> Option<u32> {
        self.sessions
            .get(&player)
            .filter(|s| s.active)
            .map(|s| s.remaining_attempts(self.config.max_attempts))
    }

    /// Number of players with a stored session, active or not.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Number of players with an active session.
    #[must_use]
    pub fn active_session_count(&self) -> usize {
        self.sessions.values().filter(|s| s.active).count()
    }

    /// The most recent emitted events, in order, up to
    /// `GameConfig::event_log_capacity`.
    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Drain the event journal.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// The rules this engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The engine's time source.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
