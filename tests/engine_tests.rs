//! Session lifecycle integration tests.
//!
//! These tests drive the engine only through its public operations and
//! read secrets back through `get_session`, the way an in-process harness
//! would.

use bottle_arrangement::core::{FixedSource, GameConfig, GameRng, ManualClock, PlayerId, Timestamp};
use bottle_arrangement::events::{EventKind, GameEvent};
use bottle_arrangement::{AttemptOutcome, GameEngine, GameError, PlayerPhase};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Engine whose secrets never contain a zero, so all-zero guesses always miss.
fn engine_without_zeros() -> GameEngine<ManualClock, FixedSource> {
    init_tracing();
    GameEngine::new(
        GameConfig::default(),
        ManualClock::new(Timestamp::new(0)),
        FixedSource::new(vec![3, 1, 4, 1, 2]),
    )
    .unwrap()
}

fn seeded_engine(seed: u64) -> GameEngine<ManualClock, GameRng> {
    init_tracing();
    GameEngine::new(
        GameConfig::default(),
        ManualClock::new(Timestamp::new(0)),
        GameRng::new(seed),
    )
    .unwrap()
}

/// Starting a game emits GameStarted for the player.
#[test]
fn test_start_new_game_emits_started() {
    let mut engine = seeded_engine(1);
    let player = PlayerId::new(1);

    engine.start_new_game(player).unwrap();

    let events: Vec<_> = engine.events().iter().copied().collect();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind(), EventKind::GameStarted);
    assert_eq!(events[0].player(), player);
}

/// Submitting the secret read from the session store wins.
#[test]
fn test_correct_sequence_wins() {
    let mut engine = seeded_engine(2);
    let player = PlayerId::new(1);
    engine.start_new_game(player).unwrap();
    engine.take_events();

    let secret = engine.get_session(player).unwrap().sequence().to_vec();
    let outcome = engine.make_attempt(player, &secret).unwrap();

    assert_eq!(outcome, AttemptOutcome::Won { matches: 5 });
    assert_eq!(
        engine.take_events(),
        vec![
            GameEvent::AttemptMade { player, matches: 5 },
            GameEvent::GameWon { player },
        ]
    );
    assert!(!engine.get_session(player).unwrap().active);
}

/// Four misses keep the session alive; the fifth ends it with GameEnded only.
#[test]
fn test_five_misses_end_the_game() {
    let mut engine = engine_without_zeros();
    let player = PlayerId::new(1);
    engine.start_new_game(player).unwrap();
    engine.take_events();

    for attempt in 1..=4 {
        let outcome = engine.make_attempt(player, &[0, 0, 0, 0, 0]).unwrap();
        assert_eq!(
            outcome,
            AttemptOutcome::Missed { matches: 0, remaining: 5 - attempt }
        );
        assert_eq!(
            engine.take_events(),
            vec![GameEvent::AttemptMissed { player, matches: 0 }]
        );
        assert!(engine.get_session(player).unwrap().active);
    }

    let outcome = engine.make_attempt(player, &[0, 0, 0, 0, 0]).unwrap();
    assert_eq!(outcome, AttemptOutcome::Ended { matches: 0 });
    assert_eq!(engine.take_events(), vec![GameEvent::GameEnded { player }]);

    let session = engine.get_session(player).unwrap();
    assert!(!session.active);
    assert!(!session.has_won());
    assert_eq!(session.attempts_made, 5);
    assert_eq!(session.last_win, None);
}

/// Partial matches are reported on misses.
#[test]
fn test_partial_match_count() {
    let mut engine = engine_without_zeros();
    let player = PlayerId::new(1);
    engine.start_new_game(player).unwrap();

    // Secret is [3, 1, 4, 1, 2]
    let outcome = engine.make_attempt(player, &[3, 0, 4, 0, 0]).unwrap();
    assert_eq!(outcome.matches(), 2);
    assert_eq!(
        engine.events().last(),
        Some(&GameEvent::AttemptMissed { player, matches: 2 })
    );
}

/// A win on the final allowed attempt is still a win.
#[test]
fn test_win_on_last_attempt() {
    let mut engine = engine_without_zeros();
    let player = PlayerId::new(1);
    engine.start_new_game(player).unwrap();

    for _ in 0..4 {
        engine.make_attempt(player, &[0, 0, 0, 0, 0]).unwrap();
    }

    let outcome = engine.make_attempt(player, &[3, 1, 4, 1, 2]).unwrap();
    assert!(outcome.is_win());
    assert_eq!(engine.phase(player), PlayerPhase::WonCooldown);
}

/// A second start during an active session is rejected.
#[test]
fn test_start_while_in_progress() {
    let mut engine = seeded_engine(3);
    let player = PlayerId::new(1);

    engine.start_new_game(player).unwrap();
    let err = engine.start_new_game(player).unwrap_err();

    assert_eq!(err, GameError::SessionInProgress);
    assert_eq!(err.to_string(), "Game in progress");
}

/// Attempts without an active session are rejected.
#[test]
fn test_attempt_without_session() {
    let mut engine = engine_without_zeros();
    let player = PlayerId::new(1);

    // Never started
    assert_eq!(
        engine.make_attempt(player, &[0, 0, 0, 0, 0]),
        Err(GameError::NoActiveSession)
    );

    // Already ended
    engine.start_new_game(player).unwrap();
    for _ in 0..5 {
        engine.make_attempt(player, &[0, 0, 0, 0, 0]).unwrap();
    }
    assert_eq!(
        engine.make_attempt(player, &[0, 0, 0, 0, 0]),
        Err(GameError::NoActiveSession)
    );

    // Already won
    let winner = PlayerId::new(2);
    engine.start_new_game(winner).unwrap();
    let secret = engine.get_session(winner).unwrap().sequence().to_vec();
    engine.make_attempt(winner, &secret).unwrap();
    assert_eq!(
        engine.make_attempt(winner, &secret),
        Err(GameError::NoActiveSession)
    );
}

/// Wrong-length guesses are rejected without consuming an attempt.
#[test]
fn test_invalid_guess_length() {
    let mut engine = engine_without_zeros();
    let player = PlayerId::new(1);
    engine.start_new_game(player).unwrap();
    let events_before = engine.events().len();

    assert_eq!(
        engine.make_attempt(player, &[0, 0, 0, 0]),
        Err(GameError::InvalidGuessLength { expected: 5, actual: 4 })
    );
    assert_eq!(
        engine.make_attempt(player, &[0, 0, 0, 0, 0, 0]),
        Err(GameError::InvalidGuessLength { expected: 5, actual: 6 })
    );

    assert_eq!(engine.get_session(player).unwrap().attempts_made, 0);
    assert_eq!(engine.events().len(), events_before);
}

/// A player may start again straight away after running out of attempts.
#[test]
fn test_restart_after_loss() {
    let mut engine = engine_without_zeros();
    let player = PlayerId::new(1);

    let first = engine.start_new_game(player).unwrap();
    for _ in 0..5 {
        engine.make_attempt(player, &[0, 0, 0, 0, 0]).unwrap();
    }
    assert_eq!(engine.phase(player), PlayerPhase::NoSession);

    let second = engine.start_new_game(player).unwrap();
    assert_ne!(first, second);
    assert_eq!(engine.get_session(player).unwrap().attempts_made, 0);
}

/// Two players' sessions are independent.
#[test]
fn test_players_are_isolated() {
    let mut engine = seeded_engine(4);
    let alice = PlayerId::new(1);
    let bob = PlayerId::new(2);

    engine.start_new_game(alice).unwrap();
    engine.start_new_game(bob).unwrap();

    let alice_secret = engine.get_session(alice).unwrap().sequence().to_vec();
    let wrong_for_bob: Vec<u8> = engine
        .get_session(bob)
        .unwrap()
        .sequence()
        .iter()
        .map(|d| (d + 1) % 5)
        .collect();

    engine.make_attempt(bob, &wrong_for_bob).unwrap();
    engine.make_attempt(bob, &wrong_for_bob).unwrap();
    engine.make_attempt(alice, &alice_secret).unwrap();

    let bob_session = engine.get_session(bob).unwrap();
    assert!(bob_session.active);
    assert_eq!(bob_session.attempts_made, 2);
    assert_eq!(bob_session.last_win, None);
    assert_eq!(engine.phase(bob), PlayerPhase::Active);

    assert_eq!(engine.phase(alice), PlayerPhase::WonCooldown);
    assert_eq!(engine.cooldown_remaining(bob), None);
    assert_eq!(engine.events().for_player(bob).count(), 3);
}

/// Custom configurations change secret shape and attempt cap.
#[test]
fn test_custom_config() {
    let config = GameConfig::new()
        .with_sequence_length(3)
        .with_digit_range(10)
        .with_max_attempts(2);
    let mut engine = GameEngine::new(
        config,
        ManualClock::default(),
        FixedSource::new(vec![7, 8, 9]),
    )
    .unwrap();
    let player = PlayerId::new(1);

    engine.start_new_game(player).unwrap();
    assert_eq!(engine.get_session(player).unwrap().sequence(), &[7, 8, 9]);
    assert_eq!(engine.remaining_attempts(player), Some(2));

    assert_eq!(
        engine.make_attempt(player, &[7, 0, 0]).unwrap(),
        AttemptOutcome::Missed { matches: 1, remaining: 1 }
    );
    assert_eq!(
        engine.make_attempt(player, &[7, 8, 0]).unwrap(),
        AttemptOutcome::Ended { matches: 2 }
    );
    assert_eq!(engine.remaining_attempts(player), None);
}
