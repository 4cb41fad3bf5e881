//! Random sources for secret-sequence generation.
//!
//! ## Key Features
//!
//! - **Injectable**: The engine depends on [`SequenceSource`], not a concrete generator
//! - **Deterministic**: Same seed produces identical secrets
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use bottle_arrangement::core::{generate_sequence, GameRng};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! let secret = generate_sequence(&mut rng1, 5, 5);
//! assert_eq!(secret.len(), 5);
//! assert!(secret.iter().all(|&d| d < 5));
//! assert_eq!(secret, generate_sequence(&mut rng2, 5, 5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::session::Sequence;

/// A capability that yields secret digits.
///
/// Implementations should return values in `[0, range)`; callers building
/// secrets go through [`generate_sequence`], which enforces the bound.
/// A `range` of 0 means no alphabet and yields 0.
pub trait SequenceSource {
    /// Draw one digit, nominally in `[0, range)`.
    fn next_digit(&mut self, range: u8) -> u8;
}

/// Draw a secret of exactly `len` digits, each in `[0, range)`.
///
/// Out-of-range digits from the source are reduced modulo `range`.
pub fn generate_sequence<S: SequenceSource + ?Sized>(
    source: &mut S,
    len: usize,
    range: u8,
) -> Sequence {
    (0..len)
        .map(|_| source.next_digit(range).checked_rem(range).unwrap_or(0))
        .collect()
}

impl<S: SequenceSource + ?Sized> SequenceSource for Box<S> {
    fn next_digit(&mut self, range: u8) -> u8 {
        (**self).next_digit(range)
    }
}

/// Seeded RNG for secret sequences.
///
/// Uses ChaCha8 for speed. Secrets only need to be unknown to the player,
/// not cryptographically unpredictable.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl SequenceSource for GameRng {
    fn next_digit(&mut self, range: u8) -> u8 {
        if range == 0 {
            return 0;
        }
        self.gen_range(0..range)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many digits have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Scripted source that replays a fixed digit list, cycling at the end.
///
/// Digits are reduced modulo the requested range so every draw stays in
/// bounds. An empty script, or a range of 0, yields zeros.
#[derive(Clone, Debug, Default)]
pub struct FixedSource {
    digits: Vec<u8>,
    cursor: usize,
}

impl FixedSource {
    /// Create a source replaying `digits`.
    pub fn new(digits: impl Into<Vec<u8>>) -> Self {
        Self {
            digits: digits.into(),
            cursor: 0,
        }
    }
}

impl SequenceSource for FixedSource {
    fn next_digit(&mut self, range: u8) -> u8 {
        if self.digits.is_empty() {
            return 0;
        }
        let digit = self.digits[self.cursor % self.digits.len()];
        self.cursor += 1;
        digit.checked_rem(range).unwrap_or(0)
    }
}
