//! Game rules: attempt scoring and outcome resolution.
//!
//! Rules are pure functions over a secret, a guess and the attempt count.
//! The engine owns the state and applies what these functions decide.

pub mod scoring;

pub use scoring::{resolve, score, AttemptOutcome};
