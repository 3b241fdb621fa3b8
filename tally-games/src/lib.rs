//! Tally Games - small arithmetic games for two age groups
//!
//! A counting game (spot how many symbols are shown) and a timed
//! arithmetic drill with levels, scoring, and penalties. All state
//! machines are pure and tick-driven; randomness comes in through
//! `rand::Rng` so every round is replayable under a fixed seed.

mod counting;
mod drill;
mod session;
mod timer;

pub use counting::{CountingGame, CountingOutcome, CountingRound, MAX_COUNT, SYMBOLS};
pub use drill::{Drill, DrillOp, DrillOutcome, Question};
pub use session::{AgeMode, GamesSession};
pub use timer::{Countdown, Tick, LOW_SECONDS, QUESTION_SECONDS};
