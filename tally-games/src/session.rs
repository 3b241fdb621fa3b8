//! Age-gated games session
//!
//! The selector screen picks an age mode; each mode gates one game.
//! Re-entering the counting game starts it over, while drill progress
//! survives trips back to the menu for as long as the session lives.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::counting::{CountingGame, CountingOutcome};
use crate::drill::{Drill, DrillOp, DrillOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeMode {
    Toddler,
    Student,
}

impl AgeMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "toddler" => Some(AgeMode::Toddler),
            "student" => Some(AgeMode::Student),
            _ => None,
        }
    }
}

pub struct GamesSession {
    mode: Option<AgeMode>,
    counting: Option<CountingGame>,
    drill: Option<Drill>,
    rng: StdRng,
}

impl GamesSession {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Fixed-seed constructor so whole sessions replay in tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self { mode: None, counting: None, drill: None, rng }
    }

    pub fn mode(&self) -> Option<AgeMode> {
        self.mode
    }

    /// Pick an age mode from the selector. The counting game restarts
    /// from zero on every entry; the drill waits for an operation
    /// choice (or resumes where it left off).
    pub fn select(&mut self, mode: AgeMode) {
        self.mode = Some(mode);
        if mode == AgeMode::Toddler {
            self.counting = Some(CountingGame::new(&mut self.rng));
        }
    }

    /// Back to the selector; a live drill timer stops.
    pub fn back_to_selector(&mut self) {
        self.mode = None;
        if let Some(drill) = self.drill.as_mut() {
            drill.stop_timer();
        }
    }

    /// Start (or re-enter) the drill with the given operation, keeping
    /// any score and level already earned this session.
    pub fn start_drill(&mut self, op: DrillOp) {
        self.mode = Some(AgeMode::Student);
        match self.drill.as_mut() {
            Some(drill) => drill.set_op(op, &mut self.rng),
            None => self.drill = Some(Drill::new(op, &mut self.rng)),
        }
    }

    pub fn counting(&self) -> Option<&CountingGame> {
        self.counting.as_ref()
    }

    pub fn drill(&self) -> Option<&Drill> {
        self.drill.as_ref()
    }

    pub fn answer_counting(&mut self, choice: u32) -> Option<CountingOutcome> {
        let game = self.counting.as_mut()?;
        Some(game.answer(choice, &mut self.rng))
    }

    pub fn answer_drill(&mut self, answer: i64) -> Option<DrillOutcome> {
        let drill = self.drill.as_mut()?;
        Some(drill.answer(answer, &mut self.rng))
    }

    /// Advance the drill timer by one second.
    pub fn tick(&mut self) -> Option<DrillOutcome> {
        let drill = self.drill.as_mut()?;
        drill.tick(&mut self.rng)
    }
}

impl Default for GamesSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_selector() {
        let session = GamesSession::with_seed(1);
        assert_eq!(session.mode(), None);
        assert!(session.counting().is_none());
        assert!(session.drill().is_none());
    }

    #[test]
    fn test_toddler_entry_resets_score() {
        let mut session = GamesSession::with_seed(1);
        session.select(AgeMode::Toddler);
        let count = session.counting().unwrap().round().count;
        session.answer_counting(count);
        assert_eq!(session.counting().unwrap().score(), 1);

        // Leaving and coming back starts over
        session.back_to_selector();
        session.select(AgeMode::Toddler);
        assert_eq!(session.counting().unwrap().score(), 0);
    }

    #[test]
    fn test_drill_progress_survives_menu() {
        let mut session = GamesSession::with_seed(2);
        session.start_drill(DrillOp::Add);
        let answer = session.drill().unwrap().question().answer;
        session.answer_drill(answer);
        assert_eq!(session.drill().unwrap().score(), 10);

        session.back_to_selector();
        assert!(!session.drill().unwrap().timer().is_running());

        session.start_drill(DrillOp::Sub);
        assert_eq!(session.drill().unwrap().score(), 10);
        assert_eq!(session.drill().unwrap().op(), DrillOp::Sub);
    }

    #[test]
    fn test_tick_without_drill_is_noop() {
        let mut session = GamesSession::with_seed(3);
        assert!(session.tick().is_none());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(AgeMode::from_str("Toddler"), Some(AgeMode::Toddler));
        assert_eq!(AgeMode::from_str("STUDENT"), Some(AgeMode::Student));
        assert_eq!(AgeMode::from_str("adult"), None);
    }
}
