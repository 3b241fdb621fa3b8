//! Counting game for the youngest players
//!
//! Each round shows a handful of identical symbols; the player picks
//! how many there are. Wrong answers keep the round so they can try
//! again.

use rand::Rng;
use serde::Serialize;

/// Symbols a round can show
pub const SYMBOLS: [&str; 8] = [
    "\u{1F34E}", "\u{1F697}", "\u{1F436}", "\u{1F355}",
    "\u{1F388}", "\u{2B50}", "\u{1F36A}", "\u{1F431}",
];

/// Largest count a round can ask for; answer buttons always show 1..=MAX_COUNT
pub const MAX_COUNT: u32 = 5;

#[derive(Debug, Clone, Serialize)]
pub struct CountingRound {
    pub symbol: &'static str,
    pub count: u32,
}

impl CountingRound {
    fn deal(rng: &mut impl Rng) -> Self {
        Self {
            symbol: SYMBOLS[rng.gen_range(0..SYMBOLS.len())],
            count: rng.gen_range(1..=MAX_COUNT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountingOutcome {
    /// Score already incremented; a new round has been dealt
    Correct { score: u32 },
    /// Round unchanged, try again
    TryAgain,
}

#[derive(Debug, Clone)]
pub struct CountingGame {
    score: u32,
    round: CountingRound,
}

impl CountingGame {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self { score: 0, round: CountingRound::deal(rng) }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round(&self) -> &CountingRound {
        &self.round
    }

    /// The fixed answer choices, kept identical every round.
    pub fn options(&self) -> impl Iterator<Item = u32> {
        1..=MAX_COUNT
    }

    pub fn answer(&mut self, choice: u32, rng: &mut impl Rng) -> CountingOutcome {
        if choice == self.round.count {
            self.score += 1;
            self.round = CountingRound::deal(rng);
            CountingOutcome::Correct { score: self.score }
        } else {
            CountingOutcome::TryAgain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_round_is_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let game = CountingGame::new(&mut rng);
            let round = game.round();
            assert!((1..=MAX_COUNT).contains(&round.count));
            assert!(SYMBOLS.contains(&round.symbol));
        }
    }

    #[test]
    fn test_correct_answer_scores_and_deals() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = CountingGame::new(&mut rng);
        let count = game.round().count;
        match game.answer(count, &mut rng) {
            CountingOutcome::Correct { score } => assert_eq!(score, 1),
            CountingOutcome::TryAgain => panic!("right answer rejected"),
        }
    }

    #[test]
    fn test_wrong_answer_keeps_round() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = CountingGame::new(&mut rng);
        let count = game.round().count;
        let wrong = if count == MAX_COUNT { 1 } else { count + 1 };
        assert_eq!(game.answer(wrong, &mut rng), CountingOutcome::TryAgain);
        assert_eq!(game.score(), 0);
        assert_eq!(game.round().count, count);
    }

    #[test]
    fn test_options_are_one_through_five() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = CountingGame::new(&mut rng);
        assert_eq!(game.options().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let game_a = CountingGame::new(&mut a);
        let game_b = CountingGame::new(&mut b);
        assert_eq!(game_a.round().count, game_b.round().count);
        assert_eq!(game_a.round().symbol, game_b.round().symbol);
    }
}
