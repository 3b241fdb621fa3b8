//! Timed arithmetic drill
//!
//! Question difficulty scales with level, correct answers earn points,
//! and a wrong answer or an expired timer costs progress: first back
//! to the level's base score, then down a level.

use rand::Rng;
use serde::Serialize;

use crate::timer::{Countdown, Tick};

/// Points per correct answer
const POINTS_PER_ANSWER: u32 = 10;

/// Score span of one level
const POINTS_PER_LEVEL: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl DrillOp {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "add" => Some(DrillOp::Add),
            "sub" => Some(DrillOp::Sub),
            "mul" => Some(DrillOp::Mul),
            "div" => Some(DrillOp::Div),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    /// Display text, e.g. "12 + 7"
    pub text: String,
    pub answer: i64,
}

impl Question {
    fn deal(op: DrillOp, level: u32, rng: &mut impl Rng) -> Self {
        let spread = i64::from(10 + level * 5);
        match op {
            DrillOp::Add => {
                let a = rng.gen_range(1..=spread);
                let b = rng.gen_range(1..=spread);
                Question { text: format!("{a} + {b}"), answer: a + b }
            }
            DrillOp::Sub => {
                let mut a = rng.gen_range(1..=spread);
                let mut b = rng.gen_range(1..=spread);
                if a < b {
                    std::mem::swap(&mut a, &mut b);
                }
                Question { text: format!("{a} - {b}"), answer: a - b }
            }
            DrillOp::Mul => {
                let narrow = i64::from(5 + level);
                let a = rng.gen_range(1..=narrow);
                let b = rng.gen_range(1..=narrow);
                Question { text: format!("{a} \u{D7} {b}"), answer: a * b }
            }
            DrillOp::Div => {
                // Divisor-first so the division is always exact
                let divisor = rng.gen_range(1..=i64::from(4 + level));
                let answer = rng.gen_range(1..=i64::from(5 + level));
                Question {
                    text: format!("{} \u{F7} {divisor}", divisor * answer),
                    answer,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillOutcome {
    Correct { score: u32, leveled_up: bool },
    Wrong { score: u32, level: u32, demoted: bool },
    TimedOut { score: u32, level: u32, demoted: bool },
}

#[derive(Debug, Clone)]
pub struct Drill {
    op: DrillOp,
    score: u32,
    level: u32,
    question: Question,
    timer: Countdown,
}

impl Drill {
    pub fn new(op: DrillOp, rng: &mut impl Rng) -> Self {
        let level = 1;
        Self {
            op,
            score: 0,
            level,
            question: Question::deal(op, level, rng),
            timer: Countdown::start(),
        }
    }

    /// Change operation while keeping score and level, as re-entering
    /// the drill menu does. Deals a fresh question.
    pub fn set_op(&mut self, op: DrillOp, rng: &mut impl Rng) {
        self.op = op;
        self.next_question(rng);
    }

    pub fn op(&self) -> DrillOp {
        self.op
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Progress toward the next level bar, in percent.
    pub fn progress(&self) -> u32 {
        self.score % 100
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    pub fn stop_timer(&mut self) {
        self.timer.stop();
    }

    /// Submit an answer. Either way a new question is dealt and the
    /// timer restarted.
    pub fn answer(&mut self, answer: i64, rng: &mut impl Rng) -> DrillOutcome {
        self.timer.stop();
        let outcome = if answer == self.question.answer {
            self.score += POINTS_PER_ANSWER;
            let leveled_up = self.score % POINTS_PER_LEVEL == 0;
            if leveled_up {
                self.level += 1;
            }
            DrillOutcome::Correct { score: self.score, leveled_up }
        } else {
            let demoted = self.apply_penalty();
            DrillOutcome::Wrong { score: self.score, level: self.level, demoted }
        };
        self.next_question(rng);
        outcome
    }

    /// Advance the countdown by one second; expiry costs progress like
    /// a wrong answer and deals the next question.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Option<DrillOutcome> {
        match self.timer.tick() {
            Tick::Expired => {
                let demoted = self.apply_penalty();
                let outcome =
                    DrillOutcome::TimedOut { score: self.score, level: self.level, demoted };
                self.next_question(rng);
                Some(outcome)
            }
            Tick::Running(_) | Tick::Idle => None,
        }
    }

    /// Fall back to the current level's base score; if already there,
    /// drop a level (never below 1).
    fn apply_penalty(&mut self) -> bool {
        let base = (self.level - 1) * POINTS_PER_LEVEL;
        if self.score > base {
            self.score = base;
            false
        } else if self.level > 1 {
            self.level -= 1;
            self.score = (self.level - 1) * POINTS_PER_LEVEL;
            true
        } else {
            self.score = 0;
            false
        }
    }

    fn next_question(&mut self, rng: &mut impl Rng) {
        self.question = Question::deal(self.op, self.level, rng);
        self.timer = Countdown::start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn answer_correctly(drill: &mut Drill, rng: &mut StdRng) -> DrillOutcome {
        let answer = drill.question().answer;
        drill.answer(answer, rng)
    }

    #[test]
    fn test_add_question_bounds() {
        let mut rng = rng();
        for _ in 0..50 {
            let drill = Drill::new(DrillOp::Add, &mut rng);
            let q = drill.question();
            assert!(q.answer >= 2 && q.answer <= 30, "level 1 add answer: {}", q.answer);
        }
    }

    #[test]
    fn test_sub_answer_never_negative() {
        let mut rng = rng();
        for _ in 0..50 {
            let drill = Drill::new(DrillOp::Sub, &mut rng);
            assert!(drill.question().answer >= 0);
        }
    }

    #[test]
    fn test_div_is_always_exact() {
        let mut rng = rng();
        for _ in 0..50 {
            let drill = Drill::new(DrillOp::Div, &mut rng);
            let q = drill.question();
            let parts: Vec<&str> = q.text.split(" \u{F7} ").collect();
            let dividend: i64 = parts[0].parse().unwrap();
            let divisor: i64 = parts[1].parse().unwrap();
            assert_eq!(dividend % divisor, 0);
            assert_eq!(dividend / divisor, q.answer);
        }
    }

    #[test]
    fn test_scoring_and_level_up() {
        let mut rng = rng();
        let mut drill = Drill::new(DrillOp::Add, &mut rng);

        for expected_score in (10..50).step_by(10) {
            let outcome = answer_correctly(&mut drill, &mut rng);
            assert_eq!(
                outcome,
                DrillOutcome::Correct { score: expected_score, leveled_up: false }
            );
        }

        // Fifth correct answer crosses the 50-point line
        let outcome = answer_correctly(&mut drill, &mut rng);
        assert_eq!(outcome, DrillOutcome::Correct { score: 50, leveled_up: true });
        assert_eq!(drill.level(), 2);
    }

    #[test]
    fn test_wrong_answer_resets_to_level_base() {
        let mut rng = rng();
        let mut drill = Drill::new(DrillOp::Add, &mut rng);
        answer_correctly(&mut drill, &mut rng);
        answer_correctly(&mut drill, &mut rng);
        assert_eq!(drill.score(), 20);

        let outcome = drill.answer(i64::MIN, &mut rng);
        assert_eq!(outcome, DrillOutcome::Wrong { score: 0, level: 1, demoted: false });
    }

    #[test]
    fn test_wrong_at_base_demotes_a_level() {
        let mut rng = rng();
        let mut drill = Drill::new(DrillOp::Add, &mut rng);
        for _ in 0..5 {
            answer_correctly(&mut drill, &mut rng);
        }
        assert_eq!((drill.score(), drill.level()), (50, 2));

        // At exactly the level base: demote
        let outcome = drill.answer(i64::MIN, &mut rng);
        assert_eq!(outcome, DrillOutcome::Wrong { score: 0, level: 1, demoted: true });
    }

    #[test]
    fn test_level_floor_is_one() {
        let mut rng = rng();
        let mut drill = Drill::new(DrillOp::Add, &mut rng);
        drill.answer(i64::MIN, &mut rng);
        drill.answer(i64::MIN, &mut rng);
        assert_eq!(drill.level(), 1);
        assert_eq!(drill.score(), 0);
    }

    #[test]
    fn test_timeout_applies_penalty() {
        let mut rng = rng();
        let mut drill = Drill::new(DrillOp::Add, &mut rng);
        answer_correctly(&mut drill, &mut rng);

        let mut outcome = None;
        for _ in 0..10 {
            outcome = drill.tick(&mut rng);
            if outcome.is_some() {
                break;
            }
        }
        assert_eq!(
            outcome,
            Some(DrillOutcome::TimedOut { score: 0, level: 1, demoted: false })
        );
        // A new question is live with a fresh timer
        assert!(drill.timer().is_running());
    }

    #[test]
    fn test_set_op_keeps_progress() {
        let mut rng = rng();
        let mut drill = Drill::new(DrillOp::Add, &mut rng);
        answer_correctly(&mut drill, &mut rng);
        drill.set_op(DrillOp::Mul, &mut rng);
        assert_eq!(drill.score(), 10);
        assert_eq!(drill.op(), DrillOp::Mul);
    }

    #[test]
    fn test_mul_uses_narrow_range() {
        let mut rng = rng();
        for _ in 0..50 {
            let drill = Drill::new(DrillOp::Mul, &mut rng);
            assert!(drill.question().answer <= 36, "level 1 mul answer bounded by 6*6");
        }
    }
}
