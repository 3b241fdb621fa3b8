//! Tally - pocket calculator suite
//!
//! One `Suite` bundles the three independent features behind a single
//! tabbed surface: free-form unit conversion, a keypad expression
//! calculator, and two educational mini-games. Switching tabs never
//! resets feature state; each session lives for the whole suite.

use serde::Serialize;

pub use tally_calc::{CalcSession, EvalError};
pub use tally_games::{AgeMode, DrillOp, GamesSession};
pub use tally_units::{ConvertSession, Readout, CATALOG};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Convert,
    Calc,
    Games,
}

/// The whole widget: three feature sessions plus the active tab.
pub struct Suite {
    tab: Tab,
    pub convert: ConvertSession,
    pub calc: CalcSession,
    pub games: GamesSession,
}

impl Suite {
    pub fn new() -> Self {
        Self {
            tab: Tab::Convert,
            convert: ConvertSession::new(),
            calc: CalcSession::new(),
            games: GamesSession::new(),
        }
    }

    /// Deterministic games for scripted runs and tests.
    pub fn with_games_seed(seed: u64) -> Self {
        Self {
            tab: Tab::Convert,
            convert: ConvertSession::new(),
            calc: CalcSession::new(),
            games: GamesSession::with_seed(seed),
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }
}

impl Default for Suite {
    fn default() -> Self {
        Self::new()
    }
}
