//! Text rendering for the terminal surface
//!
//! Pure string building from computed state; no feature logic here.

use tally::{CalcSession, Readout, CATALOG};
use tally_games::{CountingGame, CountingOutcome, Drill, DrillOutcome};

/// Category chips with the active one marked.
pub fn chips(active: &str) -> String {
    let mut out = String::new();
    for category in CATALOG.categories() {
        let marker = if category.name == active { "*" } else { " " };
        out.push_str(&format!("{marker}[{} {}] ", category.icon, category.name));
    }
    out.push('\n');
    out
}

/// Conversion readout: primary unit emphasized, the rest in a grid.
pub fn readout(readout: &Readout) -> String {
    let mut out = String::new();
    for entry in &readout.entries {
        if entry.primary {
            out.push_str(&format!(
                "  {} {}\n  {} {}\n",
                entry.icon, entry.label, entry.display, entry.unit
            ));
            out.push_str("  ----------------\n");
        } else {
            out.push_str(&format!(
                "  {} {:<16} {:>14} {}\n",
                entry.icon, entry.label, entry.display, entry.unit
            ));
        }
    }
    out
}

/// Calculator display with its history line.
pub fn calc(session: &CalcSession) -> String {
    let mut out = String::new();
    if !session.history().is_empty() {
        out.push_str(&format!("  {}\n", session.history()));
    }
    out.push_str(&format!("  {}\n", session.display()));
    out
}

/// One counting-game round: the symbols and the answer buttons.
pub fn counting(game: &CountingGame) -> String {
    let round = game.round();
    let symbols = round.symbol.repeat(round.count as usize);
    let options: Vec<String> = game.options().map(|o| format!("[{o}]")).collect();
    format!(
        "  Score: {}\n  {}\n  How many?  {}\n",
        game.score(),
        symbols,
        options.join(" ")
    )
}

pub fn counting_outcome(outcome: CountingOutcome) -> &'static str {
    match outcome {
        CountingOutcome::Correct { .. } => "Yay! Good Job! \u{1F389}",
        CountingOutcome::TryAgain => "Oops! Try Again! \u{1F914}",
    }
}

/// Drill headline plus the live question.
pub fn drill(drill: &Drill) -> String {
    let timer = drill.timer();
    let hourglass = if timer.is_low() { "\u{23F3}!" } else { "\u{23F3}" };
    format!(
        "  Level {} | Score {} | {} {}s\n  {} = ?\n",
        drill.level(),
        drill.score(),
        hourglass,
        timer.remaining(),
        drill.question().text
    )
}

pub fn drill_outcome(outcome: DrillOutcome) -> String {
    match outcome {
        DrillOutcome::Correct { score, leveled_up: true } => {
            format!("Correct! \u{1F389} +10 (score {score}) - Level up!")
        }
        DrillOutcome::Correct { score, leveled_up: false } => {
            format!("Correct! \u{1F389} +10 (score {score})")
        }
        DrillOutcome::Wrong { score, demoted: true, .. } => {
            format!("Wrong! Dropped! \u{1F4C9} (score {score})")
        }
        DrillOutcome::Wrong { score, demoted: false, .. } => {
            format!("Wrong! Reset! \u{1F4C9} (score {score})")
        }
        DrillOutcome::TimedOut { score, demoted: true, .. } => {
            format!("Time's Up! Dropped! \u{1F4C9} (score {score})")
        }
        DrillOutcome::TimedOut { score, demoted: false, .. } => {
            format!("Time's Up! Reset! \u{1F4C9} (score {score})")
        }
    }
}

pub fn help() -> &'static str {
    "Tally commands:\n\
     \x20 <text>                 convert (on the convert tab), e.g. 5inch 3mm\n\
     \x20 :cat <name>            switch category (:cats lists them)\n\
     \x20 :convert :calc :games  switch tab\n\
     \x20 calc tab: type an expression, '=' evaluates, :clear resets\n\
     \x20 :game toddler          counting game (answers are numbers)\n\
     \x20 :game student <op>     drill; op is add, sub, mul or div\n\
     \x20 :tick                  advance the drill timer one second\n\
     \x20 :back                  games selector\n\
     \x20 :json                  current readout as JSON\n\
     \x20 :quit                  leave"
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally::ConvertSession;

    #[test]
    fn test_chips_mark_active_category() {
        let rendered = chips("Mass");
        assert!(rendered.contains("*[\u{2696}\u{FE0F} Mass]"));
        assert!(rendered.contains(" [\u{1F4CF} Length]"));
    }

    #[test]
    fn test_readout_puts_primary_first() {
        let mut session = ConvertSession::new();
        let rendered = readout(&session.set_input("1m"));
        let first = rendered.lines().next().unwrap();
        assert!(first.contains("Millimeters"));
        assert!(rendered.contains("1000 mm"));
    }

    #[test]
    fn test_counting_shows_symbols_and_options() {
        let mut session = tally_games::GamesSession::with_seed(4);
        session.select(tally_games::AgeMode::Toddler);
        let game = session.counting().unwrap();
        let rendered = counting(game);
        assert!(rendered.contains("[1] [2] [3] [4] [5]"));
        assert!(rendered.contains(game.round().symbol));
    }
}
