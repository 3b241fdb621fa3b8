//! Tally CLI
//!
//! Line-oriented surface over the suite: the convert tab takes
//! free-form text, the calc tab takes keypad input, the games tab
//! takes answers. Commands start with ':'.

mod render;

use std::io::{self, BufRead};

use tally::{AgeMode, DrillOp, Suite, Tab};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut suite = Suite::new();

    println!("Tally - unit converter, calculator, games. :help for commands.");
    print!("{}", render::chips(suite.convert.category().name));
    println!("{} {}", suite.convert.category().icon, suite.convert.category().example);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !dispatch(&mut suite, line) {
            break;
        }
    }
}

/// Handle one input line. Returns false when the session should end.
fn dispatch(suite: &mut Suite, line: &str) -> bool {
    debug!(line, tab = ?suite.tab(), "dispatch");

    if let Some(command) = line.strip_prefix(':') {
        return run_command(suite, command.trim());
    }

    match suite.tab() {
        Tab::Convert => {
            let readout = suite.convert.set_input(line);
            print!("{}", render::readout(&readout));
        }
        Tab::Calc => {
            if let Some(expr) = line.strip_suffix('=') {
                suite.calc.type_str(expr);
                suite.calc.evaluate();
            } else {
                suite.calc.type_str(line);
            }
            print!("{}", render::calc(&suite.calc));
        }
        Tab::Games => answer_game(suite, line),
    }
    true
}

fn run_command(suite: &mut Suite, command: &str) -> bool {
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "quit" | "q" => return false,
        "help" => println!("{}", render::help()),
        "cats" => print!("{}", render::chips(suite.convert.category().name)),
        "cat" => match suite.convert.switch_category(arg) {
            Some(readout) => {
                print!("{}", render::chips(suite.convert.category().name));
                println!(
                    "{} Enter {} ({})",
                    suite.convert.category().icon,
                    suite.convert.category().name,
                    suite.convert.category().example
                );
                print!("{}", render::readout(&readout));
            }
            None => println!("Unknown category: {arg}"),
        },
        "convert" => {
            suite.switch_tab(Tab::Convert);
            print!("{}", render::chips(suite.convert.category().name));
        }
        "calc" => {
            suite.switch_tab(Tab::Calc);
            if !arg.is_empty() {
                suite.calc.type_str(arg);
                suite.calc.evaluate();
            }
            print!("{}", render::calc(&suite.calc));
        }
        "games" => {
            suite.switch_tab(Tab::Games);
            println!("Pick a mode: :game toddler | :game student <add|sub|mul|div>");
        }
        "clear" => {
            suite.calc.clear();
            print!("{}", render::calc(&suite.calc));
        }
        "game" => start_game(suite, arg),
        "back" => {
            suite.games.back_to_selector();
            println!("Pick a mode: :game toddler | :game student <add|sub|mul|div>");
        }
        "tick" => {
            if let Some(outcome) = suite.games.tick() {
                println!("{}", render::drill_outcome(outcome));
            }
            if let Some(drill) = suite.games.drill() {
                print!("{}", render::drill(drill));
            }
        }
        "json" => match serde_json::to_string_pretty(&suite.convert.readout()) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("serialization failed: {err}"),
        },
        other => println!("Unknown command :{other} (:help lists commands)"),
    }
    true
}

fn start_game(suite: &mut Suite, arg: &str) {
    suite.switch_tab(Tab::Games);
    let (mode, op) = match arg.split_once(char::is_whitespace) {
        Some((mode, op)) => (mode, op.trim()),
        None => (arg, ""),
    };

    match AgeMode::from_str(mode) {
        Some(AgeMode::Toddler) => {
            suite.games.select(AgeMode::Toddler);
            if let Some(game) = suite.games.counting() {
                print!("{}", render::counting(game));
            }
        }
        Some(AgeMode::Student) => match DrillOp::from_str(op) {
            Some(op) => {
                suite.games.start_drill(op);
                if let Some(drill) = suite.games.drill() {
                    print!("{}", render::drill(drill));
                }
            }
            None => println!("Pick an operation: :game student <add|sub|mul|div>"),
        },
        None => println!("Pick a mode: :game toddler | :game student <add|sub|mul|div>"),
    }
}

fn answer_game(suite: &mut Suite, line: &str) {
    match suite.games.mode() {
        Some(AgeMode::Toddler) => {
            let Ok(choice) = line.parse::<u32>() else {
                println!("Answer with a number 1-5");
                return;
            };
            if let Some(outcome) = suite.games.answer_counting(choice) {
                println!("{}", render::counting_outcome(outcome));
                if let Some(game) = suite.games.counting() {
                    print!("{}", render::counting(game));
                }
            }
        }
        Some(AgeMode::Student) => {
            let Ok(answer) = line.parse::<i64>() else {
                println!("Answer with a whole number");
                return;
            };
            if let Some(outcome) = suite.games.answer_drill(answer) {
                println!("{}", render::drill_outcome(outcome));
                if let Some(drill) = suite.games.drill() {
                    print!("{}", render::drill(drill));
                }
            }
        }
        None => println!("Pick a mode first: :game toddler | :game student <add|sub|mul|div>"),
    }
}
