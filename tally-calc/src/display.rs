//! Keypad display state machine
//!
//! Holds what the user sees: the expression being typed, the history
//! line, and whether the display currently shows a result. No
//! evaluation lives here beyond delegating to the evaluator on `=`.

use crate::eval::{evaluate, format_result};

const OPERATORS: [char; 6] = ['+', '-', '\u{D7}', '\u{F7}', '^', '%'];
const FUNCTIONS: [&str; 6] = ["sin", "cos", "tan", "log", "ln", "sqrt"];

/// One calculator's worth of UI state
#[derive(Debug, Clone, Default)]
pub struct CalcSession {
    expression: String,
    history: String,
    result_shown: bool,
}

impl CalcSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the main display shows ("0" when nothing is typed)
    pub fn display(&self) -> &str {
        if self.expression.is_empty() {
            "0"
        } else {
            &self.expression
        }
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn result_shown(&self) -> bool {
        self.result_shown
    }

    /// Append a digit or decimal point. Typing over a result starts a
    /// fresh expression, with the result preserved in the history line.
    pub fn push_digit(&mut self, digit: char) {
        if self.result_shown {
            self.history = format!("Ans = {}", self.display());
            self.expression.clear();
            self.result_shown = false;
        }
        self.expression.push(digit);
    }

    /// Append a binary operator. Typing an operator over a result
    /// continues the calculation from it; two operators in a row
    /// replace the previous one.
    pub fn push_operator(&mut self, op: char) {
        let op = match op {
            '*' => '\u{D7}',
            '/' => '\u{F7}',
            other => other,
        };
        if !OPERATORS.contains(&op) {
            return;
        }

        if self.result_shown {
            self.history = format!("Ans = {}", self.display());
            self.result_shown = false;
        }

        if let Some(last) = self.expression.chars().last() {
            if OPERATORS.contains(&last) {
                self.expression.pop();
            }
        }
        self.expression.push(op);
    }

    /// Insert a scientific key: function names open a call, `pi` and
    /// `e` insert constants, `inv` appends the reciprocal power.
    /// Unknown keys are ignored.
    pub fn push_function(&mut self, key: &str) {
        if self.result_shown {
            self.result_shown = false;
        }

        match key {
            "sin" | "cos" | "tan" | "log" | "ln" | "sqrt" => {
                self.expression.push_str(key);
                self.expression.push('(');
            }
            "pi" => self.expression.push('\u{3C0}'),
            "e" => self.expression.push('e'),
            "inv" => self.expression.push_str("^( -1 )"),
            "(" => self.expression.push('('),
            ")" => self.expression.push(')'),
            _ => {}
        }
    }

    /// Route a whole typed line through the keypad: digits, operators,
    /// parens, and letter runs (function and constant names).
    pub fn type_str(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '0'..='9' | '.' => self.push_digit(c),
                '+' | '-' | '*' | '/' | '\u{D7}' | '\u{F7}' | '^' | '%' => self.push_operator(c),
                '(' => self.push_function("("),
                ')' => self.push_function(")"),
                '\u{3C0}' => self.push_function("pi"),
                c if c.is_ascii_alphabetic() => {
                    let mut name = String::new();
                    name.push(c.to_ascii_lowercase());
                    while let Some(&next) = chars.peek() {
                        if next.is_ascii_alphabetic() {
                            name.push(next.to_ascii_lowercase());
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    self.push_function(&name);
                    // Function keys already open the call
                    if FUNCTIONS.contains(&name.as_str()) && chars.peek() == Some(&'(') {
                        chars.next();
                    }
                }
                _ => {}
            }
        }
    }

    pub fn clear(&mut self) {
        self.expression.clear();
        self.history.clear();
        self.result_shown = false;
    }

    /// Remove the last typed character; over a result, clears it.
    pub fn backspace(&mut self) {
        if self.result_shown {
            self.expression.clear();
            self.result_shown = false;
        } else {
            self.expression.pop();
        }
    }

    /// Evaluate the current expression. Failures display as `Error`
    /// without clearing the history; the next keypress recovers.
    pub fn evaluate(&mut self) {
        if self.expression.is_empty() {
            return;
        }
        match evaluate(&self.expression) {
            Ok(value) => {
                self.history = format!("{} =", self.expression);
                self.expression = format_result(value);
                self.result_shown = true;
            }
            Err(_) => {
                self.expression = "Error".to_string();
                self.result_shown = true;
            }
        }
    }
}
