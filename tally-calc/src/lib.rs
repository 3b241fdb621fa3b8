//! Tally Calc - keypad expression calculator
//!
//! BODMAS evaluation over the keypad alphabet (multiply/divide glyphs,
//! `^`, `%`, pi, `e`, sin/cos/tan in degrees, log/ln/sqrt) plus the
//! display state machine that drives it: operator replacement, `Ans`
//! continuation, and an `Error` display that never aborts the session.

mod ast;
mod display;
mod error;
mod eval;
mod parser;

pub use ast::{BinOp, Constant, Expr, Function, UnaryOp};
pub use display::CalcSession;
pub use error::EvalError;
pub use eval::{eval_expr, evaluate, format_result};
pub use parser::parse;
