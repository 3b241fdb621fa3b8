//! Calculator errors
//!
//! Errors are values: they surface on the display as `Error` and never
//! abort the session.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Invalid expression: {0}")]
    Parse(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Overflow: result too large")]
    Overflow,

    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}
