//! Expression evaluator
//!
//! Plain f64 arithmetic. Trigonometric arguments are degrees, `log` is
//! base 10 and `ln` natural. Results are kept finite: division by
//! zero, domain violations, and overflow come back as errors instead
//! of infinities or NaN.

use crate::ast::{BinOp, Constant, Expr, Function, UnaryOp};
use crate::error::EvalError;
use crate::parser::parse;

/// Parse and evaluate in one step.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    eval_expr(&parse(input)?)
}

pub fn eval_expr(expr: &Expr) -> Result<f64, EvalError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Constant(Constant::Pi) => Ok(std::f64::consts::PI),
        Expr::Constant(Constant::E) => Ok(std::f64::consts::E),
        Expr::UnaryOp(UnaryOp::Neg, inner) => Ok(-eval_expr(inner)?),
        Expr::BinaryOp(lhs, op, rhs) => {
            let a = eval_expr(lhs)?;
            let b = eval_expr(rhs)?;
            let value = match op {
                BinOp::Add => a + b,
                BinOp::Sub => a - b,
                BinOp::Mul => a * b,
                BinOp::Div => {
                    if b == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    a / b
                }
                BinOp::Mod => {
                    if b == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    a % b
                }
                BinOp::Pow => a.powf(b),
            };
            ensure_finite(value)
        }
        Expr::FunctionCall(func, arg) => {
            let x = eval_expr(arg)?;
            let value = match func {
                Function::Sin => x.to_radians().sin(),
                Function::Cos => x.to_radians().cos(),
                Function::Tan => x.to_radians().tan(),
                Function::Log => {
                    if x <= 0.0 {
                        return Err(EvalError::Domain(format!("log of {x}")));
                    }
                    x.log10()
                }
                Function::Ln => {
                    if x <= 0.0 {
                        return Err(EvalError::Domain(format!("ln of {x}")));
                    }
                    x.ln()
                }
                Function::Sqrt => {
                    if x < 0.0 {
                        return Err(EvalError::Domain(format!("sqrt of {x}")));
                    }
                    x.sqrt()
                }
            };
            ensure_finite(value)
        }
    }
}

fn ensure_finite(value: f64) -> Result<f64, EvalError> {
    if value.is_nan() {
        Err(EvalError::Domain("result is undefined".to_string()))
    } else if value.is_infinite() {
        Err(EvalError::Overflow)
    } else {
        Ok(value)
    }
}

/// Format a result for the display: 8 decimal places, insignificant
/// trailing zeros stripped.
pub fn format_result(value: f64) -> String {
    let fixed = format!("{value:.8}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
