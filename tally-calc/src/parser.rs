//! Expression parser (simple recursive descent)
//!
//! Splits the input at the lowest-precedence operator found at paren
//! depth 0, then recurses into each side: additive -> multiplicative
//! (`*`, `/`, `%`) -> power (`^`, right associative) -> primary. The
//! keypad alphabet is accepted as-is: `×` and `÷` are synonyms for
//! `*` and `/`, and `π` names the constant.

use crate::ast::{BinOp, Constant, Expr, Function, UnaryOp};
use crate::error::EvalError;

pub fn parse(input: &str) -> Result<Expr, EvalError> {
    let normalized = input.replace('×', "*").replace('÷', "/");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Err(EvalError::Parse("empty expression".to_string()));
    }
    parse_additive(trimmed)
}

/// True when a `+` or `-` at this position is a sign rather than an
/// operator: at the start of the input, or right after another
/// operator or an opening paren.
fn is_sign_position(input: &str, byte_pos: usize) -> bool {
    match input[..byte_pos].trim_end().chars().last() {
        None => true,
        Some(prev) => matches!(prev, '+' | '-' | '*' | '/' | '%' | '^' | '('),
    }
}

fn parse_additive(input: &str) -> Result<Expr, EvalError> {
    let mut paren_depth = 0;
    let char_indices: Vec<(usize, char)> = input.char_indices().collect();

    for idx in (0..char_indices.len()).rev() {
        let (byte_pos, c) = char_indices[idx];
        match c {
            ')' => paren_depth += 1,
            '(' => paren_depth -= 1,
            '+' | '-' if paren_depth == 0 && !is_sign_position(input, byte_pos) => {
                let left = input[..byte_pos].trim();
                let right = input[byte_pos + c.len_utf8()..].trim();
                if !left.is_empty() && !right.is_empty() {
                    let op = if c == '+' { BinOp::Add } else { BinOp::Sub };
                    return Ok(Expr::BinaryOp(
                        Box::new(parse_additive(left)?),
                        op,
                        Box::new(parse_multiplicative(right)?),
                    ));
                }
            }
            _ => {}
        }
    }

    parse_multiplicative(input)
}

fn parse_multiplicative(input: &str) -> Result<Expr, EvalError> {
    let mut paren_depth = 0;
    let char_indices: Vec<(usize, char)> = input.char_indices().collect();

    for idx in (0..char_indices.len()).rev() {
        let (byte_pos, c) = char_indices[idx];
        match c {
            ')' => paren_depth += 1,
            '(' => paren_depth -= 1,
            '*' | '/' | '%' if paren_depth == 0 => {
                let left = input[..byte_pos].trim();
                let right = input[byte_pos + c.len_utf8()..].trim();
                if !left.is_empty() && !right.is_empty() {
                    let op = match c {
                        '*' => BinOp::Mul,
                        '/' => BinOp::Div,
                        _ => BinOp::Mod,
                    };
                    return Ok(Expr::BinaryOp(
                        Box::new(parse_multiplicative(left)?),
                        op,
                        Box::new(parse_power(right)?),
                    ));
                }
            }
            _ => {}
        }
    }

    parse_power(input)
}

fn parse_power(input: &str) -> Result<Expr, EvalError> {
    let mut paren_depth = 0;

    for (byte_pos, c) in input.char_indices() {
        match c {
            '(' => paren_depth += 1,
            ')' => paren_depth -= 1,
            '^' if paren_depth == 0 => {
                let left = input[..byte_pos].trim();
                let right = input[byte_pos + c.len_utf8()..].trim();
                if !left.is_empty() && !right.is_empty() {
                    return Ok(Expr::BinaryOp(
                        Box::new(parse_primary(left)?),
                        BinOp::Pow,
                        Box::new(parse_power(right)?),
                    ));
                }
            }
            _ => {}
        }
    }

    parse_primary(input)
}

fn parse_primary(input: &str) -> Result<Expr, EvalError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(EvalError::Parse("empty expression".to_string()));
    }

    // Numeric literal ("inf"/"nan" spellings are not keypad input)
    if let Ok(n) = input.parse::<f64>() {
        if n.is_finite() {
            return Ok(Expr::Number(n));
        }
        return Err(EvalError::Parse(input.to_string()));
    }

    // Constants
    if input == "\u{3C0}" || input.eq_ignore_ascii_case("pi") {
        return Ok(Expr::Constant(Constant::Pi));
    }
    if input.eq_ignore_ascii_case("e") {
        return Ok(Expr::Constant(Constant::E));
    }

    // Sign
    if let Some(rest) = input.strip_prefix('-') {
        return Ok(Expr::UnaryOp(UnaryOp::Neg, Box::new(parse_primary(rest)?)));
    }
    if let Some(rest) = input.strip_prefix('+') {
        return parse_primary(rest);
    }

    // Parenthesized group
    if input.starts_with('(') {
        match matching_paren(input, 0) {
            Some(close) if close == input.len() - 1 => {
                return parse_additive(&input[1..close]);
            }
            _ => return Err(EvalError::Parse(input.to_string())),
        }
    }

    // Function call
    if let Some(open) = input.find('(') {
        let name = input[..open].trim();
        match matching_paren(input, open) {
            Some(close) if close == input.len() - 1 => {
                let func = Function::from_name(&name.to_lowercase())
                    .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;
                let arg = parse_additive(&input[open + 1..close])?;
                return Ok(Expr::FunctionCall(func, Box::new(arg)));
            }
            _ => return Err(EvalError::Parse(input.to_string())),
        }
    }

    Err(EvalError::Parse(input.to_string()))
}

/// Byte position of the `)` matching the `(` at `open`, if balanced.
fn matching_paren(input: &str, open: usize) -> Option<usize> {
    let mut depth = 0;
    for (i, c) in input[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}
