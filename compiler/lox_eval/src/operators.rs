//! Binary operators.
//!
//! Both operands are already evaluated, left before right. `and`/`or` are
//! not here; they short-circuit in the interpreter.

use lox_ir::{Token, TokenKind};

use crate::errors::{self, EvalResult};
use crate::Value;

pub(crate) fn evaluate_binary(left: Value, operator: &Token, right: Value) -> EvalResult {
    match operator.kind {
        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => Ok(Value::Bool(left != right)),
        TokenKind::Plus => add(left, operator, right),
        _ => {
            let (Value::Number(a), Value::Number(b)) = (&left, &right) else {
                return Err(errors::number_operands(operator));
            };
            numeric(*a, operator, *b)
        }
    }
}

/// `+` adds two numbers or concatenates two strings. Nothing is coerced.
fn add(left: Value, operator: &Token, right: Value) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(&a);
            joined.push_str(&b);
            Ok(Value::string(joined))
        }
        _ => Err(errors::add_operands(operator)),
    }
}

/// Arithmetic and comparison on numbers. Division follows IEEE 754, so
/// dividing by zero gives an infinity or NaN rather than an error.
fn numeric(a: f64, operator: &Token, b: f64) -> EvalResult {
    let value = match operator.kind {
        TokenKind::Minus => Value::Number(a - b),
        TokenKind::Star => Value::Number(a * b),
        TokenKind::Slash => Value::Number(a / b),
        TokenKind::Greater => Value::Bool(a > b),
        TokenKind::GreaterEqual => Value::Bool(a >= b),
        TokenKind::Less => Value::Bool(a < b),
        TokenKind::LessEqual => Value::Bool(a <= b),
        _ => return Err(errors::number_operands(operator)),
    };
    Ok(value)
}
