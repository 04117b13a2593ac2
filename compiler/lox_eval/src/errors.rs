//! Runtime errors and their constructors.
//!
//! Every runtime error is built through one of the `#[cold]` factory
//! functions below, so message wording lives in one place.

use lox_ir::Token;
use thiserror::Error;

use crate::Value;

pub type EvalResult<T = Value> = Result<T, EvalError>;

/// A runtime error with the token it is reported against.
///
/// `Display` gives only the message. The driver appends `\n[line N]`.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{kind}")]
pub struct EvalError {
    pub token: Token,
    pub kind: EvalErrorKind,
}

impl EvalError {
    #[inline]
    pub fn line(&self) -> u32 {
        self.token.line
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalErrorKind {
    #[error("Operand must be a number.")]
    NumberOperand,
    #[error("Operands must be numbers.")]
    NumberOperands,
    #[error("Operands must be two numbers or two strings.")]
    AddOperands,
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable { name: String },
    #[error("Can only call functions and classes.")]
    NotCallable,
    #[error("Expected {expected} arguments but got {got}.")]
    ArityMismatch { expected: usize, got: usize },
    /// Too many nested calls.
    #[error("Stack overflow.")]
    StackOverflow,
    /// A native function failed.
    #[error("{message}")]
    Native { message: String },
}

#[cold]
fn error(token: &Token, kind: EvalErrorKind) -> EvalError {
    EvalError {
        token: token.clone(),
        kind,
    }
}

/// Unary `-` applied to a non-number.
#[cold]
pub fn number_operand(operator: &Token) -> EvalError {
    error(operator, EvalErrorKind::NumberOperand)
}

/// Arithmetic or comparison with a non-number side.
#[cold]
pub fn number_operands(operator: &Token) -> EvalError {
    error(operator, EvalErrorKind::NumberOperands)
}

/// `+` with mixed or unsupported operand types.
#[cold]
pub fn add_operands(operator: &Token) -> EvalError {
    error(operator, EvalErrorKind::AddOperands)
}

#[cold]
pub fn undefined_variable(name: &Token) -> EvalError {
    error(
        name,
        EvalErrorKind::UndefinedVariable {
            name: name.lexeme.clone(),
        },
    )
}

#[cold]
pub fn not_callable(paren: &Token) -> EvalError {
    error(paren, EvalErrorKind::NotCallable)
}

#[cold]
pub fn arity_mismatch(paren: &Token, expected: usize, got: usize) -> EvalError {
    error(paren, EvalErrorKind::ArityMismatch { expected, got })
}

/// The call at `paren` would exceed the interpreter's call depth limit.
#[cold]
pub fn stack_overflow(paren: &Token) -> EvalError {
    error(paren, EvalErrorKind::StackOverflow)
}

#[cold]
pub fn native_failure(paren: &Token, message: impl Into<String>) -> EvalError {
    error(
        paren,
        EvalErrorKind::Native {
            message: message.into(),
        },
    )
}
