//! Parse error types.

use lox_ir::{Token, TokenKind};
use thiserror::Error;

/// A syntax error anchored at the token where it was detected.
///
/// Displays as `Error at 'lexeme': message`, or `Error at end: message`
/// when the parser ran out of input.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Error{}: {kind}", location(.token))]
pub struct ParseError {
    pub token: Token,
    pub kind: ParseErrorKind,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required token or construct was missing. Carries the full message,
    /// e.g. `Expect ';' after value.`
    #[error("{0}")]
    Expected(&'static str),
    #[error("Invalid assignment target.")]
    InvalidAssignmentTarget,
    #[error("Can't have more than 255 arguments.")]
    TooManyArguments,
    #[error("Can't have more than 255 parameters.")]
    TooManyParameters,
    #[error("Can't return from top-level code.")]
    ReturnAtTopLevel,
}

impl ParseError {
    #[cold]
    pub fn expected(token: &Token, message: &'static str) -> Self {
        Self::at(token, ParseErrorKind::Expected(message))
    }

    #[cold]
    pub fn at(token: &Token, kind: ParseErrorKind) -> Self {
        ParseError {
            token: token.clone(),
            kind,
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.token.line
    }

    /// The ` at '...'` fragment of the report, with its leading space.
    pub fn location(&self) -> String {
        location(&self.token)
    }
}

fn location(token: &Token) -> String {
    if token.is(TokenKind::Eof) {
        " at end".to_owned()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}
