//! Lox Lexer - turns source text into a flat token sequence.
//!
//! The scanner makes a single left-to-right pass. Errors are collected
//! rather than returned early, so one run reports every bad character,
//! unterminated string, and unterminated comment in the source. The token
//! sequence is always terminated by exactly one `EOF` token, even when errors
//! were reported.

mod cursor;
mod keywords;
mod lex_error;
mod scanner;

pub use keywords::KEYWORDS;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;

use lox_ir::Token;

/// Tokens and errors from one scan.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` into tokens.
pub fn lex(source: &str) -> LexOutput {
    Scanner::new(source).scan_tokens()
}
