//! Token types produced by the lexer.

mod kind;

#[cfg(test)]
mod tests;

pub use kind::TokenKind;

use std::fmt;

/// A literal value carried by a token or a literal expression.
///
/// Only `NUMBER` and `STRING` tokens carry a non-`Nil` literal; the parser
/// builds `Bool`/`Nil` literals from the `true`/`false`/`nil` keywords.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Nil => f.write_str("nil"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Str(s) => f.write_str(s),
        }
    }
}

/// A classified lexeme with its source line.
///
/// `lexeme` is the exact source text (string tokens keep their quotes).
/// `line` is 1-based and, for tokens spanning several lines, is the line on
/// which the token ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Literal,
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Literal, line: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// The end-of-input marker that terminates every token sequence.
    pub fn eof(line: u32) -> Self {
        Token::new(TokenKind::Eof, "", Literal::Nil, line)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
    }
}
