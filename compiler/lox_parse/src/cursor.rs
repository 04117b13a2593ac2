//! Token cursor for navigating the token stream.

use lox_ir::{Literal, Token, TokenKind};
use tracing::trace;

use crate::recovery::TokenSet;
use crate::ParseError;

/// Stands in for the terminator when the token slice is empty.
static EOF: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    literal: Literal::Nil,
    line: 1,
};

/// Cursor over a token slice that ends in `EOF`.
///
/// The position never moves past the final token, so [`Cursor::current`]
/// is always valid.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF)
    }

    /// The most recently consumed token, or the current one at the start.
    #[inline]
    pub(crate) fn previous(&self) -> &'a Token {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens.get(prev).unwrap_or(&EOF),
            None => self.current(),
        }
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current().is(TokenKind::Eof)
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().is(kind)
    }

    /// Consume the current token and return it. Stays put on `EOF`.
    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            trace!(pos = self.pos, kind = %token.kind, "advance");
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    #[inline]
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if its kind is in `set`, returning it.
    #[inline]
    pub(crate) fn eat_in(&mut self, set: TokenSet) -> Option<&'a Token> {
        if set.contains(self.current().kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of the given kind or fail with `message` at the
    /// current token.
    #[inline]
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        message: &'static str,
    ) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(self.current(), message))
        }
    }
}
