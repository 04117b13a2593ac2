//! Error recovery for the parser.
//!
//! Token sets are bitsets indexed by [`TokenKind::discriminant_index`], so
//! membership is a single AND.

use lox_ir::TokenKind;
use tracing::trace;

use crate::cursor::Cursor;

const _: () = assert!(TokenKind::COUNT <= 64, "TokenSet is a u64");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    pub(crate) const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }
}

/// Tokens that begin a new statement; recovery stops in front of them.
pub(crate) const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

pub(crate) const EQUALITY_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::BangEqual)
    .with(TokenKind::EqualEqual);

pub(crate) const COMPARISON_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Greater)
    .with(TokenKind::GreaterEqual)
    .with(TokenKind::Less)
    .with(TokenKind::LessEqual);

pub(crate) const TERM_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Minus)
    .with(TokenKind::Plus);

pub(crate) const FACTOR_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Slash)
    .with(TokenKind::Star);

pub(crate) const UNARY_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Bang)
    .with(TokenKind::Minus);

/// Discard tokens after a syntax error.
///
/// Always skips the offending token, then stops just after a `;` or just
/// before a token in `recovery`, or at `EOF`.
pub(crate) fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) {
    let mut skipped = 1usize;
    cursor.advance();
    while !cursor.is_at_end()
        && !cursor.previous().is(TokenKind::Semicolon)
        && !recovery.contains(cursor.current().kind)
    {
        cursor.advance();
        skipped += 1;
    }
    trace!(skipped, resume_at = %cursor.current().kind, "synchronized");
}
