//! The single-pass scanner.

use lox_ir::{Literal, Token, TokenKind};

use crate::cursor::Cursor;
use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};
use crate::LexOutput;

/// Converts source text into tokens.
///
/// `start` marks the first byte of the lexeme being scanned and `line` is the
/// 1-based line of the cursor. Both only move forward.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    start: usize,
    line: u32,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            start: 0,
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scan the whole source.
    ///
    /// Always ends the token list with one `EOF` carrying the final line.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn scan_tokens(mut self) -> LexOutput {
        while !self.cursor.is_eof() {
            self.start = self.cursor.pos();
            self.scan_token();
        }
        self.tokens.push(Token::eof(self.line));

        tracing::trace!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = self.line,
            "scanned source"
        );
        LexOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) {
        let byte = self.cursor.bump();
        match byte {
            b'(' => self.add(TokenKind::LeftParen),
            b')' => self.add(TokenKind::RightParen),
            b'{' => self.add(TokenKind::LeftBrace),
            b'}' => self.add(TokenKind::RightBrace),
            b',' => self.add(TokenKind::Comma),
            b'.' => self.add(TokenKind::Dot),
            b'-' => self.add(TokenKind::Minus),
            b'+' => self.add(TokenKind::Plus),
            b';' => self.add(TokenKind::Semicolon),
            b'*' => self.add(TokenKind::Star),
            b'!' => self.add_with_equal(TokenKind::Bang, TokenKind::BangEqual),
            b'=' => self.add_with_equal(TokenKind::Equal, TokenKind::EqualEqual),
            b'<' => self.add_with_equal(TokenKind::Less, TokenKind::LessEqual),
            b'>' => self.add_with_equal(TokenKind::Greater, TokenKind::GreaterEqual),
            b'/' => {
                if self.cursor.eat(b'/') {
                    self.line_comment();
                } else if self.cursor.eat(b'*') {
                    self.block_comment();
                } else {
                    self.add(TokenKind::Slash);
                }
            }
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,
            b'"' => self.string(),
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            _ => {
                let ch = if byte.is_ascii() {
                    char::from(byte)
                } else {
                    self.cursor.finish_char(self.start)
                };
                self.error(LexErrorKind::UnexpectedCharacter(ch));
            }
        }
    }

    /// Skip to the end of the line. Comment text may contain any byte,
    /// including NUL.
    fn line_comment(&mut self) {
        while !self.cursor.is_eof() && self.cursor.current() != b'\n' {
            self.cursor.advance();
        }
    }

    /// `/* ... */`. Does not nest; the first `*/` closes the comment.
    fn block_comment(&mut self) {
        loop {
            if self.cursor.is_eof() {
                self.error(LexErrorKind::UnterminatedComment);
                return;
            }
            match self.cursor.bump() {
                b'*' if self.cursor.eat(b'/') => return,
                b'\n' => self.line += 1,
                _ => {}
            }
        }
    }

    /// A `"..."` literal. The lexeme keeps its quotes, the literal does not.
    /// Strings may span lines; the token carries the line of the closing quote.
    fn string(&mut self) {
        while !self.cursor.is_eof() && self.cursor.current() != b'"' {
            if self.cursor.current() == b'\n' {
                self.line += 1;
            }
            self.cursor.advance();
        }

        if self.cursor.is_eof() {
            self.error(LexErrorKind::UnterminatedString);
            return;
        }

        // Closing quote.
        self.cursor.advance();
        let value = self.cursor.slice(self.start + 1, self.cursor.pos() - 1);
        self.add_literal(TokenKind::String, Literal::Str(value.to_owned()));
    }

    /// Digits with an optional fraction. A `.` only belongs to the number when
    /// a digit follows it, so `123.` is a number then a dot.
    fn number(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        let value = self
            .cursor
            .slice_from(self.start)
            .parse::<f64>()
            .unwrap_or_default();
        self.add_literal(TokenKind::Number, Literal::Number(value));
    }

    fn identifier(&mut self) {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let text = self.cursor.slice_from(self.start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.add(kind);
    }

    fn add_with_equal(&mut self, single: TokenKind, double: TokenKind) {
        let kind = if self.cursor.eat(b'=') { double } else { single };
        self.add(kind);
    }

    #[inline]
    fn add(&mut self, kind: TokenKind) {
        self.add_literal(kind, Literal::Nil);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme = self.cursor.slice_from(self.start);
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }

    #[cold]
    fn error(&mut self, kind: LexErrorKind) {
        tracing::debug!(line = self.line, %kind, "scan error");
        self.errors.push(LexError::new(self.line, kind));
    }
}
