//! Lox Parser - recursive descent from tokens to statements.
//!
//! Precedence, lowest to highest:
//!
//! ```text
//! assignment → or → and → equality → comparison → term → factor → unary → call → primary
//! ```
//!
//! A failed declaration is reported and the parser resynchronizes at the next
//! statement boundary, so one run surfaces every independent syntax error.
//! A few problems (invalid assignment target, more than 255 arguments or
//! parameters, `return` outside a function) are reported without unwinding
//! at all; the surrounding statement is still produced.

mod cursor;
mod error;
mod grammar;
mod recovery;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};

use lox_ir::{Stmt, Token};
use tracing::debug;

use cursor::Cursor;

/// Maximum number of call arguments and function parameters.
pub const MAX_ARITY: usize = 255;

/// Statements and errors from one parse.
///
/// When `errors` is non-empty, `statements` holds whatever parsed cleanly and
/// must not be executed.
#[derive(Debug, Default)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse a token sequence terminated by `EOF`.
pub fn parse(tokens: &[Token]) -> ParseOutput {
    Parser::new(tokens).parse()
}

type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
    /// Number of function bodies enclosing the current position.
    function_depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
            function_depth: 0,
        }
    }

    /// program → declaration* EOF
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        ParseOutput {
            statements,
            errors: self.errors,
        }
    }

    /// Record an error without unwinding.
    #[cold]
    fn report(&mut self, error: ParseError) {
        debug!(line = error.line(), %error, "parse error");
        self.errors.push(error);
    }
}
