//! Conversions from phase errors to diagnostics.

use lox_diagnostic::Diagnostic;
use lox_eval::EvalError;
use lox_lexer::LexError;
use lox_parse::ParseError;

pub fn lex_diagnostic(error: &LexError) -> Diagnostic {
    Diagnostic::lex(error.line, error.kind.to_string())
}

pub fn parse_diagnostic(error: &ParseError) -> Diagnostic {
    Diagnostic::parse(error.line(), error.location(), error.kind.to_string())
}

pub fn runtime_diagnostic(error: &EvalError) -> Diagnostic {
    Diagnostic::runtime(error.line(), error.kind.to_string())
}
