//! The diagnostic record.

use std::fmt;

/// Which stage of the pipeline found the problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Lex,
    Parse,
    Runtime,
}

impl Phase {
    /// Scan and parse problems stop a unit before it runs; runtime problems
    /// stop it while running.
    #[inline]
    pub fn is_static(self) -> bool {
        matches!(self, Phase::Lex | Phase::Parse)
    }
}

/// One reported problem.
///
/// Displays as:
///
/// ```text
/// [line 3] Error: Unexpected character.          (lex)
/// [line 3] Error at 'x': Expect ';' after value. (parse)
/// [line 3] Error at end: Expect '}' after block. (parse, out of input)
/// Operands must be numbers.                      (runtime)
/// [line 3]
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub phase: Phase,
    pub line: u32,
    /// ` at 'lexeme'`, ` at end`, or empty.
    pub location: String,
    pub message: String,
}

impl Diagnostic {
    pub fn lex(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            phase: Phase::Lex,
            line,
            location: String::new(),
            message: message.into(),
        }
    }

    pub fn parse(line: u32, location: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            phase: Phase::Parse,
            line,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn runtime(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            phase: Phase::Runtime,
            line,
            location: String::new(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            Phase::Lex | Phase::Parse => write!(
                f,
                "[line {}] Error{}: {}",
                self.line, self.location, self.message
            ),
            Phase::Runtime => write!(f, "{}\n[line {}]", self.message, self.line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lex_format() {
        assert_eq!(
            Diagnostic::lex(2, "Unexpected character.").to_string(),
            "[line 2] Error: Unexpected character."
        );
    }

    #[test]
    fn parse_format() {
        assert_eq!(
            Diagnostic::parse(1, " at '='", "Invalid assignment target.").to_string(),
            "[line 1] Error at '=': Invalid assignment target."
        );
        assert_eq!(
            Diagnostic::parse(4, " at end", "Expect '}' after block.").to_string(),
            "[line 4] Error at end: Expect '}' after block."
        );
    }

    #[test]
    fn runtime_format() {
        assert_eq!(
            Diagnostic::runtime(9, "Operands must be numbers.").to_string(),
            "Operands must be numbers.\n[line 9]"
        );
    }

    #[test]
    fn static_phases() {
        assert!(Phase::Lex.is_static());
        assert!(Phase::Parse.is_static());
        assert!(!Phase::Runtime.is_static());
    }
}
