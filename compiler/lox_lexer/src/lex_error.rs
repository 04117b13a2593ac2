//! Scan errors.

use thiserror::Error;

/// A scan error and the line it was found on.
///
/// `Display` yields only the message; the `[line N]` prefix is added by the
/// diagnostic layer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct LexError {
    pub line: u32,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(line: u32, kind: LexErrorKind) -> Self {
        LexError { line, kind }
    }
}

/// What the scanner could not make sense of.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that starts no token, e.g. `@` or `#`.
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),
    /// End of input inside a `"..."` literal.
    #[error("Unterminated string.")]
    UnterminatedString,
    /// End of input inside a `/* ... */` comment.
    #[error("Unterminated block comment.")]
    UnterminatedComment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = LexError::new(4, LexErrorKind::UnexpectedCharacter('@'));
        assert_eq!(err.to_string(), "Unexpected character.");
        assert_eq!(
            LexErrorKind::UnterminatedString.to_string(),
            "Unterminated string."
        );
        assert_eq!(
            LexErrorKind::UnterminatedComment.to_string(),
            "Unterminated block comment."
        );
    }
}
