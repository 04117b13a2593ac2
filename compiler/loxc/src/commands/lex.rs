//! `lox lex <script>`: print the token stream.

use std::io::{self, Write};
use std::path::Path;

use lox_diagnostic::DiagnosticEmitter;

use super::{read_file, stderr_emitter};
use crate::exit;
use crate::reporting::lex_diagnostic;

pub fn lex_file(path: &str) -> i32 {
    let source = match read_file(Path::new(path)) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("{message}");
            return exit::IO_ERR;
        }
    };
    let mut stdout = io::stdout().lock();
    dump_tokens(&source, &mut stdout, &mut stderr_emitter())
}

/// Write one token per line as `KIND lexeme literal`, then report any scan
/// errors.
pub fn dump_tokens<W: Write, E: DiagnosticEmitter>(
    source: &str,
    out: &mut W,
    emitter: &mut E,
) -> i32 {
    let lexed = lox_lexer::lex(source);
    for token in &lexed.tokens {
        let _ = writeln!(out, "{token}");
    }
    for error in &lexed.errors {
        emitter.emit(&lex_diagnostic(error));
    }
    emitter.flush();

    if lexed.has_errors() {
        exit::DATA_ERR
    } else {
        0
    }
}
