//! `lox parse <script>`: print the syntax tree.

use std::io::{self, Write};
use std::path::Path;

use lox_diagnostic::DiagnosticEmitter;
use lox_ir::AstPrinter;

use super::{read_file, stderr_emitter};
use crate::exit;
use crate::reporting::{lex_diagnostic, parse_diagnostic};

pub fn parse_file(path: &str) -> i32 {
    let source = match read_file(Path::new(path)) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("{message}");
            return exit::IO_ERR;
        }
    };
    let mut stdout = io::stdout().lock();
    dump_ast(&source, &mut stdout, &mut stderr_emitter())
}

/// Write each top-level statement that parsed, one per line, then report
/// scan and parse errors.
pub fn dump_ast<W: Write, E: DiagnosticEmitter>(source: &str, out: &mut W, emitter: &mut E) -> i32 {
    let lexed = lox_lexer::lex(source);
    let parsed = lox_parse::parse(&lexed.tokens);

    let _ = write!(out, "{}", AstPrinter::new().print_program(&parsed.statements));

    for error in &lexed.errors {
        emitter.emit(&lex_diagnostic(error));
    }
    for error in &parsed.errors {
        emitter.emit(&parse_diagnostic(error));
    }
    emitter.flush();

    if lexed.has_errors() || parsed.has_errors() {
        exit::DATA_ERR
    } else {
        0
    }
}
