//! `lox <script>` and `lox run <script>`.

use std::path::Path;

use lox_diagnostic::DiagnosticEmitter;

use super::read_file;
use crate::{exit, Lox};

/// Run a script with program output on stdout and diagnostics on stderr.
pub fn run_file(path: &str) -> i32 {
    let mut lox = Lox::stdio();
    run_file_with(Path::new(path), &mut lox)
}

/// Run a script in an existing session.
pub fn run_file_with<E: DiagnosticEmitter>(path: &Path, lox: &mut Lox<E>) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("{message}");
            return exit::IO_ERR;
        }
    };
    lox.run(&source);
    lox.exit_code()
}
