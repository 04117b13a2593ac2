//! Command implementations for the `lox` binary.
//!
//! Each command returns the process exit status rather than exiting, and has
//! a `_with` or `dump_` form that takes its writers explicitly.

mod lex;
mod parse;
mod prompt;
mod run;

pub use lex::{dump_tokens, lex_file};
pub use parse::{dump_ast, parse_file};
pub use prompt::{run_prompt, run_prompt_with};
pub use run::{run_file, run_file_with};

use std::io;
use std::path::Path;

use lox_diagnostic::{ColorMode, TerminalEmitter};

/// Read a script, turning I/O failures into a user-facing message.
pub(crate) fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| {
        let path = path.display();
        match e.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {e}"),
        }
    })
}

fn stderr_emitter() -> TerminalEmitter<io::Stderr> {
    let is_tty = io::IsTerminal::is_terminal(&io::stderr());
    TerminalEmitter::stderr(ColorMode::Auto, is_tty)
}
