//! Shared helpers for end-to-end tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use lox_diagnostic::{ColorMode, TerminalEmitter};
use lox_eval::{buffer_handler, Interpreter};
use loxc::Lox;

pub type TestLox = Lox<TerminalEmitter<Vec<u8>>>;

/// A session that captures program output and diagnostics.
pub fn session() -> TestLox {
    let interpreter = Interpreter::builder()
        .print_handler(buffer_handler())
        .build();
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    Lox::new(interpreter, emitter)
}

pub fn stdout_of(lox: &TestLox) -> String {
    lox.interpreter().print_handler().get_output()
}

pub fn stderr_of(lox: &TestLox) -> String {
    String::from_utf8_lossy(lox.emitter().get_ref()).into_owned()
}

/// Everything one `run` produced.
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

pub fn run(source: &str) -> Outcome {
    let mut lox = session();
    lox.run(source);
    Outcome {
        stdout: stdout_of(&lox),
        stderr: stderr_of(&lox),
        exit_code: lox.exit_code(),
    }
}
