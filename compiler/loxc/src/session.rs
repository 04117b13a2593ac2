//! A Lox session: one interpreter, one diagnostic sink, and error flags.

use std::io;

use lox_diagnostic::{ColorMode, Diagnostic, DiagnosticEmitter, TerminalEmitter};
use lox_eval::Interpreter;

use crate::exit;
use crate::reporting::{lex_diagnostic, parse_diagnostic, runtime_diagnostic};

/// Runs units of source text against a persistent interpreter.
///
/// Globals survive from one [`run`](Lox::run) to the next, which is what
/// the interactive prompt relies on.
pub struct Lox<E: DiagnosticEmitter> {
    interpreter: Interpreter,
    emitter: E,
    had_error: bool,
    had_runtime_error: bool,
}

impl Lox<TerminalEmitter<io::Stderr>> {
    /// Program output to stdout, diagnostics to stderr.
    pub fn stdio() -> Self {
        let is_tty = io::IsTerminal::is_terminal(&io::stderr());
        Lox::new(
            Interpreter::new(),
            TerminalEmitter::stderr(ColorMode::Auto, is_tty),
        )
    }
}

impl<E: DiagnosticEmitter> Lox<E> {
    pub fn new(interpreter: Interpreter, emitter: E) -> Self {
        Lox {
            interpreter,
            emitter,
            had_error: false,
            had_runtime_error: false,
        }
    }

    /// Scan, parse, and execute one unit of source.
    ///
    /// Scan and parse errors are all reported, and then nothing runs.
    /// A runtime error is reported and stops the unit where it happened.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn run(&mut self, source: &str) {
        let lexed = lox_lexer::lex(source);
        for error in &lexed.errors {
            self.report(&lex_diagnostic(error));
        }

        let parsed = lox_parse::parse(&lexed.tokens);
        for error in &parsed.errors {
            self.report(&parse_diagnostic(error));
        }

        if !self.had_error {
            if let Err(error) = self.interpreter.interpret(&parsed.statements) {
                self.report(&runtime_diagnostic(&error));
            }
        }
        self.emitter.flush();
    }

    fn report(&mut self, diagnostic: &Diagnostic) {
        if diagnostic.phase.is_static() {
            self.had_error = true;
        } else {
            self.had_runtime_error = true;
        }
        self.emitter.emit(diagnostic);
    }

    /// A scan or parse error has been reported since the last reset.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// A runtime error has been reported since the last reset.
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    pub fn reset_errors(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }

    /// Process exit status for the errors seen so far.
    pub fn exit_code(&self) -> i32 {
        if self.had_error {
            exit::DATA_ERR
        } else if self.had_runtime_error {
            exit::SOFTWARE
        } else {
            0
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }
}
