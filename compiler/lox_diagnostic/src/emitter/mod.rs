//! Diagnostic emitters.

mod terminal;


pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// A sink for diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);
}
