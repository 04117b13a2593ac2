//! Terminal Emitter
//!
//! Plain text, one diagnostic per line (runtime diagnostics take two), with
//! optional ANSI color.

use std::io::{self, Write};

use crate::Diagnostic;

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const RESET: &str = "\x1b[0m";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Emitter for stderr, the usual destination.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    /// Write failures are dropped: there is nowhere left to report them.
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = if self.colors {
            writeln!(self.writer, "{}{diagnostic}{}", colors::ERROR, colors::RESET)
        } else {
            writeln!(self.writer, "{diagnostic}")
        };
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
