//! Lox Diagnostic - user-facing error records and how they are written.
//!
//! Every phase reports problems in its own typed error. The driver converts
//! those into [`Diagnostic`]s, whose `Display` is the exact text a user
//! sees, and hands them to a [`DiagnosticEmitter`].

mod diagnostic;
mod emitter;

pub use diagnostic::{Diagnostic, Phase};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
