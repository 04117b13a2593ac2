//! Lox driver.
//!
//! Ties the pipeline together for the `lox` binary: a [`Lox`] session runs
//! source text through scan, parse, and evaluate, converts every error into
//! a [`Diagnostic`](lox_diagnostic::Diagnostic), and remembers whether a
//! static or a runtime error happened so the binary can pick its exit
//! status.

pub mod commands;
pub mod reporting;
mod session;

pub use session::Lox;

use std::sync::Once;

/// Exit statuses, following `sysexits.h`.
pub mod exit {
    /// Bad command-line usage.
    pub const USAGE: i32 = 64;
    /// The script had scan or parse errors.
    pub const DATA_ERR: i32 = 65;
    /// The script failed at runtime.
    pub const SOFTWARE: i32 = 70;
    /// The script could not be read.
    pub const IO_ERR: i32 = 74;
}

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber.
///
/// Does nothing unless `LOX_LOG` is set; its value is an `EnvFilter`
/// directive such as `lox_eval=trace`. With `LOX_LOG_TREE` also set, spans
/// are drawn as an indented tree. Logs always go to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("LOX_LOG").is_none() {
            return;
        }
        let filter = EnvFilter::try_from_env("LOX_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

        let installed = if std::env::var_os("LOX_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init()
        };
        if let Err(err) = installed {
            eprintln!("warning: could not install log subscriber: {err}");
        }
    });
}
