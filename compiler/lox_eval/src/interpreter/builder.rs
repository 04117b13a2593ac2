//! Interpreter configuration.

use crate::environment::{Environment, LocalScope};
use crate::prelude;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};

/// Builds an [`Interpreter`].
///
/// Defaults: output to stdout, native prelude (`clock`) installed, at most
/// [`DEFAULT_MAX_CALL_DEPTH`] nested calls.
#[must_use]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    prelude: bool,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            print_handler: None,
            prelude: true,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Send `print` output to `handler` instead of stdout.
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Start with an empty global scope.
    pub fn without_prelude(mut self) -> Self {
        self.prelude = false;
        self
    }

    /// Fail with `Stack overflow.` once `depth` calls are in progress.
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        let mut globals = Environment::new();
        if self.prelude {
            prelude::install(&mut globals);
        }
        let globals = LocalScope::new(globals);

        Interpreter {
            environment: globals.clone(),
            globals,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_depth: 0,
            max_call_depth: self.max_call_depth,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
