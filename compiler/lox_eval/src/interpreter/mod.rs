//! The tree-walking interpreter.
//!
//! # Scopes
//!
//! `environment` is the scope code currently runs in. Blocks and calls swap
//! in a fresh child scope via [`Interpreter::execute_block`] and always put
//! the previous one back, whether the body finished, returned, or failed.
//!
//! # Returns
//!
//! Statement execution yields [`Flow`]. `Flow::Return` propagates up through
//! blocks and loops until the enclosing call turns it into the call's value.

mod builder;
mod expr;
mod stmt;


pub use builder::InterpreterBuilder;

use lox_ir::Stmt;
use tracing::debug;

use crate::environment::{Environment, LocalScope};
use crate::errors::EvalError;
use crate::print_handler::SharedPrintHandler;
use crate::Value;

/// How a statement finished.
#[derive(Debug, PartialEq)]
pub enum Flow {
    /// Fell off the end; continue with the next statement.
    Normal,
    /// A `return` is unwinding to the nearest call.
    Return(Value),
}

/// Default limit on nested calls.
///
/// The stack itself grows on demand, so without a limit unbounded Lox
/// recursion would run until memory is exhausted.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

pub struct Interpreter {
    globals: LocalScope<Environment>,
    environment: LocalScope<Environment>,
    print_handler: SharedPrintHandler,
    /// Calls currently in progress.
    call_depth: usize,
    max_call_depth: usize,
}

impl Interpreter {
    /// An interpreter printing to stdout with the native prelude installed.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The outermost scope, where top-level declarations and natives live.
    pub fn globals(&self) -> &LocalScope<Environment> {
        &self.globals
    }

    /// Number of calls currently in progress.
    #[inline]
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Execute a batch of statements.
    ///
    /// The first runtime error stops the batch. Effects of statements that
    /// already ran are kept, and globals persist into the next batch.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        for stmt in statements {
            match self.execute(stmt) {
                Ok(Flow::Normal) => {}
                // Only reachable for trees that did not come from the parser,
                // which rejects `return` outside a function.
                Ok(Flow::Return(_)) => break,
                Err(error) => {
                    debug!(line = error.line(), %error, "runtime error halted batch");
                    return Err(error);
                }
            }
        }
        Ok(())
    }

    /// Run `statements` with `scope` as the current environment, restoring
    /// the previous environment afterwards.
    pub fn execute_block(
        &mut self,
        statements: &[Stmt],
        scope: LocalScope<Environment>,
    ) -> Result<Flow, EvalError> {
        let previous = std::mem::replace(&mut self.environment, scope);
        let result = self.execute_all(statements);
        self.environment = previous;
        result
    }

    fn execute_all(&mut self, statements: &[Stmt]) -> Result<Flow, EvalError> {
        for stmt in statements {
            if let Flow::Return(value) = self.execute(stmt)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// A new scope enclosed by the current one.
    fn child_scope(&self) -> LocalScope<Environment> {
        LocalScope::new(Environment::with_enclosing(self.environment.clone()))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
