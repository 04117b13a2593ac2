//! Lox Eval - a tree-walking interpreter over `lox_ir` syntax trees.
//!
//! The interpreter walks statements directly. Variables live in a chain of
//! reference-counted [`Environment`]s so that closures can keep their
//! defining scope alive and observe each other's writes. A `return` unwinds
//! as [`Flow::Return`] through statement execution and is caught at the call
//! boundary; runtime errors travel separately as [`EvalError`].

mod callable;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod prelude;
pub mod print_handler;
mod unary_operators;
mod value;

pub use callable::{Callable, LoxFunction, NativeFn, NativeFunction};
pub use environment::{Environment, LocalScope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Flow, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::Value;
