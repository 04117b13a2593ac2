//! Things that can be called: user functions and native functions.

use std::fmt;
use std::rc::Rc;

use lox_ir::{FunctionDecl, Token};

use crate::environment::{Environment, LocalScope};
use crate::errors::{self, EvalResult};
use crate::interpreter::{Flow, Interpreter};
use crate::Value;

/// A callable value.
///
/// The interpreter checks the argument count against [`Callable::arity`]
/// before calling, so implementations can rely on `arguments.len()`.
pub trait Callable: fmt::Display {
    fn name(&self) -> &str;

    fn arity(&self) -> usize;

    /// Invoke with already-evaluated arguments. `paren` is the call's closing
    /// parenthesis, for error reporting.
    fn call(
        &self,
        interpreter: &mut Interpreter,
        paren: &Token,
        arguments: Vec<Value>,
    ) -> EvalResult;
}

/// A function declared in Lox source, paired with the scope it was declared
/// in.
pub struct LoxFunction {
    declaration: Rc<FunctionDecl>,
    closure: LocalScope<Environment>,
}

impl LoxFunction {
    pub fn new(declaration: Rc<FunctionDecl>, closure: LocalScope<Environment>) -> Self {
        LoxFunction {
            declaration,
            closure,
        }
    }
}

impl Callable for LoxFunction {
    fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }

    fn arity(&self) -> usize {
        self.declaration.arity()
    }

    /// Each call gets a fresh scope for its parameters, enclosed by the
    /// closure rather than by the caller's scope.
    fn call(
        &self,
        interpreter: &mut Interpreter,
        _paren: &Token,
        arguments: Vec<Value>,
    ) -> EvalResult {
        let mut scope = Environment::with_enclosing(self.closure.clone());
        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            scope.define(&param.lexeme, argument);
        }

        match interpreter.execute_block(&self.declaration.body, LocalScope::new(scope))? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Nil),
        }
    }
}

impl fmt::Display for LoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.declaration.name.lexeme)
    }
}

/// Signature of a host function. An `Err` message becomes a runtime error
/// at the call site.
pub type NativeFn = fn(&[Value]) -> Result<Value, String>;

/// A function implemented in Rust.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    name: &'static str,
    arity: usize,
    function: NativeFn,
}

impl NativeFunction {
    pub const fn new(name: &'static str, arity: usize, function: NativeFn) -> Self {
        NativeFunction {
            name,
            arity,
            function,
        }
    }
}

impl Callable for NativeFunction {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn call(
        &self,
        _interpreter: &mut Interpreter,
        paren: &Token,
        arguments: Vec<Value>,
    ) -> EvalResult {
        (self.function)(&arguments).map_err(|message| errors::native_failure(paren, message))
    }
}

impl fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<native fn>")
    }
}
