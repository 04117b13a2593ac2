//! Expression evaluation.

use lox_ir::{Expr, Token, TokenKind};
use lox_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::errors::{self, EvalResult};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::Value;

use super::Interpreter;

impl Interpreter {
    /// Evaluate an expression to a value.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { operator, right } => {
                let operand = self.evaluate(right)?;
                evaluate_unary(operator, operand)
            }
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(left, operator, right)
            }
            Expr::Logical {
                left,
                operator,
                right,
            } => self.logical(left, operator, right),
            Expr::Variable { name } => self.environment.borrow().get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.borrow_mut().assign(name, value.clone())?;
                Ok(value)
            }
            Expr::Call {
                callee,
                paren,
                arguments,
            } => self.call(callee, paren, arguments),
        }
    }

    /// `or` returns the left operand if it is truthy, `and` if it is falsey;
    /// otherwise the right operand is evaluated and returned. The result is
    /// the operand itself, not a boolean.
    fn logical(&mut self, left: &Expr, operator: &Token, right: &Expr) -> EvalResult {
        let left = self.evaluate(left)?;
        let short_circuit = if operator.is(TokenKind::Or) {
            left.is_truthy()
        } else {
            !left.is_truthy()
        };
        if short_circuit {
            Ok(left)
        } else {
            self.evaluate(right)
        }
    }

    /// Callee first, then arguments left to right; then the callee, its
    /// arity, and the call depth are checked.
    fn call(&mut self, callee: &Expr, paren: &Token, arguments: &[Expr]) -> EvalResult {
        let callee = self.evaluate(callee)?;
        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.evaluate(argument)?);
        }

        let Value::Callable(function) = callee else {
            return Err(errors::not_callable(paren));
        };
        if values.len() != function.arity() {
            return Err(errors::arity_mismatch(paren, function.arity(), values.len()));
        }

        if self.call_depth >= self.max_call_depth {
            debug!(name = function.name(), depth = self.call_depth, "call depth limit reached");
            return Err(errors::stack_overflow(paren));
        }

        trace!(name = function.name(), arity = function.arity(), line = paren.line, "call");
        self.call_depth += 1;
        let result = function.call(self, paren, values);
        self.call_depth -= 1;
        result
    }
}
