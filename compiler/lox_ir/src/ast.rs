//! Syntax tree for Lox programs.
//!
//! Expressions and statements are closed sum types. Consumers dispatch with
//! `match`, so adding a node kind is a compile error everywhere it is not
//! handled.
//!
//! Nodes own their children. Function declarations are reference counted
//! because every closure created from a declaration shares it.

use std::rc::Rc;

use crate::token::{Literal, Token};

/// A value-producing syntax fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Grouping(Box<Expr>),
    Unary {
        operator: Token,
        right: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// `and` / `or`. Kept apart from `Binary` because it short-circuits.
    Logical {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Variable {
        name: Token,
    },
    Assign {
        name: Token,
        value: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        /// Closing parenthesis; runtime errors raised by the call report its line.
        paren: Token,
        arguments: Vec<Expr>,
    },
}

impl Expr {
    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn logical(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }
}

/// A side-effecting unit of execution.
///
/// There is no `for` statement: the parser lowers `for` loops into `Block`
/// and `While`.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Expression(Expr),
    Print(Expr),
    Var {
        name: Token,
        /// `None` when the declaration has no `=`; evaluates to `nil`.
        initializer: Option<Expr>,
    },
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    Function(Rc<FunctionDecl>),
    Return {
        keyword: Token,
        value: Option<Expr>,
    },
}

/// A named function declaration: `fun name(params) { body }`.
#[derive(Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

impl FunctionDecl {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
