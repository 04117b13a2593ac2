//! Parenthesized prefix rendering of syntax trees.
//!
//! Every compound node prints as `(head child child ...)`, which makes the
//! tree shape (and therefore precedence and associativity) explicit:
//!
//! ```text
//! -123 * (45.67)        =>  (* (- 123) (group 45.67))
//! a = b or c and d      =>  (= a (or b (and c d)))
//! for (;;) print x;     =>  (while true (print x))
//! ```

use std::fmt::Write;

use crate::ast::{Expr, FunctionDecl, Stmt};

/// Renders expressions and statements into a reusable buffer.
#[derive(Default)]
pub struct AstPrinter {
    out: String,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a single expression.
    pub fn print_expr(mut self, expr: &Expr) -> String {
        self.expr(expr);
        self.out
    }

    /// Render a single statement.
    pub fn print_stmt(mut self, stmt: &Stmt) -> String {
        self.stmt(stmt);
        self.out
    }

    /// Render a program, one top-level statement per line.
    pub fn print_program(mut self, program: &[Stmt]) -> String {
        for stmt in program {
            self.stmt(stmt);
            self.out.push('\n');
        }
        self.out
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(value) => {
                let _ = write!(self.out, "{value}");
            }
            Expr::Grouping(inner) => self.parenthesize("group", &[inner.as_ref()]),
            Expr::Unary { operator, right } => self.parenthesize(&operator.lexeme, &[right.as_ref()]),
            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => self.parenthesize(&operator.lexeme, &[left.as_ref(), right.as_ref()]),
            Expr::Variable { name } => self.out.push_str(&name.lexeme),
            Expr::Assign { name, value } => {
                self.out.push_str("(= ");
                self.out.push_str(&name.lexeme);
                self.out.push(' ');
                self.expr(value);
                self.out.push(')');
            }
            Expr::Call {
                callee, arguments, ..
            } => {
                self.out.push_str("(call ");
                self.expr(callee);
                for arg in arguments {
                    self.out.push(' ');
                    self.expr(arg);
                }
                self.out.push(')');
            }
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expression(expr) => self.parenthesize(";", &[expr]),
            Stmt::Print(expr) => self.parenthesize("print", &[expr]),
            Stmt::Var { name, initializer } => {
                self.out.push_str("(var ");
                self.out.push_str(&name.lexeme);
                if let Some(init) = initializer {
                    self.out.push(' ');
                    self.expr(init);
                }
                self.out.push(')');
            }
            Stmt::Block(statements) => {
                self.out.push_str("(block");
                self.stmts(statements);
                self.out.push(')');
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.out.push_str("(if ");
                self.expr(condition);
                self.out.push(' ');
                self.stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.out.push(' ');
                    self.stmt(else_branch);
                }
                self.out.push(')');
            }
            Stmt::While { condition, body } => {
                self.out.push_str("(while ");
                self.expr(condition);
                self.out.push(' ');
                self.stmt(body);
                self.out.push(')');
            }
            Stmt::Function(decl) => self.function(decl),
            Stmt::Return { value, .. } => match value {
                Some(value) => self.parenthesize("return", &[value]),
                None => self.out.push_str("(return)"),
            },
        }
    }

    fn function(&mut self, decl: &FunctionDecl) {
        self.out.push_str("(fun ");
        self.out.push_str(&decl.name.lexeme);
        self.out.push_str(" (");
        for (i, param) in decl.params.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.out.push_str(&param.lexeme);
        }
        self.out.push(')');
        self.stmts(&decl.body);
        self.out.push(')');
    }

    fn stmts(&mut self, statements: &[Stmt]) {
        for stmt in statements {
            self.out.push(' ');
            self.stmt(stmt);
        }
    }

    fn parenthesize(&mut self, head: &str, exprs: &[&Expr]) {
        self.out.push('(');
        self.out.push_str(head);
        for expr in exprs {
            self.out.push(' ');
            self.expr(expr);
        }
        self.out.push(')');
    }
}
