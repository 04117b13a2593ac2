//! Expression parsing.

use lox_ir::{Expr, Literal, Token, TokenKind};
use lox_stack::ensure_sufficient_stack;

use crate::error::{ParseError, ParseErrorKind};
use crate::recovery::{TokenSet, COMPARISON_OPS, EQUALITY_OPS, FACTOR_OPS, TERM_OPS, UNARY_OPS};
use crate::{ParseResult, Parser, MAX_ARITY};

impl Parser<'_> {
    /// expression → assignment
    pub(crate) fn expression(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// assignment → IDENTIFIER "=" assignment | or
    ///
    /// The left side is parsed as an ordinary expression first. A target that
    /// is not a bare variable is reported and the left side is kept.
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.or()?;

        if !self.cursor.eat(TokenKind::Equal) {
            return Ok(expr);
        }
        let equals = self.cursor.previous();
        let value = self.assignment()?;

        match expr {
            Expr::Variable { name } => Ok(Expr::Assign {
                name,
                value: Box::new(value),
            }),
            other => {
                self.report(ParseError::at(
                    equals,
                    ParseErrorKind::InvalidAssignmentTarget,
                ));
                Ok(other)
            }
        }
    }

    /// or → and ( "or" and )*
    fn or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.and()?;
        while self.cursor.eat(TokenKind::Or) {
            let operator = self.cursor.previous().clone();
            let right = self.and()?;
            expr = Expr::logical(expr, operator, right);
        }
        Ok(expr)
    }

    /// and → equality ( "and" equality )*
    fn and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.equality()?;
        while self.cursor.eat(TokenKind::And) {
            let operator = self.cursor.previous().clone();
            let right = self.equality()?;
            expr = Expr::logical(expr, operator, right);
        }
        Ok(expr)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        self.binary_level(EQUALITY_OPS, Self::comparison)
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        self.binary_level(COMPARISON_OPS, Self::term)
    }

    fn term(&mut self) -> ParseResult<Expr> {
        self.binary_level(TERM_OPS, Self::factor)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        self.binary_level(FACTOR_OPS, Self::unary)
    }

    /// One left-associative binary precedence level: `next ( op next )*`.
    fn binary_level(
        &mut self,
        operators: TokenSet,
        next: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut expr = next(self)?;
        while let Some(operator) = self.cursor.eat_in(operators) {
            let operator = operator.clone();
            let right = next(self)?;
            expr = Expr::binary(expr, operator, right);
        }
        Ok(expr)
    }

    /// unary → ( "!" | "-" ) unary | call
    fn unary(&mut self) -> ParseResult<Expr> {
        if let Some(operator) = self.cursor.eat_in(UNARY_OPS) {
            let operator = operator.clone();
            let right = ensure_sufficient_stack(|| self.unary())?;
            return Ok(Expr::unary(operator, right));
        }
        self.call()
    }

    /// call → primary ( "(" arguments? ")" )*
    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;
        while self.cursor.eat(TokenKind::LeftParen) {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    /// arguments → expression ( "," expression )*
    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut arguments = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                if arguments.len() >= MAX_ARITY {
                    let at = self.cursor.current();
                    self.report(ParseError::at(at, ParseErrorKind::TooManyArguments));
                }
                arguments.push(self.expression()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let paren = self
            .cursor
            .expect(TokenKind::RightParen, "Expect ')' after arguments.")?
            .clone();

        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    /// primary → "true" | "false" | "nil" | NUMBER | STRING | IDENTIFIER | "(" expression ")"
    fn primary(&mut self) -> ParseResult<Expr> {
        let token: &Token = self.cursor.current();
        let expr = match token.kind {
            TokenKind::False => Expr::Literal(Literal::Bool(false)),
            TokenKind::True => Expr::Literal(Literal::Bool(true)),
            TokenKind::Nil => Expr::Literal(Literal::Nil),
            TokenKind::Number | TokenKind::String => Expr::Literal(token.literal.clone()),
            TokenKind::Identifier => Expr::Variable {
                name: token.clone(),
            },
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.cursor
                    .expect(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::grouping(inner));
            }
            _ => return Err(ParseError::expected(token, "Expect expression.")),
        };
        self.cursor.advance();
        Ok(expr)
    }
}
