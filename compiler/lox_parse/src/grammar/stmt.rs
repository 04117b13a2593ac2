//! Declaration and statement parsing.

use std::rc::Rc;

use lox_ir::{Expr, FunctionDecl, Literal, Stmt, TokenKind};
use lox_stack::ensure_sufficient_stack;

use crate::error::{ParseError, ParseErrorKind};
use crate::recovery::{synchronize, STMT_START};
use crate::{ParseResult, Parser, MAX_ARITY};

impl Parser<'_> {
    /// declaration → funDecl | varDecl | statement
    ///
    /// This is the recovery point: on error the problem is recorded, tokens
    /// are skipped to the next statement boundary, and `None` is returned.
    pub(crate) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.cursor.eat(TokenKind::Fun) {
            self.function().map(|decl| Stmt::Function(Rc::new(decl)))
        } else if self.cursor.eat(TokenKind::Var) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                self.report(error);
                synchronize(&mut self.cursor, STMT_START);
                None
            }
        }
    }

    /// funDecl → "fun" IDENTIFIER "(" parameters? ")" block
    fn function(&mut self) -> ParseResult<FunctionDecl> {
        let name = self
            .cursor
            .expect(TokenKind::Identifier, "Expect function name.")?
            .clone();
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after function name.")?;

        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_ARITY {
                    let at = self.cursor.current();
                    self.report(ParseError::at(at, ParseErrorKind::TooManyParameters));
                }
                let param = self
                    .cursor
                    .expect(TokenKind::Identifier, "Expect parameter name.")?;
                params.push(param.clone());
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.cursor
            .expect(TokenKind::LeftBrace, "Expect '{' before function body.")?;

        self.function_depth += 1;
        let body = self.block();
        self.function_depth -= 1;

        Ok(FunctionDecl {
            name,
            params,
            body: body?,
        })
    }

    /// varDecl → "var" IDENTIFIER ( "=" expression )? ";"
    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self
            .cursor
            .expect(TokenKind::Identifier, "Expect variable name.")?
            .clone();
        let initializer = if self.cursor.eat(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };
        self.cursor.expect(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;
        Ok(Stmt::Var { name, initializer })
    }

    fn statement(&mut self) -> ParseResult<Stmt> {
        ensure_sufficient_stack(|| {
            let token = self.cursor.current();
            match token.kind {
                TokenKind::For => {
                    self.cursor.advance();
                    self.for_statement()
                }
                TokenKind::If => {
                    self.cursor.advance();
                    self.if_statement()
                }
                TokenKind::Print => {
                    self.cursor.advance();
                    self.print_statement()
                }
                TokenKind::Return => {
                    self.cursor.advance();
                    self.return_statement()
                }
                TokenKind::While => {
                    self.cursor.advance();
                    self.while_statement()
                }
                TokenKind::LeftBrace => {
                    self.cursor.advance();
                    Ok(Stmt::Block(self.block()?))
                }
                _ => self.expression_statement(),
            }
        })
    }

    /// forStmt → "for" "(" ( varDecl | exprStmt | ";" ) expression? ";" expression? ")" statement
    ///
    /// Desugared here into `{ init; while (cond) { body; incr; } }`. A missing
    /// condition becomes `true`; a missing initializer or increment is
    /// simply left out.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.cursor.eat(TokenKind::Semicolon) {
            None
        } else if self.cursor.eat(TokenKind::Var) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor
            .expect(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.cursor.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }
        body = Stmt::While {
            condition: condition.unwrap_or(Expr::Literal(Literal::Bool(true))),
            body: Box::new(body),
        };
        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }
        Ok(body)
    }

    /// ifStmt → "if" "(" expression ")" statement ( "else" statement )?
    ///
    /// `else` binds to the nearest `if`.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let value = self.expression()?;
        self.cursor
            .expect(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    /// returnStmt → "return" expression? ";"
    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.cursor.previous().clone();
        if self.function_depth == 0 {
            self.report(ParseError::at(&keyword, ParseErrorKind::ReturnAtTopLevel));
        }

        let value = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor
            .expect(TokenKind::Semicolon, "Expect ';' after return value.")?;
        Ok(Stmt::Return { keyword, value })
    }

    /// whileStmt → "while" "(" expression ")" statement
    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { condition, body })
    }

    /// block → "{" declaration* "}"
    ///
    /// The opening brace has already been consumed.
    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        self.cursor
            .expect(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.cursor
            .expect(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }
}
