//! Lox IR - tokens and syntax trees shared by every pipeline stage.
//!
//! ```text
//! source ──► lox_lexer::lex ──► Vec<Token>
//!                                   │
//!                                   ▼
//!                      lox_parse::parse ──► Vec<Stmt>
//!                                               │
//!                                               ▼
//!                                  lox_eval::Interpreter
//! ```
//!
//! Everything in this crate is plain data. Tokens are created by the lexer
//! and never mutated; syntax trees are created by the parser and only read
//! afterwards.

pub mod ast;
pub mod printer;
pub mod token;

pub use ast::{Expr, FunctionDecl, Stmt};
pub use printer::AstPrinter;
pub use token::{Literal, Token, TokenKind};
