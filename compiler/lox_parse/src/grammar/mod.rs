//! Grammar productions.
//!
//! Each module extends `Parser` with the methods for one part of the
//! grammar:
//!
//! - [`expr`]: the precedence ladder from assignment down to primary
//! - [`stmt`]: declarations, statements, and `for` desugaring

mod expr;
mod stmt;
