//! Chained lexical scopes.
//!
//! Each scope maps names to values and optionally points at the scope that
//! encloses it. Scopes are shared (`LocalScope` is `Rc<RefCell<_>>`) because
//! a closure keeps its defining scope alive after the block that created it
//! has finished, and several closures may write to the same scope.


use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use lox_ir::Token;
use rustc_hash::FxHashMap;

use crate::errors::{self, EvalResult};
use crate::Value;

/// A single-threaded, shared, interior-mutable handle.
///
/// All scope allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether two handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One scope of variable bindings.
#[derive(Default)]
pub struct Environment {
    values: FxHashMap<String, Value>,
    enclosing: Option<LocalScope<Environment>>,
}

impl Environment {
    /// A scope with no parent; used for globals.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enclosing(enclosing: LocalScope<Environment>) -> Self {
        Environment {
            values: FxHashMap::default(),
            enclosing: Some(enclosing),
        }
    }

    /// Bind `name` in this scope, replacing any binding of the same name here.
    /// Enclosing scopes are untouched.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_owned(), value);
    }

    /// Find the nearest binding of `name`, walking outward.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }
        match &self.enclosing {
            Some(parent) => parent.borrow().lookup(name),
            None => None,
        }
    }

    /// Like [`lookup`](Self::lookup), failing with an undefined-variable
    /// error reported at `name`.
    pub fn get(&self, name: &Token) -> EvalResult {
        self.lookup(&name.lexeme)
            .ok_or_else(|| errors::undefined_variable(name))
    }

    /// Overwrite the nearest existing binding of `name`.
    ///
    /// Never creates a binding: assigning to a name no scope defines is an
    /// undefined-variable error.
    pub fn assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        if let Some(slot) = self.values.get_mut(name.lexeme.as_str()) {
            *slot = value;
            return Ok(());
        }
        match &self.enclosing {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(errors::undefined_variable(name)),
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("enclosing", &self.enclosing.is_some())
            .finish()
    }
}
