//! Stack growth for the recursive stages of the interpreter.
//!
//! Both the recursive-descent parser and the tree-walking evaluator recurse
//! once per nesting level of the source program, and the evaluator also
//! recurses once per Lox call frame. Wrapping those entry points in
//! [`ensure_sufficient_stack`] lets a deeply nested expression or a deep
//! (but finite) Lox recursion run instead of aborting the host process.
//!
//! - **Native targets**: `stacker` allocates a fresh segment when the
//!   remaining stack drops below the red zone.
//! - **WASM targets**: plain call.

/// Grow the stack when less than this much remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version - call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
