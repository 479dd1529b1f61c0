//! Stack growth for deep grammar recursion.
//!
//! Rule resolution and tree rendering are plain recursive calls, one frame
//! (or a few) per nesting level of the input. A grammar such as
//! `expr ::= "(" expr ")" | atom` recurses once per parenthesis, so an
//! adversarial input can exhaust the native stack long before it exhausts
//! memory. Every recursive entry point wraps itself in
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow` allocates a new segment when
//!   the remaining stack drops below the red zone.
//! - **WASM targets**: passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
///
/// A single rule-resolution frame stays well under this, including the
/// regex search done by pattern terminals.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn parse_rule(&self, id: RuleId, cursor: &mut Cursor<'src>) -> Node<'src> {
///     ensure_sufficient_stack(|| match self.grammar.body(id) { ... })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: the runtime manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
