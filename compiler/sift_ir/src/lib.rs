//! sift IR - parse-tree data model
//!
//! This crate contains the values every other sift crate passes around:
//! - [`Position`]: ordered byte offsets into the input
//! - [`Name`] + [`StringInterner`]: rule names and custom failure messages
//! - [`Bound`]: repetition limits for sequence items
//! - [`ErrorTag`] + [`FailureKind`]: the closed set of failure conditions
//! - [`Node`]: the parse tree produced by the rule engine
//!
//! # Design Philosophy
//!
//! - **Failures are values**: a rule never returns `Err`; it returns a
//!   rejected [`Node`] that carries its position so callers can rank it.
//! - **Single ownership**: a list owns its children and an error owns the
//!   partial attempt it wraps. Losing alternatives are dropped where they lose.
//! - **Borrowed text**: leaves borrow matched text from the input (`Node<'src>`).

mod bound;
mod error_tag;
mod interner;
mod name;
mod node;
mod position;

pub use bound::Bound;
pub use error_tag::{ErrorTag, FailureKind};
pub use interner::StringInterner;
pub use name::Name;
pub use node::{Node, NodeKind};
pub use position::Position;
