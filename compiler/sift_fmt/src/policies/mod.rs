//! The bundled output formats.

mod json;
mod raw;
mod tree;

pub use json::{Json, JsonOptions};
pub use raw::RawText;
pub use tree::{FullTree, SimpleTree};
