//! Parse-tree rendering.
//!
//! One generic walk ([`Renderer`]) visits a [`Node`](sift_ir::Node) tree
//! and calls the extension points of a [`RenderPolicy`]; each policy turns
//! those calls into one output format:
//!
//! - [`RawText`]: the consumed input, reassembled
//! - [`SimpleTree`]: an indented outline of matched text
//! - [`FullTree`]: the outline annotated with rule names and indices
//! - [`Json`]: one object per node

mod escape;
mod policies;
mod policy;
mod render;
mod sink;
mod theme;

pub use escape::EscapeStyle;
pub use policies::{FullTree, Json, JsonOptions, RawText, SimpleTree};
pub use policy::{RenderOptions, RenderPolicy};
pub use render::Renderer;
pub use sink::Sink;
pub use theme::{ColorMode, Theme};
