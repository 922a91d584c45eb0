//! Vertex layout + draw submission.
//!
//! Convention:
//! - attribute `n` of a layout is bound to location `n`
//! - every bind is paired with an unbind inside the same call

mod ctx;
mod draw;
mod vao;

pub use ctx::RenderCtx;
pub use draw::draw_frame;
pub use vao::{AttribKind, VertexArray, VertexAttrib};
