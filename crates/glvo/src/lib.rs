//! glvo: GL video-output core.
//!
//! Resource and draw-submission layer for a video renderer running on an
//! OpenGL / OpenGL ES context owned by someone else. The crate never creates
//! a context; every call goes through the [`device::Gl`] trait on the thread
//! the context is current on.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`device`] | `Gl` driver trait, `GlowDriver`, capability probe, error + debug diagnostics, `Device` |
//! | [`pixel`] | strided texture uploads, framebuffer readback |
//! | [`render`] | `RenderCtx`, `VertexArray`, draw submission |
//! | [`overlay`] | overlay draw-list executor |
//! | [`logging`] | `env_logger` setup |

pub mod device;
pub mod logging;
pub mod overlay;
pub mod pixel;
pub mod render;

pub use glvo_drawlist as drawlist;
