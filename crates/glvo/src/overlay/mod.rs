//! Immediate-mode overlay executor.
//!
//! Walks a [`DrawData`](glvo_drawlist::DrawData) frame and issues one indexed
//! draw per visible command, clipped with the scissor test. All global
//! context state the executor changes is captured up front and restored when
//! the frame ends.

mod config;
mod executor;
mod program;
mod shaders;
mod state;

pub use config::{ClipOrigin, OverlayConfig};
pub use executor::{OverlayRenderer, clip_to_scissor, ortho_projection};
pub use shaders::{ShaderVariant, default_glsl_version};
pub use state::{SavedState, StateGuard};
