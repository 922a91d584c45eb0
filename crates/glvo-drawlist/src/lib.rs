//! Overlay draw-list data model.
//!
//! An immediate-mode UI produces one [`DrawData`] per frame: a display
//! rectangle, a framebuffer scale and an ordered sequence of [`CmdList`]s.
//! Each command list carries its own vertex and index buffers plus the
//! [`DrawCmd`]s that consume consecutive ranges of the index buffer.
//!
//! This crate holds no GL code. The `glvo` overlay executor reads these
//! types for the duration of one frame and never retains them.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`vec2`] | `Vec2` |
//! | [`clip`] | `ClipRect` |
//! | [`vertex`] | `DrawVert`, `DrawIdx` |
//! | [`cmd`] | `DrawCmd`, `DrawCmdKind`, `TextureId`, `UserCallback` |
//! | [`list`] | `CmdList` |
//! | [`data`] | `DrawData` |

pub mod clip;
pub mod cmd;
pub mod data;
pub mod list;
pub mod vec2;
pub mod vertex;

pub use clip::ClipRect;
pub use cmd::{DrawCmd, DrawCmdKind, TextureId, UserCallback};
pub use data::DrawData;
pub use list::CmdList;
pub use vec2::Vec2;
pub use vertex::{DrawIdx, DrawVert};
