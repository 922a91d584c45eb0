//! Host <-> GPU pixel transfers.
//!
//! - `upload_tex`: host rows at any stride into a texture sub-rectangle
//! - `read_fbo_contents`: framebuffer rows back into host memory

pub mod format;
pub mod readback;
pub mod upload;

pub use format::bytes_per_pixel;
pub use readback::{RowOrder, read_fbo_contents};
pub use upload::{get_alignment, upload_tex};
