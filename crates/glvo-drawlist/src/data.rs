use crate::{CmdList, Vec2};

/// One frame of overlay output.
///
/// `display_pos` / `display_size` describe the display rectangle in the units
/// the producer laid out in; `framebuffer_scale` converts those units to
/// framebuffer pixels (e.g. 2.0 on a HiDPI surface).
#[derive(Debug, Clone)]
pub struct DrawData {
    pub display_pos: Vec2,
    pub display_size: Vec2,
    pub framebuffer_scale: Vec2,
    pub cmd_lists: Vec<CmdList>,
}

impl DrawData {
    /// Creates an empty frame with a framebuffer scale of 1.
    pub fn new(display_pos: Vec2, display_size: Vec2) -> Self {
        Self {
            display_pos,
            display_size,
            framebuffer_scale: Vec2::splat(1.0),
            cmd_lists: Vec::new(),
        }
    }

    #[inline]
    pub fn with_framebuffer_scale(mut self, scale: Vec2) -> Self {
        self.framebuffer_scale = scale;
        self
    }

    #[inline]
    pub fn push(&mut self, list: CmdList) {
        self.cmd_lists.push(list);
    }

    /// Framebuffer size in pixels, truncated toward zero.
    ///
    /// Non-positive or non-finite results mean there is nothing to render.
    pub fn framebuffer_size(&self) -> (i32, i32) {
        let size = self.display_size.scale(self.framebuffer_scale);
        if !size.is_finite() {
            return (0, 0);
        }
        (size.x as i32, size.y as i32)
    }
}
