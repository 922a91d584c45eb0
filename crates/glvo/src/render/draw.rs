use glvo_drawlist::DrawData;

use crate::device::Gl;
use crate::overlay::OverlayRenderer;
use crate::render::{RenderCtx, VertexArray};

impl VertexArray {
    /// Draws `count` vertices starting at 0.
    ///
    /// When `vertices` is given, the buffer contents are replaced with its
    /// first `count * stride` bytes first.
    ///
    /// # Panics
    /// Panics if `vertices` is shorter than `count * stride`.
    pub fn draw<G: Gl + ?Sized>(&self, gl: &G, primitive: u32, vertices: Option<&[u8]>, count: i32) {
        if !self.is_initialized() || count <= 0 {
            return;
        }
        if let Some(vertices) = vertices {
            let bytes = count as usize * self.stride();
            assert!(
                vertices.len() >= bytes,
                "vertex data too short: {} bytes, {} vertices need {}",
                vertices.len(),
                count,
                bytes
            );
            gl.bind_buffer(glow::ARRAY_BUFFER, self.buffer());
            gl.buffer_data(glow::ARRAY_BUFFER, &vertices[..bytes], glow::STREAM_DRAW);
            gl.bind_buffer(glow::ARRAY_BUFFER, 0);
        }

        self.bind(gl);
        gl.draw_arrays(primitive, 0, count);
        self.unbind(gl);
    }
}

/// Draws the video geometry, then the overlay draw list on top of it.
#[allow(clippy::too_many_arguments)]
pub fn draw_frame<G: Gl + ?Sized>(
    ctx: &RenderCtx<'_, G>,
    video: &VertexArray,
    primitive: u32,
    vertices: Option<&[u8]>,
    count: i32,
    overlay: &mut OverlayRenderer,
    ui: Option<&DrawData>,
) {
    video.draw(ctx.gl, primitive, vertices, count);
    overlay.render(ctx, ui);
}
