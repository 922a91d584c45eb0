use anyhow::{Context, Result, anyhow};
use glvo_drawlist::{ClipRect, CmdList, DrawCmdKind, DrawData, DrawIdx, DrawVert, TextureId, Vec2};

use crate::device::Gl;
use crate::pixel::upload_tex;
use crate::render::{AttribKind, RenderCtx, VertexArray, VertexAttrib};

use super::program::{ATTRIB_NAMES, OverlayProgram};
use super::shaders::default_glsl_version;
use super::state::StateGuard;
use super::{ClipOrigin, OverlayConfig};

const OVERLAY_ATTRIBS: [VertexAttrib; 3] = [
    VertexAttrib::new(ATTRIB_NAMES[0], AttribKind::Float, 2, DrawVert::POS_OFFSET),
    VertexAttrib::new(ATTRIB_NAMES[1], AttribKind::Float, 2, DrawVert::UV_OFFSET),
    VertexAttrib::new(ATTRIB_NAMES[2], AttribKind::UnormByte, 4, DrawVert::COL_OFFSET),
];

const INDEX_SIZE: usize = std::mem::size_of::<DrawIdx>();

/// Draws overlay command lists on top of the current framebuffer.
///
/// GPU resources are created on the first frame and reused afterwards;
/// [`destroy`](Self::destroy) releases them. Every frame leaves the global
/// context state exactly as it found it, including the attribute enables of
/// indices 0..3 on contexts without vertex-array objects.
#[derive(Debug, Default)]
pub struct OverlayRenderer {
    config: OverlayConfig,

    program: Option<OverlayProgram>,
    vertex_array: VertexArray,
    index_buffer: u32,
    font_texture: Option<TextureId>,

    warned_resources: bool,
}

impl OverlayRenderer {
    pub fn new(config: OverlayConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[inline]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    #[inline]
    pub fn font_texture(&self) -> Option<TextureId> {
        self.font_texture
    }

    /// Renders one frame of overlay output.
    ///
    /// Returns without touching the context when `draw_data` is `None` or the
    /// framebuffer size is not positive.
    pub fn render<G: Gl + ?Sized>(&mut self, ctx: &RenderCtx<'_, G>, draw_data: Option<&DrawData>) {
        let Some(data) = draw_data else { return };
        let (fb_w, fb_h) = data.framebuffer_size();
        if fb_w <= 0 || fb_h <= 0 {
            return;
        }

        let gl = ctx.gl;
        let _guard = StateGuard::new(gl, &ctx.caps);

        if let Err(e) = self.ensure_resources(ctx) {
            if !self.warned_resources {
                log::error!("overlay disabled: {e:#}");
                self.warned_resources = true;
            }
            return;
        }
        let Some(program) = &self.program else { return };

        gl.enable(glow::BLEND);
        gl.blend_equation(glow::FUNC_ADD);
        gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
        gl.disable(glow::CULL_FACE);
        gl.disable(glow::DEPTH_TEST);
        gl.enable(glow::SCISSOR_TEST);
        gl.viewport(0, 0, fb_w, fb_h);

        gl.use_program(program.program);
        gl.uniform_1_i32(program.loc_texture, 0);
        gl.uniform_matrix_4(program.loc_proj, &ortho_projection(data.display_pos, data.display_size));

        if data.cmd_lists.is_empty() {
            return;
        }

        self.vertex_array.bind(gl);
        for list in &data.cmd_lists {
            self.render_list(gl, data, list, (fb_w, fb_h));
        }
        self.vertex_array.unbind(gl);
    }

    fn render_list<G: Gl + ?Sized>(&self, gl: &G, data: &DrawData, list: &CmdList, fb: (i32, i32)) {
        gl.bind_buffer(glow::ARRAY_BUFFER, self.vertex_array.buffer());
        gl.buffer_data(glow::ARRAY_BUFFER, bytemuck::cast_slice(list.vtx_buffer()), glow::STREAM_DRAW);
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, self.index_buffer);
        gl.buffer_data(glow::ELEMENT_ARRAY_BUFFER, bytemuck::cast_slice(list.idx_buffer()), glow::STREAM_DRAW);

        let idx_len = list.idx_buffer().len();
        let mut cursor = 0usize;
        for cmd in list.commands() {
            // Callbacks own no index range.
            let DrawCmdKind::Draw { texture } = cmd.kind else { continue };
            let first = cursor;
            cursor += cmd.elem_count as usize;

            if cmd.elem_count == 0 {
                continue;
            }
            let Some([x, y, w, h]) = clip_to_scissor(
                cmd.clip_rect,
                data.display_pos,
                data.framebuffer_scale,
                fb,
                self.config.clip_origin,
            ) else {
                continue;
            };
            if cursor > idx_len {
                log::warn!(
                    "overlay command reads indices {first}..{cursor} of a {idx_len}-index buffer; skipped"
                );
                continue;
            }

            gl.scissor(x, y, w, h);
            gl.bind_texture(glow::TEXTURE_2D, texture.0);
            gl.draw_elements(
                glow::TRIANGLES,
                cmd.elem_count as i32,
                glow::UNSIGNED_SHORT,
                (first * INDEX_SIZE) as i32,
            );
        }
    }

    fn ensure_resources<G: Gl + ?Sized>(&mut self, ctx: &RenderCtx<'_, G>) -> Result<()> {
        let gl = ctx.gl;
        if self.program.is_none() {
            let version = self
                .config
                .glsl_version
                .unwrap_or_else(|| default_glsl_version(gl.version()));
            self.program = Some(OverlayProgram::build(gl, version)?);
        }
        if !self.vertex_array.is_initialized() {
            self.vertex_array
                .init(ctx, DrawVert::STRIDE, &OVERLAY_ATTRIBS)
                .context("creating overlay vertex array")?;
        }
        if self.index_buffer == 0 {
            self.index_buffer = gl
                .create_buffer()
                .map_err(|e| anyhow!(e))
                .context("allocating overlay index buffer")?;
        }
        Ok(())
    }

    /// Uploads a tightly packed RGBA8 font atlas and returns its texture.
    ///
    /// Replaces (and deletes) a previously uploaded atlas. The 2-D texture
    /// binding of the active unit is preserved.
    ///
    /// # Panics
    /// Panics if `w` or `h` is not positive or `rgba` is shorter than
    /// `w * h * 4` bytes.
    pub fn upload_font_atlas<G: Gl + ?Sized>(
        &mut self,
        ctx: &RenderCtx<'_, G>,
        rgba: &[u8],
        w: i32,
        h: i32,
    ) -> Result<TextureId> {
        assert!(w > 0 && h > 0, "font atlas size {w}x{h}");
        let stride = w as usize * 4;
        assert!(rgba.len() >= stride * h as usize, "font atlas data too short");

        let gl = ctx.gl;
        let last = gl.get_integer(glow::TEXTURE_BINDING_2D) as u32;
        let tex = gl
            .create_texture()
            .map_err(|e| anyhow!(e))
            .context("allocating font atlas texture")?;

        gl.bind_texture(glow::TEXTURE_2D, tex);
        if ctx.caps.row_length {
            // Tight rows: drop any row length left by the caller.
            gl.pixel_store(glow::UNPACK_ROW_LENGTH, 0);
        }
        gl.tex_parameter(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
        gl.tex_parameter(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
        gl.tex_image_2d(glow::TEXTURE_2D, 0, glow::RGBA as i32, w, h, glow::RGBA, glow::UNSIGNED_BYTE, None);
        upload_tex(ctx, glow::TEXTURE_2D, glow::RGBA, glow::UNSIGNED_BYTE, rgba, stride, 0, 0, w, h);
        gl.bind_texture(glow::TEXTURE_2D, last);

        if let Some(old) = self.font_texture.replace(TextureId(tex)) {
            gl.delete_texture(old.0);
        }
        log::debug!("font atlas uploaded: {w}x{h} (texture {tex})");
        Ok(TextureId(tex))
    }

    /// Releases every GPU object. Safe to call repeatedly; the next
    /// [`render`](Self::render) recreates what it needs.
    pub fn destroy<G: Gl + ?Sized>(&mut self, gl: &G) {
        if let Some(program) = self.program.take() {
            program.destroy(gl);
        }
        self.vertex_array.uninit(gl);
        if self.index_buffer != 0 {
            gl.delete_buffer(self.index_buffer);
            self.index_buffer = 0;
        }
        if let Some(tex) = self.font_texture.take() {
            gl.delete_texture(tex.0);
        }
        self.warned_resources = false;
    }
}

/// Column-major orthographic projection mapping the display rectangle to
/// clip space with +Y down.
pub fn ortho_projection(display_pos: Vec2, display_size: Vec2) -> [f32; 16] {
    let (l, r) = (display_pos.x, display_pos.x + display_size.x);
    let (t, b) = (display_pos.y, display_pos.y + display_size.y);
    #[rustfmt::skip]
    let m = [
        2.0 / (r - l),     0.0,               0.0,  0.0,
        0.0,               2.0 / (t - b),     0.0,  0.0,
        0.0,               0.0,              -1.0,  0.0,
        (r + l) / (l - r), (t + b) / (b - t), 0.0,  1.0,
    ];
    m
}

/// Converts a clip rectangle in display units into a scissor box
/// `[x, y, w, h]` in framebuffer pixels.
///
/// Returns `None` when the rectangle is degenerate or lies entirely outside
/// `[0, fb_w) x [0, fb_h)`.
pub fn clip_to_scissor(
    clip: ClipRect,
    display_pos: Vec2,
    framebuffer_scale: Vec2,
    (fb_w, fb_h): (i32, i32),
    origin: ClipOrigin,
) -> Option<[i32; 4]> {
    let c = clip.relative_to(display_pos).scaled(framebuffer_scale);
    let (fw, fh) = (fb_w as f32, fb_h as f32);
    if c.is_degenerate() || !(c.x0 < fw && c.y0 < fh && c.x1 >= 0.0 && c.y1 >= 0.0) {
        return None;
    }

    let x0 = c.x0.max(0.0) as i32;
    let y0 = c.y0.max(0.0) as i32;
    let x1 = c.x1.min(fw) as i32;
    let y1 = c.y1.min(fh) as i32;
    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some(match origin {
        ClipOrigin::LowerLeft => [x0, fb_h - y1, x1 - x0, y1 - y0],
        ClipOrigin::UpperLeft => [x0, y0, x1 - x0, y1 - y0],
    })
}
