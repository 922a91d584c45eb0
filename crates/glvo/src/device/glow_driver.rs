use std::num::NonZeroU32;

use glow::HasContext;

use super::{DebugCallback, Gl, GlVersion};

/// [`Gl`] implementation over a `glow` context.
///
/// Calls on objects named `0` that GL would reject (shader source, attach,
/// deletes, ...) are dropped here instead of being forwarded, since `glow`
/// handles cannot represent the zero name.
pub struct GlowDriver {
    gl: glow::Context,
}

impl GlowDriver {
    /// Wraps a loaded `glow` context.
    ///
    /// # Safety
    /// `gl` must belong to a context that is current on the calling thread
    /// for as long as the driver is used, and the driver must only be used on
    /// that thread.
    pub unsafe fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Returns the wrapped context.
    pub fn context(&self) -> &glow::Context {
        &self.gl
    }

    pub fn into_inner(self) -> glow::Context {
        self.gl
    }
}

#[inline]
fn name(n: u32) -> Option<NonZeroU32> {
    NonZeroU32::new(n)
}

#[inline]
fn texture(n: u32) -> Option<glow::Texture> {
    name(n).map(glow::NativeTexture)
}

#[inline]
fn buffer(n: u32) -> Option<glow::Buffer> {
    name(n).map(glow::NativeBuffer)
}

#[inline]
fn framebuffer(n: u32) -> Option<glow::Framebuffer> {
    name(n).map(glow::NativeFramebuffer)
}

#[inline]
fn vertex_array(n: u32) -> Option<glow::VertexArray> {
    name(n).map(glow::NativeVertexArray)
}

#[inline]
fn shader(n: u32) -> Option<glow::Shader> {
    name(n).map(glow::NativeShader)
}

#[inline]
fn program(n: u32) -> Option<glow::Program> {
    name(n).map(glow::NativeProgram)
}

#[inline]
fn uniform(location: Option<u32>) -> Option<glow::UniformLocation> {
    location.map(glow::NativeUniformLocation)
}

// SAFETY (all blocks below): `GlowDriver::new` requires the context to be
// current on this thread; arguments are forwarded unchanged and slices carry
// their own bounds.
impl Gl for GlowDriver {
    fn version(&self) -> GlVersion {
        let v = self.gl.version();
        GlVersion {
            major: v.major,
            minor: v.minor,
            is_embedded: v.is_embedded,
        }
    }

    fn extensions(&self) -> String {
        let mut list: Vec<&str> = self.gl.supported_extensions().iter().map(String::as_str).collect();
        list.sort_unstable();
        list.join(" ")
    }

    fn get_error(&self) -> u32 {
        unsafe { self.gl.get_error() }
    }

    fn get_integer(&self, pname: u32) -> i32 {
        unsafe { self.gl.get_parameter_i32(pname) }
    }

    fn get_integer_v(&self, pname: u32, out: &mut [i32]) {
        unsafe { self.gl.get_parameter_i32_slice(pname, out) }
    }

    fn is_enabled(&self, cap: u32) -> bool {
        unsafe { self.gl.is_enabled(cap) }
    }

    fn enable(&self, cap: u32) {
        unsafe { self.gl.enable(cap) }
    }

    fn disable(&self, cap: u32) {
        unsafe { self.gl.disable(cap) }
    }

    fn viewport(&self, x: i32, y: i32, w: i32, h: i32) {
        unsafe { self.gl.viewport(x, y, w, h) }
    }

    fn scissor(&self, x: i32, y: i32, w: i32, h: i32) {
        unsafe { self.gl.scissor(x, y, w, h) }
    }

    fn blend_equation(&self, mode: u32) {
        unsafe { self.gl.blend_equation(mode) }
    }

    fn blend_equation_separate(&self, mode_rgb: u32, mode_alpha: u32) {
        unsafe { self.gl.blend_equation_separate(mode_rgb, mode_alpha) }
    }

    fn blend_func(&self, src: u32, dst: u32) {
        unsafe { self.gl.blend_func(src, dst) }
    }

    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        unsafe { self.gl.blend_func_separate(src_rgb, dst_rgb, src_alpha, dst_alpha) }
    }

    fn pixel_store(&self, pname: u32, value: i32) {
        unsafe { self.gl.pixel_store_i32(pname, value) }
    }

    // ── textures ──────────────────────────────────────────────────────────

    fn create_texture(&self) -> Result<u32, String> {
        unsafe { self.gl.create_texture() }.map(|t| t.0.get())
    }

    fn delete_texture(&self, tex: u32) {
        if let Some(t) = texture(tex) {
            unsafe { self.gl.delete_texture(t) }
        }
    }

    fn active_texture(&self, unit: u32) {
        unsafe { self.gl.active_texture(unit) }
    }

    fn bind_texture(&self, target: u32, tex: u32) {
        unsafe { self.gl.bind_texture(target, texture(tex)) }
    }

    fn tex_parameter(&self, target: u32, pname: u32, value: i32) {
        unsafe { self.gl.tex_parameter_i32(target, pname, value) }
    }

    fn tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        w: i32,
        h: i32,
        format: u32,
        ty: u32,
        data: Option<&[u8]>,
    ) {
        unsafe {
            self.gl.tex_image_2d(
                target,
                level,
                internal_format,
                w,
                h,
                0,
                format,
                ty,
                glow::PixelUnpackData::Slice(data),
            )
        }
    }

    fn tex_sub_image_2d(
        &self,
        target: u32,
        level: i32,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        format: u32,
        ty: u32,
        data: &[u8],
    ) {
        unsafe {
            self.gl.tex_sub_image_2d(
                target,
                level,
                x,
                y,
                w,
                h,
                format,
                ty,
                glow::PixelUnpackData::Slice(Some(data)),
            )
        }
    }

    // ── framebuffers ──────────────────────────────────────────────────────

    fn bind_framebuffer(&self, target: u32, fbo: u32) {
        unsafe { self.gl.bind_framebuffer(target, framebuffer(fbo)) }
    }

    fn read_buffer(&self, src: u32) {
        unsafe { self.gl.read_buffer(src) }
    }

    fn read_pixels(&self, x: i32, y: i32, w: i32, h: i32, format: u32, ty: u32, dst: &mut [u8]) {
        unsafe {
            self.gl
                .read_pixels(x, y, w, h, format, ty, glow::PixelPackData::Slice(Some(dst)))
        }
    }

    // ── buffers + vertex arrays ───────────────────────────────────────────

    fn create_buffer(&self) -> Result<u32, String> {
        unsafe { self.gl.create_buffer() }.map(|b| b.0.get())
    }

    fn delete_buffer(&self, buf: u32) {
        if let Some(b) = buffer(buf) {
            unsafe { self.gl.delete_buffer(b) }
        }
    }

    fn bind_buffer(&self, target: u32, buf: u32) {
        unsafe { self.gl.bind_buffer(target, buffer(buf)) }
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        unsafe { self.gl.buffer_data_u8_slice(target, data, usage) }
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        unsafe { self.gl.create_vertex_array() }.map(|v| v.0.get())
    }

    fn delete_vertex_array(&self, vao: u32) {
        if let Some(v) = vertex_array(vao) {
            unsafe { self.gl.delete_vertex_array(v) }
        }
    }

    fn bind_vertex_array(&self, vao: u32) {
        unsafe { self.gl.bind_vertex_array(vertex_array(vao)) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(index) }
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.disable_vertex_attrib_array(index) }
    }

    fn is_vertex_attrib_enabled(&self, index: u32) -> bool {
        let mut v = [0.0f32; 4];
        unsafe {
            self.gl
                .get_vertex_attrib_parameter_f32_slice(index, glow::VERTEX_ATTRIB_ARRAY_ENABLED, &mut v)
        };
        v[0] != 0.0
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            self.gl
                .vertex_attrib_pointer_f32(index, size, ty, normalized, stride, offset)
        }
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        unsafe { self.gl.draw_arrays(mode, first, count) }
    }

    fn draw_elements(&self, mode: u32, count: i32, index_type: u32, offset: i32) {
        unsafe { self.gl.draw_elements(mode, count, index_type, offset) }
    }

    // ── shaders ───────────────────────────────────────────────────────────

    fn create_shader(&self, kind: u32) -> Result<u32, String> {
        unsafe { self.gl.create_shader(kind) }.map(|s| s.0.get())
    }

    fn delete_shader(&self, sh: u32) {
        if let Some(s) = shader(sh) {
            unsafe { self.gl.delete_shader(s) }
        }
    }

    fn shader_source(&self, sh: u32, source: &str) {
        if let Some(s) = shader(sh) {
            unsafe { self.gl.shader_source(s, source) }
        }
    }

    fn compile_shader(&self, sh: u32) {
        if let Some(s) = shader(sh) {
            unsafe { self.gl.compile_shader(s) }
        }
    }

    fn shader_compile_status(&self, sh: u32) -> bool {
        shader(sh).is_some_and(|s| unsafe { self.gl.get_shader_compile_status(s) })
    }

    fn shader_info_log(&self, sh: u32) -> String {
        shader(sh)
            .map(|s| unsafe { self.gl.get_shader_info_log(s) })
            .unwrap_or_default()
    }

    fn create_program(&self) -> Result<u32, String> {
        unsafe { self.gl.create_program() }.map(|p| p.0.get())
    }

    fn delete_program(&self, prog: u32) {
        if let Some(p) = program(prog) {
            unsafe { self.gl.delete_program(p) }
        }
    }

    fn attach_shader(&self, prog: u32, sh: u32) {
        if let (Some(p), Some(s)) = (program(prog), shader(sh)) {
            unsafe { self.gl.attach_shader(p, s) }
        }
    }

    fn bind_attrib_location(&self, prog: u32, index: u32, attrib: &str) {
        if let Some(p) = program(prog) {
            unsafe { self.gl.bind_attrib_location(p, index, attrib) }
        }
    }

    fn link_program(&self, prog: u32) {
        if let Some(p) = program(prog) {
            unsafe { self.gl.link_program(p) }
        }
    }

    fn program_link_status(&self, prog: u32) -> bool {
        program(prog).is_some_and(|p| unsafe { self.gl.get_program_link_status(p) })
    }

    fn program_info_log(&self, prog: u32) -> String {
        program(prog)
            .map(|p| unsafe { self.gl.get_program_info_log(p) })
            .unwrap_or_default()
    }

    fn use_program(&self, prog: u32) {
        unsafe { self.gl.use_program(program(prog)) }
    }

    fn get_uniform_location(&self, prog: u32, uniform_name: &str) -> Option<u32> {
        let p = program(prog)?;
        unsafe { self.gl.get_uniform_location(p, uniform_name) }.map(|l| l.0)
    }

    fn uniform_1_i32(&self, location: Option<u32>, value: i32) {
        unsafe { self.gl.uniform_1_i32(uniform(location).as_ref(), value) }
    }

    fn uniform_matrix_4(&self, location: Option<u32>, value: &[f32; 16]) {
        unsafe {
            self.gl
                .uniform_matrix_4_f32_slice(uniform(location).as_ref(), false, value)
        }
    }

    // ── diagnostics ───────────────────────────────────────────────────────

    fn debug_message_callback(&mut self, callback: DebugCallback) {
        unsafe {
            self.gl
                .debug_message_callback(move |_source, _ty, _id, severity, message: &str| {
                    callback(severity, message)
                })
        }
    }
}
