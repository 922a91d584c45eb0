/// Context version as reported by the driver.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
    /// OpenGL ES (or WebGL) rather than desktop GL.
    pub is_embedded: bool,
}

impl GlVersion {
    #[inline]
    pub const fn desktop(major: u32, minor: u32) -> Self {
        Self { major, minor, is_embedded: false }
    }

    #[inline]
    pub const fn embedded(major: u32, minor: u32) -> Self {
        Self { major, minor, is_embedded: true }
    }

    #[inline]
    pub fn at_least(self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

/// Receives `(severity, message)` from the driver's debug output.
///
/// Drivers may invoke it from their own threads.
pub type DebugCallback = Box<dyn Fn(u32, &str) + Send + Sync + 'static>;

/// Driver entry points used by this crate.
///
/// Object names are plain `u32` GL names; `0` is the default (or "no")
/// object, exactly as in GL. Enumerants are the `glow` constants.
///
/// Every method mutates or queries state of the one context current on the
/// calling thread. Implementations are not expected to be thread-safe.
pub trait Gl {
    // ── context queries ───────────────────────────────────────────────────

    fn version(&self) -> GlVersion;

    /// Space-separated extension list.
    fn extensions(&self) -> String;

    fn get_error(&self) -> u32;

    fn get_integer(&self, pname: u32) -> i32;

    fn get_integer_v(&self, pname: u32, out: &mut [i32]);

    // ── fixed-function state ──────────────────────────────────────────────

    fn is_enabled(&self, cap: u32) -> bool;

    fn enable(&self, cap: u32);

    fn disable(&self, cap: u32);

    #[inline]
    fn set_enabled(&self, cap: u32, on: bool) {
        if on { self.enable(cap) } else { self.disable(cap) }
    }

    fn viewport(&self, x: i32, y: i32, w: i32, h: i32);

    fn scissor(&self, x: i32, y: i32, w: i32, h: i32);

    fn blend_equation(&self, mode: u32);

    fn blend_equation_separate(&self, mode_rgb: u32, mode_alpha: u32);

    fn blend_func(&self, src: u32, dst: u32);

    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32);

    fn pixel_store(&self, pname: u32, value: i32);

    // ── textures ──────────────────────────────────────────────────────────

    fn create_texture(&self) -> Result<u32, String>;

    fn delete_texture(&self, texture: u32);

    fn active_texture(&self, unit: u32);

    fn bind_texture(&self, target: u32, texture: u32);

    fn tex_parameter(&self, target: u32, pname: u32, value: i32);

    #[allow(clippy::too_many_arguments)]
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
    );

    #[allow(clippy::too_many_arguments)]
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
    );

    // ── framebuffers ──────────────────────────────────────────────────────

    fn bind_framebuffer(&self, target: u32, framebuffer: u32);

    fn read_buffer(&self, src: u32);

    #[allow(clippy::too_many_arguments)]
    fn read_pixels(&self, x: i32, y: i32, w: i32, h: i32, format: u32, ty: u32, dst: &mut [u8]);

    // ── buffers + vertex arrays ───────────────────────────────────────────

    fn create_buffer(&self) -> Result<u32, String>;

    fn delete_buffer(&self, buffer: u32);

    fn bind_buffer(&self, target: u32, buffer: u32);

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32);

    fn create_vertex_array(&self) -> Result<u32, String>;

    fn delete_vertex_array(&self, vao: u32);

    fn bind_vertex_array(&self, vao: u32);

    fn enable_vertex_attrib_array(&self, index: u32);

    fn disable_vertex_attrib_array(&self, index: u32);

    /// `VERTEX_ATTRIB_ARRAY_ENABLED` of `index` in the current vertex state.
    fn is_vertex_attrib_enabled(&self, index: u32) -> bool;

    #[allow(clippy::too_many_arguments)]
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    fn draw_arrays(&self, mode: u32, first: i32, count: i32);

    /// `offset` is a byte offset into the bound element array buffer.
    fn draw_elements(&self, mode: u32, count: i32, index_type: u32, offset: i32);

    // ── shaders ───────────────────────────────────────────────────────────

    fn create_shader(&self, kind: u32) -> Result<u32, String>;

    fn delete_shader(&self, shader: u32);

    fn shader_source(&self, shader: u32, source: &str);

    fn compile_shader(&self, shader: u32);

    fn shader_compile_status(&self, shader: u32) -> bool;

    fn shader_info_log(&self, shader: u32) -> String;

    fn create_program(&self) -> Result<u32, String>;

    fn delete_program(&self, program: u32);

    fn attach_shader(&self, program: u32, shader: u32);

    fn bind_attrib_location(&self, program: u32, index: u32, name: &str);

    fn link_program(&self, program: u32);

    fn program_link_status(&self, program: u32) -> bool;

    fn program_info_log(&self, program: u32) -> String;

    fn use_program(&self, program: u32);

    fn get_uniform_location(&self, program: u32, name: &str) -> Option<u32>;

    fn uniform_1_i32(&self, location: Option<u32>, value: i32);

    fn uniform_matrix_4(&self, location: Option<u32>, value: &[f32; 16]);

    // ── diagnostics ───────────────────────────────────────────────────────

    /// Installs `callback` as the driver debug-message sink.
    fn debug_message_callback(&mut self, callback: DebugCallback);
}
