use crate::device::{Capabilities, Gl};

use super::program::ATTRIB_NAMES;

/// Global context state the overlay executor overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedState {
    pub active_texture: u32,
    pub program: u32,
    /// 2-D texture bound on unit 0.
    pub texture: u32,
    pub array_buffer: u32,
    pub element_buffer: u32,
    /// `None` when the context has no vertex-array objects.
    pub vertex_array: Option<u32>,
    /// Enable flags of the overlay's attribute indices. Only captured
    /// without vertex-array objects, where they are global state.
    pub vertex_attribs: Option<[bool; ATTRIB_NAMES.len()]>,
    pub viewport: [i32; 4],
    pub scissor: [i32; 4],
    /// src rgb, dst rgb, src alpha, dst alpha.
    pub blend_func: [u32; 4],
    /// rgb, alpha.
    pub blend_equation: [u32; 2],
    pub blend: bool,
    pub cull_face: bool,
    pub depth_test: bool,
    pub scissor_test: bool,
}

impl SavedState {
    /// Captures the current state.
    ///
    /// Leaves texture unit 0 active: the texture binding is read from unit 0
    /// because that is the unit the overlay draws with.
    pub fn capture<G: Gl + ?Sized>(gl: &G, caps: &Capabilities) -> Self {
        let active_texture = gl.get_integer(glow::ACTIVE_TEXTURE) as u32;
        gl.active_texture(glow::TEXTURE0);

        let int = |pname: u32| gl.get_integer(pname) as u32;
        let mut viewport = [0; 4];
        let mut scissor = [0; 4];
        gl.get_integer_v(glow::VIEWPORT, &mut viewport);
        gl.get_integer_v(glow::SCISSOR_BOX, &mut scissor);

        Self {
            active_texture,
            program: int(glow::CURRENT_PROGRAM),
            texture: int(glow::TEXTURE_BINDING_2D),
            array_buffer: int(glow::ARRAY_BUFFER_BINDING),
            element_buffer: int(glow::ELEMENT_ARRAY_BUFFER_BINDING),
            vertex_array: caps.vertex_array_objects.then(|| int(glow::VERTEX_ARRAY_BINDING)),
            vertex_attribs: (!caps.vertex_array_objects)
                .then(|| std::array::from_fn(|i| gl.is_vertex_attrib_enabled(i as u32))),
            viewport,
            scissor,
            blend_func: [
                int(glow::BLEND_SRC_RGB),
                int(glow::BLEND_DST_RGB),
                int(glow::BLEND_SRC_ALPHA),
                int(glow::BLEND_DST_ALPHA),
            ],
            blend_equation: [int(glow::BLEND_EQUATION_RGB), int(glow::BLEND_EQUATION_ALPHA)],
            blend: gl.is_enabled(glow::BLEND),
            cull_face: gl.is_enabled(glow::CULL_FACE),
            depth_test: gl.is_enabled(glow::DEPTH_TEST),
            scissor_test: gl.is_enabled(glow::SCISSOR_TEST),
        }
    }

    /// Writes the captured state back.
    ///
    /// The element buffer is restored after the vertex array because it is
    /// part of vertex-array state.
    pub fn restore<G: Gl + ?Sized>(&self, gl: &G) {
        gl.use_program(self.program);
        gl.bind_texture(glow::TEXTURE_2D, self.texture);
        gl.active_texture(self.active_texture);
        if let Some(vao) = self.vertex_array {
            gl.bind_vertex_array(vao);
        }
        gl.bind_buffer(glow::ARRAY_BUFFER, self.array_buffer);
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, self.element_buffer);
        if let Some(enabled) = self.vertex_attribs {
            for (index, on) in enabled.into_iter().enumerate() {
                if on {
                    gl.enable_vertex_attrib_array(index as u32);
                } else {
                    gl.disable_vertex_attrib_array(index as u32);
                }
            }
        }

        let [eq_rgb, eq_alpha] = self.blend_equation;
        gl.blend_equation_separate(eq_rgb, eq_alpha);
        let [src_rgb, dst_rgb, src_alpha, dst_alpha] = self.blend_func;
        gl.blend_func_separate(src_rgb, dst_rgb, src_alpha, dst_alpha);

        gl.set_enabled(glow::BLEND, self.blend);
        gl.set_enabled(glow::CULL_FACE, self.cull_face);
        gl.set_enabled(glow::DEPTH_TEST, self.depth_test);
        gl.set_enabled(glow::SCISSOR_TEST, self.scissor_test);

        let [x, y, w, h] = self.viewport;
        gl.viewport(x, y, w, h);
        let [x, y, w, h] = self.scissor;
        gl.scissor(x, y, w, h);
    }
}

/// Restores [`SavedState`] when dropped.
pub struct StateGuard<'a, G: Gl + ?Sized> {
    gl: &'a G,
    saved: SavedState,
}

impl<'a, G: Gl + ?Sized> StateGuard<'a, G> {
    pub fn new(gl: &'a G, caps: &Capabilities) -> Self {
        let saved = SavedState::capture(gl, caps);
        Self { gl, saved }
    }

    #[inline]
    pub fn saved(&self) -> &SavedState {
        &self.saved
    }
}

impl<G: Gl + ?Sized> Drop for StateGuard<'_, G> {
    fn drop(&mut self) {
        self.saved.restore(self.gl);
    }
}
