//! Software [`Gl`] used by the unit tests.
//!
//! Models the parts of GL semantics the crate relies on: unpack/pack row
//! addressing (alignment + row length), per-unit texture bindings, per-VAO
//! attribute and element-buffer state, framebuffer images, shader/program
//! status and a log of transfer and draw calls.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use super::{DebugCallback, Gl, GlVersion};
use crate::pixel::bytes_per_pixel;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AttribPointer {
    pub size: i32,
    pub ty: u32,
    pub normalized: bool,
    pub stride: i32,
    pub offset: i32,
    pub buffer: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct VaoState {
    pub enabled: BTreeSet<u32>,
    pub pointers: BTreeMap<u32, AttribPointer>,
    pub element_buffer: u32,
}

/// Tightly packed image, row 0 at the bottom (GL convention).
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Image {
    pub width: i32,
    pub height: i32,
    pub bpp: usize,
    pub data: Vec<u8>,
}

impl Image {
    pub fn new(width: i32, height: i32, bpp: usize) -> Self {
        Self { width, height, bpp, data: vec![0; width as usize * height as usize * bpp] }
    }

    /// Image whose byte at `(x, y, c)` is derived from its coordinates.
    pub fn pattern(width: i32, height: i32, bpp: usize) -> Self {
        let mut img = Self::new(width, height, bpp);
        for (i, b) in img.data.iter_mut().enumerate() {
            *b = (i * 7 + 3) as u8;
        }
        img
    }

    pub fn row(&self, y: i32) -> &[u8] {
        let len = self.width as usize * self.bpp;
        let start = y as usize * len;
        &self.data[start..start + len]
    }

    fn row_mut(&mut self, y: i32) -> &mut [u8] {
        let len = self.width as usize * self.bpp;
        let start = y as usize * len;
        &mut self.data[start..start + len]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    TexSubImage { x: i32, y: i32, w: i32, h: i32 },
    ReadPixels { x: i32, y: i32, w: i32, h: i32 },
    DrawArrays { mode: u32, first: i32, count: i32, enabled: BTreeSet<u32> },
    DrawElements {
        mode: u32,
        count: i32,
        index_type: u32,
        offset: i32,
        texture: u32,
        scissor: [i32; 4],
    },
}

/// Context-global state visible to callers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Snapshot {
    pub active_texture: u32,
    pub texture_units: BTreeMap<u32, u32>,
    pub program: u32,
    pub array_buffer: u32,
    pub vertex_array: u32,
    pub vao: VaoState,
    pub framebuffer: u32,
    pub viewport: [i32; 4],
    pub scissor: [i32; 4],
    pub enabled: BTreeSet<u32>,
    pub blend_equation: (u32, u32),
    pub blend_func: [u32; 4],
    pub unpack_alignment: i32,
    pub unpack_row_length: i32,
    pub pack_alignment: i32,
}

#[derive(Debug, Default)]
struct ShaderObj {
    source: String,
    compiled: bool,
}

#[derive(Debug, Default)]
struct ProgramObj {
    shaders: Vec<u32>,
    attribs: BTreeMap<String, u32>,
    uniforms: BTreeMap<String, u32>,
    linked: bool,
}

#[derive(Debug)]
struct State {
    next_name: u32,

    textures: HashMap<u32, Image>,
    texture_units: BTreeMap<u32, u32>,
    active_texture: u32,

    buffers: HashMap<u32, Vec<u8>>,
    array_buffer: u32,

    vaos: HashMap<u32, VaoState>,
    vertex_array: u32,

    framebuffers: HashMap<u32, Image>,
    framebuffer: u32,
    read_buffer: u32,

    shaders: HashMap<u32, ShaderObj>,
    programs: HashMap<u32, ProgramObj>,
    program: u32,
    uniforms: HashMap<(u32, u32), Vec<f32>>,

    viewport: [i32; 4],
    scissor: [i32; 4],
    enabled: BTreeSet<u32>,
    blend_equation: (u32, u32),
    blend_func: [u32; 4],

    unpack_alignment: i32,
    unpack_row_length: i32,
    pack_alignment: i32,

    errors: VecDeque<u32>,
    calls: Vec<Call>,
}

impl Default for State {
    fn default() -> Self {
        let mut vaos = HashMap::new();
        vaos.insert(0, VaoState::default());
        Self {
            next_name: 1,
            textures: HashMap::new(),
            texture_units: BTreeMap::new(),
            active_texture: glow::TEXTURE0,
            buffers: HashMap::new(),
            array_buffer: 0,
            vaos,
            vertex_array: 0,
            framebuffers: HashMap::new(),
            framebuffer: 0,
            read_buffer: glow::BACK,
            shaders: HashMap::new(),
            programs: HashMap::new(),
            program: 0,
            uniforms: HashMap::new(),
            viewport: [0, 0, 0, 0],
            scissor: [0, 0, 0, 0],
            enabled: BTreeSet::new(),
            blend_equation: (glow::FUNC_ADD, glow::FUNC_ADD),
            blend_func: [glow::ONE, glow::ZERO, glow::ONE, glow::ZERO],
            unpack_alignment: 4,
            unpack_row_length: 0,
            pack_alignment: 4,
            errors: VecDeque::new(),
            calls: Vec::new(),
        }
    }
}

impl State {
    fn alloc(&mut self) -> u32 {
        let n = self.next_name;
        self.next_name += 1;
        n
    }

    fn bound_texture(&self) -> u32 {
        self.texture_units.get(&self.active_texture).copied().unwrap_or(0)
    }

    fn vao(&self) -> &VaoState {
        &self.vaos[&self.vertex_array]
    }

    fn vao_mut(&mut self) -> &mut VaoState {
        self.vaos.get_mut(&self.vertex_array).expect("bound vertex array exists")
    }

    fn bound_buffer(&self, target: u32) -> u32 {
        match target {
            glow::ARRAY_BUFFER => self.array_buffer,
            glow::ELEMENT_ARRAY_BUFFER => self.vao().element_buffer,
            _ => 0,
        }
    }

    fn error(&mut self, code: u32) {
        self.errors.push_back(code);
    }
}

#[inline]
fn align_up(n: usize, alignment: usize) -> usize {
    n.div_ceil(alignment) * alignment
}

/// Copies `h` rows of `w` pixels from `data` (addressed with the unpack
/// parameters) into `img` at `(x, y)`.
#[allow(clippy::too_many_arguments)]
fn unpack_into(
    img: &mut Image,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    bpp: usize,
    row_length: i32,
    alignment: i32,
    data: &[u8],
) {
    assert!(x >= 0 && y >= 0 && x + w <= img.width && y + h <= img.height, "upload out of bounds");
    let row_pixels = if row_length > 0 { row_length } else { w } as usize;
    let src_row_bytes = align_up(row_pixels * bpp, alignment as usize);
    let copy = w as usize * bpp;
    for r in 0..h {
        let src = &data[r as usize * src_row_bytes..][..copy];
        let dst_x = x as usize * bpp;
        img.row_mut(y + r)[dst_x..dst_x + copy].copy_from_slice(src);
    }
}

pub(crate) struct FakeGl {
    version: GlVersion,
    extensions: String,
    state: RefCell<State>,
    debug: Option<DebugCallback>,
    fail_alloc: Cell<bool>,
    fail_compile: Cell<bool>,
}

impl FakeGl {
    /// Desktop GL 3.3 context.
    pub fn new() -> Self {
        Self::with_version(GlVersion::desktop(3, 3), "")
    }

    pub fn with_version(version: GlVersion, extensions: &str) -> Self {
        Self {
            version,
            extensions: extensions.to_string(),
            state: RefCell::new(State::default()),
            debug: None,
            fail_alloc: Cell::new(false),
            fail_compile: Cell::new(false),
        }
    }

    pub fn set_fail_alloc(&self, fail: bool) {
        self.fail_alloc.set(fail);
    }

    pub fn set_fail_compile(&self, fail: bool) {
        self.fail_compile.set(fail);
    }

    pub fn push_error(&self, code: u32) {
        self.state.borrow_mut().error(code);
    }

    pub fn pending_errors(&self) -> usize {
        self.state.borrow().errors.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        let st = self.state.borrow();
        Snapshot {
            active_texture: st.active_texture,
            texture_units: st.texture_units.clone(),
            program: st.program,
            array_buffer: st.array_buffer,
            vertex_array: st.vertex_array,
            vao: st.vao().clone(),
            framebuffer: st.framebuffer,
            viewport: st.viewport,
            scissor: st.scissor,
            enabled: st.enabled.clone(),
            blend_equation: st.blend_equation,
            blend_func: st.blend_func,
            unpack_alignment: st.unpack_alignment,
            unpack_row_length: st.unpack_row_length,
            pack_alignment: st.pack_alignment,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn draw_elements_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::DrawElements { .. }))
            .collect()
    }

    pub fn texture_image(&self, texture: u32) -> Image {
        self.state.borrow().textures[&texture].clone()
    }

    pub fn set_framebuffer_image(&self, fbo: u32, image: Image) {
        self.state.borrow_mut().framebuffers.insert(fbo, image);
    }

    pub fn read_buffer_target(&self) -> u32 {
        self.state.borrow().read_buffer
    }

    pub fn buffer_contents(&self, buffer: u32) -> Vec<u8> {
        self.state.borrow().buffers.get(&buffer).cloned().unwrap_or_default()
    }

    pub fn vao_state(&self, vao: u32) -> VaoState {
        self.state.borrow().vaos[&vao].clone()
    }

    pub fn uniform_value(&self, program: u32, location: u32) -> Option<Vec<f32>> {
        self.state.borrow().uniforms.get(&(program, location)).cloned()
    }

    pub fn shader_source_of(&self, shader: u32) -> String {
        self.state.borrow().shaders.get(&shader).map(|s| s.source.clone()).unwrap_or_default()
    }

    pub fn attached_shaders(&self, program: u32) -> Vec<u32> {
        self.state.borrow().programs.get(&program).map(|p| p.shaders.clone()).unwrap_or_default()
    }

    pub fn attrib_locations(&self, program: u32) -> BTreeMap<String, u32> {
        self.state.borrow().programs.get(&program).map(|p| p.attribs.clone()).unwrap_or_default()
    }

    /// Number of live textures, buffers, vertex arrays, shaders and programs.
    pub fn live_objects(&self) -> usize {
        let st = self.state.borrow();
        st.textures.len() + st.buffers.len() + st.vaos.len() - 1 + st.shaders.len() + st.programs.len()
    }

    /// Emits a driver debug message through the installed callback.
    pub fn emit_debug(&self, severity: u32, message: &str) {
        if let Some(cb) = &self.debug {
            cb(severity, message);
        }
    }

    pub fn has_debug_callback(&self) -> bool {
        self.debug.is_some()
    }

    fn create(&self, insert: impl FnOnce(&mut State, u32)) -> Result<u32, String> {
        if self.fail_alloc.get() {
            return Err("out of memory".to_string());
        }
        let mut st = self.state.borrow_mut();
        let n = st.alloc();
        insert(&mut st, n);
        Ok(n)
    }
}

impl Gl for FakeGl {
    fn version(&self) -> GlVersion {
        self.version
    }

    fn extensions(&self) -> String {
        self.extensions.clone()
    }

    fn get_error(&self) -> u32 {
        self.state.borrow_mut().errors.pop_front().unwrap_or(glow::NO_ERROR)
    }

    fn get_integer(&self, pname: u32) -> i32 {
        let mut st = self.state.borrow_mut();
        let v = match pname {
            glow::ACTIVE_TEXTURE => st.active_texture,
            glow::CURRENT_PROGRAM => st.program,
            glow::TEXTURE_BINDING_2D => st.bound_texture(),
            glow::ARRAY_BUFFER_BINDING => st.array_buffer,
            glow::ELEMENT_ARRAY_BUFFER_BINDING => st.vao().element_buffer,
            glow::VERTEX_ARRAY_BINDING => st.vertex_array,
            glow::FRAMEBUFFER_BINDING => st.framebuffer,
            glow::BLEND_EQUATION_RGB => st.blend_equation.0,
            glow::BLEND_EQUATION_ALPHA => st.blend_equation.1,
            glow::BLEND_SRC_RGB => st.blend_func[0],
            glow::BLEND_DST_RGB => st.blend_func[1],
            glow::BLEND_SRC_ALPHA => st.blend_func[2],
            glow::BLEND_DST_ALPHA => st.blend_func[3],
            glow::UNPACK_ALIGNMENT => return st.unpack_alignment,
            glow::UNPACK_ROW_LENGTH => return st.unpack_row_length,
            glow::PACK_ALIGNMENT => return st.pack_alignment,
            _ => {
                st.error(glow::INVALID_ENUM);
                0
            }
        };
        v as i32
    }

    fn get_integer_v(&self, pname: u32, out: &mut [i32]) {
        let mut st = self.state.borrow_mut();
        match pname {
            glow::VIEWPORT => out[..4].copy_from_slice(&st.viewport),
            glow::SCISSOR_BOX => out[..4].copy_from_slice(&st.scissor),
            _ => st.error(glow::INVALID_ENUM),
        }
    }

    fn is_enabled(&self, cap: u32) -> bool {
        self.state.borrow().enabled.contains(&cap)
    }

    fn enable(&self, cap: u32) {
        self.state.borrow_mut().enabled.insert(cap);
    }

    fn disable(&self, cap: u32) {
        self.state.borrow_mut().enabled.remove(&cap);
    }

    fn viewport(&self, x: i32, y: i32, w: i32, h: i32) {
        self.state.borrow_mut().viewport = [x, y, w, h];
    }

    fn scissor(&self, x: i32, y: i32, w: i32, h: i32) {
        self.state.borrow_mut().scissor = [x, y, w, h];
    }

    fn blend_equation(&self, mode: u32) {
        self.state.borrow_mut().blend_equation = (mode, mode);
    }

    fn blend_equation_separate(&self, mode_rgb: u32, mode_alpha: u32) {
        self.state.borrow_mut().blend_equation = (mode_rgb, mode_alpha);
    }

    fn blend_func(&self, src: u32, dst: u32) {
        self.state.borrow_mut().blend_func = [src, dst, src, dst];
    }

    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        self.state.borrow_mut().blend_func = [src_rgb, dst_rgb, src_alpha, dst_alpha];
    }

    fn pixel_store(&self, pname: u32, value: i32) {
        let mut st = self.state.borrow_mut();
        match pname {
            glow::UNPACK_ALIGNMENT => st.unpack_alignment = value,
            glow::UNPACK_ROW_LENGTH => st.unpack_row_length = value,
            glow::PACK_ALIGNMENT => st.pack_alignment = value,
            _ => st.error(glow::INVALID_ENUM),
        }
    }

    // ── textures ──────────────────────────────────────────────────────────

    fn create_texture(&self) -> Result<u32, String> {
        self.create(|st, n| {
            st.textures.insert(n, Image::default());
        })
    }

    fn delete_texture(&self, texture: u32) {
        let mut st = self.state.borrow_mut();
        st.textures.remove(&texture);
        st.texture_units.retain(|_, bound| *bound != texture);
    }

    fn active_texture(&self, unit: u32) {
        self.state.borrow_mut().active_texture = unit;
    }

    fn bind_texture(&self, target: u32, texture: u32) {
        assert_eq!(target, glow::TEXTURE_2D);
        let mut st = self.state.borrow_mut();
        let unit = st.active_texture;
        // Binding 0 clears the unit.
        if texture == 0 {
            st.texture_units.remove(&unit);
        } else {
            st.texture_units.insert(unit, texture);
        }
    }

    fn tex_parameter(&self, _target: u32, _pname: u32, _value: i32) {}

    fn tex_image_2d(
        &self,
        _target: u32,
        _level: i32,
        _internal_format: i32,
        w: i32,
        h: i32,
        format: u32,
        ty: u32,
        data: Option<&[u8]>,
    ) {
        let mut st = self.state.borrow_mut();
        let tex = st.bound_texture();
        let bpp = bytes_per_pixel(format, ty);
        let mut img = Image::new(w, h, bpp);
        if let Some(data) = data {
            unpack_into(&mut img, 0, 0, w, h, bpp, st.unpack_row_length, st.unpack_alignment, data);
        }
        st.textures.insert(tex, img);
    }

    fn tex_sub_image_2d(
        &self,
        _target: u32,
        _level: i32,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        format: u32,
        ty: u32,
        data: &[u8],
    ) {
        let mut st = self.state.borrow_mut();
        let tex = st.bound_texture();
        let (row_length, alignment) = (st.unpack_row_length, st.unpack_alignment);
        let img = st.textures.get_mut(&tex).expect("texture bound for upload");
        let bpp = bytes_per_pixel(format, ty);
        assert_eq!(bpp, img.bpp, "format does not match texture storage");
        unpack_into(img, x, y, w, h, bpp, row_length, alignment, data);
        st.calls.push(Call::TexSubImage { x, y, w, h });
    }

    // ── framebuffers ──────────────────────────────────────────────────────

    fn bind_framebuffer(&self, _target: u32, framebuffer: u32) {
        self.state.borrow_mut().framebuffer = framebuffer;
    }

    fn read_buffer(&self, src: u32) {
        self.state.borrow_mut().read_buffer = src;
    }

    fn read_pixels(&self, x: i32, y: i32, w: i32, h: i32, format: u32, ty: u32, dst: &mut [u8]) {
        let mut st = self.state.borrow_mut();
        let bpp = bytes_per_pixel(format, ty);
        let row_bytes = align_up(w as usize * bpp, st.pack_alignment as usize);
        let img = &st.framebuffers[&st.framebuffer];
        assert_eq!(bpp, img.bpp, "format does not match framebuffer");
        for r in 0..h {
            let src = &img.row(y + r)[x as usize * bpp..][..w as usize * bpp];
            dst[r as usize * row_bytes..][..src.len()].copy_from_slice(src);
        }
        st.calls.push(Call::ReadPixels { x, y, w, h });
    }

    // ── buffers + vertex arrays ───────────────────────────────────────────

    fn create_buffer(&self) -> Result<u32, String> {
        self.create(|st, n| {
            st.buffers.insert(n, Vec::new());
        })
    }

    fn delete_buffer(&self, buffer: u32) {
        let mut st = self.state.borrow_mut();
        st.buffers.remove(&buffer);
        if st.array_buffer == buffer {
            st.array_buffer = 0;
        }
    }

    fn bind_buffer(&self, target: u32, buffer: u32) {
        let mut st = self.state.borrow_mut();
        match target {
            glow::ARRAY_BUFFER => st.array_buffer = buffer,
            glow::ELEMENT_ARRAY_BUFFER => st.vao_mut().element_buffer = buffer,
            _ => st.error(glow::INVALID_ENUM),
        }
    }

    fn buffer_data(&self, target: u32, data: &[u8], _usage: u32) {
        let mut st = self.state.borrow_mut();
        let bound = st.bound_buffer(target);
        match st.buffers.get_mut(&bound) {
            Some(contents) => *contents = data.to_vec(),
            None => st.error(glow::INVALID_OPERATION),
        }
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        self.create(|st, n| {
            st.vaos.insert(n, VaoState::default());
        })
    }

    fn delete_vertex_array(&self, vao: u32) {
        if vao == 0 {
            return;
        }
        let mut st = self.state.borrow_mut();
        st.vaos.remove(&vao);
        if st.vertex_array == vao {
            st.vertex_array = 0;
        }
    }

    fn bind_vertex_array(&self, vao: u32) {
        let mut st = self.state.borrow_mut();
        if st.vaos.contains_key(&vao) {
            st.vertex_array = vao;
        } else {
            st.error(glow::INVALID_OPERATION);
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.state.borrow_mut().vao_mut().enabled.insert(index);
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        self.state.borrow_mut().vao_mut().enabled.remove(&index);
    }

    fn is_vertex_attrib_enabled(&self, index: u32) -> bool {
        self.state.borrow().vao().enabled.contains(&index)
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
        let mut st = self.state.borrow_mut();
        let buffer = st.array_buffer;
        st.vao_mut().pointers.insert(
            index,
            AttribPointer { size, ty, normalized, stride, offset, buffer },
        );
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        let mut st = self.state.borrow_mut();
        let enabled = st.vao().enabled.clone();
        st.calls.push(Call::DrawArrays { mode, first, count, enabled });
    }

    fn draw_elements(&self, mode: u32, count: i32, index_type: u32, offset: i32) {
        let mut st = self.state.borrow_mut();
        let texture = st.bound_texture();
        let scissor = st.scissor;
        st.calls.push(Call::DrawElements { mode, count, index_type, offset, texture, scissor });
    }

    // ── shaders ───────────────────────────────────────────────────────────

    fn create_shader(&self, _kind: u32) -> Result<u32, String> {
        self.create(|st, n| {
            st.shaders.insert(n, ShaderObj::default());
        })
    }

    fn delete_shader(&self, shader: u32) {
        self.state.borrow_mut().shaders.remove(&shader);
    }

    fn shader_source(&self, shader: u32, source: &str) {
        if let Some(s) = self.state.borrow_mut().shaders.get_mut(&shader) {
            s.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: u32) {
        let fail = self.fail_compile.get();
        if let Some(s) = self.state.borrow_mut().shaders.get_mut(&shader) {
            s.compiled = !fail && !s.source.is_empty();
        }
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.state.borrow().shaders.get(&shader).is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            "0:1(1): error: syntax error, unexpected end of file".to_string()
        }
    }

    fn create_program(&self) -> Result<u32, String> {
        self.create(|st, n| {
            st.programs.insert(n, ProgramObj::default());
        })
    }

    fn delete_program(&self, program: u32) {
        let mut st = self.state.borrow_mut();
        st.programs.remove(&program);
        if st.program == program {
            st.program = 0;
        }
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            p.shaders.push(shader);
        }
    }

    fn bind_attrib_location(&self, program: u32, index: u32, name: &str) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            p.attribs.insert(name.to_string(), index);
        }
    }

    fn link_program(&self, program: u32) {
        let mut st = self.state.borrow_mut();
        let Some(p) = st.programs.get(&program) else { return };
        let linked = p.shaders.len() >= 2
            && p.shaders.iter().all(|s| st.shaders.get(s).is_some_and(|s| s.compiled));
        if let Some(p) = st.programs.get_mut(&program) {
            p.linked = linked;
        }
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.state.borrow().programs.get(&program).is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: u32) -> String {
        if self.program_link_status(program) {
            String::new()
        } else {
            "error: linking with uncompiled/unspecialized shader".to_string()
        }
    }

    fn use_program(&self, program: u32) {
        self.state.borrow_mut().program = program;
    }

    fn get_uniform_location(&self, program: u32, name: &str) -> Option<u32> {
        let mut st = self.state.borrow_mut();
        let p = st.programs.get_mut(&program)?;
        if !p.linked {
            return None;
        }
        let next = p.uniforms.len() as u32;
        Some(*p.uniforms.entry(name.to_string()).or_insert(next))
    }

    fn uniform_1_i32(&self, location: Option<u32>, value: i32) {
        let mut st = self.state.borrow_mut();
        if let Some(loc) = location {
            let program = st.program;
            st.uniforms.insert((program, loc), vec![value as f32]);
        }
    }

    fn uniform_matrix_4(&self, location: Option<u32>, value: &[f32; 16]) {
        let mut st = self.state.borrow_mut();
        if let Some(loc) = location {
            let program = st.program;
            st.uniforms.insert((program, loc), value.to_vec());
        }
    }

    // ── diagnostics ───────────────────────────────────────────────────────

    fn debug_message_callback(&mut self, callback: DebugCallback) {
        self.debug = Some(callback);
    }
}
