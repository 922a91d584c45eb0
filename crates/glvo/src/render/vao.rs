use anyhow::{Context, Result, anyhow};

use crate::device::Gl;
use crate::render::RenderCtx;

/// Component type of a vertex attribute.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttribKind {
    /// 32-bit signed integers, converted to float.
    Int,
    /// 32-bit floats.
    Float,
    /// Unsigned bytes normalized to `0.0..=1.0`.
    UnormByte,
}

impl AttribKind {
    #[inline]
    pub fn gl_type(self) -> u32 {
        match self {
            Self::Int => glow::INT,
            Self::Float => glow::FLOAT,
            Self::UnormByte => glow::UNSIGNED_BYTE,
        }
    }

    #[inline]
    pub fn normalized(self) -> bool {
        matches!(self, Self::UnormByte)
    }
}

/// One attribute of an interleaved vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexAttrib {
    pub name: &'static str,
    pub kind: AttribKind,
    /// Vector width, `1..=4`.
    pub components: u32,
    /// Matrix column count; only `1` is supported.
    pub columns: u32,
    /// Byte offset within the vertex.
    pub offset: usize,
}

impl VertexAttrib {
    pub const fn new(name: &'static str, kind: AttribKind, components: u32, offset: usize) -> Self {
        Self { name, kind, components, columns: 1, offset }
    }

    fn validate(&self) {
        assert!(
            self.columns == 1,
            "vertex attribute `{}`: matrix attributes are not supported ({} columns)",
            self.name,
            self.columns
        );
        assert!(
            (1..=4).contains(&self.components),
            "vertex attribute `{}`: {} components, expected 1..=4",
            self.name,
            self.components
        );
    }
}

#[derive(Debug)]
enum Path {
    /// Attribute setup recorded once into a vertex-array object.
    Native { vao: u32 },
    /// Attribute setup replayed on every bind.
    Manual,
}

#[derive(Debug)]
struct Inner {
    buffer: u32,
    path: Path,
    stride: i32,
    attribs: Vec<VertexAttrib>,
}

/// Vertex buffer plus its attribute layout.
///
/// `Default` is the zero handle: nothing allocated, `uninit` is a no-op.
/// Attribute `n` is bound to location `n`.
#[derive(Debug, Default)]
pub struct VertexArray {
    inner: Option<Inner>,
}

impl VertexArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the buffer (and a vertex-array object when supported) and
    /// records the layout.
    ///
    /// # Panics
    /// Panics if the handle is already initialized or any descriptor is
    /// malformed.
    pub fn init<G: Gl + ?Sized>(&mut self, ctx: &RenderCtx<'_, G>, stride: usize, attribs: &[VertexAttrib]) -> Result<()> {
        assert!(self.inner.is_none(), "vertex array already initialized");
        attribs.iter().for_each(VertexAttrib::validate);

        let gl = ctx.gl;
        let stride = i32::try_from(stride).context("vertex stride out of range")?;
        let buffer = gl
            .create_buffer()
            .map_err(|e| anyhow!(e))
            .context("allocating vertex buffer")?;

        let path = if ctx.caps.vertex_array_objects {
            let vao = match gl.create_vertex_array() {
                Ok(vao) => vao,
                Err(e) => {
                    gl.delete_buffer(buffer);
                    return Err(anyhow!(e).context("allocating vertex array object"));
                }
            };
            gl.bind_vertex_array(vao);
            gl.bind_buffer(glow::ARRAY_BUFFER, buffer);
            setup_attribs(gl, stride, attribs);
            gl.bind_vertex_array(0);
            gl.bind_buffer(glow::ARRAY_BUFFER, 0);
            Path::Native { vao }
        } else {
            Path::Manual
        };

        self.inner = Some(Inner { buffer, path, stride, attribs: attribs.to_vec() });
        Ok(())
    }

    /// Makes the layout current for drawing.
    ///
    /// No-op on the zero handle.
    pub fn bind<G: Gl + ?Sized>(&self, gl: &G) {
        let Some(inner) = &self.inner else { return };
        match inner.path {
            Path::Native { vao } => gl.bind_vertex_array(vao),
            Path::Manual => {
                gl.bind_buffer(glow::ARRAY_BUFFER, inner.buffer);
                setup_attribs(gl, inner.stride, &inner.attribs);
                gl.bind_buffer(glow::ARRAY_BUFFER, 0);
            }
        }
    }

    /// Reverses [`bind`](Self::bind).
    pub fn unbind<G: Gl + ?Sized>(&self, gl: &G) {
        let Some(inner) = &self.inner else { return };
        match inner.path {
            Path::Native { .. } => gl.bind_vertex_array(0),
            Path::Manual => {
                for index in 0..inner.attribs.len() {
                    gl.disable_vertex_attrib_array(index as u32);
                }
            }
        }
    }

    /// Releases the GPU objects and returns to the zero handle.
    pub fn uninit<G: Gl + ?Sized>(&mut self, gl: &G) {
        let Some(inner) = self.inner.take() else { return };
        if let Path::Native { vao } = inner.path {
            gl.delete_vertex_array(vao);
        }
        gl.delete_buffer(inner.buffer);
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.inner.is_some()
    }

    /// Uses a native vertex-array object.
    #[inline]
    pub fn is_native(&self) -> bool {
        matches!(self.inner, Some(Inner { path: Path::Native { .. }, .. }))
    }

    /// Vertex buffer name, 0 on the zero handle.
    #[inline]
    pub fn buffer(&self) -> u32 {
        self.inner.as_ref().map_or(0, |i| i.buffer)
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.as_ref().map_or(0, |i| i.stride as usize)
    }

    pub fn attribs(&self) -> &[VertexAttrib] {
        match &self.inner {
            Some(inner) => &inner.attribs,
            None => &[],
        }
    }
}

/// Enables and points every attribute at the buffer bound to `ARRAY_BUFFER`.
fn setup_attribs<G: Gl + ?Sized>(gl: &G, stride: i32, attribs: &[VertexAttrib]) {
    for (index, a) in attribs.iter().enumerate() {
        let index = index as u32;
        gl.enable_vertex_attrib_array(index);
        gl.vertex_attrib_pointer(
            index,
            a.components as i32,
            a.kind.gl_type(),
            a.kind.normalized(),
            stride,
            a.offset as i32,
        );
    }
}
