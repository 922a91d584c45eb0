use bytemuck::{Pod, Zeroable};

/// Index type of overlay index buffers.
pub type DrawIdx = u16;

/// One overlay vertex: position in display units, texture coordinate and a
/// straight-alpha RGBA8 color.
///
/// The layout is fixed (`#[repr(C)]`, 20 bytes) because the executor uploads
/// vertex buffers verbatim and describes them with constant attribute offsets.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct DrawVert {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub col: [u8; 4],
}

impl DrawVert {
    pub const STRIDE: usize = std::mem::size_of::<DrawVert>();
    pub const POS_OFFSET: usize = std::mem::offset_of!(DrawVert, pos);
    pub const UV_OFFSET: usize = std::mem::offset_of!(DrawVert, uv);
    pub const COL_OFFSET: usize = std::mem::offset_of!(DrawVert, col);

    #[inline]
    pub const fn new(pos: [f32; 2], uv: [f32; 2], col: [u8; 4]) -> Self {
        Self { pos, uv, col }
    }
}
