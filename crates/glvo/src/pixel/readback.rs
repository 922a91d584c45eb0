use crate::device::Gl;
use crate::render::RenderCtx;

use super::bytes_per_pixel;

/// Destination row order for [`read_fbo_contents`].
///
/// GL framebuffers store row 0 at the bottom; most host images store it at
/// the top, which is what `Flipped` produces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum RowOrder {
    /// Source row `y` lands at destination row `y`.
    #[default]
    Direct,
    /// Source row `y` lands at destination row `h - 1 - y`.
    Flipped,
}

impl RowOrder {
    /// `+1` for [`Direct`](Self::Direct), `-1` for [`Flipped`](Self::Flipped).
    pub fn from_direction(dir: i32) -> Option<Self> {
        match dir {
            1 => Some(Self::Direct),
            -1 => Some(Self::Flipped),
            _ => None,
        }
    }

    pub fn direction(self) -> i32 {
        match self {
            Self::Direct => 1,
            Self::Flipped => -1,
        }
    }

    #[inline]
    fn dst_row(self, y: usize, h: usize) -> usize {
        match self {
            Self::Direct => y,
            Self::Flipped => h - 1 - y,
        }
    }
}

/// Copies the bottom-left `w x h` pixels of framebuffer `fbo` into `dst`,
/// rows `dst_stride` bytes apart.
///
/// Returns `false` without touching the driver when `fbo` is the default
/// framebuffer on a restricted profile, or when `(format, ty)` has no known
/// pixel size. A non-positive `w` or `h` copies nothing and returns `true`.
///
/// Leaves `PACK_ALIGNMENT` at 4 and framebuffer 0 bound.
///
/// # Panics
/// Panics if `dst_stride` is shorter than one row or `dst` is too short.
#[allow(clippy::too_many_arguments)]
pub fn read_fbo_contents<G: Gl + ?Sized>(
    ctx: &RenderCtx<'_, G>,
    fbo: u32,
    order: RowOrder,
    format: u32,
    ty: u32,
    w: i32,
    h: i32,
    dst: &mut [u8],
    dst_stride: usize,
) -> bool {
    if fbo == 0 && ctx.caps.restricted_profile {
        return false;
    }
    let bpp = bytes_per_pixel(format, ty);
    if bpp == 0 {
        log::warn!("read_fbo_contents: unsupported pixel format {format:#x}/{ty:#x}");
        return false;
    }
    if w <= 0 || h <= 0 {
        return true;
    }

    let (rows, row_bytes) = (h as usize, w as usize * bpp);
    assert!(dst_stride >= row_bytes, "destination stride {dst_stride} shorter than a row ({row_bytes})");
    let required = (rows - 1) * dst_stride + row_bytes;
    assert!(dst.len() >= required, "destination too short: {} bytes, needs {}", dst.len(), required);

    let gl = ctx.gl;
    gl.bind_framebuffer(glow::FRAMEBUFFER, fbo);
    gl.read_buffer(if fbo == 0 { glow::FRONT } else { glow::COLOR_ATTACHMENT0 });
    gl.pixel_store(glow::PACK_ALIGNMENT, 1);

    for y in 0..rows {
        let start = order.dst_row(y, rows) * dst_stride;
        gl.read_pixels(0, y as i32, w, 1, format, ty, &mut dst[start..start + row_bytes]);
    }

    gl.pixel_store(glow::PACK_ALIGNMENT, 4);
    gl.bind_framebuffer(glow::FRAMEBUFFER, 0);
    true
}
