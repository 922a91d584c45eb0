use crate::device::Gl;
use crate::render::RenderCtx;

use super::bytes_per_pixel;

/// Unpack alignment the driver is left with after every transfer.
pub const DEFAULT_UNPACK_ALIGNMENT: i32 = 4;

/// Largest power of two in {8, 4, 2, 1} that divides `stride`.
///
/// Used as `UNPACK_ALIGNMENT` so the driver computes the same row starts as
/// the host buffer.
#[inline]
pub fn get_alignment(stride: usize) -> i32 {
    if stride % 8 == 0 {
        8
    } else if stride % 4 == 0 {
        4
    } else if stride % 2 == 0 {
        2
    } else {
        1
    }
}

/// Uploads the `w x h` rectangle at `(x, y)` of the texture bound to `target`
/// from host memory whose rows are `stride` bytes apart.
///
/// `data` starts at the first pixel of the first row and must cover
/// `(h - 1) * stride + w * bytes_per_pixel` bytes.
///
/// Strategy, fastest first:
/// - row-unpack enabled on `ctx` and `stride` a whole number of pixels: one
///   transfer with `UNPACK_ROW_LENGTH = stride / bpp`
/// - tightly packed rows: one transfer
/// - otherwise one transfer per row
///
/// All paths leave the texture with identical contents. `UNPACK_ALIGNMENT`
/// is reset to 4 and `UNPACK_ROW_LENGTH` to 0 afterwards.
///
/// Nothing happens when `w` or `h` is non-positive or `(format, ty)` has no
/// known pixel size.
///
/// # Panics
/// Panics if `stride` is zero or `data` is too short.
#[allow(clippy::too_many_arguments)]
pub fn upload_tex<G: Gl + ?Sized>(
    ctx: &RenderCtx<'_, G>,
    target: u32,
    format: u32,
    ty: u32,
    data: &[u8],
    stride: usize,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) {
    let bpp = bytes_per_pixel(format, ty);
    if w <= 0 || h <= 0 || bpp == 0 {
        return;
    }
    assert!(stride > 0, "upload stride must be positive");

    let row_bytes = w as usize * bpp;
    let required = (h as usize - 1) * stride + row_bytes;
    assert!(
        data.len() >= required,
        "pixel data too short: {} bytes, {}x{} at stride {} needs {}",
        data.len(),
        w,
        h,
        stride,
        required
    );

    let gl = ctx.gl;
    gl.pixel_store(glow::UNPACK_ALIGNMENT, get_alignment(stride));

    // A stride that is not a whole number of pixels cannot be expressed as a
    // row length.
    let row_length = ctx.row_unpack() && stride % bpp == 0;
    let rows_per_call = if row_length {
        gl.pixel_store(glow::UNPACK_ROW_LENGTH, (stride / bpp) as i32);
        h
    } else if stride == row_bytes {
        h
    } else {
        1
    };

    let mut row = 0;
    while row < h {
        let n = rows_per_call.min(h - row);
        let start = row as usize * stride;
        let len = (n as usize - 1) * stride + row_bytes;
        gl.tex_sub_image_2d(target, 0, x, y + row, w, n, format, ty, &data[start..start + len]);
        row += n;
    }

    if row_length {
        gl.pixel_store(glow::UNPACK_ROW_LENGTH, 0);
    }
    gl.pixel_store(glow::UNPACK_ALIGNMENT, DEFAULT_UNPACK_ALIGNMENT);
}
