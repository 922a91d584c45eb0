/// Number of components per pixel for a client pixel `format`, or 0 when the
/// format is not one this crate transfers.
pub fn format_components(format: u32) -> usize {
    match format {
        glow::RED | glow::RED_INTEGER | glow::LUMINANCE | glow::ALPHA | glow::DEPTH_COMPONENT => 1,
        glow::RG | glow::RG_INTEGER | glow::LUMINANCE_ALPHA => 2,
        glow::RGB | glow::BGR | glow::RGB_INTEGER => 3,
        glow::RGBA | glow::BGRA | glow::RGBA_INTEGER => 4,
        _ => 0,
    }
}

/// Size in bytes of one component of client pixel type `ty`, or 0 when the
/// type is packed or unknown.
pub fn component_size(ty: u32) -> usize {
    match ty {
        glow::UNSIGNED_BYTE | glow::BYTE => 1,
        glow::UNSIGNED_SHORT | glow::SHORT | glow::HALF_FLOAT => 2,
        glow::UNSIGNED_INT | glow::INT | glow::FLOAT => 4,
        _ => 0,
    }
}

/// Bytes per pixel of host memory described by `(format, ty)`.
///
/// Packed types store the whole pixel in one unit regardless of the
/// component count. Returns 0 for combinations that cannot be transferred;
/// callers treat that as "nothing to do".
pub fn bytes_per_pixel(format: u32, ty: u32) -> usize {
    match ty {
        glow::UNSIGNED_SHORT_5_6_5 | glow::UNSIGNED_SHORT_5_6_5_REV => {
            if matches!(format, glow::RGB | glow::BGR) { 2 } else { 0 }
        }
        glow::UNSIGNED_SHORT_4_4_4_4
        | glow::UNSIGNED_SHORT_4_4_4_4_REV
        | glow::UNSIGNED_SHORT_5_5_5_1
        | glow::UNSIGNED_SHORT_1_5_5_5_REV => {
            if matches!(format, glow::RGBA | glow::BGRA) { 2 } else { 0 }
        }
        glow::UNSIGNED_INT_2_10_10_10_REV | glow::UNSIGNED_INT_10_10_10_2 => {
            if matches!(format, glow::RGBA | glow::BGRA) { 4 } else { 0 }
        }
        _ => format_components(format) * component_size(ty),
    }
}
