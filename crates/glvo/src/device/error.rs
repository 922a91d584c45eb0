use super::Gl;

/// Symbolic name of a `glGetError` code.
pub fn error_name(code: u32) -> &'static str {
    match code {
        glow::INVALID_ENUM => "INVALID_ENUM",
        glow::INVALID_VALUE => "INVALID_VALUE",
        glow::INVALID_OPERATION => "INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "OUT_OF_MEMORY",
        _ => "unknown",
    }
}

/// Drains the driver error queue, logging each code with `info` as prefix.
///
/// Returns the number of errors drained.
pub fn check_error<G: Gl + ?Sized>(gl: &G, info: &str) -> usize {
    let mut count = 0;
    loop {
        let code = gl.get_error();
        if code == glow::NO_ERROR {
            break;
        }
        log::error!("{info}: OpenGL error {}.", error_name(code));
        count += 1;
    }
    count
}
