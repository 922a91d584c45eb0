use super::{Capabilities, Gl};

/// Log level for a `GL_DEBUG_SEVERITY_*` value.
pub fn debug_severity_level(severity: u32) -> log::Level {
    match severity {
        glow::DEBUG_SEVERITY_NOTIFICATION => log::Level::Debug,
        glow::DEBUG_SEVERITY_LOW => log::Level::Info,
        glow::DEBUG_SEVERITY_MEDIUM => log::Level::Warn,
        _ => log::Level::Error,
    }
}

/// Routes driver debug messages into the `log` facade.
///
/// Enabling installs the callback and turns `DEBUG_OUTPUT` on; disabling
/// turns `DEBUG_OUTPUT` off. Returns `false` when the context cannot report
/// debug messages.
pub fn set_debug_logger<G: Gl + ?Sized>(gl: &mut G, caps: &Capabilities, enabled: bool) -> bool {
    if !caps.debug_callback {
        return false;
    }
    if enabled {
        gl.enable(glow::DEBUG_OUTPUT);
        gl.debug_message_callback(Box::new(|severity, message| {
            log::log!(debug_severity_level(severity), "GL: {message}");
        }));
    } else {
        gl.disable(glow::DEBUG_OUTPUT);
    }
    true
}
