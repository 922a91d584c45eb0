use super::Gl;

/// Optional driver features, probed once per context.
///
/// Absence of a feature is `false`; every consumer has a fallback path.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Capabilities {
    /// `UNPACK_ROW_LENGTH` is honored (single-call strided uploads).
    pub row_length: bool,
    /// Native vertex-array objects are available.
    pub vertex_array_objects: bool,
    /// `glDebugMessageCallback` can be installed.
    pub debug_callback: bool,
    /// ES-like profile; the default framebuffer cannot be read back.
    pub restricted_profile: bool,
}

/// Probes the context current on `gl`.
pub fn probe<G: Gl + ?Sized>(gl: &G) -> Capabilities {
    let version = gl.version();
    let ext = gl.extensions();
    let has = |name: &str| check_extension(&ext, name);

    let (row_length, vertex_array_objects, debug_callback) = if version.is_embedded {
        (
            version.at_least(3, 0) || has("GL_EXT_unpack_subimage"),
            version.at_least(3, 0) || has("GL_OES_vertex_array_object"),
            version.at_least(3, 2) || has("GL_KHR_debug"),
        )
    } else {
        (
            true,
            version.at_least(3, 0) || has("GL_ARB_vertex_array_object"),
            version.at_least(4, 3) || has("GL_KHR_debug"),
        )
    };

    Capabilities {
        row_length,
        vertex_array_objects,
        debug_callback,
        restricted_profile: version.is_embedded,
    }
}

/// Whole-word search for `ext` in a space-separated extension list.
pub fn check_extension(extensions: &str, ext: &str) -> bool {
    !ext.is_empty() && extensions.split_ascii_whitespace().any(|e| e == ext)
}
