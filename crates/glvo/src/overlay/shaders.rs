//! GLSL sources for the overlay program.
//!
//! One vertex/fragment pair per language generation; the `#version` line is
//! prepended at selection time.

use crate::device::GlVersion;

/// Shader family selected for a GLSL version number.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderVariant {
    /// GLSL 1.00 ES / 1.10 / 1.20: `attribute`/`varying`, `gl_FragColor`.
    Legacy,
    /// GLSL 1.30 .. 4.00: `in`/`out`, locations bound before linking.
    Glsl130,
    /// GLSL 3.00 ES.
    Es300,
    /// GLSL 4.10+ core: explicit `layout(location)` qualifiers.
    Core410,
}

impl ShaderVariant {
    pub fn select(glsl_version: u32) -> Self {
        match glsl_version {
            300 => Self::Es300,
            v if v < 130 => Self::Legacy,
            v if v >= 410 => Self::Core410,
            _ => Self::Glsl130,
        }
    }
}

/// GLSL version matching a context version.
///
/// ES 3.x -> 300, ES 2 -> 100, desktop 4.1+ -> 410, 3.x/4.0 -> 130,
/// anything older -> 120.
pub fn default_glsl_version(version: GlVersion) -> u32 {
    if version.is_embedded {
        if version.at_least(3, 0) { 300 } else { 100 }
    } else if version.at_least(4, 1) {
        410
    } else if version.at_least(3, 0) {
        130
    } else {
        120
    }
}

/// `#version` line for `glsl_version`.
pub fn version_header(glsl_version: u32) -> String {
    match ShaderVariant::select(glsl_version) {
        ShaderVariant::Es300 => "#version 300 es\n".to_string(),
        ShaderVariant::Core410 => format!("#version {glsl_version} core\n"),
        ShaderVariant::Legacy | ShaderVariant::Glsl130 => format!("#version {glsl_version}\n"),
    }
}

/// Complete `(vertex, fragment)` sources for `glsl_version`.
pub fn sources(glsl_version: u32) -> (String, String) {
    let (vs, fs) = match ShaderVariant::select(glsl_version) {
        ShaderVariant::Legacy => (VERTEX_LEGACY, FRAGMENT_LEGACY),
        ShaderVariant::Glsl130 => (VERTEX_130, FRAGMENT_130),
        ShaderVariant::Es300 => (VERTEX_300_ES, FRAGMENT_300_ES),
        ShaderVariant::Core410 => (VERTEX_410_CORE, FRAGMENT_410_CORE),
    };
    let header = version_header(glsl_version);
    (format!("{header}{vs}"), format!("{header}{fs}"))
}

const VERTEX_LEGACY: &str = "\
uniform mat4 ProjMtx;
attribute vec2 Position;
attribute vec2 UV;
attribute vec4 Color;
varying vec2 Frag_UV;
varying vec4 Frag_Color;
void main()
{
    Frag_UV = UV;
    Frag_Color = Color;
    gl_Position = ProjMtx * vec4(Position.xy, 0, 1);
}
";

const FRAGMENT_LEGACY: &str = "\
#ifdef GL_ES
precision mediump float;
#endif
uniform sampler2D Texture;
varying vec2 Frag_UV;
varying vec4 Frag_Color;
void main()
{
    gl_FragColor = Frag_Color * texture2D(Texture, Frag_UV.st);
}
";

const VERTEX_130: &str = "\
uniform mat4 ProjMtx;
in vec2 Position;
in vec2 UV;
in vec4 Color;
out vec2 Frag_UV;
out vec4 Frag_Color;
void main()
{
    Frag_UV = UV;
    Frag_Color = Color;
    gl_Position = ProjMtx * vec4(Position.xy, 0, 1);
}
";

const FRAGMENT_130: &str = "\
uniform sampler2D Texture;
in vec2 Frag_UV;
in vec4 Frag_Color;
out vec4 Out_Color;
void main()
{
    Out_Color = Frag_Color * texture(Texture, Frag_UV.st);
}
";

const VERTEX_300_ES: &str = "\
precision highp float;
layout (location = 0) in vec2 Position;
layout (location = 1) in vec2 UV;
layout (location = 2) in vec4 Color;
uniform mat4 ProjMtx;
out vec2 Frag_UV;
out vec4 Frag_Color;
void main()
{
    Frag_UV = UV;
    Frag_Color = Color;
    gl_Position = ProjMtx * vec4(Position.xy, 0, 1);
}
";

const FRAGMENT_300_ES: &str = "\
precision mediump float;
uniform sampler2D Texture;
in vec2 Frag_UV;
in vec4 Frag_Color;
layout (location = 0) out vec4 Out_Color;
void main()
{
    Out_Color = Frag_Color * texture(Texture, Frag_UV.st);
}
";

const VERTEX_410_CORE: &str = "\
layout (location = 0) in vec2 Position;
layout (location = 1) in vec2 UV;
layout (location = 2) in vec4 Color;
uniform mat4 ProjMtx;
out vec2 Frag_UV;
out vec4 Frag_Color;
void main()
{
    Frag_UV = UV;
    Frag_Color = Color;
    gl_Position = ProjMtx * vec4(Position.xy, 0, 1);
}
";

const FRAGMENT_410_CORE: &str = "\
in vec2 Frag_UV;
in vec4 Frag_Color;
uniform sampler2D Texture;
layout (location = 0) out vec4 Out_Color;
void main()
{
    Out_Color = Frag_Color * texture(Texture, Frag_UV.st);
}
";
