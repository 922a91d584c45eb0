use anyhow::{Context, Result, anyhow};

use crate::device::Gl;

use super::shaders;

/// Attribute names in location order.
pub(crate) const ATTRIB_NAMES: [&str; 3] = ["Position", "UV", "Color"];

/// Linked overlay program plus the shaders it was built from.
///
/// Compile and link failures are logged, not returned: the handles are kept
/// and drawing proceeds with whatever the driver produced.
#[derive(Debug)]
pub(crate) struct OverlayProgram {
    pub program: u32,
    pub vertex: u32,
    pub fragment: u32,
    pub loc_texture: Option<u32>,
    pub loc_proj: Option<u32>,
}

impl OverlayProgram {
    /// Errors only when an object cannot be allocated.
    pub fn build<G: Gl + ?Sized>(gl: &G, glsl_version: u32) -> Result<Self> {
        let (vs_src, fs_src) = shaders::sources(glsl_version);

        let vertex = compile(gl, glow::VERTEX_SHADER, &vs_src, "vertex shader")?;
        let fragment = match compile(gl, glow::FRAGMENT_SHADER, &fs_src, "fragment shader") {
            Ok(s) => s,
            Err(e) => {
                gl.delete_shader(vertex);
                return Err(e);
            }
        };
        let program = match gl.create_program() {
            Ok(p) => p,
            Err(e) => {
                gl.delete_shader(vertex);
                gl.delete_shader(fragment);
                return Err(anyhow!(e).context("allocating overlay program"));
            }
        };

        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        for (index, name) in ATTRIB_NAMES.iter().enumerate() {
            gl.bind_attrib_location(program, index as u32, name);
        }
        gl.link_program(program);
        if !gl.program_link_status(program) {
            log::error!("failed to link overlay program (GLSL {glsl_version})");
            let info = gl.program_info_log(program);
            if !info.trim().is_empty() {
                log::error!("{}", info.trim_end());
            }
        }

        Ok(Self {
            program,
            vertex,
            fragment,
            loc_texture: gl.get_uniform_location(program, "Texture"),
            loc_proj: gl.get_uniform_location(program, "ProjMtx"),
        })
    }

    pub fn destroy<G: Gl + ?Sized>(self, gl: &G) {
        gl.delete_program(self.program);
        gl.delete_shader(self.vertex);
        gl.delete_shader(self.fragment);
    }
}

fn compile<G: Gl + ?Sized>(gl: &G, kind: u32, source: &str, desc: &str) -> Result<u32> {
    let shader = gl
        .create_shader(kind)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("allocating overlay {desc}"))?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    let ok = gl.shader_compile_status(shader);
    if !ok {
        log::error!("failed to compile overlay {desc}");
    }
    let info = gl.shader_info_log(shader);
    if !info.trim().is_empty() {
        if ok {
            log::debug!("{desc}: {}", info.trim_end());
        } else {
            log::error!("{}", info.trim_end());
        }
    }
    Ok(shader)
}
