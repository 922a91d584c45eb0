//! GL driver seam + per-context device.
//!
//! This module is responsible for:
//! - the `Gl` trait every other module issues driver calls through
//! - the `glow` implementation of it
//! - probing optional driver capabilities once per context
//! - routing driver errors and debug messages into `log`

mod caps;
mod debug;
mod driver;
mod error;
#[cfg(not(target_arch = "wasm32"))]
mod glow_driver;
mod init;

#[cfg(test)]
pub(crate) mod testing;

pub use caps::{Capabilities, check_extension, probe};
pub use debug::{debug_severity_level, set_debug_logger};
pub use driver::{DebugCallback, Gl, GlVersion};
pub use error::{check_error, error_name};
#[cfg(not(target_arch = "wasm32"))]
pub use glow_driver::GlowDriver;
pub use init::GlInit;

use crate::render::RenderCtx;

/// Owns the driver for one context together with its probed capabilities.
///
/// The context must stay current on the owning thread for the lifetime of
/// the device.
pub struct Device<G: Gl> {
    gl: G,
    caps: Capabilities,
    init: GlInit,
}

impl<G: Gl> Device<G> {
    /// Probes `gl` and applies `init`.
    pub fn new(mut gl: G, init: GlInit) -> Self {
        let caps = probe(&gl);
        let version = gl.version();
        log::debug!(
            "GL {}.{}{}: {:?}",
            version.major,
            version.minor,
            if version.is_embedded { " ES" } else { "" },
            caps
        );

        if init.debug_output && !set_debug_logger(&mut gl, &caps, true) {
            log::info!("debug output requested but not supported by this context");
        }

        Self { gl, caps, init }
    }

    #[inline]
    pub fn gl(&self) -> &G {
        &self.gl
    }

    #[inline]
    pub fn caps(&self) -> &Capabilities {
        &self.caps
    }

    #[inline]
    pub fn init(&self) -> &GlInit {
        &self.init
    }

    /// Context handed to the transfer, vertex-array and overlay code.
    #[inline]
    pub fn ctx(&self) -> RenderCtx<'_, G> {
        RenderCtx::new(&self.gl, self.caps).with_row_length(self.init.row_length)
    }

    /// Toggles the debug logger after construction.
    pub fn set_debug_output(&mut self, enabled: bool) -> bool {
        let ok = set_debug_logger(&mut self.gl, &self.caps, enabled);
        if ok {
            self.init.debug_output = enabled;
        }
        ok
    }

    /// Returns the driver, consuming the device.
    pub fn into_inner(self) -> G {
        self.gl
    }
}
