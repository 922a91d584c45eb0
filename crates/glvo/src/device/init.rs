/// Driver-level options for [`Device::new`](super::Device::new).
///
/// Keep this structure minimal. Add flags only when a concrete driver quirk
/// requires one.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Install the driver debug logger when the context supports it.
    ///
    /// Costly on some drivers; intended for development builds.
    pub debug_output: bool,

    /// Allow single-call strided uploads via `UNPACK_ROW_LENGTH`.
    ///
    /// Only effective when the context also reports the capability. Turning
    /// it off forces the tight/per-row path, which is useful on drivers that
    /// advertise the feature but mishandle it.
    pub row_length: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            debug_output: false,
            row_length: true,
        }
    }
}
