/// Where clip rectangles have their origin in window coordinates.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ClipOrigin {
    /// GL default: scissor Y is flipped against the framebuffer height.
    #[default]
    LowerLeft,
    /// Context uses an upper-left clip control; scissor Y is used as is.
    UpperLeft,
}

/// Overlay executor options.
#[derive(Debug, Clone, Default)]
pub struct OverlayConfig {
    /// GLSL version for the overlay program.
    ///
    /// `None` derives it from the context version at first use.
    pub glsl_version: Option<u32>,

    pub clip_origin: ClipOrigin,
}
