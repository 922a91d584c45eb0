use crate::device::{Capabilities, Gl};

/// Renderer-facing context (driver + capabilities + transfer policy).
///
/// Cheap to copy; create one per frame or per call site.
pub struct RenderCtx<'a, G: Gl + ?Sized> {
    pub gl: &'a G,
    pub caps: Capabilities,
    /// Per-context permission for the row-unpack fast path.
    pub allow_row_length: bool,
}

impl<'a, G: Gl + ?Sized> RenderCtx<'a, G> {
    #[inline]
    pub fn new(gl: &'a G, caps: Capabilities) -> Self {
        Self {
            gl,
            caps,
            allow_row_length: true,
        }
    }

    #[inline]
    pub fn with_row_length(mut self, allow: bool) -> Self {
        self.allow_row_length = allow;
        self
    }

    /// Row-unpack uploads are both supported and allowed.
    #[inline]
    pub fn row_unpack(&self) -> bool {
        self.caps.row_length && self.allow_row_length
    }
}

impl<G: Gl + ?Sized> Clone for RenderCtx<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: Gl + ?Sized> Copy for RenderCtx<'_, G> {}
