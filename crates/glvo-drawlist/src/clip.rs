use crate::Vec2;

/// Axis-aligned clip rectangle stored as two corners, `(x0, y0)` top-left and
/// `(x1, y1)` bottom-right, in display units.
///
/// A rectangle with `x1 <= x0` or `y1 <= y0` is degenerate and clips
/// everything away.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClipRect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl ClipRect {
    /// Clip rectangle that does not restrict anything.
    pub const UNBOUNDED: ClipRect = ClipRect {
        x0: f32::MIN,
        y0: f32::MIN,
        x1: f32::MAX,
        y1: f32::MAX,
    };

    #[inline]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[inline]
    pub const fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, min.y, max.x, max.y)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        Vec2::new(self.x0, self.y0)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.x1, self.y1)
    }

    #[inline]
    pub fn is_degenerate(self) -> bool {
        !(self.x1 > self.x0 && self.y1 > self.y0)
    }

    /// Moves both corners by `-origin`, expressing the rectangle relative to
    /// `origin`.
    #[inline]
    pub fn relative_to(self, origin: Vec2) -> Self {
        Self::from_min_max(self.min() - origin, self.max() - origin)
    }

    /// Scales both corners component-wise.
    #[inline]
    pub fn scaled(self, by: Vec2) -> Self {
        Self::from_min_max(self.min().scale(by), self.max().scale(by))
    }

    #[inline]
    pub fn intersect(self, other: ClipRect) -> Option<ClipRect> {
        let r = ClipRect::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        );
        if r.is_degenerate() { None } else { Some(r) }
    }
}

impl Default for ClipRect {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}
