/// Per-corner radii for a rounded rectangle (pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// `radius` on every corner enabled in `corners`, square elsewhere.
    #[inline]
    pub fn rounded(radius: f32, corners: Corners) -> Self {
        let pick = |on: bool| if on { radius } else { 0.0 };
        Self {
            top_left: pick(corners.top_left),
            top_right: pick(corners.top_right),
            bottom_right: pick(corners.bottom_right),
            bottom_left: pick(corners.bottom_left),
        }
    }

    /// Radii of the same shape inset by `d` on every side, floored at zero.
    #[inline]
    #[must_use]
    pub fn inset(self, d: f32) -> Self {
        let r = |v: f32| (v - d).max(0.0);
        Self::new(r(self.top_left), r(self.top_right), r(self.bottom_right), r(self.bottom_left))
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.top_left <= 0.0
            && self.top_right <= 0.0
            && self.bottom_right <= 0.0
            && self.bottom_left <= 0.0
    }
}

/// Which corners of a rounded rectangle are rounded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Corners {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
}

impl Corners {
    pub const ALL: Corners = Corners::new(true, true, true, true);
    pub const NONE: Corners = Corners::new(false, false, false, false);
    pub const TOP: Corners = Corners::new(true, true, false, false);
    pub const BOTTOM: Corners = Corners::new(false, false, true, true);

    #[inline]
    pub const fn new(top_left: bool, top_right: bool, bottom_right: bool, bottom_left: bool) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }
}

impl Default for Corners {
    fn default() -> Self {
        Corners::ALL
    }
}
