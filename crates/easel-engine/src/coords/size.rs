use super::Point;

/// Width and height in pixels.
///
/// Unsigned on purpose: a negative extent cannot be expressed, so callers that
/// subtract insets go through [`Size::checked_shrink`] or [`Size::saturating_shrink`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    #[inline]
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { w: 0, h: 0 }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Component-wise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Size) -> Size {
        Size::new(self.w.max(other.w), self.h.max(other.h))
    }

    /// Adds `dw` on both horizontal sides and `dh` on both vertical sides.
    #[inline]
    #[must_use]
    pub fn grow(self, dw: u32, dh: u32) -> Size {
        Size::new(self.w.saturating_add(dw.saturating_mul(2)), self.h.saturating_add(dh.saturating_mul(2)))
    }

    /// Removes `dw` from both horizontal sides and `dh` from both vertical sides.
    /// Returns `None` when the result would be negative.
    #[inline]
    pub fn checked_shrink(self, dw: u32, dh: u32) -> Option<Size> {
        Some(Size::new(self.w.checked_sub(dw * 2)?, self.h.checked_sub(dh * 2)?))
    }

    /// Like [`checked_shrink`](Self::checked_shrink) but clamps at zero.
    #[inline]
    #[must_use]
    pub fn saturating_shrink(self, dw: u32, dh: u32) -> Size {
        Size::new(self.w.saturating_sub(dw * 2), self.h.saturating_sub(dh * 2))
    }

    /// `true` when `other` fits inside `self` on both axes.
    #[inline]
    pub fn contains_size(self, other: Size) -> bool {
        other.w <= self.w && other.h <= self.h
    }

    /// The size as a signed point, for offset arithmetic.
    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(self.w as i32, self.h as i32)
    }
}

impl From<(u32, u32)> for Size {
    #[inline]
    fn from((w, h): (u32, u32)) -> Self {
        Size::new(w, h)
    }
}
