use easel_engine::coords::Size;
use easel_engine::paint::Color;
use easel_engine::text::FontSystem;

/// Outline color for [`LayoutCtx::debug`].
pub const DEBUG_OUTLINE: Color = Color::rgba(255, 0, 255, 255);

// ── Edges ─────────────────────────────────────────────────────────────────

/// Symmetric insets: `h` pixels on the left and right, `v` on top and bottom.
///
/// Used for both margin and padding. Converts from a single value (all sides)
/// or a `(vertical, horizontal)` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edges {
    pub h: u32,
    pub v: u32,
}

impl Edges {
    #[inline]
    pub const fn all(v: u32) -> Self {
        Self { h: v, v }
    }

    #[inline]
    pub const fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self { h: horizontal, v: vertical }
    }

    #[inline]
    pub const fn horizontal(h: u32) -> Self {
        Self { h, v: 0 }
    }

    #[inline]
    pub const fn vertical(v: u32) -> Self {
        Self { h: 0, v }
    }

    /// Space taken on both sides of each axis.
    #[inline]
    pub fn total(self) -> Size {
        Size::new(self.h * 2, self.v * 2)
    }
}

impl From<u32> for Edges {
    fn from(v: u32) -> Self {
        Self::all(v)
    }
}

impl From<(u32, u32)> for Edges {
    fn from((vertical, horizontal): (u32, u32)) -> Self {
        Self::symmetric(vertical, horizontal)
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Resources available while sizing and drawing a widget tree.
#[derive(Clone, Copy)]
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
    /// Outline every widget's region with [`DEBUG_OUTLINE`] after drawing it.
    pub debug: bool,
}

impl<'a> LayoutCtx<'a> {
    pub fn new(fonts: &'a FontSystem) -> Self {
        Self { fonts, debug: false }
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_is_vertical_then_horizontal() {
        let e: Edges = (4, 8).into();
        assert_eq!(e, Edges { h: 8, v: 4 });
        assert_eq!(e.total(), Size::new(16, 8));
    }

    #[test]
    fn single_value_applies_everywhere() {
        assert_eq!(Edges::from(3).total(), Size::new(6, 6));
    }
}
