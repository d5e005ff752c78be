use std::str::FromStr;

use thiserror::Error;

use super::{Point, Size};

/// Horizontal placement of a box inside a larger one.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement of a box inside a larger one.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

impl HAlign {
    /// Offset of an `inner`-wide span inside an `outer`-wide span.
    ///
    /// Centering floors, so an odd leftover pixel ends up on the right.
    /// A negative result means the inner span overflows.
    #[inline]
    pub fn place(self, outer: u32, inner: u32) -> i32 {
        let slack = outer as i32 - inner as i32;
        match self {
            HAlign::Left => 0,
            HAlign::Center => slack.div_euclid(2),
            HAlign::Right => slack,
        }
    }

    /// Position of this anchor along a span of `len` pixels.
    #[inline]
    pub fn anchor(self, len: u32) -> i32 {
        match self {
            HAlign::Left => 0,
            HAlign::Center => len as i32 / 2,
            HAlign::Right => len as i32,
        }
    }
}

impl VAlign {
    /// See [`HAlign::place`].
    #[inline]
    pub fn place(self, outer: u32, inner: u32) -> i32 {
        let slack = outer as i32 - inner as i32;
        match self {
            VAlign::Top => 0,
            VAlign::Center => slack.div_euclid(2),
            VAlign::Bottom => slack,
        }
    }

    /// See [`HAlign::anchor`].
    #[inline]
    pub fn anchor(self, len: u32) -> i32 {
        match self {
            VAlign::Top => 0,
            VAlign::Center => len as i32 / 2,
            VAlign::Bottom => len as i32,
        }
    }
}

/// Two-axis alignment.
///
/// Parses from the short codes used throughout widget construction:
///
/// | code          | h      | v      |
/// |---------------|--------|--------|
/// | `c`           | center | center |
/// | `l` / `r`     | left / right | center |
/// | `t` / `b`     | center | top / bottom |
/// | `tl` / `lt`   | left   | top    |
/// | `tr` / `rt`   | right  | top    |
/// | `bl` / `lb`   | left   | bottom |
/// | `br` / `rb`   | right  | bottom |
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Align {
    pub h: HAlign,
    pub v: VAlign,
}

impl Align {
    pub const CENTER: Align = Align::new(HAlign::Center, VAlign::Center);
    pub const LEFT: Align = Align::new(HAlign::Left, VAlign::Center);
    pub const RIGHT: Align = Align::new(HAlign::Right, VAlign::Center);
    pub const TOP: Align = Align::new(HAlign::Center, VAlign::Top);
    pub const BOTTOM: Align = Align::new(HAlign::Center, VAlign::Bottom);
    pub const TOP_LEFT: Align = Align::new(HAlign::Left, VAlign::Top);
    pub const TOP_RIGHT: Align = Align::new(HAlign::Right, VAlign::Top);
    pub const BOTTOM_LEFT: Align = Align::new(HAlign::Left, VAlign::Bottom);
    pub const BOTTOM_RIGHT: Align = Align::new(HAlign::Right, VAlign::Bottom);

    #[inline]
    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Self { h, v }
    }

    /// Top-left position of `inner` inside `outer`.
    #[inline]
    pub fn place(self, outer: Size, inner: Size) -> Point {
        Point::new(self.h.place(outer.w, inner.w), self.v.place(outer.h, inner.h))
    }

    /// The point of a `size` box this alignment names (its center for `c`,
    /// its bottom-right corner for `br`, and so on).
    #[inline]
    pub fn anchor(self, size: Size) -> Point {
        Point::new(self.h.anchor(size.w), self.v.anchor(size.h))
    }
}

/// Returned when an alignment code is not one of the known short codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid alignment code {0:?}")]
pub struct ParseAlignError(pub String);

impl FromStr for Align {
    type Err = ParseAlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let align = match s {
            "c" => Align::CENTER,
            "l" => Align::LEFT,
            "r" => Align::RIGHT,
            "t" => Align::TOP,
            "b" => Align::BOTTOM,
            "tl" | "lt" => Align::TOP_LEFT,
            "tr" | "rt" => Align::TOP_RIGHT,
            "bl" | "lb" => Align::BOTTOM_LEFT,
            "br" | "rb" => Align::BOTTOM_RIGHT,
            other => return Err(ParseAlignError(other.to_string())),
        };
        Ok(align)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_code() {
        for code in ["c", "l", "r", "t", "b", "tl", "tr", "bl", "br", "lt", "lb", "rt", "rb"] {
            assert!(code.parse::<Align>().is_ok(), "{code}");
        }
        assert_eq!("lt".parse::<Align>(), Ok(Align::TOP_LEFT));
        assert_eq!("rb".parse::<Align>(), Ok(Align::BOTTOM_RIGHT));
        assert_eq!("l".parse::<Align>(), Ok(Align::new(HAlign::Left, VAlign::Center)));
    }

    #[test]
    fn rejects_unknown_code() {
        assert_eq!("middle".parse::<Align>(), Err(ParseAlignError("middle".into())));
    }

    #[test]
    fn place_centers_with_floor() {
        let p = Align::CENTER.place(Size::new(11, 10), Size::new(4, 4));
        assert_eq!(p, Point::new(3, 3));
    }

    #[test]
    fn place_overflow_floors_toward_negative() {
        // 5 - 8 = -3, floored half is -2 (not -1).
        assert_eq!(HAlign::Center.place(5, 8), -2);
        assert_eq!(VAlign::Bottom.place(5, 8), -3);
    }

    #[test]
    fn anchor_points() {
        let s = Size::new(40, 20);
        assert_eq!(Align::TOP_LEFT.anchor(s), Point::new(0, 0));
        assert_eq!(Align::CENTER.anchor(s), Point::new(20, 10));
        assert_eq!(Align::BOTTOM_RIGHT.anchor(s), Point::new(40, 20));
    }
}
