use super::{Point, Size};

/// Axis-aligned rectangle in pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Point {
        self.origin
    }

    /// Exclusive bottom-right corner.
    #[inline]
    pub fn max(self) -> Point {
        Point::new(
            self.origin.x + self.size.w as i32,
            self.origin.y + self.size.h as i32,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let (a0, a1) = (self.min(), self.max());
        let (b0, b1) = (other.min(), other.max());

        let x0 = a0.x.max(b0.x);
        let y0 = a0.y.max(b0.y);
        let x1 = a1.x.min(b1.x);
        let y1 = a1.y.min(b1.y);

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0, y0, (x1 - x0) as u32, (y1 - y0) as u32))
        }
    }
}
