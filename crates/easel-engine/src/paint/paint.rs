use crate::coords::Size;
use crate::paint::Color;
use crate::paint::gradient::{Gradient, LinearGradient, RadialGradient};

/// Paint source for filling geometry.
///
/// Small closed enum. The raster surface turns it into a `tiny_skia` shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(Gradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// `true` only for fully opaque flat colors.
    ///
    /// Gradients are always treated as potentially translucent so they go
    /// through the compositing path.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.is_opaque(),
            Paint::Gradient(_) => false,
        }
    }

    /// Color at `(x, y)` of an area of `size` filled with this paint.
    #[inline]
    pub fn color_at(&self, x: u32, y: u32, size: Size) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::Gradient(g) => g.color_at(x, y, size),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<Gradient> for Paint {
    fn from(g: Gradient) -> Self {
        Paint::Gradient(g)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Paint::Gradient(Gradient::Linear(g))
    }
}

impl From<RadialGradient> for Paint {
    fn from(g: RadialGradient) -> Self {
        Paint::Gradient(Gradient::Radial(g))
    }
}

/// Stroke drawn along the inner edge of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: u32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: u32, color: Color) -> Self {
        Self { width, color }
    }
}
