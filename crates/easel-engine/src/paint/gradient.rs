use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::coords::Size;

use super::{Color, PaintError};

/// Two-color linear gradient.
///
/// Semantics:
/// - `p1` and `p2` are normalized positions: `(0, 0)` is the top-left and
///   `(1, 1)` the bottom-right of whatever area the gradient is rasterized into.
/// - A pixel's parameter is its Euclidean distance from `p1` divided by the
///   distance between `p1` and `p2`, clamped to [0, 1].
/// - Parameter 0 yields `c2`, parameter 1 yields `c1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub c1: Color,
    pub c2: Color,
    pub p1: (f32, f32),
    pub p2: (f32, f32),
}

impl LinearGradient {
    /// Fails when `p1 == p2`, which leaves the gradient without a direction.
    pub fn new(c1: Color, c2: Color, p1: (f32, f32), p2: (f32, f32)) -> Result<Self, PaintError> {
        if p1 == p2 {
            return Err(PaintError::DegenerateLinear(p1.0, p1.1));
        }
        Ok(Self { c1, c2, p1, p2 })
    }

    fn param(&self, x: f32, y: f32, size: Size) -> f32 {
        let (w, h) = (size.w as f32, size.h as f32);
        let (x1, y1) = (self.p1.0 * w, self.p1.1 * h);
        let (x2, y2) = (self.p2.0 * w, self.p2.1 * h);
        let len = (x2 - x1).hypot(y2 - y1);
        if len <= 0.0 {
            // Normalized points differ but the target collapses them (zero-sized axis).
            return 0.0;
        }
        ((x - x1).hypot(y - y1) / len).clamp(0.0, 1.0)
    }
}

/// Two-color radial gradient.
///
/// `center` is normalized like [`LinearGradient::p1`]; `radius` is in pixels.
/// The center yields `c2` and everything at or beyond `radius` yields `c1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    pub c1: Color,
    pub c2: Color,
    pub center: (f32, f32),
    pub radius: f32,
}

impl RadialGradient {
    pub fn new(c1: Color, c2: Color, center: (f32, f32), radius: f32) -> Result<Self, PaintError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PaintError::DegenerateRadial(radius));
        }
        Ok(Self { c1, c2, center, radius })
    }

    fn param(&self, x: f32, y: f32, size: Size) -> f32 {
        let cx = self.center.0 * size.w as f32;
        let cy = self.center.1 * size.h as f32;
        ((x - cx).hypot(y - cy) / self.radius).clamp(0.0, 1.0)
    }
}

/// Gradient paint source. Closed set: linear or radial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gradient {
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Gradient {
    /// Endpoint colors `(c1, c2)`.
    #[inline]
    pub fn endpoints(&self) -> (Color, Color) {
        match self {
            Gradient::Linear(g) => (g.c1, g.c2),
            Gradient::Radial(g) => (g.c1, g.c2),
        }
    }

    /// Color of pixel `(x, y)` when the gradient spans an area of `size`.
    pub fn color_at(&self, x: u32, y: u32, size: Size) -> Color {
        let (fx, fy) = (x as f32, y as f32);
        let t = match self {
            Gradient::Linear(g) => g.param(fx, fy, size),
            Gradient::Radial(g) => g.param(fx, fy, size),
        };
        let (c1, c2) = self.endpoints();
        Color::lerp(c2, c1, t)
    }

    /// Rasterizes the full `size` color field.
    pub fn colors(&self, size: Size) -> RgbaImage {
        RgbaImage::from_fn(size.w, size.h, |x, y| self.color_at(x, y, size).into())
    }

    /// Rasterizes the gradient and optionally replaces its alpha with `mask`.
    ///
    /// The mask contributes its own alpha channel when it has one, its
    /// luminance otherwise. It must match `size` exactly.
    pub fn to_image(&self, size: Size, mask: Option<&DynamicImage>) -> Result<RgbaImage, PaintError> {
        let mut img = self.colors(size);
        let Some(mask) = mask else {
            return Ok(img);
        };

        let (mw, mh) = mask.dimensions();
        if (mw, mh) != (size.w, size.h) {
            return Err(PaintError::MaskSize { expected: size, actual: Size::new(mw, mh) });
        }

        if mask.color().has_alpha() {
            let alpha = mask.to_rgba8();
            for (dst, src) in img.pixels_mut().zip(alpha.pixels()) {
                dst.0[3] = src.0[3];
            }
        } else {
            let luma = mask.to_luma8();
            for (dst, src) in img.pixels_mut().zip(luma.pixels()) {
                dst.0[3] = src.0[0];
            }
        }
        Ok(img)
    }
}

impl From<LinearGradient> for Gradient {
    fn from(g: LinearGradient) -> Self {
        Gradient::Linear(g)
    }
}

impl From<RadialGradient> for Gradient {
    fn from(g: RadialGradient) -> Self {
        Gradient::Radial(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    const RED: Color = Color::rgba(255, 0, 0, 255);
    const BLUE: Color = Color::rgba(0, 0, 255, 255);

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn linear_rejects_coincident_points() {
        assert!(LinearGradient::new(RED, BLUE, (0.5, 0.5), (0.5, 0.5)).is_err());
    }

    #[test]
    fn radial_rejects_non_positive_radius() {
        assert!(RadialGradient::new(RED, BLUE, (0.5, 0.5), 0.0).is_err());
        assert!(RadialGradient::new(RED, BLUE, (0.5, 0.5), f32::NAN).is_err());
    }

    // ── radial ────────────────────────────────────────────────────────────

    #[test]
    fn radial_center_is_c2_and_far_corner_is_c1() {
        let g: Gradient = RadialGradient::new(RED, BLUE, (0.5, 0.5), 100.0).unwrap().into();
        let size = Size::new(200, 200);
        let img = g.colors(size);
        // Distance 0 from the center.
        assert_eq!(Color::from(*img.get_pixel(100, 100)), BLUE);
        // ~141 px from the center, clamped.
        assert_eq!(Color::from(*img.get_pixel(0, 0)), RED);
    }

    #[test]
    fn radial_midway_blends() {
        let g: Gradient = RadialGradient::new(RED, BLUE, (0.5, 0.5), 100.0).unwrap().into();
        let c = g.color_at(50, 50, Size::new(100, 100));
        assert_eq!(c, BLUE);
        // 50 px right of center -> t = 0.5.
        let c = g.color_at(100, 50, Size::new(100, 100));
        assert_eq!(c, Color::rgba(127, 0, 127, 255));
    }

    // ── linear ────────────────────────────────────────────────────────────

    #[test]
    fn linear_measures_distance_from_p1() {
        let g: Gradient = LinearGradient::new(RED, BLUE, (0.0, 0.0), (1.0, 0.0)).unwrap().into();
        let size = Size::new(10, 4);
        assert_eq!(g.color_at(0, 0, size), BLUE);
        assert_eq!(g.color_at(9, 0, size).r, 229);
        // Off-axis pixels use the straight-line distance from p1.
        assert_eq!(g.color_at(9, 3, size), Color::lerp(BLUE, RED, 9.4868 / 10.0));
    }

    // ── masks ─────────────────────────────────────────────────────────────

    #[test]
    fn luma_mask_replaces_alpha() {
        let g: Gradient = RadialGradient::new(RED, BLUE, (0.0, 0.0), 1.0).unwrap().into();
        let mask = DynamicImage::ImageLuma8(GrayImage::from_fn(2, 1, |x, _| Luma([if x == 0 { 10 } else { 200 }])));
        let img = g.to_image(Size::new(2, 1), Some(&mask)).unwrap();
        assert_eq!(img.get_pixel(0, 0).0[3], 10);
        assert_eq!(img.get_pixel(1, 0).0[3], 200);
    }

    #[test]
    fn rgba_mask_uses_alpha_channel() {
        let g: Gradient = RadialGradient::new(RED, BLUE, (0.0, 0.0), 1.0).unwrap().into();
        let mask = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, image::Rgba([255, 255, 255, 42])));
        let img = g.to_image(Size::new(1, 1), Some(&mask)).unwrap();
        assert_eq!(img.get_pixel(0, 0).0[3], 42);
    }

    #[test]
    fn mask_size_mismatch_is_an_error() {
        let g: Gradient = RadialGradient::new(RED, BLUE, (0.0, 0.0), 1.0).unwrap().into();
        let mask = DynamicImage::ImageLuma8(GrayImage::new(3, 3));
        let err = g.to_image(Size::new(2, 2), Some(&mask)).unwrap_err();
        assert_eq!(err, PaintError::MaskSize { expected: Size::new(2, 2), actual: Size::new(3, 3) });
    }
}
