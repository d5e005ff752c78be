use image::{Rgba, RgbaImage};
use tiny_skia as sk;

use super::path::rounded_rect;
use crate::coords::{CornerRadii, Point, Rect, Size};
use crate::paint::{Border, Color, Paint};
use crate::text::Face;

/// How [`Surface::blit`] combines source pixels with the destination.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum BlitMode {
    /// Source pixels overwrite the destination, alpha included.
    Replace,
    /// The source alpha acts as a mask that blends every channel.
    #[default]
    Masked,
    /// Source-over compositing.
    Composite,
}

/// An RGBA pixel buffer with clipped drawing primitives, backed by a
/// `tiny_skia::Pixmap`.
///
/// Every primitive clips against the surface bounds; drawing partly or fully
/// outside is not an error. A zero-sized surface has no pixmap and ignores
/// all drawing.
#[derive(Clone)]
pub struct Surface {
    size: Size,
    pixmap: Option<sk::Pixmap>,
}

impl Surface {
    /// A surface of `size` filled with `color`.
    pub fn new(size: Size, color: Color) -> Self {
        let pixmap = sk::Pixmap::new(size.w, size.h).map(|mut p| {
            p.fill(color.into());
            p
        });
        Self { size, pixmap }
    }

    pub fn from_image(image: &RgbaImage) -> Self {
        Self { size: Size::new(image.width(), image.height()), pixmap: to_pixmap(image) }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::zero(), self.size)
    }

    /// Straight-alpha copy of the pixels.
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.size.w, self.size.h);
        if let Some(pixmap) = &self.pixmap {
            for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
                let c = src.demultiply();
                *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
            }
        }
        image
    }

    pub fn into_image(self) -> RgbaImage {
        self.to_image()
    }

    /// Pixel at `p`, or `None` outside the surface.
    pub fn pixel(&self, p: Point) -> Option<Color> {
        if !self.bounds().contains(p) {
            return None;
        }
        let c = self.pixmap.as_ref()?.pixel(p.x as u32, p.y as u32)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    // ── shapes ────────────────────────────────────────────────────────────

    /// Fills `rect` (optionally rounded) with `paint` and strokes `border`
    /// along its inner edge.
    ///
    /// Gradients are evaluated relative to `rect`'s own origin and size.
    /// An opaque flat square fill without a border replaces the destination;
    /// everything else is composited over it, antialiased when rounded.
    pub fn fill_shape(&mut self, rect: Rect, radii: CornerRadii, paint: &Paint, border: Option<&Border>) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        if rect.is_empty() {
            return;
        }
        let Some(bounds) = sk_rect(rect) else {
            return;
        };
        let border = border.filter(|b| b.width > 0 && b.color.a > 0);
        let rounded = !radii.is_zero();

        let gradient;
        let shader = match paint {
            Paint::Solid(c) => sk::Shader::SolidColor((*c).into()),
            Paint::Gradient(g) => {
                let Some(layer) = to_pixmap(&g.colors(rect.size)) else {
                    return;
                };
                gradient = layer;
                sk::Pattern::new(
                    gradient.as_ref(),
                    sk::SpreadMode::Pad,
                    sk::FilterQuality::Nearest,
                    1.0,
                    sk::Transform::from_translate(rect.origin.x as f32, rect.origin.y as f32),
                )
            }
        };

        let mut fill = sk::Paint { shader, anti_alias: rounded, ..sk::Paint::default() };
        if paint.is_opaque() && !rounded && border.is_none() {
            fill.blend_mode = sk::BlendMode::Source;
        }
        fill_region(pixmap, bounds, radii, &fill);

        let Some(border) = border else {
            return;
        };
        let mut stroke_paint = sk::Paint { anti_alias: rounded, ..sk::Paint::default() };
        stroke_paint.set_color(border.color.into());

        let width = border.width as f32;
        if 2.0 * width >= bounds.width().min(bounds.height()) {
            fill_region(pixmap, bounds, radii, &stroke_paint);
            return;
        }
        let half = width / 2.0;
        let ring = sk::Rect::from_ltrb(bounds.left() + half, bounds.top() + half, bounds.right() - half, bounds.bottom() - half)
            .and_then(|r| rounded_rect(r, radii.inset(half)));
        if let Some(path) = ring {
            let stroke = sk::Stroke { width, ..sk::Stroke::default() };
            pixmap.stroke_path(&path, &stroke_paint, &stroke, sk::Transform::identity(), None);
        }
    }

    // ── images ────────────────────────────────────────────────────────────

    /// Draws `src` with its top-left corner at `at`.
    pub fn blit(&mut self, src: &RgbaImage, at: Point, mode: BlitMode) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let Some(src) = to_pixmap(src) else {
            return;
        };

        let blend_mode = match mode {
            BlitMode::Replace | BlitMode::Masked => sk::BlendMode::Source,
            BlitMode::Composite => sk::BlendMode::SourceOver,
        };
        let paint = sk::PixmapPaint { blend_mode, quality: sk::FilterQuality::Nearest, ..sk::PixmapPaint::default() };

        let mask = match mode {
            BlitMode::Masked => {
                let Some(mut layer) = sk::Pixmap::new(pixmap.width(), pixmap.height()) else {
                    return;
                };
                layer.draw_pixmap(at.x, at.y, src.as_ref(), &paint, sk::Transform::identity(), None);
                Some(sk::Mask::from_pixmap(layer.as_ref(), sk::MaskType::Alpha))
            }
            _ => None,
        };
        pixmap.draw_pixmap(at.x, at.y, src.as_ref(), &paint, sk::Transform::identity(), mask.as_ref());
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Rasterizes one line of `text` with its pen origin at `origin`.
    pub fn draw_text(&mut self, face: &dyn Face, text: &str, px: f32, origin: Point, color: Color) {
        let bounds = self.bounds();
        let stride = self.size.w as usize;
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let Some(mut mask) = sk::Mask::new(pixmap.width(), pixmap.height()) else {
            return;
        };

        let coverage = mask.data_mut();
        face.rasterize(text, px, &mut |gx, gy, cov| {
            let p = Point::new(origin.x + gx, origin.y + gy);
            if bounds.contains(p) {
                let slot = &mut coverage[p.y as usize * stride + p.x as usize];
                *slot = (*slot).max(cov);
            }
        });

        let mut paint = sk::Paint::default();
        paint.set_color(color.into());
        if let Some(all) = sk_rect(bounds) {
            pixmap.fill_rect(all, &paint, sk::Transform::identity(), Some(&mask));
        }
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface").field("size", &self.size).finish()
    }
}

impl From<&RgbaImage> for Surface {
    fn from(image: &RgbaImage) -> Self {
        Self::from_image(image)
    }
}

fn fill_region(pixmap: &mut sk::Pixmap, bounds: sk::Rect, radii: CornerRadii, paint: &sk::Paint) {
    if radii.is_zero() {
        pixmap.fill_rect(bounds, paint, sk::Transform::identity(), None);
    } else if let Some(path) = rounded_rect(bounds, radii) {
        pixmap.fill_path(&path, paint, sk::FillRule::Winding, sk::Transform::identity(), None);
    }
}

fn sk_rect(rect: Rect) -> Option<sk::Rect> {
    sk::Rect::from_xywh(rect.origin.x as f32, rect.origin.y as f32, rect.size.w as f32, rect.size.h as f32)
}

/// Premultiplied copy of a straight-alpha image; `None` when it is empty.
fn to_pixmap(image: &RgbaImage) -> Option<sk::Pixmap> {
    let mut pixmap = sk::Pixmap::new(image.width(), image.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = sk::ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{LinearGradient, RadialGradient};
    use crate::text::BlockFace;

    fn canvas(w: u32, h: u32) -> Surface {
        Surface::new(Size::new(w, h), Color::WHITE)
    }

    fn at(s: &Surface, x: i32, y: i32) -> Color {
        s.pixel(Point::new(x, y)).unwrap()
    }

    // ── fill_shape ───────────────────────────────────────────────────────

    #[test]
    fn opaque_rect_fills_exactly() {
        let mut s = canvas(10, 10);
        s.fill_shape(Rect::new(2, 3, 4, 5), CornerRadii::zero(), &Color::RED.into(), None);
        assert_eq!(at(&s, 2, 3), Color::RED);
        assert_eq!(at(&s, 5, 7), Color::RED);
        assert_eq!(at(&s, 6, 7), Color::WHITE);
        assert_eq!(at(&s, 5, 8), Color::WHITE);
        assert_eq!(at(&s, 1, 3), Color::WHITE);
    }

    #[test]
    fn translucent_fill_composites() {
        let mut s = canvas(4, 4);
        let paint = Paint::solid(Color::BLACK.with_alpha(128));
        s.fill_shape(Rect::new(0, 0, 4, 4), CornerRadii::zero(), &paint, None);
        let p = at(&s, 1, 1);
        assert_eq!(p.a, 255);
        assert!((126..=128).contains(&p.r));
    }

    #[test]
    fn rect_partly_outside_is_clipped() {
        let mut s = canvas(4, 4);
        s.fill_shape(Rect::new(-2, -2, 4, 4), CornerRadii::zero(), &Color::BLUE.into(), None);
        assert_eq!(at(&s, 0, 0), Color::BLUE);
        assert_eq!(at(&s, 1, 1), Color::BLUE);
        assert_eq!(at(&s, 2, 2), Color::WHITE);
    }

    #[test]
    fn rounded_rect_leaves_corners() {
        let mut s = canvas(20, 20);
        s.fill_shape(Rect::new(0, 0, 20, 20), CornerRadii::all(8.0), &Color::RED.into(), None);
        assert_eq!(at(&s, 0, 0), Color::WHITE);
        assert_eq!(at(&s, 10, 10), Color::RED);
        assert_eq!(at(&s, 10, 0), Color::RED);
    }

    #[test]
    fn border_is_drawn_inside_with_fill() {
        let mut s = canvas(10, 10);
        let border = Border::new(2, Color::BLUE);
        s.fill_shape(Rect::new(0, 0, 10, 10), CornerRadii::zero(), &Color::RED.into(), Some(&border));
        assert_eq!(at(&s, 0, 5), Color::BLUE);
        assert_eq!(at(&s, 1, 5), Color::BLUE);
        assert_eq!(at(&s, 2, 5), Color::RED);
        assert_eq!(at(&s, 5, 5), Color::RED);
        assert_eq!(at(&s, 9, 9), Color::BLUE);
    }

    #[test]
    fn border_wider_than_half_covers_the_shape() {
        let mut s = canvas(6, 6);
        let border = Border::new(4, Color::GREEN);
        s.fill_shape(Rect::new(0, 0, 6, 6), CornerRadii::zero(), &Color::RED.into(), Some(&border));
        assert_eq!(at(&s, 3, 3), Color::GREEN);
    }

    #[test]
    fn gradient_is_relative_to_rect() {
        let mut s = canvas(20, 4);
        let g = LinearGradient::new(Color::RED, Color::BLUE, (0.0, 0.0), (1.0, 0.0)).unwrap();
        s.fill_shape(Rect::new(10, 0, 10, 4), CornerRadii::zero(), &g.into(), None);
        // At the gradient start the color is fully c2.
        assert_eq!(at(&s, 10, 0), Color::BLUE);
        assert_eq!(at(&s, 9, 0), Color::WHITE);
    }

    #[test]
    fn radial_gradient_fill_matches_its_color_field() {
        let mut s = canvas(8, 8);
        let g = RadialGradient::new(Color::RED, Color::BLUE, (0.5, 0.5), 4.0).unwrap();
        s.fill_shape(Rect::new(0, 0, 8, 8), CornerRadii::zero(), &g.into(), None);
        assert_eq!(at(&s, 4, 4), Color::BLUE);
        assert_eq!(at(&s, 0, 0), Color::RED);
    }

    #[test]
    fn empty_surface_ignores_drawing() {
        let mut s = Surface::new(Size::zero(), Color::WHITE);
        s.fill_shape(Rect::new(0, 0, 4, 4), CornerRadii::zero(), &Color::RED.into(), None);
        s.blit(&RgbaImage::new(2, 2), Point::zero(), BlitMode::Composite);
        assert_eq!(s.pixel(Point::zero()), None);
        assert_eq!(s.into_image().dimensions(), (0, 0));
    }

    // ── blit ─────────────────────────────────────────────────────────────

    #[test]
    fn replace_copies_alpha() {
        let mut s = canvas(4, 4);
        let src = RgbaImage::from_pixel(2, 2, Color::transparent().into());
        s.blit(&src, Point::new(1, 1), BlitMode::Replace);
        assert_eq!(at(&s, 1, 1), Color::transparent());
        assert_eq!(at(&s, 0, 0), Color::WHITE);
    }

    #[test]
    fn masked_skips_transparent_source() {
        let mut s = canvas(4, 4);
        let mut src = RgbaImage::from_pixel(2, 1, Color::transparent().into());
        src.put_pixel(1, 0, Color::RED.into());
        s.blit(&src, Point::new(0, 0), BlitMode::Masked);
        assert_eq!(at(&s, 0, 0), Color::WHITE);
        assert_eq!(at(&s, 1, 0), Color::RED);
    }

    #[test]
    fn blit_clips_negative_origin() {
        let mut s = canvas(3, 3);
        let src = RgbaImage::from_pixel(2, 2, Color::GREEN.into());
        s.blit(&src, Point::new(-1, -1), BlitMode::Composite);
        assert_eq!(at(&s, 0, 0), Color::GREEN);
        assert_eq!(at(&s, 1, 1), Color::WHITE);
    }

    #[test]
    fn opaque_image_round_trips() {
        let src = RgbaImage::from_fn(5, 3, |x, y| Rgba([x as u8 * 40, y as u8 * 70, 9, 255]));
        assert_eq!(Surface::from_image(&src).into_image(), src);
    }

    // ── text ─────────────────────────────────────────────────────────────

    #[test]
    fn text_lands_at_origin() {
        let mut s = canvas(20, 20);
        s.draw_text(&BlockFace::new(0.5), "ab", 8.0, Point::new(2, 3), Color::BLACK);
        assert_eq!(at(&s, 2, 3), Color::BLACK);
        assert_eq!(at(&s, 9, 10), Color::BLACK);
        assert_eq!(at(&s, 10, 3), Color::WHITE);
        assert_eq!(at(&s, 2, 11), Color::WHITE);
    }
}
