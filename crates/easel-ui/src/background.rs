use std::path::Path;
use std::sync::Arc;

use easel_engine::coords::{Align, CornerRadii, Corners, Point, Rect, Size};
use easel_engine::paint::{Border, Paint};
use image::DynamicImage;

use crate::error::Result;
use crate::painter::Painter;

/// What a widget paints behind its padding box.
///
/// Backgrounds draw into the widget's region after the margin is removed and
/// before padding is applied.
#[derive(Debug, Clone)]
pub enum Background {
    Fill(FillBg),
    RoundRect(RoundRectBg),
    Image(ImageBg),
}

impl Background {
    pub fn draw(&self, painter: &mut Painter) {
        let size = painter.size();
        match self {
            Background::Fill(bg) => {
                painter.rect(Point::zero(), size, &bg.paint, bg.border.as_ref());
            }
            Background::RoundRect(bg) => {
                let radii = CornerRadii::rounded(bg.radius, bg.corners);
                painter.rounded_rect(Point::zero(), size, &bg.paint, radii, bg.border.as_ref());
            }
            Background::Image(bg) => bg.draw(painter),
        }
    }
}

impl From<FillBg> for Background {
    fn from(bg: FillBg) -> Self {
        Background::Fill(bg)
    }
}

impl From<RoundRectBg> for Background {
    fn from(bg: RoundRectBg) -> Self {
        Background::RoundRect(bg)
    }
}

impl From<ImageBg> for Background {
    fn from(bg: ImageBg) -> Self {
        Background::Image(bg)
    }
}

// ── FillBg ────────────────────────────────────────────────────────────────

/// Flat or gradient rectangle with an optional inner border.
#[derive(Debug, Clone)]
pub struct FillBg {
    pub paint: Paint,
    pub border: Option<Border>,
}

impl FillBg {
    pub fn new(paint: impl Into<Paint>) -> Self {
        Self { paint: paint.into(), border: None }
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }
}

// ── RoundRectBg ───────────────────────────────────────────────────────────

/// Rounded rectangle; each corner can be switched off individually.
#[derive(Debug, Clone)]
pub struct RoundRectBg {
    pub paint: Paint,
    pub radius: f32,
    pub corners: Corners,
    pub border: Option<Border>,
}

impl RoundRectBg {
    pub fn new(paint: impl Into<Paint>, radius: f32) -> Self {
        Self { paint: paint.into(), radius, corners: Corners::ALL, border: None }
    }

    pub fn corners(mut self, corners: Corners) -> Self {
        self.corners = corners;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }
}

// ── ImageBg ───────────────────────────────────────────────────────────────

/// How an [`ImageBg`] is placed in its region.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ImageBgMode {
    /// Scale preserving aspect ratio until the region is covered, then align.
    #[default]
    Fit,
    /// Stretch to exactly the region.
    Fill,
    /// Original size, aligned.
    Fixed,
    /// Original size, tiled from the top-left corner.
    Repeat,
}

/// Background image. Whatever falls outside the region is cropped.
#[derive(Debug, Clone)]
pub struct ImageBg {
    image: Arc<DynamicImage>,
    pub align: Align,
    pub mode: ImageBgMode,
}

impl ImageBg {
    pub fn new(image: impl Into<Arc<DynamicImage>>) -> Self {
        Self { image: image.into(), align: Align::CENTER, mode: ImageBgMode::Fit }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(image::open(path)?))
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn mode(mut self, mode: ImageBgMode) -> Self {
        self.mode = mode;
        self
    }

    /// Applies a Gaussian blur once, up front; drawing reuses the result.
    pub fn blur(mut self, sigma: f32) -> Self {
        if sigma > 0.0 {
            self.image = Arc::new(self.image.blur(sigma));
        }
        self
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    fn draw(&self, painter: &mut Painter) {
        let region = painter.size();
        let src = Size::new(self.image.width(), self.image.height());
        if src.is_empty() || region.is_empty() {
            return;
        }

        match self.mode {
            ImageBgMode::Fit => {
                let scale = (region.w as f64 / src.w as f64).max(region.h as f64 / src.h as f64);
                let scaled = Size::new((src.w as f64 * scale) as u32, (src.h as f64 * scale) as u32);
                if scaled.is_empty() {
                    return;
                }
                let resized = self.image.resize_exact(scaled.w, scaled.h, image::imageops::FilterType::CatmullRom);
                paste_cropped(painter, &resized, self.align.place(region, scaled));
            }
            ImageBgMode::Fill => {
                painter.paste(&self.image, Point::zero(), Some(region));
            }
            ImageBgMode::Fixed => {
                paste_cropped(painter, &self.image, self.align.place(region, src));
            }
            ImageBgMode::Repeat => {
                for y in (0..region.h).step_by(src.h as usize) {
                    for x in (0..region.w).step_by(src.w as usize) {
                        paste_cropped(painter, &self.image, Point::new(x as i32, y as i32));
                    }
                }
            }
        }
    }
}

/// Pastes the part of `image` placed at `pos` that overlaps the region.
fn paste_cropped(painter: &mut Painter, image: &DynamicImage, pos: Point) {
    let placed = Rect::from_origin_size(pos, Size::new(image.width(), image.height()));
    let region = Rect::from_origin_size(Point::zero(), painter.size());
    let Some(visible) = placed.intersect(region) else {
        return;
    };
    if visible == placed {
        painter.paste(image, pos, None);
        return;
    }
    let from = visible.origin - pos;
    let part = image.crop_imm(from.x as u32, from.y as u32, visible.size.w, visible.size.h);
    painter.paste(&part, visible.origin, None);
}
