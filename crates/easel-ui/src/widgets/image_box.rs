use std::path::Path;
use std::sync::Arc;

use easel_engine::coords::{Point, Size};
use image::DynamicImage;

use crate::error::{Dimension, LayoutError, Result};
use crate::layout::LayoutCtx;
use crate::painter::Painter;
use crate::widget::{Widget, WidgetBase};

/// How an [`ImageBox`] derives its content size from the source image.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ImageFit {
    /// The source's own pixel size.
    #[default]
    Original,
    /// Largest aspect-preserving size within the fixed width and/or height.
    Fit,
    /// Exactly the fixed box when both are set; otherwise aspect-preserving
    /// scale to the one that is set.
    Fill,
}

impl ImageFit {
    fn name(self) -> &'static str {
        match self {
            ImageFit::Original => "original",
            ImageFit::Fit => "fit",
            ImageFit::Fill => "fill",
        }
    }
}

/// A raster image, optionally scaled to a fixed width or height.
pub struct ImageBox {
    base: WidgetBase,
    image: Arc<DynamicImage>,
    fit: ImageFit,
    alpha_blend: bool,
}

impl ImageBox {
    pub fn new(image: impl Into<Arc<DynamicImage>>) -> Self {
        Self { base: WidgetBase::new(), image: image.into(), fit: ImageFit::Original, alpha_blend: false }
    }

    /// Loads and decodes the image at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)?;
        log::debug!("decoded {} ({}x{})", path.display(), image.width(), image.height());
        Ok(Self::new(image))
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn set_image(&mut self, image: impl Into<Arc<DynamicImage>>) {
        self.image = image.into();
        self.base.invalidate();
    }

    pub fn fit(mut self, fit: ImageFit) -> Self {
        self.fit = fit;
        self.base.invalidate();
        self
    }

    /// Composite with source-over blending instead of pasting through the
    /// image's alpha mask.
    pub fn alpha_blend(mut self, on: bool) -> Self {
        self.alpha_blend = on;
        self
    }

    /// `Fit` and `Fill` need at least one of the two extents.
    fn missing_extent(&self) -> LayoutError {
        LayoutError::MissingExtent { widget: self.kind(), mode: self.fit.name(), axis: Dimension::Any }
    }
}

fn scaled(src: Size, scale: f64) -> Size {
    Size::new((src.w as f64 * scale) as u32, (src.h as f64 * scale) as u32)
}

impl Widget for ImageBox {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "ImageBox"
    }

    fn content_size(&self, _ctx: &LayoutCtx) -> Result<Size> {
        let src = Size::new(self.image.width(), self.image.height());
        if self.fit == ImageFit::Original {
            return Ok(src);
        }
        if src.is_empty() {
            return Ok(Size::zero());
        }

        let tw = self.base.content_width_limit(self.kind())?;
        let th = self.base.content_height_limit(self.kind())?;
        let sx = |w: u32| w as f64 / src.w as f64;
        let sy = |h: u32| h as f64 / src.h as f64;

        Ok(match (tw, th) {
            (None, None) => return Err(self.missing_extent()),
            (Some(w), Some(h)) if self.fit == ImageFit::Fill => Size::new(w, h),
            (Some(w), Some(h)) => scaled(src, sx(w).min(sy(h))),
            (Some(w), None) => scaled(src, sx(w)),
            (None, Some(h)) => scaled(src, sy(h)),
        })
    }

    fn draw_content(&self, painter: &mut Painter, _ctx: &LayoutCtx) -> Result<()> {
        let size = painter.size();
        if size.is_empty() {
            return Ok(());
        }
        if self.alpha_blend {
            painter.paste_blended(&self.image, Point::zero(), Some(size));
        } else {
            painter.paste(&self.image, Point::zero(), Some(size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_engine::paint::Color;
    use easel_engine::raster::Surface;
    use easel_engine::text::{FontConfig, FontSystem};
    use image::{Rgba, RgbaImage};

    use crate::widget::WidgetExt;

    fn fonts() -> FontSystem {
        FontSystem::new(FontConfig::with_dirs(Vec::<std::path::PathBuf>::new()))
    }

    fn image(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba([0, 0, 255, 255])))
    }

    #[test]
    fn original_uses_source_size() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        assert_eq!(ImageBox::new(image(37, 21)).self_size(&ctx).unwrap(), Size::new(37, 21));
    }

    #[test]
    fn fit_takes_the_tighter_bound() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let b = ImageBox::new(image(200, 100)).fit(ImageFit::Fit).size(Some(50), Some(50));
        assert_eq!(b.content_size(&ctx).unwrap(), Size::new(50, 25));
        let b = ImageBox::new(image(200, 100)).fit(ImageFit::Fit).height(20);
        assert_eq!(b.content_size(&ctx).unwrap(), Size::new(40, 20));
    }

    #[test]
    fn fit_without_bounds_is_an_error() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let b = ImageBox::new(image(2, 2)).fit(ImageFit::Fit);
        let err = b.content_size(&ctx).unwrap_err();
        assert!(matches!(err, LayoutError::MissingExtent { mode: "fit", axis: Dimension::Any, .. }));
        assert_eq!(err.to_string(), "ImageBox: fit sizing requires a fixed width or height");
    }

    #[test]
    fn fill_uses_exact_box_or_single_bound() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let b = ImageBox::new(image(200, 100)).fit(ImageFit::Fill).size(Some(30), Some(70));
        assert_eq!(b.content_size(&ctx).unwrap(), Size::new(30, 70));
        let b = ImageBox::new(image(200, 100)).fit(ImageFit::Fill).width(50);
        assert_eq!(b.content_size(&ctx).unwrap(), Size::new(50, 25));
    }

    #[test]
    fn empty_image_is_zero_sized() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let b = ImageBox::new(image(0, 0)).fit(ImageFit::Fit).width(10);
        assert_eq!(b.content_size(&ctx).unwrap(), Size::zero());
    }

    #[test]
    fn draws_scaled_into_content_box() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let b = ImageBox::new(image(4, 2)).fit(ImageFit::Fit).width(8);
        let size = b.self_size(&ctx).unwrap();
        assert_eq!(size, Size::new(8, 4));
        let mut p = Painter::new(Surface::new(size, Color::WHITE));
        b.draw(&mut p, &ctx, None).unwrap();
        assert_eq!(p.surface().pixel(Point::new(7, 3)), Some(Color::BLUE));
    }
}
