use easel_engine::coords::Size;
use easel_engine::paint::Color;
use easel_engine::raster::Surface;
use easel_engine::text::FontSystem;
use image::RgbaImage;

use crate::background::Background;
use crate::error::{LayoutError, Result};
use crate::layout::{Edges, LayoutCtx};
use crate::painter::Painter;
use crate::widget::{Container, Element, Widget, WidgetBase};
use crate::widgets::frame::Frame;

/// Root of a widget tree: a [`Frame`] that renders itself into a new image.
///
/// ```rust,ignore
/// let image = Canvas::new()
///     .bg(FillBg::new(Color::WHITE))
///     .padding(16)
///     .build(|s| {
///         s.add(TextBox::new("hello"));
///     })
///     .render(&fonts)?;
/// ```
///
/// The canvas is the image itself, so its margin must stay zero; a render
/// with any other margin fails with [`LayoutError::CanvasMargin`].
pub struct Canvas {
    frame: Frame,
    debug: bool,
}

impl Canvas {
    pub fn new() -> Self {
        Self { frame: Frame::new(), debug: false }
    }

    /// Outline every widget's region in the rendered image.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sizes the tree, draws it onto a transparent image of exactly the
    /// canvas's self size and returns the image.
    ///
    /// Any layout, font or image error aborts the render.
    pub fn render(&self, fonts: &FontSystem) -> Result<RgbaImage> {
        let margin = self.base().margin();
        if margin != Edges::default() {
            return Err(LayoutError::CanvasMargin(margin));
        }

        let ctx = LayoutCtx::new(fonts).debug(self.debug);
        self.invalidate_tree();

        let size = self.self_size(&ctx)?;
        log::debug!("rendering canvas {}x{}", size.w, size.h);

        let mut painter = Painter::new(Surface::new(size, Color::transparent()));
        self.draw(&mut painter, &ctx, None)?;
        Ok(painter.into_surface().into_image())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Canvas {
    fn base(&self) -> &WidgetBase {
        self.frame.base()
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        self.frame.base_mut()
    }

    fn kind(&self) -> &'static str {
        "Canvas"
    }

    fn children(&self) -> &[Element] {
        self.frame.children()
    }

    fn content_size(&self, ctx: &LayoutCtx) -> Result<Size> {
        self.frame.content_size(ctx)
    }

    fn draw_content(&self, painter: &mut Painter, ctx: &LayoutCtx) -> Result<()> {
        self.frame.draw_content(painter, ctx)
    }
}

impl Container for Canvas {
    fn items_mut(&mut self) -> &mut Vec<Element> {
        self.frame.items_mut()
    }

    fn item_bg_mut(&mut self) -> &mut Option<Background> {
        self.frame.item_bg_mut()
    }
}
