use easel_engine::coords::Size;

use crate::background::Background;
use crate::error::Result;
use crate::layout::LayoutCtx;
use crate::painter::Painter;
use crate::widget::{Container, Element, Widget, WidgetBase};
use crate::widgets::draw_child;

/// Overlay container: every child is placed in the same box, aligned by the
/// frame's content alignment. Later children draw on top.
pub struct Frame {
    base: WidgetBase,
    items: Vec<Element>,
    item_bg: Option<Background>,
}

impl Frame {
    pub fn new() -> Self {
        Self { base: WidgetBase::new(), items: Vec::new(), item_bg: None }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Frame {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "Frame"
    }

    fn children(&self) -> &[Element] {
        &self.items
    }

    fn content_size(&self, ctx: &LayoutCtx) -> Result<Size> {
        self.items
            .iter()
            .try_fold(Size::zero(), |acc, item| Ok(acc.max(item.self_size(ctx)?)))
    }

    fn draw_content(&self, painter: &mut Painter, ctx: &LayoutCtx) -> Result<()> {
        let region = painter.size();
        for item in &self.items {
            let size = item.self_size(ctx)?;
            let pos = self.base.content_align().place(region, size);
            draw_child(painter, ctx, item, pos, size, self.item_bg.as_ref())?;
        }
        Ok(())
    }
}

impl Container for Frame {
    fn items_mut(&mut self) -> &mut Vec<Element> {
        &mut self.items
    }

    fn item_bg_mut(&mut self) -> &mut Option<Background> {
        &mut self.item_bg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_engine::coords::{Align, Point};
    use easel_engine::paint::Color;
    use easel_engine::raster::Surface;
    use easel_engine::text::{FontConfig, FontSystem};

    use crate::background::FillBg;
    use crate::widget::WidgetExt;
    use crate::widgets::spacer::Spacer;

    fn fonts() -> FontSystem {
        FontSystem::new(FontConfig::with_dirs(Vec::<std::path::PathBuf>::new()))
    }

    #[test]
    fn content_is_bounding_box_of_children() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let f = Frame::new().child(Spacer::new(30, 5)).child(Spacer::new(10, 20));
        assert_eq!(f.content_size(&ctx).unwrap(), Size::new(30, 20));
    }

    #[test]
    fn empty_frame_is_zero() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        assert_eq!(Frame::new().self_size(&ctx).unwrap(), Size::zero());
    }

    #[test]
    fn children_are_aligned_by_content_align() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let f = Frame::new()
            .content_align(Align::BOTTOM_RIGHT)
            .child(Spacer::new(10, 10))
            .child(Spacer::new(4, 4).bg(FillBg::new(Color::RED)));
        let size = f.self_size(&ctx).unwrap();
        let mut p = Painter::new(Surface::new(size, Color::WHITE));
        f.draw(&mut p, &ctx, None).unwrap();

        let at = |x, y| p.surface().pixel(Point::new(x, y)).unwrap();
        assert_eq!(at(6, 6), Color::RED);
        assert_eq!(at(9, 9), Color::RED);
        assert_eq!(at(5, 5), Color::WHITE);
    }

    #[test]
    fn item_bg_is_painted_behind_children() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let f = Frame::new().item_bg(FillBg::new(Color::BLUE)).child(Spacer::new(3, 3));
        let mut p = Painter::new(Surface::new(Size::new(3, 3), Color::WHITE));
        f.draw(&mut p, &ctx, None).unwrap();
        assert_eq!(p.surface().pixel(Point::new(1, 1)), Some(Color::BLUE));
    }
}
