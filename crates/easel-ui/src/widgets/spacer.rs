use easel_engine::coords::Size;

use crate::error::Result;
use crate::layout::LayoutCtx;
use crate::painter::Painter;
use crate::widget::{Widget, WidgetBase};

/// Empty box of a fixed size. Draws only its background, if any.
pub struct Spacer {
    base: WidgetBase,
}

impl Spacer {
    pub fn new(width: u32, height: u32) -> Self {
        let mut base = WidgetBase::new();
        base.set_width(Some(width));
        base.set_height(Some(height));
        Self { base }
    }
}

impl Default for Spacer {
    /// Zero-sized until `width`/`height` are set.
    fn default() -> Self {
        Self { base: WidgetBase::new() }
    }
}

impl Widget for Spacer {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "Spacer"
    }

    fn content_size(&self, _ctx: &LayoutCtx) -> Result<Size> {
        Ok(Size::new(
            self.base.content_width_limit(self.kind())?.unwrap_or(0),
            self.base.content_height_limit(self.kind())?.unwrap_or(0),
        ))
    }

    fn draw_content(&self, _painter: &mut Painter, _ctx: &LayoutCtx) -> Result<()> {
        Ok(())
    }
}
