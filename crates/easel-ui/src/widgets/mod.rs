//! Built-in widgets.

pub mod frame;
pub mod grid;
pub mod image_box;
pub mod spacer;
pub mod split;
pub mod text_box;

use easel_engine::coords::{Point, Size};

use crate::background::Background;
use crate::error::Result;
use crate::layout::LayoutCtx;
use crate::painter::Painter;
use crate::widget::Element;

/// Default gap between container items, in pixels.
pub const DEFAULT_SEP: u32 = 8;

/// How container items are sized along the layout axis.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SizeMode {
    /// Items keep their intrinsic sizes (scaled by ratios where given).
    #[default]
    Fixed,
    /// Items share the container's fixed extent.
    Expand,
}

impl SizeMode {
    pub(crate) fn name(self) -> &'static str {
        match self {
            SizeMode::Fixed => "fixed",
            SizeMode::Expand => "expand",
        }
    }
}

/// Draws `child` into a `size` region at `pos` inside the current region.
pub(crate) fn draw_child(
    painter: &mut Painter,
    ctx: &LayoutCtx,
    child: &Element,
    pos: Point,
    size: Size,
    item_bg: Option<&Background>,
) -> Result<()> {
    painter.scoped(|p| {
        p.move_region(pos, Some(size));
        child.draw(p, ctx, item_bg)
    })
}
