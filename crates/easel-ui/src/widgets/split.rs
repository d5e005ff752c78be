use easel_engine::coords::{Align, Point, Size};

use crate::background::Background;
use crate::error::{Dimension, LayoutError, Result};
use crate::layout::LayoutCtx;
use crate::painter::Painter;
use crate::widget::{Container, Element, Widget, WidgetBase};
use crate::widgets::{draw_child, SizeMode, DEFAULT_SEP};

/// Direction items flow in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    #[inline]
    fn main(self, s: Size) -> u32 {
        match self {
            Axis::Horizontal => s.w,
            Axis::Vertical => s.h,
        }
    }

    #[inline]
    fn cross(self, s: Size) -> u32 {
        match self {
            Axis::Horizontal => s.h,
            Axis::Vertical => s.w,
        }
    }

    #[inline]
    fn size(self, main: u32, cross: u32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    #[inline]
    fn point(self, main: i32) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, 0),
            Axis::Vertical => Point::new(0, main),
        }
    }

    fn dimension(self) -> Dimension {
        match self {
            Axis::Horizontal => Dimension::Width,
            Axis::Vertical => Dimension::Height,
        }
    }
}

/// One-dimensional flow of items with `sep` pixels between neighbours.
///
/// Each item gets a cell whose main-axis length comes from its ratio times a
/// shared unit, and whose cross-axis length is the largest item's. Items are
/// aligned inside their cells by `item_align`.
///
/// In [`SizeMode::Fixed`] the unit is the smallest one that fits every item
/// at its ratio; ratios default to the items' own main-axis sizes, which
/// gives every item exactly its intrinsic length. In [`SizeMode::Expand`] the
/// split's own fixed main-axis size is shared out by ratio.
pub struct Split {
    base: WidgetBase,
    axis: Axis,
    items: Vec<Element>,
    item_bg: Option<Background>,
    ratios: Option<Vec<f64>>,
    sep: u32,
    mode: SizeMode,
    item_align: Align,
}

impl Split {
    pub fn new(axis: Axis) -> Self {
        Self {
            base: WidgetBase::new(),
            axis,
            items: Vec::new(),
            item_bg: None,
            ratios: None,
            sep: DEFAULT_SEP,
            mode: SizeMode::Fixed,
            item_align: Align::CENTER,
        }
    }

    /// Items laid out left to right.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Items laid out top to bottom.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn sep(mut self, sep: u32) -> Self {
        self.sep = sep;
        self.base.invalidate();
        self
    }

    /// Relative main-axis share per item, one value per item.
    pub fn ratios(mut self, ratios: impl IntoIterator<Item = f64>) -> Self {
        self.ratios = Some(ratios.into_iter().collect());
        self.base.invalidate();
        self
    }

    pub fn item_size_mode(mut self, mode: SizeMode) -> Self {
        self.mode = mode;
        self.base.invalidate();
        self
    }

    pub fn item_align(mut self, align: Align) -> Self {
        self.item_align = align;
        self
    }

    /// Cell size of every item, in order.
    fn cells(&self, ctx: &LayoutCtx) -> Result<Vec<Size>> {
        if self.items.is_empty() {
            return Ok(Vec::new());
        }
        let axis = self.axis;
        let sizes = self.items.iter().map(|item| item.self_size(ctx)).collect::<Result<Vec<_>>>()?;

        let ratios: Vec<f64> = match &self.ratios {
            Some(r) if r.len() != sizes.len() => {
                return Err(LayoutError::RatioCount { widget: self.kind(), ratios: r.len(), items: sizes.len() });
            }
            Some(r) => {
                if let Some(bad) = r.iter().find(|r| !r.is_finite() || **r <= 0.0) {
                    return Err(LayoutError::InvalidRatio { widget: self.kind(), ratio: *bad });
                }
                r.clone()
            }
            None => sizes.iter().map(|s| axis.main(*s) as f64).collect(),
        };

        let unit = match self.mode {
            SizeMode::Fixed => ratios
                .iter()
                .zip(&sizes)
                .filter(|(r, _)| **r > 0.0)
                .map(|(r, s)| axis.main(*s) as f64 / r)
                .fold(0.0, f64::max),
            SizeMode::Expand => {
                let (extent, padding) = match axis {
                    Axis::Horizontal => (self.base.width(), self.base.padding().h),
                    Axis::Vertical => (self.base.height(), self.base.padding().v),
                };
                let extent = extent.ok_or(LayoutError::MissingExtent {
                    widget: self.kind(),
                    mode: self.mode.name(),
                    axis: axis.dimension(),
                })?;
                let gaps = self.sep as f64 * (sizes.len() - 1) as f64;
                let available = (extent as f64 - gaps - 2.0 * padding as f64).max(0.0);
                let total: f64 = ratios.iter().sum();
                if total > 0.0 { available / total } else { 0.0 }
            }
        };

        let cross = sizes.iter().map(|s| axis.cross(*s)).max().unwrap_or(0);
        ratios
            .iter()
            .map(|r| {
                let main = (unit * r).floor();
                if !main.is_finite() || main > i32::MAX as f64 {
                    return Err(self.overflow());
                }
                Ok(axis.size(main as u32, cross))
            })
            .collect()
    }

    fn overflow(&self) -> LayoutError {
        LayoutError::Overflow { widget: self.kind(), axis: self.axis.dimension() }
    }
}

impl Widget for Split {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "HSplit",
            Axis::Vertical => "VSplit",
        }
    }

    fn children(&self) -> &[Element] {
        &self.items
    }

    fn content_size(&self, ctx: &LayoutCtx) -> Result<Size> {
        let cells = self.cells(ctx)?;
        if cells.is_empty() {
            return Ok(Size::zero());
        }
        let main = cells
            .iter()
            .try_fold(0u32, |acc, c| acc.checked_add(self.axis.main(*c)))
            .and_then(|main| main.checked_add(self.sep.checked_mul(cells.len() as u32 - 1)?))
            .ok_or_else(|| self.overflow())?;
        Ok(self.axis.size(main, self.axis.cross(cells[0])))
    }

    fn draw_content(&self, painter: &mut Painter, ctx: &LayoutCtx) -> Result<()> {
        let cells = self.cells(ctx)?;
        let mut cursor = 0i32;
        for (item, cell) in self.items.iter().zip(cells) {
            let size = item.self_size(ctx)?;
            let pos = self.axis.point(cursor) + self.item_align.place(cell, size);
            draw_child(painter, ctx, item, pos, size, self.item_bg.as_ref())?;
            let step = self.axis.main(cell).saturating_add(self.sep);
            cursor = cursor.saturating_add(i32::try_from(step).unwrap_or(i32::MAX));
        }
        Ok(())
    }
}

impl Container for Split {
    fn items_mut(&mut self) -> &mut Vec<Element> {
        &mut self.items
    }

    fn item_bg_mut(&mut self) -> &mut Option<Background> {
        &mut self.item_bg
    }
}
