use easel_engine::coords::{Align, Point, Size};

use crate::background::Background;
use crate::error::{Dimension, LayoutError, Result};
use crate::layout::LayoutCtx;
use crate::painter::Painter;
use crate::widget::{Container, Element, Widget, WidgetBase};
use crate::widgets::{draw_child, SizeMode, DEFAULT_SEP};

/// Which grid dimension is fixed; the other follows from the item count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridDim {
    Rows(u32),
    Cols(u32),
}

/// Uniform two-dimensional layout, filled row by row, or column by column
/// when [`Grid::vertical`] is set.
///
/// All cells share one size: the largest item in [`SizeMode::Fixed`], or the
/// grid's fixed width and height divided evenly in [`SizeMode::Expand`].
pub struct Grid {
    base: WidgetBase,
    items: Vec<Element>,
    item_bg: Option<Background>,
    dim: GridDim,
    mode: SizeMode,
    item_align: Align,
    hsep: u32,
    vsep: u32,
    vertical: bool,
}

struct Shape {
    rows: u32,
    cols: u32,
    cell: Size,
}

impl Grid {
    fn new(dim: GridDim) -> Self {
        Self {
            base: WidgetBase::new(),
            items: Vec::new(),
            item_bg: None,
            dim,
            mode: SizeMode::Fixed,
            item_align: Align::CENTER,
            hsep: DEFAULT_SEP,
            vsep: DEFAULT_SEP,
            vertical: false,
        }
    }

    /// A grid with `rows` rows; columns are derived.
    pub fn with_rows(rows: u32) -> Result<Self> {
        Ok(Self::new(checked(GridDim::Rows(rows))?))
    }

    /// A grid with `cols` columns; rows are derived.
    pub fn with_cols(cols: u32) -> Result<Self> {
        Ok(Self::new(checked(GridDim::Cols(cols))?))
    }

    pub fn dim(&self) -> GridDim {
        self.dim
    }

    /// Fixes the row count instead of whatever was fixed before.
    pub fn set_rows(&mut self, rows: u32) -> Result<()> {
        self.dim = checked(GridDim::Rows(rows))?;
        self.base.invalidate();
        Ok(())
    }

    /// Fixes the column count instead of whatever was fixed before.
    pub fn set_cols(&mut self, cols: u32) -> Result<()> {
        self.dim = checked(GridDim::Cols(cols))?;
        self.base.invalidate();
        Ok(())
    }

    /// Horizontal and vertical gaps between cells.
    pub fn sep(mut self, hsep: u32, vsep: u32) -> Self {
        self.hsep = hsep;
        self.vsep = vsep;
        self.base.invalidate();
        self
    }

    pub fn hsep(mut self, hsep: u32) -> Self {
        self.hsep = hsep;
        self.base.invalidate();
        self
    }

    pub fn vsep(mut self, vsep: u32) -> Self {
        self.vsep = vsep;
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

    /// Fill columns top to bottom before moving right.
    pub fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    /// `(row, col)` of the item at `idx`.
    fn cell_of(&self, idx: u32, rows: u32, cols: u32) -> (u32, u32) {
        if self.vertical { (idx % rows, idx / rows) } else { (idx / cols, idx % cols) }
    }

    /// `(rows, cols)` for the current item count.
    pub fn rows_cols(&self) -> (u32, u32) {
        let k = self.items.len() as u32;
        if k == 0 {
            return (0, 0);
        }
        match self.dim {
            GridDim::Rows(r) => (r, k.div_ceil(r)),
            GridDim::Cols(c) => (k.div_ceil(c), c),
        }
    }

    fn shape(&self, ctx: &LayoutCtx) -> Result<Shape> {
        let (rows, cols) = self.rows_cols();
        if rows == 0 {
            return Ok(Shape { rows, cols, cell: Size::zero() });
        }

        let cell = match self.mode {
            SizeMode::Fixed => self
                .items
                .iter()
                .try_fold(Size::zero(), |acc, item| Ok::<_, LayoutError>(acc.max(item.self_size(ctx)?)))?,
            SizeMode::Expand => {
                let missing = |axis| LayoutError::MissingExtent { widget: "Grid", mode: self.mode.name(), axis };
                let w = self.base.width().ok_or_else(|| missing(Dimension::Width))?;
                let h = self.base.height().ok_or_else(|| missing(Dimension::Height))?;
                let pad = self.base.padding();
                let avail_w = w.saturating_sub(self.hsep * (cols - 1) + 2 * pad.h);
                let avail_h = h.saturating_sub(self.vsep * (rows - 1) + 2 * pad.v);
                Size::new(avail_w / cols, avail_h / rows)
            }
        };
        Ok(Shape { rows, cols, cell })
    }
}

fn checked(dim: GridDim) -> Result<GridDim> {
    match dim {
        GridDim::Rows(0) => Err(LayoutError::ZeroCount("row")),
        GridDim::Cols(0) => Err(LayoutError::ZeroCount("column")),
        dim => Ok(dim),
    }
}

impl Widget for Grid {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "Grid"
    }

    fn children(&self) -> &[Element] {
        &self.items
    }

    fn content_size(&self, ctx: &LayoutCtx) -> Result<Size> {
        let Shape { rows, cols, cell } = self.shape(ctx)?;
        if rows == 0 {
            return Ok(Size::zero());
        }
        Ok(Size::new(
            cols * cell.w + self.hsep * (cols - 1),
            rows * cell.h + self.vsep * (rows - 1),
        ))
    }

    fn draw_content(&self, painter: &mut Painter, ctx: &LayoutCtx) -> Result<()> {
        let Shape { rows, cols, cell } = self.shape(ctx)?;
        for (idx, item) in self.items.iter().enumerate() {
            let (row, col) = self.cell_of(idx as u32, rows, cols);
            let origin = Point::new(
                (col * (cell.w + self.hsep)) as i32,
                (row * (cell.h + self.vsep)) as i32,
            );
            let size = item.self_size(ctx)?;
            let pos = origin + self.item_align.place(cell, size);
            draw_child(painter, ctx, item, pos, size, self.item_bg.as_ref())?;
        }
        Ok(())
    }
}

impl Container for Grid {
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
    use easel_engine::paint::Color;
    use easel_engine::raster::Surface;
    use easel_engine::text::{FontConfig, FontSystem};

    use crate::background::FillBg;
    use crate::widget::WidgetExt;
    use crate::widgets::spacer::Spacer;

    fn fonts() -> FontSystem {
        FontSystem::new(FontConfig::with_dirs(Vec::<std::path::PathBuf>::new()))
    }

    fn spacers(n: usize) -> Vec<Spacer> {
        (0..n).map(|_| Spacer::new(10, 10)).collect()
    }

    // ── shape ────────────────────────────────────────────────────────────

    #[test]
    fn columns_derive_from_rows_by_ceiling() {
        for (rows, k, cols) in [(2, 5, 3), (3, 3, 1), (4, 9, 3), (1, 7, 7)] {
            let g = Grid::with_rows(rows).unwrap().items(spacers(k));
            assert_eq!(g.rows_cols(), (rows, cols), "rows={rows} k={k}");
        }
    }

    #[test]
    fn rows_derive_from_cols_by_ceiling() {
        let g = Grid::with_cols(4).unwrap().items(spacers(10));
        assert_eq!(g.rows_cols(), (3, 4));
    }

    #[test]
    fn zero_count_is_rejected_up_front() {
        assert!(matches!(Grid::with_rows(0), Err(LayoutError::ZeroCount("row"))));
        assert!(matches!(Grid::with_cols(0), Err(LayoutError::ZeroCount("column"))));

        let mut g = Grid::with_rows(2).unwrap();
        assert!(g.set_cols(0).is_err());
        assert_eq!(g.dim(), GridDim::Rows(2));
        g.set_cols(3).unwrap();
        assert_eq!(g.dim(), GridDim::Cols(3));
    }

    // ── sizing ───────────────────────────────────────────────────────────

    #[test]
    fn fixed_cells_use_largest_item() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let g = Grid::with_cols(2)
            .unwrap()
            .sep(4, 2)
            .child(Spacer::new(10, 3))
            .child(Spacer::new(5, 8))
            .child(Spacer::new(1, 1));
        // cell 10x8, 2 cols x 2 rows
        assert_eq!(g.content_size(&ctx).unwrap(), Size::new(24, 18));
    }

    #[test]
    fn expand_divides_fixed_size() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let g = Grid::with_cols(2)
            .unwrap()
            .sep(10, 10)
            .size(Some(110), Some(50))
            .item_size_mode(SizeMode::Expand)
            .items(spacers(2));
        assert_eq!(g.content_size(&ctx).unwrap(), Size::new(110, 50));
    }

    #[test]
    fn expand_needs_both_dimensions() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let g = Grid::with_rows(1).unwrap().width(100).item_size_mode(SizeMode::Expand).items(spacers(1));
        assert!(matches!(
            g.content_size(&ctx),
            Err(LayoutError::MissingExtent { axis: Dimension::Height, .. })
        ));
    }

    #[test]
    fn empty_grid_is_zero() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        assert_eq!(Grid::with_rows(3).unwrap().self_size(&ctx).unwrap(), Size::zero());
    }

    // ── drawing ──────────────────────────────────────────────────────────

    #[test]
    fn items_fill_row_major() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let g = Grid::with_cols(2)
            .unwrap()
            .sep(0, 0)
            .child(Spacer::new(2, 2))
            .child(Spacer::new(2, 2))
            .child(Spacer::new(2, 2).bg(FillBg::new(Color::RED)));
        let size = g.self_size(&ctx).unwrap();
        assert_eq!(size, Size::new(4, 4));

        let mut p = Painter::new(Surface::new(size, Color::WHITE));
        g.draw(&mut p, &ctx, None).unwrap();
        assert_eq!(p.surface().pixel(Point::new(0, 2)), Some(Color::RED));
        assert_eq!(p.surface().pixel(Point::new(2, 2)), Some(Color::WHITE));
    }

    #[test]
    fn vertical_fills_column_major() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let g = Grid::with_rows(2)
            .unwrap()
            .sep(0, 0)
            .vertical(true)
            .child(Spacer::new(2, 2))
            .child(Spacer::new(2, 2).bg(FillBg::new(Color::BLUE)))
            .child(Spacer::new(2, 2).bg(FillBg::new(Color::RED)));
        let size = g.self_size(&ctx).unwrap();
        assert_eq!(size, Size::new(4, 4));

        let mut p = Painter::new(Surface::new(size, Color::WHITE));
        g.draw(&mut p, &ctx, None).unwrap();
        // idx 1 -> (row 1, col 0), idx 2 -> (row 0, col 1)
        assert_eq!(p.surface().pixel(Point::new(0, 2)), Some(Color::BLUE));
        assert_eq!(p.surface().pixel(Point::new(2, 0)), Some(Color::RED));
        assert_eq!(p.surface().pixel(Point::new(2, 2)), Some(Color::WHITE));
    }
}
