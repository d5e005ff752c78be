use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle as GlyphRun};

/// Ink bounding box of a laid-out string, relative to the pen origin
/// (top-left of the line box).
///
/// `x`/`y` are usually small positive numbers: the side bearing of the first
/// glyph and the gap between the ascender line and the tallest glyph. Drawing
/// code subtracts them so the visible ink lands exactly where requested.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// A typeface that can measure and rasterize a single line of text.
pub trait Face {
    /// Ink bounds of `text` at `px` pixels per em.
    fn bounds(&self, text: &str, px: f32) -> TextBounds;

    /// Rasterizes `text` at `px`, reporting `(x, y, coverage)` for every
    /// covered pixel relative to the pen origin.
    fn rasterize(&self, text: &str, px: f32, sink: &mut dyn FnMut(i32, i32, u8));
}

fn layout_line(font: &fontdue::Font, text: &str, px: f32) -> Layout<()> {
    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &GlyphRun::new(text, px, 0));
    layout
}

impl Face for fontdue::Font {
    fn bounds(&self, text: &str, px: f32) -> TextBounds {
        if text.is_empty() {
            return TextBounds::default();
        }
        let layout = layout_line(self, text, px);

        let mut ink: Option<(i32, i32, i32, i32)> = None;
        // Pen extent keeps trailing whitespace measurable.
        let mut pen_right = 0.0f32;

        for g in layout.glyphs() {
            let m = self.metrics_indexed(g.key.glyph_index, px);
            pen_right = pen_right.max(g.x - m.xmin as f32 + m.advance_width);
            if g.width == 0 || g.height == 0 || !g.char_data.rasterize() {
                continue;
            }
            let x0 = g.x.round() as i32;
            let y0 = g.y.round() as i32;
            let (x1, y1) = (x0 + g.width as i32, y0 + g.height as i32);
            ink = Some(match ink {
                None => (x0, y0, x1, y1),
                Some((a, b, c, d)) => (a.min(x0), b.min(y0), c.max(x1), d.max(y1)),
            });
        }

        match ink {
            Some((x0, y0, x1, y1)) => {
                let right = x1.max(pen_right.ceil() as i32);
                TextBounds { x: x0, y: y0, w: (right - x0).max(0) as u32, h: (y1 - y0) as u32 }
            }
            None => TextBounds { x: 0, y: 0, w: pen_right.ceil().max(0.0) as u32, h: 0 },
        }
    }

    fn rasterize(&self, text: &str, px: f32, sink: &mut dyn FnMut(i32, i32, u8)) {
        if text.is_empty() {
            return;
        }
        let layout = layout_line(self, text, px);

        for g in layout.glyphs() {
            if g.width == 0 || g.height == 0 || !g.char_data.rasterize() {
                continue;
            }
            let (metrics, bitmap) = self.rasterize_config(g.key);
            if metrics.width == 0 || metrics.height == 0 {
                continue;
            }
            let ox = g.x.round() as i32;
            let oy = g.y.round() as i32;
            for (i, &coverage) in bitmap.iter().enumerate() {
                if coverage == 0 {
                    continue;
                }
                let col = (i % metrics.width) as i32;
                let row = (i / metrics.width) as i32;
                sink(ox + col, oy + row, coverage);
            }
        }
    }
}
