use super::{Face, TextBounds};

/// A fixed-advance face that draws every visible character as a solid block.
///
/// Needs no font file, so it is the last-resort fallback when no outline font
/// is installed and the face used by layout tests that must be deterministic.
/// Each character advances `advance * px` pixels (rounded) and its ink is
/// exactly `px` pixels tall starting at the pen origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlockFace {
    advance: f32,
}

impl BlockFace {
    /// `advance` is the per-character advance as a fraction of the font size.
    pub fn new(advance: f32) -> Self {
        Self { advance: advance.max(0.0) }
    }

    #[inline]
    fn cell(&self, px: f32) -> i32 {
        (self.advance * px).round() as i32
    }
}

impl Default for BlockFace {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Face for BlockFace {
    fn bounds(&self, text: &str, px: f32) -> TextBounds {
        let n = text.chars().count() as i32;
        if n == 0 {
            return TextBounds::default();
        }
        let h = if text.chars().any(|c| !c.is_whitespace()) { px.round() as u32 } else { 0 };
        TextBounds { x: 0, y: 0, w: (n * self.cell(px)) as u32, h }
    }

    fn rasterize(&self, text: &str, px: f32, sink: &mut dyn FnMut(i32, i32, u8)) {
        let cell = self.cell(px);
        let height = px.round() as i32;
        for (i, c) in text.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let x0 = i as i32 * cell;
            for y in 0..height {
                for x in x0..x0 + cell {
                    sink(x, y, 255);
                }
            }
        }
    }
}
