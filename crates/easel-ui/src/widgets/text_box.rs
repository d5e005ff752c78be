use easel_engine::coords::{Point, Size};
use easel_engine::text::{Face, TextStyle};

use crate::error::Result;
use crate::layout::LayoutCtx;
use crate::painter::Painter;
use crate::widget::{Widget, WidgetBase};

pub const TEXT_PADDING: u32 = 5;
pub const DEFAULT_LINE_SEP: u32 = 2;

/// Appended to a line cut short under [`Overflow::Shrink`].
pub const TRUNCATION_SUFFIX: &str = "...";

/// What happens to text that does not fit the fixed width.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Overflow {
    /// Cut and mark the cut with [`TRUNCATION_SUFFIX`].
    #[default]
    Shrink,
    /// Cut without a marker.
    Clip,
}

impl Overflow {
    fn suffix(self) -> &'static str {
        match self {
            Overflow::Shrink => TRUNCATION_SUFFIX,
            Overflow::Clip => "",
        }
    }
}

/// Multi-line text.
///
/// The text is split on `\n`. Without a fixed width every line is kept as
/// is. With one, lines are wrapped (or cut, when `wrap` is off) to fit the
/// width minus padding, and at most `line_count` lines are shown.
///
/// When a line budget cuts content off, the last shown line ends in the
/// overflow suffix. The box reserves height for `line_count` lines, however
/// many are actually produced, unless [`TextBox::real_line_count`] is set.
pub struct TextBox {
    base: WidgetBase,
    text: String,
    style: TextStyle,
    line_count: u32,
    line_sep: u32,
    wrap: bool,
    overflow: Overflow,
    real_line_count: bool,
}

impl TextBox {
    pub fn new(text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new();
        base.set_padding(TEXT_PADDING);
        Self {
            base,
            text: text.into(),
            style: TextStyle::default(),
            line_count: 1,
            line_sep: DEFAULT_LINE_SEP,
            wrap: true,
            overflow: Overflow::Shrink,
            real_line_count: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.base.invalidate();
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self.base.invalidate();
        self
    }

    /// Maximum number of lines; 0 is treated as 1.
    pub fn line_count(mut self, count: u32) -> Self {
        self.line_count = count.max(1);
        self.base.invalidate();
        self
    }

    pub fn line_sep(mut self, sep: u32) -> Self {
        self.line_sep = sep;
        self.base.invalidate();
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self.base.invalidate();
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self.base.invalidate();
        self
    }

    /// Size the height to the lines actually produced instead of reserving
    /// `line_count` of them.
    pub fn real_line_count(mut self, on: bool) -> Self {
        self.real_line_count = on;
        self.base.invalidate();
        self
    }

    #[inline]
    fn line_height(&self) -> u32 {
        self.style.size + self.line_sep
    }

    /// The physical lines that will be drawn.
    pub fn lines(&self, ctx: &LayoutCtx) -> Result<Vec<String>> {
        let face = ctx.fonts.resolve(&self.style.font)?;
        self.lines_with(face.as_ref())
    }

    fn lines_with(&self, face: &dyn Face) -> Result<Vec<String>> {
        let max_lines = self.line_count.max(1) as usize;
        let width = self.base.content_width_limit(self.kind())?;
        let px = self.style.px();
        let suffix = self.overflow.suffix();

        let mut out: Vec<String> = Vec::new();
        // The last entry of `out` already ends in the suffix.
        let mut marked = false;
        let mut truncated = false;

        'logical: for logical in self.text.split('\n') {
            if out.len() >= max_lines {
                truncated = true;
                break;
            }
            marked = false;
            let Some(width) = width else {
                out.push(logical.to_owned());
                continue;
            };

            if !self.wrap {
                match clip_index(face, px, logical, width, suffix) {
                    Some(n) => {
                        out.push(format!("{}{suffix}", char_prefix(logical, n)));
                        marked = !suffix.is_empty();
                    }
                    None => out.push(logical.to_owned()),
                }
                continue;
            }

            let mut rest = logical;
            loop {
                let Some(n) = clip_index(face, px, rest, width, "") else {
                    out.push(rest.to_owned());
                    break;
                };
                // A glyph wider than the whole budget still has to go somewhere.
                let head = char_prefix(rest, n.max(1));
                out.push(head.to_owned());
                rest = &rest[head.len()..];
                if rest.is_empty() {
                    break;
                }
                if out.len() >= max_lines {
                    truncated = true;
                    break 'logical;
                }
            }
        }

        if truncated && !marked && !suffix.is_empty() {
            if let Some(last) = out.pop() {
                let cut = width.and_then(|w| clip_index(face, px, &last, w, suffix));
                out.push(match cut {
                    Some(n) => format!("{}{suffix}", char_prefix(&last, n)),
                    None => format!("{last}{suffix}"),
                });
            }
        }
        Ok(out)
    }
}

/// First `n` characters of `s`.
fn char_prefix(s: &str, n: usize) -> &str {
    let end = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    &s[..end]
}

/// Number of leading characters of `text` that fit in `width` together with
/// `suffix`, or `None` when the whole text fits.
fn clip_index(face: &dyn Face, px: f32, text: &str, width: u32, suffix: &str) -> Option<usize> {
    let measure = |n: usize| face.bounds(&format!("{}{suffix}", char_prefix(text, n)), px).w;

    let total = text.chars().count();
    if measure(total) <= width {
        return None;
    }

    let (mut lo, mut hi) = (0isize, total as isize);
    while lo <= hi {
        let mid = (lo + hi) / 2;
        let w = measure(mid as usize);
        if w < width {
            lo = mid + 1;
        } else if w > width {
            hi = mid - 1;
        } else {
            return Some(mid as usize);
        }
    }
    Some(hi.max(0) as usize)
}

impl Widget for TextBox {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "TextBox"
    }

    fn content_size(&self, ctx: &LayoutCtx) -> Result<Size> {
        let face = ctx.fonts.resolve(&self.style.font)?;
        let lines = self.lines_with(face.as_ref())?;

        let w = match self.base.content_width_limit(self.kind())? {
            Some(w) => w,
            None => lines.iter().map(|l| face.bounds(l, self.style.px()).w).max().unwrap_or(0),
        };
        let h = match self.base.content_height_limit(self.kind())? {
            Some(h) => h,
            None => {
                let count = if self.real_line_count { lines.len() as u32 } else { self.line_count };
                (count * self.line_height()).saturating_sub(self.line_sep)
            }
        };
        Ok(Size::new(w, h))
    }

    fn draw_content(&self, painter: &mut Painter, ctx: &LayoutCtx) -> Result<()> {
        let face = ctx.fonts.resolve(&self.style.font)?;
        let lines = self.lines_with(face.as_ref())?;
        let px = self.style.px();
        let region = painter.size();
        let align = self.base.content_align();

        let text_h = (lines.len() as u32 * self.line_height()).saturating_sub(self.line_sep);
        let top = align.v.place(region.h, text_h);

        for (i, line) in lines.iter().enumerate() {
            let lw = face.bounds(line, px).w;
            let pos = Point::new(align.h.place(region.w, lw), top + (i as u32 * self.line_height()) as i32);
            painter.text(line, pos, face.as_ref(), px, self.style.color);
        }
        Ok(())
    }
}
