use crate::paint::Color;

pub const DEFAULT_FONT: &str = "SourceHanSansCN-Regular";
pub const DEFAULT_BOLD_FONT: &str = "SourceHanSansSC-Bold";
pub const DEFAULT_HEAVY_FONT: &str = "SourceHanSansSC-Heavy";

/// Font name, pixel size and color used to draw a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub font: String,
    pub size: u32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font: impl Into<String>, size: u32, color: Color) -> Self {
        Self { font: font.into(), size, color }
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    #[inline]
    pub fn px(&self) -> f32 {
        self.size as f32
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { font: DEFAULT_FONT.into(), size: 16, color: Color::BLACK }
    }
}
