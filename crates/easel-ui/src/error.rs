use easel_engine::coords::{ParseAlignError, Size};
use easel_engine::paint::PaintError;
use easel_engine::text::FontError;
use thiserror::Error;

use crate::layout::Edges;

/// Everything that can abort building or rendering a widget tree.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Content needs more room than a fixed width/height leaves for it.
    #[error("{widget}: content {content:?} does not fit in fixed content box {limit:?}")]
    ContentTooLarge { widget: &'static str, content: Size, limit: Size },

    /// A fixed width/height is smaller than the padding on that axis.
    #[error("{widget}: fixed {axis} {extent}px is smaller than its padding ({padding}px)")]
    PaddingTooLarge { widget: &'static str, axis: Dimension, extent: u32, padding: u32 },

    /// A sizing mode that derives sizes from a fixed extent, used without one.
    #[error("{widget}: {mode} sizing requires a fixed {axis}")]
    MissingExtent { widget: &'static str, mode: &'static str, axis: Dimension },

    #[error("{widget}: {ratios} ratios given for {items} items")]
    RatioCount { widget: &'static str, ratios: usize, items: usize },

    /// Ratios must be finite and greater than zero.
    #[error("{widget}: invalid ratio {ratio}")]
    InvalidRatio { widget: &'static str, ratio: f64 },

    /// A computed length does not fit in a pixel coordinate.
    #[error("{widget}: computed {axis} overflows")]
    Overflow { widget: &'static str, axis: Dimension },

    /// The root of a tree is the whole image; it cannot have a margin.
    #[error("canvas margin must be zero, got {0:?}")]
    CanvasMargin(Edges),

    #[error("grid {0} count must be at least 1")]
    ZeroCount(&'static str),

    /// A widget was asked to draw into a region that is not its own size.
    #[error("{widget}: painter region is {actual:?}, expected {expected:?}")]
    RegionMismatch { widget: &'static str, expected: Size, actual: Size },

    #[error("cannot restore {requested} painter regions, only {available} saved")]
    RegionUnderflow { requested: usize, available: usize },

    #[error(transparent)]
    Font(#[from] FontError),

    #[error(transparent)]
    Paint(#[from] PaintError),

    #[error(transparent)]
    Align(#[from] ParseAlignError),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Fixed dimension named in error messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
    /// Either one would do; neither is set.
    Any,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
            Dimension::Any => "width or height",
        })
    }
}

pub type Result<T, E = LayoutError> = std::result::Result<T, E>;
