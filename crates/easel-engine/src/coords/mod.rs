//! Coordinate and geometry types shared by the raster surface and the widget layer.
//!
//! Canonical space:
//! - Integer pixels, no sub-pixel positioning
//! - Origin top-left
//! - +X right, +Y down

mod align;
mod corner_radii;
mod point;
mod rect;
mod size;

pub use align::{Align, HAlign, ParseAlignError, VAlign};
pub use corner_radii::{CornerRadii, Corners};
pub use point::Point;
pub use rect::Rect;
pub use size::Size;
