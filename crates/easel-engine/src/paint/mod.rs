//! Paint model shared between widgets and the raster surface.
//!
//! Scope:
//! - color representation (straight-alpha RGBA8)
//! - paint sources (solid, linear and radial gradients)
//! - stroke description
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
mod paint;

pub use color::Color;
pub use gradient::{Gradient, LinearGradient, RadialGradient};
pub use paint::{Border, Paint};

use thiserror::Error;

use crate::coords::Size;

/// Errors raised while building or rasterizing a paint source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaintError {
    /// Linear gradient whose start and end coincide.
    #[error("linear gradient start and end are the same point ({0}, {1})")]
    DegenerateLinear(f32, f32),

    /// Radial gradient with a non-positive or non-finite radius.
    #[error("radial gradient radius must be positive, got {0}")]
    DegenerateRadial(f32),

    /// A gradient mask that does not match the target size.
    #[error("gradient mask is {actual:?}, expected {expected:?}")]
    MaskSize { expected: Size, actual: Size },
}
