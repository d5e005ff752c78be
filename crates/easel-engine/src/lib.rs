//! Easel engine crate.
//!
//! Owns the CPU-side pieces used by the widget layer: integer geometry, the
//! paint model (colors and gradients), font resolution and text measurement,
//! and the RGBA [`raster::Surface`] everything is composited onto.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod text;
