//! CPU rasterization on top of `tiny_skia`.
//!
//! The public API speaks straight (non-premultiplied) alpha, matching what
//! `image` loads and saves; the pixmap underneath is premultiplied.

mod path;
mod surface;

pub use surface::{BlitMode, Surface};
