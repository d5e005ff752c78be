//! Font resolution and text measurement.
//!
//! Widgets refer to fonts by name through [`TextStyle`]; the [`FontSystem`]
//! resolves names to [`Face`]s lazily, searching the configured directories.

mod block;
mod face;
mod font_system;
mod style;

pub use block::BlockFace;
pub use face::{Face, TextBounds};
pub use font_system::{FontConfig, FontError, FontSystem, DEFAULT_FONT_DIR, FONT_DIR_ENV};
pub use style::{TextStyle, DEFAULT_BOLD_FONT, DEFAULT_FONT, DEFAULT_HEAVY_FONT};
