//! Easel UI: declarative widget tree rendered onto an `easel-engine` surface.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use easel_ui::prelude::*;
//!
//! let mut fonts = FontSystem::new(FontConfig::default());
//! fonts.load_font(DEFAULT_FONT, include_bytes!("my_font.ttf"))?;
//!
//! let avatar = ImageBox::open("avatar.png")?.fit(ImageFit::Fit).width(64);
//! let image = Canvas::new()
//!     .bg(FillBg::new(Color::WHITE))
//!     .padding(12)
//!     .build(|s| {
//!         s.add(Split::vertical().build(|s| {
//!             s.add(TextBox::new("Hello!").style(TextStyle::default().size(24)));
//!             s.add(avatar);
//!         }));
//!     })
//!     .render(&fonts)?;
//! image.save("out.png")?;
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`] for any type (see its docs for a minimal example), then
//! use it anywhere an [`Element`] is accepted. Implement [`Container`] as well
//! to get `child`/`build` for widgets that own children.

pub mod background;
pub mod canvas;
pub mod error;
pub mod layout;
pub mod painter;
pub mod widget;
pub mod widgets;

pub use canvas::Canvas;
pub use widget::{Container, Element, Widget};
pub use error::{Dimension, LayoutError, Result};

/// Everything you need to build and extend a widget tree.
pub mod prelude {
    pub use crate::background::{Background, FillBg, ImageBg, ImageBgMode, RoundRectBg};
    pub use crate::canvas::Canvas;
    pub use crate::error::{LayoutError, Result};
    pub use crate::layout::{Edges, LayoutCtx};
    pub use crate::painter::Painter;
    pub use crate::widget::{Container, Element, Scope, Widget, WidgetBase, WidgetExt, WidgetId};
    pub use crate::widgets::{
        SizeMode,
        frame::Frame,
        grid::{Grid, GridDim},
        image_box::{ImageBox, ImageFit},
        spacer::Spacer,
        split::{Axis, Split},
        text_box::{Overflow, TextBox},
    };

    // Engine primitives used when configuring widgets.
    pub use easel_engine::coords::{Align, CornerRadii, Corners, HAlign, Point, Size, VAlign};
    pub use easel_engine::paint::{Border, Color, LinearGradient, Paint, RadialGradient};
    pub use easel_engine::text::{DEFAULT_FONT, FontConfig, FontSystem, TextStyle};
}
