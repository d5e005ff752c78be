use std::path::PathBuf;

use anyhow::Context;
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::text::{BlockFace, DEFAULT_BOLD_FONT};
use easel_ui::prelude::*;
use image::{DynamicImage, Rgba, RgbaImage};

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let out = std::env::args_os().nth(1).map(PathBuf::from).unwrap_or_else(|| "easel-demo.png".into());

    let fonts = load_fonts()?;
    let card = demo_card().context("building demo card")?;
    let image = card.render(&fonts).context("rendering demo card")?;
    image.save(&out).with_context(|| format!("writing {}", out.display()))?;

    log::info!("wrote {}x{} card to {}", image.width(), image.height(), out.display());
    Ok(())
}

/// Registers the default faces from the font directory, a system font, or
/// the block face as a last resort.
fn load_fonts() -> anyhow::Result<FontSystem> {
    let mut fonts = FontSystem::new(FontConfig::default());

    for name in [DEFAULT_FONT, DEFAULT_BOLD_FONT] {
        if fonts.resolve(name).is_ok() {
            continue;
        }
        match SYSTEM_FONTS.iter().find_map(|p| std::fs::read(p).ok()) {
            Some(bytes) => fonts.load_font(name, &bytes).with_context(|| format!("loading system font as {name}"))?,
            None => {
                log::warn!("no font found for {name}, falling back to block glyphs");
                fonts.register(name, BlockFace::default());
            }
        }
    }
    Ok(fonts)
}

fn demo_card() -> easel_ui::Result<Canvas> {
    let ink = Color::rgb(240, 244, 250);
    let title = TextStyle::default().font(DEFAULT_BOLD_FONT).size(28).color(ink);
    let body = TextStyle::default().size(14).color(ink.with_alpha(200));

    let backdrop = LinearGradient::new(Color::rgb(38, 48, 92), Color::rgb(18, 20, 36), (0.0, 0.0), (1.0, 1.0))
        .map(FillBg::new)
        .unwrap_or_else(|_| FillBg::new(Color::rgb(18, 20, 36)));
    let tile_bg = RoundRectBg::new(Color::WHITE.with_alpha(28), 8.0).border(Border::new(1, Color::WHITE.with_alpha(60)));

    let swatches = Grid::with_cols(6)?.sep(6, 6).build(|s| {
        for i in 0..12u8 {
            let c = Color::rgb(60 + i * 15, 120, 220 - i * 12);
            s.add(Spacer::new(32, 32).bg(RoundRectBg::new(c, 6.0)));
        }
    });

    Ok(Canvas::new().bg(backdrop).padding(24).build(|s| {
        s.add(Split::vertical().sep(16).item_align(Align::LEFT).build(|s| {
            s.add(Split::horizontal().sep(16).build(|s| {
                s.add(ImageBox::new(DynamicImage::ImageRgba8(avatar(64))).alpha_blend(true));
                s.add(Split::vertical().sep(4).item_align(Align::LEFT).build(|s| {
                    s.add(TextBox::new("Easel render report").style(title));
                    s.add(TextBox::new("Layout and raster, no window required").style(body.clone()));
                }));
            }));

            s.add(Split::horizontal().width(480).item_size_mode(SizeMode::Expand).item_bg(tile_bg).build(|s| {
                for (label, value) in [("widgets", "9"), ("draw calls", "27"), ("ms", "3.4")] {
                    s.add(Split::vertical().sep(2).padding(10).build(|s| {
                        s.add(TextBox::new(value).style(TextStyle::default().font(DEFAULT_BOLD_FONT).size(22).color(ink)));
                        s.add(TextBox::new(label).style(body.clone()));
                    }));
                }
            }));

            s.add(swatches);

            s.add(
                TextBox::new("Long captions are wrapped to the box width and shortened with a suffix once the line budget runs out, which this one does.")
                    .style(body)
                    .wrap(true)
                    .line_count(2)
                    .width(480),
            );
        }));
    }))
}

/// A soft-edged disc on a transparent background.
fn avatar(size: u32) -> RgbaImage {
    let r = size as f32 / 2.0;
    RgbaImage::from_fn(size, size, |x, y| {
        let d = (x as f32 + 0.5 - r).hypot(y as f32 + 0.5 - r);
        let a = ((r - d).clamp(0.0, 1.0) * 255.0) as u8;
        Rgba([250, 180, 90, a])
    })
}
