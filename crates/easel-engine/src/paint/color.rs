/// Straight-alpha RGBA color with 8-bit channels.
///
/// Used both as a flat fill/stroke value and as a gradient endpoint.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const DARK_GRAY: Color = Color::rgba(64, 64, 64, 255);
    pub const GRAY: Color = Color::rgba(128, 128, 128, 255);
    pub const LIGHT_GRAY: Color = Color::rgba(192, 192, 192, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    pub const GREEN: Color = Color::rgba(0, 255, 0, 255);
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::TRANSPARENT
    }

    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Blends `c1` toward `c2` by `t` in [0, 1], truncating each channel.
    #[inline]
    pub fn lerp(c1: Color, c2: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t) as u8;
        Color::rgba(mix(c1.r, c2.r), mix(c1.g, c2.g), mix(c1.b, c2.b), mix(c1.a, c2.a))
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<Color> for image::Rgba<u8> {
    #[inline]
    fn from(c: Color) -> Self {
        image::Rgba(c.to_array())
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(c: Color) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

impl From<image::Rgba<u8>> for Color {
    #[inline]
    fn from(p: image::Rgba<u8>) -> Self {
        Color::from(p.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(Color::lerp(Color::RED, Color::BLUE, 0.0), Color::RED);
        assert_eq!(Color::lerp(Color::RED, Color::BLUE, 1.0), Color::BLUE);
    }

    #[test]
    fn lerp_truncates() {
        let c = Color::lerp(Color::rgba(0, 0, 0, 0), Color::rgba(255, 255, 255, 255), 0.5);
        assert_eq!(c, Color::rgba(127, 127, 127, 127));
    }

    #[test]
    fn lerp_clamps_t() {
        assert_eq!(Color::lerp(Color::RED, Color::BLUE, 7.0), Color::BLUE);
    }

    #[test]
    fn rgb_tuple_is_opaque() {
        let c: Color = (20, 20, 20).into();
        assert!(c.is_opaque());
    }
}
