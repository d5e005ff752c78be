use easel_engine::coords::{CornerRadii, Point, Rect, Size};
use easel_engine::paint::{Border, Color, Paint};
use easel_engine::raster::{BlitMode, Surface};
use easel_engine::text::Face;
use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::{LayoutError, Result};
use crate::layout::Edges;

/// The painter's current coordinate frame, in surface pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Region {
    pub offset: Point,
    pub size: Size,
}

/// Region-relative drawing over a [`Surface`].
///
/// Every drawing call takes positions relative to the current region's
/// offset. The region methods push the current region onto a stack before
/// installing a new one; [`Painter::restore_region`] pops them again.
/// Widgets normally wrap their region changes in [`Painter::scoped`] so the
/// stack unwinds even when drawing fails halfway.
pub struct Painter {
    surface: Surface,
    region: Region,
    stack: Vec<Region>,
    // Entries below this depth belong to an enclosing `scoped` call.
    floor: usize,
}

impl Painter {
    pub fn new(surface: Surface) -> Self {
        let region = Region { offset: Point::zero(), size: surface.size() };
        Self { surface, region, stack: Vec::new(), floor: 0 }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn into_surface(self) -> Surface {
        self.surface
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    pub fn offset(&self) -> Point {
        self.region.offset
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.region.size
    }

    /// Number of regions that can currently be restored.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len() - self.floor
    }

    // ── regions ───────────────────────────────────────────────────────────

    /// Installs an absolute region.
    pub fn set_region(&mut self, offset: Point, size: Size) -> &mut Self {
        self.stack.push(self.region);
        self.region = Region { offset, size };
        self
    }

    /// Moves the region by `delta`, optionally resizing it.
    pub fn move_region(&mut self, delta: Point, size: Option<Size>) -> &mut Self {
        let size = size.unwrap_or(self.region.size);
        self.set_region(self.region.offset + delta, size)
    }

    /// Insets the region by `edges` on every side.
    pub fn shrink_region(&mut self, edges: Edges) -> &mut Self {
        let delta = Point::new(edges.h as i32, edges.v as i32);
        let size = self.region.size.saturating_shrink(edges.h, edges.v);
        self.set_region(self.region.offset + delta, size)
    }

    /// Outsets the region by `edges` on every side.
    pub fn expand_region(&mut self, edges: Edges) -> &mut Self {
        let delta = Point::new(edges.h as i32, edges.v as i32);
        let size = self.region.size.grow(edges.h, edges.v);
        self.set_region(self.region.offset - delta, size)
    }

    /// Pops `depth` saved regions.
    ///
    /// Asking for more than [`Painter::depth`] is an error and leaves the
    /// region state untouched.
    pub fn restore_region(&mut self, depth: usize) -> Result<&mut Self> {
        let available = self.depth();
        if depth > available {
            return Err(LayoutError::RegionUnderflow { requested: depth, available });
        }
        if depth > 0 {
            let keep = self.stack.len() - depth;
            self.region = self.stack[keep];
            self.stack.truncate(keep);
        }
        Ok(self)
    }

    /// Runs `f`, then restores every region it pushed, whether it succeeded
    /// or not. Regions saved before the call cannot be restored from inside.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Painter) -> Result<R>) -> Result<R> {
        let saved_region = self.region;
        let saved_floor = self.floor;
        let base = self.stack.len();
        self.floor = base;

        let out = f(self);

        self.stack.truncate(base);
        self.region = saved_region;
        self.floor = saved_floor;
        out
    }

    #[inline]
    fn absolute(&self, pos: Point) -> Point {
        self.region.offset + pos
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Draws one line of text so that its ink box starts at `pos`.
    pub fn text(&mut self, text: &str, pos: Point, face: &dyn Face, px: f32, color: Color) -> &mut Self {
        let bounds = face.bounds(text, px);
        let origin = self.absolute(pos) - Point::new(bounds.x, bounds.y);
        self.surface.draw_text(face, text, px, origin, color);
        self
    }

    // ── images ────────────────────────────────────────────────────────────

    /// Copies `image` to `pos`, resized to `size` when given.
    ///
    /// Sources with an alpha channel are pasted through their own alpha as a
    /// mask, which blends every destination channel (alpha included) toward
    /// the source. Opaque sources overwrite the destination.
    pub fn paste(&mut self, image: &DynamicImage, pos: Point, size: Option<Size>) -> &mut Self {
        let mode = if image.color().has_alpha() { BlitMode::Masked } else { BlitMode::Replace };
        self.blit(image, pos, size, mode)
    }

    /// Composites `image` over the destination at `pos` with source-over
    /// alpha blending, resized to `size` when given.
    pub fn paste_blended(&mut self, image: &DynamicImage, pos: Point, size: Option<Size>) -> &mut Self {
        self.blit(image, pos, size, BlitMode::Composite)
    }

    fn blit(&mut self, image: &DynamicImage, pos: Point, size: Option<Size>, mode: BlitMode) -> &mut Self {
        let at = self.absolute(pos);
        match size {
            Some(size) if size != Size::new(image.width(), image.height()) => {
                if size.is_empty() {
                    return self;
                }
                let resized = image.resize_exact(size.w, size.h, FilterType::CatmullRom);
                self.surface.blit(&resized.to_rgba8(), at, mode);
            }
            _ => self.surface.blit(&image.to_rgba8(), at, mode),
        }
        self
    }

    // ── shapes ────────────────────────────────────────────────────────────

    /// Fills a rectangle with `paint`, stroking `border` along its inner edge.
    pub fn rect(&mut self, pos: Point, size: Size, paint: &Paint, border: Option<&Border>) -> &mut Self {
        self.rounded_rect(pos, size, paint, CornerRadii::zero(), border)
    }

    /// Fills a rounded rectangle with `paint`, stroking `border` along its
    /// inner edge.
    pub fn rounded_rect(
        &mut self,
        pos: Point,
        size: Size,
        paint: &Paint,
        radii: CornerRadii,
        border: Option<&Border>,
    ) -> &mut Self {
        let rect = Rect::from_origin_size(self.absolute(pos), size);
        self.surface.fill_shape(rect, radii, paint, border);
        self
    }
}
