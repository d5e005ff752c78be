use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

use easel_engine::coords::{Align, Point, Size};
use easel_engine::paint::{Border, Color, Paint};

use crate::background::Background;
use crate::error::{Dimension, LayoutError, Result};
use crate::layout::{Edges, LayoutCtx, DEBUG_OUTLINE};
use crate::painter::Painter;

// ── WidgetId ──────────────────────────────────────────────────────────────

/// Process-unique widget identity, used for the non-owning parent link.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

// ── Measured ──────────────────────────────────────────────────────────────

/// Result of sizing a widget: the content box and the full outer box.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Measured {
    /// Minimum size of the widget's own payload.
    pub content: Size,
    /// Content box plus padding and margin. This is what a parent allocates.
    pub outer: Size,
    /// Size of the box the content is aligned in: the fixed content limit,
    /// or the content size itself when no fixed size is set.
    pub interior: Size,
}

// ── WidgetBase ────────────────────────────────────────────────────────────

/// Attributes shared by every widget.
///
/// Setters invalidate the memoized size so the next layout pass recomputes it.
#[derive(Debug)]
pub struct WidgetBase {
    id: WidgetId,
    parent: Option<WidgetId>,
    margin: Edges,
    padding: Edges,
    width: Option<u32>,
    height: Option<u32>,
    content_align: Align,
    bg: Option<Background>,
    offset: Point,
    offset_anchor: Align,
    omit_parent_bg: bool,
    measured: Cell<Option<Measured>>,
}

impl WidgetBase {
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            parent: None,
            margin: Edges::default(),
            padding: Edges::default(),
            width: None,
            height: None,
            content_align: Align::TOP_LEFT,
            bg: None,
            offset: Point::zero(),
            offset_anchor: Align::TOP_LEFT,
            omit_parent_bg: false,
            measured: Cell::new(None),
        }
    }

    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The container this widget was added to, if any.
    #[inline]
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    #[inline]
    pub fn margin(&self) -> Edges {
        self.margin
    }

    #[inline]
    pub fn padding(&self) -> Edges {
        self.padding
    }

    #[inline]
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Option<u32> {
        self.height
    }

    #[inline]
    pub fn content_align(&self) -> Align {
        self.content_align
    }

    pub fn bg(&self) -> Option<&Background> {
        self.bg.as_ref()
    }

    #[inline]
    pub fn offset(&self) -> Point {
        self.offset
    }

    #[inline]
    pub fn offset_anchor(&self) -> Align {
        self.offset_anchor
    }

    #[inline]
    pub fn omit_parent_bg(&self) -> bool {
        self.omit_parent_bg
    }

    /// Fixed width minus horizontal padding, if a width is set.
    pub fn content_width_limit(&self, widget: &'static str) -> Result<Option<u32>> {
        inner_extent(widget, Dimension::Width, self.width, self.padding.h)
    }

    /// Fixed height minus vertical padding, if a height is set.
    pub fn content_height_limit(&self, widget: &'static str) -> Result<Option<u32>> {
        inner_extent(widget, Dimension::Height, self.height, self.padding.v)
    }

    // ── setters ───────────────────────────────────────────────────────────

    pub fn set_margin(&mut self, margin: impl Into<Edges>) {
        self.margin = margin.into();
        self.invalidate();
    }

    pub fn set_padding(&mut self, padding: impl Into<Edges>) {
        self.padding = padding.into();
        self.invalidate();
    }

    pub fn set_width(&mut self, width: Option<u32>) {
        self.width = width;
        self.invalidate();
    }

    pub fn set_height(&mut self, height: Option<u32>) {
        self.height = height;
        self.invalidate();
    }

    pub fn set_content_align(&mut self, align: Align) {
        self.content_align = align;
        self.invalidate();
    }

    pub fn set_bg(&mut self, bg: Option<Background>) {
        self.bg = bg;
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn set_offset_anchor(&mut self, anchor: Align) {
        self.offset_anchor = anchor;
    }

    pub fn set_omit_parent_bg(&mut self, omit: bool) {
        self.omit_parent_bg = omit;
    }

    pub(crate) fn set_parent(&mut self, parent: Option<WidgetId>) {
        self.parent = parent;
    }

    /// Drops the memoized size.
    #[inline]
    pub fn invalidate(&self) {
        self.measured.set(None);
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

fn inner_extent(widget: &'static str, axis: Dimension, extent: Option<u32>, padding: u32) -> Result<Option<u32>> {
    let Some(extent) = extent else {
        return Ok(None);
    };
    extent
        .checked_sub(padding * 2)
        .map(Some)
        .ok_or(LayoutError::PaddingTooLarge { widget, axis, extent, padding })
}

// ── Widget trait ──────────────────────────────────────────────────────────

/// A node in the layout tree.
///
/// Implementors supply the shared [`WidgetBase`], the minimum size of their
/// own content and how to draw it. Sizing with padding, margin and fixed
/// dimensions, alignment, backgrounds and region bookkeeping are provided.
///
/// ```rust,ignore
/// use easel_ui::prelude::*;
///
/// pub struct Swatch { base: WidgetBase, color: Color }
///
/// impl Widget for Swatch {
///     fn base(&self) -> &WidgetBase { &self.base }
///     fn base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///     fn kind(&self) -> &'static str { "Swatch" }
///     fn content_size(&self, _ctx: &LayoutCtx) -> Result<Size> { Ok(Size::new(16, 16)) }
///     fn draw_content(&self, p: &mut Painter, _ctx: &LayoutCtx) -> Result<()> {
///         p.rect(Point::zero(), p.size(), &self.color.into(), None);
///         Ok(())
///     }
/// }
/// ```
pub trait Widget: 'static {
    fn base(&self) -> &WidgetBase;

    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Short type name used in error messages and logs.
    fn kind(&self) -> &'static str;

    /// Minimum size needed for this widget's own content, excluding padding
    /// and margin.
    fn content_size(&self, ctx: &LayoutCtx) -> Result<Size>;

    /// Draws the content. The painter region is the content box.
    fn draw_content(&self, painter: &mut Painter, ctx: &LayoutCtx) -> Result<()>;

    /// Owned children, for containers.
    fn children(&self) -> &[Element] {
        &[]
    }

    /// Sizes the widget, reusing the memoized result when nothing changed.
    ///
    /// Fails when the content does not fit in a fixed width or height.
    fn measure(&self, ctx: &LayoutCtx) -> Result<Measured> {
        let base = self.base();
        if let Some(m) = base.measured.get() {
            return Ok(m);
        }

        let content = self.content_size(ctx)?;
        let limit = Size::new(
            base.content_width_limit(self.kind())?.unwrap_or(content.w),
            base.content_height_limit(self.kind())?.unwrap_or(content.h),
        );
        if !limit.contains_size(content) {
            return Err(LayoutError::ContentTooLarge { widget: self.kind(), content, limit });
        }

        let outer = limit.grow(base.padding.h + base.margin.h, base.padding.v + base.margin.v);
        let m = Measured { content, outer, interior: limit };
        log::trace!("{} {:?}: content {:?}, outer {:?}", self.kind(), base.id, content, m.outer);
        base.measured.set(Some(m));
        Ok(m)
    }

    /// Content box plus padding and margin.
    fn self_size(&self, ctx: &LayoutCtx) -> Result<Size> {
        Ok(self.measure(ctx)?.outer)
    }

    /// Top-left of the content box inside the padded interior.
    fn content_position(&self, ctx: &LayoutCtx) -> Result<Point> {
        let m = self.measure(ctx)?;
        Ok(self.base().content_align.place(m.interior, m.content))
    }

    /// Draws the widget into the painter's current region, which must be
    /// exactly [`Widget::self_size`].
    ///
    /// `inherited_bg` is the parent's item background, painted when the
    /// widget has none of its own and does not opt out. A debug context
    /// outlines the whole region once the widget is drawn.
    fn draw(&self, painter: &mut Painter, ctx: &LayoutCtx, inherited_bg: Option<&Background>) -> Result<()> {
        let m = self.measure(ctx)?;
        if painter.size() != m.outer {
            return Err(LayoutError::RegionMismatch {
                widget: self.kind(),
                expected: m.outer,
                actual: painter.size(),
            });
        }

        let base = self.base();
        let content_pos = base.content_align.place(m.interior, m.content);

        painter.scoped(|p| {
            p.move_region(base.offset - base.offset_anchor.anchor(m.outer), None);
            p.shrink_region(base.margin);

            let bg = base.bg.as_ref().or(if base.omit_parent_bg { None } else { inherited_bg });
            if let Some(bg) = bg {
                bg.draw(p);
            }

            p.shrink_region(base.padding);
            p.move_region(content_pos, Some(m.content));
            self.draw_content(p, ctx)
        })?;

        if ctx.debug {
            let outline = Border::new(1, DEBUG_OUTLINE);
            painter.rect(Point::zero(), m.outer, &Paint::from(Color::transparent()), Some(&outline));
        }
        Ok(())
    }

    /// Drops memoized sizes for this widget and everything below it.
    fn invalidate_tree(&self) {
        self.base().invalidate();
        for child in self.children() {
            child.invalidate_tree();
        }
    }
}

// ── WidgetExt ─────────────────────────────────────────────────────────────

/// Chained setters available on every widget.
pub trait WidgetExt: Widget + Sized {
    fn margin(mut self, margin: impl Into<Edges>) -> Self {
        self.base_mut().set_margin(margin);
        self
    }

    fn padding(mut self, padding: impl Into<Edges>) -> Self {
        self.base_mut().set_padding(padding);
        self
    }

    /// Fixed size of the padding box. `None` leaves that axis intrinsic.
    fn size(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.base_mut().set_width(width);
        self.base_mut().set_height(height);
        self
    }

    fn width(mut self, width: u32) -> Self {
        self.base_mut().set_width(Some(width));
        self
    }

    fn height(mut self, height: u32) -> Self {
        self.base_mut().set_height(Some(height));
        self
    }

    fn content_align(mut self, align: Align) -> Self {
        self.base_mut().set_content_align(align);
        self
    }

    fn bg(mut self, bg: impl Into<Background>) -> Self {
        self.base_mut().set_bg(Some(bg.into()));
        self
    }

    /// Draws the widget displaced by `offset` without affecting layout.
    fn offset(mut self, offset: impl Into<Point>) -> Self {
        self.base_mut().set_offset(offset.into());
        self
    }

    /// Which point of the widget's own box [`WidgetExt::offset`] refers to.
    fn offset_anchor(mut self, anchor: Align) -> Self {
        self.base_mut().set_offset_anchor(anchor);
        self
    }

    fn omit_parent_bg(mut self, omit: bool) -> Self {
        self.base_mut().set_omit_parent_bg(omit);
        self
    }
}

impl<W: Widget> WidgetExt for W {}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased, owned widget: the child type of every container.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn widget(&self) -> &dyn Widget {
        self.0.as_ref()
    }

    #[inline]
    pub fn widget_mut(&mut self) -> &mut dyn Widget {
        self.0.as_mut()
    }

    #[inline]
    pub fn id(&self) -> WidgetId {
        self.0.base().id()
    }

    #[inline]
    pub fn parent(&self) -> Option<WidgetId> {
        self.0.base().parent()
    }

    #[inline]
    pub fn self_size(&self, ctx: &LayoutCtx) -> Result<Size> {
        self.0.self_size(ctx)
    }

    #[inline]
    pub fn draw(&self, painter: &mut Painter, ctx: &LayoutCtx, inherited_bg: Option<&Background>) -> Result<()> {
        self.0.draw(painter, ctx, inherited_bg)
    }

    #[inline]
    pub fn invalidate_tree(&self) {
        self.0.invalidate_tree()
    }

    pub(crate) fn set_parent(&mut self, parent: Option<WidgetId>) {
        self.0.base_mut().set_parent(parent);
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element").field("kind", &self.0.kind()).field("id", &self.id()).finish()
    }
}

// ── Container ─────────────────────────────────────────────────────────────

/// Widgets that own an ordered list of children.
pub trait Container: Widget + Sized {
    #[doc(hidden)]
    fn items_mut(&mut self) -> &mut Vec<Element>;

    #[doc(hidden)]
    fn item_bg_mut(&mut self) -> &mut Option<Background>;

    /// Appends a child.
    fn add(&mut self, item: impl Into<Element>) -> &mut Self {
        let mut item = item.into();
        item.set_parent(Some(self.base().id()));
        self.items_mut().push(item);
        self.base().invalidate();
        self
    }

    /// Chained form of [`Container::add`].
    fn child(mut self, item: impl Into<Element>) -> Self {
        self.add(item);
        self
    }

    /// Replaces all children, returning the old ones detached.
    fn set_items<I>(&mut self, items: I) -> Vec<Element>
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        let id = self.base().id();
        let new: Vec<Element> = items
            .into_iter()
            .map(|item| {
                let mut item = item.into();
                item.set_parent(Some(id));
                item
            })
            .collect();
        let mut old = std::mem::replace(self.items_mut(), new);
        for item in &mut old {
            item.set_parent(None);
        }
        self.base().invalidate();
        old
    }

    /// Chained form of [`Container::set_items`].
    fn items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        self.set_items(items);
        self
    }

    /// Removes and returns all children, detached.
    fn take_items(&mut self) -> Vec<Element> {
        self.set_items(std::iter::empty::<Element>())
    }

    /// Builds children inside `f`: every widget handed to the [`Scope`]
    /// becomes a child of this container, in order.
    ///
    /// ```rust,ignore
    /// let card = Split::vertical().build(|s| {
    ///     s.add(TextBox::new("title"));
    ///     s.add(Split::horizontal().build(|s| {
    ///         s.add(ImageBox::new(icon));
    ///         s.add(TextBox::new("caption"));
    ///     }));
    /// });
    /// ```
    fn build(mut self, f: impl FnOnce(&mut Scope<'_>)) -> Self {
        let parent = self.base().id();
        f(&mut Scope { parent, items: self.items_mut() });
        self.base().invalidate();
        self
    }

    /// Background painted behind every child that has none of its own.
    fn item_bg(mut self, bg: impl Into<Background>) -> Self {
        *self.item_bg_mut() = Some(bg.into());
        self
    }
}

/// The add-target handed to a [`Container::build`] closure.
pub struct Scope<'a> {
    parent: WidgetId,
    items: &'a mut Vec<Element>,
}

impl Scope<'_> {
    /// Adds `item` as the next child of the container being built.
    pub fn add(&mut self, item: impl Into<Element>) -> &mut Self {
        let mut item = item.into();
        item.set_parent(Some(self.parent));
        self.items.push(item);
        self
    }

    /// The container being built.
    pub fn parent(&self) -> WidgetId {
        self.parent
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_engine::paint::Color;
    use easel_engine::raster::Surface;
    use easel_engine::text::{FontConfig, FontSystem};

    use crate::background::FillBg;
    use crate::widgets::frame::Frame;
    use crate::widgets::spacer::Spacer;

    fn fonts() -> FontSystem {
        FontSystem::new(FontConfig::with_dirs(Vec::<std::path::PathBuf>::new()))
    }

    /// Leaf with a fixed content size that records whether it was drawn.
    struct Block {
        base: WidgetBase,
        content: Size,
        drawn: Cell<bool>,
    }

    impl Block {
        fn new(w: u32, h: u32) -> Self {
            Self { base: WidgetBase::new(), content: Size::new(w, h), drawn: Cell::new(false) }
        }
    }

    impl Widget for Block {
        fn base(&self) -> &WidgetBase {
            &self.base
        }
        fn base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }
        fn kind(&self) -> &'static str {
            "Block"
        }
        fn content_size(&self, _ctx: &LayoutCtx) -> Result<Size> {
            Ok(self.content)
        }
        fn draw_content(&self, p: &mut Painter, _ctx: &LayoutCtx) -> Result<()> {
            assert_eq!(p.size(), self.content);
            p.rect(Point::zero(), p.size(), &Color::RED.into(), None);
            self.drawn.set(true);
            Ok(())
        }
    }

    fn painter_for(size: Size) -> Painter {
        Painter::new(Surface::new(size, Color::WHITE))
    }

    // ── sizing ───────────────────────────────────────────────────────────

    #[test]
    fn self_size_adds_padding_and_margin() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let b = Block::new(30, 20).padding((2, 3)).margin(4);
        // w: 30 + 2*3 + 2*4, h: 20 + 2*2 + 2*4
        assert_eq!(b.self_size(&ctx).unwrap(), Size::new(44, 32));
    }

    #[test]
    fn fixed_size_covers_padding_box() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let b = Block::new(10, 10).padding(5).margin(1).size(Some(50), Some(40));
        assert_eq!(b.self_size(&ctx).unwrap(), Size::new(52, 42));
        assert_eq!(b.content_position(&ctx).unwrap(), Point::zero());
    }

    #[test]
    fn content_larger_than_fixed_size_is_an_error() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let b = Block::new(30, 10).padding(5).width(30);
        match b.self_size(&ctx) {
            Err(LayoutError::ContentTooLarge { content, limit, .. }) => {
                assert_eq!(content, Size::new(30, 10));
                assert_eq!(limit, Size::new(20, 10));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn fixed_size_smaller_than_padding_is_an_error() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let b = Block::new(0, 0).padding(5).height(6);
        assert!(matches!(b.self_size(&ctx), Err(LayoutError::PaddingTooLarge { axis: Dimension::Height, .. })));
    }

    #[test]
    fn self_size_is_memoized_until_a_setter_runs() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let mut b = Block::new(10, 10);
        let first = b.self_size(&ctx).unwrap();
        b.content = Size::new(99, 99);
        assert_eq!(b.self_size(&ctx).unwrap(), first);
        assert_eq!(b.self_size(&ctx).unwrap(), first);

        b.base_mut().set_padding(1);
        assert_eq!(b.self_size(&ctx).unwrap(), Size::new(101, 101));
    }

    #[test]
    fn content_is_aligned_in_fixed_interior() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let b = Block::new(10, 10).size(Some(31), Some(20)).content_align(Align::BOTTOM_RIGHT);
        assert_eq!(b.content_position(&ctx).unwrap(), Point::new(21, 10));
        let c = Block::new(10, 10).size(Some(31), Some(20)).content_align(Align::CENTER);
        assert_eq!(c.content_position(&ctx).unwrap(), Point::new(10, 5));
    }

    // ── drawing ──────────────────────────────────────────────────────────

    #[test]
    fn draw_rejects_wrong_region() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let b = Block::new(10, 10);
        let mut p = painter_for(Size::new(11, 10));
        let err = b.draw(&mut p, &ctx, None).unwrap_err();
        assert!(matches!(err, LayoutError::RegionMismatch { .. }));
        assert!(!b.drawn.get());
    }

    #[test]
    fn draw_places_content_inside_margin_and_padding() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let b = Block::new(2, 2).margin(1).padding(2).bg(FillBg::new(Color::BLUE));
        let size = b.self_size(&ctx).unwrap();
        let mut p = painter_for(size);
        b.draw(&mut p, &ctx, None).unwrap();

        let at = |x, y| p.surface().pixel(Point::new(x, y)).unwrap();
        assert_eq!(at(0, 0), Color::WHITE);
        assert_eq!(at(1, 1), Color::BLUE);
        assert_eq!(at(3, 3), Color::RED);
        assert_eq!(at(4, 4), Color::RED);
        assert_eq!(at(5, 5), Color::BLUE);
        assert_eq!(p.depth(), 0);
    }

    #[test]
    fn offset_anchor_moves_drawing_only() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let b = Block::new(4, 4).offset((6, 6)).offset_anchor(Align::CENTER);
        assert_eq!(b.self_size(&ctx).unwrap(), Size::new(4, 4));
        let mut p = painter_for(Size::new(4, 4));
        b.draw(&mut p, &ctx, None).unwrap();
        // Centered on (6, 6): drawn at 4..8, fully outside the 4x4 surface.
        assert_eq!(p.surface().pixel(Point::new(3, 3)), Some(Color::WHITE));
    }

    #[test]
    fn inherited_background_unless_omitted() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let item_bg = Background::from(FillBg::new(Color::GREEN));

        let b = Block::new(2, 2).padding(1);
        let mut p = painter_for(Size::new(4, 4));
        b.draw(&mut p, &ctx, Some(&item_bg)).unwrap();
        assert_eq!(p.surface().pixel(Point::zero()), Some(Color::GREEN));

        let b = Block::new(2, 2).padding(1).omit_parent_bg(true);
        let mut p = painter_for(Size::new(4, 4));
        b.draw(&mut p, &ctx, Some(&item_bg)).unwrap();
        assert_eq!(p.surface().pixel(Point::zero()), Some(Color::WHITE));
    }

    #[test]
    fn debug_context_outlines_the_region() {
        let fonts = fonts();
        let b = Block::new(4, 4).padding(2);
        let size = b.self_size(&LayoutCtx::new(&fonts)).unwrap();
        assert_eq!(size, Size::new(8, 8));

        let mut p = painter_for(size);
        b.draw(&mut p, &LayoutCtx::new(&fonts).debug(true), None).unwrap();
        let at = |x, y| p.surface().pixel(Point::new(x, y)).unwrap();
        assert_eq!(at(0, 0), DEBUG_OUTLINE);
        assert_eq!(at(7, 3), DEBUG_OUTLINE);
        assert_eq!(at(1, 1), Color::WHITE);
        assert_eq!(at(3, 3), Color::RED);

        let mut p = painter_for(size);
        b.draw(&mut p, &LayoutCtx::new(&fonts), None).unwrap();
        assert_eq!(p.surface().pixel(Point::zero()), Some(Color::WHITE));
    }

    // ── tree building ────────────────────────────────────────────────────

    #[test]
    fn build_scope_attaches_children_in_order() {
        let frame = Frame::new().build(|s| {
            s.add(Spacer::new(1, 1));
            s.add(Spacer::new(2, 2));
            assert_eq!(s.len(), 2);
        });
        let id = frame.base().id();
        assert_eq!(frame.children().len(), 2);
        assert!(frame.children().iter().all(|c| c.parent() == Some(id)));
    }

    #[test]
    fn nested_builds_attach_to_their_own_container() {
        let outer = Frame::new().build(|s| {
            s.add(Frame::new().build(|s| {
                s.add(Spacer::new(1, 1));
            }));
            s.add(Spacer::new(1, 1));
        });
        let inner = outer.children()[0].widget();
        assert_eq!(outer.children().len(), 2);
        assert_eq!(inner.children().len(), 1);
        assert_eq!(inner.children()[0].parent(), Some(inner.base().id()));
    }

    #[test]
    fn set_items_detaches_previous_children() {
        let mut frame = Frame::new().child(Spacer::new(1, 1));
        let old = frame.set_items([Spacer::new(2, 2)]);
        assert_eq!(old.len(), 1);
        assert_eq!(old[0].parent(), None);
        assert_eq!(frame.children()[0].parent(), Some(frame.base().id()));
    }

    #[test]
    fn adding_a_child_invalidates_the_container() {
        let fonts = fonts();
        let ctx = LayoutCtx::new(&fonts);
        let mut frame = Frame::new();
        assert_eq!(frame.self_size(&ctx).unwrap(), Size::zero());
        frame.add(Spacer::new(5, 7));
        assert_eq!(frame.self_size(&ctx).unwrap(), Size::new(5, 7));
    }
}
