// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box layout: size negotiation, placement, and pointer dispatch.

use alloc::boxed::Box;
use alloc::vec::Vec;

use trellis_input::{InputEvent, MouseButton, MouseEvent, MouseMoveEvent};

use crate::{
    AnimationDirection, DynamicSpacer, HorizontalAlign, LayoutEntry, Position, PositionType, Size,
    StaticSpacer, Surface, SurfaceExt, VerticalAlign, Widget, WidgetBase, WidgetError,
    WidgetFactory, WidgetKind,
};

/// An ordered list of widgets placed by one [`PositionType`].
///
/// A layout is itself a [`Widget`], so layouts nest. Each nested layout is
/// created by, and owned by, exactly one parent through
/// [`add_layout`](Self::add_layout), which keeps the tree free of cycles.
///
/// Placement is recomputed lazily at the start of every
/// [`render`](Widget::render) and every pointer dispatch. It is idempotent:
/// with no change to the children, repeated passes produce identical
/// rectangles.
///
/// ## Sizing
///
/// The content size aggregates the visible children's natural sizes:
///
/// | mode         | width                    | height                    |
/// |--------------|--------------------------|---------------------------|
/// | `Vertical`   | widest child             | sum of heights            |
/// | `Horizontal` | sum of widths            | tallest child             |
/// | `Absolute`   | rightmost `x + width`    | lowest `y + height`       |
///
/// The layout's own size is the componentwise maximum of the content size and
/// the fixed size from [`set_size`](Self::set_size).
///
/// ## Expanding children
///
/// In `Vertical` and `Horizontal` mode, whatever the layout's size leaves
/// over along the stacking axis is split evenly between the visible
/// expanding children (see [`Widget::is_expanding`]). The remainder of the
/// division is dropped and negative leftovers count as zero. `Absolute`
/// layouts never expand anything.
///
/// ## Pointer events
///
/// Every pointer handler returns `false`: events are never absorbed, so
/// sibling layouts and the host all observe the same event. Within one
/// layout, the event hits the last-inserted visible entry under the pointer,
/// which is also the one drawn on top. Spacers are skipped, and a nested
/// layout only counts where one of its own entries is hit, so empty space in
/// an overlay does not cover what lies below it. Entries are visited in
/// insertion order and every entry updates its own state, so an entry
/// covered by a later one loses its hover and cannot be clicked through it.
///
/// ## Example
///
/// ```rust
/// use trellis_layout::{Layout, PositionType, Size};
///
/// let mut column = Layout::new(PositionType::Vertical);
/// column.set_size(100, 100);
/// column.add_spacer_static(100, 20);
/// column.add_spacer_dynamic();
/// column.add_spacer_static(100, 20);
///
/// column.adjust_placement();
/// let offsets: Vec<i32> = column.entries().iter().map(|e| e.offset().y).collect();
/// assert_eq!(offsets, [0, 20, 80]);
/// assert_eq!(column.entries()[1].size(), Size::new(0, 60));
/// ```
#[derive(Debug)]
pub struct Layout {
    base: WidgetBase,
    fixed_size: Size,
    position_type: PositionType,
    horizontal_align: HorizontalAlign,
    vertical_align: VerticalAlign,
    entries: Vec<LayoutEntry>,
}

impl Layout {
    /// An empty, visible layout.
    pub fn new(position_type: PositionType) -> Self {
        Self {
            base: WidgetBase::new(),
            fixed_size: Size::ZERO,
            position_type,
            horizontal_align: HorizontalAlign::default(),
            vertical_align: VerticalAlign::default(),
            entries: Vec::new(),
        }
    }

    /// How children are positioned.
    pub fn position_type(&self) -> PositionType {
        self.position_type
    }

    /// The minimum size. The layout grows past it to fit its content.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.fixed_size = Size::new(width, height);
    }

    /// The minimum size set with [`set_size`](Self::set_size).
    pub fn fixed_size(&self) -> Size {
        self.fixed_size
    }

    /// Cross-axis alignment for vertical layouts.
    pub fn set_horizontal_align(&mut self, align: HorizontalAlign) {
        self.horizontal_align = align;
    }

    /// Cross-axis alignment for horizontal layouts.
    pub fn set_vertical_align(&mut self, align: VerticalAlign) {
        self.vertical_align = align;
    }

    /// Set both alignments at once.
    pub fn set_alignment(&mut self, horizontal: HorizontalAlign, vertical: VerticalAlign) {
        self.horizontal_align = horizontal;
        self.vertical_align = vertical;
    }

    /// Current horizontal alignment.
    pub fn horizontal_align(&self) -> HorizontalAlign {
        self.horizontal_align
    }

    /// Current vertical alignment.
    pub fn vertical_align(&self) -> VerticalAlign {
        self.vertical_align
    }

    /// Append a nested layout and return it for configuration.
    pub fn add_layout(&mut self, position_type: PositionType) -> &mut Self {
        self.add_widget(Self::new(position_type))
    }

    /// Append a spacer of fixed extent.
    pub fn add_spacer_static(&mut self, width: i32, height: i32) -> &mut StaticSpacer {
        self.add_widget(StaticSpacer::new(width, height))
    }

    /// Append a spacer that fills leftover space.
    pub fn add_spacer_dynamic(&mut self) -> &mut DynamicSpacer {
        self.add_widget(DynamicSpacer::new())
    }

    /// Append a sprite built by `factory`.
    ///
    /// On error nothing is appended.
    pub fn add_sprite<F: WidgetFactory + ?Sized>(
        &mut self,
        factory: &mut F,
        image_path: &str,
        palette_path: &str,
    ) -> Result<&mut (dyn Widget + 'static), WidgetError> {
        let sprite = factory.create_sprite(image_path, palette_path)?;
        Ok(self.push_built(sprite, WidgetKind::Sprite))
    }

    /// Append an animated sprite built by `factory`.
    ///
    /// On error nothing is appended.
    pub fn add_animated_sprite<F: WidgetFactory + ?Sized>(
        &mut self,
        factory: &mut F,
        image_path: &str,
        palette_path: &str,
        direction: AnimationDirection,
    ) -> Result<&mut (dyn Widget + 'static), WidgetError> {
        let sprite = factory.create_animated_sprite(image_path, palette_path, direction)?;
        Ok(self.push_built(sprite, WidgetKind::AnimatedSprite))
    }

    /// Append a label built by `factory`.
    ///
    /// On error nothing is appended.
    pub fn add_label<F: WidgetFactory + ?Sized>(
        &mut self,
        factory: &mut F,
        text: &str,
        style: F::FontStyle,
    ) -> Result<&mut (dyn Widget + 'static), WidgetError> {
        let label = factory.create_label(text, style)?;
        Ok(self.push_built(label, WidgetKind::Label))
    }

    /// Append a button built by `factory`.
    ///
    /// On error nothing is appended.
    pub fn add_button<F: WidgetFactory + ?Sized>(
        &mut self,
        factory: &mut F,
        text: &str,
        style: F::ButtonStyle,
    ) -> Result<&mut (dyn Widget + 'static), WidgetError> {
        let button = factory.create_button(text, style)?;
        Ok(self.push_built(button, WidgetKind::Button))
    }

    /// Append any widget and return it for configuration.
    pub fn add_widget<W: Widget>(&mut self, widget: W) -> &mut W {
        self.push_entry(Box::new(widget))
            .downcast_mut::<W>()
            .expect("invariant: the entry just pushed boxes a `W`")
    }

    fn push_built(
        &mut self,
        widget: Box<dyn Widget>,
        expected: WidgetKind,
    ) -> &mut (dyn Widget + 'static) {
        debug_assert_eq!(
            widget.kind(),
            expected,
            "factory built the wrong kind of widget"
        );
        self.push_entry(widget)
    }

    fn push_entry(&mut self, widget: Box<dyn Widget>) -> &mut (dyn Widget + 'static) {
        let index = self.entries.len();
        self.entries.push(LayoutEntry::new(widget));
        self.entries[index].widget_mut()
    }

    /// Drop every child.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of children, hidden ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Placement records in insertion order.
    ///
    /// Rectangles reflect the most recent placement pass; call
    /// [`adjust_placement`](Self::adjust_placement) first for fresh ones.
    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    /// The placement record at `index`.
    pub fn entry(&self, index: usize) -> Option<&LayoutEntry> {
        self.entries.get(index)
    }

    /// The child at `index`, if it is a `T`.
    pub fn widget_mut<T: Widget>(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index)?.widget_mut().downcast_mut::<T>()
    }

    fn visible_widgets(&self) -> impl Iterator<Item = &(dyn Widget + 'static)> {
        self.entries
            .iter()
            .map(LayoutEntry::widget)
            .filter(|widget| widget.is_visible())
    }

    /// Aggregate natural size of the visible children.
    pub fn content_size(&self) -> Size {
        let mut content = Size::ZERO;

        for widget in self.visible_widgets() {
            let size = widget.size().non_negative();

            match self.position_type {
                PositionType::Vertical => {
                    content.width = content.width.max(size.width);
                    content.height = content.height.saturating_add(size.height);
                }
                PositionType::Horizontal => {
                    content.width = content.width.saturating_add(size.width);
                    content.height = content.height.max(size.height);
                }
                PositionType::Absolute => {
                    let position = widget.position();
                    content.width = content.width.max(position.x.saturating_add(size.width));
                    content.height = content
                        .height
                        .max(position.y.saturating_add(size.height));
                }
            }
        }

        content
    }

    /// Content size, grown to at least the fixed size.
    pub fn effective_size(&self) -> Size {
        self.content_size().max(self.fixed_size)
    }

    /// Extent handed to each expanding child.
    fn expander_size(&self, size: Size) -> Size {
        let expanders = self
            .visible_widgets()
            .filter(|widget| widget.is_expanding())
            .count();
        if expanders == 0 {
            return Size::ZERO;
        }

        let count = i32::try_from(expanders).unwrap_or(i32::MAX);
        let content = self.content_size();
        let share = match self.position_type {
            PositionType::Vertical => Size::new(0, (size.height - content.height) / count),
            PositionType::Horizontal => Size::new((size.width - content.width) / count, 0),
            PositionType::Absolute => Size::ZERO,
        };
        share.non_negative()
    }

    /// Compute every visible child's rectangle and propagate screen
    /// positions to the children.
    pub fn adjust_placement(&mut self) {
        let size = self.effective_size();
        let expander = self.expander_size(size);
        let origin = self.base.screen_position();
        let position_type = self.position_type;
        let horizontal_align = self.horizontal_align;
        let vertical_align = self.vertical_align;

        tracing::trace!(
            mode = ?position_type,
            width = size.width,
            height = size.height,
            expander_width = expander.width,
            expander_height = expander.height,
            "placing layout entries"
        );

        let mut cursor = Position::ZERO;
        for entry in &mut self.entries {
            let widget = entry.widget();
            if !widget.is_visible() {
                continue;
            }

            let child = if widget.is_expanding() {
                expander
            } else {
                widget.size().non_negative()
            };

            let offset = match position_type {
                PositionType::Vertical => {
                    let x = match horizontal_align {
                        HorizontalAlign::Left => 0,
                        HorizontalAlign::Center => (size.width - child.width) / 2,
                        HorizontalAlign::Right => size.width - child.width,
                    };
                    let offset = Position::new(x, cursor.y);
                    cursor.y = cursor.y.saturating_add(child.height);
                    offset
                }
                PositionType::Horizontal => {
                    let y = match vertical_align {
                        VerticalAlign::Top => 0,
                        VerticalAlign::Middle => (size.height - child.height) / 2,
                        VerticalAlign::Bottom => size.height - child.height,
                    };
                    let offset = Position::new(cursor.x, y);
                    cursor.x = cursor.x.saturating_add(child.width);
                    offset
                }
                PositionType::Absolute => widget.position(),
            };

            entry.place(offset, child);
            entry.widget_mut().set_screen_position(origin + offset);
        }
    }

    /// Index of the entry hit by `event`: the last visible entry whose
    /// rectangle contains it, ignoring spacers and nested layouts with
    /// nothing under the pointer.
    ///
    /// Uses the rectangles from the most recent placement pass of this
    /// layout and of the layouts nested in it.
    pub fn pointer_target(&self, event: &impl InputEvent) -> Option<usize> {
        self.entries
            .iter()
            .rposition(|entry| entry.accepts_pointer(event))
    }

    /// Place this layout and every visible layout nested in it, so that
    /// target resolution sees current rectangles all the way down.
    fn place_subtree(&mut self) {
        self.adjust_placement();
        for entry in &mut self.entries {
            if !entry.widget().is_visible() {
                continue;
            }
            if let Some(layout) = entry.nested_layout() {
                layout.place_subtree();
            }
        }
    }

    /// Release `button` in every entry of this subtree, silently.
    pub(crate) fn release_button(&mut self, button: MouseButton) {
        for entry in &mut self.entries {
            entry.release_button(button);
        }
    }

    /// Forget all hover and press state in this subtree, silently.
    pub(crate) fn reset_interaction(&mut self) {
        for entry in &mut self.entries {
            entry.reset();
        }
    }
}

impl Widget for Layout {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Layout
    }

    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size(&self) -> Size {
        self.effective_size()
    }

    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), WidgetError> {
        self.adjust_placement();

        for entry in &mut self.entries {
            if !entry.widget().is_visible() {
                continue;
            }

            let offset = entry.offset();
            let widget = entry.widget_mut();
            surface
                .with_translation(offset.x, offset.y, |surface| widget.render(surface))
                .inspect_err(|err| {
                    tracing::warn!(widget = ?widget.kind(), %err, "render pass halted");
                })?;
        }

        Ok(())
    }

    fn advance(&mut self, elapsed: f64) -> Result<(), WidgetError> {
        for entry in &mut self.entries {
            let widget = entry.widget_mut();
            widget.advance(elapsed).inspect_err(|err| {
                tracing::warn!(widget = ?widget.kind(), %err, "advance pass halted");
            })?;
        }

        Ok(())
    }

    fn on_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        self.place_subtree();
        let target = self.pointer_target(event);

        for (index, entry) in self.entries.iter_mut().enumerate() {
            if entry.widget().is_visible() {
                entry.pointer_moved(event, target == Some(index));
            } else {
                entry.reset();
            }
        }

        false
    }

    fn on_mouse_leave(&mut self, event: &MouseMoveEvent) -> bool {
        for entry in &mut self.entries {
            entry.pointer_left(event);
        }

        false
    }

    fn on_mouse_button_down(&mut self, event: &MouseEvent) -> bool {
        self.place_subtree();
        let target = self.pointer_target(event);

        for (index, entry) in self.entries.iter_mut().enumerate() {
            if entry.widget().is_visible() {
                entry.button_down(event, target == Some(index));
            } else {
                entry.reset();
            }
        }

        false
    }

    fn on_mouse_button_up(&mut self, event: &MouseEvent) -> bool {
        self.place_subtree();
        let target = self.pointer_target(event);

        for (index, entry) in self.entries.iter_mut().enumerate() {
            if entry.widget().is_visible() {
                entry.button_up(event, target == Some(index));
            } else {
                entry.reset();
            }
        }

        false
    }
}
