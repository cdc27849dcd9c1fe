// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement records and their per-entry pointer state machines.
//!
//! Each [`LayoutEntry`] pairs one widget with the rectangle its layout last
//! computed for it, plus two independent machines that survive across frames:
//!
//! - hover: outside ⇄ inside. A move that lands inside fires `enter` once,
//!   then `over` on every later move until a move lands outside, which fires
//!   `leave` once.
//! - press, one per mouse button: released ⇄ pressed. A down inside presses.
//!   An up inside a pressed entry fires `click` and then `up`. Every up
//!   releases the button, wherever it lands.
//!
//! Hit testing uses the widget's screen position and the entry's computed
//! size, not the widget's natural size: an expanding spacer's rectangle is
//! whatever share of leftover space it was given. The owning layout decides
//! which entry is hit and passes the verdict in, so that overlapping entries
//! resolve to a single target. Spacers are never targets, and a nested layout
//! is one only where one of its own entries is.

use alloc::boxed::Box;

use trellis_input::{InputEvent, MouseButton, MouseEvent, MouseMoveEvent};

use crate::{Bounds, Layout, Position, Size, Widget, WidgetKind};

/// One child of a [`Layout`] and its computed placement.
#[derive(Debug)]
pub struct LayoutEntry {
    widget: Box<dyn Widget>,
    offset: Position,
    size: Size,
    hovered: bool,
    pressed: [bool; MouseButton::COUNT],
}

impl LayoutEntry {
    pub(crate) fn new(widget: Box<dyn Widget>) -> Self {
        Self {
            widget,
            offset: Position::ZERO,
            size: Size::ZERO,
            hovered: false,
            pressed: [false; MouseButton::COUNT],
        }
    }

    /// The placed widget.
    #[inline]
    pub fn widget(&self) -> &(dyn Widget + 'static) {
        &*self.widget
    }

    #[inline]
    pub(crate) fn widget_mut(&mut self) -> &mut (dyn Widget + 'static) {
        &mut *self.widget
    }

    /// Offset from the parent layout's origin.
    #[inline]
    pub fn offset(&self) -> Position {
        self.offset
    }

    /// Computed extent.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Computed rectangle in the parent's space.
    #[inline]
    pub fn local_bounds(&self) -> Bounds {
        Bounds::new(self.offset, self.size)
    }

    /// Computed rectangle in screen space, as used for hit testing.
    #[inline]
    pub fn screen_bounds(&self) -> Bounds {
        Bounds::new(self.widget.screen_position(), self.size)
    }

    /// Whether the pointer was inside this entry after the last move.
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether `button` went down inside this entry and has not been
    /// released since.
    #[inline]
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.pressed[button.index()]
    }

    /// Hit test against the current screen rectangle.
    #[inline]
    pub fn contains(&self, event: &impl InputEvent) -> bool {
        self.screen_bounds().contains(event.position())
    }

    /// Whether this entry can be the target of a pointer event at `event`.
    pub(crate) fn accepts_pointer(&self, event: &impl InputEvent) -> bool {
        let widget = self.widget();
        if !widget.is_visible() || widget.kind().is_spacer() || !self.contains(event) {
            return false;
        }
        match self.nested_layout_ref() {
            Some(layout) => layout.pointer_target(event).is_some(),
            None => true,
        }
    }

    #[inline]
    pub(crate) fn place(&mut self, offset: Position, size: Size) {
        self.offset = offset;
        self.size = size;
    }

    pub(crate) fn pointer_moved(&mut self, event: &MouseMoveEvent, hit: bool) {
        if hit {
            self.widget.on_mouse_move(event);

            if self.hovered {
                self.widget.on_mouse_over(event);
            } else {
                tracing::debug!(
                    widget = ?self.widget.kind(),
                    x = event.x(),
                    y = event.y(),
                    "pointer entered"
                );
                self.widget.on_mouse_enter(event);
            }

            self.hovered = true;
        } else if self.hovered {
            self.pointer_left(event);
        }
    }

    /// Fire `leave` if hovered. Used when the pointer left this entry or
    /// left the layout that owns it.
    pub(crate) fn pointer_left(&mut self, event: &MouseMoveEvent) {
        if !self.hovered {
            return;
        }
        tracing::debug!(
            widget = ?self.widget.kind(),
            x = event.x(),
            y = event.y(),
            "pointer left"
        );
        self.widget.on_mouse_leave(event);
        self.hovered = false;
    }

    pub(crate) fn button_down(&mut self, event: &MouseEvent, hit: bool) {
        if hit {
            self.widget.on_mouse_button_down(event);
            self.pressed[event.button().index()] = true;
        }
    }

    pub(crate) fn button_up(&mut self, event: &MouseEvent, hit: bool) {
        let button = event.button();

        if hit && self.pressed[button.index()] {
            tracing::debug!(
                widget = ?self.widget.kind(),
                button = ?button,
                x = event.x(),
                y = event.y(),
                "click"
            );
            self.widget.on_mouse_button_click(event);
            self.widget.on_mouse_button_up(event);
        } else if let Some(layout) = self.nested_layout() {
            // The nested layout will not see this release, so its entries
            // must drop their presses here.
            layout.release_button(button);
        }

        self.pressed[button.index()] = false;
    }

    /// Forget hover and press state without firing any events. Used for
    /// entries that are hidden and therefore receive nothing.
    pub(crate) fn reset(&mut self) {
        self.hovered = false;
        self.pressed = [false; MouseButton::COUNT];
        if let Some(layout) = self.nested_layout() {
            layout.reset_interaction();
        }
    }

    pub(crate) fn release_button(&mut self, button: MouseButton) {
        self.pressed[button.index()] = false;
        if let Some(layout) = self.nested_layout() {
            layout.release_button(button);
        }
    }

    pub(crate) fn nested_layout(&mut self) -> Option<&mut Layout> {
        if self.widget.kind() != WidgetKind::Layout {
            return None;
        }
        self.widget_mut().downcast_mut::<Layout>()
    }

    fn nested_layout_ref(&self) -> Option<&Layout> {
        if self.widget.kind() != WidgetKind::Layout {
            return None;
        }
        self.widget().downcast_ref::<Layout>()
    }
}
