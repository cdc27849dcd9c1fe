// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability set every placeable widget exposes.

use core::any::Any;
use core::fmt;

use trellis_input::{MouseEvent, MouseMoveEvent};

use crate::{Position, Size, Surface, WidgetError, WidgetKind};

/// State shared by every widget: where it sits and whether it is shown.
///
/// Widgets embed one and hand it out through [`Widget::base`] and
/// [`Widget::base_mut`]; the position and visibility accessors on [`Widget`]
/// are provided on top of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetBase {
    position: Position,
    screen_position: Position,
    visible: bool,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self {
            position: Position::ZERO,
            screen_position: Position::ZERO,
            visible: true,
        }
    }
}

impl WidgetBase {
    /// A visible widget at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Self-reported position, relative to the parent.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Set the self-reported position.
    #[inline]
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Absolute position assigned by the parent during placement.
    #[inline]
    pub fn screen_position(&self) -> Position {
        self.screen_position
    }

    /// Set the absolute position.
    #[inline]
    pub fn set_screen_position(&mut self, position: Position) {
        self.screen_position = position;
    }

    /// Whether the widget is shown.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget.
    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Anything a [`Layout`](crate::Layout) can place.
///
/// Only [`kind`](Self::kind), [`base`](Self::base),
/// [`base_mut`](Self::base_mut) and [`size`](Self::size) are required. Every
/// hook defaults to doing nothing, and every pointer hook returns `false`
/// ("not handled").
///
/// Pointer hooks receive events in screen space. Rendering happens in local
/// space: the layout has already pushed the widget's offset on the surface.
pub trait Widget: Any + fmt::Debug {
    /// Variant tag.
    fn kind(&self) -> WidgetKind;

    /// Shared widget state.
    fn base(&self) -> &WidgetBase;

    /// Shared widget state, mutably.
    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Natural size.
    fn size(&self) -> Size;

    /// Whether this widget takes an equal share of its parent's leftover
    /// space instead of its natural size.
    fn is_expanding(&self) -> bool {
        false
    }

    /// Self-reported position, used by absolute layouts.
    fn position(&self) -> Position {
        self.base().position()
    }

    /// Set the self-reported position.
    fn set_position(&mut self, x: i32, y: i32) {
        self.base_mut().set_position(Position::new(x, y));
    }

    /// Absolute position from the most recent placement pass.
    fn screen_position(&self) -> Position {
        self.base().screen_position()
    }

    /// Called by the parent during placement.
    fn set_screen_position(&mut self, position: Position) {
        self.base_mut().set_screen_position(position);
    }

    /// Whether the widget is shown. Hidden widgets take no space and get no
    /// pointer events, but still advance.
    fn is_visible(&self) -> bool {
        self.base().is_visible()
    }

    /// Show or hide the widget.
    fn set_visible(&mut self, visible: bool) {
        self.base_mut().set_visible(visible);
    }

    /// Draw in local space.
    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), WidgetError> {
        let _ = surface;
        Ok(())
    }

    /// Advance time-based state by `elapsed` seconds.
    fn advance(&mut self, elapsed: f64) -> Result<(), WidgetError> {
        let _ = elapsed;
        Ok(())
    }

    /// The pointer moved while inside this widget.
    fn on_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        let _ = event;
        false
    }

    /// The pointer entered this widget.
    fn on_mouse_enter(&mut self, event: &MouseMoveEvent) -> bool {
        let _ = event;
        false
    }

    /// The pointer moved again without leaving this widget.
    fn on_mouse_over(&mut self, event: &MouseMoveEvent) -> bool {
        let _ = event;
        false
    }

    /// The pointer left this widget.
    fn on_mouse_leave(&mut self, event: &MouseMoveEvent) -> bool {
        let _ = event;
        false
    }

    /// A button was pressed over this widget.
    fn on_mouse_button_down(&mut self, event: &MouseEvent) -> bool {
        let _ = event;
        false
    }

    /// A button pressed over this widget was released over it.
    fn on_mouse_button_up(&mut self, event: &MouseEvent) -> bool {
        let _ = event;
        false
    }

    /// A press and release both landed on this widget. Fires before
    /// [`on_mouse_button_up`](Self::on_mouse_button_up).
    fn on_mouse_button_click(&mut self, event: &MouseEvent) -> bool {
        let _ = event;
        false
    }
}

impl dyn Widget {
    /// Returns `true` if the concrete type is `T`.
    pub fn is<T: Widget>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Borrow as the concrete type `T`.
    pub fn downcast_ref<T: Widget>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref()
    }

    /// Mutably borrow as the concrete type `T`.
    pub fn downcast_mut<T: Widget>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut()
    }
}
