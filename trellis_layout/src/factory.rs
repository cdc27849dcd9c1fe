// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction seam for widgets that depend on host assets.
//!
//! Sprites, labels and buttons need images, palettes and fonts, which only
//! the host knows how to load. The host implements [`WidgetFactory`] on top
//! of its renderer and passes it to the `add_*` calls on
//! [`Layout`](crate::Layout). The factory is borrowed for that call only, so
//! layouts never hold on to the renderer.

use alloc::boxed::Box;

use crate::{Widget, WidgetError};

/// Playback direction of an animated sprite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationDirection {
    /// First frame to last.
    #[default]
    Forward,
    /// Last frame to first.
    Backward,
}

/// Builds the asset-backed widget variants.
///
/// Each method either returns a ready widget whose [`Widget::kind`] matches
/// the method, or an error; a failed build leaves the layout untouched.
pub trait WidgetFactory {
    /// Host-defined font selection for labels.
    type FontStyle;
    /// Host-defined look for buttons.
    type ButtonStyle;

    /// A still image from an image and a palette.
    fn create_sprite(
        &mut self,
        image_path: &str,
        palette_path: &str,
    ) -> Result<Box<dyn Widget>, WidgetError>;

    /// A frame-animated image.
    fn create_animated_sprite(
        &mut self,
        image_path: &str,
        palette_path: &str,
        direction: AnimationDirection,
    ) -> Result<Box<dyn Widget>, WidgetError>;

    /// A run of text.
    fn create_label(
        &mut self,
        text: &str,
        style: Self::FontStyle,
    ) -> Result<Box<dyn Widget>, WidgetError>;

    /// A clickable button with a caption.
    fn create_button(
        &mut self,
        text: &str,
        style: Self::ButtonStyle,
    ) -> Result<Box<dyn Widget>, WidgetError>;
}
