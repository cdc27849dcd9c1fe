// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout modes, alignment settings, and the widget variant tag.

/// How a [`Layout`](crate::Layout) positions its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PositionType {
    /// Children keep the position they report themselves.
    #[default]
    Absolute,
    /// Children stack top to bottom.
    Vertical,
    /// Children stack left to right.
    Horizontal,
}

/// Cross-axis alignment of children in a [`PositionType::Vertical`] layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    /// Flush with the left edge.
    #[default]
    Left,
    /// Centered; odd leftovers round towards the left.
    Center,
    /// Flush with the right edge.
    Right,
}

/// Cross-axis alignment of children in a [`PositionType::Horizontal`] layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    /// Flush with the top edge.
    #[default]
    Top,
    /// Centered; odd leftovers round towards the top.
    Middle,
    /// Flush with the bottom edge.
    Bottom,
}

/// The closed set of widget variants a layout can hold.
///
/// Variant-specific behavior keys off this tag instead of inspecting concrete
/// types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// A nested [`Layout`](crate::Layout).
    Layout,
    /// A [`StaticSpacer`](crate::StaticSpacer).
    StaticSpacer,
    /// A [`DynamicSpacer`](crate::DynamicSpacer).
    DynamicSpacer,
    /// A still image.
    Sprite,
    /// A frame-animated image.
    AnimatedSprite,
    /// A run of text.
    Label,
    /// A clickable button.
    Button,
}

impl WidgetKind {
    /// Returns `true` for the spacer variants.
    #[inline]
    pub const fn is_spacer(self) -> bool {
        matches!(self, Self::StaticSpacer | Self::DynamicSpacer)
    }
}
