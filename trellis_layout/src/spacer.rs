// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacers: invisible widgets that only shape the layout.

use crate::{Size, Widget, WidgetBase, WidgetKind};

/// Reserves a fixed amount of space.
#[derive(Clone, Debug, Default)]
pub struct StaticSpacer {
    base: WidgetBase,
    size: Size,
}

impl StaticSpacer {
    /// A spacer of the given extent.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            base: WidgetBase::new(),
            size: Size::new(width, height),
        }
    }

    /// Change the reserved extent.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.size = Size::new(width, height);
    }
}

impl Widget for StaticSpacer {
    fn kind(&self) -> WidgetKind {
        WidgetKind::StaticSpacer
    }

    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size(&self) -> Size {
        self.size
    }
}

/// Takes an equal share of whatever space its layout has left over.
///
/// Its natural size is zero, so it never grows a layout by itself; give the
/// layout a fixed size with [`Layout::set_size`](crate::Layout::set_size) for
/// it to have anything to fill.
#[derive(Clone, Debug, Default)]
pub struct DynamicSpacer {
    base: WidgetBase,
}

impl DynamicSpacer {
    /// A new expanding spacer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for DynamicSpacer {
    fn kind(&self) -> WidgetKind {
        WidgetKind::DynamicSpacer
    }

    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size(&self) -> Size {
        Size::ZERO
    }

    fn is_expanding(&self) -> bool {
        true
    }
}
