// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Layout: retained-mode box layout and pointer routing.
//!
//! A [`Layout`] holds an ordered list of widgets and, every frame, arranges
//! them into screen-space rectangles and routes pointer input to them.
//!
//! - Three positioning modes ([`PositionType`]): children keep their own
//!   coordinates, stack top to bottom, or stack left to right.
//! - Cross-axis alignment ([`HorizontalAlign`], [`VerticalAlign`]).
//! - Size negotiation: a layout is as large as its content, but never smaller
//!   than its fixed size; leftover space along the stacking axis is split
//!   between expanding children such as [`DynamicSpacer`].
//! - Per-entry hover and per-button press tracking that persists across
//!   frames, from which clicks are derived (see [`LayoutEntry`]).
//!
//! Layouts are widgets too, so they nest into a tree. Every nested layout is
//! owned by exactly one parent.
//!
//! ## What this crate does not do
//!
//! Concrete sprites, labels and buttons, asset loading, drawing, and input
//! polling belong to the host. The crate consumes them through three seams:
//!
//! - [`Widget`]: the capability set anything placeable implements.
//! - [`Surface`]: a translation stack the layout pushes each child's offset
//!   onto before it renders.
//! - [`WidgetFactory`]: builds the asset-backed widget variants for the
//!   `add_*` calls.
//!
//! Input arrives as records from [`trellis_input`].
//!
//! ## Frame loop
//!
//! ```rust
//! use trellis_input::{MouseButton, MouseEvent, MouseMoveEvent};
//! use trellis_layout::{
//!     HorizontalAlign, Layout, PositionType, RecordingSurface, VerticalAlign, Widget,
//! };
//!
//! let mut root = Layout::new(PositionType::Vertical);
//! root.set_size(320, 240);
//! root.set_alignment(HorizontalAlign::Center, VerticalAlign::Top);
//! root.add_spacer_static(200, 40);
//! root.add_spacer_dynamic();
//! let footer = root.add_layout(PositionType::Horizontal);
//! footer.add_spacer_static(60, 20);
//! footer.add_spacer_dynamic();
//!
//! // Input, in whatever order the host polled it.
//! root.on_mouse_move(&MouseMoveEvent::at(100, 10));
//! root.on_mouse_button_down(&MouseEvent::at(100, 10, MouseButton::Left));
//! root.on_mouse_button_up(&MouseEvent::at(100, 10, MouseButton::Left));
//!
//! // Then update and draw.
//! root.advance(1.0 / 60.0).unwrap();
//! let mut surface = RecordingSurface::new();
//! root.render(&mut surface).unwrap();
//! assert_eq!(surface.depth(), 0);
//!
//! // The dynamic spacer took what the header and footer left over.
//! assert_eq!(root.entries()[1].size().height, 240 - 40 - 20);
//! ```
//!
//! ## Logging
//!
//! Placement passes, hover transitions, and clicks are reported through
//! [`tracing`] at `trace` and `debug` level; halted render and advance
//! passes at `warn`. No subscriber is installed here.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod entry;
mod error;
mod factory;
mod geometry;
mod layout;
mod spacer;
mod surface;
mod types;
mod widget;

pub use entry::LayoutEntry;
pub use error::WidgetError;
pub use factory::{AnimationDirection, WidgetFactory};
pub use geometry::{Bounds, Position, Size};
pub use layout::Layout;
pub use spacer::{DynamicSpacer, StaticSpacer};
pub use surface::{RecordingSurface, Surface, SurfaceExt, SurfaceOp};
pub use types::{HorizontalAlign, PositionType, VerticalAlign, WidgetKind};
pub use widget::{Widget, WidgetBase};
