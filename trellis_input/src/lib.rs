// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Input: immutable event records for frame-driven UI.
//!
//! The host polls its input devices once per frame and turns what it sees into
//! the small records in this crate. Layouts and widgets only ever read them:
//! there is no behavior here beyond construction and accessors.
//!
//! - [`HandlerEvent`]: the shared base, a screen-space pointer coordinate plus
//!   the keyboard ([`KeyMod`]) and mouse button ([`MouseButtonMod`]) modifiers
//!   held when the event was produced.
//! - [`MouseEvent`]: a button press or release, carrying the [`MouseButton`].
//! - [`MouseMoveEvent`]: the pointer moved.
//! - [`KeyEvent`]: a [`Key`] is down, with the number of frames it has been held.
//! - [`KeyCharsEvent`]: printable characters produced this frame.
//!
//! Every record implements [`InputEvent`], so code that only cares about the
//! pointer position (hit testing, for example) is written once.
//!
//! ## Example
//!
//! ```rust
//! use trellis_input::{InputEvent, KeyMod, MouseButton, MouseButtonMod, MouseEvent};
//!
//! let event = MouseEvent::new(
//!     KeyMod::SHIFT,
//!     MouseButtonMod::LEFT,
//!     120,
//!     48,
//!     MouseButton::Left,
//! );
//!
//! assert_eq!((event.x(), event.y()), (120, 48));
//! assert!(event.key_mod().contains(KeyMod::SHIFT));
//! assert_eq!(event.button().index(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod key;
mod modifiers;

pub use event::{HandlerEvent, InputEvent, KeyCharsEvent, KeyEvent, MouseEvent, MouseMoveEvent};
pub use key::Key;
pub use modifiers::{KeyMod, MouseButton, MouseButtonMod};
