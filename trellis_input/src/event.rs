// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event records handed to layouts and widgets.

use alloc::vec::Vec;

use kurbo::Point;

use crate::{Key, KeyMod, MouseButton, MouseButtonMod};

/// Accessors shared by every event record.
pub trait InputEvent {
    /// Keyboard modifiers held when the event was produced.
    fn key_mod(&self) -> KeyMod;

    /// Mouse buttons held when the event was produced.
    fn button_mod(&self) -> MouseButtonMod;

    /// Screen-space x coordinate of the pointer.
    fn x(&self) -> i32;

    /// Screen-space y coordinate of the pointer.
    fn y(&self) -> i32;

    /// Pointer position as a Kurbo point.
    #[inline]
    fn position(&self) -> Point {
        Point::new(f64::from(self.x()), f64::from(self.y()))
    }
}

/// Base record: pointer coordinate and modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HandlerEvent {
    key_mod: KeyMod,
    button_mod: MouseButtonMod,
    x: i32,
    y: i32,
}

impl HandlerEvent {
    /// Create a base record.
    pub const fn new(key_mod: KeyMod, button_mod: MouseButtonMod, x: i32, y: i32) -> Self {
        Self {
            key_mod,
            button_mod,
            x,
            y,
        }
    }
}

impl InputEvent for HandlerEvent {
    #[inline]
    fn key_mod(&self) -> KeyMod {
        self.key_mod
    }

    #[inline]
    fn button_mod(&self) -> MouseButtonMod {
        self.button_mod
    }

    #[inline]
    fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    fn y(&self) -> i32 {
        self.y
    }
}

// Every specialized record forwards the shared accessors to its base.
macro_rules! forward_input_event {
    ($ty:ty) => {
        impl InputEvent for $ty {
            #[inline]
            fn key_mod(&self) -> KeyMod {
                self.base.key_mod
            }

            #[inline]
            fn button_mod(&self) -> MouseButtonMod {
                self.base.button_mod
            }

            #[inline]
            fn x(&self) -> i32 {
                self.base.x
            }

            #[inline]
            fn y(&self) -> i32 {
                self.base.y
            }
        }
    };
}

/// A mouse button was pressed or released.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    base: HandlerEvent,
    button: MouseButton,
}

impl MouseEvent {
    /// Create a button record.
    pub const fn new(
        key_mod: KeyMod,
        button_mod: MouseButtonMod,
        x: i32,
        y: i32,
        button: MouseButton,
    ) -> Self {
        Self {
            base: HandlerEvent::new(key_mod, button_mod, x, y),
            button,
        }
    }

    /// Shorthand for a button event with no modifiers held.
    pub const fn at(x: i32, y: i32, button: MouseButton) -> Self {
        Self::new(KeyMod::empty(), MouseButtonMod::empty(), x, y, button)
    }

    /// The button that changed state.
    #[inline]
    pub const fn button(&self) -> MouseButton {
        self.button
    }

    /// The shared base record.
    #[inline]
    pub const fn base(&self) -> &HandlerEvent {
        &self.base
    }
}

forward_input_event!(MouseEvent);

/// The pointer moved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MouseMoveEvent {
    base: HandlerEvent,
}

impl MouseMoveEvent {
    /// Create a move record.
    pub const fn new(key_mod: KeyMod, button_mod: MouseButtonMod, x: i32, y: i32) -> Self {
        Self {
            base: HandlerEvent::new(key_mod, button_mod, x, y),
        }
    }

    /// Shorthand for a move event with no modifiers held.
    pub const fn at(x: i32, y: i32) -> Self {
        Self::new(KeyMod::empty(), MouseButtonMod::empty(), x, y)
    }

    /// The shared base record.
    #[inline]
    pub const fn base(&self) -> &HandlerEvent {
        &self.base
    }
}

forward_input_event!(MouseMoveEvent);

/// A key is held down.
///
/// Hosts emit one of these per frame while the key stays down; `duration`
/// counts those frames so bindings can implement key repeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    base: HandlerEvent,
    key: Key,
    duration: u32,
}

impl KeyEvent {
    /// Create a key record.
    pub const fn new(
        key_mod: KeyMod,
        button_mod: MouseButtonMod,
        x: i32,
        y: i32,
        key: Key,
        duration: u32,
    ) -> Self {
        Self {
            base: HandlerEvent::new(key_mod, button_mod, x, y),
            key,
            duration,
        }
    }

    /// The key.
    #[inline]
    pub const fn key(&self) -> Key {
        self.key
    }

    /// Number of frames the key has been held.
    #[inline]
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    /// The shared base record.
    #[inline]
    pub const fn base(&self) -> &HandlerEvent {
        &self.base
    }
}

forward_input_event!(KeyEvent);

/// Printable characters produced this frame.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyCharsEvent {
    base: HandlerEvent,
    chars: Vec<char>,
}

impl KeyCharsEvent {
    /// Create a character record.
    pub fn new(
        key_mod: KeyMod,
        button_mod: MouseButtonMod,
        x: i32,
        y: i32,
        chars: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            base: HandlerEvent::new(key_mod, button_mod, x, y),
            chars: chars.into_iter().collect(),
        }
    }

    /// The characters, in input order.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The shared base record.
    #[inline]
    pub const fn base(&self) -> &HandlerEvent {
        &self.base
    }
}

forward_input_event!(KeyCharsEvent);
