// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier masks and mouse buttons.

bitflags::bitflags! {
    /// Keyboard modifiers held while an event was produced.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyMod: u8 {
        /// Either Alt key.
        const ALT     = 0b0000_0001;
        /// Either Control key.
        const CONTROL = 0b0000_0010;
        /// Either Shift key.
        const SHIFT   = 0b0000_0100;
    }
}

bitflags::bitflags! {
    /// Mouse buttons held while an event was produced.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseButtonMod: u8 {
        /// Left (primary) button.
        const LEFT   = 0b0000_0001;
        /// Middle button.
        const MIDDLE = 0b0000_0010;
        /// Right (secondary) button.
        const RIGHT  = 0b0000_0100;
    }
}

/// A single mouse button.
///
/// The discriminants are dense so per-button state can live in a fixed array
/// of [`MouseButton::COUNT`] slots indexed by [`MouseButton::index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left (primary) button.
    Left,
    /// Middle button.
    Middle,
    /// Right (secondary) button.
    Right,
}

impl MouseButton {
    /// Number of distinct buttons.
    pub const COUNT: usize = 3;

    /// All buttons, in index order.
    pub const ALL: [Self; Self::COUNT] = [Self::Left, Self::Middle, Self::Right];

    /// Dense index of this button, in `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }

    /// The modifier bit reported while this button is held.
    #[inline]
    pub const fn as_mod(self) -> MouseButtonMod {
        match self {
            Self::Left => MouseButtonMod::LEFT,
            Self::Middle => MouseButtonMod::MIDDLE,
            Self::Right => MouseButtonMod::RIGHT,
        }
    }
}
