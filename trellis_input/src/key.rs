// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard keys.

/// A physical keyboard key, independent of layout and modifiers.
///
/// Text entry should use [`KeyCharsEvent`](crate::KeyCharsEvent) instead;
/// this enum is for bindings and navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[expect(missing_docs, reason = "key names are self-describing")]
pub enum Key {
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    Backspace,
    Tab,
    Enter,
    Escape,
    Space,
    Minus,
    Equal,
    Comma,
    Period,
    Slash,
    Backslash,
    Semicolon,
    Apostrophe,
    LeftBracket,
    RightBracket,
    GraveAccent,
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
    CapsLock,
    PrintScreen,
    Pause,
}

impl Key {
    /// The key for a decimal digit, if `digit` is in `0..=9`.
    pub const fn from_digit(digit: u8) -> Option<Self> {
        Some(match digit {
            0 => Self::Digit0,
            1 => Self::Digit1,
            2 => Self::Digit2,
            3 => Self::Digit3,
            4 => Self::Digit4,
            5 => Self::Digit5,
            6 => Self::Digit6,
            7 => Self::Digit7,
            8 => Self::Digit8,
            9 => Self::Digit9,
            _ => return None,
        })
    }

    /// Returns `true` for the Shift, Control and Alt keys.
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::LeftShift
                | Self::RightShift
                | Self::LeftControl
                | Self::RightControl
                | Self::LeftAlt
                | Self::RightAlt
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_round_out_at_nine() {
        assert_eq!(Key::from_digit(0), Some(Key::Digit0));
        assert_eq!(Key::from_digit(9), Some(Key::Digit9));
        assert_eq!(Key::from_digit(10), None);
    }

    #[test]
    fn modifier_keys() {
        assert!(Key::LeftShift.is_modifier());
        assert!(Key::RightAlt.is_modifier());
        assert!(!Key::CapsLock.is_modifier());
        assert!(!Key::A.is_modifier());
    }
}
