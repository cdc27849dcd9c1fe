// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by widget construction and per-frame passes.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::WidgetKind;

/// Error returned by widget construction, rendering, or advancing.
///
/// Every error is returned synchronously to whoever drove the operation.
/// A failing child halts the rest of that pass; nothing is retried.
#[derive(Debug)]
pub enum WidgetError {
    /// A widget could not be built from its assets.
    ///
    /// The owning layout never creates an entry for it.
    Asset {
        /// The asset reference that failed to load.
        path: String,
        /// Why it failed.
        reason: String,
    },
    /// A widget failed while drawing.
    Render {
        /// The kind of widget that failed.
        widget: WidgetKind,
        /// Why it failed.
        reason: String,
    },
    /// A widget failed while advancing its own state.
    Advance {
        /// The kind of widget that failed.
        widget: WidgetKind,
        /// Why it failed.
        reason: String,
    },
    /// Any other host error.
    Custom(Box<dyn core::error::Error + Send + Sync>),
}

impl WidgetError {
    /// Construction failure for the asset at `path`.
    pub fn asset(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Asset {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Rendering failure in a widget of the given kind.
    pub fn render(widget: WidgetKind, reason: impl Into<String>) -> Self {
        Self::Render {
            widget,
            reason: reason.into(),
        }
    }

    /// Advance failure in a widget of the given kind.
    pub fn advance(widget: WidgetKind, reason: impl Into<String>) -> Self {
        Self::Advance {
            widget,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asset { path, reason } => write!(f, "failed to load `{path}`: {reason}"),
            Self::Render { widget, reason } => write!(f, "{widget:?} failed to render: {reason}"),
            Self::Advance { widget, reason } => {
                write!(f, "{widget:?} failed to advance: {reason}")
            }
            Self::Custom(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for WidgetError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Custom(err) => Some(&**err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[derive(Debug)]
    struct Disconnected;

    impl fmt::Display for Disconnected {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("surface disconnected")
        }
    }

    impl core::error::Error for Disconnected {}

    #[test]
    fn display_names_the_failure() {
        let err = WidgetError::asset("ui/frame.dc6", "missing palette");
        assert_eq!(err.to_string(), "failed to load `ui/frame.dc6`: missing palette");

        let err = WidgetError::render(WidgetKind::Label, "font not bound");
        assert_eq!(err.to_string(), "Label failed to render: font not bound");

        let err = WidgetError::advance(WidgetKind::AnimatedSprite, "no frames");
        assert_eq!(err.to_string(), "AnimatedSprite failed to advance: no frames");
    }

    #[test]
    fn custom_errors_expose_their_source() {
        use core::error::Error as _;

        let err = WidgetError::Custom(Box::new(Disconnected));
        assert_eq!(err.to_string(), "surface disconnected");
        assert!(err.source().is_some());
        assert!(WidgetError::asset("a", "b").source().is_none());
    }
}
