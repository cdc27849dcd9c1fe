// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface layouts render into.
//!
//! Layouts only need a scoped coordinate-space stack from the renderer:
//! before a child renders, its offset is pushed; afterwards it is popped.
//! Widgets draw in their own local space and never see their absolute
//! position through the surface.
//!
//! [`RecordingSurface`] keeps a log of those operations and is meant for
//! tests and debugging; it does not draw anything.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::Position;

/// A drawing target with a translation stack.
pub trait Surface {
    /// Push a translation on top of the current one.
    fn push_translation(&mut self, dx: i32, dy: i32);

    /// Pop the most recently pushed translation.
    fn pop(&mut self);
}

/// Scoped helpers for [`Surface`] implementations and callers.
///
/// This is separate from [`Surface`] so that `&mut dyn Surface` stays usable.
pub trait SurfaceExt: Surface {
    /// Run `f` inside a pushed translation, popping it afterwards.
    ///
    /// The pop happens whatever `f` returns, errors included.
    /// Note: if `f` panics, the translation will not be popped.
    #[inline]
    fn with_translation<R>(&mut self, dx: i32, dy: i32, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_translation(dx, dy);
        let out = f(self);
        self.pop();
        out
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}

/// Operation recorded by [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceOp {
    /// A translation was pushed.
    Push {
        /// Horizontal offset relative to the enclosing translation.
        dx: i32,
        /// Vertical offset relative to the enclosing translation.
        dy: i32,
    },
    /// The top translation was popped.
    Pop,
}

/// A [`Surface`] that records operations instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    // Accumulated translation after each push. Layout trees are shallow.
    stack: SmallVec<[Position; 8]>,
}

impl RecordingSurface {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations, oldest first.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Number of translations currently pushed.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The accumulated translation currently in effect.
    pub fn translation(&self) -> Position {
        self.stack.last().copied().unwrap_or_default()
    }

    /// Accumulated translations in effect right after each push, in order.
    pub fn pushed_translations(&self) -> Vec<Position> {
        let mut current: SmallVec<[Position; 8]> = SmallVec::new();
        let mut out = Vec::new();
        for op in &self.ops {
            match *op {
                SurfaceOp::Push { dx, dy } => {
                    let base = current.last().copied().unwrap_or_default();
                    let next = base + Position::new(dx, dy);
                    current.push(next);
                    out.push(next);
                }
                SurfaceOp::Pop => {
                    current.pop();
                }
            }
        }
        out
    }

    /// Forget recorded operations. The translation stack is kept.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn push_translation(&mut self, dx: i32, dy: i32) {
        let next = self.translation() + Position::new(dx, dy);
        self.stack.push(next);
        self.ops.push(SurfaceOp::Push { dx, dy });
    }

    fn pop(&mut self) {
        debug_assert!(!self.stack.is_empty(), "pop without a matching push");
        self.stack.pop();
        self.ops.push(SurfaceOp::Pop);
    }
}
