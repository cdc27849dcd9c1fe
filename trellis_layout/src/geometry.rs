// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel geometry used by placement and hit testing.
//!
//! Layout works in whole pixels. These types convert to Kurbo at the edges so
//! results can be fed to box trees and renderers that speak `f64`.

use core::ops::{Add, AddAssign, Sub};

use kurbo::{Point, Rect};

/// A pixel position. Arithmetic saturates at the bounds of `i32`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Horizontal coordinate, growing to the right.
    pub x: i32,
    /// Vertical coordinate, growing downwards.
    pub y: i32,
}

impl Position {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a position.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl AddAssign for Position {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Position {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl From<Position> for Point {
    #[inline]
    fn from(p: Position) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

/// A pixel extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Componentwise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Clamp negative extents to zero.
    #[inline]
    #[must_use]
    pub fn non_negative(self) -> Self {
        self.max(Self::ZERO)
    }
}

/// An axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Top-left corner.
    pub origin: Position,
    /// Extent from the origin.
    pub size: Size,
}

impl Bounds {
    /// Create a rectangle from its top-left corner and extent.
    #[inline]
    pub const fn new(origin: Position, size: Size) -> Self {
        Self { origin, size }
    }

    /// Convert to a Kurbo rectangle.
    #[inline]
    pub fn to_rect(self) -> Rect {
        Rect::from_origin_size(
            Point::from(self.origin),
            (f64::from(self.size.width), f64::from(self.size.height)),
        )
    }

    /// Half-open containment: the left and top edges are inside, the right
    /// and bottom edges are not. Empty rectangles contain nothing.
    #[inline]
    pub fn contains(self, point: Point) -> bool {
        self.to_rect().contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_arithmetic() {
        let mut p = Position::new(3, 4) + Position::new(10, -2);
        assert_eq!(p, Position::new(13, 2));
        p += Position::new(1, 1);
        assert_eq!(p - Position::new(14, 3), Position::ZERO);
    }

    #[test]
    fn position_arithmetic_saturates() {
        let far = Position::new(i32::MAX - 1, i32::MIN + 1);
        assert_eq!(far + Position::new(5, -5), Position::new(i32::MAX, i32::MIN));
        assert_eq!(far - Position::new(-5, 5), Position::new(i32::MAX, i32::MIN));
        let mut p = far;
        p += Position::new(5, 0);
        assert_eq!(p.x, i32::MAX);
    }

    #[test]
    fn size_max_is_componentwise() {
        let a = Size::new(10, 50);
        let b = Size::new(30, 20);
        assert_eq!(a.max(b), Size::new(30, 50));
        assert_eq!(Size::new(-4, 7).non_negative(), Size::new(0, 7));
    }

    #[test]
    fn containment_is_half_open() {
        let b = Bounds::new(Position::new(10, 10), Size::new(5, 5));
        assert!(b.contains(Point::new(10.0, 10.0)));
        assert!(b.contains(Point::new(14.0, 14.0)));
        assert!(!b.contains(Point::new(15.0, 12.0)));
        assert!(!b.contains(Point::new(12.0, 15.0)));
        assert!(!b.contains(Point::new(9.0, 12.0)));
    }

    #[test]
    fn empty_bounds_contain_nothing() {
        let b = Bounds::new(Position::new(0, 0), Size::new(0, 60));
        assert!(!b.contains(Point::new(0.0, 0.0)));
        assert!(!b.contains(Point::new(0.0, 30.0)));
    }

    #[test]
    fn to_rect_matches_origin_and_size() {
        let b = Bounds::new(Position::new(-5, 2), Size::new(20, 8));
        assert_eq!(b.to_rect(), Rect::new(-5.0, 2.0, 15.0, 10.0));
    }
}
