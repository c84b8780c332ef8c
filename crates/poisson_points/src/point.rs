//! Point value type and unit-domain shape predicates.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sample position, nominally inside `[0, 1] x [0, 1]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        Vec2::from(self).distance(Vec2::from(other))
    }

    #[inline]
    pub fn distance_squared(self, other: Point) -> f32 {
        Vec2::from(self).distance_squared(Vec2::from(other))
    }

    /// `true` inside or on the unit square `[0, 1]^2`.
    #[inline]
    pub fn is_in_square(self) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x <= 1.0 && self.y <= 1.0
    }

    /// `true` inside or on the disk of radius 0.5 centered at `(0.5, 0.5)`.
    #[inline]
    pub fn is_in_circle(self) -> bool {
        let fx = self.x - 0.5;
        let fy = self.y - 0.5;
        fx * fx + fy * fy <= 0.25
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<mint::Point2<f32>> for Point {
    fn from(p: mint::Point2<f32>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for mint::Point2<f32> {
    fn from(p: Point) -> Self {
        mint::Point2 { x: p.x, y: p.y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Region of the unit domain that samples must fall into.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Disk inscribed in the unit square.
    #[default]
    Circle,
    /// The full unit square.
    Square,
}

impl Shape {
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        match self {
            Shape::Circle => p.is_in_circle(),
            Shape::Square => p.is_in_square(),
        }
    }

    /// Maps the `fill_circle` flag used by the generator functions.
    pub fn from_fill_circle(fill_circle: bool) -> Self {
        if fill_circle {
            Shape::Circle
        } else {
            Shape::Square
        }
    }
}
