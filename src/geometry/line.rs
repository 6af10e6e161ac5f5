//! Line segments between two points.

use crate::geometry::Point;

/// A directed line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Angle of the segment in radians, via `atan2(dy, dx)`.
    ///
    /// Undefined for a zero-length segment; callers must guard.
    pub fn slope(&self) -> f32 {
        let dy = self.end.y - self.start.y;
        let dx = self.end.x - self.start.x;
        dy.atan2(dx)
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f32 {
        let dy = self.end.y - self.start.y;
        let dx = self.end.x - self.start.x;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }
}
