//! Rectangle math.
//!
//! A [`Rect`] is an axis-aligned box, optionally rotated about its own
//! center. Most operations here deliberately ignore rotation and say so;
//! rotation-aware consumers go through [`Rect::rotated_vertices`].

use crate::constants::ROTATION_SCALE_FACTOR;
use crate::geometry::{Line, Point};
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Width and height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square size, used for hover boxes.
    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }
}

/// An axis-aligned rectangle, optionally rotated about its center.
///
/// `rotation` is in radians, counter-clockwise positive, and accumulates
/// without wrapping. Committed mutations keep `width >= 0 && height >= 0`;
/// transient values produced mid-formula may be negative until
/// [`Rect::normalized`] runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub rotation: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Builder-style rotation override.
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Axis-aligned rect spanning two opposite corners, in any drag order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
        )
    }

    /// Rect of the given size centered on `center`.
    pub fn from_center_and_size(center: Point, size: Size) -> Self {
        Self::new(
            center.x - 0.5 * size.width,
            center.y - 0.5 * size.height,
            size.width,
            size.height,
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Inclusive containment test. Ignores rotation.
    pub fn contains_point(&self, point: Point) -> bool {
        self.x <= point.x
            && self.x + self.width >= point.x
            && self.y <= point.y
            && self.y + self.height >= point.y
    }

    /// Axis-aligned overlap test.
    ///
    /// Ignores rotation by design; only used where rotation is not yet
    /// relevant (e.g. candidate filtering), so treating both rects as their
    /// unrotated bounds is acceptable there.
    pub fn intersects(&self, other: Rect) -> bool {
        !(other.x > self.x + self.width
            || other.x + other.width < self.x
            || other.y > self.y + self.height
            || other.y + other.height < self.y)
    }

    /// Grow (or shrink, for negative deltas) symmetrically per axis.
    pub fn expand(&self, delta: Point) -> Rect {
        Rect {
            x: self.x - delta.x,
            y: self.y - delta.y,
            width: self.width + 2.0 * delta.x,
            height: self.height + 2.0 * delta.y,
            rotation: self.rotation,
        }
    }

    /// Scale position and size. Rotation passes through unchanged: an angle
    /// is scale-invariant.
    pub fn scaled(&self, factor: f32) -> Rect {
        Rect {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
            rotation: self.rotation,
        }
    }

    /// Pure offset of the origin.
    pub fn translated(&self, delta: Point) -> Rect {
        Rect {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }

    /// Component-wise clamp of `point` into the rect bounds; identity when
    /// already inside. When the bounds are inverted (negative width or
    /// height) the lower bound wins.
    pub fn clamp_point(&self, point: Point) -> Point {
        if self.contains_point(point) {
            return point;
        }
        Point::new(
            point.x.min(self.x + self.width).max(self.x),
            point.y.min(self.y + self.height).max(self.y),
        )
    }

    /// The four unrotated corners: top-left, top-right, bottom-right,
    /// bottom-left.
    pub fn vertices(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ]
    }

    /// The four corners rotated about the rect center.
    ///
    /// Index order is fixed and load-bearing (anchor labels map to these
    /// indices): at rotation zero the result is top-right, top-left,
    /// bottom-left, bottom-right. The sine term is negated because the y
    /// axis grows downward while positive rotation is counter-clockwise.
    pub fn rotated_vertices(&self) -> [Point; 4] {
        let a = self.width / 2.0;
        let b = self.height / 2.0;
        let side = (a * a + b * b).sqrt();
        let alpha = b.atan2(a);
        let center = self.center();

        let base_angles = [alpha, PI - alpha, PI + alpha, -alpha];
        base_angles.map(|base| {
            let angle = base + self.rotation;
            Point::new(
                center.x + angle.cos() * side,
                center.y - angle.sin() * side,
            )
        })
    }

    /// Re-express the rect with non-negative dimensions, flipping the sign
    /// of a negative extent and shifting the matching origin coordinate.
    /// Run unconditionally after every resize, previews included.
    pub fn normalized(&self) -> Rect {
        let mut rect = *self;
        if rect.width < 0.0 {
            rect.x += rect.width;
            rect.width = -rect.width;
        }
        if rect.height < 0.0 {
            rect.y += rect.height;
            rect.height = -rect.height;
        }
        rect
    }

    /// Rotate around `pivot` (the grabbed anchor's position at gesture
    /// start) toward `pointer`, accumulating onto the stored rotation.
    ///
    /// The update is a torque-like quantity scaled by `TAU / 360.0`; that
    /// exact constant sets the perceived rotation sensitivity and must not
    /// change without a compatibility decision. A zero-length pivot-to-
    /// pointer swing has no defined direction and leaves the rect unchanged.
    pub fn rotated_by(&self, pivot: Point, pointer: Point) -> Rect {
        let swing = Line::new(pivot, pointer);
        let drag_distance = swing.length();
        if drag_distance == 0.0 {
            return *self;
        }
        let center_to_pivot = Line::new(self.center(), pivot).slope();
        let torque =
            ROTATION_SCALE_FACTOR * drag_distance * (center_to_pivot - swing.slope()).sin();
        Rect {
            rotation: self.rotation + torque * TAU / 360.0,
            ..*self
        }
    }
}
