//! Anchor model: the 8 interaction handles of a rectangle.
//!
//! Every rectangle exposes 4 corner anchors and 4 edge-midpoint anchors,
//! rotated or not. Corner anchors drive rotation and edge anchors drive
//! resize; that split is a product decision and dispatch on [`AnchorKind`]
//! must stay structural.

use crate::geometry::{Line, Point, Rect};

/// Compass direction of an anchor, also used to pick the resize rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

/// Whether an anchor sits on a corner or an edge midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorKind {
    /// Drives rotation.
    Corner,
    /// Drives resize.
    Edge,
}

/// A derived interaction handle. Never persisted; recomputed per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub kind: AnchorKind,
    pub direction: Direction,
    pub position: Point,
}

impl Anchor {
    fn corner(direction: Direction, position: Point) -> Self {
        Self {
            kind: AnchorKind::Corner,
            direction,
            position,
        }
    }

    fn edge(direction: Direction, position: Point) -> Self {
        Self {
            kind: AnchorKind::Edge,
            direction,
            position,
        }
    }
}

/// Derive the 8 anchors of `rect`.
///
/// The order is fixed and consumers depend on it: corners follow the
/// rotated-vertex index order (NE, NW, SW, SE), each followed by the edge
/// midpoint toward the next vertex:
///
///     [NE, N, NW, W, SW, S, SE, E]
///
/// The zero-rotation branch places anchors on the literal corners and side
/// midpoints without trigonometry, so those positions are exact.
pub fn map_to_anchors(rect: Rect) -> [Anchor; 8] {
    if rect.rotation == 0.0 {
        let Rect {
            x, y, width, height, ..
        } = rect;
        [
            Anchor::corner(Direction::NE, Point::new(x + width, y)),
            Anchor::edge(Direction::N, Point::new(x + 0.5 * width, y)),
            Anchor::corner(Direction::NW, Point::new(x, y)),
            Anchor::edge(Direction::W, Point::new(x, y + 0.5 * height)),
            Anchor::corner(Direction::SW, Point::new(x, y + height)),
            Anchor::edge(Direction::S, Point::new(x + 0.5 * width, y + height)),
            Anchor::corner(Direction::SE, Point::new(x + width, y + height)),
            Anchor::edge(Direction::E, Point::new(x + width, y + 0.5 * height)),
        ]
    } else {
        let v = rect.rotated_vertices();
        let mid = |a: Point, b: Point| Line::new(a, b).midpoint();
        [
            Anchor::corner(Direction::NE, v[0]),
            Anchor::edge(Direction::N, mid(v[0], v[1])),
            Anchor::corner(Direction::NW, v[1]),
            Anchor::edge(Direction::W, mid(v[1], v[2])),
            Anchor::corner(Direction::SW, v[2]),
            Anchor::edge(Direction::S, mid(v[2], v[3])),
            Anchor::corner(Direction::SE, v[3]),
            Anchor::edge(Direction::E, mid(v[3], v[0])),
        ]
    }
}

impl Direction {
    /// Apply the fixed per-direction resize rule and re-normalize.
    ///
    /// E/S move only the far edge; W/N move origin and size inversely;
    /// corners combine the two edge rules. Normalization runs
    /// unconditionally so the result always has non-negative dimensions,
    /// previews included.
    pub fn resize(self, rect: Rect, delta: Point) -> Rect {
        let mut r = rect;
        match self {
            Direction::E => {
                r.width += delta.x;
            }
            Direction::SE => {
                r.width += delta.x;
                r.height += delta.y;
            }
            Direction::S => {
                r.height += delta.y;
            }
            Direction::NE => {
                r.width += delta.x;
                r.y += delta.y;
                r.height -= delta.y;
            }
            Direction::N => {
                r.y += delta.y;
                r.height -= delta.y;
            }
            Direction::NW => {
                r.x += delta.x;
                r.width -= delta.x;
                r.y += delta.y;
                r.height -= delta.y;
            }
            Direction::W => {
                r.x += delta.x;
                r.width -= delta.x;
            }
            Direction::SW => {
                r.x += delta.x;
                r.width -= delta.x;
                r.height += delta.y;
            }
        }
        r.normalized()
    }
}
