//! Pure geometry kernel: points, rectangles and line segments.
//!
//! Everything here is a total, synchronous function over plain values; no
//! engine state is involved. Coordinates follow the screen convention of a
//! y axis that increases downward.

mod line;
mod point;
mod rect;

pub use line::Line;
pub use point::Point;
pub use rect::{Rect, Size};
