//! Gesture state machine.
//!
//! One tagged value tracks the current interaction, making simultaneous
//! gestures unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Creating    (pointer down over bare image)
//! Idle -> Resizing    (pointer down on edge anchor of active label)
//! Idle -> Rotating    (pointer down on corner anchor of active label)
//! Idle -> Dragging    (pointer down on label interior)
//!
//! Any -> Idle         (pointer up commits; cancel discards)
//! ```

use crate::anchors::Anchor;
use crate::geometry::Point;

/// The single active gesture. Exactly one is in flight at any time.
///
/// Positions are in viewport-content coordinates, captured at gesture start:
/// `Creating`/`Dragging` keep the pointer-down position, `Resizing`/
/// `Rotating` keep the grabbed anchor (whose position is the resize
/// reference / rotation pivot for the whole gesture).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    /// No gesture in flight.
    #[default]
    Idle,

    /// Rubber-banding a new rectangle from the pointer-down position.
    Creating { anchor_point: Point },

    /// Resizing the active label by an edge anchor.
    Resizing { anchor: Anchor },

    /// Rotating the active label around a corner anchor.
    Rotating { anchor: Anchor },

    /// Translating the active label, pointer-down position fixed.
    Dragging { anchor_point: Point },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, Self::Creating { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    pub fn is_rotating(&self) -> bool {
        matches!(self, Self::Rotating { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true while any gesture is in flight.
    pub fn is_in_progress(&self) -> bool {
        !self.is_idle()
    }

    /// Reset to Idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_creating(&mut self, anchor_point: Point) {
        *self = Self::Creating { anchor_point };
    }

    pub fn start_resizing(&mut self, anchor: Anchor) {
        *self = Self::Resizing { anchor };
    }

    pub fn start_rotating(&mut self, anchor: Anchor) {
        *self = Self::Rotating { anchor };
    }

    pub fn start_dragging(&mut self, anchor_point: Point) {
        *self = Self::Dragging { anchor_point };
    }
}
