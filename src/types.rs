//! Core types for the labelboard engine.
//!
//! Defines the label records the engine reads from the store, the per-event
//! input snapshot, and the advisory cursor value exposed to the host UI.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Labels
// ============================================================================

/// Unique identifier of a rectangle label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelId(Uuid);

impl LabelId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LabelId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Review status of a label.
///
/// Draft labels participate in boundary/interior hit tests but expose no
/// anchor handles, so they cannot be resized or rotated until accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelStatus {
    #[default]
    Draft,
    Accepted,
}

/// A rectangle label as held by the store.
///
/// The store owns the lifecycle; the engine reads these and requests updates
/// through [`crate::store::LabelStore`]. Rects are stored in image space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabeledRect {
    pub id: LabelId,
    pub rect: Rect,
    pub status: LabelStatus,
    pub visible: bool,
}

impl LabeledRect {
    /// Create a new visible draft label around `rect`.
    pub fn new(rect: Rect) -> Self {
        Self {
            id: LabelId::new(),
            rect,
            status: LabelStatus::Draft,
            visible: true,
        }
    }

    /// Builder-style status override.
    pub fn with_status(mut self, status: LabelStatus) -> Self {
        self.status = status;
        self
    }
}

// ============================================================================
// Input
// ============================================================================

/// Per-event snapshot of the input source.
///
/// `pointer` is the pointer position in viewport-content coordinates and may
/// be absent (pointer left the surface). `image_rect` is where the image is
/// displayed, in the same coordinates; absent while no image is loaded.
/// `scale` converts viewport-content pixels to image pixels.
///
/// Handlers treat missing fields as a transient absence and no-op for the
/// frame rather than fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorFrame {
    pub pointer: Option<Point>,
    pub image_rect: Option<Rect>,
    pub scale: f32,
}

impl EditorFrame {
    pub fn new(pointer: Option<Point>, image_rect: Option<Rect>, scale: f32) -> Self {
        Self {
            pointer,
            image_rect,
            scale,
        }
    }

    /// True when the pointer is known and lies over the displayed image.
    pub fn pointer_over_image(&self) -> bool {
        match (self.pointer, self.image_rect) {
            (Some(pointer), Some(image_rect)) => image_rect.contains_point(pointer),
            _ => false,
        }
    }
}

// ============================================================================
// UI Feedback
// ============================================================================

/// Advisory cursor value derived from the current hit-test result and the
/// active gesture. Purely a hint; the host maps it to real cursors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorHint {
    #[default]
    None,
    Resize,
    Rotate,
    Grab,
    Grabbing,
    Create,
}
