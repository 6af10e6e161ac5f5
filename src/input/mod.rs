//! The interaction state machine.
//!
//! [`TransformEngine`] turns raw pointer events into label mutations. Each
//! event arrives with an [`EditorFrame`] snapshot; the engine classifies the
//! pointer through [`crate::hit_test::HitTester`], tracks the single active
//! gesture in [`GestureState`], and writes results into the injected
//! [`crate::store::LabelStore`] only at commit points (pointer up).
//!
//! Handlers are split by event, mirroring the lifecycle:
//! [`mouse_down`](self) starts gestures, [`drag`](self) handles pointer
//! movement, [`mouse_up`](self) commits, and [`preview`](self) exposes the
//! in-flight geometry to the renderer.

mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod preview;
mod state;

pub use state::GestureState;

use crate::geometry::{Point, Rect};
use crate::hit_test::HitTester;

use self::coords::ViewportContext;
use tracing::debug;

/// Host hook for the pan/zoom handshake.
///
/// While a gesture is in flight the viewport must not pan or zoom under the
/// pointer; the engine disables viewport actions on gesture start and
/// re-enables them on commit or cancel.
pub trait ViewportActions {
    fn set_actions_disabled(&mut self, disabled: bool);
}

/// Pointer-driven transform engine for rectangle labels.
///
/// Owns only the gesture state and the hit tester; label data lives in the
/// store. Single-threaded by design: one engine per editing surface.
pub struct TransformEngine {
    gesture: GestureState,
    hit_tester: HitTester,
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformEngine {
    pub fn new() -> Self {
        Self {
            gesture: GestureState::Idle,
            hit_tester: HitTester::new(),
        }
    }

    /// Engine with non-default hover sizes, e.g. for touch input.
    pub fn with_hit_tester(hit_tester: HitTester) -> Self {
        Self {
            gesture: GestureState::Idle,
            hit_tester,
        }
    }

    /// The gesture currently in flight.
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn is_in_progress(&self) -> bool {
        self.gesture.is_in_progress()
    }

    /// Abort the active gesture without committing, e.g. on focus loss or
    /// escape. Idempotent.
    pub fn cancel(&mut self, viewport: &mut dyn ViewportActions) {
        if self.gesture.is_in_progress() {
            debug!(gesture = ?self.gesture, "gesture cancelled");
        }
        self.end_gesture(viewport);
    }

    fn end_gesture(&mut self, viewport: &mut dyn ViewportActions) {
        self.gesture.reset();
        viewport.set_actions_disabled(false);
    }

    /// Apply the in-flight gesture to the active label's viewport-space
    /// rect. Shared by the preview path and the commit path so the committed
    /// geometry is exactly what was last previewed.
    fn apply_gesture(&self, view: Rect, pointer: Point, ctx: &ViewportContext) -> Rect {
        match self.gesture {
            GestureState::Resizing { anchor } => {
                let snapped = ctx.image_rect.clamp_point(pointer);
                anchor.direction.resize(view, snapped - anchor.position)
            }
            GestureState::Rotating { anchor } => {
                let snapped = ctx.image_rect.clamp_point(pointer);
                view.rotated_by(anchor.position, snapped)
            }
            GestureState::Dragging { anchor_point } => {
                let clamped = self
                    .drag_limits(anchor_point, view, ctx)
                    .clamp_point(pointer);
                view.translated(clamped - anchor_point)
            }
            GestureState::Idle | GestureState::Creating { .. } => view,
        }
    }

    /// Pointer positions that keep the dragged rect fully inside the image.
    ///
    /// Built around the fixed pointer-down offset into the rect; may have
    /// negative extent when the rect is larger than the image, in which case
    /// `clamp_point` pins to the lower bound.
    fn drag_limits(&self, anchor_point: Point, view: Rect, ctx: &ViewportContext) -> Rect {
        Rect::new(
            anchor_point.x - view.x + ctx.image_rect.x,
            anchor_point.y - view.y + ctx.image_rect.y,
            ctx.image_rect.width - view.width,
            ctx.image_rect.height - view.height,
        )
    }
}
