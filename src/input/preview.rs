//! Renderer surface: in-flight geometry and cursor hints.
//!
//! The renderer pulls from here every frame instead of the engine pushing
//! state; the preview math is the same [`TransformEngine::apply_gesture`]
//! used on commit, so what is drawn mid-gesture is exactly what lands in the
//! store on release.

use tracing::trace;

use crate::anchors::AnchorKind;
use crate::geometry::Rect;
use crate::hit_test::HitTarget;
use crate::store::LabelStore;
use crate::types::{CursorHint, EditorFrame, LabelId};

use super::coords::{ViewportContext, project_labels};
use super::state::GestureState;
use super::TransformEngine;

impl TransformEngine {
    /// Viewport-space rect to draw for the given label, with the in-flight
    /// gesture applied when it is the active label. `None` when no image is
    /// displayed or the id is unknown.
    pub fn display_rect(
        &self,
        frame: &EditorFrame,
        store: &dyn LabelStore,
        id: LabelId,
    ) -> Option<Rect> {
        let ctx = ViewportContext::from_frame(frame)?;
        let view = ctx.to_viewport(store.label(id)?.rect);
        if store.active_id() != Some(id) {
            return Some(view);
        }
        let Some(pointer) = frame.pointer else {
            return Some(view);
        };
        let shown = self.apply_gesture(view, pointer, &ctx);
        if shown != view {
            trace!(label = %id, ?shown, "gesture preview");
        }
        Some(shown)
    }

    /// The rubber-band rect while a creation gesture is in flight, clamped
    /// into the image. Viewport-space, already normalized.
    pub fn creation_preview(&self, frame: &EditorFrame) -> Option<Rect> {
        let GestureState::Creating { anchor_point } = self.gesture else {
            return None;
        };
        let ctx = ViewportContext::from_frame(frame)?;
        let snapped = ctx.image_rect.clamp_point(frame.pointer?);
        Some(Rect::from_corners(anchor_point, snapped))
    }

    /// Advisory cursor for the current pointer position and gesture.
    pub fn cursor_hint(&mut self, frame: &EditorFrame, store: &dyn LabelStore) -> CursorHint {
        match self.gesture {
            GestureState::Creating { .. } => return CursorHint::Create,
            GestureState::Resizing { .. } => return CursorHint::Resize,
            GestureState::Rotating { .. } => return CursorHint::Rotate,
            GestureState::Dragging { .. } => return CursorHint::Grabbing,
            GestureState::Idle => {}
        }

        let (Some(pointer), Some(ctx)) = (frame.pointer, ViewportContext::from_frame(frame))
        else {
            return CursorHint::None;
        };
        let labels = project_labels(store, &ctx);
        self.hit_tester.sync(&labels);
        let target = self.hit_tester.locate(
            &labels,
            store.active_id(),
            pointer,
            frame.pointer_over_image(),
        );
        match target {
            HitTarget::Anchor { anchor, .. } => match anchor.kind {
                AnchorKind::Corner => CursorHint::Rotate,
                AnchorKind::Edge => CursorHint::Resize,
            },
            HitTarget::Boundary { .. } | HitTarget::Interior { .. } => CursorHint::Grab,
            HitTarget::Image => CursorHint::Create,
            HitTarget::None => CursorHint::None,
        }
    }
}
