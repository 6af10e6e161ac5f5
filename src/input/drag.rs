//! Pointer-move: hover feedback.
//!
//! While a gesture is in flight the renderer pulls the live geometry from
//! the preview surface, so movement needs no bookkeeping here. While Idle,
//! movement drives hover highlighting: the store's highlighted id follows
//! the label whose boundary band is under the pointer. Interior hover does
//! not highlight; the band (which also covers the anchor boxes of the
//! active label) is the affordance for selection.

use tracing::trace;

use crate::hit_test::HitTarget;
use crate::store::LabelStore;
use crate::types::EditorFrame;

use super::TransformEngine;
use super::coords::{ViewportContext, project_labels};

impl TransformEngine {
    /// Handle pointer movement.
    pub fn handle_pointer_move(&mut self, frame: &EditorFrame, store: &mut dyn LabelStore) {
        if self.gesture.is_in_progress() {
            return;
        }

        let highlight = match (frame.pointer, ViewportContext::from_frame(frame)) {
            (Some(pointer), Some(ctx)) if frame.pointer_over_image() => {
                let labels = project_labels(store, &ctx);
                self.hit_tester.sync(&labels);
                let target = self
                    .hit_tester
                    .locate(&labels, store.active_id(), pointer, false);
                match target {
                    HitTarget::Anchor { id, .. } | HitTarget::Boundary { id } => Some(id),
                    HitTarget::Interior { .. } | HitTarget::Image | HitTarget::None => None,
                }
            }
            _ => None,
        };

        if store.highlighted_id() != highlight {
            trace!(?highlight, "hover highlight changed");
            store.set_highlighted_id(highlight);
        }
    }
}
