//! Pointer-down: gesture start.
//!
//! Resolves the hit-test priority and transitions out of Idle: an anchor on
//! the active label starts a rotation (corner) or resize (edge), a boundary
//! band selects without starting a gesture, an interior starts a drag, and
//! bare image area starts a creation rubber band.

use tracing::debug;

use crate::anchors::AnchorKind;
use crate::hit_test::HitTarget;
use crate::store::LabelStore;
use crate::types::EditorFrame;

use super::coords::{ViewportContext, project_labels};
use super::{TransformEngine, ViewportActions};

impl TransformEngine {
    /// Handle a primary-button press. No-op while a gesture is already in
    /// flight or while pointer/image information is missing.
    pub fn handle_pointer_down(
        &mut self,
        frame: &EditorFrame,
        store: &mut dyn LabelStore,
        viewport: &mut dyn ViewportActions,
    ) {
        if self.gesture.is_in_progress() {
            return;
        }
        let Some(pointer) = frame.pointer else { return };
        let Some(ctx) = ViewportContext::from_frame(frame) else {
            return;
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
            HitTarget::Anchor { id, anchor } => {
                store.set_active_id(Some(id));
                match anchor.kind {
                    AnchorKind::Corner => self.gesture.start_rotating(anchor),
                    AnchorKind::Edge => self.gesture.start_resizing(anchor),
                }
                viewport.set_actions_disabled(true);
                debug!(label = %id, direction = ?anchor.direction, kind = ?anchor.kind, "anchor grabbed");
            }
            HitTarget::Boundary { id } => {
                // Selection only; the engine stays Idle.
                store.set_active_id(Some(id));
                debug!(label = %id, "label selected");
            }
            HitTarget::Interior { id } => {
                store.set_active_id(Some(id));
                self.gesture.start_dragging(pointer);
                viewport.set_actions_disabled(true);
                debug!(label = %id, "drag started");
            }
            HitTarget::Image => {
                store.set_active_id(None);
                self.gesture.start_creating(pointer);
                viewport.set_actions_disabled(true);
                debug!(x = pointer.x, y = pointer.y, "creation started");
            }
            HitTarget::None => {}
        }
    }
}
