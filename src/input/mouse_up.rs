//! Pointer-up: gesture commit.
//!
//! The only place label data is written. Creation appends a new label from
//! the rubber band; resize, rotate and drag replace the active label's rect
//! with the gesture result. Every path ends in Idle and re-enables viewport
//! actions, even when the frame carries no pointer or image.

use tracing::debug;

use crate::error::EngineResult;
use crate::geometry::{Point, Rect};
use crate::store::LabelStore;
use crate::types::EditorFrame;

use super::coords::ViewportContext;
use super::state::GestureState;
use super::{TransformEngine, ViewportActions};

impl TransformEngine {
    /// Handle a primary-button release. Commits the in-flight gesture, then
    /// returns to Idle regardless of the outcome.
    pub fn handle_pointer_up(
        &mut self,
        frame: &EditorFrame,
        store: &mut dyn LabelStore,
        viewport: &mut dyn ViewportActions,
    ) -> EngineResult<()> {
        let result = match (frame.pointer, ViewportContext::from_frame(frame)) {
            (Some(pointer), Some(ctx)) => self.commit(pointer, &ctx, store),
            _ => Ok(()),
        };
        self.end_gesture(viewport);
        result
    }

    fn commit(
        &self,
        pointer: Point,
        ctx: &ViewportContext,
        store: &mut dyn LabelStore,
    ) -> EngineResult<()> {
        match self.gesture {
            GestureState::Idle => {}
            GestureState::Creating { anchor_point } => {
                let snapped = ctx.image_rect.clamp_point(pointer);
                if snapped == anchor_point {
                    debug!("degenerate creation discarded");
                    return Ok(());
                }
                let rect = ctx.to_image(Rect::from_corners(anchor_point, snapped));
                let id = store.append(rect);
                store.set_active_id(Some(id));
                store.mark_first_label_created();
                debug!(label = %id, ?rect, "label created");
            }
            GestureState::Resizing { .. }
            | GestureState::Rotating { .. }
            | GestureState::Dragging { .. } => {
                let Some((id, stored)) = store.active_label().map(|label| (label.id, label.rect))
                else {
                    return Ok(());
                };
                let view = ctx.to_viewport(stored);
                let updated = self.apply_gesture(view, pointer, ctx);
                store.update_rect(id, ctx.to_image(updated))?;
                debug!(label = %id, gesture = ?self.gesture, "transform committed");
            }
        }
        Ok(())
    }
}
