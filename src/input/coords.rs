//! Image-space / viewport-space conversion.
//!
//! Labels are stored in image pixels; pointer events arrive in
//! viewport-content pixels. All gesture math runs in viewport space and
//! converts back on commit, so hover thicknesses and anchor boxes keep a
//! constant on-screen size regardless of zoom.

use crate::geometry::{Point, Rect};
use crate::hit_test::ProjectedLabel;
use crate::store::LabelStore;
use crate::types::EditorFrame;

/// The parts of an [`EditorFrame`] needed to convert between spaces.
///
/// Only constructible while an image is displayed; handlers no-op otherwise.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ViewportContext {
    /// Where the image is displayed, in viewport-content coordinates.
    pub image_rect: Rect,
    /// Image pixels per viewport-content pixel.
    pub scale: f32,
}

impl ViewportContext {
    pub fn from_frame(frame: &EditorFrame) -> Option<Self> {
        let image_rect = frame.image_rect?;
        if !(frame.scale.is_finite() && frame.scale > 0.0) {
            return None;
        }
        Some(Self {
            image_rect,
            scale: frame.scale,
        })
    }

    fn origin(&self) -> Point {
        Point::new(self.image_rect.x, self.image_rect.y)
    }

    /// Stored image-space rect into viewport-content coordinates.
    pub fn to_viewport(&self, rect: Rect) -> Rect {
        rect.scaled(1.0 / self.scale).translated(self.origin())
    }

    /// Viewport-content rect back into image space for commit.
    pub fn to_image(&self, rect: Rect) -> Rect {
        rect.translated(-self.origin()).scaled(self.scale)
    }
}

/// Snapshot every stored label into viewport space for this frame's hit
/// tests.
pub(crate) fn project_labels(store: &dyn LabelStore, ctx: &ViewportContext) -> Vec<ProjectedLabel> {
    store
        .labels()
        .iter()
        .map(|label| ProjectedLabel {
            id: label.id,
            rect: ctx.to_viewport(label.rect),
            status: label.status,
            visible: label.visible,
        })
        .collect()
}
