//! Label store capability.
//!
//! The engine never owns the label collection; it reads labels and requests
//! mutations through [`LabelStore`], which the host application implements
//! over its own data store. [`MemoryLabelStore`] is a plain in-memory
//! implementation used by the tests and by hosts without a store of their
//! own.

use crate::error::{EngineError, EngineResult};
use crate::geometry::Rect;
use crate::types::{LabelId, LabelStatus, LabeledRect};

/// Injected store capability.
///
/// `labels()` order is meaningful: it is the tie-break order for hit
/// testing. All rects are in image space.
pub trait LabelStore {
    /// All labels of the current image, in hit-test tie-break order.
    fn labels(&self) -> &[LabeledRect];

    fn label(&self, id: LabelId) -> Option<&LabeledRect>;

    fn active_id(&self) -> Option<LabelId>;
    fn set_active_id(&mut self, id: Option<LabelId>);

    fn highlighted_id(&self) -> Option<LabelId>;
    fn set_highlighted_id(&mut self, id: Option<LabelId>);

    /// Replace the rect of an existing label.
    fn update_rect(&mut self, id: LabelId, rect: Rect) -> EngineResult<()>;

    /// Append a freshly created label and return its id. User-drawn labels
    /// start out accepted and visible.
    fn append(&mut self, rect: Rect) -> LabelId;

    /// Signal that the first label of the session was created.
    fn mark_first_label_created(&mut self);

    /// The currently active label, if any.
    fn active_label(&self) -> Option<&LabeledRect> {
        self.active_id().and_then(|id| self.label(id))
    }
}

/// In-memory [`LabelStore`].
#[derive(Debug, Default)]
pub struct MemoryLabelStore {
    labels: Vec<LabeledRect>,
    active_id: Option<LabelId>,
    highlighted_id: Option<LabelId>,
    first_label_created: bool,
}

impl MemoryLabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an existing label record (e.g. loaded from persistence).
    pub fn push(&mut self, label: LabeledRect) {
        self.labels.push(label);
    }

    /// Whether a creation gesture has ever committed.
    pub fn first_label_created(&self) -> bool {
        self.first_label_created
    }
}

impl LabelStore for MemoryLabelStore {
    fn labels(&self) -> &[LabeledRect] {
        &self.labels
    }

    fn label(&self, id: LabelId) -> Option<&LabeledRect> {
        self.labels.iter().find(|label| label.id == id)
    }

    fn active_id(&self) -> Option<LabelId> {
        self.active_id
    }

    fn set_active_id(&mut self, id: Option<LabelId>) {
        self.active_id = id;
    }

    fn highlighted_id(&self) -> Option<LabelId> {
        self.highlighted_id
    }

    fn set_highlighted_id(&mut self, id: Option<LabelId>) {
        self.highlighted_id = id;
    }

    fn update_rect(&mut self, id: LabelId, rect: Rect) -> EngineResult<()> {
        let label = self
            .labels
            .iter_mut()
            .find(|label| label.id == id)
            .ok_or(EngineError::UnknownLabel(id))?;
        label.rect = rect;
        Ok(())
    }

    fn append(&mut self, rect: Rect) -> LabelId {
        let label = LabeledRect::new(rect).with_status(LabelStatus::Accepted);
        let id = label.id;
        self.labels.push(label);
        id
    }

    fn mark_first_label_created(&mut self) {
        self.first_label_created = true;
    }
}
