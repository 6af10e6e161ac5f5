//! Labelboard - the geometric transform engine of an image-annotation editor.
//!
//! The crate is headless: it turns a stream of pointer events into consistent
//! rectangle-label state changes and live previews, while the host application
//! owns rendering, persistence and the label collection itself (reached
//! through the [`store::LabelStore`] capability trait).
//!
//! ## Architecture
//!
//! - `geometry` - pure point/rectangle/line math (leaf, no dependencies)
//! - `anchors` - the 8 interaction handles derived from a rectangle
//! - `spatial_index` - R-tree candidate prefilter for hit testing
//! - `hit_test` - pointer classification (interior / boundary band / anchor)
//! - `input` - the single-active-gesture interaction state machine
//! - `store` - label-collection capability trait + in-memory implementation

pub mod anchors;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod spatial_index;
pub mod store;
pub mod types;

pub use anchors::{Anchor, AnchorKind, Direction};
pub use error::{EngineError, EngineResult};
pub use geometry::{Line, Point, Rect, Size};
pub use hit_test::{HitTarget, HitTester};
pub use input::{GestureState, TransformEngine, ViewportActions};
pub use store::{LabelStore, MemoryLabelStore};
pub use types::{CursorHint, EditorFrame, LabelId, LabelStatus, LabeledRect};
