//! Spatial index for hit-test candidate lookup.
//!
//! An R-tree over the labels' viewport-space bounds keeps pointer
//! classification at O(log n) even with many labels on screen. Envelopes are
//! inflated by the hover reach so boundary-band and anchor-box hits just
//! outside a rectangle are never missed, and rotated rectangles contribute
//! the bounds of their rotated vertices.

use crate::geometry::{Point, Rect};
use crate::types::LabelId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashSet;

/// A label's inflated bounding box in viewport-content coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub label_id: LabelId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    /// Build an entry for `rect`, inflated by `reach` on every side.
    pub fn new(label_id: LabelId, rect: Rect, reach: f32) -> Self {
        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for v in rect.rotated_vertices() {
            min_x = min_x.min(v.x);
            min_y = min_y.min(v.y);
            max_x = max_x.max(v.x);
            max_y = max_y.max(v.y);
        }
        Self {
            label_id,
            min_x: min_x - reach,
            min_y: min_y - reach,
            max_x: max_x + reach,
            max_y: max_y + reach,
        }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.label_id == other.label_id
    }
}

/// R-tree over the current frame's labels.
///
/// Only a prefilter: callers still resolve hit priority in store order among
/// the returned candidates, so the index never changes observable ordering.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    /// Replace the index contents wholesale.
    pub fn rebuild(&mut self, entries: Vec<SpatialEntry>) {
        self.tree = RTree::bulk_load(entries);
    }

    /// Ids of all labels whose inflated bounds contain `point`.
    pub fn candidates_at(&self, point: Point) -> HashSet<LabelId> {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([point.x, point.y]))
            .map(|entry| entry.label_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
