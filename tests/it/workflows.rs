//! Full gesture workflows: pointer down, move, up against a live store.

use labelboard::{
    CursorHint, EditorFrame, HitTester, LabelStatus, LabelStore, Point, Rect, TransformEngine,
};

use crate::helpers::{TestStoreBuilder, TestViewport, frame_at, frame_without_pointer, image_rect};

#[test]
fn creation_commits_the_spanned_rect_and_activates_it() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new().build();
    let mut viewport = TestViewport::default();

    engine.handle_pointer_down(&frame_at(10.0, 10.0), &mut store, &mut viewport);
    assert!(engine.gesture().is_creating());

    engine
        .handle_pointer_up(&frame_at(50.0, 30.0), &mut store, &mut viewport)
        .unwrap();

    let labels = store.labels();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].rect, Rect::new(10.0, 10.0, 40.0, 20.0));
    assert_eq!(labels[0].status, LabelStatus::Accepted);
    assert_eq!(store.active_id(), Some(labels[0].id));
    assert!(store.first_label_created());
    assert!(engine.gesture().is_idle());
}

#[test]
fn creation_direction_does_not_matter() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new().build();
    let mut viewport = TestViewport::default();

    engine.handle_pointer_down(&frame_at(50.0, 30.0), &mut store, &mut viewport);
    engine
        .handle_pointer_up(&frame_at(10.0, 10.0), &mut store, &mut viewport)
        .unwrap();

    assert_eq!(store.labels()[0].rect, Rect::new(10.0, 10.0, 40.0, 20.0));
}

#[test]
fn creation_converts_viewport_coordinates_to_image_space() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new().build();
    let mut viewport = TestViewport::default();

    // Image shown at (100, 50), two image pixels per viewport pixel.
    let shown = Rect::new(100.0, 50.0, 500.0, 400.0);
    let frame = |x, y| EditorFrame::new(Some(Point::new(x, y)), Some(shown), 2.0);

    engine.handle_pointer_down(&frame(110.0, 55.0), &mut store, &mut viewport);
    engine
        .handle_pointer_up(&frame(160.0, 80.0), &mut store, &mut viewport)
        .unwrap();

    assert_eq!(store.labels()[0].rect, Rect::new(20.0, 10.0, 100.0, 50.0));
}

#[test]
fn creation_pointer_is_clamped_to_the_image_edge() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new().build();
    let mut viewport = TestViewport::default();

    engine.handle_pointer_down(&frame_at(900.0, 700.0), &mut store, &mut viewport);
    engine
        .handle_pointer_up(&frame_at(5000.0, 5000.0), &mut store, &mut viewport)
        .unwrap();

    let rect = store.labels()[0].rect;
    assert_eq!(rect, Rect::new(900.0, 700.0, 100.0, 100.0));
    assert!(rect.x + rect.width <= image_rect().width);
}

#[test]
fn west_resize_through_the_opposite_edge_flips_cleanly() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new()
        .accepted(Rect::new(0.0, 0.0, 100.0, 50.0))
        .active_last()
        .build();
    let mut viewport = TestViewport::default();

    // Grab the west edge anchor and push it 150 px past the east edge.
    engine.handle_pointer_down(&frame_at(0.0, 25.0), &mut store, &mut viewport);
    assert!(engine.gesture().is_resizing());

    engine
        .handle_pointer_up(&frame_at(150.0, 25.0), &mut store, &mut viewport)
        .unwrap();

    let rect = store.labels()[0].rect;
    assert_eq!(rect, Rect::new(100.0, 0.0, 50.0, 50.0));
}

#[test]
fn north_resize_moves_the_top_edge_only() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new()
        .accepted(Rect::new(100.0, 100.0, 200.0, 200.0))
        .active_last()
        .build();
    let mut viewport = TestViewport::default();

    engine.handle_pointer_down(&frame_at(200.0, 100.0), &mut store, &mut viewport);
    engine
        .handle_pointer_up(&frame_at(200.0, 60.0), &mut store, &mut viewport)
        .unwrap();

    assert_eq!(store.labels()[0].rect, Rect::new(100.0, 60.0, 200.0, 240.0));
}

#[test]
fn drag_commit_keeps_the_label_inside_the_image() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new()
        .accepted(Rect::new(900.0, 700.0, 80.0, 60.0))
        .build();
    let mut viewport = TestViewport::default();

    engine.handle_pointer_down(&frame_at(940.0, 730.0), &mut store, &mut viewport);
    assert!(engine.gesture().is_dragging());

    engine
        .handle_pointer_up(&frame_at(2000.0, 2000.0), &mut store, &mut viewport)
        .unwrap();

    let rect = store.labels()[0].rect;
    assert_eq!(rect, Rect::new(920.0, 740.0, 80.0, 60.0));
    assert!(rect.x + rect.width <= image_rect().width);
    assert!(rect.y + rect.height <= image_rect().height);
}

#[test]
fn drag_preserves_the_pointer_offset_into_the_rect() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new()
        .accepted(Rect::new(100.0, 100.0, 200.0, 200.0))
        .build();
    let mut viewport = TestViewport::default();

    // Grab 30 px inside the top-left corner, move 50 px right and down.
    engine.handle_pointer_down(&frame_at(130.0, 130.0), &mut store, &mut viewport);
    engine
        .handle_pointer_up(&frame_at(180.0, 180.0), &mut store, &mut viewport)
        .unwrap();

    assert_eq!(store.labels()[0].rect, Rect::new(150.0, 150.0, 200.0, 200.0));
}

#[test]
fn corner_drag_rotates_without_moving_the_rect() {
    let mut engine = TransformEngine::new();
    let original = Rect::new(400.0, 300.0, 200.0, 100.0);
    let mut store = TestStoreBuilder::new().accepted(original).active_last().build();
    let mut viewport = TestViewport::default();

    // North-east corner anchor.
    engine.handle_pointer_down(&frame_at(600.0, 300.0), &mut store, &mut viewport);
    assert!(engine.gesture().is_rotating());

    engine
        .handle_pointer_up(&frame_at(700.0, 500.0), &mut store, &mut viewport)
        .unwrap();

    let rect = store.labels()[0].rect;
    assert_eq!(rect.x, original.x);
    assert_eq!(rect.y, original.y);
    assert_eq!(rect.width, original.width);
    assert_eq!(rect.height, original.height);
    assert!(rect.rotation != 0.0);
}

#[test]
fn releasing_a_rotation_on_its_pivot_changes_nothing() {
    let mut engine = TransformEngine::new();
    let original = Rect::new(400.0, 300.0, 200.0, 100.0);
    let mut store = TestStoreBuilder::new().accepted(original).active_last().build();
    let mut viewport = TestViewport::default();

    let pivot = frame_at(600.0, 300.0);
    engine.handle_pointer_down(&pivot, &mut store, &mut viewport);
    engine
        .handle_pointer_up(&pivot, &mut store, &mut viewport)
        .unwrap();

    assert_eq!(store.labels()[0].rect, original);
}

#[test]
fn boundary_press_selects_then_anchors_become_grabbable() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new()
        .accepted(Rect::new(100.0, 100.0, 200.0, 200.0))
        .build();
    let mut viewport = TestViewport::default();
    let id = store.labels()[0].id;

    // First press lands on the boundary band: selection only.
    engine.handle_pointer_down(&frame_at(100.0, 200.0), &mut store, &mut viewport);
    engine
        .handle_pointer_up(&frame_at(100.0, 200.0), &mut store, &mut viewport)
        .unwrap();
    assert_eq!(store.active_id(), Some(id));
    assert_eq!(store.labels()[0].rect, Rect::new(100.0, 100.0, 200.0, 200.0));

    // Now the anchors are live; resize from the north edge.
    engine.handle_pointer_down(&frame_at(200.0, 100.0), &mut store, &mut viewport);
    assert!(engine.gesture().is_resizing());
    engine
        .handle_pointer_up(&frame_at(200.0, 150.0), &mut store, &mut viewport)
        .unwrap();
    assert_eq!(store.labels()[0].rect, Rect::new(100.0, 150.0, 200.0, 150.0));
}

#[test]
fn draft_labels_cannot_be_grabbed_by_their_anchors() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new()
        .draft(Rect::new(100.0, 100.0, 200.0, 200.0))
        .active_last()
        .build();
    let mut viewport = TestViewport::default();

    // Corner position: for a draft this is a boundary hit, not an anchor.
    engine.handle_pointer_down(&frame_at(300.0, 100.0), &mut store, &mut viewport);
    assert!(engine.gesture().is_idle());
}

#[test]
fn cancel_discards_the_gesture_and_reenables_viewport_actions() {
    let mut engine = TransformEngine::new();
    let original = Rect::new(100.0, 100.0, 200.0, 200.0);
    let mut store = TestStoreBuilder::new().accepted(original).build();
    let mut viewport = TestViewport::default();

    engine.handle_pointer_down(&frame_at(200.0, 200.0), &mut store, &mut viewport);
    assert!(viewport.disabled);

    engine.cancel(&mut viewport);

    assert!(engine.gesture().is_idle());
    assert!(!viewport.disabled);
    assert_eq!(store.labels()[0].rect, original);
}

#[test]
fn viewport_actions_follow_the_gesture_lifecycle() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new().build();
    let mut viewport = TestViewport::default();

    engine.handle_pointer_down(&frame_at(10.0, 10.0), &mut store, &mut viewport);
    assert!(viewport.disabled);

    engine
        .handle_pointer_up(&frame_at(60.0, 60.0), &mut store, &mut viewport)
        .unwrap();
    assert!(!viewport.disabled);
    assert_eq!(viewport.toggles, 2);
}

#[test]
fn created_labels_can_immediately_be_dragged() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new().build();
    let mut viewport = TestViewport::default();

    engine.handle_pointer_down(&frame_at(100.0, 100.0), &mut store, &mut viewport);
    engine
        .handle_pointer_up(&frame_at(300.0, 300.0), &mut store, &mut viewport)
        .unwrap();

    engine.handle_pointer_down(&frame_at(200.0, 200.0), &mut store, &mut viewport);
    assert!(engine.gesture().is_dragging());
    engine
        .handle_pointer_up(&frame_at(250.0, 200.0), &mut store, &mut viewport)
        .unwrap();

    assert_eq!(store.labels()[0].rect, Rect::new(150.0, 100.0, 200.0, 200.0));
}

#[test]
fn touch_sized_hover_boxes_extend_anchor_reach() {
    let mut engine = TransformEngine::with_hit_tester(HitTester::with_hover(48.0, 48.0));
    let mut store = TestStoreBuilder::new()
        .accepted(Rect::new(100.0, 100.0, 200.0, 200.0))
        .active_last()
        .build();
    let mut viewport = TestViewport::default();

    // 20 px outside the corner: out of reach for the default hover boxes,
    // inside the widened ones.
    engine.handle_pointer_down(&frame_at(320.0, 100.0), &mut store, &mut viewport);
    assert!(engine.is_in_progress());
    assert!(engine.gesture().is_rotating());

    engine
        .handle_pointer_up(&frame_at(320.0, 100.0), &mut store, &mut viewport)
        .unwrap();
    assert!(!engine.is_in_progress());
}

#[test]
fn display_rect_previews_the_drag_before_commit() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new()
        .accepted(Rect::new(100.0, 100.0, 200.0, 200.0))
        .build();
    let mut viewport = TestViewport::default();
    let id = store.labels()[0].id;

    engine.handle_pointer_down(&frame_at(130.0, 130.0), &mut store, &mut viewport);
    let preview = engine
        .display_rect(&frame_at(180.0, 180.0), &store, id)
        .unwrap();
    assert_eq!(preview, Rect::new(150.0, 150.0, 200.0, 200.0));

    // Nothing committed yet.
    assert_eq!(store.labels()[0].rect, Rect::new(100.0, 100.0, 200.0, 200.0));

    engine
        .handle_pointer_up(&frame_at(180.0, 180.0), &mut store, &mut viewport)
        .unwrap();
    assert_eq!(store.labels()[0].rect, preview);
}

#[test]
fn hover_highlight_follows_the_pointer_between_labels() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new()
        .accepted(Rect::new(100.0, 100.0, 100.0, 100.0))
        .accepted(Rect::new(500.0, 500.0, 100.0, 100.0))
        .build();
    let first = store.labels()[0].id;
    let second = store.labels()[1].id;

    engine.handle_pointer_move(&frame_at(100.0, 150.0), &mut store);
    assert_eq!(store.highlighted_id(), Some(first));

    engine.handle_pointer_move(&frame_at(500.0, 550.0), &mut store);
    assert_eq!(store.highlighted_id(), Some(second));

    // Interior hover is not a selection affordance.
    engine.handle_pointer_move(&frame_at(150.0, 150.0), &mut store);
    assert_eq!(store.highlighted_id(), None);

    engine.handle_pointer_move(&frame_without_pointer(), &mut store);
    assert_eq!(store.highlighted_id(), None);
}

#[test]
fn cursor_hints_cover_the_whole_lifecycle() {
    let mut engine = TransformEngine::new();
    let mut store = TestStoreBuilder::new()
        .accepted(Rect::new(100.0, 100.0, 200.0, 200.0))
        .active_last()
        .build();
    let mut viewport = TestViewport::default();

    assert_eq!(
        engine.cursor_hint(&frame_at(800.0, 700.0), &store),
        CursorHint::Create
    );
    assert_eq!(
        engine.cursor_hint(&frame_at(200.0, 200.0), &store),
        CursorHint::Grab
    );

    engine.handle_pointer_down(&frame_at(200.0, 200.0), &mut store, &mut viewport);
    assert_eq!(
        engine.cursor_hint(&frame_at(220.0, 220.0), &store),
        CursorHint::Grabbing
    );
    engine
        .handle_pointer_up(&frame_at(200.0, 200.0), &mut store, &mut viewport)
        .unwrap();
    assert_eq!(engine.cursor_hint(&frame_without_pointer(), &store), CursorHint::None);
}
