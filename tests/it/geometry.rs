//! Cross-module geometry properties exercised with randomized input.

use labelboard::anchors::{self, AnchorKind, Direction};
use labelboard::{LabelStatus, LabeledRect, Line, Point, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIRECTIONS: [Direction; 8] = [
    Direction::N,
    Direction::S,
    Direction::E,
    Direction::W,
    Direction::NE,
    Direction::NW,
    Direction::SE,
    Direction::SW,
];

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x1abe1b0a)
}

#[test]
fn resize_never_produces_negative_dimensions() {
    let mut rng = rng();
    for _ in 0..2000 {
        let rect = Rect::new(
            rng.gen_range(-200.0..200.0),
            rng.gen_range(-200.0..200.0),
            rng.gen_range(0.0..300.0),
            rng.gen_range(0.0..300.0),
        );
        let delta = Point::new(
            rng.gen_range(-600.0..600.0),
            rng.gen_range(-600.0..600.0),
        );
        let direction = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];

        let out = direction.resize(rect, delta);
        assert!(
            out.width >= 0.0 && out.height >= 0.0,
            "{direction:?} on {rect:?} with {delta:?} gave {out:?}"
        );
    }
}

#[test]
fn edge_anchors_bisect_adjacent_corner_anchors_at_any_rotation() {
    let mut rng = rng();
    for _ in 0..200 {
        let rect = Rect::new(
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-100.0..100.0),
            rng.gen_range(1.0..200.0),
            rng.gen_range(1.0..200.0),
        )
        .with_rotation(rng.gen_range(-10.0..10.0));

        let a = anchors::map_to_anchors(rect);
        // Corners sit at even indices, the bisecting edge follows each.
        for i in (0..8).step_by(2) {
            assert_eq!(a[i].kind, AnchorKind::Corner);
            assert_eq!(a[i + 1].kind, AnchorKind::Edge);
            let mid = Line::new(a[i].position, a[(i + 2) % 8].position).midpoint();
            assert!((a[i + 1].position.x - mid.x).abs() < 1e-3);
            assert!((a[i + 1].position.y - mid.y).abs() < 1e-3);
        }
    }
}

#[test]
fn corner_anchors_match_rotated_vertices_at_any_rotation() {
    let mut rng = rng();
    for _ in 0..200 {
        let rect = Rect::new(0.0, 0.0, rng.gen_range(1.0..300.0), rng.gen_range(1.0..300.0))
            .with_rotation(rng.gen_range(-10.0..10.0));
        let a = anchors::map_to_anchors(rect);
        let v = rect.rotated_vertices();
        for (anchor, vertex) in a.iter().step_by(2).zip(v.iter()) {
            assert_eq!(anchor.position, *vertex);
        }
    }
}

#[test]
fn labels_survive_a_serde_round_trip() {
    let label = LabeledRect::new(Rect::new(12.5, -3.0, 140.0, 80.0).with_rotation(1.25))
        .with_status(LabelStatus::Accepted);

    let json = serde_json::to_string(&label).unwrap();
    let back: LabeledRect = serde_json::from_str(&json).unwrap();
    assert_eq!(back, label);
}

#[test]
fn rect_rotation_defaults_to_zero_when_absent() {
    // Labels persisted before rotation existed carry no rotation field.
    let rect: Rect = serde_json::from_str(r#"{"x":1.0,"y":2.0,"width":3.0,"height":4.0}"#).unwrap();
    assert_eq!(rect, Rect::new(1.0, 2.0, 3.0, 4.0));
}
