//! Shape tests - rotation, translation, re-anchoring and identity rules

use std::rc::Rc;

use tetris_shapes::core::geometry::offsets;
use tetris_shapes::core::Shape;
use tetris_shapes::types::{Orientation, PieceKind};

fn every_shape_at(column: i32, row: i32) -> Vec<Shape> {
    PieceKind::ALL
        .iter()
        .flat_map(|&kind| {
            Orientation::ALL
                .iter()
                .map(move |&o| Shape::new(kind, column, row, o))
        })
        .collect()
}

fn assert_aligned(shape: &Shape) {
    let (col, row) = shape.pivot();
    let expected: Vec<(i32, i32)> = offsets(shape.kind(), shape.orientation())
        .iter()
        .map(|&(dc, dr)| (col + dc, row + dr))
        .collect();
    assert_eq!(shape.block_positions().as_slice(), expected.as_slice(), "{}", shape);
    assert!(shape.is_aligned());
}

// ============== Construction ==============

#[test]
fn test_construction_places_blocks_from_table() {
    for shape in every_shape_at(-3, 7) {
        assert_eq!(shape.blocks().len(), 4);
        assert!(shape.blocks().iter().all(|b| b.color() == shape.kind().color()));
        assert_aligned(&shape);
    }
}

#[test]
fn test_random_orientation_constructor_keeps_kind_and_pivot() {
    let shape = Shape::with_random_orientation(PieceKind::J, 2, 9);
    assert_eq!(shape.kind(), PieceKind::J);
    assert_eq!(shape.pivot(), (2, 9));
    assert_aligned(&shape);
}

// ============== Line Piece Scenario ==============

#[test]
fn test_line_rotate_then_lower() {
    let mut shape = Shape::new(PieceKind::I, 3, 0, Orientation::Zero);
    assert_eq!(
        shape.block_positions().as_slice(),
        &[(3, 0), (4, 0), (5, 0), (6, 0)]
    );

    shape.rotate_clockwise();
    assert_eq!(shape.pivot(), (3, 0));
    assert_aligned(&shape);

    let before = shape.block_positions();
    shape.lower_by_one_row();
    assert_eq!(shape.pivot(), (3, 1));
    for (old, new) in before.iter().zip(shape.block_positions().iter()) {
        assert_eq!(new.0, old.0);
        assert_eq!(new.1, old.1 + 1);
    }
}

// ============== Rotation ==============

#[test]
fn test_four_clockwise_rotations_restore_everything() {
    for mut shape in every_shape_at(5, 5) {
        let orientation = shape.orientation();
        let cells = shape.block_positions();

        for _ in 0..4 {
            shape.rotate_clockwise();
            assert_eq!(shape.pivot(), (5, 5));
            assert_aligned(&shape);
        }

        assert_eq!(shape.orientation(), orientation);
        assert_eq!(shape.block_positions(), cells);
    }
}

#[test]
fn test_four_anticlockwise_rotations_restore_everything() {
    for mut shape in every_shape_at(0, 0) {
        let cells = shape.block_positions();
        for _ in 0..4 {
            shape.rotate_anticlockwise();
        }
        assert_eq!(shape.block_positions(), cells);
    }
}

#[test]
fn test_opposite_rotations_cancel() {
    for mut shape in every_shape_at(1, -4) {
        let orientation = shape.orientation();
        let cells = shape.block_positions();

        shape.rotate_clockwise();
        shape.rotate_anticlockwise();
        assert_eq!(shape.orientation(), orientation);
        assert_eq!(shape.block_positions(), cells);

        shape.rotate_anticlockwise();
        shape.rotate_clockwise();
        assert_eq!(shape.orientation(), orientation);
        assert_eq!(shape.block_positions(), cells);
    }
}

#[test]
fn test_rotation_follows_orientation_cycle() {
    let mut shape = Shape::new(PieceKind::T, 0, 0, Orientation::TwoSeventy);
    shape.rotate_clockwise();
    assert_eq!(shape.orientation(), Orientation::Zero);
    shape.rotate_anticlockwise();
    shape.rotate_anticlockwise();
    assert_eq!(shape.orientation(), Orientation::OneEighty);
}

// ============== Translation ==============

#[test]
fn test_shift_and_inverse_shift_restore() {
    let deltas = [(0, 0), (1, 0), (-1, 0), (0, 1), (7, -3), (-20, 15)];
    for mut shape in every_shape_at(4, 0) {
        let cells = shape.block_positions();
        for &(dc, dr) in &deltas {
            shape.shift_by(dc, dr);
            assert_eq!(shape.pivot(), (4 + dc, dr));
            assert_aligned(&shape);
            shape.shift_by(-dc, -dr);
            assert_eq!(shape.pivot(), (4, 0));
            assert_eq!(shape.block_positions(), cells);
        }
    }
}

#[test]
fn test_unit_moves() {
    let mut shape = Shape::new(PieceKind::Z, 4, 0, Orientation::Zero);

    shape.lower_by_one_row();
    assert_eq!(shape.pivot(), (4, 1));
    shape.raise_by_one_row();
    assert_eq!(shape.pivot(), (4, 0));
    shape.shift_right_by_one_column();
    assert_eq!(shape.pivot(), (5, 0));
    shape.shift_left_by_one_column();
    shape.shift_left_by_one_column();
    assert_eq!(shape.pivot(), (3, 0));
    assert_aligned(&shape);
}

#[test]
fn test_move_to_keeps_orientation() {
    let mut shape = Shape::new(PieceKind::L, 0, 0, Orientation::OneEighty);
    shape.move_to(8, 12);
    assert_eq!(shape.pivot(), (8, 12));
    assert_eq!(shape.orientation(), Orientation::OneEighty);
    assert_aligned(&shape);
}

// ============== External Mutation ==============

#[test]
fn test_external_writes_show_through_and_move_to_repairs() {
    let mut shape = Shape::new(PieceKind::S, 2, 2, Orientation::Zero);
    let handle = Rc::clone(&shape.blocks()[0]);

    handle.set_position(40, 40);
    assert_eq!(shape.blocks()[0].position(), (40, 40));
    assert!(!shape.is_aligned());

    // Translation carries the stray block along rather than repairing it.
    shape.shift_by(1, 1);
    assert_eq!(handle.position(), (41, 41));
    assert!(!shape.is_aligned());

    shape.move_to(3, 3);
    assert_aligned(&shape);
    assert_eq!(handle.position(), (4, 3));
}

#[test]
fn test_rejected_rotation_reverts() {
    // Simulate a board whose left wall is column 0.
    let in_bounds = |shape: &Shape| shape.block_positions().iter().all(|&(col, _)| col >= 0);

    let mut shape = Shape::new(PieceKind::I, -1, 5, Orientation::Ninety);
    assert!(in_bounds(&shape));
    let anchor = shape.pivot();
    let cells = shape.block_positions();

    shape.rotate_clockwise();
    assert!(!in_bounds(&shape));
    shape.rotate_anticlockwise();
    shape.move_to(anchor.0, anchor.1);

    assert_eq!(shape.orientation(), Orientation::Ninety);
    assert_eq!(shape.block_positions(), cells);
}

// ============== Bottom Blocks ==============

#[test]
fn test_bottom_blocks_track_current_orientation() {
    let mut shape = Shape::new(PieceKind::I, 0, 0, Orientation::Zero);
    assert_eq!(shape.bottom_blocks().len(), 4);

    shape.rotate_clockwise();
    let bottom = shape.bottom_blocks();
    assert_eq!(bottom.len(), 1);
    assert_eq!(bottom[0].position(), (2, 2));
    assert!(Rc::ptr_eq(&bottom[0], &shape.blocks()[3]));
}

#[test]
fn test_bottom_blocks_have_nothing_below_in_shape() {
    for shape in every_shape_at(0, 0) {
        let cells = shape.block_positions();
        for block in shape.bottom_blocks() {
            let (col, row) = block.position();
            assert!(
                !cells.iter().any(|&(c, r)| c == col && r > row),
                "{} has a block below bottom block {}",
                shape,
                block
            );
        }
    }
}

// ============== Equality and Identity ==============

#[test]
fn test_equality_is_by_pivot_only() {
    let a = Shape::new(PieceKind::T, 3, 3, Orientation::Zero);
    let b = Shape::new(PieceKind::T, 3, 3, Orientation::Ninety);
    let c = Shape::new(PieceKind::O, 3, 3, Orientation::Zero);
    let d = Shape::new(PieceKind::T, 3, 4, Orientation::Zero);

    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_ne!(a, d);
}

#[test]
fn test_identity_follows_block_contents() {
    let a = Shape::new(PieceKind::T, 3, 3, Orientation::Zero);
    let same = Shape::new(PieceKind::T, 3, 3, Orientation::Zero);
    let turned = Shape::new(PieceKind::T, 3, 3, Orientation::Ninety);

    assert_eq!(a.identity(), same.identity());
    // Equal by pivot, yet the blocks differ.
    assert_eq!(a, turned);
    assert_ne!(a.identity(), turned.identity());
}

#[test]
fn test_identity_is_order_independent_combination() {
    let shape = Shape::new(PieceKind::J, 0, 0, Orientation::Zero);
    let expected = shape
        .blocks()
        .iter()
        .rev()
        .fold(0u64, |acc, b| acc ^ b.identity());
    assert_eq!(shape.identity(), expected);
}
