use cube_four::{new_cell_from_face_normal, Coordinate, FaceNormal, GameEngine, Player};

#[test]
fn test_top_face_targets_cell_above() {
    // the hit box's local +z faces lattice up
    let target = new_cell_from_face_normal(Coordinate::new(1, 0, 2), FaceNormal::new(0.0, 0.0, 1.0));
    assert_eq!(target, Coordinate::new(1, 1, 2));
}

#[test]
fn test_side_faces_target_horizontal_neighbours() {
    let origin = Coordinate::new(1, 1, 1);
    assert_eq!(new_cell_from_face_normal(origin, FaceNormal::new(1.0, 0.0, 0.0)), Coordinate::new(2, 1, 1));
    assert_eq!(new_cell_from_face_normal(origin, FaceNormal::new(-1.0, 0.0, 0.0)), Coordinate::new(0, 1, 1));
    assert_eq!(new_cell_from_face_normal(origin, FaceNormal::new(0.0, 1.0, 0.0)), Coordinate::new(1, 1, 0));
    assert_eq!(new_cell_from_face_normal(origin, FaceNormal::new(0.0, -1.0, 0.0)), Coordinate::new(1, 1, 2));
    assert_eq!(new_cell_from_face_normal(origin, FaceNormal::new(0.0, 0.0, -1.0)), Coordinate::new(1, 0, 1));
}

#[test]
fn test_normal_is_rounded() {
    let target = new_cell_from_face_normal(Coordinate::new(0, 0, 0), FaceNormal::new(0.02, -0.01, 0.9999));
    assert_eq!(target, Coordinate::new(0, 1, 0));
}

#[test]
fn test_face_placement_goes_through_legality_gate() {
    let mut engine = GameEngine::new();
    assert!(engine.attempt_placement(Coordinate::new(0, 0, 0), None));

    // side face of a ground piece: ground neighbour is supported trivially
    assert!(engine.attempt_face_placement(Coordinate::new(0, 0, 0), FaceNormal::new(1.0, 0.0, 0.0), None));
    assert_eq!(engine.piece_at(Coordinate::new(1, 0, 0)), Some(Player::Yellow));

    // top face stacks
    assert!(engine.attempt_face_placement(Coordinate::new(1, 0, 0), FaceNormal::new(0.0, 0.0, 1.0), None));
    assert_eq!(engine.piece_at(Coordinate::new(1, 1, 0)), Some(Player::Red));

    // side face of a raised piece points at an unsupported cell
    assert!(!engine.attempt_face_placement(Coordinate::new(1, 1, 0), FaceNormal::new(1.0, 0.0, 0.0), None));
    // off the lattice
    assert!(!engine.attempt_face_placement(Coordinate::new(0, 0, 0), FaceNormal::new(-1.0, 0.0, 0.0), None));
    assert_eq!(engine.move_count(), 3);
}

#[test]
fn test_large_normals_step_one_cell() {
    let origin = Coordinate::new(1, 1, 1);
    assert_eq!(new_cell_from_face_normal(origin, FaceNormal::new(1e9, 0.0, 0.0)), Coordinate::new(2, 1, 1));
    assert_eq!(new_cell_from_face_normal(origin, FaceNormal::new(0.0, 0.0, -3.0)), Coordinate::new(1, 0, 1));
    assert_eq!(FaceNormal::new(f32::INFINITY, f32::NEG_INFINITY, f32::NAN).lattice_step(), (1, 0, 1));
}

#[test]
fn test_infinite_normal_on_placed_piece_is_rejected() {
    let mut engine = GameEngine::new();
    assert!(engine.attempt_placement(Coordinate::new(3, 0, 0), None));
    assert!(!engine.attempt_face_placement(Coordinate::new(3, 0, 0), FaceNormal::new(f32::INFINITY, 0.0, 0.0), None));
    assert_eq!(engine.move_count(), 1);
    assert_eq!(engine.current_turn(), Player::Yellow);
}

#[test]
fn test_offset_saturates_at_coordinate_limits() {
    let target = new_cell_from_face_normal(Coordinate::new(i32::MAX, 0, 0), FaceNormal::new(1.0, 0.0, 0.0));
    assert_eq!(target, Coordinate::new(i32::MAX, 0, 0));
    assert!(!target.in_bounds(4));
    assert_eq!(Coordinate::new(0, i32::MIN, 0).below(), Coordinate::new(0, i32::MIN, 0));
}
