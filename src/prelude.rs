//! Commonly used types and utilities for ease of import.

pub use crate::{
    enumerate_winning_lines, new_cell_from_face_normal, Coordinate, FaceNormal, GameEngine,
    GameStatus, Line, Piece, PlacementError, Player,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, run_session, ui::render_lattice, ui::render_status};
