//! Common types for the engine: placement rejections and configuration errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::coord::Coordinate;
use crate::player::Player;

/// Why a placement was turned down. The match state is untouched whenever
/// one of these is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A winner or a draw has already been reached.
    GameOver,
    /// Coordinate lies outside the lattice.
    OutOfBounds(Coordinate),
    /// Nothing occupies the cell directly below.
    Unsupported(Coordinate),
    /// Another piece already sits on the cell.
    Occupied(Coordinate),
    /// The caller asked to move for the side that is not on turn.
    WrongTurn { expected: Player, requested: Player },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::GameOver => write!(f, "Game is already over"),
            PlacementError::OutOfBounds(c) => write!(f, "Cell {} is outside the lattice", c),
            PlacementError::Unsupported(c) => write!(f, "Cell {} has nothing beneath it", c),
            PlacementError::Occupied(c) => write!(f, "Cell {} is already occupied", c),
            PlacementError::WrongTurn {
                expected,
                requested,
            } => write!(f, "It is {}'s turn, not {}'s", expected, requested),
        }
    }
}

/// A recorded history could not be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayError {
    /// Index of the first rejected placement.
    pub ply: usize,
    pub error: PlacementError,
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move {} rejected: {}", self.ply + 1, self.error)
    }
}

/// Fatal engine construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Lattice edge length of zero.
    EmptyLattice,
    /// The lattice does not fit the occupancy storage.
    LatticeTooLarge(BitBoardError),
}

impl From<BitBoardError> for ConfigError {
    fn from(err: BitBoardError) -> Self {
        ConfigError::LatticeTooLarge(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyLattice => write!(f, "Lattice edge length must be at least 1"),
            ConfigError::LatticeTooLarge(e) => write!(f, "Lattice too large: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ReplayError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}
