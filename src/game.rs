#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::{debug, info, trace};

use crate::{
    bitboard::BitBoard,
    common::{ConfigError, PlacementError, ReplayError},
    config::{Occupancy, LATTICE_SIZE},
    coord::{new_cell_from_face_normal, Coordinate, FaceNormal},
    lines::{enumerate_winning_lines, Line},
    player::Player,
};

/// Bitboard type used for occupancy tracking.
pub type BB<const N: usize> = BitBoard<Occupancy, N>;

/// A placed piece. Never mutated once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub coord: Coordinate,
    pub player: Player,
}

/// Current status of a match, always derived from the placed pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    Playing,
    RedWon,
    YellowWon,
    Draw,
}

impl GameStatus {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::RedWon => Some(Player::Red),
            GameStatus::YellowWon => Some(Player::Yellow),
            GameStatus::Playing | GameStatus::Draw => None,
        }
    }

    /// `true` for every status that refuses further placements.
    pub fn is_over(self) -> bool {
        self != GameStatus::Playing
    }
}

/// Read-only view of a match handed to the rendering side.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Pieces in placement order.
    pub pieces: Vec<Piece>,
    /// Side on turn; only meaningful while `status` is `Playing`.
    pub turn: Player,
    pub status: GameStatus,
    /// Every line owned by the winner; empty unless someone has won.
    pub winning_lines: Vec<Line>,
}

/// Match state for an `N×N×N` lattice plus the lines that decide it.
///
/// The ordered piece list is the canonical state. Turn and status are
/// recomputed from it on every query; the per-player occupancy boards are an
/// index over the same list and change only alongside it.
#[derive(Debug, Clone)]
pub struct GameEngine<const N: usize = LATTICE_SIZE> {
    lines: Vec<Line>,
    line_masks: Vec<BB<N>>,
    pieces: Vec<Piece>,
    occupied: [BB<N>; 2],
}

impl GameEngine<LATTICE_SIZE> {
    /// Create an engine for the standard 4×4×4 lattice with no pieces placed.
    pub fn new() -> Self {
        Self::build()
    }

    /// Rebuild a standard match by replaying `moves` in order.
    pub fn from_history(moves: &[Coordinate]) -> Result<Self, ReplayError> {
        let mut engine = Self::new();
        engine.replay(moves)?;
        Ok(engine)
    }
}

impl Default for GameEngine<LATTICE_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> GameEngine<N> {
    /// Create an engine for lattice size `N`, rejecting sizes the engine
    /// cannot represent.
    pub fn try_new() -> Result<Self, ConfigError> {
        if N == 0 {
            return Err(ConfigError::EmptyLattice);
        }
        BB::<N>::try_new()?;
        Ok(Self::build())
    }

    fn build() -> Self {
        let lines = enumerate_winning_lines(N);
        let line_masks = lines
            .iter()
            .map(|line| {
                let mask = BB::<N>::from_iter(line.cells().iter().copied());
                debug_assert!(mask.is_ok(), "winning line leaves the lattice: {:?}", line);
                mask.unwrap_or_default()
            })
            .collect();
        Self {
            lines,
            line_masks,
            pieces: Vec::new(),
            occupied: [BB::<N>::new(); 2],
        }
    }

    /// Lattice edge length.
    pub const fn size(&self) -> usize {
        N
    }

    /// Every winning line of this lattice.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Pieces in placement order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Most recent placement, for "last move" highlighting.
    pub fn last_piece(&self) -> Option<Piece> {
        self.pieces.last().copied()
    }

    pub fn move_count(&self) -> usize {
        self.pieces.len()
    }

    /// Cells owned by `player`.
    pub fn occupancy(&self, player: Player) -> BB<N> {
        self.occupied[player.idx()]
    }

    fn all_occupied(&self) -> BB<N> {
        self.occupied[0] | self.occupied[1]
    }

    pub fn is_occupied(&self, c: Coordinate) -> bool {
        self.all_occupied().get(c).unwrap_or(false)
    }

    /// Owner of the piece on `c`, if any.
    pub fn piece_at(&self, c: Coordinate) -> Option<Player> {
        [Player::Red, Player::Yellow]
            .into_iter()
            .find(|p| self.occupied[p.idx()].get(c).unwrap_or(false))
    }

    /// Side to move: Red after an even number of placements.
    pub fn current_turn(&self) -> Player {
        Player::for_ply(self.pieces.len())
    }

    fn owns_line(&self, player: Player) -> bool {
        let mine = self.occupied[player.idx()];
        self.line_masks.iter().any(|mask| mine.contains_all(mask))
    }

    /// Evaluate the match from scratch. Red is checked first, so a position
    /// where both sides own a line reports `RedWon`.
    pub fn compute_status(&self) -> GameStatus {
        if self.owns_line(Player::Red) {
            GameStatus::RedWon
        } else if self.owns_line(Player::Yellow) {
            GameStatus::YellowWon
        } else if self.pieces.len() >= BB::<N>::CELLS {
            GameStatus::Draw
        } else {
            GameStatus::Playing
        }
    }

    /// Every line wholly owned by the winner named in `status`.
    pub fn winning_lines_for(&self, status: GameStatus) -> Vec<&Line> {
        let Some(winner) = status.winner() else {
            return Vec::new();
        };
        let mine = self.occupied[winner.idx()];
        self.lines
            .iter()
            .zip(&self.line_masks)
            .filter(|(_, mask)| mine.contains_all(mask))
            .map(|(line, _)| line)
            .collect()
    }

    /// Union of the cells of every winning line, for highlight emphasis.
    pub fn winning_cells(&self, status: GameStatus) -> BB<N> {
        let Some(winner) = status.winner() else {
            return BB::<N>::new();
        };
        let mine = self.occupied[winner.idx()];
        self.line_masks
            .iter()
            .filter(|mask| mine.contains_all(mask))
            .fold(BB::<N>::new(), |acc, &mask| acc | mask)
    }

    /// The single legality gate. Checks run in order: game still playing,
    /// coordinate in bounds, cell supported, cell free, and finally that
    /// `requested` (when given) is the side on turn. On any failure nothing
    /// changes.
    pub fn try_place(
        &mut self,
        coord: Coordinate,
        requested: Option<Player>,
    ) -> Result<Piece, PlacementError> {
        if self.compute_status().is_over() {
            return Err(PlacementError::GameOver);
        }
        if !coord.in_bounds(N) {
            return Err(PlacementError::OutOfBounds(coord));
        }
        if coord.y > 0 && !self.is_occupied(coord.below()) {
            return Err(PlacementError::Unsupported(coord));
        }
        if self.is_occupied(coord) {
            return Err(PlacementError::Occupied(coord));
        }
        let player = self.current_turn();
        if let Some(requested) = requested {
            if requested != player {
                return Err(PlacementError::WrongTurn {
                    expected: player,
                    requested,
                });
            }
        }

        self.occupied[player.idx()]
            .set(coord)
            .map_err(|_| PlacementError::OutOfBounds(coord))?;
        let piece = Piece { coord, player };
        self.pieces.push(piece);
        Ok(piece)
    }

    /// Place a piece for the side on turn, returning whether it was
    /// accepted. Rejections are logged and otherwise silent.
    pub fn attempt_placement(&mut self, coord: Coordinate, requested: Option<Player>) -> bool {
        match self.try_place(coord, requested) {
            Ok(piece) => {
                trace!("{} placed at {}", piece.player, piece.coord);
                self.log_outcome();
                true
            }
            Err(e) => {
                debug!("placement at {} rejected: {}", coord, e);
                false
            }
        }
    }

    /// Place on the neighbour across the clicked face of `existing`.
    pub fn attempt_face_placement(
        &mut self,
        existing: Coordinate,
        normal: FaceNormal,
        requested: Option<Player>,
    ) -> bool {
        self.attempt_placement(new_cell_from_face_normal(existing, normal), requested)
    }

    fn log_outcome(&self) {
        match self.compute_status() {
            GameStatus::Playing => {}
            GameStatus::Draw => info!("match drawn after {} moves", self.pieces.len()),
            status => {
                if let Some(winner) = status.winner() {
                    info!("{} wins after {} moves", winner, self.pieces.len());
                }
            }
        }
    }

    /// Lowest free cell of column `(x, z)`, `None` if the column is full or
    /// outside the lattice.
    pub fn lowest_free_cell(&self, x: i32, z: i32) -> Option<Coordinate> {
        (0..N as i32)
            .map(|y| Coordinate::new(x, y, z))
            .take_while(|c| c.in_bounds(N))
            .find(|&c| !self.is_occupied(c))
    }

    /// Drop a piece for the side on turn into column `(x, z)`.
    pub fn drop_in_column(&mut self, x: i32, z: i32) -> Result<Piece, PlacementError> {
        if self.compute_status().is_over() {
            return Err(PlacementError::GameOver);
        }
        let base = Coordinate::new(x, 0, z);
        if !base.in_bounds(N) {
            return Err(PlacementError::OutOfBounds(base));
        }
        match self.lowest_free_cell(x, z) {
            Some(target) => {
                let piece = self.try_place(target, None)?;
                trace!("{} dropped into column ({}, {})", piece.player, x, z);
                self.log_outcome();
                Ok(piece)
            }
            None => Err(PlacementError::Occupied(Coordinate::new(x, N as i32 - 1, z))),
        }
    }

    /// Every cell a placement would currently be accepted on.
    pub fn legal_cells(&self) -> Vec<Coordinate> {
        if self.compute_status().is_over() {
            return Vec::new();
        }
        let n = N as i32;
        (0..n)
            .flat_map(|x| (0..n).map(move |z| (x, z)))
            .filter_map(|(x, z)| self.lowest_free_cell(x, z))
            .collect()
    }

    /// Remove the most recent piece, if any. Status is recomputed afterwards,
    /// so a finished match becomes playable again.
    pub fn undo_last(&mut self) -> Option<Piece> {
        let piece = self.pieces.pop()?;
        let cleared = self.occupied[piece.player.idx()].clear(piece.coord);
        debug_assert!(cleared.is_ok(), "placed piece outside the lattice: {}", piece.coord);
        debug!("undid {} at {}", piece.player, piece.coord);
        Some(piece)
    }

    /// Clear the lattice and hand the move back to Red.
    pub fn reset(&mut self) {
        self.pieces.clear();
        for board in self.occupied.iter_mut() {
            board.clear_all();
        }
        info!("new match");
    }

    /// Apply `moves` in order. Either every move is accepted or the engine
    /// is left as it was.
    pub fn replay(&mut self, moves: &[Coordinate]) -> Result<(), ReplayError> {
        let mut next = self.clone();
        for (ply, &coord) in moves.iter().enumerate() {
            next.try_place(coord, None)
                .map_err(|error| ReplayError { ply, error })?;
        }
        *self = next;
        Ok(())
    }

    /// Snapshot of the derived state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let status = self.compute_status();
        Snapshot {
            pieces: self.pieces.clone(),
            turn: self.current_turn(),
            status,
            winning_lines: self
                .winning_lines_for(status)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_line(engine: &mut GameEngine, player: Player, cells: &[Coordinate]) {
        for &c in cells {
            engine.occupied[player.idx()].set(c).unwrap();
            engine.pieces.push(Piece { coord: c, player });
        }
    }

    #[test]
    fn test_red_takes_precedence_when_both_own_a_line() {
        let mut engine = GameEngine::new();
        let red: Vec<_> = (0..4).map(|x| Coordinate::new(x, 0, 0)).collect();
        let yellow: Vec<_> = (0..4).map(|x| Coordinate::new(x, 0, 3)).collect();
        fill_line(&mut engine, Player::Yellow, &yellow);
        fill_line(&mut engine, Player::Red, &red);

        let status = engine.compute_status();
        assert_eq!(status, GameStatus::RedWon);
        assert_eq!(engine.winning_lines_for(status).len(), 1);
        assert_eq!(engine.winning_lines_for(GameStatus::YellowWon).len(), 1);
    }

    #[test]
    fn test_line_masks_match_lines() {
        let engine = GameEngine::new();
        assert_eq!(engine.line_masks.len(), engine.lines.len());
        for (line, mask) in engine.lines.iter().zip(&engine.line_masks) {
            let cells: Vec<_> = mask.iter_set_bits().collect();
            let mut expected = line.cells().to_vec();
            expected.sort_by_key(|c| c.index(4));
            assert_eq!(cells, expected);
        }
    }

    #[test]
    fn test_line_masks_on_smaller_lattice() {
        let engine = GameEngine::<3>::try_new().unwrap();
        assert_eq!(engine.line_masks.len(), crate::lines::expected_line_count(3));
        assert!(engine.line_masks.iter().all(|m| m.count_ones() == 3));
    }
}
