use crate::lines::expected_line_count;

/// Edge length of the standard lattice.
pub const LATTICE_SIZE: usize = 4;
/// Cells in the standard lattice; also the longest possible match.
pub const CELL_COUNT: usize = LATTICE_SIZE * LATTICE_SIZE * LATTICE_SIZE;
/// Winning lines on the standard lattice.
pub const WINNING_LINE_COUNT: usize = expected_line_count(LATTICE_SIZE);

/// Occupancy storage; wide enough for lattices up to 4×4×4.
pub type Occupancy = u64;
