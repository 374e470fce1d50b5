//! Enumeration of every winning line on an `n×n×n` lattice.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::coord::Coordinate;

/// Geometric family a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum LineKind {
    /// Straight line along `x` or `z` within one layer.
    Row,
    /// Corner-to-corner diagonal of one horizontal layer.
    PlanarDiagonal,
    /// Vertical line through every layer.
    Column,
    /// Rises one layer per step along `x` or `z`.
    Staircase,
    /// Corner-to-corner diagonal of the whole lattice.
    SpaceDiagonal,
}

/// `n` ordered cells that win when a single player owns all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    kind: LineKind,
    cells: Vec<Coordinate>,
}

impl Line {
    pub fn new(kind: LineKind, cells: Vec<Coordinate>) -> Self {
        Self { kind, cells }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    fn rotated(&self, quarter_turns: u8, n: usize) -> Self {
        Self {
            kind: self.kind,
            cells: self
                .cells
                .iter()
                .map(|c| c.rotate_quarter(quarter_turns, n))
                .collect(),
        }
    }
}

/// Number of lines [`enumerate_winning_lines`] yields for edge length `n`.
pub const fn expected_line_count(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    2 * n * n + 2 * n + n * n + 4 * n + 4
}

/// Compute every winning line for an `n×n×n` lattice.
///
/// Pure and deterministic: repeated calls return the same lines in the same
/// order. `n == 0` yields no lines.
pub fn enumerate_winning_lines(n: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(expected_line_count(n));
    if n == 0 {
        return lines;
    }
    let n_i = n as i32;
    let span = 0..n_i;

    // Rows: per layer, one line along z for each x, then one along x for each z.
    for y in span.clone() {
        for x in span.clone() {
            let cells = span.clone().map(|z| Coordinate::new(x, y, z)).collect();
            lines.push(Line::new(LineKind::Row, cells));
        }
        for z in span.clone() {
            let cells = span.clone().map(|x| Coordinate::new(x, y, z)).collect();
            lines.push(Line::new(LineKind::Row, cells));
        }
    }

    // Planar diagonals: ascending for every layer, then descending.
    for y in span.clone() {
        let cells = span.clone().map(|i| Coordinate::new(i, y, i)).collect();
        lines.push(Line::new(LineKind::PlanarDiagonal, cells));
    }
    for y in span.clone() {
        let cells = span
            .clone()
            .map(|i| Coordinate::new(i, y, n_i - 1 - i))
            .collect();
        lines.push(Line::new(LineKind::PlanarDiagonal, cells));
    }

    for x in span.clone() {
        for z in span.clone() {
            let cells = span.clone().map(|y| Coordinate::new(x, y, z)).collect();
            lines.push(Line::new(LineKind::Column, cells));
        }
    }

    // Staircases climb along z (y == z) for each x; the other three
    // orientations are quarter turns about the vertical axis.
    for x in span.clone() {
        let base = Line::new(
            LineKind::Staircase,
            span.clone().map(|y| Coordinate::new(x, y, y)).collect(),
        );
        push_rotations(&mut lines, base, n);
    }

    let diagonal = Line::new(
        LineKind::SpaceDiagonal,
        span.map(|i| Coordinate::new(i, i, i)).collect(),
    );
    push_rotations(&mut lines, diagonal, n);

    lines
}

fn push_rotations(lines: &mut Vec<Line>, base: Line, n: usize) {
    let rotations: Vec<Line> = (1..4).map(|turns| base.rotated(turns, n)).collect();
    lines.push(base);
    lines.extend(rotations);
}
