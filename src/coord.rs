//! Lattice coordinates and the face-normal placement affordance.

use core::fmt;

/// One cell position `(x, y, z)` in the lattice. `y` is the height axis.
///
/// Components are signed so that targets derived from collaborator input
/// (for example a face normal pointing off the lattice) can be represented
/// and then rejected by the bounds check instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` when every component lies in `[0, n)`.
    pub fn in_bounds(&self, n: usize) -> bool {
        let n = n as i64;
        [self.x, self.y, self.z]
            .iter()
            .all(|&c| (c as i64) >= 0 && (c as i64) < n)
    }

    /// The cell directly beneath this one (may be out of bounds).
    pub fn below(&self) -> Self {
        self.offset(0, -1, 0)
    }

    /// Shift by the given deltas, saturating at the `i32` range.
    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.z.saturating_add(dz),
        )
    }

    /// Rotate `quarter_turns` × 90° about the vertical axis and translate the
    /// result back into an `n`-edged lattice.
    ///
    /// One quarter turn maps `(x, y, z)` to `(z, y, -x)`; the translations
    /// `(0, 0, n-1)`, `(n-1, 0, n-1)` and `(n-1, 0, 0)` then bring a line that
    /// starts on the `x = 0` / `z = 0` edges back inside the lattice.
    pub fn rotate_quarter(&self, quarter_turns: u8, n: usize) -> Self {
        let m = n as i32 - 1;
        let Self { x, y, z } = *self;
        match quarter_turns % 4 {
            0 => *self,
            1 => Self::new(z, y, m - x),
            2 => Self::new(m - x, y, m - z),
            _ => Self::new(m - z, y, x),
        }
    }

    /// Linear index into an `n`-edged lattice, `None` when out of bounds.
    pub fn index(&self, n: usize) -> Option<usize> {
        if !self.in_bounds(n) {
            return None;
        }
        let (x, y, z) = (self.x as usize, self.y as usize, self.z as usize);
        Some((y * n + z) * n + x)
    }

    /// Inverse of [`Coordinate::index`].
    pub fn from_index(idx: usize, n: usize) -> Self {
        let x = idx % n;
        let z = (idx / n) % n;
        let y = idx / (n * n);
        Self::new(x as i32, y as i32, z as i32)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for Coordinate {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Surface normal of the clicked face of a piece, in rendering space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceNormal {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl FaceNormal {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Map the normal into a unit lattice step.
    ///
    /// The piece hit box is rotated -90° about the rendering x axis, so its
    /// local `z` is lattice up and its local `y` is lattice `-z`. Each
    /// component is clamped to `-1..=1`; NaN maps to 0.
    pub fn lattice_step(&self) -> (i32, i32, i32) {
        let step = |v: f32| libm::roundf(v).clamp(-1.0, 1.0) as i32;
        (step(self.x), step(self.z), -step(self.y))
    }
}

/// Target cell for a click on `existing`'s face with the given normal.
///
/// Face-normal policy: the target is the neighbour across the clicked face.
/// Clicking the top face yields the cell directly above; side faces yield a
/// horizontal neighbour, which only becomes a legal placement if it is
/// supported.
pub fn new_cell_from_face_normal(existing: Coordinate, normal: FaceNormal) -> Coordinate {
    let (dx, dy, dz) = normal.lattice_step();
    existing.offset(dx, dy, dz)
}
