//! A fixed-size lattice bitboard using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Lattices are
//! represented as an `N×N×N` grid packed into an unsigned integer `T`, one
//! bit per cell at index `(y * N + z) * N + x`, so a 4×4×4 lattice fills a
//! `u64` exactly.

use core::ops::{BitAnd, BitOr, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coord::Coordinate;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested lattice size N³ exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Coordinate lies outside `[0, N)³`.
    IndexOutOfBounds(Coordinate),
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N^3={} exceeds T::BITS={}", n * n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds(c) => write!(f, "IndexOutOfBounds: {}", c),
        }
    }
}

/// A fixed-size N×N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the lattice (`N³`).
    pub const CELLS: usize = N * N * N;

    #[inline]
    fn mask() -> T {
        if Self::CELLS >= mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Create a new empty bitboard (all bits cleared) without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N³ > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(BitBoard { bits: T::zero() })
        }
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if every bit set in `other` is also set in `self`.
    #[inline]
    pub fn contains_all(&self, other: &Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Gets the bit at `c`.
    pub fn get(&self, c: Coordinate) -> Result<bool, BitBoardError> {
        let idx = Self::index(c)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at `c` to 1.
    pub fn set(&mut self, c: Coordinate) -> Result<(), BitBoardError> {
        let idx = Self::index(c)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at `c` to 0.
    pub fn clear(&mut self, c: Coordinate) -> Result<(), BitBoardError> {
        let idx = Self::index(c)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Toggles the bit at `c`.
    pub fn toggle(&mut self, c: Coordinate) -> Result<(), BitBoardError> {
        let idx = Self::index(c)?;
        self.bits = self.bits ^ (T::one() << idx);
        Ok(())
    }

    /// Sets all lattice bits to `1`.
    #[inline]
    pub fn fill(&mut self) {
        self.bits = Self::mask();
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn index(c: Coordinate) -> Result<usize, BitBoardError> {
        if Self::CELLS > mem::size_of::<T>() * 8 {
            return Err(BitBoardError::SizeTooLarge {
                n: N,
                capacity: mem::size_of::<T>() * 8,
            });
        }
        c.index(N).ok_or(BitBoardError::IndexOutOfBounds(c))
    }

    /// Consumes the board and returns the raw integer.
    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    /// Creates a bitboard from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Creates a bitboard from an iterator over coordinates.
    #[inline]
    pub fn from_iter<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut board = Self::new();
        for c in iter {
            board.set(c)?;
        }
        Ok(board)
    }

    /// Iterator over the occupied cells, in index order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, N> {
        SetBits {
            board: self,
            idx: 0,
        }
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        ((self.bits >> idx) & T::one()) != T::zero()
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        write!(f, "{}", self)
    }
}

/// Layers are printed top-down, each as an `N×N` grid with `x` across and
/// `z` down.
impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..N).rev() {
            writeln!(f, "y={}", y)?;
            for z in 0..N {
                for x in 0..N {
                    let bit = if self.bit((y * N + z) * N + x) { '■' } else { '□' };
                    write!(f, "{} ", bit)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for SetBits<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let limit = BitBoard::<T, N>::CELLS.min(mem::size_of::<T>() * 8);
        while self.idx < limit {
            let idx = self.idx;
            self.idx += 1;
            if self.board.bit(idx) {
                return Some(Coordinate::from_index(idx, N));
            }
        }
        None
    }
}

/// Bitwise AND for combining two bitboards.
impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.into_raw() & rhs.into_raw())
    }
}

/// Bitwise OR for combining two bitboards.
impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.into_raw() | rhs.into_raw())
    }
}

/// Bitwise NOT for inverting a bitboard (within lattice bounds).
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}
