//! Bitboard implementation for fast pattern matching

use super::{Cell, TOTAL_CELLS};

/// Occupancy set for one side: bit `i` is set when the side holds cell `i`.
/// Only the low 9 bits are ever used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u16,
}

impl Bitboard {
    /// No cells occupied
    pub const EMPTY: Self = Self { bits: 0 };
    /// Every cell occupied
    pub const FULL: Self = Self { bits: 0o777 };

    /// Create empty bitboard
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build from a raw mask. Bits above cell 8 are dropped.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self { bits: bits & Self::FULL.bits }
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Copy of this set with `cell` added
    #[inline]
    #[must_use]
    pub fn with(self, cell: Cell) -> Self {
        Self { bits: self.bits | cell.mask() }
    }

    /// Set a bit at cell
    #[inline]
    pub fn set(&mut self, cell: Cell) {
        self.bits |= cell.mask();
    }

    /// Check if bit is set at cell
    #[inline]
    pub fn get(self, cell: Cell) -> bool {
        self.bits & cell.mask() != 0
    }

    /// Count set bits (popcount)
    #[inline]
    pub fn count(self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[inline]
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self { bits: self.bits | other.bits }
    }

    #[inline]
    pub fn is_disjoint(self, other: Self) -> bool {
        self.bits & other.bits == 0
    }

    /// True when every cell of `pattern` is also in `self`
    #[inline]
    pub fn contains_all(self, pattern: Self) -> bool {
        self.bits & pattern.bits == pattern.bits
    }

    /// Iterate over occupied cells in ascending index order
    pub fn iter_ones(self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl FromIterator<Cell> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u16,
}

impl Iterator for BitboardIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        debug_assert!(idx < TOTAL_CELLS);
        Cell::new(idx)
    }
}
