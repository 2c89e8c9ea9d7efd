//! Board structure: one occupancy set per side

use super::bitboard::Bitboard;
use super::{Cell, Side};
use crate::error::MoveError;

/// Game board. The two sets are kept disjoint by `place`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells held by X
    pub x: Bitboard,
    /// Cells held by O
    pub o: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the owner of a cell
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Side> {
        if self.x.get(cell) {
            Some(Side::X)
        } else if self.o.get(cell) {
            Some(Side::O)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        !self.occupied().get(cell)
    }

    /// Occupancy set for a side
    #[inline]
    pub fn stones(&self, side: Side) -> Bitboard {
        match side {
            Side::X => self.x,
            Side::O => self.o,
        }
    }

    /// Union of both sides
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.x.union(self.o)
    }

    /// Claim `cell` for `side`. Fails if either side already holds it.
    pub fn place(&mut self, cell: Cell, side: Side) -> Result<(), MoveError> {
        if !self.is_empty(cell) {
            return Err(MoveError::Occupied(cell));
        }
        match side {
            Side::X => self.x.set(cell),
            Side::O => self.o.set(cell),
        }
        Ok(())
    }

    /// Number of moves played so far
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.occupied().count()
    }

    /// Unclaimed cells in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL.into_iter().filter(|&c| self.is_empty(c))
    }
}
