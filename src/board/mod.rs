//! Board representation for tic-tac-toe

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

use crate::error::MoveError;

/// Board size (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// The two playing sides. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    X,
    O,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Glyph used in messages and logs
    #[inline]
    pub fn token(self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A board square, stored as its row-major index (0 = top-left, 8 = bottom-right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// Every cell in scan order
    pub const ALL: [Cell; TOTAL_CELLS] = [
        Cell(0), Cell(1), Cell(2),
        Cell(3), Cell(4), Cell(5),
        Cell(6), Cell(7), Cell(8),
    ];

    #[inline]
    pub fn new(index: usize) -> Option<Self> {
        (index < TOTAL_CELLS).then(|| Self(index as u8))
    }

    /// Cell at the given row and column, if both are on the board
    #[inline]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if col >= BOARD_SIZE {
            return None;
        }
        Self::try_from(row * BOARD_SIZE + col).ok()
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    #[inline]
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Single-bit mask for this cell
    #[inline]
    pub(crate) fn mask(self) -> u16 {
        1u16 << self.0
    }
}

impl TryFrom<usize> for Cell {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Cell::new(index).ok_or(MoveError::OutOfRange(index))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
