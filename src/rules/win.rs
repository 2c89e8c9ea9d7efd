//! Win and draw detection
//!
//! Win tests always take a single side's occupancy set. Passing the union
//! of both sides would match lines of mixed ownership.

use crate::board::{Bitboard, Board, Cell, Side};

/// The eight three-in-a-row lines, as octal masks (one digit per row,
/// least significant digit = top row).
pub const WIN_PATTERNS: [Bitboard; 8] = [
    Bitboard::from_bits(0o007), // Top row
    Bitboard::from_bits(0o070), // Middle row
    Bitboard::from_bits(0o700), // Bottom row
    Bitboard::from_bits(0o111), // Left column
    Bitboard::from_bits(0o222), // Middle column
    Bitboard::from_bits(0o444), // Right column
    Bitboard::from_bits(0o421), // Diagonal 0-4-8
    Bitboard::from_bits(0o124), // Diagonal 2-4-6
];

/// Result of a game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win(Side),
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// Check if `occupancy` contains any win pattern
#[inline]
pub fn is_win(occupancy: Bitboard) -> bool {
    WIN_PATTERNS.iter().any(|&p| occupancy.contains_all(p))
}

/// Cells of the first completed line, in table order
pub fn winning_line(occupancy: Bitboard) -> Option<[Cell; 3]> {
    let pattern = WIN_PATTERNS.iter().find(|&&p| occupancy.contains_all(p))?;
    let mut cells = pattern.iter_ones();
    Some([cells.next()?, cells.next()?, cells.next()?])
}

/// True when the two sides together hold all nine cells
#[inline]
pub fn is_full(a: Bitboard, b: Bitboard) -> bool {
    a.union(b).count() == Bitboard::FULL.count()
}

/// Evaluate the board right after `last_mover` played.
///
/// The mover's win is checked before the full-board test, since the
/// winning move can also fill the last cell.
pub fn outcome(board: &Board, last_mover: Side) -> Outcome {
    if is_win(board.stones(last_mover)) {
        Outcome::Win(last_mover)
    } else if is_full(board.x, board.o) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(indices: &[usize]) -> Bitboard {
        indices.iter().filter_map(|&i| Cell::new(i)).collect()
    }

    #[test]
    fn test_every_pattern_wins() {
        for pattern in WIN_PATTERNS {
            assert_eq!(pattern.count(), 3);
            assert!(is_win(pattern), "pattern {:o} should win", pattern.bits());
        }
    }

    #[test]
    fn test_pattern_plus_extra_bit_still_wins() {
        for pattern in WIN_PATTERNS {
            for cell in Cell::ALL {
                assert!(is_win(pattern.with(cell)));
            }
        }
    }

    #[test]
    fn test_no_line_no_win() {
        assert!(!is_win(Bitboard::EMPTY));
        assert!(!is_win(cells(&[0, 1])));
        assert!(!is_win(cells(&[0, 4])));
        // L-shape and scattered corners
        assert!(!is_win(cells(&[0, 1, 3])));
        assert!(!is_win(cells(&[0, 2, 6])));
        // A drawn final position for X: X O X / X O O / O X X
        assert!(!is_win(cells(&[0, 2, 3, 7, 8])));
    }

    #[test]
    fn test_is_win_matches_exhaustive_line_check() {
        for bits in 0..=0o777u16 {
            let occupancy = Bitboard::from_bits(bits);
            let has_line = WIN_PATTERNS
                .iter()
                .any(|p| p.iter_ones().all(|c| occupancy.get(c)));
            assert_eq!(is_win(occupancy), has_line);
        }
    }

    #[test]
    fn test_winning_line_diagonal() {
        let line = winning_line(cells(&[2, 4, 6, 1])).unwrap();
        let idx: Vec<usize> = line.iter().map(|c| c.index()).collect();
        assert_eq!(idx, vec![2, 4, 6]);
        assert_eq!(winning_line(cells(&[0, 1])), None);
    }

    #[test]
    fn test_is_full_iff_nine_bits() {
        let x = cells(&[0, 2, 3, 7, 8]);
        let o = cells(&[1, 4, 5, 6]);
        assert!(is_full(x, o));
        assert!(!is_full(x, cells(&[1, 4, 5])));
        assert!(!is_full(Bitboard::EMPTY, Bitboard::EMPTY));
    }

    #[test]
    fn test_outcome_checks_win_before_full() {
        // X completes the left column with the ninth move
        let mut board = Board::new();
        board.x = cells(&[0, 2, 3, 6, 7]);
        board.o = cells(&[1, 4, 5, 8]);
        assert!(is_full(board.x, board.o));
        assert_eq!(outcome(&board, Side::X), Outcome::Win(Side::X));
    }

    #[test]
    fn test_outcome_draw_and_ongoing() {
        let mut board = Board::new();
        board.x = cells(&[0, 2, 3, 7, 8]);
        board.o = cells(&[1, 4, 5, 6]);
        assert_eq!(outcome(&board, Side::X), Outcome::Draw);

        board.x = cells(&[4]);
        board.o = Bitboard::EMPTY;
        assert_eq!(outcome(&board, Side::X), Outcome::Ongoing);
        assert!(!Outcome::Ongoing.is_over());
    }
}
