//! AI engine: runs the search for one side of a board
//!
//! Thin layer over [`crate::search`] that picks the occupancy sets for the
//! side to move, times the search and logs the decision.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Cell, Side};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place(Cell::new(4).unwrap(), Side::X).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Side::O);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Board, Cell, Side};
use crate::search::{SearchResult, Searcher};

/// Result of a move search with timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` on a full board
    pub best_move: Option<Cell>,
    /// Value for the side that moves: 1 win, 0 draw, -1 loss
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Perfect-play tic-tac-toe AI.
///
/// There is no configuration: the whole game tree is always searched.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the best move for `side`, or `None` if the board is full.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side) -> Option<Cell> {
        self.get_move_with_stats(board, side).best_move
    }

    /// Get the best move for `side` together with its score and search cost.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side) -> MoveResult {
        let start = Instant::now();
        let me = board.stones(side);
        let opp = board.stones(side.opponent());
        debug!(%side, me = me.bits(), opp = opp.bits(), "searching");

        let result = self.searcher.search(me, opp);
        let move_result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);

        info!(
            %side,
            best_move = ?move_result.best_move.map(Cell::index),
            score = move_result.score,
            nodes = move_result.nodes,
            time_ms = move_result.time_ms,
            "AI move chosen"
        );
        move_result
    }

    /// Nodes searched over the engine's lifetime
    pub fn total_nodes(&self) -> u64 {
        self.searcher.nodes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{DRAW, LOSS, WIN};

    fn board_from(x: &[usize], o: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in x {
            board.place(Cell::new(i).unwrap(), Side::X).unwrap();
        }
        for &i in o {
            board.place(Cell::new(i).unwrap(), Side::O).unwrap();
        }
        board
    }

    #[test]
    fn test_engine_empty_board() {
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&Board::new(), Side::X);
        assert_eq!(result.score, DRAW);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        // X X _
        // O O _
        let board = board_from(&[0, 1], &[3, 4]);
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Side::X);
        assert_eq!(result.best_move, Cell::new(2));
        assert_eq!(result.score, WIN);
    }

    #[test]
    fn test_engine_uses_side_to_pick_sets() {
        // X has also played 8; O to move completes the middle row
        let board = board_from(&[0, 1, 8], &[3, 4]);
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Side::O);
        assert_eq!(result.best_move, Cell::new(5));
        assert_eq!(result.score, WIN);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let board = board_from(&[0, 1], &[4]);
        let mut engine = AIEngine::new();
        assert_eq!(engine.get_move(&board, Side::O), Cell::new(2));
    }

    #[test]
    fn test_engine_reports_forced_loss() {
        let board = board_from(&[0, 1, 3], &[4, 8]);
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Side::O);
        assert_eq!(result.score, LOSS);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_engine_full_board() {
        let board = board_from(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        let mut engine = AIEngine::new();
        assert_eq!(engine.get_move(&board, Side::O), None);
    }

    #[test]
    fn test_engine_multiple_searches() {
        let board = board_from(&[4], &[]);
        let mut engine = AIEngine::new();
        let first = engine.get_move_with_stats(&board, Side::O);
        let second = engine.get_move_with_stats(&board, Side::O);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(engine.total_nodes(), first.nodes + second.nodes);
    }
}
