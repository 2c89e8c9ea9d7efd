//! Tic-tac-toe with a perfect-play AI
//!
//! A 3x3 game for one player against the computer, or two players sharing
//! the mouse. The AI searches the whole game tree with negamax and
//! alpha-beta pruning, so it never loses and wins whenever it can.
//!
//! # Architecture
//!
//! - [`board`]: sides, cells and the 9-bit occupancy sets
//! - [`rules`]: win patterns, win/draw detection
//! - [`search`]: alpha-beta search returning a score and a move
//! - [`engine`]: AI engine wrapping the search with timing and logging
//! - [`ui`]: egui front end (mode menu, board, status bar)
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Board, Cell, Side};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new();
//!
//! board.place(Cell::new(0).unwrap(), Side::X).unwrap();
//!
//! // AI responds as O
//! if let Some(cell) = engine.get_move(&board, Side::O) {
//!     board.place(cell, Side::O).unwrap();
//!     println!("AI plays at ({}, {})", cell.row(), cell.col());
//! }
//! ```

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Bitboard, Board, Cell, Side, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult};
pub use error::MoveError;
pub use rules::{is_full, is_win};
pub use search::evaluate_and_choose;
