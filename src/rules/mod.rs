//! Game rules for tic-tac-toe
//!
//! A side wins by holding all three cells of a row, column or diagonal.
//! The game is drawn when all nine cells are claimed with no winner.

pub mod win;

// Re-exports for convenient access
pub use win::{is_full, is_win, outcome, winning_line, Outcome, WIN_PATTERNS};
