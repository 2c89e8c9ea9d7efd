//! Errors raised when a move request cannot be applied

use derive_more::{Display, Error};

use crate::board::Cell;

/// Reasons a requested move is rejected.
///
/// The search itself never fails; these only come from the game layer
/// validating input that arrives from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index outside 0..=8
    #[display("cell index {_0} is off the board")]
    OutOfRange(#[error(not(source))] usize),
    #[display("cell {_0} is already taken")]
    Occupied(#[error(not(source))] Cell),
    #[display("game is over")]
    GameOver,
    #[display("not your turn")]
    NotYourTurn,
}
