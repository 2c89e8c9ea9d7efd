//! Search module for the tic-tac-toe AI
//!
//! Exhaustive negamax with alpha-beta pruning. See [`alphabeta`].

pub mod alphabeta;

pub use alphabeta::{evaluate_and_choose, SearchResult, Searcher, DRAW, INF, LOSS, WIN};
