//! Alpha-Beta search over the full tic-tac-toe game tree
//!
//! Negamax formulation: every call scores the position from the point of
//! view of the side to move, and a parent negates its child's score.
//! The tree is small enough to search to the end, so there is no depth
//! limit, evaluation function or transposition table. Scores only
//! distinguish win, draw and loss.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Bitboard, Cell};
//! use tictactoe::search::{evaluate_and_choose, WIN};
//!
//! // Two in the top row, opponent in the middle row
//! let me: Bitboard = [0, 1].into_iter().filter_map(Cell::new).collect();
//! let opp: Bitboard = [3, 4].into_iter().filter_map(Cell::new).collect();
//!
//! let result = evaluate_and_choose(me, opp);
//! assert_eq!(result.score, WIN);
//! assert_eq!(result.best_move, Cell::new(2));
//! ```

use tracing::debug;

use crate::board::{Bitboard, Cell};
use crate::rules::{is_full, is_win};

/// Side to move can force a win
pub const WIN: i32 = 1;
/// Best play by both sides draws
pub const DRAW: i32 = 0;
/// Opponent can force a win
pub const LOSS: i32 = -1;
/// Bound just outside the score range, for the root window
pub const INF: i32 = WIN + 1;

/// Score of a position plus a move achieving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Value from the mover's perspective: `WIN`, `DRAW` or `LOSS`
    pub score: i32,
    /// `None` only when the board was already full
    pub best_move: Option<Cell>,
    /// Positions visited, root included
    pub nodes: u64,
}

/// Search state. Only carries the node counter; the search itself is a
/// pure function of the occupancy sets it is given.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited since creation
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Full-width search from the root.
    ///
    /// A move that completes a line right now is taken before searching,
    /// so a direct win is never traded for a slower forced one.
    pub fn search(&mut self, me: Bitboard, opp: Bitboard) -> SearchResult {
        debug_assert!(
            me.is_disjoint(opp),
            "overlapping sets {:o} and {:o}",
            me.bits(),
            opp.bits()
        );
        let start_nodes = self.nodes;
        let (score, best_move) = match find_immediate_win(me, opp) {
            Some(cell) => {
                self.nodes += 1;
                (WIN, Some(cell))
            }
            None => self.alpha_beta(me, opp, -INF, INF),
        };
        let nodes = self.nodes - start_nodes;
        debug!(score, ?best_move, nodes, "search finished");
        SearchResult { score, best_move, nodes }
    }

    /// Negamax with alpha-beta pruning.
    ///
    /// * `me` - cells held by the side to move
    /// * `opp` - cells held by the opponent
    /// * `achievable` - score the mover is already guaranteed
    /// * `cutoff` - score at which the opponent would avoid this line
    ///
    /// Cells are scanned in ascending order. The first legal cell is
    /// always recorded and only replaced by a strictly better one, so a
    /// non-full board always yields a move.
    pub fn alpha_beta(
        &mut self,
        me: Bitboard,
        opp: Bitboard,
        mut achievable: i32,
        cutoff: i32,
    ) -> (i32, Option<Cell>) {
        self.nodes += 1;

        if is_full(me, opp) {
            return (DRAW, None);
        }

        let occupied = me.union(opp);
        let mut best_move = None;

        for cell in Cell::ALL {
            if occupied.get(cell) {
                continue;
            }

            let tmp = me.with(cell);
            let cur = if is_win(tmp) {
                WIN
            } else {
                let (child, _) = self.alpha_beta(opp, tmp, -cutoff, -achievable);
                -child
            };

            if cur > achievable {
                achievable = cur;
                best_move = Some(cell);
            } else if best_move.is_none() {
                best_move = Some(cell);
            }

            if achievable >= cutoff {
                break;
            }
        }

        (achievable, best_move)
    }
}

/// Lowest empty cell that completes a line for `me`
fn find_immediate_win(me: Bitboard, opp: Bitboard) -> Option<Cell> {
    let occupied = me.union(opp);
    Cell::ALL
        .into_iter()
        .find(|&c| !occupied.get(c) && is_win(me.with(c)))
}

/// Score the position for the side holding `me` and pick its move.
///
/// Callers must pass disjoint sets. A full board returns `DRAW` with no move.
pub fn evaluate_and_choose(me: Bitboard, opp: Bitboard) -> SearchResult {
    Searcher::new().search(me, opp)
}
