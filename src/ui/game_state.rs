//! Game state management for the tic-tac-toe GUI
//!
//! Nothing here touches egui, so the turn logic is tested headless.

use tracing::{info, warn};

use crate::error::MoveError;
use crate::rules::{outcome, winning_line, Outcome};
use crate::{AIEngine, Board, Cell, MoveResult, Side};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// One human against the AI playing `ai`
    VsAi { ai: Side },
    /// Two humans sharing the mouse
    TwoPlayer,
}

impl GameMode {
    /// Menu entries in display order
    pub const MENU: [(&'static str, GameMode); 3] = [
        ("Play X (AI O)", GameMode::VsAi { ai: Side::O }),
        ("Play O (AI X)", GameMode::VsAi { ai: Side::X }),
        ("Two Player", GameMode::TwoPlayer),
    ];

    /// Side controlled by the AI, if any
    #[inline]
    pub fn ai_side(self) -> Option<Side> {
        match self {
            GameMode::VsAi { ai } => Some(ai),
            GameMode::TwoPlayer => None,
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::VsAi { ai: Side::O }
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Side,
    pub outcome: Outcome,
    pub last_move: Option<Cell>,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
    engine: AIEngine,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        info!(?mode, "new game");
        Self {
            board: Board::new(),
            mode,
            current_turn: Side::X,
            outcome: Outcome::Ongoing,
            last_move: None,
            last_ai_result: None,
            message: None,
            engine: AIEngine::new(),
        }
    }

    /// Start over in the same mode
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.is_ai_turn()
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.mode.ai_side() == Some(self.current_turn)
    }

    /// Nodes the AI has searched since this game started
    pub fn ai_total_nodes(&self) -> u64 {
        self.engine.total_nodes()
    }

    /// Cells of the completed line once someone has won
    pub fn winning_line(&self) -> Option<[Cell; 3]> {
        match self.outcome {
            Outcome::Win(side) => winning_line(self.board.stones(side)),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Attempt a human move at the given cell
    pub fn try_place(&mut self, cell: Cell) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }

        self.execute_move(cell)
    }

    /// Same as `try_place` but records the rejection as the status message
    pub fn click(&mut self, cell: Cell) {
        if let Err(err) = self.try_place(cell) {
            warn!(cell = cell.index(), %err, "move rejected");
            self.message = Some(err.to_string());
        }
    }

    /// Let the AI move if it is its turn. Runs the search to completion.
    pub fn play_ai_turn(&mut self) {
        if !self.is_ai_turn() || self.is_over() {
            return;
        }

        let result = self.engine.get_move_with_stats(&self.board, self.current_turn);
        self.last_ai_result = Some(result);

        match result.best_move {
            Some(cell) => {
                if let Err(err) = self.execute_move(cell) {
                    warn!(%err, "AI produced an illegal move");
                    self.message = Some(format!("AI error: {err}"));
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, cell: Cell) -> Result<(), MoveError> {
        let side = self.current_turn;
        self.board.place(cell, side)?;
        self.last_move = Some(cell);
        self.message = None;

        self.outcome = outcome(&self.board, side);
        if self.is_over() {
            info!(outcome = ?self.outcome, moves = self.board.stone_count(), "game over");
        }

        self.current_turn = side.opponent();
        Ok(())
    }

    /// Headline for the status bar
    pub fn status_text(&self) -> String {
        match self.outcome {
            Outcome::Win(side) if self.mode.ai_side() == Some(side) => "AI Wins!".to_string(),
            Outcome::Win(side) => format!("{side} Wins!"),
            Outcome::Draw => "Draw!".to_string(),
            Outcome::Ongoing if self.is_ai_turn() => "AI thinking...".to_string(),
            Outcome::Ongoing => format!("{} to move", self.current_turn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(i: usize) -> Cell {
        Cell::new(i).unwrap()
    }

    #[test]
    fn test_new_game_x_moves_first() {
        let state = GameState::new(GameMode::TwoPlayer);
        assert_eq!(state.current_turn, Side::X);
        assert_eq!(state.outcome, Outcome::Ongoing);
        assert_eq!(state.status_text(), "X to move");
    }

    #[test]
    fn test_menu_maps_choices_to_ai_side() {
        assert_eq!(GameMode::MENU[0].1.ai_side(), Some(Side::O));
        assert_eq!(GameMode::MENU[1].1.ai_side(), Some(Side::X));
        assert_eq!(GameMode::MENU[2].1.ai_side(), None);
    }

    #[test]
    fn test_two_player_turns_alternate() {
        let mut state = GameState::new(GameMode::TwoPlayer);
        state.try_place(cell(0)).unwrap();
        assert_eq!(state.current_turn, Side::O);
        state.try_place(cell(4)).unwrap();
        assert_eq!(state.current_turn, Side::X);
        assert_eq!(state.board.get(cell(0)), Some(Side::X));
        assert_eq!(state.board.get(cell(4)), Some(Side::O));
    }

    #[test]
    fn test_occupied_cell_rejected_without_changing_turn() {
        let mut state = GameState::new(GameMode::TwoPlayer);
        state.try_place(cell(0)).unwrap();
        assert_eq!(state.try_place(cell(0)), Err(MoveError::Occupied(cell(0))));
        assert_eq!(state.current_turn, Side::O);

        state.click(cell(0));
        assert_eq!(state.message.as_deref(), Some("cell 0 is already taken"));
    }

    #[test]
    fn test_two_player_win() {
        let mut state = GameState::new(GameMode::TwoPlayer);
        for i in [0, 3, 1, 4, 2] {
            state.try_place(cell(i)).unwrap();
        }
        assert_eq!(state.outcome, Outcome::Win(Side::X));
        assert_eq!(state.status_text(), "X Wins!");
        assert_eq!(state.winning_line(), Some([cell(0), cell(1), cell(2)]));
        assert_eq!(state.try_place(cell(5)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_two_player_draw() {
        // X O X / X O O / O X X
        let mut state = GameState::new(GameMode::TwoPlayer);
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.try_place(cell(i)).unwrap();
        }
        assert_eq!(state.outcome, Outcome::Draw);
        assert_eq!(state.status_text(), "Draw!");
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        // X fills the ninth cell and completes the left column
        let mut state = GameState::new(GameMode::TwoPlayer);
        for i in [0, 1, 2, 4, 3, 5, 7, 8, 6] {
            state.try_place(cell(i)).unwrap();
        }
        assert_eq!(state.board.stone_count(), 9);
        assert_eq!(state.outcome, Outcome::Win(Side::X));
    }

    #[test]
    fn test_human_cannot_move_on_ai_turn() {
        let mut state = GameState::new(GameMode::VsAi { ai: Side::X });
        assert!(state.is_ai_turn());
        assert_eq!(state.try_place(cell(4)), Err(MoveError::NotYourTurn));
        assert_eq!(state.status_text(), "AI thinking...");
    }

    #[test]
    fn test_ai_replies_after_human_move() {
        let mut state = GameState::new(GameMode::VsAi { ai: Side::O });
        state.play_ai_turn(); // not the AI's turn yet
        assert_eq!(state.board.stone_count(), 0);

        state.try_place(cell(0)).unwrap();
        state.play_ai_turn();
        assert_eq!(state.board.stone_count(), 2);
        assert_eq!(state.current_turn, Side::X);
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_ai_node_total_accumulates_until_reset() {
        let mut state = GameState::new(GameMode::VsAi { ai: Side::O });
        assert_eq!(state.ai_total_nodes(), 0);

        state.try_place(cell(0)).unwrap();
        state.play_ai_turn();
        let first = state.last_ai_result.map(|r| r.nodes).unwrap();
        assert_eq!(state.ai_total_nodes(), first);

        state.try_place(cell(8)).unwrap();
        state.play_ai_turn();
        let second = state.last_ai_result.map(|r| r.nodes).unwrap();
        assert_eq!(state.ai_total_nodes(), first + second);

        state.reset();
        assert_eq!(state.ai_total_nodes(), 0);
    }

    #[test]
    fn test_ai_opens_when_playing_x() {
        let mut state = GameState::new(GameMode::VsAi { ai: Side::X });
        state.play_ai_turn();
        assert_eq!(state.board.stones(Side::X).count(), 1);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_ai_punishes_human_blunder() {
        let mut state = GameState::new(GameMode::VsAi { ai: Side::O });

        state.try_place(cell(0)).unwrap();
        state.play_ai_turn();
        // Center is the only reply to a corner that does not lose
        assert_eq!(state.last_move, Some(cell(4)));

        state.try_place(cell(8)).unwrap();
        state.play_ai_turn();
        assert_eq!(state.last_move, Some(cell(1)));

        // X ignores the threat on 7
        state.try_place(cell(2)).unwrap();
        state.play_ai_turn();
        assert_eq!(state.last_move, Some(cell(7)));
        assert_eq!(state.outcome, Outcome::Win(Side::O));
        assert_eq!(state.status_text(), "AI Wins!");
        assert_eq!(state.winning_line(), Some([cell(1), cell(4), cell(7)]));
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut state = GameState::new(GameMode::VsAi { ai: Side::X });
        state.play_ai_turn();
        state.reset();
        assert_eq!(state.mode, GameMode::VsAi { ai: Side::X });
        assert_eq!(state.board.stone_count(), 0);
        assert_eq!(state.current_turn, Side::X);
    }
}
