//! Board rendering for the tic-tac-toe GUI

use crate::{Board, Cell, Side, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 200.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks are only reported when `accepts_input` is set, so the caller
    /// decides whether a human may move right now.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Cell>,
        winning_line: Option<[Cell; 3]>,
        accepts_input: bool,
    ) -> Option<Cell> {
        let available_size = ui.available_size();

        // Square board filling the smaller dimension
        let board_size = available_size.x.min(available_size.y);
        self.cell_size = board_size / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, BOARD_BG);

        if let Some(cell) = last_move {
            painter.rect_filled(self.cell_rect(cell), CornerRadius::ZERO, LAST_MOVE_BG);
        }

        if accepts_input {
            if let Some(cell) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                if board.is_empty(cell) {
                    painter.rect_filled(self.cell_rect(cell), CornerRadius::ZERO, hover_valid());
                }
            }
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if accepts_input && response.clicked() {
            return response.interact_pointer_pos().and_then(|p| self.screen_to_board(p));
        }
        None
    }

    /// Draw the two inner vertical and horizontal lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let size = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, 0.0);
            let end = self.board_rect.min + Vec2::new(offset, size);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(0.0, offset);
            let end = self.board_rect.min + Vec2::new(size, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for cell in Cell::ALL {
            match board.get(cell) {
                Some(Side::X) => self.draw_x(painter, cell),
                Some(Side::O) => self.draw_o(painter, cell),
                None => {}
            }
        }
    }

    /// Two diagonals inset from the cell corners
    fn draw_x(&self, painter: &Painter, cell: Cell) {
        let rect = self.cell_rect(cell).shrink(self.cell_size * X_PAD_RATIO);
        let stroke = Stroke::new(MARK_LINE_WIDTH, X_MARK);
        painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
        painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
    }

    fn draw_o(&self, painter: &Painter, cell: Cell) {
        let center = self.board_to_screen(cell);
        let radius = self.cell_size * O_RADIUS_RATIO;
        painter.circle_stroke(center, radius, Stroke::new(MARK_LINE_WIDTH, O_MARK));
    }

    /// Line through the centers of the first and last winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[Cell; 3]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);
        let ends = [self.board_to_screen(line[0]), self.board_to_screen(line[2])];
        painter.line_segment(ends, stroke);
    }

    /// Screen rectangle covered by a cell
    fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::from_center_size(self.board_to_screen(cell), Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Cell> {
        cell_at(screen_pos - self.board_rect.min, self.cell_size)
    }

    /// Convert a board cell to the screen coordinates of its center
    pub fn board_to_screen(&self, cell: Cell) -> Pos2 {
        let x = self.board_rect.min.x + (cell.col() as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + (cell.row() as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Cell under an offset from the board's top-left corner
fn cell_at(relative: Vec2, cell_size: f32) -> Option<Cell> {
    if relative.x < 0.0 || relative.y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let col = (relative.x / cell_size) as usize;
    let row = (relative.y / cell_size) as usize;
    Cell::from_row_col(row, col)
}
