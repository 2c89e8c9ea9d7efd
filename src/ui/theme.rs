//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors - plain paper look
pub const BOARD_BG: Color32 = Color32::WHITE;
pub const GRID_LINE: Color32 = Color32::BLACK;

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(25, 25, 30);
pub const O_MARK: Color32 = Color32::from_rgb(25, 25, 30);
pub const LAST_MOVE_BG: Color32 = Color32::from_rgb(245, 245, 220);

// Highlights
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 80);
pub const MESSAGE_TEXT: Color32 = Color32::from_rgb(255, 0, 0);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

// Menu
pub const MENU_BG: Color32 = Color32::WHITE;
pub const MENU_TEXT: Color32 = Color32::BLACK;
pub const MENU_BUTTON_WIDTH_RATIO: f32 = 0.5;
pub const MENU_BUTTON_HEIGHT: f32 = 50.0;
pub const MENU_BUTTON_GAP: f32 = 50.0;
pub const MENU_TOP: f32 = 100.0;

// Status bar
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(30, 30, 35);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const MARK_LINE_WIDTH: f32 = 4.0;
/// X is inset by a quarter of the cell on each side
pub const X_PAD_RATIO: f32 = 0.25;
/// O radius as a fraction of the cell
pub const O_RADIUS_RATIO: f32 = 1.0 / 3.0;
pub const WIN_LINE_WIDTH: f32 = 6.0;
