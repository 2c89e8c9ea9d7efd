//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{Button, CentralPanel, Context, Frame, Pos2, Rect, RichText, TopBottomPanel, Vec2};
use tracing::info;

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;

/// Which screen is showing
enum Screen {
    /// Pre-game choice of who the AI plays
    Menu,
    Playing(GameState),
}

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    screen: Screen,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            screen: Screen::Menu,
            board_view: BoardView::default(),
        }
    }
}

impl TicTacToeApp {
    /// Create the app. With `start_mode` set the menu is skipped.
    pub fn new(_cc: &eframe::CreationContext<'_>, start_mode: Option<GameMode>) -> Self {
        let mut app = Self::default();
        if let Some(mode) = start_mode {
            app.start_game(mode);
        }
        app
    }

    fn start_game(&mut self, mode: GameMode) {
        self.screen = Screen::Playing(GameState::new(mode));
    }

    /// Render the mode selection buttons
    fn render_menu(&mut self, ctx: &Context) {
        let mut chosen = None;

        CentralPanel::default()
            .frame(Frame::new().fill(MENU_BG))
            .show(ctx, |ui| {
                let area = ui.max_rect();
                let width = area.width() * MENU_BUTTON_WIDTH_RATIO;
                let left = area.min.x + (area.width() - width) / 2.0;

                for (i, (label, mode)) in GameMode::MENU.iter().enumerate() {
                    let step = MENU_BUTTON_HEIGHT + MENU_BUTTON_GAP;
                    let top = area.min.y + MENU_TOP + i as f32 * step;
                    let rect = Rect::from_min_size(
                        Pos2::new(left, top),
                        Vec2::new(width, MENU_BUTTON_HEIGHT),
                    );
                    let button = Button::new(RichText::new(*label).size(24.0).color(MENU_TEXT));
                    if ui.put(rect, button).clicked() {
                        chosen = Some(*mode);
                    }
                }
            });

        if let Some(mode) = chosen {
            info!(?mode, "mode selected");
            self.start_game(mode);
        }
    }

    /// Render the status bar below the board
    fn render_status(ctx: &Context, state: &GameState) -> StatusAction {
        let mut action = StatusAction::None;

        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let headline = RichText::new(state.status_text()).size(20.0).strong();
                let headline = if state.is_over() {
                    headline.color(MESSAGE_TEXT)
                } else {
                    headline.color(TEXT_PRIMARY)
                };
                ui.label(headline);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Menu").clicked() {
                        action = StatusAction::Menu;
                    }
                    if ui.button("New Game").clicked() {
                        action = StatusAction::NewGame;
                    }
                    if let Some(result) = &state.last_ai_result {
                        let stats = format!(
                            "AI: {} nodes, {}ms ({} this game)",
                            result.nodes,
                            result.time_ms,
                            state.ai_total_nodes()
                        );
                        ui.label(RichText::new(stats).size(11.0).color(TEXT_MUTED));
                    }
                });
            });

            if let Some(msg) = &state.message {
                ui.label(RichText::new(msg).size(12.0).color(MESSAGE_TEXT));
            }
            ui.add_space(6.0);
        });

        action
    }

    /// Render the board and apply a human click
    fn render_board(&mut self, ctx: &Context) {
        let Screen::Playing(state) = &mut self.screen else {
            return;
        };
        let board_view = &mut self.board_view;

        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                let accepts_input = !state.is_over() && state.is_human_turn();
                let clicked = board_view.show(
                    ui,
                    &state.board,
                    state.last_move,
                    state.winning_line(),
                    accepts_input,
                );

                if let Some(cell) = clicked {
                    state.click(cell);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, to_menu) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::Escape)));

        if let Screen::Playing(state) = &mut self.screen {
            if new_game {
                state.reset();
            } else if to_menu {
                self.screen = Screen::Menu;
            }
        }
    }
}

/// Button pressed in the status bar
enum StatusAction {
    None,
    NewGame,
    Menu,
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        if matches!(self.screen, Screen::Menu) {
            self.render_menu(ctx);
            return;
        }
        let Screen::Playing(state) = &mut self.screen else {
            return;
        };

        // AI moves synchronously within the frame
        let ai_moved = state.is_ai_turn() && !state.is_over();
        state.play_ai_turn();

        match Self::render_status(ctx, state) {
            StatusAction::NewGame => state.reset(),
            StatusAction::Menu => {
                self.screen = Screen::Menu;
                ctx.request_repaint();
            }
            StatusAction::None => {}
        }

        self.render_board(ctx);

        if ai_moved {
            ctx.request_repaint();
        }
    }
}
