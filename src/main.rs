//! Tic-tac-toe GUI
//!
//! Pick a side against the AI, or play two players on one board.

use clap::Parser;
use tictactoe::cli::Cli;
use tictactoe::ui::TicTacToeApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let start_mode = cli.start_mode();
    info!(?start_mode, window_size = cli.window_size, "starting tic-tac-toe");
    let window_size = cli.window_size as f32;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_size, window_size + 60.0])
            .with_min_inner_size([240.0, 300.0])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, start_mode)))),
    )
}
