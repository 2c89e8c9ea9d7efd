//! Command-line interface

use clap::{Parser, ValueEnum};

use crate::board::Side;
use crate::ui::GameMode;

/// Tic-tac-toe against a perfect-play AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with an alpha-beta AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Side played by the AI. Skips the start menu when given.
    #[arg(long, value_enum)]
    pub ai: Option<AiChoice>,

    /// Width of the board area in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(240..=2000))]
    pub window_size: u32,
}

/// Who the AI plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiChoice {
    X,
    O,
    /// Two human players
    None,
}

impl From<AiChoice> for GameMode {
    fn from(choice: AiChoice) -> Self {
        match choice {
            AiChoice::X => GameMode::VsAi { ai: Side::X },
            AiChoice::O => GameMode::VsAi { ai: Side::O },
            AiChoice::None => GameMode::TwoPlayer,
        }
    }
}

impl Cli {
    /// Mode to start in, or `None` to show the menu
    pub fn start_mode(&self) -> Option<GameMode> {
        self.ai.map(GameMode::from)
    }
}
