//! Gomoku GUI
//!
//! Play five-in-a-row against the heuristic AI or another player.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use wuziqi::ui::{GameMode, GomokuApp, SessionConfig};
use wuziqi::Stone;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Human against the machine
    Pve,
    /// Two players on one board
    Pvp,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Color {
    Black,
    White,
}

#[derive(Parser, Debug)]
#[command(name = "wuziqi", about = "Five-in-a-row against a heuristic AI")]
struct Args {
    /// Starting game mode
    #[arg(long, value_enum, default_value_t = Mode::Pve)]
    mode: Mode,

    /// Your color when playing the machine (Black moves first)
    #[arg(long, value_enum, default_value_t = Color::Black)]
    human_color: Color,

    /// Pause before the machine plays, in milliseconds
    #[arg(long, default_value_t = 500)]
    ai_delay_ms: u64,
}

impl Args {
    fn game_mode(&self) -> GameMode {
        match self.mode {
            Mode::Pvp => GameMode::PvP,
            Mode::Pve => GameMode::PvE {
                human_color: match self.human_color {
                    Color::Black => Stone::Black,
                    Color::White => Stone::White,
                },
            },
        }
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            ai_delay: Duration::from_millis(self.ai_delay_ms),
            ..SessionConfig::default()
        }
    }
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mode = args.game_mode();
    let config = args.session_config();
    tracing::info!(?mode, delay_ms = args.ai_delay_ms, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, mode, config)))),
    )
}
