mod colors;
mod config;
mod names;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use tictactoe_common::config::Validate;
use tictactoe_common::{log, logger};

use config::get_config_manager;
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Two-player tic-tac-toe")]
struct Args {
    /// YAML config file, created with defaults when the names are first saved.
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,

    /// Overrides the configured board size for this run.
    #[arg(long)]
    board_size: Option<usize>,

    #[arg(long)]
    no_name_prompt: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config().inspect_err(|e| {
        log!("Failed to load {}: {}", args.config.display(), e);
    })?;

    if let Some(board_size) = args.board_size {
        config.board_size = board_size;
        config.validate()?;
    }
    if args.no_name_prompt {
        config.prompt_for_names = false;
    }

    log!(
        "Starting a {0}x{0} game for {1} players",
        config.board_size,
        config.players.len()
    );

    let window_side = (config.board_size as f32 * 110.0 + 120.0).clamp(420.0, 1000.0);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_side, window_side + 80.0])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(config, config_manager)))),
    )?;

    Ok(())
}
