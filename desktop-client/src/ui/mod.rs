mod cell_map;
mod game_ui;
mod name_prompt;

use eframe::egui;
use tictactoe_common::games::tictactoe::GameEngine;
use tictactoe_common::log;

use crate::config::{ClientConfigManager, Config};
use game_ui::GameUi;
use name_prompt::NamePrompt;

enum Screen {
    NamePrompt(NamePrompt),
    Game(GameUi),
    Error(String),
}

pub struct TicTacToeApp {
    config: Config,
    config_manager: ClientConfigManager,
    screen: Screen,
}

impl TicTacToeApp {
    pub fn new(config: Config, config_manager: ClientConfigManager) -> Self {
        let screen = if config.prompt_for_names {
            let stored_names = config
                .players
                .iter()
                .map(|player| player.name.clone().unwrap_or_default())
                .collect();
            Screen::NamePrompt(NamePrompt::new(stored_names))
        } else {
            Self::start_game(&config, &[])
        };

        Self {
            config,
            config_manager,
            screen,
        }
    }

    fn start_game(config: &Config, entered_names: &[String]) -> Screen {
        let players = config.build_players(entered_names);
        match GameEngine::new(players, config.board_size) {
            Ok(engine) => Screen::Game(GameUi::new(engine)),
            Err(e) => {
                log!("Failed to start game: {}", e);
                Screen::Error(e.to_string())
            }
        }
    }

    fn remember_names(&self, entered_names: &[String]) {
        let result = self.config_manager.get_config().and_then(|mut stored| {
            stored.remember_names(entered_names);
            self.config_manager.set_config(&stored)
        });
        if let Err(e) = result {
            log!("Failed to save player names: {}", e);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match &mut self.screen {
            Screen::NamePrompt(prompt) => {
                if let Some(names) = prompt.show(ctx) {
                    self.remember_names(&names);
                    self.screen = Self::start_game(&self.config, &names);
                }
            }
            Screen::Game(game_ui) => game_ui.show(ctx),
            Screen::Error(message) => {
                egui::CentralPanel::default().show(ctx, |_ui| {});
                egui::Window::new("Error")
                    .collapsible(false)
                    .show(ctx, |ui| {
                        ui.label(message.as_str());
                        if ui.button("Quit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
            }
        }
    }
}
