use eframe::egui;
use tictactoe_common::games::tictactoe::{GameEngine, GameStatus, Position};
use tictactoe_common::log;

use super::cell_map::CellMap;
use crate::colors::parse_color;

const CELL_BORDER_COLOR: egui::Color32 = egui::Color32::from_rgb(173, 216, 230);
const HOVER_COLOR: egui::Color32 = egui::Color32::from_rgb(235, 244, 255);
const TIED_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

/// Renders one game and forwards clicks on the grid to the engine.
pub struct GameUi {
    engine: GameEngine,
    cell_map: CellMap,
    ask_reset: bool,
}

impl GameUi {
    const BOARD_PADDING: f32 = 20.0;
    const CELL_GAP: f32 = 10.0;
    const MIN_CELL_SIZE: f32 = 30.0;
    const MAX_CELL_SIZE: f32 = 120.0;
    const STATUS_FONT_SIZE: f32 = 28.0;

    pub fn new(engine: GameEngine) -> Self {
        let names: Vec<&str> = engine.players().iter().map(|p| p.name()).collect();
        log!(
            "New game on a {0}x{0} board: {1}",
            engine.board_size(),
            names.join(" vs ")
        );

        let cell_map = CellMap::new(engine.board_size());
        Self {
            engine,
            cell_map,
            ask_reset: false,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.render_menu(ctx);
        self.render_status(ctx);

        let clicked = egui::CentralPanel::default()
            .show(ctx, |ui| self.render_board(ui))
            .inner;
        if let Some(position) = clicked {
            self.play(position);
        }

        if self.ask_reset {
            self.render_play_again_dialog(ctx);
        }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32, board_size: usize) -> f32 {
        let gaps = Self::CELL_GAP * board_size.saturating_sub(1) as f32;
        let available = available_width.min(available_height) - Self::BOARD_PADDING * 2.0 - gaps;
        (available / board_size as f32).clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn render_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Play Again").clicked() {
                        self.reset_board();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn render_status(&self, ctx: &egui::Context) {
        let (message, color) = status_message(&self.engine);
        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(message)
                        .size(Self::STATUS_FONT_SIZE)
                        .color(color),
                );
            });
        });
    }

    fn render_board(&self, ui: &mut egui::Ui) -> Option<Position> {
        let board_size = self.engine.board_size();
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height(), board_size);
        let stride = cell_size + Self::CELL_GAP;
        let extent = stride * board_size as f32 - Self::CELL_GAP;

        let accepting_moves = self.engine.status() == GameStatus::InProgress;
        let winner_combo = self.engine.winner_combo();
        let mut clicked = None;

        ui.vertical_centered(|ui| {
            ui.add_space(Self::BOARD_PADDING);
            let (board_rect, _) = ui.allocate_exact_size(egui::vec2(extent, extent), egui::Sense::hover());
            let painter = ui.painter_at(board_rect);

            for (row, cells) in self.engine.board().rows().enumerate() {
                for (col, cell) in cells.iter().enumerate() {
                    let Some(id) = self.cell_map.id(row, col) else {
                        continue;
                    };

                    let cell_rect = egui::Rect::from_min_size(
                        board_rect.min + egui::vec2(col as f32 * stride, row as f32 * stride),
                        egui::vec2(cell_size, cell_size),
                    );
                    let response = ui.interact(cell_rect, id, egui::Sense::click());

                    let fill = if accepting_moves && cell.is_empty() && response.hovered() {
                        HOVER_COLOR
                    } else {
                        egui::Color32::WHITE
                    };
                    let border = if winner_combo.contains(&cell.position()) {
                        egui::Stroke::new(4.0, egui::Color32::RED)
                    } else {
                        egui::Stroke::new(2.0, CELL_BORDER_COLOR)
                    };

                    painter.rect_filled(cell_rect, 4.0, fill);
                    painter.rect_stroke(cell_rect, 4.0, border, egui::StrokeKind::Inside);

                    if !cell.is_empty() {
                        painter.text(
                            cell_rect.center(),
                            egui::Align2::CENTER_CENTER,
                            &cell.label,
                            egui::FontId::proportional(cell_size * 0.6),
                            self.label_color(&cell.label),
                        );
                    }

                    if response.clicked() {
                        clicked = self.cell_map.position(response.id);
                    }
                }
            }
        });

        clicked
    }

    fn label_color(&self, label: &str) -> egui::Color32 {
        self.engine
            .players()
            .iter()
            .find(|player| player.label() == label)
            .and_then(|player| parse_color(player.display_color()))
            .unwrap_or(egui::Color32::BLACK)
    }

    fn render_play_again_dialog(&mut self, ctx: &egui::Context) {
        egui::Window::new("Play again?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -Self::BOARD_PADDING))
            .show(ctx, |ui| {
                ui.label("Do you want to play again?");
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        self.reset_board();
                    }
                    if ui.button("No").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
    }

    fn play(&mut self, position: Position) {
        let player_name = self.engine.current_player().name().to_string();
        match self.engine.play(position.row, position.col) {
            Ok(GameStatus::InProgress) => {
                log!("{} played ({}, {})", player_name, position.row, position.col);
            }
            Ok(GameStatus::Won) => {
                log!("{} won with {:?}", player_name, self.engine.winner_combo());
                self.ask_reset = true;
            }
            Ok(GameStatus::Tied) => {
                log!("Tied game after {} played ({}, {})", player_name, position.row, position.col);
                self.ask_reset = true;
            }
            Err(e) => {
                log!("Ignored click on ({}, {}): {}", position.row, position.col, e);
            }
        }
    }

    fn reset_board(&mut self) {
        self.engine.reset();
        self.ask_reset = false;
        log!("Board reset, {}'s turn", self.engine.current_player().name());
    }
}

/// Text and color of the line above the board.
pub fn status_message(engine: &GameEngine) -> (String, egui::Color32) {
    match engine.status() {
        GameStatus::Won => match engine.winner() {
            Some(winner) => (
                format!("{} won!", winner.name()),
                parse_color(winner.display_color()).unwrap_or(egui::Color32::BLACK),
            ),
            None => ("Game over!".to_string(), egui::Color32::BLACK),
        },
        GameStatus::Tied => ("Tied game!".to_string(), TIED_COLOR),
        GameStatus::InProgress => (
            format!("{}'s turn", engine.current_player().name()),
            egui::Color32::BLACK,
        ),
    }
}
