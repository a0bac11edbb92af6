use eframe::egui;

/// Asks for one name per player before the first game.
pub struct NamePrompt {
    names: Vec<String>,
    focus_requested: bool,
}

impl NamePrompt {
    pub fn new(initial_names: Vec<String>) -> Self {
        Self {
            names: initial_names,
            focus_requested: false,
        }
    }

    /// Returns the entered names once the players submit them. Blank
    /// entries are allowed and later replaced by placeholders.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<Vec<String>> {
        let mut submitted = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.heading("Player Names");
                ui.add_space(20.0);

                let mut enter_pressed = false;
                let last_index = self.names.len().saturating_sub(1);
                for (index, name) in self.names.iter_mut().enumerate() {
                    ui.label(format!("Please enter Player {}'s name:", index + 1));
                    let response = ui.add(
                        egui::TextEdit::singleline(name)
                            .hint_text(format!("Player {}", index + 1))
                            .desired_width(200.0),
                    );

                    if index == 0 && !self.focus_requested {
                        response.request_focus();
                        self.focus_requested = true;
                    }

                    if index == last_index {
                        enter_pressed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    }
                    ui.add_space(10.0);
                }

                ui.add_space(5.0);
                let button_clicked = ui.button("Start (Enter)").clicked();
                submitted = enter_pressed || button_clicked;

                ui.add_space(5.0);
                ui.label(
                    egui::RichText::new("Leave a name blank to use the default")
                        .color(egui::Color32::GRAY)
                        .small(),
                );
            });
        });

        submitted.then(|| self.names.clone())
    }
}
