// src/gui/components/config_tab.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    egui::Grid::new("config_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Nombre de la cookie:");
            ui.text_edit_singleline(&mut app.cookie_name);
            ui.end_row();

            ui.label("Valor de la cookie:");
            ui.add(egui::TextEdit::multiline(&mut app.cookie_value).desired_rows(2));
            ui.end_row();

            ui.label("UserID:");
            ui.text_edit_singleline(&mut app.user_id);
            ui.end_row();
        });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button("Guardar").clicked() {
            actions::save_config(app);
        }
        if let Some((msg, ok)) = &app.config_status {
            let color = if *ok { egui::Color32::DARK_GREEN } else { egui::Color32::RED };
            ui.colored_label(color, msg);
        }
    });
}
