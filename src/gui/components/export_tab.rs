// src/gui/components/export_tab.rs

use eframe::egui::{self, widgets::Spinner};
use egui_extras::DatePickerButton;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    egui::Grid::new("export_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Fecha inicio:");
            ui.add(DatePickerButton::new(&mut app.start_date).id_salt("start_date"));
            ui.end_row();

            ui.label("Fecha fin:");
            ui.add(DatePickerButton::new(&mut app.end_date).id_salt("end_date"));
            ui.end_row();

            ui.label("Archivo de salida:");
            ui.add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace));
            ui.end_row();
        });

    if app.start_date > app.end_date {
        ui.colored_label(egui::Color32::RED, "La fecha de inicio es posterior a la de fin.");
    }

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let button_export = ui.add_enabled(app.can_export(), egui::Button::new("Exportar a Excel"));
        if button_export.clicked() {
            actions::export(app, ui.ctx());
        }

        if app.is_running() {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
}
