// src/gui/components/alert.rs
//
// Small modal-ish window for the end-of-run message.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let msg = match app.alert.lock() {
        Ok(guard) => guard.clone(),
        Err(_) => None,
    };
    let Some(msg) = msg else { return };

    let mut close = false;
    egui::Window::new("Julia → Excel")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&msg);
            if ui.button("OK").clicked() {
                close = true;
            }
        });

    if close {
        if let Ok(mut guard) = app.alert.lock() {
            *guard = None;
        }
    }
}
