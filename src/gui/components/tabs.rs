// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.

use eframe::egui;
use crate::gui::app::{App, Tab};

const TABS: [(Tab, &str); 2] = [(Tab::Export, "Exportar"), (Tab::Config, "Configuración")];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for (tab, title) in TABS {
            let selected = app.tab == tab;
            if ui.selectable_label(selected, title).clicked() && !selected {
                logd!("UI: Tab switch {:?} → {:?}", app.tab, tab);
                app.tab = tab;
            }
        }
    });
}
