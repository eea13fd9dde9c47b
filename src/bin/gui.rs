// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use julia_scrape::{gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init(false);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([460.0, 260.0])
            .with_resizable(false),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
