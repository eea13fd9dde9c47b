// src/gui/actions.rs
use std::{sync::atomic::Ordering, thread};

use eframe::egui;

use crate::{
    config::options::CrawlOptions,
    gui::{app::App, progress::GuiProgress},
    runner,
    store::{self, Credentials},
};

/// Kick off the crawl + export on a worker thread. The button stays disabled until it ends.
pub fn export(app: &mut App, ctx: &egui::Context) {
    if !app.can_export() {
        logd!("Export: Clicked while disabled (range or running)");
        return;
    }

    app.export.set_path(&app.out_path_text);
    app.out_path_text = app.export.out_path().to_string_lossy().into_owned();

    // Settings are read at click time, like the form always did.
    let creds = match store::load() {
        Ok(c) => c,
        Err(e) => {
            loge!("Export: Config load failed: {}", e);
            app.status(format!("Error: {e}"));
            return;
        }
    };
    let params = match runner::request_from(&creds, app.start_date, app.end_date) {
        Ok(p) => p,
        Err(e) => {
            logd!("Export: Refused: {}", e);
            app.status(e.to_string());
            set_alert(app, e.to_string());
            return;
        }
    };

    app.running.store(true, Ordering::SeqCst);
    app.status("Exportando…");

    let export = app.export.clone();
    let status = app.status.clone();
    let running = app.running.clone();
    let alert = app.alert.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status.clone(), Some(ctx.clone()));
        let result = runner::export(&params, &CrawlOptions::default(), &export, Some(&mut prog));

        let (line, popup) = match result {
            Ok(summary) => (
                format!("Exportadas {} tarea(s) → {}", summary.tasks, summary.path.display()),
                s!("Exportación completada"),
            ),
            Err(e) => {
                loge!("Export: Error: {}", e);
                (format!("Error: {e}"), format!("Error en la exportación: {e}"))
            }
        };

        if let Ok(mut s) = status.lock() {
            *s = line;
        }
        if let Ok(mut a) = alert.lock() {
            *a = Some(popup);
        }
        running.store(false, Ordering::SeqCst);
        ctx.request_repaint();
    });
}

pub fn save_config(app: &mut App) {
    let creds = Credentials::new(&app.cookie_name, &app.cookie_value, &app.user_id);
    app.config_status = Some(match store::save(&creds) {
        Ok(()) => {
            logf!("Config: Saved (userId={})", creds.user_id);
            app.cookie_name = creds.manual_cookie_name;
            app.cookie_value = creds.manual_cookie_value;
            app.user_id = creds.user_id;
            (s!("Configuración guardada."), true)
        }
        Err(e) => {
            logd!("Config: Not saved: {}", e);
            (e.to_string(), false)
        }
    });
}

fn set_alert(app: &App, msg: String) {
    if let Ok(mut a) = app.alert.lock() {
        *a = Some(msg);
    }
}
