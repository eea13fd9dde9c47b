// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use chrono::{Days, Local, NaiveDate};
use eframe::egui;

use crate::{
    config::options::ExportOptions,
    store::{self, Credentials},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Julia → Excel",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Export,
    Config,
}

pub struct App {
    pub tab: Tab,

    // Export tab
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub export: ExportOptions,
    pub out_path_text: String,

    // Config tab (text fields; saved on click)
    pub cookie_name: String,
    pub cookie_value: String,
    pub user_id: String,
    pub config_status: Option<(String, bool)>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: Arc<AtomicBool>,
    /// One-shot message shown in a small window (completion or abort).
    pub alert: Arc<Mutex<Option<String>>>,
}

impl App {
    pub fn new() -> Self {
        let saved = match store::load() {
            Ok(c) => c,
            Err(e) => {
                loge!("Config: Load failed: {}", e);
                Credentials::default()
            }
        };
        logf!("Init: config complete={}", saved.is_complete());

        let today = Local::now().date_naive();
        let export = ExportOptions::default();
        let out_path_text = export.out_path().to_string_lossy().into_owned();

        Self {
            tab: Tab::Export,
            start_date: today.checked_sub_days(Days::new(28)).unwrap_or(today),
            end_date: today,
            export,
            out_path_text,
            cookie_name: saved.manual_cookie_name,
            cookie_value: saved.manual_cookie_value,
            user_id: saved.user_id,
            config_status: None,
            status: Arc::new(Mutex::new(s!("Listo"))),
            running: Arc::new(AtomicBool::new(false)),
            alert: Arc::new(Mutex::new(None)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn is_running(&self) -> bool { self.running.load(Ordering::SeqCst) }

    /// Export is offered only for a non-inverted range and when nothing is in flight.
    #[inline]
    pub fn can_export(&self) -> bool { self.start_date <= self.end_date && !self.is_running() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            match self.tab {
                Tab::Export => crate::gui::components::export_tab::draw(ui, self),
                Tab::Config => crate::gui::components::config_tab::draw(ui, self),
            }
        });

        crate::gui::components::alert::draw(ctx, self);
    }
}
