// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use chrono::NaiveDate;

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: Option<eframe::egui::Context>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: Option<eframe::egui::Context>) -> Self {
        Self { status, ctx, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Obteniendo {} semana(s)…", total));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn week_done(&mut self, date: NaiveDate) {
        self.done += 1;
        self.set_status(format!("Semana del {} obtenida ({}/{})", date, self.done, self.total));
    }
    fn week_failed(&mut self, date: NaiveDate) {
        self.done += 1;
        self.set_status(format!("Sin datos para la semana del {} ({}/{})", date, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Descarga completada")); // no counts if we never began
        } else {
            self.set_status(format!("Descarga completada ({}/{})", self.done, self.total));
        }
    }
}
