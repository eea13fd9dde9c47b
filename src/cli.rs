// src/cli.rs
use std::time::Duration;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::{
    config::options::{CrawlOptions, ExportOptions},
    error::Result,
    progress::Progress,
    runner,
    store::{self, Credentials},
};

#[derive(Parser)]
#[command(name = "julia_scrape")]
#[command(version, about = "Export weekly timesheet activity to tareas.xlsx", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Crawl every week in the range and write the spreadsheet
    Export {
        /// First reference date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        from: NaiveDate,

        /// Last reference date, inclusive (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        to: NaiveDate,

        /// Output file, or a directory to put tareas.xlsx in
        #[arg(short, long, value_name = "PATH")]
        out: Option<String>,

        /// Override the saved user id
        #[arg(long)]
        user: Option<String>,

        /// Override the saved cookie (NAME=VALUE)
        #[arg(long, value_name = "NAME=VALUE")]
        cookie: Option<String>,

        /// Pause between weekly requests
        #[arg(long, default_value_t = crate::config::consts::REQUEST_PAUSE_MS)]
        pause_ms: u64,
    },

    /// Show or change the saved cookie and user id
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Save cookie name, cookie value and user id
    Set {
        #[arg(long)]
        cookie_name: String,
        #[arg(long)]
        cookie_value: String,
        #[arg(long)]
        user: String,
    },
    /// Print the saved settings (cookie value masked)
    Show,
}

/// Prints one line per week to stdout.
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Obteniendo {total} semana(s)…");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn week_done(&mut self, date: NaiveDate) {
        self.done += 1;
        println!("[{}/{}] {date} ok", self.done, self.total);
    }
    fn week_failed(&mut self, date: NaiveDate) {
        self.done += 1;
        println!("[{}/{}] {date} sin datos", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Export { from, to, out, user, cookie, pause_ms } => {
            let saved = store::load()?;
            let creds = override_creds(saved, user.as_deref(), cookie.as_deref());
            let params = runner::request_from(&creds, from, to)?;

            let crawl = CrawlOptions { pause: Duration::from_millis(pause_ms) };
            let mut export = ExportOptions::default();
            if let Some(out) = out {
                export.set_path(&out);
            }

            let mut prog = CliProgress { done: 0, total: 0 };
            let summary = runner::export(&params, &crawl, &export, Some(&mut prog))?;
            println!(
                "Escrito {} ({} tarea(s), {} columna(s) de día, {}/{} semana(s) con datos)",
                summary.path.display(),
                summary.tasks,
                summary.day_columns,
                summary.weeks_with_data,
                summary.weeks_fetched
            );
        }
        Command::Config { action: ConfigAction::Set { cookie_name, cookie_value, user } } => {
            store::save(&Credentials::new(&cookie_name, &cookie_value, &user))?;
            println!("Configuración guardada.");
        }
        Command::Config { action: ConfigAction::Show } => {
            let c = store::load()?;
            println!("manualCookieName  = {}", c.manual_cookie_name);
            println!("manualCookieValue = {}", mask(&c.manual_cookie_value));
            println!("userId            = {}", c.user_id);
        }
    }
    Ok(())
}

/// Flags win over saved values. `--cookie` is split on the first '='.
pub fn override_creds(mut creds: Credentials, user: Option<&str>, cookie: Option<&str>) -> Credentials {
    if let Some(u) = user {
        creds.user_id = s!(u.trim());
    }
    if let Some(c) = cookie {
        let (name, value) = c.split_once('=').unwrap_or((c, ""));
        creds.manual_cookie_name = s!(name.trim());
        creds.manual_cookie_value = s!(value.trim());
    }
    creds
}

fn mask(v: &str) -> String {
    match v.chars().count() {
        0 => s!(),
        n if n <= 4 => "*".repeat(n),
        n => {
            let tail: String = v.chars().skip(n - 4).collect();
            join!("*".repeat(n - 4), &tail)
        }
    }
}
