// src/config/consts.rs

// Net config
pub const HOST: &str = "julia.innovasur.com";
pub const PERWEEK_PATH: &str = "/projet/activity/perweek.php";
pub const USER_AGENT: &str = concat!("julia_scrape/", env!("CARGO_PKG_VERSION"));

// Crawl
pub const DAYS_PER_STEP: i64 = 7;
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite
pub const WEEKDAY_SLOTS: usize = 5;

// Local store
pub const STORE_DIR: &str = ".store";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_FILE: &str = "tareas.xlsx";
pub const SHEET_NAME: &str = "Tareas";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
