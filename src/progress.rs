// src/progress.rs
use chrono::NaiveDate;

/// Lightweight progress reporting used by the weekly crawl and the export.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of weeks to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One weekly page came back with data.
    fn week_done(&mut self, _date: NaiveDate) {}

    /// One weekly page came back empty (request failed or page unreadable).
    fn week_failed(&mut self, _date: NaiveDate) {}

    /// Called at the end of the crawl, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
