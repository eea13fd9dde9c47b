// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;

use super::consts::*;
use crate::error::{Error, Result};

/// One export request: what range to crawl, for whom, with which cookie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub user_id: String,
    /// Sent verbatim as the `Cookie` header (`name=value`).
    pub cookie: String,
}

impl RequestParams {
    /// Refuse anything that would make the crawl pointless before touching the network.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() || self.cookie.trim().is_empty() {
            return Err(Error::MissingCredentials);
        }
        if self.start_date > self.end_date {
            return Err(Error::DateRange { start: self.start_date, end: self.end_date });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Fixed pause after every weekly request.
    pub pause: Duration,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self { pause: Duration::from_millis(REQUEST_PAUSE_MS) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: PathBuf::from(DEFAULT_FILE) }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Accepts a file path or a directory hint (trailing separator or existing dir).
    /// Directories get the default file name appended.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = PathBuf::from(DEFAULT_FILE);
            return;
        }
        let p = PathBuf::from(crate::file::normalize_separators(s));
        self.out_path = if crate::file::looks_like_dir_hint(&p) || p.is_dir() {
            p.join(DEFAULT_FILE)
        } else {
            p
        };
    }
}
