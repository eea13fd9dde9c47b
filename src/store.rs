// src/store.rs
//! Saved settings: the session cookie (name + value) and the user id.
//!
//! Stored as a flat JSON object under `.store/config.json` using the same keys the
//! browser extension kept in local storage, so a copy of that storage works as-is.
use std::{fs, io, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use crate::config::consts::{CONFIG_FILE, STORE_DIR};
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Credentials {
    pub manual_cookie_name: String,
    pub manual_cookie_value: String,
    pub user_id: String,
}

impl Credentials {
    pub fn new(name: &str, value: &str, user_id: &str) -> Self {
        Self {
            manual_cookie_name: s!(name.trim()),
            manual_cookie_value: s!(value.trim()),
            user_id: s!(user_id.trim()),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.manual_cookie_name.is_empty()
            && !self.manual_cookie_value.is_empty()
            && !self.user_id.is_empty()
    }

    /// `name=value`, ready for the `Cookie` header.
    pub fn cookie_header(&self) -> String {
        join!(&self.manual_cookie_name, "=", &self.manual_cookie_value)
    }

    /// Refuse to go on without all three values.
    pub fn require(&self) -> Result<&Self> {
        if self.is_complete() { Ok(self) } else { Err(Error::MissingCredentials) }
    }
}

pub fn config_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(CONFIG_FILE)
}

/// Missing file → empty settings. A file that exists but doesn't parse is an error.
pub fn load_from(path: &Path) -> Result<Credentials> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(serde_json::from_str(&text)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Credentials::default()),
        Err(e) => Err(e.into()),
    }
}

/// Only complete settings are saved; values are trimmed first.
pub fn save_to(path: &Path, creds: &Credentials) -> Result<()> {
    let creds = Credentials::new(
        &creds.manual_cookie_name,
        &creds.manual_cookie_value,
        &creds.user_id,
    );
    if !creds.is_complete() {
        return Err(Error::IncompleteSettings);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            crate::file::ensure_directory(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(&creds)?)?;
    Ok(())
}

pub fn load() -> Result<Credentials> {
    load_from(&config_path())
}

pub fn save(creds: &Credentials) -> Result<()> {
    save_to(&config_path(), creds)
}
