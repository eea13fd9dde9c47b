// src/core/net.rs

// Weekly activity fetch over HTTPS (reqwest, blocking)

use chrono::{Datelike, NaiveDate};
use reqwest::blocking::Client;
use reqwest::header::COOKIE;

use crate::config::consts::{HOST, PERWEEK_PATH, USER_AGENT};
use crate::error::Result;

/// Anything that can hand back one week's activity page for a reference date.
/// Returns the page markup, or an empty string when there is nothing usable.
pub trait WeekSource {
    fn fetch_week(&mut self, date: NaiveDate) -> String;
}

/// `perweek.php` URL for the week containing `date`. Month is 1-based, nothing is zero-padded.
pub fn perweek_url(date: NaiveDate, user_id: &str) -> String {
    format!(
        "https://{}{}?year={}&month={}&day={}&search_usertoprocessid={}",
        HOST,
        PERWEEK_PATH,
        date.year(),
        date.month(),
        date.day(),
        user_id
    )
}

/// The real thing: one GET per call, cookie attached verbatim, no retry.
pub struct HttpSource {
    client: Client,
    user_id: String,
    cookie: String,
}

impl HttpSource {
    pub fn new(user_id: impl Into<String>, cookie: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, user_id: user_id.into(), cookie: cookie.into() })
    }

    fn http_get(&self, url: &str) -> std::result::Result<String, reqwest::Error> {
        self.client
            .get(url)
            .header(COOKIE, &self.cookie)
            .send()?
            .error_for_status()?
            .text()
    }
}

impl WeekSource for HttpSource {
    fn fetch_week(&mut self, date: NaiveDate) -> String {
        let url = perweek_url(date, &self.user_id);
        logd!("GET {url}");
        match self.http_get(&url) {
            Ok(body) => body,
            Err(e) => {
                loge!("Error obteniendo datos para {}: {}", date.format("%Y-%m-%d"), e);
                s!()
            }
        }
    }
}
