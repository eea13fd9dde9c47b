// src/scrape.rs
use std::thread;

use chrono::{Days, NaiveDate};

use crate::{
    config::consts::DAYS_PER_STEP,
    config::options::CrawlOptions,
    core::net::WeekSource,
    data::WeekPage,
    progress::Progress,
    specs::perweek,
};

/// Reference dates for the crawl: `start`, `start + 7`, … while `<= end`.
pub fn week_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let step = Days::new(DAYS_PER_STEP as u64);
    let mut out = Vec::new();
    let mut cur = start;
    while cur <= end {
        out.push(cur);
        match cur.checked_add_days(step) {
            Some(next) => cur = next,
            None => break,
        }
    }
    out
}

/// Sequential, rate-limited crawl. One page per week, in order.
/// A failed or unreadable week is logged and contributes nothing; it never stops the loop.
pub fn collect_weeks(
    start: NaiveDate,
    end: NaiveDate,
    source: &mut dyn WeekSource,
    opts: &CrawlOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<WeekPage> {
    let dates = week_dates(start, end);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(dates.len());
    }

    let mut pages = Vec::with_capacity(dates.len());
    for date in dates {
        logf!("Obteniendo datos de {}", date.format("%Y-%m-%d"));

        let html = source.fetch_week(date);
        let page = if html.is_empty() {
            None
        } else {
            match perweek::parse_page(&html) {
                Ok(page) => Some(page),
                Err(e) => {
                    loge!("Error procesando datos de {}: {}", date.format("%Y-%m-%d"), e);
                    None
                }
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            match page {
                Some(_) => p.week_done(date),
                None => p.week_failed(date),
            }
        }
        pages.extend(page);

        if !opts.pause.is_zero() {
            thread::sleep(opts.pause); // be polite
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    pages
}
