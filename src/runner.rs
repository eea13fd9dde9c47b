// src/runner.rs
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{
    aggregate,
    config::options::{CrawlOptions, ExportOptions, RequestParams},
    core::net::{HttpSource, WeekSource},
    error::Result,
    file,
    progress::Progress,
    scrape,
    store::Credentials,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub weeks_fetched: usize,
    pub weeks_with_data: usize,
    pub tasks: usize,
    pub day_columns: usize,
}

/// Saved settings + a date range → request parameters. Incomplete settings are refused.
pub fn request_from(creds: &Credentials, start: NaiveDate, end: NaiveDate) -> Result<RequestParams> {
    let creds = creds.require()?;
    Ok(RequestParams {
        start_date: start,
        end_date: end,
        user_id: creds.user_id.clone(),
        cookie: creds.cookie_header(),
    })
}

/// Top-level runner: crawl the live site, merge, write the workbook.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn export(
    params: &RequestParams,
    crawl: &CrawlOptions,
    export: &ExportOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<ExportSummary> {
    params.validate()?;
    let mut source = HttpSource::new(&params.user_id, &params.cookie)?;
    export_with(params, &mut source, crawl, export, progress)
}

/// Same as [`export`] but with the page source supplied by the caller.
pub fn export_with(
    params: &RequestParams,
    source: &mut dyn WeekSource,
    crawl: &CrawlOptions,
    export: &ExportOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ExportSummary> {
    // Nothing goes over the wire before this passes.
    params.validate()?;

    logf!(
        "Export: Begin {} → {} user={}",
        params.start_date,
        params.end_date,
        params.user_id
    );

    let weeks_fetched = scrape::week_dates(params.start_date, params.end_date).len();
    let pages = scrape::collect_weeks(
        params.start_date,
        params.end_date,
        source,
        crawl,
        progress.as_mut().map(|p| &mut **p as &mut dyn Progress),
    );

    let ds = aggregate::build_dataset(&pages).inspect_err(|e| loge!("Export: Aborted: {e}"))?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Escribiendo {} tarea(s) × {} día(s)…", ds.row_count(), ds.day_headers().len()));
    }

    let path = file::write_xlsx(export.out_path(), &ds)?;
    logf!("Export: OK rows={} headers={} → {}", ds.row_count(), ds.header_count(), path.display());

    Ok(ExportSummary {
        path,
        weeks_fetched,
        weeks_with_data: pages.len(),
        tasks: ds.row_count(),
        day_columns: ds.day_headers().len(),
    })
}
