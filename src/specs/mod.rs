// src/specs/mod.rs
//! # Page extraction rules
//!
//! One submodule per endpoint. Each encodes *where the ground truth lives in the
//! HTML* of that page and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of fetched markup (no networking).
//! - **Selector choice** and per-row tolerance: a row that isn't a task is passed over,
//!   it never sinks the page.
//!
//! ## What does **not** live here
//! - **Fetching / pacing** (`core::net`, `scrape`).
//! - **Cross-week merging** (`aggregate`).
//! - **Export formatting** (`file`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → runner::export → scrape::collect_weeks → specs::perweek::parse_page
//!                                                  ↘ aggregate::build_dataset → file::write_xlsx
//! ```
//!
//! ## Testing notes
//! Specs are tested **offline** against captured fixtures (`tests/fixtures/`).
pub mod perweek;
