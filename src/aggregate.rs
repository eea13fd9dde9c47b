// src/aggregate.rs
//! Cross-week merge: one record per task id, one column per distinct day.
//!
//! Merge rules:
//! - Records are folded in fetch order. The first sighting of a task id seeds the entry;
//!   later sightings only contribute their weekday entries (metadata: first wins).
//! - Day columns are the distinct day labels seen anywhere, sorted by the calendar date
//!   encoded in the label (`"lun01/07/24"` → 2024-07-01). One bad label fails the whole run.
//! - A cell takes the hours of the *first* weekday entry with that label, or "".
use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use indexmap::IndexMap;
use regex::Regex;

use crate::data::{DataSet, TaskRecord, WeekPage, FIXED_HEADERS};
use crate::error::{Error, Result};

static DAY_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-zÁÉÍÓÚáéíóúñ]{3})(\d{2})/(\d{2})/(\d{2})$").expect("static day-label regex")
});

/// Tasks keyed by id, in order of first sighting.
pub type TaskMap = IndexMap<String, TaskRecord>;

pub fn merge_tasks<'a, I>(records: I) -> TaskMap
where
    I: IntoIterator<Item = &'a TaskRecord>,
{
    let mut map = TaskMap::new();
    for rec in records {
        match map.get_mut(&rec.task_id) {
            Some(acc) => acc.week_days.extend(rec.week_days.iter().cloned()),
            None => {
                map.insert(rec.task_id.clone(), rec.clone());
            }
        }
    }
    map
}

/// Flatten pages in fetch order and merge.
pub fn merge_pages(pages: &[WeekPage]) -> TaskMap {
    merge_tasks(pages.iter().flat_map(|p| p.tasks.iter()))
}

/// Parse a day label like `"lun01/07/24"` (3-letter weekday, DD/MM/YY, 20YY century).
pub fn parse_day_label(label: &str) -> Result<NaiveDate> {
    let caps = DAY_LABEL
        .captures(label)
        .ok_or_else(|| Error::DayLabel(s!(label)))?;
    let num = |i: usize| caps[i].parse::<u32>().map_err(|_| Error::DayLabel(s!(label)));
    let (day, month, year) = (num(2)?, num(3)?, num(4)?);
    NaiveDate::from_ymd_opt(2000 + year as i32, month, day).ok_or_else(|| Error::DayLabel(s!(label)))
}

/// Distinct day labels across all tasks, chronologically. Stable for equal dates.
pub fn sorted_days(tasks: &TaskMap) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut keyed = Vec::new();
    for wd in tasks.values().flat_map(|t| t.week_days.iter()) {
        if seen.insert(wd.day.as_str()) {
            keyed.push((parse_day_label(&wd.day)?, wd.day.clone()));
        }
    }
    keyed.sort_by_key(|(date, _)| *date);
    Ok(keyed.into_iter().map(|(_, day)| day).collect())
}

/// Project one merged task onto the fixed columns + the given day columns.
pub fn project_row(task: &TaskRecord, days: &[String]) -> Vec<String> {
    let mut row = Vec::with_capacity(FIXED_HEADERS.len() + days.len());
    row.extend([
        task.project_ref.clone(),
        task.task_name.clone(),
        task.project_name.clone(),
        task.client.clone(),
        task.task_type.clone(),
        task.progress.clone(),
        task.time_dedicated.clone(),
    ]);
    for day in days {
        let hours = task
            .week_days
            .iter()
            .find(|wd| &wd.day == day)
            .map(|wd| wd.hours.clone())
            .unwrap_or_default();
        row.push(hours);
    }
    row
}

/// Whole pipeline from fetched pages to the exportable table.
pub fn build_dataset(pages: &[WeekPage]) -> Result<DataSet> {
    let tasks = merge_pages(pages);
    let days = sorted_days(&tasks)?;

    let mut headers: Vec<String> = FIXED_HEADERS.iter().map(|h| s!(*h)).collect();
    headers.extend(days.iter().cloned());

    let rows = tasks.values().map(|t| project_row(t, &days)).collect();
    Ok(DataSet { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_accented_weekday() {
        assert_eq!(parse_day_label("mié03/07/24").unwrap(), NaiveDate::from_ymd_opt(2024, 7, 3).unwrap());
        assert_eq!(parse_day_label("lun01/07/24").unwrap(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    }

    #[test]
    fn rejects_bad_labels() {
        for bad in ["Monday", "lun1/07/24", "lun01/07/2024", "lu01/07/24", "", "lun31/02/24"] {
            assert!(matches!(parse_day_label(bad), Err(Error::DayLabel(_))), "{bad}");
        }
    }
}
