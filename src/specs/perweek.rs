// src/specs/perweek.rs
//! Extraction rules for the weekly activity page (`perweek.php`).
//!
//! Page shape we rely on:
//! - Weekday headers: `.bold.hide0` … `.bold.hide4`. Text nodes only, so `lun<br>01/07/24` reads `lun01/07/24`;
//!   a literal newline separates an optional second line.
//! - One `<tr class="trforbreak">` per project: anchors are (ref, client), `span.secondary` is the name.
//! - Task rows carry `data-taskid`; they belong to the last project-break row above them.
//! - Recorded hours live in `td.hideN span.timesheetalreadyrecorded input[disabled]`'s `value`.
//!
//! Non-Responsibilities:
//! - **No networking.** Markup comes in as a string.
//! - **No merging across weeks.** See `aggregate`.

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::WEEKDAY_SLOTS;
use crate::core::html::{first_attr, first_text, has_class, is_selected, selector, text_all, text_of};
use crate::core::sanitize::split_day_header;
use crate::data::{DayColumn, TaskRecord, WeekPage};

const DEFAULT_PROGRESS: &str = "0 %";

/// Project context carried from a project-break row onto the task rows below it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Project {
    pub reference: String,
    pub name: String,
    pub client: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("{0}")]
    Selector(String),
}

/// Row walk state. Either we're collecting task rows under `P`,
/// or we're sitting on a project-break row that may replace `P`.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Scan {
    Tasks(Project),
    Break(Project),
}

impl Scan {
    fn project(&self) -> &Project {
        match self {
            Scan::Tasks(p) | Scan::Break(p) => p,
        }
    }

    /// A break row with fewer than two anchors keeps the previous context.
    fn on_break(self, row: ElementRef<'_>, sel: &Selectors) -> Scan {
        let prev = match self {
            Scan::Tasks(p) | Scan::Break(p) => p,
        };
        let links: Vec<ElementRef<'_>> = row.select(&sel.anchor).take(2).collect();
        let next = match links.as_slice() {
            [r, c] => Project {
                reference: text_of(*r),
                client: text_of(*c),
                name: text_all(row, &sel.secondary),
            },
            _ => prev,
        };
        Scan::Break(next)
    }

    fn on_row(self) -> Scan {
        match self {
            Scan::Tasks(p) | Scan::Break(p) => Scan::Tasks(p),
        }
    }
}

/// Everything compiled once per page.
struct Selectors {
    row: Selector,
    anchor: Selector,
    secondary: Selector,
    task_name: Selector,
    task_type: Selector,
    dedicated: Selector,
    option: Selector,
    slots: Vec<Selector>,
}

impl Selectors {
    fn new(slots: usize) -> Result<Self, ExtractError> {
        let css = |s: &str| selector(s).map_err(ExtractError::Selector);
        Ok(Self {
            row: css("tr")?,
            anchor: css("a")?,
            secondary: css("span.secondary")?,
            task_name: css("span.opacitymedium")?,
            task_type: css(r#"td[data-key="tipo_tarea"]"#)?,
            dedicated: css("td.right a")?,
            option: css("select option")?,
            slots: (0..slots)
                .map(|i| css(&format!("td.hide{i} span.timesheetalreadyrecorded input[disabled]")))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

/// Parse one weekly page into its day columns and task records (document order).
/// Rows without a usable `data-taskid` (missing or empty) are not tasks and are passed over.
pub fn parse_page(doc: &str) -> Result<WeekPage, ExtractError> {
    let html = Html::parse_document(doc);
    let day_columns = read_day_columns(&html)?;
    let sel = Selectors::new(day_columns.len())?;

    let mut tasks = Vec::new();
    let mut scan = Scan::Tasks(Project::default());

    for row in html.select(&sel.row) {
        if has_class(row, "trforbreak") {
            scan = scan.on_break(row, &sel);
            continue;
        }
        scan = scan.on_row();

        // Only an id that is present and non-empty makes a task row.
        let Some(task_id) = row.value().attr("data-taskid").filter(|id| !id.is_empty()) else {
            continue;
        };
        tasks.push(extract_task(row, task_id, scan.project(), &day_columns, &sel));
    }

    logd!("perweek: {} day column(s), {} task(s)", day_columns.len(), tasks.len());
    Ok(WeekPage { day_columns, tasks })
}

/// Up to five header cells, in slot order. Missing slots are simply skipped.
pub fn read_day_columns(html: &Html) -> Result<Vec<DayColumn>, ExtractError> {
    let mut out = Vec::with_capacity(WEEKDAY_SLOTS);
    for i in 0..WEEKDAY_SLOTS {
        let sel = selector(&format!(".bold.hide{i}")).map_err(ExtractError::Selector)?;
        if let Some(cell) = html.select(&sel).next() {
            let (day, date) = split_day_header(&text_of(cell));
            out.push(DayColumn { day, date });
        }
    }
    Ok(out)
}

fn extract_task(
    row: ElementRef<'_>,
    task_id: &str,
    project: &Project,
    days: &[DayColumn],
    sel: &Selectors,
) -> TaskRecord {
    let progress = row
        .select(&sel.option)
        .find(|o| is_selected(*o))
        .map(text_of)
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| s!(DEFAULT_PROGRESS));

    let week_days = days
        .iter()
        .zip(&sel.slots)
        .map(|(col, slot)| col.with_hours(first_attr(row, slot, "value").unwrap_or_default()))
        .collect();

    TaskRecord {
        task_id: s!(task_id),
        task_name: first_text(row, &sel.task_name),
        project_ref: project.reference.clone(),
        project_name: project.name.clone(),
        client: project.client.clone(),
        task_type: text_all(row, &sel.task_type),
        time_dedicated: first_text(row, &sel.dedicated),
        progress,
        week_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!("<html><body><table>{body}</table></body></html>")
    }

    #[test]
    fn break_row_with_one_anchor_keeps_context() {
        let doc = page(
            r#"<tr class="trforbreak"><td><a>P1</a><a>ACME</a><span class="secondary">Alpha</span></td></tr>
               <tr class="trforbreak"><td><a>only-one</a></td></tr>
               <tr data-taskid="9"><td><span class="opacitymedium">T</span></td></tr>"#,
        );
        let wp = parse_page(&doc).unwrap();
        assert_eq!(wp.tasks.len(), 1);
        assert_eq!(wp.tasks[0].project_ref, "P1");
        assert_eq!(wp.tasks[0].client, "ACME");
        assert_eq!(wp.tasks[0].project_name, "Alpha");
    }

    #[test]
    fn no_break_row_means_empty_project() {
        let doc = page(r#"<tr data-taskid="1"><td><span class="opacitymedium">T</span></td></tr>"#);
        let wp = parse_page(&doc).unwrap();
        assert_eq!(wp.tasks[0].project_ref, "");
        assert_eq!(wp.tasks[0].project_name, "");
        assert_eq!(wp.tasks[0].client, "");
        assert_eq!(wp.tasks[0].progress, "0 %");
        assert!(wp.tasks[0].week_days.is_empty());
    }

    #[test]
    fn empty_task_id_row_is_skipped_silently() {
        let doc = page(
            r#"<tr data-taskid=""><td>total</td></tr>
               <tr data-taskid="2"><td><span class="opacitymedium">ok</span></td></tr>"#,
        );
        let wp = parse_page(&doc).unwrap();
        assert_eq!(wp.tasks.len(), 1);
        assert_eq!(wp.tasks[0].task_id, "2");
    }

    #[test]
    fn unmarked_dropdown_reads_first_option() {
        let doc = page(
            r#"<tr data-taskid="3"><td><select><option>20 %</option><option>40 %</option></select></td></tr>
               <tr data-taskid="4"><td><select><option>20 %</option><option selected>40 %</option></select></td></tr>"#,
        );
        let wp = parse_page(&doc).unwrap();
        assert_eq!(wp.tasks[0].progress, "20 %");
        assert_eq!(wp.tasks[1].progress, "40 %");
    }

    #[test]
    fn extract_error_displays_selector_message() {
        let e = ExtractError::Selector(s!("bad selector `td[`"));
        assert_eq!(e.to_string(), "bad selector `td[`");
    }

    #[test]
    fn scan_state_transitions() {
        let s = Scan::Tasks(Project::default()).on_row();
        assert_eq!(s, Scan::Tasks(Project::default()));
        let p = Project { reference: s!("R"), ..Project::default() };
        assert_eq!(Scan::Break(p.clone()).on_row(), Scan::Tasks(p));
    }
}
