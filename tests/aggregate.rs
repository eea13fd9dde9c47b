// tests/aggregate.rs
use julia_scrape::aggregate::{build_dataset, merge_pages, sorted_days};
use julia_scrape::data::{DayColumn, TaskRecord, WeekDay, WeekPage, FIXED_HEADERS};
use julia_scrape::error::Error;
use julia_scrape::specs::perweek::parse_page;

fn wd(day: &str, hours: &str) -> WeekDay {
    WeekDay { day: day.into(), date: String::new(), hours: hours.into() }
}

fn task(id: &str, name: &str, days: Vec<WeekDay>) -> TaskRecord {
    TaskRecord {
        task_id: id.into(),
        task_name: name.into(),
        project_ref: "PJ1".into(),
        project_name: "Proyecto".into(),
        client: "Cliente".into(),
        task_type: "Dev".into(),
        time_dedicated: "1:00".into(),
        progress: "0 %".into(),
        week_days: days,
    }
}

fn page(tasks: Vec<TaskRecord>) -> WeekPage {
    let day_columns = tasks
        .first()
        .map(|t| t.week_days.iter().map(|w| DayColumn { day: w.day.clone(), date: w.date.clone() }).collect())
        .unwrap_or_default();
    WeekPage { day_columns, tasks }
}

#[test]
fn two_weeks_same_task_one_row_two_columns() {
    let pages = vec![
        page(vec![task("T1", "Tarea", vec![wd("lun01/07/24", "2:00")])]),
        page(vec![task("T1", "Tarea", vec![wd("lun08/07/24", "3:00")])]),
    ];
    let ds = build_dataset(&pages).unwrap();
    assert_eq!(ds.rows.len(), 1);
    assert_eq!(ds.day_headers(), ["lun01/07/24", "lun08/07/24"]);
    assert_eq!(&ds.rows[0][7..], ["2:00", "3:00"]);
}

#[test]
fn day_columns_are_chronological_regardless_of_fetch_order() {
    let pages = vec![
        page(vec![task("A", "a", vec![wd("lun08/07/24", "1:00")])]),
        page(vec![task("B", "b", vec![wd("vie28/06/24", "1:00"), wd("lun01/07/24", "")])]),
        page(vec![task("C", "c", vec![wd("lun06/01/25", "1:00")])]),
    ];
    let ds = build_dataset(&pages).unwrap();
    assert_eq!(ds.day_headers(), ["vie28/06/24", "lun01/07/24", "lun08/07/24", "lun06/01/25"]);
}

#[test]
fn absent_day_is_an_empty_cell_not_a_missing_column() {
    let pages = vec![page(vec![
        task("A", "a", vec![wd("lun01/07/24", "2:00")]),
        task("B", "b", vec![wd("mar02/07/24", "1:00")]),
    ])];
    let ds = build_dataset(&pages).unwrap();
    assert_eq!(ds.headers.len(), FIXED_HEADERS.len() + 2);
    for row in &ds.rows {
        assert_eq!(row.len(), ds.headers.len());
    }
    assert_eq!(&ds.rows[0][7..], ["2:00", ""]);
    assert_eq!(&ds.rows[1][7..], ["", "1:00"]);
}

#[test]
fn metadata_comes_from_first_sighting() {
    let mut later = task("T1", "Renamed", vec![wd("lun08/07/24", "3:00")]);
    later.progress = "90 %".into();
    later.project_name = "Otro".into();
    let pages = vec![
        page(vec![task("T1", "Original", vec![wd("lun01/07/24", "2:00")])]),
        page(vec![later]),
    ];
    let ds = build_dataset(&pages).unwrap();
    let row = &ds.rows[0];
    assert_eq!(row[0], "PJ1");
    assert_eq!(row[1], "Original");
    assert_eq!(row[2], "Proyecto");
    assert_eq!(row[5], "0 %");
}

#[test]
fn duplicate_day_after_merge_takes_first_entry() {
    let pages = vec![
        page(vec![task("T1", "t", vec![wd("lun01/07/24", "")])]),
        page(vec![task("T1", "t", vec![wd("lun01/07/24", "5:00")])]),
        page(vec![task("T2", "u", vec![wd("lun01/07/24", "1:00")])]),
        page(vec![task("T2", "u", vec![wd("lun01/07/24", "7:00")])]),
    ];
    let ds = build_dataset(&pages).unwrap();
    assert_eq!(ds.day_headers(), ["lun01/07/24"]);
    // first match is empty → empty, later entries are not consulted
    assert_eq!(ds.rows[0][7], "");
    assert_eq!(ds.rows[1][7], "1:00");
}

#[test]
fn rows_follow_first_sighting_order() {
    let pages = vec![
        page(vec![task("Z", "z", vec![]), task("A", "a", vec![])]),
        page(vec![task("M", "m", vec![]), task("Z", "z", vec![])]),
    ];
    let merged = merge_pages(&pages);
    let ids: Vec<&str> = merged.keys().map(|k| k.as_str()).collect();
    assert_eq!(ids, ["Z", "A", "M"]);
}

#[test]
fn malformed_label_is_fatal() {
    let pages = vec![page(vec![
        task("A", "a", vec![wd("lun01/07/24", "1:00")]),
        task("B", "b", vec![wd("Monday", "1:00")]),
    ])];
    match build_dataset(&pages) {
        Err(Error::DayLabel(label)) => assert_eq!(label, "Monday"),
        other => panic!("expected DayLabel error, got {other:?}"),
    }
}

#[test]
fn fixture_weeks_merge_end_to_end() {
    let pages = vec![
        parse_page(include_str!("fixtures/perweek_w1.html")).unwrap(),
        parse_page(include_str!("fixtures/perweek_w2.html")).unwrap(),
    ];
    let merged = merge_pages(&pages);
    assert_eq!(merged.len(), 4); // 101, 102, 201, 301
    assert_eq!(sorted_days(&merged).unwrap().len(), 10);

    let ds = build_dataset(&pages).unwrap();
    assert_eq!(ds.rows.len(), 4);
    assert_eq!(ds.headers.len(), 7 + 10);

    let t101 = &ds.rows[0];
    assert_eq!(t101[1], "Maquetación home");
    assert_eq!(t101[2], "Portal de clientes");
    assert_eq!(t101[6], "12:30");
    let lun08 = ds.headers.iter().position(|h| h == "lun08/07/24").unwrap();
    assert_eq!(t101[lun08], "3:00");
    let lun01 = ds.headers.iter().position(|h| h == "lun01/07/24").unwrap();
    assert_eq!(t101[lun01], "2:00");
}
