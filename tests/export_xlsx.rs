// tests/export_xlsx.rs
use std::fs;

use julia_scrape::config::consts::{DEFAULT_FILE, XLSX_MIME};
use julia_scrape::config::options::ExportOptions;
use julia_scrape::data::DataSet;
use julia_scrape::file::{to_xlsx_bytes, write_xlsx};

fn sample() -> DataSet {
    DataSet {
        headers: vec!["Ref de proyecto".into(), "lun01/07/24".into()],
        rows: vec![vec!["PJ1".into(), "2:00".into()], vec!["PJ2".into(), "".into()]],
    }
}

#[test]
fn bytes_are_a_zip_container() {
    let bytes = to_xlsx_bytes(&sample()).unwrap();
    assert!(bytes.starts_with(b"PK\x03\x04"));
    assert!(XLSX_MIME.ends_with("spreadsheetml.sheet"));
}

#[test]
fn write_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a/b/c.xlsx");
    let written = write_xlsx(&path, &sample()).unwrap();
    assert_eq!(written, path);
    assert!(fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn empty_dataset_still_writes_header_only_sheet() {
    let ds = DataSet { headers: vec!["Ref de proyecto".into()], rows: vec![] };
    assert!(to_xlsx_bytes(&ds).is_ok());
}

#[test]
fn directory_hint_gets_default_filename() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();

    opts.set_path(dir.path().to_str().unwrap());
    assert_eq!(opts.out_path(), dir.path().join(DEFAULT_FILE));

    opts.set_path("");
    assert_eq!(opts.out_path().to_str().unwrap(), DEFAULT_FILE);

    let file = dir.path().join("mine.xlsx");
    opts.set_path(file.to_str().unwrap());
    assert_eq!(opts.out_path(), file);
}
