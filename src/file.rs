// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use rust_xlsxwriter::{Format, Workbook};

use crate::config::consts::SHEET_NAME;
use crate::data::DataSet;
use crate::error::{Error, Result};

/// Build the workbook in memory: one sheet, bold header row, every cell a string.
pub fn to_xlsx_bytes(ds: &DataSet) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (c, h) in ds.headers.iter().enumerate() {
        sheet.write_string_with_format(0, c as u16, h, &bold)?;
    }
    for (r, row) in ds.rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            sheet.write_string(r as u32 + 1, c as u16, cell)?;
        }
    }
    sheet.set_freeze_panes(1, 0)?;

    Ok(workbook.save_to_buffer()?)
}

/// Write the dataset to `path`, creating parent directories.
/// The workbook is fully built before the file is touched.
pub fn write_xlsx(path: &Path, ds: &DataSet) -> Result<PathBuf> {
    let bytes = to_xlsx_bytes(ds)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(path.to_path_buf())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
