// src/core/sanitize.rs

/// Split a weekday header like "lun01/07/24\n7:30" into (day, date).
/// Both parts are trimmed; a missing second line yields an empty date.
pub fn split_day_header(text: &str) -> (String, String) {
    let mut parts = text.trim().split('\n').map(str::trim);
    let day = parts.next().unwrap_or_default();
    let date = parts.next().unwrap_or_default();
    (s!(day), s!(date))
}
