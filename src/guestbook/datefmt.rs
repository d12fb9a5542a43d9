//! Fixed Indonesian date strings.
//!
//! The page shows long-form dates (`"Sabtu, 15 Januari 2000"`) and capture
//! timestamps (`"Senin, 1 September 2025 14.30"`). Only this one locale is
//! supported; the name tables are part of the UI text, not configuration.

use chrono::{DateTime, Datelike, Local, NaiveDate, Timelike, Weekday};

const WEEKDAYS: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAYS[day.num_days_from_monday() as usize]
}

/// Long-form date for a raw `YYYY-MM-DD` input.
///
/// Anything that does not parse is returned verbatim so the entry still
/// shows what the visitor typed; empty input stays empty.
pub fn long_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => format!(
            "{}, {} {} {}",
            weekday_name(date.weekday()),
            date.day(),
            MONTHS[date.month0() as usize],
            date.year()
        ),
        Err(_) => raw.to_string(),
    }
}

/// Capture-time stamp for an accepted entry, with minutes precision.
pub fn timestamp(at: DateTime<Local>) -> String {
    format!(
        "{}, {} {} {} {:02}.{:02}",
        weekday_name(at.weekday()),
        at.day(),
        MONTHS[at.month0() as usize],
        at.year(),
        at.hour(),
        at.minute()
    )
}
