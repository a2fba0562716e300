use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Format with a user-supplied strftime pattern, rejecting patterns chrono
/// cannot render instead of panicking inside `Display`.
pub fn format_date(date: NaiveDate, fmt: &str) -> AppResult<String> {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::InvalidDate(format!("bad date format '{}'", fmt)));
    }
    Ok(date.format(fmt).to_string())
}

/// Long form used on detail pages, e.g. "Sat, 05 Dec 2026".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y").to_string()
}
