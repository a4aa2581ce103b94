//! Locale formatting for decree dates.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::HijriDate;

/// Indonesian Gregorian month names.
pub const GREGORIAN_MONTHS: [&str; 12] = [
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

/// Hijri month names as written in Indonesian correspondence.
pub const HIJRI_MONTHS: [&str; 12] = [
    "Muharram",
    "Shafar",
    "Rabiul Awal",
    "Rabiul Akhir",
    "Jumadil Awal",
    "Jumadil Akhir",
    "Rajab",
    "Sya'ban",
    "Ramadhan",
    "Syawal",
    "Dzulqa'dah",
    "Dzulhijjah",
];

/// The issuance date rendered in both calendars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuanceDates {
    pub gregorian: String,
    pub hijri: String,
}

/// `"<day> <MonthName> <year>"` in the Gregorian calendar.
pub fn format_gregorian(date: NaiveDate) -> String {
    let month = GREGORIAN_MONTHS[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// `"<day> <MonthName> <year>"` in the Hijri calendar.
pub fn format_hijri(date: HijriDate) -> String {
    let index = (date.month.clamp(1, 12) - 1) as usize;
    format!("{} {} {}", date.day, HIJRI_MONTHS[index], date.year)
}

/// Formats the issuance date in both calendars.
pub fn format_issuance_dates(date: NaiveDate) -> IssuanceDates {
    IssuanceDates {
        gregorian: format_gregorian(date),
        hijri: format_hijri(HijriDate::from_gregorian(date)),
    }
}

/// Parses the date formats callers send for display-only fields.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Formats an arbitrary caller-supplied date string as a Gregorian display date.
///
/// Unparseable input is returned unchanged.
pub fn format_date_str(input: &str) -> String {
    match parse_date(input) {
        Some(date) => format_gregorian(date),
        None => input.to_string(),
    }
}
