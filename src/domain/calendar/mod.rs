//! Calendar conversion and display formatting.
//!
//! Decrees carry their issuance date in both the Gregorian and the Hijri
//! calendar. Everything here is pure.

mod format;
mod hijri;

pub use format::{
    format_date_str, format_gregorian, format_hijri, format_issuance_dates, parse_date,
    IssuanceDates, GREGORIAN_MONTHS, HIJRI_MONTHS,
};
pub use hijri::HijriDate;
