//! Validity window of an issued decree.

use chrono::{Months, NaiveDate};

use crate::domain::calendar::parse_date;

/// Start and end of the service period a decree authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityPeriod {
    pub starts_on: NaiveDate,
    pub expires_on: NaiveDate,
}

impl ValidityPeriod {
    /// Derives the period from the requested start date.
    ///
    /// When `period_start` cannot be parsed the issuance date is the start.
    /// Feb 29 starts land on Feb 28 in non-leap expiry years.
    pub fn from_request(period_start: &str, issued_on: NaiveDate, years: u32) -> Self {
        let starts_on = parse_date(period_start).unwrap_or(issued_on);
        let expires_on = starts_on
            .checked_add_months(Months::new(years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MAX);
        Self {
            starts_on,
            expires_on,
        }
    }
}
