//! Composite decree numbers.
//!
//! Layout: `{seq}/{tier}/{category}/{period}/{org}/{roman month}/{yy}`,
//! for example `007/PC/A.II/L-1/IX/III/25`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{SequenceNumber, SequenceScope};
use crate::domain::foundation::ValidationError;

const ROMAN_MONTHS: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// Upper-case Roman numeral for a month number (1..=12).
pub fn roman_month(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| ROMAN_MONTHS.get(i as usize).copied())
}

/// The fixed codes an issuing office stamps into every decree number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuanceCodes {
    tier: String,
    category: String,
    period: String,
    org: String,
}

impl IssuanceCodes {
    /// Validates and builds the code set.
    ///
    /// Codes are separated by `/` in the final number, so a code may not
    /// contain one and may not be blank.
    pub fn new(
        tier: impl Into<String>,
        category: impl Into<String>,
        period: impl Into<String>,
        org: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let codes = Self {
            tier: tier.into().trim().to_string(),
            category: category.into().trim().to_string(),
            period: period.into().trim().to_string(),
            org: org.into().trim().to_string(),
        };
        for (field, value) in [
            ("tier", &codes.tier),
            ("category", &codes.category),
            ("period", &codes.period),
            ("org", &codes.org),
        ] {
            if value.is_empty() {
                return Err(ValidationError::empty_field(field));
            }
            if value.contains('/') {
                return Err(ValidationError::invalid_format(field, "must not contain '/'"));
            }
        }
        Ok(codes)
    }

    pub fn tier(&self) -> &str {
        &self.tier
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    /// Counter scope these codes number within for the given year.
    pub fn scope_for_year(&self, year: i32) -> SequenceScope {
        SequenceScope::new(&self.tier, &self.category, year)
    }
}

/// A fully assembled decree number. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssuedIdentifier(String);

impl IssuedIdentifier {
    /// Assembles the decree number. Pure: identical inputs give identical output.
    pub fn format(sequence: SequenceNumber, codes: &IssuanceCodes, issued_on: NaiveDate) -> Self {
        // month() is always 1..=12
        let month = roman_month(issued_on.month()).unwrap_or("I");
        let yy = issued_on.year().rem_euclid(100);

        Self(format!(
            "{}/{}/{}/{}/{}/{}/{:02}",
            sequence.padded(),
            codes.tier,
            codes.category,
            codes.period,
            codes.org,
            month,
            yy
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File-system safe form: separators replaced with hyphens.
    pub fn file_stem(&self) -> String {
        self.0.replace('/', "-")
    }
}

impl fmt::Display for IssuedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
