//! Arithmetic (tabular) Islamic calendar.
//!
//! Uses the civil epoch (1 Muharram 1 AH = Julian Day Number 1948440) and the
//! 30-year leap cycle {2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29}. Months
//! alternate 30/29 days, with Dzulhijjah gaining a day in leap years.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// JDN of 1 Muharram 1 AH (civil epoch).
const ISLAMIC_EPOCH_JDN: i64 = 1_948_440;

/// Offset between chrono's day count from 0001-01-01 (day 1) and the JDN.
const CE_TO_JDN: i64 = 1_721_425;

/// A date in the Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i64,
    /// 1 = Muharram .. 12 = Dzulhijjah
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    /// Converts a Gregorian date into the tabular Hijri calendar.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        from_jdn(i64::from(date.num_days_from_ce()) + CE_TO_JDN)
    }

    /// Converts this Hijri date back to Gregorian.
    ///
    /// Returns `None` for dates outside chrono's supported range.
    pub fn to_gregorian(&self) -> Option<NaiveDate> {
        let days = to_jdn(self.year, self.month, self.day) - CE_TO_JDN;
        i32::try_from(days)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
    }

    /// Whether the Hijri year has 355 days.
    pub fn is_leap_year(year: i64) -> bool {
        (14 + 11 * year).rem_euclid(30) < 11
    }
}

fn to_jdn(year: i64, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    // ceil(29.5 * (month - 1))
    let month_days = (59 * (month - 1) + 1) / 2;
    i64::from(day)
        + month_days
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + ISLAMIC_EPOCH_JDN
        - 1
}

fn from_jdn(jdn: i64) -> HijriDate {
    let year = (30 * (jdn - ISLAMIC_EPOCH_JDN) + 10_646).div_euclid(10_631);
    let into_year = jdn - (29 + to_jdn(year, 1, 1));
    let month = (ceil_div(2 * into_year, 59) + 1).clamp(1, 12);
    let month = u32::try_from(month).unwrap_or(1);
    let day = jdn - to_jdn(year, month, 1) + 1;

    HijriDate {
        year,
        month,
        day: u32::try_from(day).unwrap_or(1),
    }
}

fn ceil_div(a: i64, b: i64) -> i64 {
    -((-a).div_euclid(b))
}
