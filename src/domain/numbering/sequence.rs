//! Sequence scopes and allocated sequence numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Key of one numbering series: decrees of a category issued by a tier in a year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceScope {
    pub tier: String,
    pub category: String,
    pub year: i32,
}

impl SequenceScope {
    pub fn new(tier: impl Into<String>, category: impl Into<String>, year: i32) -> Self {
        Self {
            tier: tier.into(),
            category: category.into(),
            year,
        }
    }
}

impl fmt::Display for SequenceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.tier, self.category, self.year)
    }
}

/// A positive position in a numbering series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SequenceNumber(u32);

impl SequenceNumber {
    /// Width the display form is zero-padded to.
    pub const PAD_WIDTH: usize = 3;

    /// Accepts the raw value read from a counter store.
    ///
    /// Zero, negative and overflowing values are rejected: a store returning
    /// them is broken and nothing may be issued under such a number.
    pub fn from_raw(raw: i64) -> Result<Self, ValidationError> {
        if raw < 1 {
            return Err(ValidationError::out_of_range(
                "sequence",
                1,
                i64::from(u32::MAX),
                raw,
            ));
        }
        u32::try_from(raw).map(Self).map_err(|_| {
            ValidationError::out_of_range("sequence", 1, i64::from(u32::MAX), raw)
        })
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Zero-padded display form, e.g. `007`. Wider numbers are not truncated.
    pub fn padded(&self) -> String {
        format!("{:0width$}", self.0, width = Self::PAD_WIDTH)
    }
}

impl TryFrom<i64> for SequenceNumber {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<SequenceNumber> for i64 {
    fn from(n: SequenceNumber) -> Self {
        i64::from(n.0)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.padded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_three_digits() {
        assert_eq!(SequenceNumber::from_raw(1).unwrap().padded(), "001");
        assert_eq!(SequenceNumber::from_raw(42).unwrap().padded(), "042");
        assert_eq!(SequenceNumber::from_raw(999).unwrap().padded(), "999");
    }

    #[test]
    fn does_not_truncate_wide_numbers() {
        assert_eq!(SequenceNumber::from_raw(1234).unwrap().to_string(), "1234");
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!(SequenceNumber::from_raw(0).is_err());
        assert!(SequenceNumber::from_raw(-3).is_err());
    }

    #[test]
    fn rejects_values_beyond_u32() {
        assert!(SequenceNumber::from_raw(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn padded_strings_sort_like_numbers_below_one_thousand() {
        let a = SequenceNumber::from_raw(9).unwrap().padded();
        let b = SequenceNumber::from_raw(10).unwrap().padded();
        assert!(a < b);
    }

    #[test]
    fn scope_displays_all_parts() {
        let scope = SequenceScope::new("PC", "A.II", 2025);
        assert_eq!(scope.to_string(), "PC/A.II/2025");
    }

    #[test]
    fn sequence_number_deserializes_through_validation() {
        let ok: SequenceNumber = serde_json::from_str("5").unwrap();
        assert_eq!(ok.value(), 5);
        assert!(serde_json::from_str::<SequenceNumber>("0").is_err());
    }
}
