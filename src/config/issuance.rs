//! Issuance configuration

use chrono::FixedOffset;
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::numbering::IssuanceCodes;

/// Codes and policies applied to every issued decree
#[derive(Debug, Clone, Deserialize)]
pub struct IssuanceConfig {
    /// Issuing tier code, e.g. `PC`
    pub tier: String,

    /// Decree category code, e.g. `A.II`
    pub category: String,

    /// Service period code, e.g. `L-1`
    pub period: String,

    /// Organization code, e.g. `IX`
    pub org: String,

    /// Years a decree stays valid after its period start
    #[serde(default = "default_validity_years")]
    pub validity_years: u32,

    /// Hours east of UTC used to date issuance
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

impl IssuanceConfig {
    /// Validated identifier codes
    pub fn codes(&self) -> Result<IssuanceCodes, ValidationError> {
        IssuanceCodes::new(&self.tier, &self.category, &self.period, &self.org)
            .map_err(|e| ValidationError::InvalidIssuanceCode(e.to_string()))
    }

    /// Offset used to turn the issuance instant into a local date
    pub fn utc_offset(&self) -> Result<FixedOffset, ValidationError> {
        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(ValidationError::InvalidUtcOffset);
        }
        FixedOffset::east_opt(self.utc_offset_hours * 3600).ok_or(ValidationError::InvalidUtcOffset)
    }

    /// Validate issuance configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.codes()?;
        self.utc_offset()?;
        if self.validity_years == 0 || self.validity_years > 25 {
            return Err(ValidationError::InvalidValidityYears);
        }
        Ok(())
    }
}

fn default_validity_years() -> u32 {
    5
}

fn default_utc_offset_hours() -> i32 {
    7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IssuanceConfig {
        IssuanceConfig {
            tier: "PC".to_string(),
            category: "A.II".to_string(),
            period: "L-1".to_string(),
            org: "IX".to_string(),
            validity_years: default_validity_years(),
            utc_offset_hours: default_utc_offset_hours(),
        }
    }

    #[test]
    fn test_valid_config() {
        let config = config();
        assert!(config.validate().is_ok());
        assert_eq!(config.codes().unwrap().tier(), "PC");
        assert_eq!(config.utc_offset().unwrap().local_minus_utc(), 7 * 3600);
    }

    #[test]
    fn test_code_with_slash_rejected() {
        let config = IssuanceConfig {
            category: "A/II".to_string(),
            ..config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidIssuanceCode(_))
        ));
    }

    #[test]
    fn test_blank_code_rejected() {
        let config = IssuanceConfig {
            org: "  ".to_string(),
            ..config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validity_bounds() {
        let zero = IssuanceConfig {
            validity_years: 0,
            ..config()
        };
        let huge = IssuanceConfig {
            validity_years: 26,
            ..config()
        };
        assert!(matches!(zero.validate(), Err(ValidationError::InvalidValidityYears)));
        assert!(matches!(huge.validate(), Err(ValidationError::InvalidValidityYears)));
    }

    #[test]
    fn test_offset_out_of_range() {
        let config = IssuanceConfig {
            utc_offset_hours: 15,
            ..config()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidUtcOffset)));
    }
}
