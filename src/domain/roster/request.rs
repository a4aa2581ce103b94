//! Raw decree request as submitted by the issuing office.
//!
//! Every list may be absent or `null` in the payload; both are read as empty.

use serde::{Deserialize, Deserializer, Serialize};

/// Reads `null` as the type's default instead of failing.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whether a display name carries any visible text.
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// A leadership name with the casing variants the template prints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaderName(#[serde(deserialize_with = "nullable")] String);

impl LeaderName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name as entered, trimmed.
    pub fn as_written(&self) -> &str {
        self.0.trim()
    }

    pub fn upper(&self) -> String {
        self.as_written().to_uppercase()
    }

    /// Title Case per whitespace-separated word; honorifics like `H.` keep their dot.
    pub fn title(&self) -> String {
        self.as_written()
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_blank(&self) -> bool {
        is_blank(&self.0)
    }
}

/// A department with its coordinator and members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Department {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub coordinator: String,
    #[serde(deserialize_with = "nullable")]
    pub members: Vec<String>,
}

/// An institution with its director, secretary and members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Institution {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub director: String,
    #[serde(deserialize_with = "nullable")]
    pub secretary: String,
    #[serde(deserialize_with = "nullable")]
    pub members: Vec<String>,
}

/// A division of the paramilitary unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Division {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub head: String,
    #[serde(deserialize_with = "nullable")]
    pub members: Vec<String>,
}

/// The paramilitary unit attached to the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamilitaryUnit {
    #[serde(deserialize_with = "nullable")]
    pub commander: String,
    #[serde(deserialize_with = "nullable")]
    pub deputy_commanders: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub divisions: Vec<Division>,
}

/// Everything needed to issue one decree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecreeRequest {
    /// Administrative area the decree concerns; also the record lookup key.
    #[serde(deserialize_with = "nullable")]
    pub area_name: String,

    /// Numbers of the letters this decree responds to.
    #[serde(deserialize_with = "nullable")]
    pub reference_numbers: Vec<String>,

    /// Start of the service period, `YYYY-MM-DD`.
    #[serde(deserialize_with = "nullable")]
    pub period_start: String,

    pub chair: LeaderName,
    pub secretary: LeaderName,
    pub treasurer: LeaderName,

    #[serde(deserialize_with = "nullable")]
    pub protectors: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub advisors: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub deputy_chairs: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub deputy_secretaries: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub deputy_treasurers: Vec<String>,

    #[serde(deserialize_with = "nullable")]
    pub departments: Vec<Department>,
    #[serde(deserialize_with = "nullable")]
    pub institutions: Vec<Institution>,
    #[serde(deserialize_with = "nullable")]
    pub paramilitary: ParamilitaryUnit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_deserialize_as_empty() {
        let request: DecreeRequest =
            serde_json::from_str(r#"{ "area_name": "Sample District" }"#).unwrap();

        assert_eq!(request.area_name, "Sample District");
        assert!(request.protectors.is_empty());
        assert!(request.departments.is_empty());
        assert!(request.paramilitary.divisions.is_empty());
        assert!(request.chair.is_blank());
    }

    #[test]
    fn null_lists_deserialize_as_empty() {
        let json = r#"{
            "area_name": "Sample District",
            "advisors": null,
            "chair": null,
            "departments": [{ "name": "Dept X", "members": null }],
            "paramilitary": null
        }"#;
        let request: DecreeRequest = serde_json::from_str(json).unwrap();

        assert!(request.advisors.is_empty());
        assert!(request.chair.is_blank());
        assert_eq!(request.departments.len(), 1);
        assert!(request.departments[0].members.is_empty());
        assert!(request.departments[0].coordinator.is_empty());
        assert_eq!(request.paramilitary, ParamilitaryUnit::default());
    }

    #[test]
    fn leader_name_variants() {
        let name = LeaderName::new("  h. ahmad FAUZI ");
        assert_eq!(name.as_written(), "h. ahmad FAUZI");
        assert_eq!(name.upper(), "H. AHMAD FAUZI");
        assert_eq!(name.title(), "H. Ahmad Fauzi");
    }

    #[test]
    fn leader_name_collapses_inner_whitespace_in_title() {
        assert_eq!(LeaderName::new("siti   aminah").title(), "Siti Aminah");
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" A "));
    }
}
