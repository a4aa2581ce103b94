//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for one issuance run.
///
/// Distinct from the human-facing decree number: this one exists even when
/// issuance fails before a number is allocated, so logs can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecreeId(Uuid);

impl DecreeId {
    /// Creates a new random DecreeId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a DecreeId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DecreeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DecreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DecreeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decree_id_generates_unique_values() {
        let id1 = DecreeId::new();
        let id2 = DecreeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn decree_id_parses_from_string() {
        let uuid = Uuid::new_v4();
        let parsed: DecreeId = uuid.to_string().parse().unwrap();
        assert_eq!(parsed.as_uuid(), &uuid);
    }

    #[test]
    fn decree_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<DecreeId>().is_err());
    }

    #[test]
    fn decree_id_serializes_transparently() {
        let id = DecreeId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
