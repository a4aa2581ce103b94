//! Field map merged into the decree template.
//!
//! Field names match the placeholders authored in the decree template. List
//! fields are arrays of single-key objects so the template's repetition
//! regions can address each line by name.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::domain::calendar::{format_date_str, format_gregorian, IssuanceDates};
use crate::domain::numbering::IssuedIdentifier;
use crate::domain::roster::{
    DecreeRequest, LeaderName, NormalizedDepartment, NormalizedDivision, NormalizedInstitution,
    NormalizedParamilitary, NormalizedRoster,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedItem {
    pub formatted_item: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameItem {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberItem {
    pub member: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeputyItem {
    pub deputy: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceItem {
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentItem {
    pub name: String,
    pub coordinator: String,
    pub members: Vec<MemberItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstitutionItem {
    pub name: String,
    pub director: String,
    pub secretary: String,
    pub members: Vec<MemberItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivisionItem {
    pub name: String,
    pub head: String,
    pub members: Vec<MemberItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamilitaryItem {
    pub commander: String,
    pub deputies: Vec<DeputyItem>,
    pub divisions: Vec<DivisionItem>,
}

/// Everything the template can print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecreeFields {
    pub decree_number: String,
    pub area_name: String,
    pub area_name_upper: String,
    pub reference_numbers: Vec<ReferenceItem>,
    pub period_start: String,
    pub period_end: String,
    pub issued_gregorian: String,
    pub issued_hijri: String,

    pub chair_name: String,
    pub chair_name_upper: String,
    pub chair_name_title: String,
    pub secretary_name: String,
    pub secretary_name_upper: String,
    pub secretary_name_title: String,
    pub treasurer_name: String,
    pub treasurer_name_upper: String,
    pub treasurer_name_title: String,

    pub protectors: Vec<FormattedItem>,
    pub advisors: Vec<FormattedItem>,
    pub deputy_chairs: Vec<NameItem>,
    pub deputy_secretaries: Vec<NameItem>,
    pub deputy_treasurers: Vec<NameItem>,
    #[serde(rename = "departemen")]
    pub departments: Vec<DepartmentItem>,
    pub institutions: Vec<InstitutionItem>,
    /// Zero or one entry; an empty list hides the whole section.
    pub paramilitary: Vec<ParamilitaryItem>,
}

/// Inputs the field map is assembled from.
pub struct FieldSources<'a> {
    pub request: &'a DecreeRequest,
    pub roster: &'a NormalizedRoster,
    pub identifier: &'a IssuedIdentifier,
    pub issued: &'a IssuanceDates,
    pub expires_on: NaiveDate,
}

fn members(list: &[String]) -> Vec<MemberItem> {
    list.iter()
        .map(|m| MemberItem { member: m.clone() })
        .collect()
}

fn formatted(list: &[String]) -> Vec<FormattedItem> {
    list.iter()
        .map(|s| FormattedItem {
            formatted_item: s.clone(),
        })
        .collect()
}

fn named(list: &[String]) -> Vec<NameItem> {
    list.iter().map(|s| NameItem { name: s.clone() }).collect()
}

fn leader(name: &LeaderName) -> (String, String, String) {
    (name.as_written().to_string(), name.upper(), name.title())
}

impl From<&NormalizedDepartment> for DepartmentItem {
    fn from(d: &NormalizedDepartment) -> Self {
        Self {
            name: d.name.clone(),
            coordinator: d.coordinator.clone(),
            members: members(&d.members),
        }
    }
}

impl From<&NormalizedInstitution> for InstitutionItem {
    fn from(i: &NormalizedInstitution) -> Self {
        Self {
            name: i.name.clone(),
            director: i.director.clone(),
            secretary: i.secretary.clone(),
            members: members(&i.members),
        }
    }
}

impl From<&NormalizedDivision> for DivisionItem {
    fn from(d: &NormalizedDivision) -> Self {
        Self {
            name: d.name.clone(),
            head: d.head.clone(),
            members: members(&d.members),
        }
    }
}

impl From<&NormalizedParamilitary> for ParamilitaryItem {
    fn from(p: &NormalizedParamilitary) -> Self {
        Self {
            commander: p.commander.clone(),
            deputies: p
                .deputies
                .iter()
                .map(|d| DeputyItem { deputy: d.clone() })
                .collect(),
            divisions: p.divisions.iter().map(DivisionItem::from).collect(),
        }
    }
}

impl DecreeFields {
    pub fn assemble(sources: FieldSources<'_>) -> Self {
        let FieldSources {
            request,
            roster,
            identifier,
            issued,
            expires_on,
        } = sources;

        let (chair_name, chair_name_upper, chair_name_title) = leader(&request.chair);
        let (secretary_name, secretary_name_upper, secretary_name_title) =
            leader(&request.secretary);
        let (treasurer_name, treasurer_name_upper, treasurer_name_title) =
            leader(&request.treasurer);
        let area_name = request.area_name.trim().to_string();

        Self {
            decree_number: identifier.to_string(),
            area_name_upper: area_name.to_uppercase(),
            area_name,
            reference_numbers: request
                .reference_numbers
                .iter()
                .map(|r| r.trim())
                .filter(|r| !r.is_empty())
                .map(|r| ReferenceItem {
                    reference: r.to_string(),
                })
                .collect(),
            // Shown as supplied when it is not a date; only the expiry falls
            // back to the issuance date.
            period_start: format_date_str(&request.period_start),
            period_end: format_gregorian(expires_on),
            issued_gregorian: issued.gregorian.clone(),
            issued_hijri: issued.hijri.clone(),
            chair_name,
            chair_name_upper,
            chair_name_title,
            secretary_name,
            secretary_name_upper,
            secretary_name_title,
            treasurer_name,
            treasurer_name_upper,
            treasurer_name_title,
            protectors: formatted(&roster.protectors),
            advisors: formatted(&roster.advisors),
            deputy_chairs: named(&roster.deputy_chairs),
            deputy_secretaries: named(&roster.deputy_secretaries),
            deputy_treasurers: named(&roster.deputy_treasurers),
            departments: roster.departments.iter().map(DepartmentItem::from).collect(),
            institutions: roster.institutions.iter().map(InstitutionItem::from).collect(),
            paramilitary: roster
                .paramilitary
                .iter()
                .map(ParamilitaryItem::from)
                .collect(),
        }
    }

    /// JSON form handed to the template engine.
    pub fn to_value(&self) -> Value {
        // Plain structs of strings and vectors always serialize.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
