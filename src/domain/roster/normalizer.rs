//! Flattens the nested request roster into template-ready lists.

use serde::Serialize;

use super::policy::RosterKind;
use super::request::{is_blank, DecreeRequest, Department, Division, Institution, ParamilitaryUnit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedDepartment {
    pub name: String,
    pub coordinator: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedInstitution {
    pub name: String,
    pub director: String,
    pub secretary: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedDivision {
    pub name: String,
    pub head: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedParamilitary {
    pub commander: String,
    pub deputies: Vec<String>,
    pub divisions: Vec<NormalizedDivision>,
}

/// The roster with every blank entry removed and display formatting applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedRoster {
    pub protectors: Vec<String>,
    pub advisors: Vec<String>,
    pub deputy_chairs: Vec<String>,
    pub deputy_secretaries: Vec<String>,
    pub deputy_treasurers: Vec<String>,
    pub departments: Vec<NormalizedDepartment>,
    pub institutions: Vec<NormalizedInstitution>,
    /// `None` when the unit has nothing to print.
    pub paramilitary: Option<NormalizedParamilitary>,
}

impl NormalizedRoster {
    /// Normalizes every roster in the request. Never fails.
    pub fn from_request(request: &DecreeRequest) -> Self {
        Self {
            protectors: RosterKind::Protectors.policy().members(&request.protectors),
            advisors: RosterKind::Advisors.policy().members(&request.advisors),
            deputy_chairs: RosterKind::DeputyChairs.policy().members(&request.deputy_chairs),
            deputy_secretaries: RosterKind::DeputySecretaries
                .policy()
                .members(&request.deputy_secretaries),
            deputy_treasurers: RosterKind::DeputyTreasurers
                .policy()
                .members(&request.deputy_treasurers),
            departments: request
                .departments
                .iter()
                .filter_map(normalize_department)
                .collect(),
            institutions: request
                .institutions
                .iter()
                .filter_map(normalize_institution)
                .collect(),
            paramilitary: normalize_paramilitary(&request.paramilitary),
        }
    }
}

fn normalize_department(dept: &Department) -> Option<NormalizedDepartment> {
    let policy = RosterKind::Departments.policy();
    if !policy.keeps_group(&[dept.name.as_str(), dept.coordinator.as_str()], &dept.members) {
        return None;
    }
    Some(NormalizedDepartment {
        name: dept.name.trim().to_string(),
        coordinator: dept.coordinator.trim().to_string(),
        members: policy.members(&dept.members),
    })
}

fn normalize_institution(inst: &Institution) -> Option<NormalizedInstitution> {
    let policy = RosterKind::Institutions.policy();
    let identity = [
        inst.name.as_str(),
        inst.director.as_str(),
        inst.secretary.as_str(),
    ];
    if !policy.keeps_group(&identity, &inst.members) {
        return None;
    }
    Some(NormalizedInstitution {
        name: inst.name.trim().to_string(),
        director: inst.director.trim().to_string(),
        secretary: inst.secretary.trim().to_string(),
        members: policy.members(&inst.members),
    })
}

fn normalize_division(div: &Division) -> Option<NormalizedDivision> {
    let policy = RosterKind::Divisions.policy();
    if !policy.keeps_group(&[div.name.as_str(), div.head.as_str()], &div.members) {
        return None;
    }
    Some(NormalizedDivision {
        name: div.name.trim().to_string(),
        head: div.head.trim().to_string(),
        members: policy.members(&div.members),
    })
}

fn normalize_paramilitary(unit: &ParamilitaryUnit) -> Option<NormalizedParamilitary> {
    let deputies = RosterKind::DeputyCommanders
        .policy()
        .members(&unit.deputy_commanders);
    let divisions: Vec<_> = unit.divisions.iter().filter_map(normalize_division).collect();

    if is_blank(&unit.commander) && deputies.is_empty() && divisions.is_empty() {
        return None;
    }
    Some(NormalizedParamilitary {
        commander: unit.commander.trim().to_string(),
        deputies,
        divisions,
    })
}
