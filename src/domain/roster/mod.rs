//! Roster input model and normalization.
//!
//! - `request` - The nested roster as submitted
//! - `policy` - Per-roster-kind filtering and formatting rules
//! - `normalizer` - Applies the policies to produce template-ready lists

mod normalizer;
mod policy;
mod request;

pub use normalizer::{
    NormalizedDepartment, NormalizedDivision, NormalizedInstitution, NormalizedParamilitary,
    NormalizedRoster,
};
pub use policy::{KeepGroupIf, MemberFormat, RosterKind, RosterPolicy};
pub use request::{
    is_blank, DecreeRequest, Department, Division, Institution, LeaderName, ParamilitaryUnit,
};
