//! Decree assembly: template fields, validity window and issuance outputs.

mod fields;
mod issued;
mod validity;

pub use fields::{
    DecreeFields, DepartmentItem, DeputyItem, DivisionItem, FieldSources, FormattedItem,
    InstitutionItem, MemberItem, NameItem, ParamilitaryItem, ReferenceItem,
};
pub use issued::{ArtifactRef, AreaIssuanceUpdate, CommitStatus, RenderedDecree};
pub use validity::ValidityPeriod;
