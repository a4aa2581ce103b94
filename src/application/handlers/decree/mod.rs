//! Decree command handlers.

mod issue_decree;
mod seed_sequence;

pub use issue_decree::{
    IssuanceSettings, IssueDecreeCommand, IssueDecreeError, IssueDecreeHandler,
    IssueDecreeResult,
};
pub use seed_sequence::{
    SeedSequenceCommand, SeedSequenceError, SeedSequenceHandler, SeedSequenceResult,
};
