//! Application handlers.
//!
//! Command handlers that orchestrate the issuance pipeline over the ports.

pub mod decree;

pub use decree::{
    IssuanceSettings, IssueDecreeCommand, IssueDecreeError, IssueDecreeHandler,
    IssueDecreeResult, SeedSequenceCommand, SeedSequenceError, SeedSequenceHandler,
    SeedSequenceResult,
};
