//! Decree numbering: counter scopes, sequence numbers and composite identifiers.

mod identifier;
mod sequence;

pub use identifier::{roman_month, IssuanceCodes, IssuedIdentifier};
pub use sequence::{SequenceNumber, SequenceScope};
