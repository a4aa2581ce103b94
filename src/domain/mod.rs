//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, IDs, errors)
//! - `calendar` - Gregorian/Hijri conversion and date display
//! - `numbering` - Sequence scopes and composite decree numbers
//! - `roster` - Request roster model and normalization policies
//! - `decree` - Template fields, validity window, issuance outputs

pub mod calendar;
pub mod decree;
pub mod foundation;
pub mod numbering;
pub mod roster;
