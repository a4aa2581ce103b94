//! Decree Desk - Issuance pipeline for organizational decree letters
//!
//! This crate numbers decrees from atomic per-scope counters, dates them in
//! the Gregorian and Hijri calendars, normalizes the office-holder roster,
//! renders the decree template and writes the issuance back to the
//! administrative area record.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
