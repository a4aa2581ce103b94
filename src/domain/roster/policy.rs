//! Declarative normalization rules, one policy per roster kind.

use serde::{Deserialize, Serialize};

use super::request::is_blank;

/// Every list the decree prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterKind {
    Protectors,
    Advisors,
    DeputyChairs,
    DeputySecretaries,
    DeputyTreasurers,
    Departments,
    Institutions,
    DeputyCommanders,
    Divisions,
}

/// When a group survives normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepGroupIf {
    /// Flat lists have no group wrapper to drop.
    Always,
    /// Kept when any identifying field or any member is non-blank.
    AnyFieldOrMemberPresent,
}

/// How a surviving member is written for the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberFormat {
    /// Trimmed name only.
    Bare,
    /// `"{name}\n"`
    LineBreak,
    /// `"{n}. {name}\n"`, 1-based over surviving members.
    OrdinalLineBreak,
}

impl MemberFormat {
    pub fn apply(self, ordinal: usize, name: &str) -> String {
        match self {
            MemberFormat::Bare => name.to_string(),
            MemberFormat::LineBreak => format!("{}\n", name),
            MemberFormat::OrdinalLineBreak => format!("{}. {}\n", ordinal, name),
        }
    }
}

/// Normalization rule set for one roster kind.
#[derive(Clone, Copy)]
pub struct RosterPolicy {
    pub keep_group_if: KeepGroupIf,
    pub member_filter: fn(&str) -> bool,
    pub member_format: MemberFormat,
}

impl std::fmt::Debug for RosterPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterPolicy")
            .field("keep_group_if", &self.keep_group_if)
            .field("member_format", &self.member_format)
            .finish_non_exhaustive()
    }
}

fn non_blank(name: &str) -> bool {
    !is_blank(name)
}

impl RosterPolicy {
    const fn flat(member_format: MemberFormat) -> Self {
        Self {
            keep_group_if: KeepGroupIf::Always,
            member_filter: non_blank,
            member_format,
        }
    }

    const fn grouped() -> Self {
        Self {
            keep_group_if: KeepGroupIf::AnyFieldOrMemberPresent,
            member_filter: non_blank,
            member_format: MemberFormat::LineBreak,
        }
    }

    /// Filters and formats a member list, preserving order.
    pub fn members(&self, members: &[String]) -> Vec<String> {
        members
            .iter()
            .map(|m| m.trim())
            .filter(|m| (self.member_filter)(m))
            .enumerate()
            .map(|(i, m)| self.member_format.apply(i + 1, m))
            .collect()
    }

    /// Decides whether a group with these identifying fields and members is kept.
    pub fn keeps_group(&self, identity: &[&str], members: &[String]) -> bool {
        match self.keep_group_if {
            KeepGroupIf::Always => true,
            KeepGroupIf::AnyFieldOrMemberPresent => {
                identity.iter().any(|field| !is_blank(field))
                    || members.iter().any(|m| (self.member_filter)(m.trim()))
            }
        }
    }
}

impl RosterKind {
    /// The rule set for this roster kind.
    pub const fn policy(self) -> RosterPolicy {
        match self {
            RosterKind::Protectors | RosterKind::Advisors => {
                RosterPolicy::flat(MemberFormat::OrdinalLineBreak)
            }
            RosterKind::DeputyChairs
            | RosterKind::DeputySecretaries
            | RosterKind::DeputyTreasurers => RosterPolicy::flat(MemberFormat::Bare),
            RosterKind::DeputyCommanders => RosterPolicy::flat(MemberFormat::LineBreak),
            RosterKind::Departments | RosterKind::Institutions | RosterKind::Divisions => {
                RosterPolicy::grouped()
            }
        }
    }
}
