//! Domain models for roster members.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standing of a member within the savings group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MemberStatus {
    #[default]
    Active,
    Warning,
    Refund,
    /// A tag the tracker does not know; displayed like `Active`
    Unrecognized(String),
}

impl MemberStatus {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "active" => MemberStatus::Active,
            "warning" => MemberStatus::Warning,
            "refund" => MemberStatus::Refund,
            _ => MemberStatus::Unrecognized(tag.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Warning => "warning",
            MemberStatus::Refund => "refund",
            MemberStatus::Unrecognized(tag) => tag,
        }
    }
}

impl From<String> for MemberStatus {
    fn from(tag: String) -> Self {
        MemberStatus::from_tag(&tag)
    }
}

impl From<MemberStatus> for String {
    fn from(status: MemberStatus) -> Self {
        status.tag().to_string()
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A member as entered in the roster, before any derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMember {
    pub id: u32,
    pub name: String,
    pub status: MemberStatus,
    /// Hand-edited list of missed dates; may contain blanks or typos
    pub missed_dates: Vec<String>,
}

impl RawMember {
    pub fn new<S: Into<String>>(
        id: u32,
        name: impl Into<String>,
        status: MemberStatus,
        missed_dates: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            missed_dates: missed_dates.into_iter().map(Into::into).collect(),
        }
    }
}

/// Paid flag for a single expected date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    pub date: NaiveDate,
    pub paid: bool,
}

/// A member with per-date paid flags and the amount saved so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedMember {
    pub id: u32,
    pub name: String,
    pub status: MemberStatus,
    pub missed_dates: Vec<String>,
    /// One entry per expected date, in expected-date order
    pub contributions: Vec<Contribution>,
    pub total_saved: i64,
}

impl EnrichedMember {
    pub fn paid_count(&self) -> usize {
        self.contributions.iter().filter(|c| c.paid).count()
    }

    pub fn missed_count(&self) -> usize {
        self.contributions.len() - self.paid_count()
    }

    /// Paid flag for `date`, or `None` when `date` is not an expected date
    pub fn paid_on(&self, date: &NaiveDate) -> Option<bool> {
        self.contributions
            .iter()
            .find(|c| c.date == *date)
            .map(|c| c.paid)
    }
}
