use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A member of the savings group with derived contribution data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    /// Status tag as written in the roster ("active", "warning", "refund", ...)
    pub status: String,
    /// Missed dates exactly as they appear in the roster
    pub missed_dates: Vec<String>,
    /// Paid flag per expected date (ISO 8601 keys)
    pub contributions: BTreeMap<String, bool>,
    /// Number of paid dates times the contribution amount
    pub total_saved: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberListResponse {
    pub members: Vec<Member>,
    /// "all" or the requested member id
    pub selection: String,
    /// False when a single member was requested and no member has that id
    pub matched: bool,
}

/// Budget split of the group's total funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSplit {
    pub fuel: i64,
    pub food: i64,
    pub emergency: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundsSummaryResponse {
    pub total_funds: i64,
    pub allocation: AllocationSplit,
    pub contribution_amount: i64,
    pub member_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedDatesResponse {
    pub dates: Vec<String>,
}

/// Visual emphasis of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadge {
    pub label: String,
    pub variant: BadgeVariant,
}

/// Layout requested by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Card,
    Table,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Card => write!(f, "card"),
            ViewMode::Table => write!(f, "table"),
        }
    }
}

/// Column header for one expected date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateColumn {
    /// ISO 8601 date
    pub date: String,
    /// Display label ("02/01" in card view, "Feb 1" in table view)
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionMark {
    pub date: String,
    pub label: String,
    pub paid: bool,
}

/// One member formatted for the card grid or the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedMember {
    pub id: u32,
    pub name: String,
    pub badge: StatusBadge,
    pub formatted_total: String,
    pub raw_total: i64,
    pub marks: Vec<ContributionMark>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedSummary {
    pub total_funds: i64,
    pub formatted_total_funds: String,
    pub allocation: AllocationSplit,
    pub formatted_fuel: String,
    pub formatted_food: String,
    pub formatted_emergency: String,
    pub member_count: usize,
    pub formatted_contribution_amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub view_mode: ViewMode,
    pub selection: String,
    pub matched: bool,
    pub summary: FormattedSummary,
    pub columns: Vec<DateColumn>,
    pub rows: Vec<FormattedMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesResponse {
    pub rules: Vec<String>,
}

/// A missed-date entry that matches none of the expected dates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnrecognizedMissedDate {
    pub member_id: u32,
    pub member_name: String,
    pub entry: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub unrecognized_missed_dates: Vec<UnrecognizedMissedDate>,
}
