//! Dashboard view model for the savings tracker.
//!
//! Converts enriched members into the two layouts the tracker offers: a card
//! grid (one card per member, compact `MM/DD` date labels) and a table (one
//! row per member, `Mon D` column headers). Neither the layout nor the member
//! filter changes the underlying figures; the summary block always covers the
//! whole group.
//!
//! ## Formatting
//!
//! - Amounts are whole currency units with `,` thousands separators, except
//!   the table's per-member total which is shown ungrouped (`₱1500`)
//! - The currency symbol is configurable (defaults to `₱`)

use chrono::NaiveDate;
use shared::{
    ContributionMark, DashboardResponse, DateColumn, FormattedMember, FormattedSummary, ViewMode,
};

use crate::domain::member_directory::{FundsSummary, MemberDirectory};
use crate::domain::models::{EnrichedMember, MemberSelection};
use crate::domain::status_badge::badge_for;

/// Display preferences for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub currency_symbol: String,
    pub thousands_separator: char,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₱".to_string(),
            thousands_separator: ',',
        }
    }
}

#[derive(Clone, Default)]
pub struct DashboardService {
    config: DashboardConfig,
}

impl DashboardService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        Self { config }
    }

    /// Build the full dashboard for a selection and layout
    pub fn build(
        &self,
        directory: &MemberDirectory,
        selection: MemberSelection,
        view_mode: ViewMode,
    ) -> DashboardResponse {
        let selected = directory.select(selection);
        let columns = directory
            .dates()
            .iter()
            .map(|date| DateColumn {
                date: iso(date),
                label: self.date_label(date, view_mode),
            })
            .collect();

        DashboardResponse {
            view_mode,
            selection: selection.to_string(),
            matched: selected.matched(),
            summary: self.format_summary(&directory.summary()),
            columns,
            rows: selected
                .members
                .iter()
                .map(|member| self.format_member(member, view_mode))
                .collect(),
        }
    }

    pub fn format_member(&self, member: &EnrichedMember, view_mode: ViewMode) -> FormattedMember {
        FormattedMember {
            id: member.id,
            name: member.name.clone(),
            badge: badge_for(&member.status),
            formatted_total: match view_mode {
                ViewMode::Card => self.format_amount(member.total_saved),
                ViewMode::Table => self.format_plain_amount(member.total_saved),
            },
            raw_total: member.total_saved,
            marks: member
                .contributions
                .iter()
                .map(|c| ContributionMark {
                    date: iso(&c.date),
                    label: self.date_label(&c.date, view_mode),
                    paid: c.paid,
                })
                .collect(),
        }
    }

    pub fn format_summary(&self, summary: &FundsSummary) -> FormattedSummary {
        FormattedSummary {
            total_funds: summary.total_funds,
            formatted_total_funds: self.format_amount(summary.total_funds),
            allocation: summary.allocation,
            formatted_fuel: self.format_amount(summary.allocation.fuel),
            formatted_food: self.format_amount(summary.allocation.food),
            formatted_emergency: self.format_amount(summary.allocation.emergency),
            member_count: summary.member_count,
            formatted_contribution_amount: self.format_amount(summary.contribution_amount),
        }
    }

    /// `02/01` for cards, `Feb 1` for table headers
    pub fn date_label(&self, date: &NaiveDate, view_mode: ViewMode) -> String {
        match view_mode {
            ViewMode::Card => date.format("%m/%d").to_string(),
            ViewMode::Table => date.format("%b %-d").to_string(),
        }
    }

    /// Currency amount without thousands grouping
    pub fn format_plain_amount(&self, amount: i64) -> String {
        let sign = if amount < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.config.currency_symbol, amount.unsigned_abs())
    }

    pub fn format_amount(&self, amount: i64) -> String {
        let digits = amount.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.config.thousands_separator);
            }
            grouped.push(ch);
        }

        let sign = if amount < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.config.currency_symbol, grouped)
    }
}

fn iso(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
