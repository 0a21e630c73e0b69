//! Derivation of per-date paid flags and savings totals.
//!
//! A roster lists, for each member, the dates they *missed*. Every expected
//! date that is not listed is treated as paid; the model has no notion of
//! "unknown" attendance. Missed-date entries are hand-edited, so the engine
//! tolerates noise:
//!
//! - blank entries (a stray separator in the roster) are skipped
//! - entries that are not an expected date, written exactly as `YYYY-MM-DD`,
//!   never match and are only reported
//!
//! The engine is a pure function of its inputs; running it twice on the same
//! roster yields identical output.

use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::domain::models::{
    parse_iso_date, Contribution, ContributionAmount, EnrichedMember, ExpectedDateSet, RawMember,
};

/// Turns raw roster members into enriched members
#[derive(Debug, Clone)]
pub struct DerivationEngine {
    dates: ExpectedDateSet,
    contribution_amount: ContributionAmount,
}

/// Result of normalizing one member's missed-date list
#[derive(Debug, Default)]
struct MissedDates {
    recognized: HashSet<NaiveDate>,
    unrecognized: Vec<String>,
}

impl DerivationEngine {
    pub fn new(dates: ExpectedDateSet, contribution_amount: ContributionAmount) -> Self {
        Self {
            dates,
            contribution_amount,
        }
    }

    /// Derive every member, preserving input order
    pub fn derive(&self, members: &[RawMember]) -> Vec<EnrichedMember> {
        let enriched: Vec<EnrichedMember> = members.iter().map(|m| self.derive_member(m)).collect();
        debug!(
            "Derived {} members over {} expected dates",
            enriched.len(),
            self.dates.len()
        );
        enriched
    }

    /// Derive a single member
    pub fn derive_member(&self, member: &RawMember) -> EnrichedMember {
        let missed = self.normalize_missed_dates(&member.missed_dates);
        for entry in &missed.unrecognized {
            warn!(
                "Member {} ({}) lists '{}' as missed, which is not an expected date; ignoring it",
                member.id, member.name, entry
            );
        }

        let contributions: Vec<Contribution> = self
            .dates
            .iter()
            .map(|date| Contribution {
                date: *date,
                paid: !missed.recognized.contains(date),
            })
            .collect();

        let paid_count = contributions.iter().filter(|c| c.paid).count() as i64;

        EnrichedMember {
            id: member.id,
            name: member.name.clone(),
            status: member.status.clone(),
            missed_dates: member.missed_dates.clone(),
            contributions,
            total_saved: paid_count * self.contribution_amount.value(),
        }
    }

    /// Missed-date entries of `member` that match no expected date.
    /// Blank entries are not reported.
    pub fn unrecognized_missed_dates(&self, member: &RawMember) -> Vec<String> {
        self.normalize_missed_dates(&member.missed_dates).unrecognized
    }

    fn normalize_missed_dates(&self, entries: &[String]) -> MissedDates {
        let mut missed = MissedDates::default();
        for entry in entries {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                continue;
            }
            match parse_iso_date(trimmed) {
                Some(date) if self.dates.contains(&date) => {
                    missed.recognized.insert(date);
                }
                _ => missed.unrecognized.push(entry.clone()),
            }
        }
        missed
    }
}
