//! Member directory for the savings tracker.
//!
//! Owns the roster and answers the questions a presentation layer asks:
//! every member, one member, the group total and its budget split. The
//! derivation runs at most once per directory; clones share the result.

use once_cell::sync::OnceCell;
use shared::AllocationSplit;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::allocation::AllocationCalculator;
use crate::domain::derivation::DerivationEngine;
use crate::domain::error::{TrackerError, TrackerResult};
use crate::domain::models::{EnrichedMember, ExpectedDateSet, MemberSelection, Roster};

/// Group-level figures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundsSummary {
    pub total_funds: i64,
    pub allocation: AllocationSplit,
    pub contribution_amount: i64,
    pub member_count: usize,
}

/// Members picked by a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedMembers<'a> {
    pub selection: MemberSelection,
    pub members: Vec<&'a EnrichedMember>,
}

impl SelectedMembers<'_> {
    /// False only when a single member was requested and not found
    pub fn matched(&self) -> bool {
        match self.selection {
            MemberSelection::All => true,
            MemberSelection::Member(_) => !self.members.is_empty(),
        }
    }
}

#[derive(Clone)]
pub struct MemberDirectory {
    roster: Arc<Roster>,
    engine: DerivationEngine,
    calculator: AllocationCalculator,
    enriched: Arc<OnceCell<Vec<EnrichedMember>>>,
}

impl MemberDirectory {
    pub fn new(roster: Roster) -> Self {
        let engine = DerivationEngine::new(roster.dates.clone(), roster.contribution_amount);
        let calculator = AllocationCalculator::new(roster.allocation);
        Self {
            roster: Arc::new(roster),
            engine,
            calculator,
            enriched: Arc::new(OnceCell::new()),
        }
    }

    pub fn dates(&self) -> &ExpectedDateSet {
        &self.roster.dates
    }

    pub fn calculator(&self) -> &AllocationCalculator {
        &self.calculator
    }

    pub fn rules(&self) -> &[String] {
        &self.roster.rules
    }

    pub fn contribution_amount(&self) -> i64 {
        self.roster.contribution_amount.value()
    }

    /// All members in roster order, derived on first use
    pub fn members(&self) -> &[EnrichedMember] {
        self.enriched.get_or_init(|| {
            info!(
                "Deriving contributions for {} members at {} per date",
                self.roster.members.len(),
                self.roster.contribution_amount.value()
            );
            self.engine.derive(&self.roster.members)
        })
    }

    /// Apply a selection filter. An unknown id selects nobody.
    pub fn select(&self, selection: MemberSelection) -> SelectedMembers<'_> {
        let members: Vec<&EnrichedMember> = match selection {
            MemberSelection::All => self.members().iter().collect(),
            MemberSelection::Member(id) => self.members().iter().filter(|m| m.id == id).collect(),
        };

        if let MemberSelection::Member(id) = selection {
            if members.is_empty() {
                warn!("No member with id {}, selection is empty", id);
            }
        }
        SelectedMembers { selection, members }
    }

    pub fn get_member(&self, id: u32) -> TrackerResult<&EnrichedMember> {
        self.members()
            .iter()
            .find(|m| m.id == id)
            .ok_or(TrackerError::MemberNotFound(id))
    }

    pub fn total_funds(&self) -> i64 {
        AllocationCalculator::total_funds(self.members())
    }

    pub fn allocation(&self) -> AllocationSplit {
        self.calculator.calculate(self.total_funds())
    }

    pub fn summary(&self) -> FundsSummary {
        let total_funds = self.total_funds();
        FundsSummary {
            total_funds,
            allocation: self.calculator.calculate(total_funds),
            contribution_amount: self.contribution_amount(),
            member_count: self.members().len(),
        }
    }

    /// `(id, name, entry)` for every missed-date entry that is not an expected date
    pub fn unrecognized_missed_dates(&self) -> Vec<(u32, String, String)> {
        self.roster
            .members
            .iter()
            .flat_map(|member| {
                self.engine
                    .unrecognized_missed_dates(member)
                    .into_iter()
                    .map(move |entry| (member.id, member.name.clone(), entry))
            })
            .collect()
    }

    pub fn is_derived(&self) -> bool {
        self.enriched.get().is_some()
    }
}
