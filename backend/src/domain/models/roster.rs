//! Domain model for a validated contribution roster.
//!
//! A roster bundles everything the derivation needs: the expected dates, the
//! amount owed per date, the budget fractions and the raw member records.
//! All constructors validate their input so downstream code can treat a
//! `Roster` as well-formed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::member::RawMember;
use crate::domain::error::{TrackerError, TrackerResult};

/// Parse a date written exactly as `YYYY-MM-DD`. Unpadded forms such as
/// `2026-3-8` are rejected even though chrono would accept them.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    (date.format("%Y-%m-%d").to_string() == s).then_some(date)
}

/// Largest total the tracker accepts, so every amount stays exact as `f64`
pub const MAX_SAFE_TOTAL: i64 = 1 << 53;

/// Ordered, duplicate-free list of dates on which a contribution is expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedDateSet {
    dates: Vec<NaiveDate>,
}

impl ExpectedDateSet {
    /// Build a date set, requiring strictly increasing dates
    pub fn new(dates: Vec<NaiveDate>) -> TrackerResult<Self> {
        if dates.is_empty() {
            return Err(TrackerError::InvalidConfiguration(
                "expected date set cannot be empty".to_string(),
            ));
        }

        for pair in dates.windows(2) {
            if pair[1] <= pair[0] {
                return Err(TrackerError::InvalidConfiguration(format!(
                    "expected dates must be unique and in chronological order ({} follows {})",
                    pair[1], pair[0]
                )));
            }
        }

        Ok(Self { dates })
    }

    /// Parse ISO 8601 (`YYYY-MM-DD`) strings into a date set
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> TrackerResult<Self> {
        let dates = raw
            .iter()
            .map(|s| {
                let s = s.as_ref().trim();
                parse_iso_date(s).ok_or_else(|| {
                    TrackerError::InvalidConfiguration(format!(
                        "invalid expected date '{}', expected YYYY-MM-DD",
                        s
                    ))
                })
            })
            .collect::<TrackerResult<Vec<_>>>()?;
        Self::new(dates)
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.dates.binary_search(date).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }
}

/// Amount a member owes on each expected date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ContributionAmount(i64);

impl ContributionAmount {
    pub fn new(amount: i64) -> TrackerResult<Self> {
        if amount <= 0 {
            return Err(TrackerError::InvalidConfiguration(format!(
                "contribution amount must be positive, got {}",
                amount
            )));
        }
        Ok(Self(amount))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Fractions of the total funds assigned to each budget bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationPolicy {
    pub fuel: f64,
    pub food: f64,
    pub emergency: f64,
}

impl AllocationPolicy {
    const SUM_TOLERANCE: f64 = 1e-9;

    pub fn new(fuel: f64, food: f64, emergency: f64) -> TrackerResult<Self> {
        let policy = Self { fuel, food, emergency };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> TrackerResult<()> {
        for (name, fraction) in [("fuel", self.fuel), ("food", self.food), ("emergency", self.emergency)] {
            if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
                return Err(TrackerError::InvalidConfiguration(format!(
                    "{} fraction must be between 0 and 1, got {}",
                    name, fraction
                )));
            }
        }

        let sum = self.fuel + self.food + self.emergency;
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(TrackerError::InvalidConfiguration(format!(
                "allocation fractions must sum to 1.0, got {}",
                sum
            )));
        }
        Ok(())
    }
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            fuel: 0.20,
            food: 0.75,
            emergency: 0.05,
        }
    }
}

/// Validated configuration for one tracking session
#[derive(Debug, Clone)]
pub struct Roster {
    pub dates: ExpectedDateSet,
    pub contribution_amount: ContributionAmount,
    pub allocation: AllocationPolicy,
    pub members: Vec<RawMember>,
    /// Free-text group rules shown alongside the budget split
    pub rules: Vec<String>,
}

impl Roster {
    pub fn new(
        dates: ExpectedDateSet,
        contribution_amount: ContributionAmount,
        allocation: AllocationPolicy,
        members: Vec<RawMember>,
    ) -> TrackerResult<Self> {
        allocation.validate()?;

        let max_total = contribution_amount
            .value()
            .checked_mul(dates.len() as i64)
            .and_then(|per_member| per_member.checked_mul(members.len() as i64));
        match max_total {
            Some(total) if total <= MAX_SAFE_TOTAL => {}
            _ => {
                return Err(TrackerError::InvalidConfiguration(format!(
                    "contribution amount {} over {} dates for {} members exceeds the largest supported total {}",
                    contribution_amount.value(),
                    dates.len(),
                    members.len(),
                    MAX_SAFE_TOTAL
                )));
            }
        }

        let mut seen = HashSet::new();
        for member in &members {
            if member.name.trim().is_empty() {
                return Err(TrackerError::InvalidConfiguration(format!(
                    "member {} has a blank name",
                    member.id
                )));
            }
            if !seen.insert(member.id) {
                return Err(TrackerError::InvalidConfiguration(format!(
                    "duplicate member id {}",
                    member.id
                )));
            }
        }

        Ok(Self {
            dates,
            contribution_amount,
            allocation,
            members,
            rules: Vec::new(),
        })
    }

    pub fn with_rules(mut self, rules: Vec<String>) -> Self {
        self.rules = rules
            .into_iter()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::member::MemberStatus;

    fn member(id: u32, name: &str) -> RawMember {
        RawMember::new(id, name, MemberStatus::Active, Vec::<String>::new())
    }

    #[test]
    fn test_parse_expected_dates() {
        let set = ExpectedDateSet::parse(&["2026-02-01", " 2026-02-08 "]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&NaiveDate::from_ymd_opt(2026, 2, 8).unwrap()));
        assert!(!set.contains(&NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()));
    }

    #[test]
    fn test_expected_dates_must_be_ordered_and_unique() {
        let unordered = ExpectedDateSet::parse(&["2026-02-08", "2026-02-01"]);
        assert!(matches!(unordered, Err(TrackerError::InvalidConfiguration(_))));

        let duplicated = ExpectedDateSet::parse(&["2026-02-01", "2026-02-01"]);
        assert!(matches!(duplicated, Err(TrackerError::InvalidConfiguration(_))));

        let empty = ExpectedDateSet::parse::<&str>(&[]);
        assert!(matches!(empty, Err(TrackerError::InvalidConfiguration(_))));

        let garbage = ExpectedDateSet::parse(&["2026-02-30"]);
        assert!(matches!(garbage, Err(TrackerError::InvalidConfiguration(_))));

        let unpadded = ExpectedDateSet::parse(&["2026-3-8"]);
        assert!(matches!(unpadded, Err(TrackerError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_parse_iso_date_requires_canonical_form() {
        assert_eq!(parse_iso_date("2026-03-08"), NaiveDate::from_ymd_opt(2026, 3, 8));
        assert_eq!(parse_iso_date("2026-3-8"), None);
        assert_eq!(parse_iso_date("2026-03-1"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_roster_rejects_totals_beyond_safe_range() {
        let dates = ExpectedDateSet::parse(&["2026-02-01", "2026-02-08"]).unwrap();
        let members = vec![member(1, "Lex"), member(2, "Elly")];

        let huge = ContributionAmount::new(i64::MAX / 2 + 1).unwrap();
        let overflowing = Roster::new(dates.clone(), huge, AllocationPolicy::default(), members.clone());
        assert!(matches!(overflowing, Err(TrackerError::InvalidConfiguration(_))));

        // 2 dates * 2 members * amount just over 2^53 / 4
        let too_large = ContributionAmount::new(MAX_SAFE_TOTAL / 4 + 1).unwrap();
        let unsafe_total = Roster::new(dates.clone(), too_large, AllocationPolicy::default(), members.clone());
        assert!(matches!(unsafe_total, Err(TrackerError::InvalidConfiguration(_))));

        let at_limit = ContributionAmount::new(MAX_SAFE_TOTAL / 4).unwrap();
        assert!(Roster::new(dates, at_limit, AllocationPolicy::default(), members).is_ok());
    }

    #[test]
    fn test_contribution_amount_must_be_positive() {
        assert_eq!(ContributionAmount::new(100).unwrap().value(), 100);
        assert!(matches!(ContributionAmount::new(0), Err(TrackerError::InvalidConfiguration(_))));
        assert!(matches!(ContributionAmount::new(-5), Err(TrackerError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_allocation_policy_validation() {
        assert!(AllocationPolicy::default().validate().is_ok());
        assert!(AllocationPolicy::new(0.5, 0.3, 0.2).is_ok());
        assert!(AllocationPolicy::new(0.5, 0.5, 0.5).is_err());
        assert!(AllocationPolicy::new(-0.2, 1.0, 0.2).is_err());
        assert!(AllocationPolicy::new(f64::NAN, 0.5, 0.5).is_err());
    }

    #[test]
    fn test_roster_rejects_duplicate_ids_and_blank_names() {
        let dates = ExpectedDateSet::parse(&["2026-02-01"]).unwrap();
        let amount = ContributionAmount::new(100).unwrap();

        let duplicate = Roster::new(
            dates.clone(),
            amount,
            AllocationPolicy::default(),
            vec![member(1, "Lex"), member(1, "Elly")],
        );
        assert!(matches!(duplicate, Err(TrackerError::InvalidConfiguration(_))));

        let blank = Roster::new(dates, amount, AllocationPolicy::default(), vec![member(2, "  ")]);
        assert!(matches!(blank, Err(TrackerError::InvalidConfiguration(_))));
    }
}
