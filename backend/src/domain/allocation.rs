//! Budget allocation of the group's total funds.
//!
//! Each bucket is rounded independently (`f64::round`, half away from zero).
//! The three parts are not renormalized, so their sum may drift from the total
//! by a unit or two.

use shared::AllocationSplit;

use crate::domain::models::{AllocationPolicy, EnrichedMember};

#[derive(Debug, Clone, Copy, Default)]
pub struct AllocationCalculator {
    policy: AllocationPolicy,
}

impl AllocationCalculator {
    pub fn new(policy: AllocationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AllocationPolicy {
        &self.policy
    }

    /// Sum of every member's savings
    pub fn total_funds(members: &[EnrichedMember]) -> i64 {
        members.iter().map(|m| m.total_saved).sum()
    }

    /// Split `total` into fuel, food and emergency amounts
    pub fn calculate(&self, total: i64) -> AllocationSplit {
        let total = total as f64;
        AllocationSplit {
            fuel: (total * self.policy.fuel).round() as i64,
            food: (total * self.policy.food).round() as i64,
            emergency: (total * self.policy.emergency).round() as i64,
        }
    }

    /// Whole-number percentages of each bucket, for display
    pub fn percentages(&self) -> (u32, u32, u32) {
        let pct = |fraction: f64| (fraction * 100.0).round() as u32;
        (
            pct(self.policy.fuel),
            pct(self.policy.food),
            pct(self.policy.emergency),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Contribution, MemberStatus};

    fn member_with_total(id: u32, total_saved: i64) -> EnrichedMember {
        EnrichedMember {
            id,
            name: format!("member {}", id),
            status: MemberStatus::Active,
            missed_dates: vec![],
            contributions: Vec::<Contribution>::new(),
            total_saved,
        }
    }

    #[test]
    fn test_default_split_of_3000() {
        let split = AllocationCalculator::default().calculate(3000);

        assert_eq!(split.fuel, 600);
        assert_eq!(split.food, 2250);
        assert_eq!(split.emergency, 150);
        assert_eq!(split.fuel + split.food + split.emergency, 3000);
    }

    #[test]
    fn test_zero_total() {
        let split = AllocationCalculator::default().calculate(0);
        assert_eq!(split, AllocationSplit { fuel: 0, food: 0, emergency: 0 });
    }

    #[test]
    fn test_rounding_drift_is_not_corrected() {
        // 0.2 * 10 = 2, 0.75 * 10 = 7.5 -> 8, 0.05 * 10 = 0.5 -> 1
        let split = AllocationCalculator::default().calculate(10);

        assert_eq!(split.fuel, 2);
        assert_eq!(split.food, 8);
        assert_eq!(split.emergency, 1);
        assert_eq!(split.fuel + split.food + split.emergency, 11);
    }

    #[test]
    fn test_split_stays_within_rounding_tolerance() {
        let calculator = AllocationCalculator::default();
        for total in (0..5000).step_by(7) {
            let split = calculator.calculate(total);
            let sum = split.fuel + split.food + split.emergency;
            assert!((sum - total).abs() <= 3, "total {} split to {}", total, sum);
        }
    }

    #[test]
    fn test_custom_policy() {
        let policy = AllocationPolicy::new(0.5, 0.3, 0.2).unwrap();
        let calculator = AllocationCalculator::new(policy);

        assert_eq!(
            calculator.calculate(1000),
            AllocationSplit { fuel: 500, food: 300, emergency: 200 }
        );
        assert_eq!(calculator.percentages(), (50, 30, 20));
    }

    #[test]
    fn test_total_funds() {
        let members = vec![member_with_total(1, 500), member_with_total(2, 400), member_with_total(3, 0)];
        assert_eq!(AllocationCalculator::total_funds(&members), 900);
        assert_eq!(AllocationCalculator::total_funds(&[]), 0);
    }

    #[test]
    fn test_default_percentages() {
        assert_eq!(AllocationCalculator::default().percentages(), (20, 75, 5));
    }
}
