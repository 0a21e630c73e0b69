//! Display badge for a member's status.
use shared::{BadgeVariant, StatusBadge};

use crate::domain::models::MemberStatus;

/// Map a status to its badge. Unrecognized tags fall back to the active badge.
pub fn badge_for(status: &MemberStatus) -> StatusBadge {
    let (label, variant) = match status {
        MemberStatus::Warning => ("Warning", BadgeVariant::Secondary),
        MemberStatus::Refund => ("Refund", BadgeVariant::Destructive),
        MemberStatus::Active | MemberStatus::Unrecognized(_) => ("Active", BadgeVariant::Default),
    };
    StatusBadge {
        label: label.to_string(),
        variant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(badge_for(&MemberStatus::Active).label, "Active");
        assert_eq!(badge_for(&MemberStatus::Active).variant, BadgeVariant::Default);
        assert_eq!(badge_for(&MemberStatus::Warning).variant, BadgeVariant::Secondary);
        assert_eq!(badge_for(&MemberStatus::Refund).label, "Refund");
        assert_eq!(badge_for(&MemberStatus::Refund).variant, BadgeVariant::Destructive);
    }

    #[test]
    fn test_unknown_status_falls_back_to_active() {
        let status = MemberStatus::from_tag("on-leave");
        assert_eq!(badge_for(&status), badge_for(&MemberStatus::Active));
    }
}
