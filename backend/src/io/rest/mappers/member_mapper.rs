//! Mapper from domain members and summaries to shared DTOs.

use shared::{FundsSummaryResponse, Member, MemberListResponse, UnrecognizedMissedDate};
use std::collections::BTreeMap;

use crate::domain::member_directory::{FundsSummary, SelectedMembers};
use crate::domain::models::EnrichedMember;

pub struct MemberMapper;

impl MemberMapper {
    pub fn to_dto(domain: &EnrichedMember) -> Member {
        let contributions: BTreeMap<String, bool> = domain
            .contributions
            .iter()
            .map(|c| (c.date.format("%Y-%m-%d").to_string(), c.paid))
            .collect();

        Member {
            id: domain.id,
            name: domain.name.clone(),
            status: domain.status.tag().to_string(),
            missed_dates: domain.missed_dates.clone(),
            contributions,
            total_saved: domain.total_saved,
        }
    }

    pub fn to_member_list_dto(selected: &SelectedMembers<'_>) -> MemberListResponse {
        MemberListResponse {
            members: selected.members.iter().map(|m| Self::to_dto(m)).collect(),
            selection: selected.selection.to_string(),
            matched: selected.matched(),
        }
    }

    pub fn to_summary_dto(summary: &FundsSummary) -> FundsSummaryResponse {
        FundsSummaryResponse {
            total_funds: summary.total_funds,
            allocation: summary.allocation,
            contribution_amount: summary.contribution_amount,
            member_count: summary.member_count,
        }
    }

    pub fn to_unrecognized_dto(entries: Vec<(u32, String, String)>) -> Vec<UnrecognizedMissedDate> {
        entries
            .into_iter()
            .map(|(member_id, member_name, entry)| UnrecognizedMissedDate {
                member_id,
                member_name,
                entry,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Contribution, MemberStatus};
    use chrono::NaiveDate;

    #[test]
    fn test_to_dto() {
        let feb_1 = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let feb_8 = NaiveDate::from_ymd_opt(2026, 2, 8).unwrap();
        let domain = EnrichedMember {
            id: 7,
            name: "Lex".to_string(),
            status: MemberStatus::from_tag("on-leave"),
            missed_dates: vec!["2026-02-08".to_string(), "".to_string()],
            contributions: vec![
                Contribution { date: feb_1, paid: true },
                Contribution { date: feb_8, paid: false },
            ],
            total_saved: 100,
        };

        let dto = MemberMapper::to_dto(&domain);

        assert_eq!(dto.id, 7);
        assert_eq!(dto.status, "on-leave");
        assert_eq!(dto.missed_dates.len(), 2);
        assert_eq!(dto.contributions.get("2026-02-01"), Some(&true));
        assert_eq!(dto.contributions.get("2026-02-08"), Some(&false));
        assert_eq!(dto.total_saved, 100);
    }
}
