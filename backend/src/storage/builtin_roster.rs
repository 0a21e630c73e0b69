//! Roster used when no roster file is configured.
use crate::domain::error::TrackerResult;
use crate::domain::models::{MemberStatus, Roster};

use super::roster_repository::{MemberRecord, RosterFile};

const CONTRIBUTION_AMOUNT: i64 = 100;

const DATES: [&str; 9] = [
    "2026-02-01", "2026-02-08", "2026-02-15", "2026-02-22",
    "2026-03-01", "2026-03-08", "2026-03-15", "2026-03-22", "2026-03-29",
];

fn record(id: u32, name: &str, missed: &[&str]) -> MemberRecord {
    MemberRecord {
        id,
        name: name.to_string(),
        status: MemberStatus::Active,
        missed: missed.iter().map(|d| Some(d.to_string())).collect(),
    }
}

/// The built-in roster as it would appear in a roster file
pub fn builtin_roster_file() -> RosterFile {
    let late_march = ["2026-03-08", "2026-03-15", "2026-03-22", "2026-03-29"];
    let all_march = ["2026-03-01", "2026-03-08", "2026-03-15", "2026-03-22", "2026-03-29"];

    // Macabenta's list carries a stray blank entry
    let mut macabenta = record(2, "Macabenta", &late_march);
    macabenta.missed.insert(0, None);

    RosterFile {
        contribution_amount: CONTRIBUTION_AMOUNT,
        dates: DATES.iter().map(|d| d.to_string()).collect(),
        allocation: None,
        rules: None,
        members: vec![
            record(1, "Lex", &late_march),
            macabenta,
            record(3, "Elly", &all_march),
            record(4, "Keith", &late_march),
            record(5, "Tababa", &all_march),
            record(6, "Kami", &all_march),
        ],
    }
}

pub fn builtin_roster() -> TrackerResult<Roster> {
    builtin_roster_file().into_roster()
}
