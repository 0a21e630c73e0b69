//! # YAML Roster Repository
//!
//! Loads the contribution roster from a single YAML file. The file is read
//! once at startup; the tracker never writes it back.
//!
//! ## YAML Format
//!
//! ```yaml
//! contribution_amount: 100
//! dates:
//!   - "2026-02-01"
//!   - "2026-02-08"
//! allocation:          # optional, defaults to 0.20 / 0.75 / 0.05
//!   fuel: 0.20
//!   food: 0.75
//!   emergency: 0.05
//! rules:               # optional
//!   - "Miss 2 Sundays = Refund."
//! members:
//!   - id: 1
//!     name: Lex
//!     status: active   # optional, defaults to active
//!     missed:          # optional; blank or null entries are ignored
//!       - "2026-02-08"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::error::TrackerResult;
use crate::domain::models::{
    AllocationPolicy, ContributionAmount, ExpectedDateSet, MemberStatus, RawMember, Roster,
};

pub const DEFAULT_RULES: [&str; 1] = ["Miss 2 Sundays = Refund."];

/// On-disk representation of a roster, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterFile {
    pub contribution_amount: i64,
    pub dates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation: Option<AllocationPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,
    pub members: Vec<MemberRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub status: MemberStatus,
    #[serde(default)]
    pub missed: Vec<Option<String>>,
}

impl RosterFile {
    /// Validate the file contents into a domain roster
    pub fn into_roster(self) -> TrackerResult<Roster> {
        let dates = ExpectedDateSet::parse(&self.dates)?;
        let contribution_amount = ContributionAmount::new(self.contribution_amount)?;
        let allocation = self.allocation.unwrap_or_default();
        let members = self
            .members
            .into_iter()
            .map(|record| {
                RawMember::new(
                    record.id,
                    record.name,
                    record.status,
                    record.missed.into_iter().map(Option::unwrap_or_default),
                )
            })
            .collect();
        let rules = self
            .rules
            .unwrap_or_else(|| DEFAULT_RULES.iter().map(|r| r.to_string()).collect());

        Ok(Roster::new(dates, contribution_amount, allocation, members)?.with_rules(rules))
    }
}

/// File-backed roster source
#[derive(Debug, Clone)]
pub struct RosterRepository {
    path: PathBuf,
}

impl RosterRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and parse the roster file without validating it
    pub fn read(&self) -> TrackerResult<RosterFile> {
        let yaml_content = fs::read_to_string(&self.path)?;
        let file: RosterFile = serde_yaml::from_str(&yaml_content)?;
        debug!("Parsed roster file {:?}", self.path);
        Ok(file)
    }

    /// Read, parse and validate the roster file
    pub fn load(&self) -> TrackerResult<Roster> {
        let roster = self.read()?.into_roster()?;
        info!(
            "Loaded roster from {:?}: {} members, {} dates",
            self.path,
            roster.members.len(),
            roster.dates.len()
        );
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::TrackerError;
    use tempfile::TempDir;

    fn write_roster(dir: &TempDir, contents: &str) -> RosterRepository {
        let path = dir.path().join("roster.yaml");
        fs::write(&path, contents).unwrap();
        RosterRepository::new(path)
    }

    #[test]
    fn test_load_roster_file() {
        let dir = TempDir::new().unwrap();
        let repo = write_roster(
            &dir,
            r#"
contribution_amount: 100
dates: ["2026-02-01", "2026-02-08", "2026-02-15"]
members:
  - id: 1
    name: Lex
    missed: ["2026-02-08"]
  - id: 2
    name: Macabenta
    status: warning
    missed: [~, "", "2026-02-15"]
  - id: 3
    name: Elly
    status: paused
"#,
        );

        let roster = repo.load().unwrap();

        assert_eq!(roster.dates.len(), 3);
        assert_eq!(roster.contribution_amount.value(), 100);
        assert_eq!(roster.allocation, AllocationPolicy::default());
        assert_eq!(roster.rules, vec!["Miss 2 Sundays = Refund.".to_string()]);
        assert_eq!(roster.members[0].status, MemberStatus::Active);
        assert_eq!(roster.members[1].status, MemberStatus::Warning);
        assert_eq!(roster.members[1].missed_dates, vec!["", "", "2026-02-15"]);
        assert_eq!(roster.members[2].status, MemberStatus::Unrecognized("paused".to_string()));
        assert!(roster.members[2].missed_dates.is_empty());
    }

    #[test]
    fn test_custom_allocation_and_rules() {
        let dir = TempDir::new().unwrap();
        let repo = write_roster(
            &dir,
            r#"
contribution_amount: 50
dates: ["2026-02-01"]
allocation: { fuel: 0.5, food: 0.3, emergency: 0.2 }
rules: ["Pay before mass.", "  "]
members: []
"#,
        );

        let roster = repo.load().unwrap();
        assert_eq!(roster.allocation.fuel, 0.5);
        assert_eq!(roster.rules, vec!["Pay before mass.".to_string()]);
    }

    #[test]
    fn test_non_positive_amount_is_invalid_configuration() {
        let dir = TempDir::new().unwrap();
        let repo = write_roster(
            &dir,
            "contribution_amount: 0\ndates: [\"2026-02-01\"]\nmembers: []\n",
        );

        assert!(matches!(repo.load(), Err(TrackerError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let repo = RosterRepository::new(dir.path().join("absent.yaml"));

        assert!(matches!(repo.load(), Err(TrackerError::Io(_))));
    }

    #[test]
    fn test_malformed_yaml_is_format_error() {
        let dir = TempDir::new().unwrap();
        let repo = write_roster(&dir, "contribution_amount: [not, a, number]\n");

        assert!(matches!(repo.load(), Err(TrackerError::RosterFormat(_))));
    }
}
