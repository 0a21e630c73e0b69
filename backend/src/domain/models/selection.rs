//! Member selection and view mode parsing for the dashboard filters.
use shared::ViewMode;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::TrackerError;

/// Which members the consumer wants to see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberSelection {
    #[default]
    All,
    Member(u32),
}

impl FromStr for MemberSelection {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(MemberSelection::All);
        }
        trimmed
            .parse::<u32>()
            .map(MemberSelection::Member)
            .map_err(|_| TrackerError::InvalidSelection(s.to_string()))
    }
}

impl fmt::Display for MemberSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberSelection::All => write!(f, "all"),
            MemberSelection::Member(id) => write!(f, "{}", id),
        }
    }
}

/// Parse a `view` query value; absent or blank means the card grid
pub fn parse_view_mode(raw: Option<&str>) -> Result<ViewMode, TrackerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(ViewMode::Card),
        Some(v) if v.eq_ignore_ascii_case("card") => Ok(ViewMode::Card),
        Some(v) if v.eq_ignore_ascii_case("table") => Ok(ViewMode::Table),
        Some(v) => Err(TrackerError::InvalidViewMode(v.to_string())),
    }
}
