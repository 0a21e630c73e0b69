//! Error type shared by the domain and storage layers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("No member with id {0}")]
    MemberNotFound(u32),
    #[error("Invalid member selection '{0}', expected 'all' or a member id")]
    InvalidSelection(String),
    #[error("Invalid view mode '{0}', expected 'card' or 'table'")]
    InvalidViewMode(String),
    #[error("Failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse roster file: {0}")]
    RosterFormat(#[from] serde_yaml::Error),
}

pub type TrackerResult<T> = std::result::Result<T, TrackerError>;
