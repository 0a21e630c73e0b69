//! # Domain Module
//!
//! Business logic of the savings tracker, independent of HTTP and storage.
//!
//! ## Module Organization
//!
//! - **models**: roster, member and selection types
//! - **derivation**: missed dates to per-date paid flags and savings totals
//! - **allocation**: fuel/food/emergency split of the group total
//! - **status_badge**: status to display badge mapping
//! - **member_directory**: memoized roster view with selection filtering
//! - **dashboard**: card grid and table view models
//! - **rules**: group rules text
//!
//! ## Business Rules
//!
//! - A date is paid unless the member lists it as missed
//! - Savings = paid dates × contribution amount
//! - The budget split rounds each bucket independently

pub mod error;
pub mod models;
pub mod derivation;
pub mod allocation;
pub mod status_badge;
pub mod member_directory;
pub mod dashboard;
pub mod rules;

pub use error::*;
pub use derivation::*;
pub use allocation::*;
pub use status_badge::*;
pub use member_directory::*;
pub use dashboard::*;
pub use rules::*;
