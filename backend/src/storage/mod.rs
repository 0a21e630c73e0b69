//! # Storage Module
//!
//! Sources of roster data. The tracker only reads rosters: either a YAML file
//! named in the configuration or the built-in roster.

pub mod roster_repository;
pub mod builtin_roster;

pub use roster_repository::*;
pub use builtin_roster::*;
