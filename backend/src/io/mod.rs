//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain. Handlers parse query
//! values, call the member directory or dashboard service, and map results
//! to the DTOs in the `shared` crate.
//!
//! ## Supported Operations
//!
//! - **GET /api/members**: enriched members, optionally filtered to one id
//! - **GET /api/members/:id**: a single member
//! - **GET /api/dates**: expected contribution dates
//! - **GET /api/summary**: total funds and budget split
//! - **GET /api/dashboard**: card grid or table view model
//! - **GET /api/rules**: group rules
//! - **GET /api/diagnostics**: missed-date entries that match no expected date

pub mod rest;

pub use rest::*;
