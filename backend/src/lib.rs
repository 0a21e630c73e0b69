//! # Savings Tracker Backend
//!
//! Non-UI logic for the savings tracker: a fixed roster of members, the
//! dates on which each is expected to contribute, and the budget split of
//! everything saved.
//!
//! ## Architecture
//!
//! ```text
//! Presentation layer (any client of the JSON API)
//!     ↓
//! IO Layer (REST API, mappers)
//!     ↓
//! Domain Layer (derivation, allocation, dashboard)
//!     ↓
//! Storage Layer (YAML roster, built-in roster)
//! ```
//!
//! The roster is loaded once and the derived member data is computed once;
//! every request reads the same immutable result.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::{DashboardService, MemberDirectory};
use crate::domain::models::Roster;
use crate::storage::{builtin_roster, RosterRepository};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub member_directory: MemberDirectory,
    pub dashboard_service: DashboardService,
}

/// Load the configured roster file, or the built-in roster when none is set
pub fn load_roster(config: &AppConfig) -> Result<Roster> {
    match &config.roster_path {
        Some(path) => RosterRepository::new(path)
            .load()
            .with_context(|| format!("Failed to load roster from {}", path.display())),
        None => {
            info!("No roster file configured, using the built-in roster");
            builtin_roster().context("Built-in roster is invalid")
        }
    }
}

/// Build the application state and derive member data up front
pub fn initialize_backend(roster: Roster) -> AppState {
    info!("Setting up domain model");
    let member_directory = MemberDirectory::new(roster);

    let unrecognized = member_directory.unrecognized_missed_dates();
    if !unrecognized.is_empty() {
        warn!(
            "{} missed-date entries do not match any expected date; see /api/diagnostics",
            unrecognized.len()
        );
    }

    let summary = member_directory.summary();
    info!(
        "Tracking {} members, total funds {}",
        summary.member_count, summary.total_funds
    );

    AppState {
        member_directory,
        dashboard_service: DashboardService::new(),
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", cors_origin))?;

    // CORS setup to allow the frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let api_routes = Router::new()
        .merge(io::rest::member_apis::router())
        .merge(io::rest::summary_apis::router())
        .merge(io::rest::dashboard_apis::router());

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state))
}
