//! # REST API for the Dashboard
//!
//! Serves the card grid or table view model for all members or one member.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::info;

use super::error_response;
use crate::domain::models::{parse_view_mode, MemberSelection};
use crate::AppState;

// Query parameters for the dashboard API
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub member: Option<String>,
    pub view: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> impl IntoResponse {
    info!("GET /api/dashboard - query: {:?}", query);

    let selection = match query.member.as_deref().unwrap_or("all").parse::<MemberSelection>() {
        Ok(selection) => selection,
        Err(e) => return error_response(e),
    };
    let view_mode = match parse_view_mode(query.view.as_deref()) {
        Ok(view_mode) => view_mode,
        Err(e) => return error_response(e),
    };

    let dashboard = state
        .dashboard_service
        .build(&state.member_directory, selection, view_mode);
    (StatusCode::OK, Json(dashboard)).into_response()
}
