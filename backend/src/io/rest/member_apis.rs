//! # REST API for Members
//!
//! Endpoints for listing members (optionally filtered) and fetching one member.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::info;

use super::error_response;
use super::mappers::member_mapper::MemberMapper;
use crate::domain::models::MemberSelection;
use crate::AppState;

// Query parameters for the member list API
#[derive(Debug, Deserialize)]
pub struct MemberListQuery {
    /// "all" or a member id
    pub member: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/members", get(list_members))
        .route("/members/:id", get(get_member))
}

/// List members, optionally narrowed to a single id
async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<MemberListQuery>,
) -> impl IntoResponse {
    info!("GET /api/members - query: {:?}", query);

    let selection = match query.member.as_deref().unwrap_or("all").parse::<MemberSelection>() {
        Ok(selection) => selection,
        Err(e) => return error_response(e),
    };

    let selected = state.member_directory.select(selection);
    (StatusCode::OK, Json(MemberMapper::to_member_list_dto(&selected))).into_response()
}

/// Get one member by id
async fn get_member(State(state): State<AppState>, Path(id): Path<u32>) -> impl IntoResponse {
    info!("GET /api/members/{}", id);

    match state.member_directory.get_member(id) {
        Ok(member) => (StatusCode::OK, Json(MemberMapper::to_dto(member))).into_response(),
        Err(e) => error_response(e),
    }
}
