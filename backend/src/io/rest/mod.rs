//! # REST API Interface Layer
//!
//! Read-only JSON endpoints over the member directory. Every handler logs
//! the request, delegates to the domain and translates domain errors:
//!
//! - `MemberNotFound` → 404
//! - `InvalidSelection` / `InvalidViewMode` → 400
//! - anything else → 500

pub mod member_apis;
pub mod summary_apis;
pub mod dashboard_apis;
pub mod mappers;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::error::TrackerError;

/// Convert a domain error into an HTTP response
pub fn error_response(err: TrackerError) -> Response {
    let status = match &err {
        TrackerError::MemberNotFound(_) => StatusCode::NOT_FOUND,
        TrackerError::InvalidSelection(_) | TrackerError::InvalidViewMode(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("Request failed: {}", err);
    }
    (status, err.to_string()).into_response()
}
