//! # REST API for Group Figures
//!
//! Expected dates, total funds with the budget split, rules and roster
//! diagnostics.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::{DiagnosticsResponse, ExpectedDatesResponse, RulesResponse};
use tracing::info;

use super::mappers::member_mapper::MemberMapper;
use crate::domain::rules::group_rules;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dates", get(get_dates))
        .route("/summary", get(get_summary))
        .route("/rules", get(get_rules))
        .route("/diagnostics", get(get_diagnostics))
}

async fn get_dates(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/dates");

    let dates = state
        .member_directory
        .dates()
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect();
    (StatusCode::OK, Json(ExpectedDatesResponse { dates }))
}

/// Total funds across all members and their budget split
async fn get_summary(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/summary");

    let summary = state.member_directory.summary();
    (StatusCode::OK, Json(MemberMapper::to_summary_dto(&summary)))
}

async fn get_rules(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/rules");

    let rules = group_rules(&state.member_directory);
    (StatusCode::OK, Json(RulesResponse { rules }))
}

/// Missed-date entries that match no expected date
async fn get_diagnostics(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/diagnostics");

    let entries = state.member_directory.unrecognized_missed_dates();
    (
        StatusCode::OK,
        Json(DiagnosticsResponse {
            unrecognized_missed_dates: MemberMapper::to_unrecognized_dto(entries),
        }),
    )
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_support::{get, test_app};
    use axum::http::StatusCode;
    use shared::{DiagnosticsResponse, ExpectedDatesResponse, FundsSummaryResponse, RulesResponse};

    #[tokio::test]
    async fn test_get_dates() {
        let (status, body) = get(test_app(), "/api/dates").await;
        assert_eq!(status, StatusCode::OK);

        let response: ExpectedDatesResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.dates.len(), 9);
        assert_eq!(response.dates[0], "2026-02-01");
        assert_eq!(response.dates[8], "2026-03-29");
    }

    #[tokio::test]
    async fn test_get_summary() {
        let (status, body) = get(test_app(), "/api/summary").await;
        assert_eq!(status, StatusCode::OK);

        let summary: FundsSummaryResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(summary.total_funds, 2700);
        assert_eq!(summary.allocation.fuel, 540);
        assert_eq!(summary.allocation.food, 2025);
        assert_eq!(summary.allocation.emergency, 135);
        assert_eq!(summary.member_count, 6);
    }

    #[tokio::test]
    async fn test_get_rules() {
        let (status, body) = get(test_app(), "/api/rules").await;
        assert_eq!(status, StatusCode::OK);

        let response: RulesResponse = serde_json::from_slice(&body).unwrap();
        assert!(response.rules.contains(&"Fuel 20%, Food 75%, Emergency 5%.".to_string()));
    }

    #[tokio::test]
    async fn test_get_diagnostics() {
        let (status, body) = get(test_app(), "/api/diagnostics").await;
        assert_eq!(status, StatusCode::OK);

        let response: DiagnosticsResponse = serde_json::from_slice(&body).unwrap();
        assert!(response.unrecognized_missed_dates.is_empty());
    }
}
