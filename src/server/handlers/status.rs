//! JSON status handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::super::types::{
    AppState, ClassificationCounts, ErrorCounts, RegistrationCounts, StatusResponse,
};
use crate::error_handling::RequestOutcome;

/// Request counters since startup, as pretty-printed JSON.
pub async fn status_handler(State(state): State<AppState>) -> Response {
    let stats = &state.stats;

    let response = StatusResponse {
        uptime_seconds: stats.uptime_seconds(),
        total_requests: stats.total_requests(),
        classifications: ClassificationCounts {
            legitimate: stats.get_count(RequestOutcome::ClassifiedLegitimate),
            suspicious: stats.get_count(RequestOutcome::ClassifiedSuspicious),
            unknown: stats.get_count(RequestOutcome::ClassifiedUnknown),
        },
        registrations: RegistrationCounts {
            inserted: stats.get_count(RequestOutcome::RegisteredNew),
            already_present: stats.get_count(RequestOutcome::RegisteredDuplicate),
        },
        errors: ErrorCounts {
            total: stats.total_errors(),
            invalid_input: stats.get_count(RequestOutcome::InvalidInput),
            store_unavailable: stats.get_count(RequestOutcome::StoreUnavailable),
        },
    };

    match serde_json::to_string_pretty(&response) {
        Ok(body) => (
            StatusCode::OK,
            [("Content-Type", "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            log::error!("Failed to serialize status response: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to serialize status",
            )
                .into_response()
        }
    }
}
