//! Liveness and store diagnostics.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde_json::json;

use super::super::types::{AppState, DbTestFailure, DbTestResponse};
use crate::config::DIAGNOSTIC_SAMPLE_SIZE;
use crate::error_handling::VerdictError;
use crate::registry::{with_deadline, ReferenceSet};
use crate::storage::ReferenceStore;

/// `GET /api/test`: answers without touching the store.
pub async fn api_test_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "API is working" }))
}

/// `GET /api/db-test`: set sizes and a few entries from each set.
pub async fn db_test_handler(State(state): State<AppState>) -> Response {
    let store = &state.store;
    let result = with_deadline(state.request_timeout, async {
        let snapshot = DbTestResponse {
            database_connection: "success",
            legitimate_sites: store.count(ReferenceSet::Legitimate).await?,
            suspicious_sites: store.count(ReferenceSet::Suspicious).await?,
            legitimate_examples: store
                .sample(ReferenceSet::Legitimate, DIAGNOSTIC_SAMPLE_SIZE)
                .await?,
            suspicious_examples: store
                .sample(ReferenceSet::Suspicious, DIAGNOSTIC_SAMPLE_SIZE)
                .await?,
        };
        Ok::<_, VerdictError>(snapshot)
    })
    .await;

    match result {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(err) => {
            error!("Database test failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DbTestFailure {
                    database_connection: "failed",
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
