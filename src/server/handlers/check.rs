//! URL classification handler.

use axum::{extract::rejection::JsonRejection, extract::State, response::Response, Json};
use log::info;

use super::super::error::json_body;
use super::super::types::{AppState, CheckUrlRequest, CheckUrlResponse};
use super::finish;
use crate::domain::canonicalize;
use crate::registry::{classify, with_deadline, Classification};

/// `POST /api/check-url`: classifies the domain of `url`.
pub async fn check_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckUrlRequest>, JsonRejection>,
) -> Response {
    let result = match json_body(payload).and_then(CheckUrlRequest::into_url) {
        Ok(url) => {
            info!("Checking URL: {url}");
            let domain = canonicalize(&url);
            with_deadline(state.request_timeout, classify(&state.store, &domain)).await
        }
        Err(err) => Err(err),
    };

    finish(
        &state.stats,
        result,
        Classification::outcome,
        |category| Json(CheckUrlResponse { category }),
    )
}
