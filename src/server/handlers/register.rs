//! Reference-set registration handlers.

use axum::{extract::rejection::JsonRejection, extract::State, response::Response, Json};
use log::info;

use super::super::error::json_body;
use super::super::types::{
    AddLegitimateRequest, AddSuspiciousRequest, AppState, RegisterResponse,
};
use super::{finish, reject};
use crate::domain::canonicalize;
use crate::registry::{register, with_deadline, ReferenceSet, Registration};

const ALREADY_EXISTS: &str = "Already exists";

async fn register_url(state: &AppState, set: ReferenceSet, url: String) -> Response {
    info!("Registering {url} as {set}");
    let domain = canonicalize(&url);
    let result = with_deadline(state.request_timeout, register(&state.store, set, &domain)).await;

    finish(&state.stats, result, Registration::outcome, |registration| {
        Json(RegisterResponse {
            success: registration.inserted,
            message: if registration.inserted {
                set.added_message()
            } else {
                ALREADY_EXISTS
            },
            domain,
        })
    })
}

/// `POST /api/add-legitimate`
pub async fn add_legitimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddLegitimateRequest>, JsonRejection>,
) -> Response {
    match json_body(payload).and_then(AddLegitimateRequest::into_url) {
        Ok(url) => register_url(&state, ReferenceSet::Legitimate, url).await,
        Err(err) => reject(&state.stats, err),
    }
}

/// `POST /api/add-suspicious`
pub async fn add_suspicious_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddSuspiciousRequest>, JsonRejection>,
) -> Response {
    match json_body(payload).and_then(AddSuspiciousRequest::into_url) {
        Ok(url) => register_url(&state, ReferenceSet::Suspicious, url).await,
        Err(err) => reject(&state.stats, err),
    }
}
