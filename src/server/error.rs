//! Mapping of request errors onto HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};

use super::types::ErrorResponse;
use crate::error_handling::VerdictError;

/// Message returned for store failures; the underlying cause is only logged.
pub const STORE_UNAVAILABLE_MESSAGE: &str = "Database connection failed";

/// A [`VerdictError`] rendered as `{"error": ...}`.
///
/// Invalid input is a client error (400); store failures are a server error
/// (500), never confused with an `unknown` classification.
#[derive(Debug)]
pub struct ApiError(pub VerdictError);

impl From<VerdictError> for ApiError {
    fn from(err: VerdictError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            VerdictError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            VerdictError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            VerdictError::InvalidInput(msg) => {
                warn!("Rejected request: {msg}");
                msg.clone()
            }
            VerdictError::StoreUnavailable(cause) => {
                error!("Database connection error: {cause}");
                STORE_UNAVAILABLE_MESSAGE.to_string()
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Unwraps a JSON body, treating an unreadable one as invalid input.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, VerdictError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| VerdictError::InvalidInput(rejection.body_text()))
}
