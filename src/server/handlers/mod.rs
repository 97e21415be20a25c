//! API server HTTP handlers.

mod check;
mod diagnostics;
mod metrics;
mod register;
mod status;

use axum::response::{IntoResponse, Response};

pub use check::check_url_handler;
pub use diagnostics::{api_test_handler, db_test_handler};
pub use metrics::metrics_handler;
pub use register::{add_legitimate_handler, add_suspicious_handler};
pub use status::status_handler;

use super::error::ApiError;
use crate::error_handling::{RequestOutcome, RequestStats, VerdictError};

/// Counts the outcome of a request, then renders it.
///
/// `outcome` picks the counter for a successful result; failures are counted
/// by error kind.
fn finish<T, R>(
    stats: &RequestStats,
    result: Result<T, VerdictError>,
    outcome: impl FnOnce(&T) -> RequestOutcome,
    render: impl FnOnce(T) -> R,
) -> Response
where
    R: IntoResponse,
{
    match result {
        Ok(value) => {
            stats.record(outcome(&value));
            render(value).into_response()
        }
        Err(err) => reject(stats, err),
    }
}

/// Counts and renders a failed request.
fn reject(stats: &RequestStats, err: VerdictError) -> Response {
    stats.record(RequestOutcome::from(&err));
    ApiError(err).into_response()
}
