//! Prometheus metrics handler.

use std::fmt::Write;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum::IntoEnumIterator;

use super::super::types::AppState;
use crate::error_handling::{RequestOutcome, RequestStats};

/// Prometheus-compatible metrics endpoint
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    (StatusCode::OK, render_metrics(&state.stats)).into_response()
}

fn render_metrics(stats: &RequestStats) -> String {
    let mut out = String::from(
        "# HELP domain_verdict_requests_total Classification and registration requests by outcome\n\
         # TYPE domain_verdict_requests_total counter\n",
    );
    for outcome in RequestOutcome::iter() {
        // writing to a String cannot fail
        let _ = writeln!(
            out,
            "domain_verdict_requests_total{{outcome=\"{}\"}} {}",
            outcome,
            stats.get_count(outcome)
        );
    }

    let _ = write!(
        out,
        r#"
# HELP domain_verdict_errors_total Failed requests
# TYPE domain_verdict_errors_total counter
domain_verdict_errors_total {}

# HELP domain_verdict_uptime_seconds Seconds since the server started
# TYPE domain_verdict_uptime_seconds gauge
domain_verdict_uptime_seconds {}
"#,
        stats.total_errors(),
        stats.uptime_seconds()
    );
    out
}
