//! Server state and typed request/response bodies.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::CanonicalDomain;
use crate::error_handling::{RequestStats, VerdictError};
use crate::registry::Classification;
use crate::storage::SqliteStore;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: SqliteStore,
    pub stats: Arc<RequestStats>,
    /// Upper bound on each store-backed request.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(store: SqliteStore, request_timeout: Duration) -> Self {
        AppState {
            store,
            stats: Arc::new(RequestStats::new()),
            request_timeout,
        }
    }
}

/// Rejects a missing or empty field with `message`.
fn require(value: Option<String>, message: &str) -> Result<String, VerdictError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(VerdictError::InvalidInput(message.to_string())),
    }
}

/// Body of `POST /api/check-url`.
#[derive(Debug, Deserialize)]
pub struct CheckUrlRequest {
    pub url: Option<String>,
}

impl CheckUrlRequest {
    pub fn into_url(self) -> Result<String, VerdictError> {
        require(self.url, "URL is required")
    }
}

/// Body of `POST /api/add-legitimate`.
#[derive(Debug, Deserialize)]
pub struct AddLegitimateRequest {
    pub official_url: Option<String>,
}

impl AddLegitimateRequest {
    pub fn into_url(self) -> Result<String, VerdictError> {
        require(self.official_url, "official_url is required")
    }
}

/// Body of `POST /api/add-suspicious`.
#[derive(Debug, Deserialize)]
pub struct AddSuspiciousRequest {
    pub suspicious_url: Option<String>,
}

impl AddSuspiciousRequest {
    pub fn into_url(self) -> Result<String, VerdictError> {
        require(self.suspicious_url, "suspicious_url is required")
    }
}

#[derive(Debug, Serialize)]
pub struct CheckUrlResponse {
    pub category: Classification,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: &'static str,
    pub domain: CanonicalDomain,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// JSON response for `/api/db-test`.
#[derive(Debug, Serialize)]
pub struct DbTestResponse {
    pub database_connection: &'static str,
    pub legitimate_sites: i64,
    pub suspicious_sites: i64,
    pub legitimate_examples: Vec<String>,
    pub suspicious_examples: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DbTestFailure {
    pub database_connection: &'static str,
    pub error: String,
}

/// JSON response for `/status`.
#[derive(Serialize)]
pub struct StatusResponse {
    pub uptime_seconds: f64,
    pub total_requests: usize,
    pub classifications: ClassificationCounts,
    pub registrations: RegistrationCounts,
    pub errors: ErrorCounts,
}

#[derive(Serialize)]
pub struct ClassificationCounts {
    pub legitimate: usize,
    pub suspicious: usize,
    pub unknown: usize,
}

#[derive(Serialize)]
pub struct RegistrationCounts {
    pub inserted: usize,
    pub already_present: usize,
}

#[derive(Serialize)]
pub struct ErrorCounts {
    pub total: usize,
    pub invalid_input: usize,
    pub store_unavailable: usize,
}
