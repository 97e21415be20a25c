//! Error handling and request statistics.
//!
//! This module provides:
//! - The error taxonomy for classification and registration
//! - Bootstrap error types (logger, database)
//! - Thread-safe request outcome counters
//!
//! Errors that reach callers fall into two classes:
//! - **Invalid input**: the request is rejected before the store is touched
//! - **Store unavailable**: the reference sets could not be consulted

mod stats;
mod types;

// Re-export public API
pub use stats::RequestStats;
pub use types::{DatabaseError, InitializationError, RequestOutcome, StoreError, VerdictError};
