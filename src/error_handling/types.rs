//! Error type definitions.
//!
//! This module defines the error taxonomy used throughout the application and
//! the request outcomes counted by [`super::RequestStats`].

use std::time::Duration;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database bootstrap (file, pool, migrations).
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Schema migration error.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

/// A reference-set store call that could not be completed.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Connection acquisition or query failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The call did not finish within the caller's deadline.
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),
}

/// Errors surfaced by classification and registration.
///
/// Malformed URLs never show up here: the canonicalizer handles them itself.
#[derive(Error, Debug)]
pub enum VerdictError {
    /// Missing or empty input; the store is not touched.
    #[error("{0}")]
    InvalidInput(String),

    /// The reference sets could not be checked or updated.
    ///
    /// Distinct from an `unknown` classification: nothing is known about the domain.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

impl From<&VerdictError> for RequestOutcome {
    fn from(err: &VerdictError) -> Self {
        match err {
            VerdictError::InvalidInput(_) => RequestOutcome::InvalidInput,
            VerdictError::StoreUnavailable(_) => RequestOutcome::StoreUnavailable,
        }
    }
}

/// Outcome of a single classification or registration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum RequestOutcome {
    ClassifiedLegitimate,
    ClassifiedSuspicious,
    ClassifiedUnknown,
    RegisteredNew,
    RegisteredDuplicate,
    InvalidInput,
    StoreUnavailable,
}

impl std::fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RequestOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestOutcome::ClassifiedLegitimate => "classified_legitimate",
            RequestOutcome::ClassifiedSuspicious => "classified_suspicious",
            RequestOutcome::ClassifiedUnknown => "classified_unknown",
            RequestOutcome::RegisteredNew => "registered_new",
            RequestOutcome::RegisteredDuplicate => "registered_duplicate",
            RequestOutcome::InvalidInput => "invalid_input",
            RequestOutcome::StoreUnavailable => "store_unavailable",
        }
    }

    /// Whether this outcome is a failed request.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            RequestOutcome::InvalidInput | RequestOutcome::StoreUnavailable
        )
    }
}
