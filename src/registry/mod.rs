//! Classification and registration against the reference sets.
//!
//! Both operations take an already-canonicalized domain (see
//! [`crate::domain::canonicalize`]) and perform a single request against the
//! store. Store failures are surfaced as [`VerdictError::StoreUnavailable`];
//! nothing here retries.

use std::future::Future;
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::domain::CanonicalDomain;
use crate::error_handling::{RequestOutcome, StoreError, VerdictError};
use crate::storage::ReferenceStore;

/// One of the two named sets of canonical domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceSet {
    Legitimate,
    Suspicious,
}

impl ReferenceSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceSet::Legitimate => "legitimate",
            ReferenceSet::Suspicious => "suspicious",
        }
    }

    /// Message reported to callers on first-time insertion.
    pub fn added_message(&self) -> &'static str {
        match self {
            ReferenceSet::Legitimate => "Added to legitimate sites",
            ReferenceSet::Suspicious => "Added to suspicious sites",
        }
    }
}

impl std::fmt::Display for ReferenceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a canonical domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Legitimate,
    Suspicious,
    Unknown,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Legitimate => "legitimate",
            Classification::Suspicious => "suspicious",
            Classification::Unknown => "unknown",
        }
    }

    pub fn outcome(&self) -> RequestOutcome {
        match self {
            Classification::Legitimate => RequestOutcome::ClassifiedLegitimate,
            Classification::Suspicious => RequestOutcome::ClassifiedSuspicious,
            Classification::Unknown => RequestOutcome::ClassifiedUnknown,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a registration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// `true` only when this call added the domain; `false` if it was already present.
    pub inserted: bool,
}

impl Registration {
    pub fn outcome(&self) -> RequestOutcome {
        if self.inserted {
            RequestOutcome::RegisteredNew
        } else {
            RequestOutcome::RegisteredDuplicate
        }
    }
}

/// Classifies a canonical domain.
///
/// The legitimate set is checked first and wins outright: the suspicious set
/// is only queried when the domain is not legitimate. Matching is exact, so a
/// stored `example.com` does not match `mail.example.com`.
///
/// # Errors
///
/// Returns [`VerdictError::StoreUnavailable`] if either lookup fails. A failed
/// lookup is never reported as [`Classification::Unknown`].
pub async fn classify<S: ReferenceStore>(
    store: &S,
    domain: &CanonicalDomain,
) -> Result<Classification, VerdictError> {
    if store.exists(ReferenceSet::Legitimate, domain).await? {
        info!("Found {domain} in legitimate sites");
        return Ok(Classification::Legitimate);
    }

    if store.exists(ReferenceSet::Suspicious, domain).await? {
        info!("Found {domain} in suspicious sites");
        return Ok(Classification::Suspicious);
    }

    debug!("{domain} not found in any reference set");
    Ok(Classification::Unknown)
}

/// Adds a canonical domain to `set` unless it is already there.
///
/// Repeated registration is not an error: the second and later calls succeed
/// with `inserted == false`. The store performs the insert as one conditional
/// statement, so concurrent registrations of the same new domain produce
/// exactly one `inserted == true`.
///
/// # Errors
///
/// - [`VerdictError::InvalidInput`] if `domain` is empty (the store is not touched)
/// - [`VerdictError::StoreUnavailable`] if the insert fails
pub async fn register<S: ReferenceStore>(
    store: &S,
    set: ReferenceSet,
    domain: &CanonicalDomain,
) -> Result<Registration, VerdictError> {
    if domain.is_empty() {
        return Err(VerdictError::InvalidInput(
            "domain is empty after canonicalization".to_string(),
        ));
    }

    let inserted = store.insert_if_absent(set, domain).await?;
    if inserted {
        info!("Added {domain} to {set} sites");
    } else {
        debug!("{domain} already present in {set} sites");
    }
    Ok(Registration { inserted })
}

/// Bounds a store-backed operation by `timeout`.
///
/// An elapsed deadline is reported as [`VerdictError::StoreUnavailable`], the
/// same as any other failure to reach the store.
pub async fn with_deadline<T, F>(timeout: Duration, operation: F) -> Result<T, VerdictError>
where
    F: Future<Output = Result<T, VerdictError>>,
{
    tokio::time::timeout(timeout, operation)
        .await
        .unwrap_or_else(|_| Err(StoreError::Timeout(timeout).into()))
}
