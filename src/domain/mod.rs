//! Domain canonicalization.
//!
//! This module turns an arbitrary submitted address into the canonical domain
//! used as the exact-match key for classification:
//! - scheme, path, query and fragment are dropped
//! - a single leading `www.` is removed
//! - any `:port` suffix is removed
//! - the result is lowercased
//!
//! Leading control characters and spaces are ignored, as are tabs and line
//! breaks anywhere in the input.
//!
//! Canonicalization never fails. Input that cannot be split structurally (an
//! authority with unbalanced `[`/`]`) goes through [`canonicalize_fallback`],
//! which lowercases the raw input unchanged.

use std::fmt;

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

/// Prefix removed once from the start of the host portion (case-sensitive).
const WWW_PREFIX: &str = "www.";

/// A normalized, host-only key for reference set lookups.
///
/// Only produced by [`canonicalize`], so callers holding one know the
/// canonicalization step has already been applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalDomain(String);

impl CanonicalDomain {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Structural split failure.
///
/// Never leaves this module: [`canonicalize`] handles it with the raw fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum MalformedUrl {
    #[error("unbalanced brackets in authority {0:?}")]
    UnbalancedBrackets(String),
}

/// The pieces of a URL the canonicalizer cares about.
#[derive(Debug, PartialEq, Eq)]
struct UrlParts<'a> {
    /// Text between `//` and the next `/`, `?` or `#`, if the input has one.
    authority: Option<&'a str>,
    /// Path with query and fragment removed.
    path: &'a str,
}

fn is_component_delimiter(c: char) -> bool {
    matches!(c, '/' | '?' | '#')
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

fn strip_query_and_fragment(s: &str) -> &str {
    match s.find(['?', '#']) {
        Some(end) => &s[..end],
        None => s,
    }
}

/// C0 control characters and space, trimmed from the start of the input.
fn is_c0_or_space(c: char) -> bool {
    c <= ' '
}

/// Drops leading C0 controls and spaces, and tabs and line breaks anywhere.
fn sanitize(input: &str) -> String {
    input
        .trim_start_matches(is_c0_or_space)
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect()
}

/// Splits `input` into authority and path.
///
/// A scheme is only recognized when it is followed by `//` and appears before
/// any path, query or fragment delimiter, so `example.com:8080` stays a bare
/// host with a port rather than a URL with scheme `example.com`. A candidate
/// that is not a valid scheme (`1http://`, `://`) leaves the whole input as a
/// scheme-less path.
fn split_url(input: &str) -> Result<UrlParts<'_>, MalformedUrl> {
    let rest = match input.find(':') {
        Some(idx)
            if input[idx + 1..].starts_with("//")
                && !input[..idx].contains(is_component_delimiter)
                && is_valid_scheme(&input[..idx]) =>
        {
            &input[idx + 1..]
        }
        _ => input,
    };

    match rest.strip_prefix("//") {
        Some(hierarchical) => {
            let end = hierarchical
                .find(is_component_delimiter)
                .unwrap_or(hierarchical.len());
            let authority = &hierarchical[..end];
            if authority.contains('[') != authority.contains(']') {
                return Err(MalformedUrl::UnbalancedBrackets(authority.to_string()));
            }
            Ok(UrlParts {
                authority: Some(authority),
                path: strip_query_and_fragment(&hierarchical[end..]),
            })
        }
        None => Ok(UrlParts {
            authority: None,
            path: strip_query_and_fragment(rest),
        }),
    }
}

/// Structured branch: split the URL, pick the host portion, strip and lowercase.
pub(crate) fn canonicalize_structured(input: &str) -> Result<String, MalformedUrl> {
    let cleaned = sanitize(input);
    let parts = split_url(&cleaned)?;

    // Bare inputs like `example.com/page` have no authority; their first path
    // segment is the host.
    let host = match parts.authority {
        Some(authority) if !authority.is_empty() => authority,
        _ => parts.path.split('/').next().unwrap_or_default(),
    };

    let host = host.strip_prefix(WWW_PREFIX).unwrap_or(host);
    let host = host.split(':').next().unwrap_or_default();

    Ok(host.to_lowercase())
}

/// Fallback branch: the raw input, lowercased and otherwise unmodified.
pub(crate) fn canonicalize_fallback(input: &str) -> String {
    input.to_lowercase()
}

/// Canonicalizes a submitted address into the key used for classification.
///
/// Pure and infallible. Examples:
/// - `https://www.Example.com/login` -> `example.com`
/// - `example.com:8080` -> `example.com`
/// - `example.com/page` -> `example.com`
/// - ` https://Example.com/x` -> `example.com`
/// - `http://[::1` (malformed) -> `http://[::1` via the fallback branch
pub fn canonicalize(input: &str) -> CanonicalDomain {
    let domain = match canonicalize_structured(input) {
        Ok(domain) => domain,
        Err(e) => {
            warn!("Error parsing URL {input:?}: {e}; using raw input as domain");
            canonicalize_fallback(input)
        }
    };
    debug!("Canonicalized {input:?} to {domain:?}");
    CanonicalDomain(domain)
}
