//! domain_verdict library: exact-match domain classification
//!
//! A submitted URL is canonicalized to a bare lowercase domain (scheme, port,
//! path and a single leading `www.` removed) and checked against two reference
//! sets held in SQLite: legitimate and suspicious. The legitimate set wins when
//! a domain is in both; a domain in neither is `unknown`.
//!
//! # Example
//!
//! ```no_run
//! use domain_verdict::initialization::init_store;
//! use domain_verdict::{canonicalize, classify, register, Config, ReferenceSet};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = init_store(&Config::default()).await?;
//!
//! register(&store, ReferenceSet::Legitimate, &canonicalize("example.com")).await?;
//! let verdict = classify(&store, &canonicalize("https://www.example.com/login")).await?;
//! println!("{verdict}"); // legitimate
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod config;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod registry;
pub mod server;
pub mod storage;

// Re-export public API
pub use config::{Cli, Command, Config, LogFormat, LogLevel};
pub use domain::{canonicalize, CanonicalDomain};
pub use error_handling::{RequestOutcome, StoreError, VerdictError};
pub use registry::{classify, register, Classification, ReferenceSet, Registration};
pub use storage::{ReferenceStore, SqliteStore};
