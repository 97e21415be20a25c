//! Configuration constants (used as CLI defaults).

/// Default SQLite database file.
pub const DEFAULT_DB_PATH: &str = "./domain_verdict.db";

/// Default listen address for the HTTP API.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default listen port for the HTTP API.
pub const DEFAULT_PORT: u16 = 5000;

// Connection pool
/// Maximum pooled database connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
/// Seconds a request may wait for a pooled connection
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Upper bound in seconds on a single classification or registration store call.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Number of example domains returned per set by the database diagnostics endpoint.
pub const DIAGNOSTIC_SAMPLE_SIZE: u32 = 5;
