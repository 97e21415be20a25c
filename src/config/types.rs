//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. Every option can also be supplied through a
//! `DOMAIN_VERDICT_*` environment variable (or a `.env` file).

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_BIND_ADDRESS, DEFAULT_DB_PATH, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::storage::PoolSettings;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Built once at process start and passed explicitly to the store and server
/// constructors. Can be constructed programmatically via `Default`.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// SQLite database file holding the reference sets
    #[arg(long, env = "DOMAIN_VERDICT_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Address the HTTP API listens on
    #[arg(long, env = "DOMAIN_VERDICT_BIND", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    /// Port the HTTP API listens on
    #[arg(long, env = "DOMAIN_VERDICT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Maximum pooled database connections
    #[arg(long, env = "DOMAIN_VERDICT_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection before reporting the store unavailable
    #[arg(long, env = "DOMAIN_VERDICT_ACQUIRE_TIMEOUT_SECS", default_value_t = DEFAULT_ACQUIRE_TIMEOUT_SECS)]
    pub acquire_timeout_secs: u64,

    /// Upper bound in seconds on each classification or registration
    #[arg(long, env = "DOMAIN_VERDICT_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    /// Log level
    #[arg(long, env = "DOMAIN_VERDICT_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, env = "DOMAIN_VERDICT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }

    /// `host:port` string for binding the listener.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Operation to run. Defaults to `serve`.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve,
    /// Classify a URL against the reference sets
    Check {
        /// URL or bare domain to classify
        url: String,
    },
    /// Add a URL's domain to the legitimate set
    AddLegitimate {
        /// URL or bare domain to register
        url: String,
    },
    /// Add a URL's domain to the suspicious set
    AddSuspicious {
        /// URL or bare domain to register
        url: String,
    },
    /// Print reference set sizes and a few example entries
    Stats,
}

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(name = "domain_verdict", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Option<Command>,
}
