//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_verdict` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tokio_util::sync::CancellationToken;

use domain_verdict::config::DIAGNOSTIC_SAMPLE_SIZE;
use domain_verdict::initialization::{init_logger_with, init_store};
use domain_verdict::registry::with_deadline;
use domain_verdict::server::serve;
use domain_verdict::{
    canonicalize, classify, register, Cli, Command, Config, ReferenceSet, ReferenceStore,
    SqliteStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env in the current directory, or next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = cli.config;

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(&config, cli.command.unwrap_or(Command::Serve)).await {
        eprintln!("domain_verdict error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(config: &Config, command: Command) -> Result<()> {
    let store = init_store(config)
        .await
        .context("Failed to open reference store")?;

    match command {
        Command::Serve => {
            let shutdown = CancellationToken::new();
            let signal = shutdown.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    log::info!("Received Ctrl-C, shutting down");
                }
                signal.cancel();
            });
            serve(config, store.clone(), shutdown).await?;
        }
        Command::Check { url } => {
            let domain = canonicalize(&url);
            let verdict = with_deadline(config.request_timeout(), classify(&store, &domain)).await?;
            println!("{domain}: {verdict}");
        }
        Command::AddLegitimate { url } => {
            add(config, &store, ReferenceSet::Legitimate, &url).await?;
        }
        Command::AddSuspicious { url } => {
            add(config, &store, ReferenceSet::Suspicious, &url).await?;
        }
        Command::Stats => {
            for set in [ReferenceSet::Legitimate, ReferenceSet::Suspicious] {
                let count = store.count(set).await?;
                let examples = store.sample(set, DIAGNOSTIC_SAMPLE_SIZE).await?;
                println!("{set}: {count} (e.g. {})", examples.join(", "));
            }
        }
    }

    store.close().await;
    Ok(())
}

async fn add(config: &Config, store: &SqliteStore, set: ReferenceSet, url: &str) -> Result<()> {
    let domain = canonicalize(url);
    let registration =
        with_deadline(config.request_timeout(), register(store, set, &domain)).await?;
    if registration.inserted {
        println!("✅ {domain}: {}", set.added_message());
    } else {
        println!("{domain}: Already exists");
    }
    Ok(())
}
