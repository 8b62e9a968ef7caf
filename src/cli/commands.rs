//! # CLI Commands
//!
//! Command implementations. `serve` builds the fixture, resolves the
//! listen port (flag, then the PORT variable, then the default) and
//! runs the HTTP server on a fresh tokio runtime. `generate` prints a
//! fixture as pretty JSON for inspection.

use std::env;
use std::sync::Arc;

use crate::api::{ApiServer, ReviewItem, ServerConfig};
use crate::api::config::DEFAULT_PORT;
use crate::observability::Logger;
use crate::store::{GeneratorConfig, RecordStore};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Main CLI entry point. The only function main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Dispatches a parsed command.
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            host,
            port,
            count,
            seed,
        } => serve(host, port, count, seed),
        Command::Generate { count, seed } => generate(count, seed),
    }
}

/// Generates the fixture and serves the review API until interrupted.
pub fn serve(
    host: Option<String>,
    port: Option<u16>,
    count: usize,
    seed: Option<u64>,
) -> CliResult<()> {
    let store = Arc::new(RecordStore::generate(&GeneratorConfig { count, seed }));

    Logger::info(
        "FIXTURE_READY",
        &[("records", &store.len().to_string())],
    );

    let mut config = ServerConfig::with_port(resolve_port(port));
    if let Some(host) = host {
        config.host = host;
    }

    let server = ApiServer::with_config(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            Logger::error("SERVER_FAILED", &[("detail", &e.to_string())]);
            CliError::boot_failed(format!("HTTP server failed: {}", e))
        })
    })?;

    Ok(())
}

/// Generates a fixture and prints it as JSON.
pub fn generate(count: usize, seed: Option<u64>) -> CliResult<()> {
    let store = RecordStore::generate(&GeneratorConfig { count, seed });
    let items: Vec<ReviewItem> = store.records().iter().map(ReviewItem::from).collect();

    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}

/// Explicit flag wins, then the PORT variable, then the default.
fn resolve_port(flag: Option<u16>) -> u16 {
    flag.or_else(|| env::var("PORT").ok().and_then(|v| parse_port(&v)))
        .unwrap_or(DEFAULT_PORT)
}

/// Parses a PORT value, warning instead of failing on garbage so a bad
/// environment falls back to the default rather than aborting.
fn parse_port(value: &str) -> Option<u16> {
    match value.parse() {
        Ok(port) => Some(port),
        Err(_) => {
            Logger::warn("PORT_INVALID", &[("value", value)]);
            None
        }
    }
}
