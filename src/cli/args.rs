//! # CLI Arguments
//!
//! Commands:
//! - streamlens serve [--host <addr>] [--port <port>] [--count <n>] [--seed <n>]
//! - streamlens generate [--count <n>] [--seed <n>]

use clap::{Parser, Subcommand};

use crate::store::generator::DEFAULT_COUNT;

/// Review backend for synthetic live-stream event records
#[derive(Parser, Debug)]
#[command(name = "streamlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a fixture and serve the review API
    Serve {
        /// Host to bind (default: 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (default: PORT env var, then 3001)
        #[arg(long)]
        port: Option<u16>,

        /// Number of records to generate
        #[arg(long, default_value_t = DEFAULT_COUNT)]
        count: usize,

        /// Seed for reproducible fixtures
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a fixture and print it as JSON
    Generate {
        /// Number of records to generate
        #[arg(long, default_value_t = DEFAULT_COUNT)]
        count: usize,

        /// Seed for reproducible fixtures
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
