//! # CLI
//!
//! Command-line interface:
//! - serve: generate a fixture and run the HTTP server
//! - generate: print a fixture as JSON

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{generate, run, run_command, serve};
pub use errors::{CliError, CliResult};
