//! CLI module for depot
//!
//! Provides command-line interface for:
//! - serve: Run the artifact store server
//! - push: Upload a file to a running server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{push, run, run_command, serve};
pub use errors::{CliError, CliResult};
