//! CLI argument definitions using clap
//!
//! Commands:
//! - depot serve --address <addr> --port <port> --dir <path>
//! - depot push --file <path> --description <text> --type <text>
//!   --architecture <text> --scope <text> --version <text>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// depot - A minimal, self-hostable, content-addressed artifact store
#[derive(Parser, Debug)]
#[command(name = "depot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the artifact store server
    Serve {
        /// Address to bind to
        #[arg(long, default_value = "0.0.0.0")]
        address: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8080)]
        port: u16,

        /// Directory where artifacts are stored
        #[arg(long, default_value = "./artifacts")]
        dir: PathBuf,
    },

    /// Upload a file to a running artifact store server
    Push {
        /// Server address to connect to
        #[arg(long, default_value = "0.0.0.0")]
        address: String,

        /// Server port to connect to
        #[arg(long, default_value_t = 8080)]
        port: u16,

        /// Path of the file to upload
        #[arg(long)]
        file: PathBuf,

        /// Artifact description
        #[arg(long)]
        description: String,

        /// Artifact type
        #[arg(long = "type")]
        file_type: String,

        /// Artifact architecture
        #[arg(long)]
        architecture: String,

        /// Artifact scope
        #[arg(long)]
        scope: String,

        /// Artifact version
        #[arg(long)]
        version: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
