//! CLI command implementations
//!
//! `serve` builds the HTTP server and runs it on a dedicated runtime;
//! `push` uploads one file to a running server. Both commands report their
//! first failure and stop; nothing is retried.

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::client::{ArtifactClient, PushRequest};
use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Initializes logging, parses arguments, and dispatches to the
/// appropriate command. This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { address, port, dir } => serve(address, port, dir),
        Command::Push {
            address,
            port,
            file,
            description,
            file_type,
            architecture,
            scope,
            version,
        } => push(
            address,
            port,
            PushRequest {
                file,
                description,
                file_type,
                architecture,
                scope,
                version,
            },
        ),
    }
}

/// Run the artifact store server until it is stopped
pub fn serve(address: String, port: u16, dir: PathBuf) -> CliResult<()> {
    let config = HttpServerConfig {
        address,
        port,
        storage_dir: dir,
    };

    let server = HttpServer::with_config(config).map_err(|e| CliError::Server(e.to_string()))?;

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::Runtime(e.to_string()))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    })
}

/// Upload a single file and print the server's confirmation
pub fn push(address: String, port: u16, request: PushRequest) -> CliResult<()> {
    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::Runtime(e.to_string()))?;

    let reply = rt.block_on(async {
        let client = ArtifactClient::new(&address, port)?;
        client.push(&request).await
    })?;

    println!("{}", reply);
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("depot=info,tower_http=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
