//! # HTTP Server
//!
//! The artifact server: upload and listing routes, a health check, and a
//! static-file fallback that serves stored payloads by digest name.

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::store::StoreResult;

use super::config::HttpServerConfig;
use super::routes::{artifact_routes, ArtifactState, LISTING_PATH, UPLOAD_PATH};

/// HTTP Server for the artifact store
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server, opening the artifact store named by the
    /// configuration.
    pub fn with_config(config: HttpServerConfig) -> StoreResult<Self> {
        let router = Self::build_router(&config)?;
        Ok(Self { config, router })
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig) -> StoreResult<Router> {
        let state = Arc::new(ArtifactState::new(&config.storage_dir)?);

        // Any path that is not an endpoint serves the raw stored files, so
        // listing links resolve without a dedicated download route.
        let static_files = ServeDir::new(&config.storage_dir);

        Ok(Router::new()
            // Health check at root level
            .route("/health", get(health_handler))
            // Upload and listing endpoints
            .merge(artifact_routes(state))
            // Raw payload downloads by digest name
            .fallback_service(static_files)
            // Request-level logging
            .layer(TraceLayer::new_for_http()))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();

        println!("Starting artifact store server on {}", addr);
        println!(
            "Storing artifacts in {}",
            self.config.storage_dir.display()
        );
        println!("Endpoints:");
        println!("  - POST {} - Upload an artifact", UPLOAD_PATH);
        println!("  - GET {} - Directory listing", LISTING_PATH);
        println!("  - GET /<digest> - Raw artifact download");
        println!("  - GET /health - Health check");

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
