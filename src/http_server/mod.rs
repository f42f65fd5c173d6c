//! # HTTP Server Module
//!
//! The axum server for the artifact store.
//!
//! # Endpoints
//!
//! - `POST /upload` - Upload an artifact with its metadata
//! - `GET /dir` - HTML listing of stored artifacts
//! - `GET /health` - Health check
//! - `GET /<digest>` - Raw artifact download (static fallback)

pub mod config;
pub mod listing;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use routes::{ArtifactState, LISTING_PATH, UPLOAD_PATH};
pub use server::HttpServer;
