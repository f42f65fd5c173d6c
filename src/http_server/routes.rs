//! # Artifact Routes
//!
//! The two artifact endpoints: upload (POST) and the directory listing
//! (GET). Raw payload downloads are not routed here; they are served by the
//! static fallback over the storage directory.

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::store::{content_digest, ArtifactStore, StoreError, StoreResult, UploadPayload};

use super::listing::render_table;

/// Path of the upload endpoint.
pub const UPLOAD_PATH: &str = "/upload";

/// Path of the listing endpoint.
pub const LISTING_PATH: &str = "/dir";

// ==================
// Shared State
// ==================

/// Artifact state shared across handlers
pub struct ArtifactState {
    pub store: ArtifactStore,
}

impl ArtifactState {
    /// Open the artifact store under `storage_dir`.
    pub fn new(storage_dir: &Path) -> StoreResult<Self> {
        Ok(Self {
            store: ArtifactStore::open(storage_dir)?,
        })
    }
}

// ==================
// Artifact Routes
// ==================

/// Create the upload and listing routes
pub fn artifact_routes(state: Arc<ArtifactState>) -> Router {
    Router::new()
        .route(UPLOAD_PATH, post(upload_handler))
        .route(LISTING_PATH, get(listing_handler))
        // Upload bodies are whole files in one JSON document; the default
        // request body size cap stays off.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Accepts a metadata-plus-file JSON payload, stores the decoded bytes
/// under their content digest, and answers with the digest. Bad JSON or bad
/// base64 rejects the request before anything is written.
async fn upload_handler(
    State(state): State<Arc<ArtifactState>>,
    body: Bytes,
) -> Result<String, (StatusCode, String)> {
    // Parsed from the raw body so that every malformed request maps to 400.
    let payload: UploadPayload = serde_json::from_slice(&body).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "Error parsing JSON request body".to_string(),
        )
    })?;

    let data = STANDARD.decode(&payload.file_base64).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "Error decoding base64 file contents".to_string(),
        )
    })?;

    let digest = content_digest(&data);

    let mut metadata = payload.metadata;
    metadata.strip_file_name();

    state
        .store
        .put(&digest, &data, &metadata)
        .map_err(store_error_response)?;

    tracing::info!(
        digest = %digest,
        file = %metadata.file_name,
        size = data.len(),
        "artifact stored"
    );

    Ok(format!("File {} uploaded successfully.", digest))
}

/// Renders every stored sidecar as one HTML table.
async fn listing_handler(
    State(state): State<Arc<ArtifactState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let rows = state.store.list_metadata().map_err(store_error_response)?;
    Ok(Html(render_table(&rows)))
}

fn store_error_response(error: StoreError) -> (StatusCode, String) {
    tracing::error!(error = %error, "store operation failed");
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, error.to_string())
}
