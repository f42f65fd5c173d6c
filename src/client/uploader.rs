//! # Upload Client
//!
//! Builds the metadata-plus-file payload for a local file and pushes it to
//! a running artifact server in a single request. The whole file is read
//! into memory and sent as one base64-encoded JSON body; there is no retry
//! and no chunking.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;

use crate::http_server::UPLOAD_PATH;
use crate::store::{ArtifactMetadata, UploadPayload};

use super::errors::{ClientError, ClientResult};

/// Bound on establishing the connection to the server. The transfer itself
/// is not time-capped, so an upload takes as long as the file needs.
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// One upload: the local file and its required descriptive fields.
#[derive(Debug, Clone)]
pub struct PushRequest {
    pub file: PathBuf,
    pub description: String,
    pub file_type: String,
    pub architecture: String,
    pub scope: String,
    pub version: String,
}

impl PushRequest {
    /// Reject empty required fields before anything is read or sent.
    pub fn validate(&self) -> ClientResult<()> {
        if self.file.as_os_str().is_empty() {
            return Err(ClientError::MissingField("file"));
        }
        if self.description.is_empty() {
            return Err(ClientError::MissingField("description"));
        }
        if self.file_type.is_empty() {
            return Err(ClientError::MissingField("type"));
        }
        if self.architecture.is_empty() {
            return Err(ClientError::MissingField("architecture"));
        }
        if self.scope.is_empty() {
            return Err(ClientError::MissingField("scope"));
        }
        if self.version.is_empty() {
            return Err(ClientError::MissingField("version"));
        }
        Ok(())
    }

    /// Build the metadata record: descriptive fields copied from the
    /// request, timestamp and hostname filled in here, file name reduced to
    /// its base name.
    fn metadata(&self) -> ArtifactMetadata {
        let origin_host = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut metadata = ArtifactMetadata {
            description: self.description.clone(),
            file_type: self.file_type.clone(),
            architecture: self.architecture.clone(),
            scope: self.scope.clone(),
            creation_date: Utc::now().to_rfc3339(),
            origin_host,
            file_name: self.file.to_string_lossy().into_owned(),
            version: self.version.clone(),
        };
        metadata.strip_file_name();
        metadata
    }
}

/// HTTP client for the artifact server's upload endpoint.
#[derive(Debug, Clone)]
pub struct ArtifactClient {
    client: reqwest::Client,
    upload_url: String,
}

impl ArtifactClient {
    /// Create a client targeting the server at `address`:`port`.
    pub fn new(address: &str, port: u16) -> ClientResult<Self> {
        Self::from_base_url(&format!("http://{}:{}", address, port))
    }

    /// Create a client from a full base URL, e.g. `http://127.0.0.1:8080`.
    pub fn from_base_url(base_url: &str) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            upload_url: format!("{}{}", base_url.trim_end_matches('/'), UPLOAD_PATH),
        })
    }

    /// Read the file, build the payload, and push it.
    ///
    /// Fails without sending when a required field is empty; fails without
    /// retrying on any transport or status error. Returns the server's
    /// confirmation body.
    pub async fn push(&self, request: &PushRequest) -> ClientResult<String> {
        request.validate()?;

        let contents = fs::read(&request.file).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ClientError::FileNotFound(request.file.display().to_string())
            } else {
                ClientError::Io(e.to_string())
            }
        })?;

        let payload = UploadPayload {
            metadata: request.metadata(),
            file_base64: STANDARD.encode(&contents),
        };

        tracing::info!(
            file = %payload.metadata.file_name,
            size = contents.len(),
            url = %self.upload_url,
            "uploading artifact"
        );

        let response = self
            .client
            .post(&self.upload_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if status != reqwest::StatusCode::OK {
            return Err(ClientError::UnexpectedStatus(
                status.as_u16(),
                body.trim().to_string(),
            ));
        }

        Ok(body)
    }
}
