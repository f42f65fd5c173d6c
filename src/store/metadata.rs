//! # Artifact Metadata
//!
//! The descriptive record stored alongside each payload, and the JSON
//! envelope that carries it to the upload endpoint. Wire and sidecar field
//! names are pinned by the serde renames and must not change: existing
//! sidecars and remote clients depend on them.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Descriptive record for one stored artifact.
///
/// `creation_date` is the upload timestamp (RFC 3339) and `origin_host` the
/// uploading machine's hostname; both are filled in client-side. Their wire
/// names (`creationdate`, `created_at`) are part of the sidecar format.
/// Fields absent from a sidecar or an upload body deserialize as empty
/// strings; the server does not re-validate what clients send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactMetadata {
    pub description: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub architecture: String,
    pub scope: String,
    #[serde(rename = "creationdate")]
    pub creation_date: String,
    #[serde(rename = "created_at")]
    pub origin_host: String,
    #[serde(rename = "FileName")]
    pub file_name: String,
    pub version: String,
}

impl ArtifactMetadata {
    /// Reduces the original file name to its base name, dropping any leading
    /// path components so that client-side paths never leak into storage.
    pub fn strip_file_name(&mut self) {
        if let Some(base) = Path::new(&self.file_name).file_name() {
            self.file_name = base.to_string_lossy().into_owned();
        }
    }
}

/// JSON body accepted by the upload endpoint. Like the metadata record,
/// missing keys deserialize as empty values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadPayload {
    pub metadata: ArtifactMetadata,
    pub file_base64: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArtifactMetadata {
        ArtifactMetadata {
            description: "nightly build".to_string(),
            file_type: "binary".to_string(),
            architecture: "x86_64".to_string(),
            scope: "internal".to_string(),
            creation_date: "2024-05-01T12:00:00+00:00".to_string(),
            origin_host: "buildhost".to_string(),
            file_name: "tool.bin".to_string(),
            version: "1.2.3".to_string(),
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "FileName",
                "architecture",
                "created_at",
                "creationdate",
                "description",
                "scope",
                "type",
                "version",
            ]
        );
    }

    #[test]
    fn test_deserialize_from_sidecar_json() {
        let raw = r#"{
            "description": "nightly build",
            "type": "binary",
            "architecture": "x86_64",
            "scope": "internal",
            "creationdate": "2024-05-01T12:00:00+00:00",
            "created_at": "buildhost",
            "FileName": "tool.bin",
            "version": "1.2.3"
        }"#;

        let metadata: ArtifactMetadata = serde_json::from_str(raw).unwrap();
        assert_eq!(metadata, sample());
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let metadata: ArtifactMetadata =
            serde_json::from_str(r#"{"description": "only field"}"#).unwrap();
        assert_eq!(metadata.description, "only field");
        assert_eq!(metadata.file_type, "");
        assert_eq!(metadata.file_name, "");
    }

    #[test]
    fn test_strip_file_name_drops_directories() {
        let mut metadata = sample();
        metadata.file_name = "builds/2024/tool.bin".to_string();
        metadata.strip_file_name();
        assert_eq!(metadata.file_name, "tool.bin");
    }

    #[test]
    fn test_strip_file_name_keeps_bare_names() {
        let mut metadata = sample();
        metadata.strip_file_name();
        assert_eq!(metadata.file_name, "tool.bin");
    }

    #[test]
    fn test_upload_payload_shape() {
        let payload = UploadPayload {
            metadata: sample(),
            file_base64: "aGVsbG8=".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("metadata").is_some());
        assert_eq!(
            value.get("file_base64").and_then(|v| v.as_str()),
            Some("aGVsbG8=")
        );
    }
}
