//! # Artifact Storage Module
//!
//! Content-addressed persistence: the digest of the raw bytes names the
//! payload file, and a JSON sidecar next to it carries the descriptive
//! metadata.

pub mod artifacts;
pub mod digest;
pub mod errors;
pub mod metadata;

pub use artifacts::{ArtifactStore, META_SUFFIX};
pub use digest::content_digest;
pub use errors::{StoreError, StoreResult};
pub use metadata::{ArtifactMetadata, UploadPayload};
