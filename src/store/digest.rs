//! Content digest computation for stored artifacts.
//!
//! The digest of the raw payload bytes is the storage key: the payload file
//! and its metadata sidecar both take their base name from it. SHA-256,
//! rendered as lowercase hex.

use sha2::{Digest, Sha256};

/// Computes the lowercase hex SHA-256 digest of the provided bytes.
///
/// This function is deterministic: the same input always produces the same
/// output.
pub fn content_digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
