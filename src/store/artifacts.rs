//! # Artifact Store
//!
//! Persistence for content-addressed artifacts: one raw payload file named
//! by its digest plus one `.meta` JSON sidecar per artifact, in a single
//! flat directory. Payloads carry no extension and no trace of their
//! original name; everything descriptive lives in the sidecar.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use super::metadata::ArtifactMetadata;

/// Suffix that marks a metadata sidecar next to its payload file.
pub const META_SUFFIX: &str = ".meta";

/// Flat-directory store for artifact payloads and their sidecars.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Open a store rooted at `root`, creating the directory if absent.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(Self { root })
    }

    /// Directory holding the stored artifacts.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn payload_path(&self, digest: &str) -> PathBuf {
        self.root.join(digest)
    }

    fn sidecar_path(&self, digest: &str) -> PathBuf {
        self.root.join(format!("{}{}", digest, META_SUFFIX))
    }

    /// Write the payload and its metadata sidecar for `digest`, overwriting
    /// any previous pair stored under the same digest.
    ///
    /// The two writes are sequential: a payload that lands before a failing
    /// sidecar write is not rolled back.
    pub fn put(&self, digest: &str, data: &[u8], metadata: &ArtifactMetadata) -> StoreResult<()> {
        fs::write(self.payload_path(digest), data).map_err(|e| StoreError::Io(e.to_string()))?;

        let json =
            serde_json::to_vec(metadata).map_err(|e| StoreError::Internal(e.to_string()))?;
        fs::write(self.sidecar_path(digest), json).map_err(|e| StoreError::Io(e.to_string()))?;

        Ok(())
    }

    /// Enumerate every metadata sidecar in the store, pairing each parsed
    /// record with the digest name of its payload file.
    ///
    /// Order is directory-enumeration order. A single sidecar that fails to
    /// parse aborts the whole listing; there are no partial results.
    pub fn list_metadata(&self) -> StoreResult<Vec<(String, ArtifactMetadata)>> {
        let mut entries = Vec::new();

        let dir = fs::read_dir(&self.root).map_err(|e| StoreError::Io(e.to_string()))?;
        for entry in dir {
            let entry = entry.map_err(|e| StoreError::Io(e.to_string()))?;
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }

            let name = entry.file_name();
            let Some(stored_name) = name.to_str().and_then(|n| n.strip_suffix(META_SUFFIX))
            else {
                continue;
            };

            let raw = fs::read(entry.path()).map_err(|e| StoreError::Io(e.to_string()))?;
            let metadata: ArtifactMetadata = serde_json::from_slice(&raw).map_err(|e| {
                StoreError::Parse(name.to_string_lossy().into_owned(), e.to_string())
            })?;

            entries.push((stored_name.to_string(), metadata));
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::digest::content_digest;
    use tempfile::TempDir;

    fn sample_metadata(file_name: &str) -> ArtifactMetadata {
        ArtifactMetadata {
            description: "test artifact".to_string(),
            file_type: "doc".to_string(),
            architecture: "any".to_string(),
            scope: "internal".to_string(),
            creation_date: "2024-05-01T12:00:00+00:00".to_string(),
            origin_host: "buildhost".to_string(),
            file_name: file_name.to_string(),
            version: "1.0".to_string(),
        }
    }

    #[test]
    fn test_open_creates_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("store");

        let store = ArtifactStore::open(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(store.root(), root.as_path());
    }

    #[test]
    fn test_put_writes_payload_and_sidecar() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::open(dir.path()).unwrap();

        let data = b"hello";
        let digest = content_digest(data);
        let metadata = sample_metadata("notes.txt");
        store.put(&digest, data, &metadata).unwrap();

        let payload = fs::read(dir.path().join(&digest)).unwrap();
        assert_eq!(payload, data);

        let raw = fs::read(dir.path().join(format!("{}.meta", digest))).unwrap();
        let stored: ArtifactMetadata = serde_json::from_slice(&raw).unwrap();
        assert_eq!(stored, metadata);
    }

    #[test]
    fn test_put_same_digest_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::open(dir.path()).unwrap();

        let data = b"same bytes";
        let digest = content_digest(data);
        store.put(&digest, data, &sample_metadata("first.txt")).unwrap();
        store.put(&digest, data, &sample_metadata("second.txt")).unwrap();

        // Still exactly one payload and one sidecar.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);

        let entries = store.list_metadata().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1.file_name, "second.txt");
    }

    #[test]
    fn test_list_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::open(dir.path()).unwrap();
        assert!(store.list_metadata().unwrap().is_empty());
    }

    #[test]
    fn test_list_pairs_digest_with_metadata() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::open(dir.path()).unwrap();

        let first = content_digest(b"first");
        let second = content_digest(b"second");
        store.put(&first, b"first", &sample_metadata("a.txt")).unwrap();
        store.put(&second, b"second", &sample_metadata("b.txt")).unwrap();

        let mut entries = store.list_metadata().unwrap();
        entries.sort_by(|a, b| a.1.file_name.cmp(&b.1.file_name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, first);
        assert_eq!(entries[0].1.file_name, "a.txt");
        assert_eq!(entries[1].0, second);
        assert_eq!(entries[1].1.file_name, "b.txt");
    }

    #[test]
    fn test_list_ignores_files_without_meta_suffix() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::open(dir.path()).unwrap();

        let digest = content_digest(b"payload");
        store.put(&digest, b"payload", &sample_metadata("p.bin")).unwrap();
        fs::write(dir.path().join("README"), b"not an artifact").unwrap();

        let entries = store.list_metadata().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, digest);
    }

    #[test]
    fn test_list_skips_directories() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::open(dir.path()).unwrap();

        fs::create_dir(dir.path().join("subdir.meta")).unwrap();
        let digest = content_digest(b"payload");
        store.put(&digest, b"payload", &sample_metadata("p.bin")).unwrap();

        let entries = store.list_metadata().unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_list_aborts_on_malformed_sidecar() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::open(dir.path()).unwrap();

        let digest = content_digest(b"good");
        store.put(&digest, b"good", &sample_metadata("good.txt")).unwrap();
        fs::write(dir.path().join("deadbeef.meta"), b"{not json").unwrap();

        let error = store.list_metadata().unwrap_err();
        assert!(matches!(error, StoreError::Parse(_, _)));
    }

    #[test]
    fn test_put_fails_when_root_is_gone() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("store");
        let store = ArtifactStore::open(&root).unwrap();

        fs::remove_dir_all(&root).unwrap();

        let error = store
            .put("abc123", b"data", &sample_metadata("x.bin"))
            .unwrap_err();
        assert!(matches!(error, StoreError::Io(_)));
    }
}
