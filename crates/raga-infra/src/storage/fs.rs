//! Filesystem-rooted object store.
//!
//! Keys map to paths under the configured root; the content type recorded
//! at put time is kept in a `.ctype` sidecar next to the object.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use raga_core::ports::{ObjectInfo, ObjectStore, StoreError, StoredObject};

const SIDECAR_SUFFIX: &str = ".ctype";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Keys are flat-namespace names with optional `/` separators; path
    /// traversal and absolute keys are rejected before touching the disk.
    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() || key.starts_with('/') || key.ends_with(SIDECAR_SUFFIX) {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        if key.split('/').any(|part| part.is_empty() || part == "." || part == "..") {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }

    fn backend_err(e: std::io::Error) -> StoreError {
        StoreError::Backend(e.to_string())
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(Self::backend_err)?;
        }
        fs::write(&path, bytes).await.map_err(Self::backend_err)?;

        let sidecar = sidecar_path(&path);
        fs::write(&sidecar, content_type.as_bytes())
            .await
            .map_err(Self::backend_err)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError> {
        let path = self.path_for(key)?;
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::backend_err(e)),
        };

        let content_type = match fs::read_to_string(sidecar_path(&path)).await {
            Ok(content_type) => content_type,
            Err(_) => DEFAULT_CONTENT_TYPE.to_string(),
        };

        Ok(Some(StoredObject {
            key: key.to_string(),
            content_type,
            bytes,
        }))
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(Self::backend_err(e)),
        }
        let _ = fs::remove_file(sidecar_path(&path)).await;
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<ObjectInfo>, StoreError> {
        let mut keys = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = match fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(Self::backend_err(e)),
            };

            while let Some(entry) = entries.next_entry().await.map_err(Self::backend_err)? {
                let path = entry.path();
                let file_type = entry.file_type().await.map_err(Self::backend_err)?;
                if file_type.is_dir() {
                    pending.push(path);
                    continue;
                }

                let Ok(relative) = path.strip_prefix(&self.root) else {
                    continue;
                };
                let key = relative.to_string_lossy().replace('\\', "/");
                if key.ends_with(SIDECAR_SUFFIX) || !key.starts_with(prefix) {
                    continue;
                }

                let size = entry.metadata().await.map_err(Self::backend_err)?.len();
                let content_type = match fs::read_to_string(sidecar_path(&path)).await {
                    Ok(content_type) => content_type,
                    Err(_) => DEFAULT_CONTENT_TYPE.to_string(),
                };
                keys.push(ObjectInfo {
                    key,
                    content_type,
                    size,
                });
            }
        }

        keys.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(keys)
    }
}

fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(SIDECAR_SUFFIX);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path());

        store
            .put("press-photos/a.jpg", "image/jpeg", vec![9, 9])
            .await
            .unwrap();

        let object = store.get("press-photos/a.jpg").await.unwrap().unwrap();
        assert_eq!(object.content_type, "image/jpeg");
        assert_eq!(object.bytes, vec![9, 9]);

        let listed = store.list("press-photos/").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].key, "press-photos/a.jpg");

        store.delete("press-photos/a.jpg").await.unwrap();
        assert!(store.get("press-photos/a.jpg").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn traversal_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path());

        for bad in ["../escape", "/absolute", "a//b", ""] {
            assert!(
                store.put(bad, "text/plain", vec![]).await.is_err(),
                "accepted {bad:?}"
            );
        }
    }

    #[tokio::test]
    async fn missing_object_is_none_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path());
        assert!(store.get("absent.txt").await.unwrap().is_none());
    }
}
