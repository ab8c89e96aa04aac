//! In-memory object store - used in tests and when no storage root is
//! configured. Objects are lost on process restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use raga_core::ports::{ObjectInfo, ObjectStore, StoreError, StoredObject};

/// In-memory object store over a BTreeMap, so listings come back in key
/// order without sorting.
#[derive(Default)]
pub struct InMemoryObjectStore {
    store: RwLock<BTreeMap<String, (String, Vec<u8>)>>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey("empty key".to_string()));
        }
        self.store
            .write()
            .await
            .insert(key.to_string(), (content_type.to_string(), bytes));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError> {
        Ok(self
            .store
            .read()
            .await
            .get(key)
            .map(|(content_type, bytes)| StoredObject {
                key: key.to_string(),
                content_type: content_type.clone(),
                bytes: bytes.clone(),
            }))
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store.write().await.remove(key);
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<ObjectInfo>, StoreError> {
        Ok(self
            .store
            .read()
            .await
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, (content_type, bytes))| ObjectInfo {
                key: key.clone(),
                content_type: content_type.clone(),
                size: bytes.len() as u64,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_get_delete() {
        let store = InMemoryObjectStore::new();
        store
            .put("press-photos/a.jpg", "image/jpeg", vec![1, 2, 3])
            .await
            .unwrap();

        let object = store.get("press-photos/a.jpg").await.unwrap().unwrap();
        assert_eq!(object.content_type, "image/jpeg");
        assert_eq!(object.bytes, vec![1, 2, 3]);

        store.delete("press-photos/a.jpg").await.unwrap();
        assert!(store.get("press-photos/a.jpg").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_filters_by_prefix_in_key_order() {
        let store = InMemoryObjectStore::new();
        store.put("b/two", "text/plain", vec![0; 2]).await.unwrap();
        store.put("a/one", "text/plain", vec![0; 1]).await.unwrap();
        store.put("a/three", "text/plain", vec![0; 3]).await.unwrap();

        let listed = store.list("a/").await.unwrap();
        let keys: Vec<_> = listed.iter().map(|info| info.key.as_str()).collect();
        assert_eq!(keys, vec!["a/one", "a/three"]);
    }

    #[tokio::test]
    async fn empty_key_is_rejected() {
        let store = InMemoryObjectStore::new();
        assert!(store.put("", "text/plain", vec![]).await.is_err());
    }
}
